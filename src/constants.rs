//! Configuration constants for roundabout
//!
//! This module contains all configurable constants used throughout the
//! application.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the carousel animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🎠 ", // Standard carousel
        "🎠◐", // Quarter turn
        "🎠◓", // Half turn
        "🎠◑", // Three quarters
        "🎠◒", // Full turn
        "🎠○", // Empty circle
        "🎠●", // Full circle
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Import graph input configuration
pub mod graph {
    /// Default import graph document path when not specified
    pub const DEFAULT_GRAPH_FILE: &str = "imports.json";

    /// Annotation value that suppresses an import edge at load time
    pub const SUPPRESS_ANNOTATION: &str = "nocycle";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 7);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }

    #[test]
    fn test_graph_constants() {
        assert_eq!(graph::DEFAULT_GRAPH_FILE, "imports.json");
        assert_eq!(graph::SUPPRESS_ANNOTATION, "nocycle");
    }
}
