use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        let term = Term::stderr();
        Self {
            term,
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn get_carousel_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_loading(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Loading import graph...", style("🔍").cyan());
        let spinner = self.create_spinner("Reading graph document...");
        self.current_bar = Some(spinner);
    }

    pub fn finish_loading(&mut self, module_count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if module_count == 0 {
            eprintln!("\r{} No modules found in graph", style("✗").red());
        } else {
            eprintln!(
                "\r{} Graph loaded: {} module{}",
                style("✓").green(),
                style(module_count).yellow().bold(),
                if module_count == 1 { "" } else { "s" }
            );
        }
    }

    pub fn start_scan(&mut self) {
        eprintln!("\n{} Scanning packages for import cycles...", style("🔄").yellow());
    }

    pub fn scanning_package(&self, name: &str) {
        let _ = self.term.clear_line();
        eprint!(
            "\r{} Scanning package: {}... ",
            style(self.get_carousel_frame()).yellow(),
            style(name).green()
        );
    }

    pub fn finish_scan(&self, cycle_found: bool) {
        let _ = self.term.clear_line();
        if cycle_found {
            eprintln!("\r{} Cycle detected", style("⚠").yellow().bold());
        } else {
            eprintln!(
                "\r{} No cycles detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        }
    }
}
