//! Page progress inferred from the engine's console output.
//!
//! The engine does not report progress structurally; it prints lines such as
//! `Processing pages 1 through 42.` and `Page 7`. A [`LineAdapter`] turns one
//! line into at most one [`ProgressEvent`], and [`ProgressInfo::apply`] folds
//! events into counters. Unknown lines are never an error.

use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressInfo {
    pub current: u32,
    pub total: u32,
    pub current_page: u32,
}

impl ProgressInfo {
    pub fn apply(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::TotalPages(total) => self.total = total,
            ProgressEvent::Page(page) => {
                self.current_page = page;
                self.current = page;
            }
        }
    }

    /// Completion percentage, rounded. Not clamped: out-of-order lines can
    /// push it past 100.
    pub fn percent(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let ratio = f64::from(self.current) / f64::from(self.total);
        Some((ratio * 100.0).round() as u32)
    }

    /// Whether there is anything worth drawing yet.
    pub fn has_started(&self) -> bool {
        self.total > 0 || self.current_page > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    TotalPages(u32),
    Page(u32),
}

/// Maps one line of engine output to a progress event.
pub trait LineAdapter: Send + Sync {
    /// Identifies the output dialect this adapter understands.
    fn version(&self) -> &'static str;

    fn parse(&self, line: &str) -> Option<ProgressEvent>;
}

static TOTAL_PAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Processing pages \d+ through (\d+)").expect("valid total-pages pattern")
});
static PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Page (\d+)$").expect("valid page pattern"));

/// Ghostscript's `pdfwrite` console phrasing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GhostscriptLineAdapter;

impl LineAdapter for GhostscriptLineAdapter {
    fn version(&self) -> &'static str {
        "ghostscript-pdfwrite/1"
    }

    fn parse(&self, line: &str) -> Option<ProgressEvent> {
        if let Some(total) = capture_number(&TOTAL_PAGES, line) {
            return Some(ProgressEvent::TotalPages(total));
        }
        capture_number(&PAGE, line).map(ProgressEvent::Page)
    }
}

// Numbers that overflow u32 are treated as no match.
fn capture_number(pattern: &Regex, line: &str) -> Option<u32> {
    pattern.captures(line)?.get(1)?.as_str().parse().ok()
}

/// Convenience for the default adapter.
pub fn parse_line(line: &str) -> Option<ProgressEvent> {
    GhostscriptLineAdapter.parse(line)
}
