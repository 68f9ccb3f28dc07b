//! Turns view models into terminal lines in the active locale.
//!
//! The renderer remembers what it already printed so that repeated renders
//! of a growing view only emit the new part.

use pdftools_core::{AppViewModel, Operation, ProgressInfo, Translator, UiState};

const TERMINAL_PREFIX: &str = "  | ";

#[derive(Debug, Default)]
pub(crate) struct TerminalRenderer {
    last_state: UiState,
    printed_terminal: usize,
    last_progress: Option<ProgressInfo>,
}

impl TerminalRenderer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn render(&mut self, view: &AppViewModel) -> Vec<String> {
        let t = Translator::new(view.locale);
        let mut lines = Vec::new();
        let entered = self.last_state != view.ui_state;
        self.last_state = view.ui_state;

        match view.ui_state {
            UiState::Init => {
                self.printed_terminal = 0;
                self.last_progress = None;
            }
            UiState::Selected => {
                // The catalog's filesSelected reuses {{count}} as the plural
                // suffix, so only the rows are printed.
                if entered {
                    lines.push(t.t(view.operation.description_key()));
                    for file in &view.files {
                        lines.push(format!(
                            "  {}",
                            t.t_with(
                                "fileSize",
                                &[("filename", &file.filename), ("size", &file.byte_len)],
                            )
                        ));
                    }
                }
            }
            UiState::Loading => {
                if entered {
                    self.printed_terminal = 0;
                    self.last_progress = None;
                    lines.push(run_header(&t, view));
                    lines.push(t.t_with(
                        "processing",
                        &[("count", &plural_suffix(view.operation == Operation::Merge))],
                    ));
                }
                if let Some(progress) = view.progress {
                    if self.last_progress != Some(progress) {
                        self.last_progress = Some(progress);
                        lines.push(progress_line(&t, progress));
                    }
                }
                if view.show_terminal_output {
                    lines.extend(self.new_terminal_lines(&view.terminal));
                }
            }
            UiState::ToBeDownloaded => {
                if entered {
                    for link in &view.downloads {
                        lines.push(t.t_with("download", &[("filename", &link.filename)]));
                    }
                }
            }
            UiState::Error => {
                if entered {
                    lines.push(t.t("errorOccurred"));
                    lines.push(view.error_message.clone());
                }
            }
        }
        lines
    }

    fn new_terminal_lines(&mut self, terminal: &str) -> Vec<String> {
        if terminal.len() < self.printed_terminal {
            self.printed_terminal = 0;
        }
        let fresh = &terminal[self.printed_terminal..];
        // Only complete lines; the tail is printed once its newline arrives.
        let Some(end) = fresh.rfind('\n') else {
            return Vec::new();
        };
        self.printed_terminal += end + 1;
        fresh[..end]
            .split('\n')
            .map(|line| format!("{TERMINAL_PREFIX}{line}"))
            .collect()
    }
}

/// Operation and quality, e.g. `Compress PDF - eBook (small)`.
fn run_header(t: &Translator, view: &AppViewModel) -> String {
    let action = t.t(view.operation.submit_key());
    if view.use_custom_command {
        format!("{action} - {}", t.t("useCustomCommand"))
    } else if view.operation.uses_pdf_setting() {
        format!("{action} - {}", t.t(view.pdf_setting.label_key()))
    } else {
        action
    }
}

fn progress_line(t: &Translator, progress: ProgressInfo) -> String {
    match progress.percent() {
        Some(percent) => format!(
            "{} - {} ({})",
            t.t_with(
                "pageOf",
                &[("current", &progress.current_page), ("total", &progress.total)],
            ),
            t.t_with("percentComplete", &[("percent", &percent)]),
            t.t_with(
                "pagesProgress",
                &[("current", &progress.current), ("total", &progress.total)],
            ),
        ),
        None => t.t_with("processingPage", &[("page", &progress.current_page)]),
    }
}

fn plural_suffix(plural: bool) -> &'static str {
    if plural {
        "s"
    } else {
        ""
    }
}
