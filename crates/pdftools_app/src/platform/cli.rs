//! Command-line surface of the `pdftools` binary.

use std::path::PathBuf;

use clap::Parser;
use engine_logging::LogDestination;
use pdftools_core::{CompatibilityLevel, Locale, Msg, Operation, PdfSetting, StagedFile};

/// Compress, merge, and split PDF files locally using Ghostscript
#[derive(Parser, Debug)]
#[command(name = "pdftools", version, long_about = None)]
pub struct Cli {
    /// Operation to run: compress, merge or split
    #[arg(value_parser = parse_operation)]
    pub operation: Operation,

    /// Input files; merge keeps this order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Quality preset: screen, ebook, printer, prepress or default
    #[arg(short, long, value_parser = parse_setting)]
    pub setting: Option<PdfSetting>,

    /// Raw Ghostscript arguments; must include -sDEVICE= and -sOutputFile=
    #[arg(long, allow_hyphen_values = true)]
    pub custom_command: Option<String>,

    /// Apply the advanced settings below
    #[arg(long)]
    pub advanced: bool,

    /// PDF compatibility level (1.3 to 1.7)
    #[arg(long, value_parser = parse_compat)]
    pub compat: Option<CompatibilityLevel>,

    /// Keep color images at their original resolution
    #[arg(long)]
    pub no_downsample: bool,

    /// Color image resolution in DPI
    #[arg(long)]
    pub resolution: Option<String>,

    /// First page to extract (split)
    #[arg(long)]
    pub start: Option<String>,

    /// Last page to extract (split)
    #[arg(long)]
    pub end: Option<String>,

    /// Echo Ghostscript console output
    #[arg(short, long)]
    pub terminal: bool,

    /// Show page progress
    #[arg(short, long)]
    pub progress: bool,

    /// Interface language: en or zh
    #[arg(long, value_parser = parse_locale)]
    pub lang: Option<Locale>,

    /// Directory the result is saved to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Ghostscript executable
    #[arg(long)]
    pub gs: Option<PathBuf>,

    /// RON config file (default: ./pdftools.ron when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log destination: file, terminal or both
    #[arg(long, value_parser = parse_log_destination)]
    pub log: Option<LogDestination>,
}

impl Cli {
    /// Form messages in the order a user would produce them: language, tab,
    /// then the fields. The tab switch resets the form, so it comes first.
    /// `fallback_setting` applies when no `--setting` was given.
    pub fn form_messages(&self, fallback_setting: Option<PdfSetting>) -> Vec<Msg> {
        let mut msgs = Vec::new();
        if let Some(locale) = self.lang {
            msgs.push(Msg::LanguageChanged(locale));
        }
        msgs.push(Msg::OperationSelected(self.operation));

        if let Some(setting) = self.setting.or(fallback_setting) {
            msgs.push(Msg::PdfSettingChanged(setting));
        }
        if let Some(command) = &self.custom_command {
            msgs.push(Msg::CustomCommandToggled(true));
            msgs.push(Msg::CustomCommandChanged(command.clone()));
        }
        if self.advanced {
            msgs.push(Msg::AdvancedSettingsToggled(true));
            if let Some(level) = self.compat {
                msgs.push(Msg::CompatibilityLevelChanged(level));
            }
            if self.no_downsample {
                msgs.push(Msg::DownsampleToggled(false));
            }
            if let Some(resolution) = &self.resolution {
                msgs.push(Msg::ResolutionChanged(resolution.clone()));
            }
        }
        if let Some(start) = &self.start {
            msgs.push(Msg::SplitStartChanged(start.clone()));
        }
        if let Some(end) = &self.end {
            msgs.push(Msg::SplitEndChanged(end.clone()));
        }
        msgs.push(Msg::TerminalOutputToggled(self.terminal));
        msgs.push(Msg::ProgressBarToggled(self.progress));
        msgs
    }
}

/// Full message script for one invocation: form, files, submit.
pub fn script(form: Vec<Msg>, staged: Vec<StagedFile>) -> Vec<Msg> {
    let mut msgs = form;
    msgs.push(Msg::FilesChosen(staged));
    msgs.push(Msg::Submit);
    msgs
}

fn parse_operation(name: &str) -> Result<Operation, String> {
    Operation::from_name(&name.to_ascii_lowercase())
        .ok_or_else(|| format!("unknown operation {name:?}; expected compress, merge or split"))
}

fn parse_setting(name: &str) -> Result<PdfSetting, String> {
    PdfSetting::from_name(name).ok_or_else(|| format!("unknown quality preset {name:?}"))
}

fn parse_compat(name: &str) -> Result<CompatibilityLevel, String> {
    CompatibilityLevel::from_name(name)
        .ok_or_else(|| format!("unsupported compatibility level {name:?}"))
}

fn parse_locale(code: &str) -> Result<Locale, String> {
    Locale::from_code(code).ok_or_else(|| format!("unsupported language {code:?}"))
}

fn parse_log_destination(name: &str) -> Result<LogDestination, String> {
    LogDestination::from_name(name).ok_or_else(|| format!("unknown log destination {name:?}"))
}
