use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Compress,
    Merge,
    Split,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Compress, Operation::Merge, Operation::Split];

    /// Name used on the wire and as the translation key of the tab label.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Compress => "compress",
            Operation::Merge => "merge",
            Operation::Split => "split",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// Only merge stages more than one file at a time.
    pub fn allows_multiple_files(self) -> bool {
        matches!(self, Operation::Merge)
    }

    /// Translation key of the submit button.
    pub fn submit_key(self) -> &'static str {
        match self {
            Operation::Compress => "compressPdf",
            Operation::Merge => "mergePdfs",
            Operation::Split => "splitPdf",
        }
    }

    /// Translation key of the tab description.
    pub fn description_key(self) -> &'static str {
        match self {
            Operation::Compress => "compressDesc",
            Operation::Merge => "mergeDesc",
            Operation::Split => "splitDesc",
        }
    }

    /// Whether the quality preset applies when not in custom-command mode.
    pub fn uses_pdf_setting(self) -> bool {
        matches!(self, Operation::Compress | Operation::Merge)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ghostscript `-dPDFSETTINGS` quality presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PdfSetting {
    #[serde(rename = "/screen")]
    Screen,
    #[default]
    #[serde(rename = "/ebook")]
    Ebook,
    #[serde(rename = "/printer")]
    Printer,
    #[serde(rename = "/prepress")]
    Prepress,
    #[serde(rename = "/default")]
    Default,
}

impl PdfSetting {
    pub const ALL: [PdfSetting; 5] = [
        PdfSetting::Screen,
        PdfSetting::Ebook,
        PdfSetting::Printer,
        PdfSetting::Prepress,
        PdfSetting::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PdfSetting::Screen => "/screen",
            PdfSetting::Ebook => "/ebook",
            PdfSetting::Printer => "/printer",
            PdfSetting::Prepress => "/prepress",
            PdfSetting::Default => "/default",
        }
    }

    /// Accepts both `/ebook` and `ebook`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let bare = name.strip_prefix('/').unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|setting| &setting.as_str()[1..] == bare)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            PdfSetting::Screen => "screenOptimized",
            PdfSetting::Ebook => "ebook",
            PdfSetting::Printer => "printer",
            PdfSetting::Prepress => "prepress",
            PdfSetting::Default => "default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    #[serde(rename = "1.3")]
    V1_3,
    #[default]
    #[serde(rename = "1.4")]
    V1_4,
    #[serde(rename = "1.5")]
    V1_5,
    #[serde(rename = "1.6")]
    V1_6,
    #[serde(rename = "1.7")]
    V1_7,
}

impl CompatibilityLevel {
    pub const ALL: [CompatibilityLevel; 5] = [
        CompatibilityLevel::V1_3,
        CompatibilityLevel::V1_4,
        CompatibilityLevel::V1_5,
        CompatibilityLevel::V1_6,
        CompatibilityLevel::V1_7,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CompatibilityLevel::V1_3 => "1.3",
            CompatibilityLevel::V1_4 => "1.4",
            CompatibilityLevel::V1_5 => "1.5",
            CompatibilityLevel::V1_6 => "1.6",
            CompatibilityLevel::V1_7 => "1.7",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }
}

pub const DEFAULT_COLOR_IMAGE_RESOLUTION: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorImageSettings {
    pub downsample: bool,
    pub resolution: u32,
}

impl Default for ColorImageSettings {
    fn default() -> Self {
        Self {
            downsample: true,
            resolution: DEFAULT_COLOR_IMAGE_RESOLUTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSettings {
    pub compatibility_level: CompatibilityLevel,
    pub color_image_settings: ColorImageSettings,
}

/// Parses the DPI field; anything that is not a positive integer falls back
/// to the default resolution.
pub fn parse_resolution(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => DEFAULT_COLOR_IMAGE_RESOLUTION,
    }
}

/// Page range exactly as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitRange {
    pub start_page: String,
    pub end_page: String,
}

/// Validated, 1-based inclusive page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRange {
    pub start_page: u32,
    pub end_page: u32,
}
