use std::ffi::OsString;
use std::path::{Path, PathBuf};

use pdftools_core::{AdvancedSettings, JobInput, OperationRequest, OUTPUT_FILE_TOKEN};

/// Always passed in preset mode.
pub const BASE_ARGS: [&str; 4] = ["-sDEVICE=pdfwrite", "-dNOPAUSE", "-dBATCH", "-dSAFER"];

/// Argument vector for one Ghostscript invocation.
///
/// In preset mode the arguments are assembled from the request. In custom
/// mode the user's options are kept as typed, except that every
/// `-sOutputFile=` is pointed at `output` and bare file names are dropped in
/// favour of the staged `inputs`. Split ranges apply in both modes.
pub fn build_ghostscript_args(
    request: &OperationRequest,
    inputs: &[PathBuf],
    output: &Path,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();

    match request.custom_command.as_deref() {
        Some(command) => {
            let mut has_output = false;
            for token in command.split_whitespace() {
                if token.starts_with(OUTPUT_FILE_TOKEN) {
                    has_output = true;
                    args.push(output_arg(output));
                } else if token.starts_with('-') {
                    args.push(token.into());
                }
            }
            if !has_output {
                args.push(output_arg(output));
            }
            push_page_range(&mut args, &request.input);
        }
        None => {
            args.extend(BASE_ARGS.iter().map(OsString::from));
            if request.operation().uses_pdf_setting() {
                if let Some(setting) = request.pdf_setting {
                    args.push(format!("-dPDFSETTINGS={}", setting.as_str()).into());
                }
            }
            push_page_range(&mut args, &request.input);
            if let Some(advanced) = &request.advanced_settings {
                push_advanced(&mut args, advanced);
            }
            args.push(output_arg(output));
        }
    }

    args.extend(inputs.iter().map(|path| path.as_os_str().to_os_string()));
    args
}

fn output_arg(output: &Path) -> OsString {
    let mut arg = OsString::from(OUTPUT_FILE_TOKEN);
    arg.push(output.as_os_str());
    arg
}

fn push_page_range(args: &mut Vec<OsString>, input: &JobInput) {
    if let JobInput::Split { split_range, .. } = input {
        args.push(format!("-dFirstPage={}", split_range.start_page).into());
        args.push(format!("-dLastPage={}", split_range.end_page).into());
    }
}

fn push_advanced(args: &mut Vec<OsString>, advanced: &AdvancedSettings) {
    args.push(
        format!(
            "-dCompatibilityLevel={}",
            advanced.compatibility_level.as_str()
        )
        .into(),
    );
    let color = advanced.color_image_settings;
    args.push(format!("-dDownsampleColorImages={}", color.downsample).into());
    if color.downsample {
        args.push(format!("-dColorImageResolution={}", color.resolution).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdftools_core::{ObjectUrl, PageRange};

    fn split_request(custom: Option<&str>) -> OperationRequest {
        OperationRequest {
            input: JobInput::Split {
                ps_data_url: ObjectUrl::from_id(1),
                split_range: PageRange {
                    start_page: 3,
                    end_page: 4,
                },
            },
            pdf_setting: custom.is_none().then_some(pdftools_core::PdfSetting::Ebook),
            custom_command: custom.map(str::to_string),
            advanced_settings: None,
            show_terminal_output: false,
            show_progress_bar: false,
        }
    }

    #[test]
    fn split_preset_skips_pdf_settings() {
        let args = build_ghostscript_args(
            &split_request(None),
            &[PathBuf::from("in.pdf")],
            Path::new("out.pdf"),
        );
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert!(!args.iter().any(|a| a.starts_with("-dPDFSETTINGS")));
        assert!(args.contains(&"-dFirstPage=3".to_string()));
        assert!(args.contains(&"-dLastPage=4".to_string()));
    }

    #[test]
    fn custom_command_without_output_gets_one() {
        let args = build_ghostscript_args(
            &split_request(Some("-sDEVICE=pdfwrite")),
            &[],
            Path::new("o.pdf"),
        );
        assert!(args.contains(&OsString::from("-sOutputFile=o.pdf")));
    }
}
