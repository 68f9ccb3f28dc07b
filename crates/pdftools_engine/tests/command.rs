use std::ffi::OsString;
use std::path::{Path, PathBuf};

use pdftools_core::{
    AdvancedSettings, ColorImageSettings, CompatibilityLevel, JobInput, ObjectUrl,
    OperationRequest, PdfSetting,
};
use pdftools_engine::build_ghostscript_args;
use pretty_assertions::assert_eq;

fn strings(args: Vec<OsString>) -> Vec<String> {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

fn request(input: JobInput) -> OperationRequest {
    OperationRequest {
        input,
        pdf_setting: Some(PdfSetting::Ebook),
        custom_command: None,
        advanced_settings: None,
        show_terminal_output: false,
        show_progress_bar: false,
    }
}

#[test]
fn compress_with_advanced_settings() {
    let mut req = request(JobInput::Compress {
        ps_data_url: ObjectUrl::from_id(1),
    });
    req.pdf_setting = Some(PdfSetting::Screen);
    req.advanced_settings = Some(AdvancedSettings {
        compatibility_level: CompatibilityLevel::V1_5,
        color_image_settings: ColorImageSettings {
            downsample: true,
            resolution: 150,
        },
    });

    let args = build_ghostscript_args(&req, &[PathBuf::from("in.pdf")], Path::new("out.pdf"));

    assert_eq!(
        strings(args),
        vec![
            "-sDEVICE=pdfwrite",
            "-dNOPAUSE",
            "-dBATCH",
            "-dSAFER",
            "-dPDFSETTINGS=/screen",
            "-dCompatibilityLevel=1.5",
            "-dDownsampleColorImages=true",
            "-dColorImageResolution=150",
            "-sOutputFile=out.pdf",
            "in.pdf",
        ]
    );
}

#[test]
fn merge_lists_inputs_in_order() {
    let req = request(JobInput::Merge {
        files: vec![ObjectUrl::from_id(1), ObjectUrl::from_id(2)],
    });
    let inputs = [PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];

    let args = strings(build_ghostscript_args(&req, &inputs, Path::new("m.pdf")));

    assert_eq!(&args[args.len() - 3..], &["-sOutputFile=m.pdf", "a.pdf", "b.pdf"]);
    assert!(args.contains(&"-dPDFSETTINGS=/ebook".to_string()));
}

#[test]
fn custom_command_is_redirected_to_staged_files() {
    let mut req = request(JobInput::Compress {
        ps_data_url: ObjectUrl::from_id(1),
    });
    req.pdf_setting = None;
    req.custom_command = Some(
        [
            "-sDEVICE=pdfwrite",
            "-dPDFSETTINGS=/screen",
            "-dNOPAUSE -dQUIET -dBATCH",
            "-sOutputFile=output.pdf input.pdf",
        ]
        .join(" "),
    );

    let inputs = [PathBuf::from("/tmp/x/input-0.pdf")];
    let args = build_ghostscript_args(&req, &inputs, Path::new("/tmp/x/output.pdf"));

    assert_eq!(
        strings(args),
        vec![
            "-sDEVICE=pdfwrite",
            "-dPDFSETTINGS=/screen",
            "-dNOPAUSE",
            "-dQUIET",
            "-dBATCH",
            "-sOutputFile=/tmp/x/output.pdf",
            "/tmp/x/input-0.pdf",
        ]
    );
}
