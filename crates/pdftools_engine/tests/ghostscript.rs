#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pdftools_core::{JobInput, OperationRequest, PageRange, PdfSetting};
use pdftools_engine::{
    DocumentProcessor, EngineError, GhostscriptProcessor, GhostscriptSettings, LineSink,
    ObjectStore, ProcessOutput, PDF_MEDIA_TYPE,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Stands in for `gs`: reports progress, copies the last argument to the
/// `-sOutputFile=` target.
const FAKE_GS: &str = r#"#!/bin/sh
out=""
last=""
for arg in "$@"; do
  case "$arg" in
    -sOutputFile=*) out="${arg#-sOutputFile=}" ;;
  esac
  last="$arg"
done
echo "Processing pages 1 through 2."
echo "Page 1"
echo "Page 2"
cp "$last" "$out"
"#;

const FAILING_GS: &str = r#"#!/bin/sh
echo "Page 1"
echo "GPL Ghostscript: Unrecoverable error, exit code 1" >&2
echo "" >&2
exit 1
"#;

const SILENT_GS: &str = "#!/bin/sh\nexit 0\n";

#[derive(Default)]
struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl LineSink for RecordingSink {
    fn line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

fn install_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-gs");
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn processor(executable: PathBuf, store: &ObjectStore) -> GhostscriptProcessor {
    GhostscriptProcessor::new(GhostscriptSettings { executable }, store.clone())
}

fn split_request(store: &ObjectStore, bytes: &[u8]) -> OperationRequest {
    OperationRequest {
        input: JobInput::Split {
            ps_data_url: store.create(bytes.to_vec(), PDF_MEDIA_TYPE),
            split_range: PageRange {
                start_page: 1,
                end_page: 2,
            },
        },
        pdf_setting: Some(PdfSetting::Ebook),
        custom_command: None,
        advanced_settings: None,
        show_terminal_output: true,
        show_progress_bar: true,
    }
}

#[tokio::test]
async fn forwards_stdout_lines_and_stores_output() {
    let temp = TempDir::new().unwrap();
    let store = ObjectStore::new();
    let gs = processor(install_script(temp.path(), FAKE_GS), &store);
    let request = split_request(&store, b"%PDF-input");
    let sink = RecordingSink::default();

    let output = gs.process(&request, Some(&sink)).await.unwrap();

    let ProcessOutput::Pdf { pdf_data_url } = output else {
        panic!("expected a pdf, got {output:?}");
    };
    assert_eq!(
        store.fetch(&pdf_data_url).unwrap().bytes.as_ref(),
        b"%PDF-input"
    );
    assert_eq!(
        *sink.lines.lock().unwrap(),
        vec!["Processing pages 1 through 2.", "Page 1", "Page 2"]
    );
}

#[tokio::test]
async fn runs_without_a_sink() {
    let temp = TempDir::new().unwrap();
    let store = ObjectStore::new();
    let gs = processor(install_script(temp.path(), FAKE_GS), &store);
    let request = split_request(&store, b"%PDF-x");

    let output = gs.process(&request, None).await.unwrap();
    assert!(matches!(output, ProcessOutput::Pdf { .. }));
}

#[tokio::test]
async fn non_zero_exit_reports_last_stderr_line() {
    let temp = TempDir::new().unwrap();
    let store = ObjectStore::new();
    let gs = processor(install_script(temp.path(), FAILING_GS), &store);
    let request = split_request(&store, b"%PDF-x");

    let output = gs.process(&request, None).await.unwrap();
    assert_eq!(
        output,
        ProcessOutput::Error {
            error: "GPL Ghostscript: Unrecoverable error, exit code 1".to_string()
        }
    );
}

#[tokio::test]
async fn missing_output_is_an_engine_error() {
    let temp = TempDir::new().unwrap();
    let store = ObjectStore::new();
    let gs = processor(install_script(temp.path(), SILENT_GS), &store);
    let request = split_request(&store, b"%PDF-x");

    let output = gs.process(&request, None).await.unwrap();
    assert!(matches!(output, ProcessOutput::Error { error } if error.contains("did not produce")));
}

#[tokio::test]
async fn missing_executable_fails_to_spawn() {
    let temp = TempDir::new().unwrap();
    let store = ObjectStore::new();
    let gs = processor(temp.path().join("no-such-gs"), &store);
    let request = split_request(&store, b"%PDF-x");

    let result = gs.process(&request, None).await;
    assert!(matches!(result, Err(EngineError::Spawn { .. })));
}

#[tokio::test]
async fn revoked_input_is_an_object_error() {
    let temp = TempDir::new().unwrap();
    let store = ObjectStore::new();
    let gs = processor(install_script(temp.path(), FAKE_GS), &store);
    let request = split_request(&store, b"%PDF-x");
    for url in request.input.inputs() {
        store.revoke(url);
    }

    let result = gs.process(&request, None).await;
    assert!(matches!(result, Err(EngineError::Object(_))));
}

#[tokio::test]
async fn relative_executable_resolves_from_working_directory() {
    let temp = tempfile::Builder::new()
        .prefix("fake-gs-")
        .tempdir_in(".")
        .unwrap();
    install_script(temp.path(), FAKE_GS);
    let dir_name = temp.path().file_name().unwrap();
    let relative = Path::new(".").join(dir_name).join("fake-gs");
    assert!(relative.is_relative());

    let store = ObjectStore::new();
    let gs = processor(relative, &store);
    let request = split_request(&store, b"%PDF-relative");

    let output = gs.process(&request, None).await.unwrap();
    let ProcessOutput::Pdf { pdf_data_url } = output else {
        panic!("expected a pdf, got {output:?}");
    };
    assert_eq!(
        store.fetch(&pdf_data_url).unwrap().bytes.as_ref(),
        b"%PDF-relative"
    );
}
