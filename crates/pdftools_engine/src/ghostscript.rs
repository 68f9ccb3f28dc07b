use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use engine_logging::{engine_debug, engine_info, engine_warn};
use pdftools_core::OperationRequest;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::command::build_ghostscript_args;
use crate::materialize::PDF_MEDIA_TYPE;
use crate::{DocumentProcessor, EngineError, LineSink, ObjectStore, ProcessOutput};

#[derive(Debug, Clone)]
pub struct GhostscriptSettings {
    /// Program to run; looked up on `PATH` when not absolute.
    pub executable: PathBuf,
}

impl Default for GhostscriptSettings {
    fn default() -> Self {
        let program = if cfg!(windows) { "gswin64c" } else { "gs" };
        Self {
            executable: PathBuf::from(program),
        }
    }
}

/// Runs requests through an external Ghostscript executable.
///
/// Inputs are copied out of the object store into a private temporary
/// directory, and the produced file is registered back into the store.
#[derive(Debug, Clone)]
pub struct GhostscriptProcessor {
    settings: GhostscriptSettings,
    store: ObjectStore,
}

impl GhostscriptProcessor {
    pub fn new(settings: GhostscriptSettings, store: ObjectStore) -> Self {
        Self { settings, store }
    }
}

#[async_trait::async_trait]
impl DocumentProcessor for GhostscriptProcessor {
    async fn process(
        &self,
        request: &OperationRequest,
        lines: Option<&dyn LineSink>,
    ) -> Result<ProcessOutput, EngineError> {
        let workdir = tempfile::tempdir()?;
        let mut inputs = Vec::new();
        for (index, url) in request.input.inputs().into_iter().enumerate() {
            let object = self.store.fetch(url)?;
            let path = workdir.path().join(format!("input-{index}.pdf"));
            tokio::fs::write(&path, &object.bytes).await?;
            inputs.push(path);
        }
        let output = workdir.path().join("output.pdf");
        let args = build_ghostscript_args(request, &inputs, &output);

        let program = self.settings.executable.display().to_string();
        let executable = resolve_executable(&self.settings.executable)?;
        engine_info!("running {} with {} args", program, args.len());
        engine_debug!("executable: {:?} args: {:?}", executable, args);

        let mut child = Command::new(&executable)
            .args(&args)
            .current_dir(workdir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: program.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let forward_stdout = async {
            if let Some(stdout) = stdout {
                for_each_line(BufReader::new(stdout), |line| {
                    if let Some(sink) = lines {
                        sink.line(line);
                    }
                })
                .await?;
            }
            Ok::<(), io::Error>(())
        };
        let collect_stderr = async {
            let mut collected = Vec::new();
            if let Some(stderr) = stderr {
                for_each_line(BufReader::new(stderr), |line| {
                    collected.push(line.to_string());
                })
                .await?;
            }
            Ok::<Vec<String>, io::Error>(collected)
        };
        let (stdout_result, stderr_result) = tokio::join!(forward_stdout, collect_stderr);
        stdout_result?;
        let stderr_lines = stderr_result?;
        let status = child.wait().await?;

        if !status.success() {
            let error = stderr_lines
                .iter()
                .rev()
                .map(|line| line.trim())
                .find(|line| !line.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("{program} exited with {status}"));
            engine_warn!("{} failed: {}", program, error);
            return Ok(ProcessOutput::Error { error });
        }

        let bytes = match tokio::fs::read(&output).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(ProcessOutput::Error {
                    error: format!("{program} did not produce an output file"),
                });
            }
            Err(err) => return Err(err.into()),
        };
        engine_info!("{} produced {} bytes", program, bytes.len());
        let pdf_data_url = self.store.create(bytes, PDF_MEDIA_TYPE);
        Ok(ProcessOutput::Pdf { pdf_data_url })
    }
}

/// The child runs inside the temp dir, so a relative path with a directory
/// part is anchored to our working directory first. Bare names such as `gs`
/// keep the `PATH` lookup.
fn resolve_executable(executable: &Path) -> io::Result<PathBuf> {
    if executable.is_absolute() || executable.components().count() < 2 {
        return Ok(executable.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(executable))
}

/// Splits on `\n`, strips a trailing `\r`, and tolerates invalid UTF-8.
async fn for_each_line<R, F>(mut reader: R, mut f: F) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&str),
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }
        let text = String::from_utf8_lossy(&buf);
        f(text.trim_end_matches(['\n', '\r']));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_names_and_absolute_paths_are_left_alone() {
        assert_eq!(resolve_executable(Path::new("gs")).unwrap(), PathBuf::from("gs"));
        let absolute = std::env::temp_dir().join("gs");
        assert_eq!(resolve_executable(&absolute).unwrap(), absolute);
    }

    #[test]
    fn relative_paths_are_anchored_to_the_working_directory() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            resolve_executable(Path::new("./bin/gs")).unwrap(),
            cwd.join("./bin/gs")
        );
        assert_eq!(
            resolve_executable(Path::new("tools/gs")).unwrap(),
            cwd.join("tools/gs")
        );
    }
}
