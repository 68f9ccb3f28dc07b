use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{mpsc, Arc};

use anyhow::{Context, Result};
use engine_logging::{engine_info, engine_warn};
use pdftools_core::{update, AppState, AppViewModel, Msg, Translator, UiState};
use pdftools_engine::{
    AtomicFileWriter, EngineHandle, GhostscriptProcessor, GhostscriptSettings, ObjectStore,
};

use super::cli::{script, Cli};
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::render::TerminalRenderer;

/// Runs one operation end to end and reports success through the exit code.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let destination = match cli.log {
        Some(destination) => destination,
        None => config.log_destination()?,
    };
    engine_logging::initialize(destination, config.log_level()?, None);
    match &config.loaded_from {
        Some(path) => engine_info!("Loaded config from {:?}", path),
        None => engine_info!("No config file, using defaults"),
    }

    let locale = match cli.lang {
        Some(locale) => locale,
        None => config.locale()?.unwrap_or_default(),
    };
    let fallback_setting = config.pdf_setting()?;
    let output_dir = cli
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());
    let settings = match cli.gs.clone().or_else(|| config.ghostscript.clone()) {
        Some(executable) => GhostscriptSettings { executable },
        None => GhostscriptSettings::default(),
    };
    engine_info!(
        "pdftools {} operation={} files={} gs={:?}",
        env!("CARGO_PKG_VERSION"),
        cli.operation,
        cli.files.len(),
        settings.executable
    );

    let store = ObjectStore::new();
    let processor = Arc::new(GhostscriptProcessor::new(settings, store.clone()));
    let engine =
        EngineHandle::new(processor, store.clone()).context("failed to start the engine")?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(engine, store.clone(), msg_tx);

    let mut staged = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        staged.push(
            store
                .stage_path(path)
                .with_context(|| format!("cannot stage {}", path.display()))?,
        );
    }

    let mut session = Session {
        state: AppState::with_locale(locale),
        runner,
        renderer: TerminalRenderer::new(),
        alerted: false,
    };
    for msg in script(cli.form_messages(fallback_setting), staged) {
        session.dispatch(msg);
        session.render_if_dirty();
    }

    // Submit either started a run or was rejected.
    while session.state.ui_state() == UiState::Loading {
        let first = msg_rx
            .recv()
            .context("engine event channel closed during a run")?;
        let mut next = Some(first);
        while let Some(msg) = next.take() {
            // A result clears the echoed output, so flush what is pending.
            if matches!(msg, Msg::RunSucceeded { .. } | Msg::RunFailed { .. }) {
                session.render_if_dirty();
            }
            session.dispatch(msg);
            next = msg_rx.try_recv().ok();
        }
        session.render_if_dirty();
    }

    let outcome = match session.state.ui_state() {
        UiState::ToBeDownloaded => {
            let writer = AtomicFileWriter::new(output_dir);
            save_downloads(&session.state, &store, &writer).map(|_| ExitCode::SUCCESS)
        }
        UiState::Error => Ok(ExitCode::FAILURE),
        UiState::Init | UiState::Selected | UiState::Loading => {
            if !session.alerted {
                engine_warn!("nothing was submitted");
            }
            Ok(ExitCode::FAILURE)
        }
    };

    session.dispatch(Msg::Reset);
    session.render_if_dirty();
    if store.live_count() > 0 {
        engine_warn!("{} object references still live after reset", store.live_count());
    }
    outcome
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    renderer: TerminalRenderer,
    alerted: bool,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for alert in self.runner.run(effects) {
            self.alerted = true;
            eprintln!("{alert}");
        }
    }

    fn render_if_dirty(&mut self) {
        if !self.state.consume_dirty() {
            return;
        }
        let view: AppViewModel = self.state.view();
        for line in self.renderer.render(&view) {
            println!("{line}");
        }
    }
}

fn save_downloads(
    state: &AppState,
    store: &ObjectStore,
    writer: &AtomicFileWriter,
) -> Result<Vec<PathBuf>> {
    let t: &Translator = state.translator();
    let mut saved = Vec::new();
    for link in state.downloads() {
        let object = store
            .fetch(&link.url)
            .with_context(|| format!("result {} is no longer available", link.filename))?;
        let path = writer
            .write(&link.filename, &object.bytes)
            .with_context(|| format!("cannot save {} to {:?}", link.filename, writer.dir()))?;
        println!(
            "{}",
            t.t_with(
                "savedTo",
                &[
                    ("filename", &link.filename),
                    ("size", &link.byte_len),
                    ("path", &path.display()),
                ],
            )
        );
        saved.push(path);
    }
    Ok(saved)
}
