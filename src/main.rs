use anyhow::{Context, Result};
use clap::Parser;

use lined::cli::CliArgs;
use lined::commands::Ack;
use lined::config::EditorConfig;
use lined::console::Console;
use lined::dispatch;
use lined::model::EditorSession;
use lined::ops;
use lined::scripting;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::load_from(path).map_err(anyhow::Error::msg)?,
        None => EditorConfig::load(),
    };
    let startup = args.into_config(&config);

    let log_switch = lined::tracing::init(startup.log);
    let engine = scripting::default_engine().context("Failed to start script engine")?;

    let mut session = EditorSession::new(Console::stdio(), engine)
        .with_log_switch(Box::new(log_switch), startup.log)
        .with_success_marker(startup.success_marker.clone());

    if startup.banner {
        let banner = format!(
            "lined {} (scripts: {}). Type `commands` for help, `quit` to exit.",
            env!("CARGO_PKG_VERSION"),
            session.scripts.name()
        );
        session.report(&banner);
    }

    if let Some(script) = &startup.script {
        match ops::script::run_script_file(&mut session, script) {
            Ok(Ack::Quit) => return Ok(()),
            Ok(Ack::Done) => {}
            Err(e) => {
                tracing::warn!("Init script failed: {}", e);
                session.report(&e.to_string());
            }
        }
    }

    if let Some(path) = &startup.open {
        let arg = path.to_string_lossy().into_owned();
        if let Err(e) = ops::file::open(&mut session, &[arg]) {
            session.report(&e.to_string());
        }
    }

    dispatch::run(&mut session).context("Read loop failed")?;
    Ok(())
}
