//! Headless host: replays scripted editor events against a file

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use tabstop::cli::{CliArgs, ScriptEvent};
use tabstop::commands::Cmd;
use tabstop::config::EditorConfig;
use tabstop::editable::Selection;
use tabstop::markers::MarkerEntry;
use tabstop::model::{AppModel, Document};
use tabstop::search::SearchSession;
use tabstop::tabstop::{LineSpan, SessionKind, SessionState, TabStopSession};
use tabstop::update::update;

#[derive(Serialize)]
struct SessionDump {
    kind: SessionKind,
    state: SessionState,
    bounding_range: LineSpan,
    remaining: Vec<String>,
    advances: usize,
    last_selected_text: String,
}

impl From<&TabStopSession> for SessionDump {
    fn from(session: &TabStopSession) -> Self {
        Self {
            kind: session.kind(),
            state: session.state(),
            bounding_range: session.bounding_range(),
            remaining: session.remaining().map(str::to_string).collect(),
            advances: session.advances(),
            last_selected_text: session.last_selected_text().to_string(),
        }
    }
}

#[derive(Serialize)]
struct StateDump<'a> {
    text: String,
    selection: Selection,
    session: Option<SessionDump>,
    markers: Vec<MarkerEntry>,
    search: Option<&'a SearchSession>,
    commands: &'a [Cmd],
}

fn main() -> Result<()> {
    tabstop::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::load_from(path),
        None => EditorConfig::load(),
    };

    let document = match &args.file {
        Some(path) if path.exists() => Document::from_file(path.clone())
            .with_context(|| format!("Failed to open {}", path.display()))?,
        Some(path) => {
            tracing::info!("{} does not exist, starting empty", path.display());
            let mut document = Document::new();
            document.file_path = Some(path.clone());
            document
        }
        None => Document::new(),
    };

    let events = match &args.script {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            ScriptEvent::parse_script(&content)
                .with_context(|| format!("Invalid script {}", path.display()))?
        }
        None => Vec::new(),
    };

    let mut model = AppModel::from_config(document, config);
    let mut commands = Vec::new();

    for event in events {
        if let Some(cmd) = update(&mut model, event.into_msg()) {
            if cmd != Cmd::Redraw {
                tracing::info!(?cmd, "host command");
                commands.push(cmd);
            }
        }
    }

    if args.json {
        let dump = StateDump {
            text: model.document.text(),
            selection: model.document.selection(),
            session: model.session.as_ref().map(SessionDump::from),
            markers: model.markers.entries(),
            search: model.search.session(),
            commands: &commands,
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print!("{}", model.document.text());
    }

    Ok(())
}
