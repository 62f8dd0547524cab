use seatmap_editor_lib::command::execute_json_batch;
use seatmap_editor_lib::persistence::{AutosaveFile, SnapshotStore};
use seatmap_editor_lib::state::EditorSettings;
use seatmap_editor_lib::Editor;

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    scene: Option<String>,
    commands: Option<String>,
    autosave: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatmap_editor=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let mut editor = Editor::with_settings(EditorSettings::load());

    if let Some(path) = &args.scene {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Err(e) = editor.load_snapshot(&json) {
                    tracing::error!("Failed to load scene from {path}: {e}");
                    std::process::exit(1);
                }
            }
            Err(e) => {
                tracing::error!("Failed to read scene file {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Some(path) = &args.commands {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to read command file {path}: {e}");
                std::process::exit(1);
            }
        };
        match execute_json_batch(&mut editor, &json) {
            Ok(responses) => {
                tracing::info!("Executed {} commands from {path}", responses.len());
                for response in &responses {
                    match serde_json::to_string(response) {
                        Ok(line) => println!("{line}"),
                        Err(e) => tracing::error!("Failed to encode response: {e}"),
                    }
                }
            }
            Err(e) => {
                tracing::error!("{e}");
                std::process::exit(1);
            }
        }
    }

    if args.autosave {
        match AutosaveFile::default_location() {
            Ok(mut store) => match store.save(&editor.snapshot()) {
                Ok(()) => tracing::info!("Autosaved to {}", store.path().display()),
                Err(e) => tracing::error!("Autosave failed: {e}"),
            },
            Err(e) => tracing::error!("Autosave failed: {e}"),
        }
    }

    println!("{}", editor.snapshot());
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--scene" => args.scene = iter.next(),
            "--commands" => args.commands = iter.next(),
            "--autosave" => args.autosave = true,
            other => tracing::warn!("Ignoring unknown argument {other}"),
        }
    }
    args
}
