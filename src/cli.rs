//! Command line host for the history engine.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use snip_app::usecases::{CopyOutcome, PasteOutcome};
use snip_app::SnipApp;
use snip_core::ids::EntryId;
use snip_core::view::SIDEBAR_PREVIEW_CHARS;
use snip_core::{DeleteOutcome, RibbonAction, Settings};

#[derive(Parser)]
#[command(name = "snipstack")]
#[command(about = "Clipboard history for editor copies and the system clipboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/snipstack/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory holding the history document, buffer and logs
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Track the system clipboard until interrupted
    Watch,

    /// Show the combined history, newest first
    List(ListArgs),

    /// Put an entry back on the system clipboard
    Copy(EntryArgs),

    /// Print an entry to stdout
    Paste(EntryArgs),

    /// Delete an entry
    Delete(EntryArgs),

    /// Delete all history
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Edit the history as a text document in $EDITOR
    Edit,

    /// Show or change engine settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Only entries containing this text (case-insensitive)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Maximum number of entries to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print entry ids
    #[arg(long)]
    pub ids: bool,
}

#[derive(Args)]
pub struct EntryArgs {
    /// 1-based position from `list`, or an entry id
    pub entry: String,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    Show,
    Set { key: String, value: String },
}

impl Cli {
    pub fn assume_yes(&self) -> bool {
        matches!(self.command, Commands::Clear { yes: true })
    }
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

pub async fn run_command(command: Commands, app: &SnipApp) -> Result<()> {
    match command {
        Commands::Watch => watch(app).await,
        Commands::List(args) => list(app, args).await,
        Commands::Copy(args) => {
            let id = resolve_entry(app, &args.entry).await?;
            if app.copy_entry(&id).await? == CopyOutcome::WriteFailed {
                bail!("the system clipboard rejected the write");
            }
            Ok(())
        }
        Commands::Paste(args) => {
            let id = resolve_entry(app, &args.entry).await?;
            match app.paste_entry(&id).await? {
                PasteOutcome::Pasted { .. } => Ok(()),
                PasteOutcome::NoTarget | PasteOutcome::InsertFailed => bail!("paste failed"),
            }
        }
        Commands::Delete(args) => {
            let id = resolve_entry(app, &args.entry).await?;
            if app.delete_entry(&id).await? == DeleteOutcome::NotFound {
                bail!("no entry with id {id}");
            }
            Ok(())
        }
        Commands::Clear { .. } => {
            if !app.clear_history().await? {
                eprintln!("History left unchanged");
            }
            Ok(())
        }
        Commands::Edit => edit(app).await,
        Commands::Settings { action } => match action {
            SettingsCommand::Show => {
                let settings = app.settings().await;
                print_stdout(
                    toml::to_string_pretty(&settings)
                        .context("serialize settings failed")?
                        .trim_end(),
                )
            }
            SettingsCommand::Set { key, value } => {
                let mut settings = app.settings().await;
                apply_setting(&mut settings, &key, &value)?;
                app.update_settings(settings).await?;
                Ok(())
            }
        },
    }
}

async fn watch(app: &SnipApp) -> Result<()> {
    app.start_clipboard_monitor().await;
    if !app.is_monitoring().await {
        warn!("system clipboard tracking is disabled in settings");
    }
    eprintln!("Watching the clipboard, press Ctrl-C to stop");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;
    info!("interrupt received");
    Ok(())
}

async fn list(app: &SnipApp, args: ListArgs) -> Result<()> {
    let query = args.query.unwrap_or_default();
    let previews = app.previews(&query, SIDEBAR_PREVIEW_CHARS).await;
    let limit = args.limit.unwrap_or(previews.len());

    if previews.is_empty() {
        eprintln!("No clipboard history yet");
        return Ok(());
    }

    for (index, preview) in previews.iter().take(limit).enumerate() {
        let line = if args.ids {
            format!(
                "{:>3}  {:<36}  {:<6}  {:>10}  {}",
                index + 1,
                preview.id,
                preview.source_label,
                preview.age,
                preview.text
            )
        } else {
            format!(
                "{:>3}  {:<6}  {:>10}  {}",
                index + 1,
                preview.source_label,
                preview.age,
                preview.text
            )
        };
        print_stdout(&line)?;
    }
    Ok(())
}

async fn edit(app: &SnipApp) -> Result<()> {
    let location = app.open_buffer().await?;
    let editor = editor_command();
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");

    let status = tokio::process::Command::new(program)
        .args(parts)
        .arg(&location)
        .status()
        .await;

    match status {
        Ok(status) if !status.success() => warn!(%status, "editor exited with failure"),
        Ok(_) => {}
        Err(err) => warn!(error = %err, editor = %editor, "failed to launch editor"),
    }

    let kept = app.close_buffer().await?;
    eprintln!("History now holds {kept} entries");
    Ok(())
}

fn editor_command() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string())
}

/// Accept either a 1-based position in the combined view or a raw id.
async fn resolve_entry(app: &SnipApp, selector: &str) -> Result<EntryId> {
    if let Ok(position) = selector.parse::<usize>() {
        let history = app.get_combined_history().await;
        return match position.checked_sub(1).and_then(|index| history.get(index)) {
            Some(entry) => Ok(entry.id.clone()),
            None => bail!("no entry at position {position}, history holds {}", history.len()),
        };
    }
    Ok(EntryId::from(selector))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}

/// Set one field by its document name (`historyLimit`, `history-limit`, ...).
pub fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    let normalized: String = key
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();
    let number = |value: &str| -> Result<u64> {
        value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{key} expects a number, got {value:?}"))
    };

    match normalized.as_str() {
        "historylimit" => settings.history_limit = number(value)? as usize,
        "pollinginterval" => settings.polling_interval = number(value)?,
        "allowduplicates" => settings.allow_duplicates = parse_bool(value)?,
        "ignorewhitespaceonly" => settings.ignore_whitespace_only = parse_bool(value)?,
        "minimumcharactercount" => settings.minimum_character_count = number(value)? as usize,
        "autodeleteafterpaste" => settings.auto_delete_after_paste = parse_bool(value)?,
        "tracksystemclipboard" => settings.track_system_clipboard = parse_bool(value)?,
        "pinsystemclipboard" => settings.pin_system_clipboard = parse_bool(value)?,
        "ribbonaction" => {
            settings.ribbon_action = match value.trim().to_ascii_lowercase().as_str() {
                "sidebar" => RibbonAction::Sidebar,
                "fullview" | "full-view" => RibbonAction::FullView,
                other => bail!("ribbonAction is sidebar or fullView, got {other:?}"),
            }
        }
        _ => bail!("unknown setting {key:?}"),
    }
    Ok(())
}
