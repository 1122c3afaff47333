//! Use case for updating engine settings

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use snip_core::Settings;

use crate::context::HistoryContext;
use crate::error::EngineError;

/// What the caller has to react to after a settings update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsChange {
    pub tracking_toggled: bool,
    pub interval_changed: bool,
    /// Entries dropped because the history limit went down.
    pub trimmed: usize,
}

impl SettingsChange {
    /// The poller must be started, stopped or restarted.
    pub fn affects_monitor(&self) -> bool {
        self.tracking_toggled || self.interval_changed
    }
}

/// Use case for updating settings.
///
/// ## Behavior
/// - Validates the new settings (range checks)
/// - Logs changed fields with old/new values
/// - Trims history when the limit was lowered
/// - Persists the full document
pub struct UpdateSettings {
    ctx: Arc<HistoryContext>,
}

impl UpdateSettings {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, settings: Settings) -> Result<SettingsChange, EngineError> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            settings.validate()?;

            let mut state = self.ctx.lock().await;
            let diff = SettingsDiff::diff(&state.settings, &settings);
            if diff.is_empty() {
                info!("Updating settings (no changes detected)");
            } else {
                info!(changed_fields = %diff.to_log_string(), "Updating settings");
            }

            let mut change = SettingsChange {
                tracking_toggled: state.settings.track_system_clipboard
                    != settings.track_system_clipboard,
                interval_changed: state.settings.polling_interval != settings.polling_interval,
                trimmed: 0,
            };

            if settings.history_limit < state.settings.history_limit {
                change.trimmed = state.history.trim(settings.history_limit);
            }
            state.settings = settings;
            self.ctx.commit(&state).await?;

            info!(trimmed = change.trimmed, "Settings updated successfully");
            Ok(change)
        }
        .instrument(span)
        .await
    }
}

/// Field-level difference between two settings values.
struct SettingsDiff {
    parts: Vec<String>,
}

impl SettingsDiff {
    fn diff(old: &Settings, new: &Settings) -> Self {
        let mut parts = Vec::new();

        macro_rules! field {
            ($name:literal, $field:ident) => {
                if old.$field != new.$field {
                    parts.push(format!("{}: {:?} -> {:?}", $name, old.$field, new.$field));
                }
            };
        }

        field!("historyLimit", history_limit);
        field!("pollingInterval", polling_interval);
        field!("allowDuplicates", allow_duplicates);
        field!("ignoreWhitespaceOnly", ignore_whitespace_only);
        field!("minimumCharacterCount", minimum_character_count);
        field!("autoDeleteAfterPaste", auto_delete_after_paste);
        field!("trackSystemClipboard", track_system_clipboard);
        field!("pinSystemClipboard", pin_system_clipboard);
        field!("ribbonAction", ribbon_action);

        Self { parts }
    }

    fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    fn to_log_string(&self) -> String {
        if self.parts.is_empty() {
            "(no changes)".to_string()
        } else {
            self.parts.join(", ")
        }
    }
}
