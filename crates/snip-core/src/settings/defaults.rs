use super::model::*;

impl Default for RibbonAction {
    fn default() -> Self {
        RibbonAction::FullView
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_limit: 500,
            polling_interval: 1000,
            allow_duplicates: false,
            ignore_whitespace_only: true,
            minimum_character_count: 5,
            auto_delete_after_paste: false,
            track_system_clipboard: true,
            pin_system_clipboard: false,
            ribbon_action: RibbonAction::default(),
        }
    }
}
