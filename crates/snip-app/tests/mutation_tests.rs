//! Paste, copy, delete, clear, replace and settings updates.

mod common;

use common::{contents, Harness};
use snip_app::usecases::{CopyOutcome, PasteOutcome, COPIED_NOTICE, NO_PASTE_TARGET_NOTICE};
use snip_app::EngineError;
use snip_core::ids::EntryId;
use snip_core::ports::ConfirmRequest;
use snip_core::{DeleteOutcome, EntrySource, HistoryEntry, Settings};

#[tokio::test]
async fn deleting_sentinel_clears_only_the_slot() {
    let h = Harness::new();
    let app = h.app().await;
    app.notify_clipboard_written("durable entry").await.unwrap();
    h.clipboard.set("outside text");
    app.poll_now().await.unwrap();

    let outcome = app.delete_entry(&EntryId::system_slot()).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::SystemSlotCleared);
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["durable entry"]
    );
}

#[tokio::test]
async fn deleting_by_id_removes_entry() {
    let h = Harness::new();
    let app = h.app().await;
    app.notify_clipboard_written("keep this one").await.unwrap();
    app.notify_clipboard_written("remove this one").await.unwrap();
    let target = app.get_combined_history().await[0].id.clone();

    let outcome = app.delete_entry(&target).await.unwrap();

    assert!(matches!(outcome, DeleteOutcome::Removed(entry) if entry.content == "remove this one"));
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["keep this one"]
    );
}

#[tokio::test]
async fn deleting_unknown_id_changes_nothing() {
    let h = Harness::new();
    let app = h.app().await;
    app.notify_clipboard_written("keep this one").await.unwrap();
    let saves = h.store.save_count();

    let outcome = app.delete_entry(&EntryId::new()).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::NotFound);
    assert_eq!(h.store.save_count(), saves);
}

#[tokio::test]
async fn clear_requires_confirmation() {
    let h = Harness::new();
    let app = h.app().await;
    app.notify_clipboard_written("durable entry").await.unwrap();
    h.clipboard.set("outside text");
    app.poll_now().await.unwrap();

    h.confirmation.answer(false);
    assert!(!app.clear_history().await.unwrap());
    assert_eq!(app.get_combined_history().await.len(), 2);

    h.confirmation.answer(true);
    assert!(app.clear_history().await.unwrap());
    assert!(app.get_combined_history().await.is_empty());

    let document = h.store.document().unwrap();
    assert!(document.history.is_empty());
    assert!(document.system_entry.is_none());
    assert_eq!(
        *h.confirmation.asked.lock().unwrap(),
        vec![ConfirmRequest::ClearHistory, ConfirmRequest::ClearHistory]
    );
}

#[tokio::test]
async fn paste_without_target_notifies_and_keeps_state() {
    let h = Harness::with_settings(Settings {
        auto_delete_after_paste: true,
        ..Settings::default()
    });
    let app = h.app().await;
    app.notify_clipboard_written("paste candidate").await.unwrap();
    let id = app.get_combined_history().await[0].id.clone();
    let saves = h.store.save_count();

    let outcome = app.paste_entry(&id).await.unwrap();

    assert_eq!(outcome, PasteOutcome::NoTarget);
    assert_eq!(h.notice.messages(), vec![NO_PASTE_TARGET_NOTICE]);
    assert_eq!(app.get_combined_history().await.len(), 1);
    assert_eq!(h.store.save_count(), saves);
}

#[tokio::test]
async fn paste_into_active_surface_and_refocus() {
    let h = Harness::new();
    let app = h.app().await;
    let note = h.surfaces.open_surface("note-1");
    h.surfaces.activate(Some(note.clone()));
    app.notify_clipboard_written("paste candidate").await.unwrap();
    let id = app.get_combined_history().await[0].id.clone();

    let outcome = app.paste_entry(&id).await.unwrap();

    assert_eq!(
        outcome,
        PasteOutcome::Pasted {
            surface: note.clone(),
            deleted: false
        }
    );
    assert_eq!(
        h.surfaces.inserted(),
        vec![(note.clone(), "paste candidate".to_string())]
    );
    assert_eq!(*h.surfaces.focused.lock().unwrap(), vec![note]);
    assert_eq!(app.get_combined_history().await.len(), 1);
}

#[tokio::test]
async fn paste_falls_back_to_last_focused_open_surface() {
    let h = Harness::new();
    let app = h.app().await;
    let note = h.surfaces.open_surface("note-1");
    app.surface_focused(note.clone()).await;
    app.notify_clipboard_written("paste candidate").await.unwrap();
    let id = app.get_combined_history().await[0].id.clone();

    let outcome = app.paste_entry(&id).await.unwrap();
    assert!(matches!(outcome, PasteOutcome::Pasted { surface, .. } if surface == note));

    h.surfaces.close_surface(&note);
    let outcome = app.paste_entry(&id).await.unwrap();
    assert_eq!(outcome, PasteOutcome::NoTarget);
}

#[tokio::test]
async fn pasting_slot_claims_it_into_history() {
    let h = Harness::with_settings(Settings {
        auto_delete_after_paste: true,
        ..Settings::default()
    });
    let app = h.app().await;
    h.surfaces
        .activate(Some(h.surfaces.open_surface("note-1")));
    h.clipboard.set("outside text");
    app.poll_now().await.unwrap();

    let outcome = app.paste_entry(&EntryId::system_slot()).await.unwrap();

    assert!(matches!(outcome, PasteOutcome::Pasted { deleted: false, .. }));
    let view = app.get_combined_history().await;
    assert_eq!(contents(&view), vec!["outside text"]);
    assert_eq!(view[0].source, EntrySource::Durable);
}

#[tokio::test]
async fn auto_delete_removes_pasted_durable_entry() {
    let h = Harness::with_settings(Settings {
        auto_delete_after_paste: true,
        ..Settings::default()
    });
    let app = h.app().await;
    h.surfaces
        .activate(Some(h.surfaces.open_surface("note-1")));
    app.notify_clipboard_written("one time snippet").await.unwrap();
    let id = app.get_combined_history().await[0].id.clone();

    let outcome = app.paste_entry(&id).await.unwrap();

    assert!(matches!(outcome, PasteOutcome::Pasted { deleted: true, .. }));
    assert!(app.get_combined_history().await.is_empty());
}

#[tokio::test]
async fn failed_insert_keeps_entry() {
    let h = Harness::with_settings(Settings {
        auto_delete_after_paste: true,
        ..Settings::default()
    });
    let app = h.app().await;
    h.surfaces
        .activate(Some(h.surfaces.open_surface("note-1")));
    h.surfaces.fail_inserts(true);
    app.notify_clipboard_written("one time snippet").await.unwrap();
    let id = app.get_combined_history().await[0].id.clone();

    assert_eq!(app.paste_entry(&id).await.unwrap(), PasteOutcome::InsertFailed);
    assert_eq!(app.get_combined_history().await.len(), 1);
}

#[tokio::test]
async fn pasting_unknown_entry_is_an_error() {
    let h = Harness::new();
    let app = h.app().await;

    let result = app.paste_entry(&EntryId::new()).await;

    assert!(matches!(result, Err(EngineError::EntryNotFound(_))));
}

#[tokio::test]
async fn copy_entry_writes_clipboard_and_promotes() {
    let h = Harness::new();
    let app = h.app().await;
    app.notify_clipboard_written("older snippet").await.unwrap();
    app.notify_clipboard_written("newer snippet").await.unwrap();
    let older = app.get_combined_history().await[1].id.clone();

    let outcome = app.copy_entry(&older).await.unwrap();

    assert!(matches!(outcome, CopyOutcome::Copied(_)));
    assert_eq!(h.clipboard.get(), "older snippet");
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["older snippet", "newer snippet"]
    );
    assert_eq!(h.notice.messages(), vec![COPIED_NOTICE]);
}

#[tokio::test]
async fn copy_write_failure_is_swallowed() {
    let h = Harness::new();
    let app = h.app().await;
    app.notify_clipboard_written("older snippet").await.unwrap();
    app.notify_clipboard_written("newer snippet").await.unwrap();
    let older = app.get_combined_history().await[1].id.clone();
    h.clipboard.fail_writes(true);

    assert_eq!(app.copy_entry(&older).await.unwrap(), CopyOutcome::WriteFailed);
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["newer snippet", "older snippet"]
    );
    assert!(h.notice.messages().is_empty());
}

#[tokio::test]
async fn replaced_entries_sharing_an_id_are_deleted_independently() {
    let h = Harness::new();
    let app = h.app().await;
    let first = HistoryEntry::durable("first entry", 20);
    let mut second = HistoryEntry::durable("second entry", 10);
    second.id = first.id.clone();

    app.replace_history(vec![first.clone(), second]).await.unwrap();
    let history = app.get_combined_history().await;
    assert_ne!(history[0].id, history[1].id);

    assert!(matches!(
        app.delete_entry(&first.id).await.unwrap(),
        DeleteOutcome::Removed(entry) if entry.content == "first entry"
    ));
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["second entry"]
    );
}

#[tokio::test]
async fn replace_history_swaps_wholesale_and_trims() {
    let h = Harness::with_settings(Settings {
        history_limit: 2,
        ..Settings::default()
    });
    let app = h.app().await;
    app.notify_clipboard_written("to be replaced").await.unwrap();

    let kept = app
        .replace_history(vec![
            HistoryEntry::durable("first", 30),
            HistoryEntry::durable("second", 20),
            HistoryEntry::durable("third", 10),
        ])
        .await
        .unwrap();

    assert_eq!(kept, 2);
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["first", "second"]
    );
}

#[tokio::test]
async fn lowering_limit_trims_history() {
    let h = Harness::new();
    let app = h.app().await;
    for text in ["snippet a", "snippet b", "snippet c"] {
        app.notify_clipboard_written(text).await.unwrap();
    }

    let mut settings = app.settings().await;
    settings.history_limit = 2;
    let change = app.update_settings(settings).await.unwrap();

    assert_eq!(change.trimmed, 1);
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["snippet c", "snippet b"]
    );
    assert_eq!(h.store.document().unwrap().settings.history_limit, 2);
    assert_eq!(app.trim_history().await.unwrap(), 0);
}

#[tokio::test]
async fn invalid_settings_are_rejected() {
    let h = Harness::new();
    let app = h.app().await;

    let result = app
        .update_settings(Settings {
            polling_interval: 50,
            ..Settings::default()
        })
        .await;

    assert!(matches!(result, Err(EngineError::InvalidSettings(_))));
    assert_eq!(app.settings().await.polling_interval, 1000);
    assert_eq!(h.store.save_count(), 0);
}

#[tokio::test]
async fn buffer_round_trip_replaces_history() {
    let h = Harness::new();
    let app = h.app().await;
    app.notify_clipboard_written("alpha entry").await.unwrap();
    app.notify_clipboard_written("bravo entry").await.unwrap();
    h.buffer.put("stale text from a crashed session");

    let location = app.open_buffer().await.unwrap();

    assert_eq!(location, "memory://history-buffer");
    assert_eq!(
        h.buffer.contents().as_deref(),
        Some("bravo entry\n---\nalpha entry")
    );

    h.buffer
        .put("edited entry\n---\n\n  second edit  \n---\n---\nalpha entry\n");
    let kept = app.close_buffer().await.unwrap();

    assert_eq!(kept, 3);
    let view = app.get_combined_history().await;
    assert_eq!(
        contents(&view),
        vec!["edited entry", "second edit", "alpha entry"]
    );
    assert!(view[0].timestamp > view[1].timestamp);
    assert!(h.buffer.contents().is_none());
}

#[tokio::test]
async fn buffer_without_segments_empties_history() {
    let h = Harness::new();
    let app = h.app().await;
    app.notify_clipboard_written("alpha entry").await.unwrap();
    app.open_buffer().await.unwrap();

    h.buffer.put("---\n   \n---\n");
    assert_eq!(app.close_buffer().await.unwrap(), 0);
    assert!(app.get_combined_history().await.is_empty());
}

#[tokio::test]
async fn closing_missing_buffer_is_an_error() {
    let h = Harness::new();
    let app = h.app().await;

    let result = app.close_buffer().await;

    assert!(matches!(result, Err(EngineError::Buffer(_))));
}
