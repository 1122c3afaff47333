//! Timer-driven behaviour: the poll loop and the copy-signal debounce.

mod common;

use std::sync::atomic::Ordering;
use std::time::Duration;

use common::{contents, Harness};
use snip_core::Settings;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn monitor_polls_on_interval() {
    let h = Harness::new();
    let app = h.app().await;
    app.start_clipboard_monitor().await;
    assert!(app.is_monitoring().await);

    h.clipboard.set("outside text");
    sleep(Duration::from_millis(500)).await;
    assert!(app.get_combined_history().await.is_empty());

    sleep(Duration::from_millis(600)).await;
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["outside text"]
    );

    app.shutdown().await;
    assert!(!app.is_monitoring().await);
}

#[tokio::test(start_paused = true)]
async fn start_and_stop_are_idempotent() {
    let h = Harness::new();
    let app = h.app().await;

    app.start_clipboard_monitor().await;
    app.start_clipboard_monitor().await;
    assert!(app.is_monitoring().await);

    app.stop_clipboard_monitor().await;
    app.stop_clipboard_monitor().await;
    assert!(!app.is_monitoring().await);

    let reads = h.clipboard.reads.load(Ordering::SeqCst);
    sleep(Duration::from_secs(5)).await;
    assert_eq!(h.clipboard.reads.load(Ordering::SeqCst), reads);
}

#[tokio::test(start_paused = true)]
async fn monitor_does_not_start_without_tracking() {
    let h = Harness::with_settings(Settings {
        track_system_clipboard: false,
        ..Settings::default()
    });
    let app = h.app().await;

    app.start_clipboard_monitor().await;

    assert!(!app.is_monitoring().await);
}

#[tokio::test(start_paused = true)]
async fn settings_changes_drive_the_monitor() {
    let h = Harness::new();
    let app = h.app().await;
    app.start_clipboard_monitor().await;

    let mut settings = app.settings().await;
    settings.track_system_clipboard = false;
    let change = app.update_settings(settings.clone()).await.unwrap();
    assert!(change.tracking_toggled);
    assert!(!app.is_monitoring().await);

    settings.track_system_clipboard = true;
    settings.polling_interval = 200;
    app.update_settings(settings).await.unwrap();
    assert!(app.is_monitoring().await);

    h.clipboard.set("outside text");
    sleep(Duration::from_millis(250)).await;
    assert_eq!(app.get_combined_history().await.len(), 1);

    app.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn read_failures_do_not_stop_the_monitor() {
    let h = Harness::new();
    let app = h.app().await;
    h.clipboard.fail_reads(true);
    app.start_clipboard_monitor().await;

    sleep(Duration::from_millis(3_100)).await;
    assert!(app.is_monitoring().await);

    h.clipboard.fail_reads(false);
    h.clipboard.set("outside text");
    sleep(Duration::from_millis(1_000)).await;
    assert_eq!(app.get_combined_history().await.len(), 1);

    app.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn copy_signals_are_debounced() {
    let h = Harness::new();
    let app = h.app().await;
    let reads_at_start = h.clipboard.reads.load(Ordering::SeqCst);

    h.clipboard.set("copied in editor");
    app.copy_signal();
    sleep(Duration::from_millis(20)).await;
    app.copy_signal();
    app.copy_signal();
    sleep(Duration::from_millis(100)).await;

    assert_eq!(h.clipboard.reads.load(Ordering::SeqCst), reads_at_start + 1);
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["copied in editor"]
    );
}

#[tokio::test(start_paused = true)]
async fn shutdown_drops_pending_copy_capture() {
    let h = Harness::new();
    let app = h.app().await;
    h.clipboard.set("copied in editor");

    app.copy_signal();
    app.shutdown().await;
    sleep(Duration::from_millis(100)).await;

    assert!(app.get_combined_history().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn zero_polling_interval_in_document_falls_back_to_default() {
    let h = Harness::with_settings(Settings {
        polling_interval: 0,
        ..Settings::default()
    });
    let app = h.app().await;
    assert_eq!(app.settings().await.polling_interval, 1000);

    app.start_clipboard_monitor().await;
    h.clipboard.set("outside text");
    sleep(Duration::from_millis(1100)).await;

    assert!(app.is_monitoring().await);
    assert_eq!(
        contents(&app.get_combined_history().await),
        vec!["outside text"]
    );
    app.shutdown().await;
}
