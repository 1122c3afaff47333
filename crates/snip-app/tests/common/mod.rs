//! Hand-written port fakes shared by the snip-app integration tests.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use snip_app::{AppDeps, SnipApp};
use snip_core::ids::SurfaceId;
use snip_core::ports::*;
use snip_core::{HistoryDocument, Settings};

#[derive(Default)]
pub struct FakeClipboard {
    text: Mutex<String>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    pub reads: AtomicUsize,
}

impl FakeClipboard {
    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::default();
        clipboard.set(text);
        clipboard
    }

    pub fn set(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
    }

    pub fn get(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SystemClipboardPort for FakeClipboard {
    async fn read_text(&self) -> Result<String, ClipboardAccessError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ClipboardAccessError::Read("denied".into()));
        }
        Ok(self.get())
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ClipboardAccessError::Write("denied".into()));
        }
        self.set(text);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryDocumentStore {
    document: Mutex<Option<HistoryDocument>>,
    fail_saves: AtomicBool,
    pub saves: AtomicUsize,
}

impl MemoryDocumentStore {
    pub fn with_document(document: HistoryDocument) -> Self {
        let store = Self::default();
        *store.document.lock().unwrap() = Some(document);
        store
    }

    pub fn document(&self) -> Option<HistoryDocument> {
        self.document.lock().unwrap().clone()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStorePort for MemoryDocumentStore {
    async fn load(&self) -> Result<Option<HistoryDocument>, DocumentStoreError> {
        Ok(self.document())
    }

    async fn save(&self, document: &HistoryDocument) -> Result<(), DocumentStoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DocumentStoreError::Io("disk full".into()));
        }
        *self.document.lock().unwrap() = Some(document.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryBuffer {
    text: Mutex<Option<String>>,
}

impl MemoryBuffer {
    pub fn contents(&self) -> Option<String> {
        self.text.lock().unwrap().clone()
    }

    pub fn put(&self, text: &str) {
        *self.text.lock().unwrap() = Some(text.to_string());
    }
}

#[async_trait]
impl HistoryBufferPort for MemoryBuffer {
    fn location(&self) -> String {
        "memory://history-buffer".to_string()
    }

    async fn exists(&self) -> Result<bool, BufferFileError> {
        Ok(self.text.lock().unwrap().is_some())
    }

    async fn write(&self, text: &str) -> Result<(), BufferFileError> {
        self.put(text);
        Ok(())
    }

    async fn read(&self) -> Result<String, BufferFileError> {
        self.contents().ok_or(BufferFileError::NotFound)
    }

    async fn remove(&self) -> Result<(), BufferFileError> {
        self.text.lock().unwrap().take();
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSurfaces {
    active: Mutex<Option<SurfaceId>>,
    open: Mutex<HashSet<SurfaceId>>,
    fail_inserts: AtomicBool,
    pub inserted: Mutex<Vec<(SurfaceId, String)>>,
    pub focused: Mutex<Vec<SurfaceId>>,
}

impl FakeSurfaces {
    pub fn open_surface(&self, id: &str) -> SurfaceId {
        let surface = SurfaceId::from(id);
        self.open.lock().unwrap().insert(surface.clone());
        surface
    }

    pub fn close_surface(&self, surface: &SurfaceId) {
        self.open.lock().unwrap().remove(surface);
        let mut active = self.active.lock().unwrap();
        if active.as_ref() == Some(surface) {
            *active = None;
        }
    }

    pub fn activate(&self, surface: Option<SurfaceId>) {
        *self.active.lock().unwrap() = surface;
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn inserted(&self) -> Vec<(SurfaceId, String)> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl EditorSurfacePort for FakeSurfaces {
    fn active_surface(&self) -> Option<SurfaceId> {
        self.active.lock().unwrap().clone()
    }

    fn is_open(&self, surface: &SurfaceId) -> bool {
        self.open.lock().unwrap().contains(surface)
    }

    async fn replace_selection(&self, surface: &SurfaceId, text: &str) -> Result<(), SurfaceError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(SurfaceError::InsertFailed("read-only".into()));
        }
        self.inserted
            .lock()
            .unwrap()
            .push((surface.clone(), text.to_string()));
        Ok(())
    }

    fn focus(&self, surface: &SurfaceId) {
        self.focused.lock().unwrap().push(surface.clone());
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    pub refreshes: AtomicUsize,
}

impl RecordingObserver {
    pub fn count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl HistoryObserverPort for RecordingObserver {
    fn history_changed(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingNotice {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotice {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl NoticePort for RecordingNotice {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Answers confirmation requests from a script, refusing once it runs dry.
#[derive(Default)]
pub struct ScriptedConfirmation {
    answers: Mutex<VecDeque<bool>>,
    pub asked: Mutex<Vec<ConfirmRequest>>,
}

impl ScriptedConfirmation {
    pub fn answer(&self, answer: bool) {
        self.answers.lock().unwrap().push_back(answer);
    }
}

#[async_trait]
impl ConfirmationPort for ScriptedConfirmation {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        self.asked.lock().unwrap().push(request);
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}

/// Clock that ticks one millisecond per reading and jumps when told to.
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(start_ms),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl ClockPort for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.fetch_add(1, Ordering::SeqCst)
    }
}

/// All fakes, kept around so tests can poke and inspect them.
pub struct Harness {
    pub clipboard: Arc<FakeClipboard>,
    pub store: Arc<MemoryDocumentStore>,
    pub buffer: Arc<MemoryBuffer>,
    pub surfaces: Arc<FakeSurfaces>,
    pub observer: Arc<RecordingObserver>,
    pub notice: Arc<RecordingNotice>,
    pub confirmation: Arc<ScriptedConfirmation>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_store(MemoryDocumentStore::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_store(MemoryDocumentStore::with_document(HistoryDocument {
            settings,
            ..HistoryDocument::default()
        }))
    }

    pub fn with_store(store: MemoryDocumentStore) -> Self {
        Self {
            clipboard: Arc::new(FakeClipboard::default()),
            store: Arc::new(store),
            buffer: Arc::new(MemoryBuffer::default()),
            surfaces: Arc::new(FakeSurfaces::default()),
            observer: Arc::new(RecordingObserver::default()),
            notice: Arc::new(RecordingNotice::default()),
            confirmation: Arc::new(ScriptedConfirmation::default()),
            clock: Arc::new(ManualClock::new(1_700_000_000_000)),
        }
    }

    pub fn deps(&self) -> AppDeps {
        AppDeps {
            clipboard: self.clipboard.clone(),
            document_store: self.store.clone(),
            buffer: self.buffer.clone(),
            surfaces: self.surfaces.clone(),
            observer: self.observer.clone(),
            notice: self.notice.clone(),
            confirmation: self.confirmation.clone(),
            clock: self.clock.clone(),
        }
    }

    pub async fn app(&self) -> SnipApp {
        SnipApp::bootstrap(self.deps())
            .await
            .expect("bootstrap should succeed")
    }
}

pub fn contents(entries: &[snip_core::HistoryEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.content.clone()).collect()
}
