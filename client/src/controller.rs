//! Synchronization controller: owns the UI-facing state and keeps it
//! consistent with the server.
//!
//! The controller runs as a single task driven by a `select!` loop over
//! the presentation layer's event channel and the debounce timer. Filter
//! and search edits reset pagination and restart the quiet period, so a
//! burst of keystrokes issues exactly one request carrying the final
//! parameters; page changes fetch immediately. In-flight requests are
//! never cancelled, so a page-change fetch can race a just-fired
//! debounce fetch. That race is accepted.

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::api::AssetApi;
use crate::debounce::DebounceTimer;
use crate::models::{Asset, AssetInput, ListQuery, Stats};

/// Quiet period applied to search and filter edits before re-fetching.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(450);

/// Initial rows-per-page.
pub const DEFAULT_LIMIT: u64 = 10;

/// Severity of a transient user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Transient notification for the presentation layer to surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Snapshot of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Records on the current page, newest first
    pub assets: Vec<Asset>,
    pub stats: Stats,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
    pub limit: u64,
    pub search: String,
    pub type_filter: Option<String>,
    pub status_filter: Option<String>,
    pub loading: bool,
    pub saving: bool,
    /// Id of the asset a delete is in flight for
    pub deleting: Option<i32>,
    pub editor_open: bool,
    pub notice: Option<Notice>,
}

impl ViewState {
    fn new() -> Self {
        ViewState {
            assets: Vec::new(),
            stats: Stats::default(),
            total: 0,
            page: 1,
            pages: 1,
            limit: DEFAULT_LIMIT,
            search: String::new(),
            type_filter: None,
            status_filter: None,
            loading: false,
            saving: false,
            deleting: None,
            editor_open: false,
            notice: None,
        }
    }

    /// Counts the displayed records per department ("Unknown" when unset)
    /// for the department chart.
    pub fn department_breakdown(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for asset in &self.assets {
            let department = asset
                .department
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "Unknown".to_string());
            *counts.entry(department).or_default() += 1;
        }
        counts.into_iter().collect()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new()
    }
}

/// User interactions forwarded by the presentation layer.
#[derive(Debug)]
pub enum UiEvent {
    SearchChanged(String),
    TypeFilterChanged(Option<String>),
    StatusFilterChanged(Option<String>),
    LimitChanged(u64),
    PageRequested(u64),
    RefreshRequested,
    EditorOpened,
    EditorClosed,
    CreateRequested(AssetInput),
    UpdateRequested { id: i32, input: AssetInput },
    DeleteRequested(i32),
}

/// Handle given to the presentation layer: events in, state out.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    events: mpsc::UnboundedSender<UiEvent>,
    state: watch::Receiver<ViewState>,
}

impl ControllerHandle {
    /// Forwards a user interaction to the controller.
    pub fn send(&self, event: UiEvent) {
        let _ = self.events.send(event);
    }

    /// Returns the latest published state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Waits for the next state publication and returns it.
    pub async fn changed(&mut self) -> ViewState {
        let _ = self.state.changed().await;
        self.state.borrow_and_update().clone()
    }
}

/// The sync controller task. Owns the [`ViewState`] and the only handle
/// to the backend; everything the presentation layer sees flows through
/// the watch channel.
pub struct SyncController<A: AssetApi> {
    api: A,
    state: ViewState,
    events: mpsc::UnboundedReceiver<UiEvent>,
    state_tx: watch::Sender<ViewState>,
    debounce: DebounceTimer,
}

impl<A: AssetApi> SyncController<A> {
    /// Spawns the controller with the standard debounce window.
    pub fn spawn(api: A) -> (ControllerHandle, JoinHandle<()>) {
        Self::spawn_with_debounce(api, FILTER_DEBOUNCE)
    }

    /// Spawns the controller with a caller-chosen debounce window.
    pub fn spawn_with_debounce(api: A, debounce: Duration) -> (ControllerHandle, JoinHandle<()>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let state = ViewState::new();
        let (state_tx, state_rx) = watch::channel(state.clone());

        let controller = SyncController {
            api,
            state,
            events: event_rx,
            state_tx,
            debounce: DebounceTimer::new(debounce),
        };
        let task = tokio::spawn(controller.run());

        (
            ControllerHandle {
                events: event_tx,
                state: state_rx,
            },
            task,
        )
    }

    async fn run(mut self) {
        self.refresh_stats().await;
        self.fetch_list().await;

        loop {
            tokio::select! {
                event = self.events.recv() => match event {
                    Some(event) => self.handle(event).await,
                    // All handles dropped: the controller winds down
                    None => break,
                },
                _ = self.debounce.expired(), if self.debounce.is_armed() => {
                    self.debounce.cancel();
                    self.fetch_list().await;
                }
            }
        }
    }

    async fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::SearchChanged(text) => {
                self.state.search = text;
                self.reset_page_and_debounce();
            }
            UiEvent::TypeFilterChanged(filter) => {
                self.state.type_filter = normalize_filter(filter);
                self.reset_page_and_debounce();
            }
            UiEvent::StatusFilterChanged(filter) => {
                self.state.status_filter = normalize_filter(filter);
                self.reset_page_and_debounce();
            }
            UiEvent::LimitChanged(limit) => {
                self.state.limit = limit.max(1);
                self.reset_page_and_debounce();
            }
            UiEvent::PageRequested(page) => {
                self.state.page = page.clamp(1, self.state.pages.max(1));
                self.fetch_list().await;
            }
            UiEvent::RefreshRequested => {
                self.state.page = 1;
                self.fetch_list().await;
            }
            UiEvent::EditorOpened => {
                self.state.editor_open = true;
                self.publish();
            }
            UiEvent::EditorClosed => {
                self.state.editor_open = false;
                self.publish();
            }
            UiEvent::CreateRequested(input) => self.save(None, input).await,
            UiEvent::UpdateRequested { id, input } => self.save(Some(id), input).await,
            UiEvent::DeleteRequested(id) => self.delete(id).await,
        }
    }

    /// Filter edits land on page 1 and restart the quiet period; only the
    /// latest parameter set is ever sent.
    fn reset_page_and_debounce(&mut self) {
        self.state.page = 1;
        self.debounce.arm();
        self.publish();
    }

    fn query(&self) -> ListQuery {
        let search = self.state.search.trim();
        ListQuery {
            page: self.state.page,
            limit: self.state.limit,
            search: (!search.is_empty()).then(|| search.to_string()),
            asset_type: self.state.type_filter.clone(),
            status: self.state.status_filter.clone(),
        }
    }

    async fn fetch_list(&mut self) {
        self.state.loading = true;
        self.publish();

        match self.api.list_assets(&self.query()).await {
            Ok(page) => {
                self.state.assets = page.data;
                self.state.total = page.total;
                self.state.pages = page.pages.max(1);
                self.state.page = page.page.max(1);
            }
            Err(err) => {
                // Keep the previously displayed records on screen
                tracing::warn!("list fetch failed: {err}");
                self.notify(NoticeKind::Error, "Failed to load assets");
            }
        }

        self.state.loading = false;
        self.publish();
    }

    async fn refresh_stats(&mut self) {
        match self.api.fetch_stats().await {
            Ok(stats) => {
                self.state.stats = stats;
                self.publish();
            }
            // Prior stats stay up; the next mutation refreshes them
            Err(err) => tracing::warn!("stats fetch failed: {err}"),
        }
    }

    async fn save(&mut self, id: Option<i32>, input: AssetInput) {
        self.state.saving = true;
        self.publish();

        let result = match id {
            Some(id) => self.api.update_asset(id, &input).await,
            None => self.api.create_asset(&input).await,
        };

        match result {
            Ok(_) => {
                let text = if id.is_some() { "Updated" } else { "Created" };
                self.notify(NoticeKind::Success, text);
                self.refresh_stats().await;
                // New and edited records sort to the top of page 1
                self.state.page = 1;
                self.state.editor_open = false;
                self.state.saving = false;
                self.fetch_list().await;
            }
            Err(err) => {
                tracing::warn!("save failed: {err}");
                self.state.saving = false;
                self.notify(NoticeKind::Error, "Could not save asset");
                self.publish();
            }
        }
    }

    async fn delete(&mut self, id: i32) {
        self.state.deleting = Some(id);
        self.publish();

        match self.api.delete_asset(id).await {
            Ok(()) => {
                self.notify(NoticeKind::Info, "Deleted");
                self.refresh_stats().await;
                // Removing the sole record of a later page lands on the
                // page before it
                if self.state.assets.len() == 1 && self.state.page > 1 {
                    self.state.page -= 1;
                }
                self.state.deleting = None;
                self.fetch_list().await;
            }
            Err(err) => {
                tracing::warn!("delete failed: {err}");
                self.state.deleting = None;
                self.notify(NoticeKind::Error, "Could not delete");
                self.publish();
            }
        }
    }

    fn notify(&mut self, kind: NoticeKind, text: &str) {
        self.state.notice = Some(Notice {
            kind,
            text: text.to_string(),
        });
    }

    fn publish(&self) {
        let _ = self.state_tx.send(self.state.clone());
    }
}

/// An empty selection means "All" and drops the constraint.
fn normalize_filter(filter: Option<String>) -> Option<String> {
    filter.filter(|f| !f.trim().is_empty())
}
