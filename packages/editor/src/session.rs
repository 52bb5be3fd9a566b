//! # Edit Session
//!
//! The stateful controller coordinating one loaded page document: tree
//! mutations, selection, change notification, debounced persistence and the
//! bounded undo/redo log.
//!
//! One session is constructed per active editing surface and shares nothing
//! ambiently; timer callbacks reach the state through the same `Arc` the
//! session owns. Mutations run synchronously under the state lock; the lock
//! is never held across an await point.

use crate::debounce::Debouncer;
use crate::errors::EditorError;
use crate::history::History;
use crate::store::PageStore;
use crate::tree;
use pagecraft_compiler_css::{compile_component_scss, compile_page_css};
use pagecraft_compiler_html::{render_component_html, render_page_html, ExportBundle};
use pagecraft_schema::{
    create_node, now_ms, ContentEdit, Node, NodeType, PageDocument, PageSettingsPatch, SchemaError,
};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Debounce intervals and history bound.
///
/// The snapshot interval is strictly shorter than the persistence interval:
/// an undo step corresponds to a short pause in editing while writes are
/// coalesced harder to bound write volume.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub save_debounce: Duration,
    pub snapshot_debounce: Duration,
    pub history_cap: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_debounce: Duration::from_millis(600),
            snapshot_debounce: Duration::from_millis(400),
            history_cap: crate::history::DEFAULT_HISTORY_CAP,
        }
    }
}

/// Change notifications published to session observers.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The document changed; carries the new value.
    Document(PageDocument),
    /// The selection changed.
    Selection(Option<String>),
    /// A debounced save failed; direct `save()` calls surface errors
    /// through their return value instead.
    SaveFailed(String),
}

#[derive(Debug)]
struct SessionState {
    project_id: Option<String>,
    document: Option<PageDocument>,
    selected: Option<String>,
    history: History,
}

struct SessionInner {
    store: Arc<dyn PageStore>,
    config: SessionConfig,
    state: Mutex<SessionState>,
    save_timer: Mutex<Debouncer>,
    snapshot_timer: Mutex<Debouncer>,
    /// Serializes persistence writes per session so a slow earlier write
    /// cannot overwrite a later one.
    write_gate: tokio::sync::Mutex<()>,
    events: broadcast::Sender<SessionEvent>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// The page-document mutation service.
#[derive(Clone)]
pub struct EditSession {
    inner: Arc<SessionInner>,
}

impl EditSession {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    pub fn with_config(store: Arc<dyn PageStore>, config: SessionConfig) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            inner: Arc::new(SessionInner {
                store,
                state: Mutex::new(SessionState {
                    project_id: None,
                    document: None,
                    selected: None,
                    history: History::new(config.history_cap),
                }),
                config,
                save_timer: Mutex::new(Debouncer::new()),
                snapshot_timer: Mutex::new(Debouncer::new()),
                write_gate: tokio::sync::Mutex::new(()),
                events,
            }),
        }
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Fetch a page and make it the session's document.
    ///
    /// On success the selection is cleared and the history is reset to a
    /// single snapshot of the freshly loaded document. Returns `Ok(None)`
    /// when the page does not exist; the caller redirects away.
    pub async fn load(
        &self,
        project_id: &str,
        page_id: &str,
    ) -> Result<Option<PageDocument>, EditorError> {
        let Some(page) = self.inner.store.get_page(project_id, page_id).await? else {
            return Ok(None);
        };
        {
            let mut state = lock(&self.inner.state);
            state.project_id = Some(project_id.to_string());
            state.document = Some(page.clone());
            state.selected = None;
            state.history.reset(page.clone());
        }
        lock(&self.inner.save_timer).cancel();
        lock(&self.inner.snapshot_timer).cancel();
        self.publish(SessionEvent::Document(page.clone()));
        self.publish(SessionEvent::Selection(None));
        debug!(page_id = %page.id, "page loaded");
        Ok(Some(page))
    }

    /// Read-only copy of the current document.
    pub fn document(&self) -> Option<PageDocument> {
        lock(&self.inner.state).document.clone()
    }

    pub fn selected_id(&self) -> Option<String> {
        lock(&self.inner.state).selected.clone()
    }

    /// Copy of the currently selected node, if it still exists.
    pub fn selected_node(&self) -> Option<Node> {
        let state = lock(&self.inner.state);
        let document = state.document.as_ref()?;
        let selected = state.selected.as_deref()?;
        tree::find(&document.root, selected).cloned()
    }

    /// Pure selection update; no history effect.
    pub fn select(&self, node_id: Option<&str>) {
        let selected = node_id.map(str::to_string);
        lock(&self.inner.state).selected = selected.clone();
        self.publish(SessionEvent::Selection(selected));
    }

    /// Create a node of `node_type` and append it to the resolved parent.
    ///
    /// An explicit parent id wins when it resolves (stale ids are a no-op);
    /// otherwise the selected node is used when it accepts children, and
    /// the document root when it does not. Leaf parents redirect to the
    /// root so they never acquire children. The new node is selected.
    pub fn add_node(&self, node_type: NodeType, parent_id: Option<&str>) {
        let mut state = lock(&self.inner.state);
        let selected = state.selected.clone();
        let Some(document) = state.document.as_mut() else {
            return;
        };
        let root_id = document.root.id.clone();

        let target_id = match parent_id {
            Some(id) => match tree::find(&document.root, id) {
                None => return,
                Some(node) if node.node_type.accepts_children() => id.to_string(),
                Some(_) => root_id,
            },
            None => selected
                .filter(|sel| {
                    tree::find(&document.root, sel)
                        .map_or(false, |node| node.node_type.accepts_children())
                })
                .unwrap_or(root_id),
        };

        let node = create_node(node_type);
        let node_id = node.id.clone();
        let Some(parent) = tree::find_mut(&mut document.root, &target_id) else {
            return;
        };
        let index = parent.children.as_ref().map_or(0, Vec::len);
        tree::insert_child(parent, node, index);

        self.touch(&mut state);
        state.selected = Some(node_id.clone());
        self.publish(SessionEvent::Selection(Some(node_id)));
    }

    /// Apply an in-place edit to one node: the single funnel for all
    /// content and style changes. Stale ids are a silent no-op.
    pub fn update_node(&self, node_id: &str, mutator: impl FnOnce(&mut Node)) {
        let mut state = lock(&self.inner.state);
        let Some(document) = state.document.as_mut() else {
            return;
        };
        let Some(node) = tree::find_mut(&mut document.root, node_id) else {
            return;
        };
        mutator(node);
        self.touch(&mut state);
    }

    /// Quick-edit one content field; routes through [`EditSession::update_node`].
    pub fn update_content(&self, node_id: &str, edit: ContentEdit) {
        self.update_node(node_id, |node| {
            node.content.get_or_insert_with(Default::default).apply(edit);
        });
    }

    /// Remove a node. The root is never deletable; a successful removal
    /// clears the selection.
    pub fn delete_node(&self, node_id: &str) {
        let mut state = lock(&self.inner.state);
        let Some(document) = state.document.as_mut() else {
            return;
        };
        if document.root.id == node_id {
            return;
        }
        if tree::remove_node(&mut document.root, node_id).is_none() {
            return;
        }
        self.touch(&mut state);
        state.selected = None;
        self.publish(SessionEvent::Selection(None));
    }

    /// Relocate a node; see [`tree::move_node`] for the guard rules.
    /// A successful move re-selects the moved node.
    pub fn move_node(&self, node_id: &str, target_parent_id: &str, target_index: usize) {
        let mut state = lock(&self.inner.state);
        let Some(document) = state.document.as_mut() else {
            return;
        };
        if !tree::move_node(&mut document.root, node_id, target_parent_id, target_index) {
            return;
        }
        self.touch(&mut state);
        state.selected = Some(node_id.to_string());
        self.publish(SessionEvent::Selection(Some(node_id.to_string())));
    }

    /// Shallow-merge page settings.
    pub fn update_page_settings(&self, patch: PageSettingsPatch) {
        let mut state = lock(&self.inner.state);
        let Some(document) = state.document.as_mut() else {
            return;
        };
        document.settings.apply(patch);
        self.touch(&mut state);
    }

    /// Persist the current document immediately.
    pub async fn save(&self) -> Result<(), EditorError> {
        save_now(&self.inner).await
    }

    /// Step back in history. Replaces the document with a deep copy of the
    /// previous snapshot, clears the selection and schedules a debounced
    /// save; undo is itself a dirtying operation.
    pub fn undo(&self) -> bool {
        let mut state = lock(&self.inner.state);
        let Some(snapshot) = state.history.undo() else {
            return false;
        };
        state.document = Some(snapshot.clone());
        state.selected = None;
        drop(state);
        self.publish(SessionEvent::Document(snapshot));
        self.publish(SessionEvent::Selection(None));
        self.schedule_save();
        true
    }

    /// Step forward in history; mirrors [`EditSession::undo`].
    pub fn redo(&self) -> bool {
        let mut state = lock(&self.inner.state);
        let Some(snapshot) = state.history.redo() else {
            return false;
        };
        state.document = Some(snapshot.clone());
        state.selected = None;
        drop(state);
        self.publish(SessionEvent::Document(snapshot));
        self.publish(SessionEvent::Selection(None));
        self.schedule_save();
        true
    }

    pub fn can_undo(&self) -> bool {
        lock(&self.inner.state).history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        lock(&self.inner.state).history.can_redo()
    }

    /// Serialize the current document as pretty interchange JSON.
    pub fn export_json(&self) -> Result<String, EditorError> {
        let document = self.document().ok_or(EditorError::NoDocument)?;
        Ok(serde_json::to_string_pretty(&document).map_err(SchemaError::Json)?)
    }

    /// Render the static-site bundle (`index.html` + `styles.css`) and
    /// record an export checkpoint in the version log.
    pub async fn export_static(&self) -> Result<ExportBundle, EditorError> {
        let (project_id, document) = self.export_snapshot()?;
        let bundle = ExportBundle::static_site(
            render_page_html(&document),
            compile_page_css(&document),
        );
        self.record_export_version(&project_id, &document).await?;
        Ok(bundle)
    }

    /// Render the component-export bundle and record an export checkpoint.
    pub async fn export_component(&self) -> Result<ExportBundle, EditorError> {
        let (project_id, document) = self.export_snapshot()?;
        let bundle = ExportBundle::component(
            render_component_html(&document),
            compile_component_scss(&document),
        );
        self.record_export_version(&project_id, &document).await?;
        Ok(bundle)
    }

    /// Validate an imported interchange document, persist it under the
    /// loaded page's id and reload it as the session document.
    pub async fn import_document(
        &self,
        value: serde_json::Value,
    ) -> Result<PageDocument, EditorError> {
        let mut parsed = PageDocument::from_json(value)?;
        let (project_id, page_id) = {
            let state = lock(&self.inner.state);
            let project_id = state.project_id.clone().ok_or(EditorError::NoDocument)?;
            let page_id = state.document.as_ref().map(|document| document.id.clone());
            (project_id, page_id)
        };
        if let Some(page_id) = page_id {
            parsed.id = page_id;
        }
        parsed.updated_at = now_ms();
        {
            let _gate = self.inner.write_gate.lock().await;
            self.inner.store.update_page(&project_id, &parsed).await?;
        }
        self.load(&project_id, &parsed.id)
            .await?
            .ok_or(EditorError::NoDocument)
    }

    fn export_snapshot(&self) -> Result<(String, PageDocument), EditorError> {
        let state = lock(&self.inner.state);
        let project_id = state.project_id.clone().ok_or(EditorError::NoDocument)?;
        let document = state.document.clone().ok_or(EditorError::NoDocument)?;
        Ok((project_id, document))
    }

    async fn record_export_version(
        &self,
        project_id: &str,
        document: &PageDocument,
    ) -> Result<(), EditorError> {
        let next = self
            .inner
            .store
            .get_next_version_number(project_id, &document.id)
            .await?;
        self.inner
            .store
            .add_version(
                project_id,
                &document.id,
                document,
                &format!("export snapshot {next}"),
            )
            .await?;
        Ok(())
    }

    /// Dirty-marking protocol: stamp `updated_at`, publish the new value and
    /// re-arm both debounce timers.
    fn touch(&self, state: &mut SessionState) {
        if let Some(document) = state.document.as_mut() {
            document.updated_at = now_ms().max(document.updated_at);
            let _ = self.inner.events.send(SessionEvent::Document(document.clone()));
        }
        self.schedule_save();
        self.schedule_snapshot();
    }

    fn schedule_save(&self) {
        let inner = Arc::clone(&self.inner);
        lock(&self.inner.save_timer).schedule(self.inner.config.save_debounce, async move {
            if let Err(error) = save_now(&inner).await {
                warn!(%error, "debounced save failed");
                let _ = inner.events.send(SessionEvent::SaveFailed(error.to_string()));
            }
        });
    }

    fn schedule_snapshot(&self) {
        let inner = Arc::clone(&self.inner);
        lock(&self.inner.snapshot_timer).schedule(
            self.inner.config.snapshot_debounce,
            async move {
                let mut state = lock(&inner.state);
                if let Some(document) = state.document.clone() {
                    state.history.record(document);
                }
            },
        );
    }

    fn publish(&self, event: SessionEvent) {
        let _ = self.inner.events.send(event);
    }
}

async fn save_now(inner: &Arc<SessionInner>) -> Result<(), EditorError> {
    let (project_id, document) = {
        let mut state = lock(&inner.state);
        let Some(project_id) = state.project_id.clone() else {
            return Ok(());
        };
        let Some(document) = state.document.as_mut() else {
            return Ok(());
        };
        document.updated_at = now_ms().max(document.updated_at);
        (project_id, document.clone())
    };
    let _gate = inner.write_gate.lock().await;
    inner.store.update_page(&project_id, &document).await?;
    debug!(page_id = %document.id, "page persisted");
    Ok(())
}
