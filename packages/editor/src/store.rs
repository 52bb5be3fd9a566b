//! Persistence collaborator boundary.
//!
//! The edit session talks to storage exclusively through [`PageStore`]; all
//! calls are asynchronous and may fail. Reads return `Ok(None)` for
//! not-found; write failures propagate as [`StoreError`], never as silent
//! defaults. [`MemoryStore`] is the in-process implementation used by tests
//! and local sessions.

use async_trait::async_trait;
use pagecraft_schema::{generate_id, now_ms, PageDocument, ProjectData};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("{label} timed out")]
    Timeout { label: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Version checkpoint metadata (the snapshot itself is fetched separately).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub id: String,
    pub created_at: i64,
    pub note: String,
}

/// Asynchronous page/project persistence.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectData>, StoreError>;
    async fn get_project(&self, project_id: &str) -> Result<Option<ProjectData>, StoreError>;
    async fn create_project(&self, name: &str) -> Result<ProjectData, StoreError>;
    async fn update_project_name(&self, project_id: &str, name: &str) -> Result<(), StoreError>;
    async fn delete_project(&self, project_id: &str) -> Result<(), StoreError>;

    async fn get_page(
        &self,
        project_id: &str,
        page_id: &str,
    ) -> Result<Option<PageDocument>, StoreError>;
    async fn add_page(&self, project_id: &str, page: &PageDocument) -> Result<(), StoreError>;
    /// Upsert by page id.
    async fn update_page(&self, project_id: &str, page: &PageDocument) -> Result<(), StoreError>;
    async fn delete_page(&self, project_id: &str, page_id: &str) -> Result<(), StoreError>;
    /// Deep-copy a page under a fresh id with a " Copy" name suffix and
    /// fresh timestamps. `Ok(None)` when the source page does not exist.
    async fn duplicate_page(
        &self,
        project_id: &str,
        page_id: &str,
    ) -> Result<Option<PageDocument>, StoreError>;

    async fn add_version(
        &self,
        project_id: &str,
        page_id: &str,
        page: &PageDocument,
        note: &str,
    ) -> Result<(), StoreError>;
    async fn list_versions(
        &self,
        project_id: &str,
        page_id: &str,
    ) -> Result<Vec<VersionInfo>, StoreError>;
    async fn get_version_snapshot(
        &self,
        project_id: &str,
        page_id: &str,
        version_id: &str,
    ) -> Result<Option<PageDocument>, StoreError>;
    async fn get_next_version_number(
        &self,
        project_id: &str,
        page_id: &str,
    ) -> Result<usize, StoreError>;
}

#[derive(Debug, Clone)]
struct VersionRecord {
    info: VersionInfo,
    snapshot: PageDocument,
}

#[derive(Debug, Default)]
struct ProjectRecord {
    name: String,
    created_at: i64,
    updated_at: i64,
    pages: Vec<PageDocument>,
    versions: HashMap<String, Vec<VersionRecord>>,
}

impl ProjectRecord {
    fn to_data(&self, id: &str) -> ProjectData {
        ProjectData {
            id: id.to_string(),
            name: self.name.clone(),
            pages: self.pages.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// In-memory store: projects, pages and per-page version logs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: RwLock<HashMap<String, ProjectRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a project with pages; a convenience for tests and fixtures.
    pub async fn seed_project(&self, name: &str, pages: Vec<PageDocument>) -> ProjectData {
        let now = now_ms();
        let id = generate_id();
        let record = ProjectRecord {
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            pages,
            versions: HashMap::new(),
        };
        let data = record.to_data(&id);
        self.projects.write().await.insert(id, record);
        data
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn list_projects(&self) -> Result<Vec<ProjectData>, StoreError> {
        let projects = self.projects.read().await;
        let mut list: Vec<ProjectData> = projects
            .iter()
            .map(|(id, record)| record.to_data(id))
            .collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(list)
    }

    async fn get_project(&self, project_id: &str) -> Result<Option<ProjectData>, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects
            .get(project_id)
            .map(|record| record.to_data(project_id)))
    }

    async fn create_project(&self, name: &str) -> Result<ProjectData, StoreError> {
        Ok(self.seed_project(name, Vec::new()).await)
    }

    async fn update_project_name(&self, project_id: &str, name: &str) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        if let Some(record) = projects.get_mut(project_id) {
            record.name = name.to_string();
            record.updated_at = now_ms();
        }
        Ok(())
    }

    async fn delete_project(&self, project_id: &str) -> Result<(), StoreError> {
        self.projects.write().await.remove(project_id);
        Ok(())
    }

    async fn get_page(
        &self,
        project_id: &str,
        page_id: &str,
    ) -> Result<Option<PageDocument>, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects.get(project_id).and_then(|record| {
            record.pages.iter().find(|page| page.id == page_id).cloned()
        }))
    }

    async fn add_page(&self, project_id: &str, page: &PageDocument) -> Result<(), StoreError> {
        self.update_page(project_id, page).await
    }

    async fn update_page(&self, project_id: &str, page: &PageDocument) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        let record = projects
            .get_mut(project_id)
            .ok_or_else(|| StoreError::Backend(format!("unknown project: {project_id}")))?;
        match record.pages.iter_mut().find(|existing| existing.id == page.id) {
            Some(existing) => *existing = page.clone(),
            None => record.pages.push(page.clone()),
        }
        record.updated_at = now_ms();
        Ok(())
    }

    async fn delete_page(&self, project_id: &str, page_id: &str) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        if let Some(record) = projects.get_mut(project_id) {
            record.pages.retain(|page| page.id != page_id);
            record.versions.remove(page_id);
            record.updated_at = now_ms();
        }
        Ok(())
    }

    async fn duplicate_page(
        &self,
        project_id: &str,
        page_id: &str,
    ) -> Result<Option<PageDocument>, StoreError> {
        let Some(page) = self.get_page(project_id, page_id).await? else {
            return Ok(None);
        };
        let now = now_ms();
        let mut copy = page;
        copy.id = generate_id();
        copy.name = format!("{} Copy", copy.name);
        copy.created_at = now;
        copy.updated_at = now;
        self.add_page(project_id, &copy).await?;
        Ok(Some(copy))
    }

    async fn add_version(
        &self,
        project_id: &str,
        page_id: &str,
        page: &PageDocument,
        note: &str,
    ) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        let record = projects
            .get_mut(project_id)
            .ok_or_else(|| StoreError::Backend(format!("unknown project: {project_id}")))?;
        record
            .versions
            .entry(page_id.to_string())
            .or_default()
            .push(VersionRecord {
                info: VersionInfo {
                    id: generate_id(),
                    created_at: now_ms(),
                    note: note.to_string(),
                },
                snapshot: page.clone(),
            });
        Ok(())
    }

    async fn list_versions(
        &self,
        project_id: &str,
        page_id: &str,
    ) -> Result<Vec<VersionInfo>, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects
            .get(project_id)
            .and_then(|record| record.versions.get(page_id))
            .map(|versions| versions.iter().map(|record| record.info.clone()).collect())
            .unwrap_or_default())
    }

    async fn get_version_snapshot(
        &self,
        project_id: &str,
        page_id: &str,
        version_id: &str,
    ) -> Result<Option<PageDocument>, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects
            .get(project_id)
            .and_then(|record| record.versions.get(page_id))
            .and_then(|versions| versions.iter().find(|record| record.info.id == version_id))
            .map(|record| record.snapshot.clone()))
    }

    async fn get_next_version_number(
        &self,
        project_id: &str,
        page_id: &str,
    ) -> Result<usize, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects
            .get(project_id)
            .and_then(|record| record.versions.get(page_id))
            .map_or(0, Vec::len)
            + 1)
    }
}
