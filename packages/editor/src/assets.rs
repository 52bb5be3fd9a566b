//! Asset storage collaborator boundary.

use crate::store::StoreError;
use async_trait::async_trait;
use pagecraft_schema::generate_id;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Asynchronous image storage per project.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Upload image bytes, returning the public URL.
    async fn upload_image(
        &self,
        project_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StoreError>;

    async fn list_project_images(&self, project_id: &str) -> Result<Vec<String>, StoreError>;
}

/// In-memory asset store used by tests and local sessions.
#[derive(Debug, Default)]
pub struct MemoryAssets {
    images: RwLock<HashMap<String, Vec<(String, Vec<u8>)>>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetStore for MemoryAssets {
    async fn upload_image(
        &self,
        project_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StoreError> {
        let url = format!("memory://projects/{project_id}/images/{}-{file_name}", generate_id());
        self.images
            .write()
            .await
            .entry(project_id.to_string())
            .or_default()
            .push((url.clone(), bytes));
        Ok(url)
    }

    async fn list_project_images(&self, project_id: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .images
            .read()
            .await
            .get(project_id)
            .map(|images| images.iter().map(|(url, _)| url.clone()).collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_uploaded_images_are_listed() {
        let assets = MemoryAssets::new();
        let url = assets
            .upload_image("p1", "banner.png", vec![1, 2, 3])
            .await
            .unwrap();
        assert!(url.contains("banner.png"));
        assert_eq!(assets.list_project_images("p1").await.unwrap(), vec![url]);
        assert!(assets.list_project_images("p2").await.unwrap().is_empty());
    }
}
