//! File-backed auth store.

use std::path::PathBuf;

use async_trait::async_trait;
use mockprep_core::auth::{AuthContext, AuthStore};
use mockprep_core::error::Result;
use tracing::debug;

/// Keeps the signed-in user in `auth.json`, readable only by the owner.
#[derive(Debug, Clone)]
pub struct FileAuthStore {
    path: PathBuf,
}

impl FileAuthStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl AuthStore for FileAuthStore {
    async fn load(&self) -> Result<Option<AuthContext>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, context: &AuthContext) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(context)?;
        tokio::fs::write(&self.path, json).await?;

        // Set file permissions to 600 (user read/write only) on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            tokio::fs::set_permissions(&self.path, permissions).await?;
        }

        debug!(path = %self.path.display(), "auth context saved");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockprep_core::auth::UserRole;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> FileAuthStore {
        FileAuthStore::new(dir.path().join("nested").join("auth.json"))
    }

    #[tokio::test]
    async fn test_round_trip_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert_eq!(store.load().await.unwrap(), None);

        let context = AuthContext::new("jwt", "dev@example.com", UserRole::Admin);
        store.save(&context).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(context));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        // Clearing twice is fine.
        store.clear().await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .save(&AuthContext::new("jwt", "dev@example.com", UserRole::User))
            .await
            .unwrap();

        let mode = std::fs::metadata(dir.path().join("nested/auth.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/auth.json"), "not json").unwrap();

        assert!(store.load().await.is_err());
    }
}
