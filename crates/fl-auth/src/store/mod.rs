//! Durable credential store.
//!
//! Two entries in a per-installation data directory: `token` (raw string)
//! and `user.json` (serialized profile). Written only as a side effect of
//! session transitions; read once, at bootstrap.

pub mod error;
pub mod record;

use crate::store::error::{Result as StoreResult, StoreError};
use crate::store::record::CredentialRecord;

use std::fs;
use std::io::Write;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use fl_core::UserProfile;
use log::{info, warn};

const TOKEN_ENTRY: &str = "token";
const USER_ENTRY: &str = "user.json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Pure storage for the session credentials. No validation beyond
/// deserialization; lifecycle decisions belong to the session layer.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the platform data directory.
    /// Priority: FL_DATA_DIR env var > dirs::data_dir()/farmlink
    pub fn default_location() -> StoreResult<Self> {
        if let Ok(dir) = std::env::var("FL_DATA_DIR") {
            return Ok(Self::new(PathBuf::from(dir)));
        }

        let base = dirs::data_dir()
            .ok_or_else(|| StoreError::data_dir("Cannot determine platform data directory"))?;
        Ok(Self::new(base.join("farmlink")))
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_ENTRY)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_ENTRY)
    }

    /// Read the stored credential record.
    ///
    /// Returns:
    /// - `Ok(Some(record))` - both entries present and readable
    /// - `Ok(None)` - either entry missing (first launch or logged out)
    /// - `Ok(None)` - `user.json` corrupted (backed up, warning logged)
    pub fn read(&self) -> StoreResult<Option<CredentialRecord>> {
        let token_path = self.token_path();
        let user_path = self.user_path();

        if !token_path.exists() || !user_path.exists() {
            info!("No stored credentials in {:?} (first launch)", self.dir);
            return Ok(None);
        }

        let token = fs::read_to_string(&token_path)
            .map_err(|e| StoreError::file_read(token_path, e))?
            .trim_end()
            .to_string();

        let contents =
            fs::read_to_string(&user_path).map_err(|e| StoreError::file_read(user_path.clone(), e))?;

        match serde_json::from_str::<UserProfile>(&contents) {
            Ok(user) => {
                info!("Loaded stored credentials for {}", user.email);
                Ok(Some(CredentialRecord { token, user }))
            }
            Err(e) => {
                warn!("Credential entry corrupted at {user_path:?}: {e}");
                self.backup_corrupted()?;
                Ok(None)
            }
        }
    }

    /// Persist a credential record using the atomic write pattern.
    ///
    /// 1. Writes each entry to a temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    ///
    /// This prevents corruption if the process dies mid-write.
    pub fn write(&self, record: &CredentialRecord) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        // Serialize with pretty printing for debuggability
        let user_json = serde_json::to_string_pretty(&record.user)?;

        self.save_entry(self.token_path(), record.token.as_bytes())?;
        self.save_entry(self.user_path(), user_json.as_bytes())?;

        info!("Saved credentials for {}", record.user.email);
        Ok(())
    }

    /// Remove both entries. Missing entries are not an error.
    pub fn clear(&self) -> StoreResult<()> {
        for path in [self.token_path(), self.user_path()] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(StoreError::file_remove(path, e)),
            }
        }

        info!("Cleared stored credentials");
        Ok(())
    }

    /// Backs up a corrupted user entry for debugging.
    ///
    /// Renames `user.json` to `user.json.corrupted.{timestamp}`.
    fn backup_corrupted(&self) -> StoreResult<Option<PathBuf>> {
        let path = self.user_path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.dir.join(format!("{USER_ENTRY}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(|e| StoreError::BackupFailed {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        warn!("Backed up corrupted credential entry to {backup_path:?}");
        Ok(Some(backup_path))
    }

    fn save_entry(&self, final_path: PathBuf, bytes: &[u8]) -> StoreResult<()> {
        let temp_path = self.dir.join(format!(
            "{}.tmp.{}",
            final_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| String::from("entry")),
            std::process::id()
        ));

        // Write to temp file with explicit sync
        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(bytes)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &final_path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        Ok(())
    }
}
