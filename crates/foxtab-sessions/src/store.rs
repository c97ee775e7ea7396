use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Result, SessionError};

/// Timestamp format for snapshot file names, minute granularity. Two
/// saves within the same minute overwrite each other.
const DATE_FORMAT: &str = "%Y%m%d%H%M";

/// Default saved-session store directory (`~/.foxtab/sessions`).
pub fn default_saved_dir() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".foxtab").join("sessions"))
}

/// Saved-session store: a directory of timestamped snapshot files.
/// Operations are one-shot whole-file copies; there is no in-process
/// lifecycle beyond a single invocation.
pub struct SessionStore {
    saved_dir: PathBuf,
}

impl SessionStore {
    /// Store under the default config directory.
    pub fn new() -> Result<Self> {
        let saved_dir = default_saved_dir()
            .ok_or_else(|| SessionError::NotFound("home directory".to_string()))?;
        Ok(Self { saved_dir })
    }

    /// Store under an explicit directory (useful for testing).
    pub fn with_dir(saved_dir: PathBuf) -> Self {
        Self { saved_dir }
    }

    pub fn saved_dir(&self) -> &Path {
        &self.saved_dir
    }

    /// Create the store directory. Already existing is not an error.
    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.saved_dir)?;
        Ok(())
    }

    /// Snapshot `live` into the store under the current minute's
    /// timestamp. Returns the snapshot path.
    pub fn save(&self, live: &Path) -> Result<PathBuf> {
        self.ensure_dir()?;
        let name = format!("{}.js", Local::now().format(DATE_FORMAT));
        let dest = self.saved_dir.join(name);
        std::fs::copy(live, &dest)?;
        Ok(dest)
    }

    /// Copy `saved` over `live`, replacing the browser's session state.
    /// Destructive: no backup of the live file is taken first.
    pub fn restore(&self, saved: &Path, live: &Path) -> Result<()> {
        std::fs::copy(saved, live)?;
        Ok(())
    }

    /// Delete a session file, live or saved.
    pub fn clear(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SessionError::NotFound(path.display().to_string()));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }
}
