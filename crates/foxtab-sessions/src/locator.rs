use std::path::PathBuf;

use crate::error::{Result, SessionError};

/// Suffix Firefox gives default profile directories.
const PROFILE_SUFFIX: &str = ".default";

/// Session file name inside a profile directory.
const SESSION_FILE: &str = "sessionstore.js";

/// Default Firefox profiles directory for this platform.
pub fn default_profiles_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    if cfg!(target_os = "macos") {
        Some(home.join("Library/Application Support/Firefox/Profiles"))
    } else {
        Some(home.join(".mozilla/firefox"))
    }
}

/// Finds live and saved session files and resolves user-supplied
/// identifiers to concrete paths. Read-only: directory listings and
/// existence checks, no mutation.
///
/// Holds explicit directories so tests can point it anywhere.
pub struct Locator {
    profiles_dir: PathBuf,
    saved_dir: PathBuf,
}

impl Locator {
    /// Locator over the platform profiles directory and the given
    /// saved-session store.
    pub fn new(saved_dir: PathBuf) -> Result<Self> {
        let profiles_dir = default_profiles_dir()
            .ok_or_else(|| SessionError::NotFound("home directory".to_string()))?;
        Ok(Self {
            profiles_dir,
            saved_dir,
        })
    }

    /// Locator over explicit directories (useful for testing).
    pub fn with_dirs(profiles_dir: PathBuf, saved_dir: PathBuf) -> Self {
        Self {
            profiles_dir,
            saved_dir,
        }
    }

    /// One sessionstore.js path per `.default` profile directory, in
    /// directory-listing order. No sorting, no deduping.
    pub fn live_sessions(&self) -> Result<Vec<PathBuf>> {
        let mut live = Vec::new();
        if !self.profiles_dir.exists() {
            return Ok(live);
        }
        for dir_entry in std::fs::read_dir(&self.profiles_dir)? {
            let path = dir_entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.ends_with(PROFILE_SUFFIX) {
                live.push(path.join(SESSION_FILE));
            }
        }
        Ok(live)
    }

    /// Every file in the saved-session store, in listing order.
    pub fn saved_sessions(&self) -> Result<Vec<PathBuf>> {
        let mut saved = Vec::new();
        if !self.saved_dir.exists() {
            return Ok(saved);
        }
        for dir_entry in std::fs::read_dir(&self.saved_dir)? {
            saved.push(dir_entry?.path());
        }
        Ok(saved)
    }

    /// Live sessions followed by saved sessions.
    pub fn all_sessions(&self) -> Result<Vec<PathBuf>> {
        let mut all = self.live_sessions()?;
        all.extend(self.saved_sessions()?);
        Ok(all)
    }

    /// First live session, the default target when no identifier is given.
    pub fn first_live(&self) -> Result<PathBuf> {
        self.live_sessions()?
            .into_iter()
            .next()
            .ok_or_else(|| SessionError::NotFound("no live session".to_string()))
    }

    /// Turn a user-supplied identifier into one concrete session path.
    ///
    /// No identifier means the first live session. An identifier naming an
    /// existing path (after `~` expansion) is returned verbatim; anything
    /// else is matched as a substring against live and saved session paths,
    /// first match wins.
    pub fn resolve(&self, identifier: Option<&str>) -> Result<PathBuf> {
        let identifier = match identifier {
            Some(id) if !id.is_empty() => id,
            _ => return self.first_live(),
        };

        let expanded = expand_home(identifier);
        if expanded.exists() {
            return Ok(expanded);
        }

        self.all_sessions()?
            .into_iter()
            .find(|path| path.to_string_lossy().contains(identifier))
            .ok_or_else(|| SessionError::NotFound(identifier.to_string()))
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
