use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, SessionError};

/// Decoded sessionstore.js document. Firefox writes far more fields than
/// these; everything unknown is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionDoc {
    #[serde(default)]
    pub windows: Vec<Window>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Window {
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

/// One tab: its navigation history, oldest entry first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tab {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// One navigation-history record within a tab.
///
/// `url` is required by the format but decoded as optional so one
/// malformed entry can be skipped instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    pub url: Option<String>,
    pub title: Option<String>,
}

impl Entry {
    /// The entry's URL, or `MissingField` if the record lacks one.
    pub fn url(&self) -> Result<&str> {
        self.url.as_deref().ok_or(SessionError::MissingField("url"))
    }
}

/// A session document plus the path it was loaded from. Immutable for the
/// duration of the process; persisted only via whole-file copy.
#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
    doc: SessionDoc,
}

impl Session {
    /// Read and decode a session file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let doc: SessionDoc = serde_json::from_str(&data)?;
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tabs flattened across all windows: window document order, then tab
    /// document order within each window.
    pub fn tabs(&self) -> Vec<&Tab> {
        self.doc
            .windows
            .iter()
            .flat_map(|window| window.tabs.iter())
            .collect()
    }

    /// Look up one entry by flattened tab index and entry index.
    pub fn entry(&self, idx: &TabIndex) -> Result<&Entry> {
        self.tabs()
            .get(idx.tab)
            .and_then(|tab| tab.entries.get(idx.entry))
            .ok_or_else(|| SessionError::MalformedIndex(idx.to_string()))
    }
}

/// Address of one entry: flattened tab index and entry index, `tab:entry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabIndex {
    pub tab: usize,
    pub entry: usize,
}

impl FromStr for TabIndex {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || SessionError::MalformedIndex(s.to_string());
        let (tab, entry) = s.split_once(':').ok_or_else(malformed)?;
        let tab = tab.parse().map_err(|_| malformed())?;
        let entry = entry.parse().map_err(|_| malformed())?;
        Ok(Self { tab, entry })
    }
}

impl fmt::Display for TabIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tab, self.entry)
    }
}
