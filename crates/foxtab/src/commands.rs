use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use foxtab_sessions::{Locator, Session, SessionStore, TabIndex};

/// Print every live and saved session path, one per line.
pub fn list_sessions(locator: &Locator) -> Result<()> {
    for path in locator.all_sessions()? {
        println!("{}", path.display());
    }
    Ok(())
}

/// Print the tabs of one session, `t:e <title> - <url>` per entry.
/// Entries without a title print blank; entries without a url are
/// skipped, never abort the listing.
pub fn list_tabs(session: &Session) -> Result<()> {
    for (t_idx, tab) in session.tabs().iter().enumerate() {
        for (e_idx, entry) in tab.entries.iter().enumerate() {
            let url = match entry.url() {
                Ok(url) => url,
                Err(_) => {
                    tracing::warn!(
                        "skipping entry {}:{} with no url in {}",
                        t_idx,
                        e_idx,
                        session.path().display()
                    );
                    continue;
                }
            };
            let title = entry.title.as_deref().unwrap_or("");
            println!(
                "{} {} - {}",
                format!("{}:{}", t_idx, e_idx).dimmed(),
                title,
                url
            );
        }
    }
    Ok(())
}

/// Print tabs across every live and saved session. Sessions that fail to
/// load are skipped with a warning.
pub fn list_all_tabs(locator: &Locator) -> Result<()> {
    for path in locator.all_sessions()? {
        match Session::load(&path) {
            Ok(session) => list_tabs(&session)?,
            Err(e) => {
                tracing::warn!("failed to load session {}: {}", path.display(), e);
            }
        }
    }
    Ok(())
}

/// Snapshot the first live session into the saved-session store.
pub fn save(locator: &Locator, store: &SessionStore) -> Result<()> {
    let live = locator.first_live()?;
    let snapshot = store.save(&live)?;
    println!("Saved {}", snapshot.display());
    Ok(())
}

/// Copy the resolved snapshot over the first live session. Destructive;
/// save first if the live state matters.
pub fn restore(locator: &Locator, store: &SessionStore, identifier: Option<&str>) -> Result<()> {
    let Some(identifier) = identifier else {
        anyhow::bail!("restore needs --session to choose a snapshot");
    };
    let saved = locator.resolve(Some(identifier))?;
    let live = locator.first_live()?;
    store.restore(&saved, &live)?;
    println!("Restored {} over {}", saved.display(), live.display());
    Ok(())
}

/// Delete the resolved session file, live or saved.
pub fn clear(store: &SessionStore, path: &Path) -> Result<()> {
    store.clear(path)?;
    println!("Removed {}", path.display());
    Ok(())
}

/// Fetch the entry's page and print its readable text.
pub async fn read(session: &Session, idx: &str) -> Result<()> {
    let Some(url) = lookup_url(session, idx) else {
        println!("Invalid index");
        return Ok(());
    };

    match foxtab_reader::fetch_article(&url).await {
        Ok(article) => {
            println!("{}", article.title.bold());
            println!();
            println!("{}", article.body);
        }
        Err(e) => println!("{}", e),
    }
    Ok(())
}

/// Open the entry's URL in the system browser.
pub fn open_entry(session: &Session, idx: &str) -> Result<()> {
    let Some(url) = lookup_url(session, idx) else {
        println!("Invalid index");
        return Ok(());
    };
    open::that(&url).with_context(|| format!("failed to open {}", url))?;
    Ok(())
}

/// Resolve an `idx` argument to a URL. Parse failures, out-of-range
/// addresses, and entries without a url all come back as None; the
/// caller prints one diagnostic for all of them.
fn lookup_url(session: &Session, idx: &str) -> Option<String> {
    let idx: TabIndex = idx.parse().ok()?;
    let entry = session.entry(&idx).ok()?;
    entry.url().ok().map(str::to_string)
}
