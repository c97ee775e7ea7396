//! # foxtab-sessions
//!
//! Session model, locator, and snapshot store for the foxtab CLI.
//!
//! ## Key Types
//!
//! - [`Session`] - A decoded sessionstore.js document with a flattened tab view
//! - [`Locator`] - Finds live and saved session files, resolves identifiers
//! - [`SessionStore`] - Timestamped snapshot store (save/restore/clear)
//! - [`TabIndex`] - `tab:entry` address of one navigation entry
//! - [`SessionError`] - Error taxonomy shared by the above

pub mod error;
pub mod locator;
pub mod store;
pub mod types;

pub use error::SessionError;
pub use locator::{default_profiles_dir, Locator};
pub use store::{default_saved_dir, SessionStore};
pub use types::{Entry, Session, SessionDoc, Tab, TabIndex, Window};
