//! Configuration document storage.
//!
//! Saved variables live in a single JSON document:
//!
//! ```json
//! {
//!   "EnvironmentVariables": {
//!     "DATABASE_HOST": "db.local"
//!   }
//! }
//! ```
//!
//! Top-level keys other than `EnvironmentVariables` are ignored on lookup and
//! preserved on save.
//!
//! # Document Location
//!
//! 1. An explicit path (`VariableResolver::open`, `--document`)
//! 2. `ENV_RESOLVER_DOCUMENT` environment variable
//! 3. `config/environment.json` (current directory)

mod document;
mod error;
mod loader;

pub use document::{ConfigDocument, VARIABLES_KEY};
pub use error::{StoreError, StoreResult};
pub use loader::{
    ensure_document, read_document, resolve_document_path, write_document,
    DEFAULT_DOCUMENT_PATH, DOCUMENT_PATH_ENV,
};
