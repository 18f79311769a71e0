//! Variable resolution over the configuration document and the environment.
//!
//! # Precedence
//!
//! ```text
//! get_*(name) ──> document["EnvironmentVariables"][name] ──> environment[name]
//! required_*(name) ─────────────────────────────────────────> environment[name]
//! ```
//!
//! A saved value that does not parse as the requested type is skipped and
//! the environment is consulted instead. An environment value that does not
//! parse is a [`ResolveError::Format`].
//!
//! Storage problems on the read path are logged and treated as "nothing
//! saved". Storage problems on the write path are returned to the caller.

use crate::config::{
    ensure_document, read_document, resolve_document_path, write_document, ConfigDocument,
    StoreError, StoreResult,
};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::{ResolveError, ResolveResult};
use crate::value::VariableValue;
use parking_lot::Mutex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves named variables from a JSON document, falling back to the environment.
///
/// Cloning is cheap; clones share the document path, the environment source
/// and the write lock, so updates from clones on different threads never
/// overwrite each other.
#[derive(Clone)]
pub struct VariableResolver {
    path: PathBuf,
    env: Arc<dyn EnvSource>,
    write_lock: Arc<Mutex<()>>,
}

impl fmt::Debug for VariableResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableResolver")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl VariableResolver {
    /// Open the document at `path`, reading fallbacks from the process environment.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_env(path, ProcessEnv)
    }

    /// Open the document at the resolved default location.
    ///
    /// See [`resolve_document_path`] for the lookup order.
    pub fn open_default() -> Self {
        Self::open(resolve_document_path(None))
    }

    /// Open the document at `path` with a custom environment source.
    pub fn with_env(path: impl Into<PathBuf>, env: impl EnvSource + 'static) -> Self {
        Self::with_shared_env(path, Arc::new(env))
    }

    /// Open the document at `path` with a shared environment source.
    ///
    /// Creates an empty document if none exists. Failure to create it is
    /// logged, not returned: lookups still work against the environment, and
    /// writes report their own error.
    pub fn with_shared_env(path: impl Into<PathBuf>, env: Arc<dyn EnvSource>) -> Self {
        let resolver = Self {
            path: path.into(),
            env,
            write_lock: Arc::new(Mutex::new(())),
        };

        match ensure_document(&resolver.path) {
            Ok(true) => info!(
                path = %resolver.path.display(),
                "created empty configuration document"
            ),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "could not initialise configuration document"),
        }

        resolver
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value saved in the document for `name`, ignoring the environment.
    pub fn saved_value(&self, name: &str) -> Option<String> {
        match read_document(&self.path) {
            Ok(document) => document.variable(name),
            Err(e) => {
                warn!(
                    name,
                    error = %e,
                    "configuration document unavailable, ignoring saved values"
                );
                None
            }
        }
    }

    /// Resolve `name` as `T`: saved value first, then the environment.
    ///
    /// Returns `Ok(None)` when neither source has the variable and
    /// `required` is false.
    pub fn get<T: VariableValue>(&self, name: &str, required: bool) -> ResolveResult<Option<T>> {
        if let Some(saved) = self.saved_value(name) {
            match T::parse_variable(&saved) {
                Some(value) => {
                    debug!(name, source = "document", "resolved variable");
                    return Ok(Some(value));
                }
                None => warn!(
                    name,
                    kind = T::KIND,
                    value = %saved,
                    "saved value is not valid, falling back to environment"
                ),
            }
        }

        match self.env.var(name) {
            Some(raw) => {
                debug!(name, source = "environment", "resolved variable");
                parse_env(name, &raw).map(Some)
            }
            None if required => Err(ResolveError::missing(name)),
            None => Ok(None),
        }
    }

    pub fn get_string(&self, name: &str, required: bool) -> ResolveResult<Option<String>> {
        self.get(name, required)
    }

    /// 32-bit integer lookup; use `get::<i64>` for wider values.
    pub fn get_int(&self, name: &str, required: bool) -> ResolveResult<Option<i32>> {
        self.get(name, required)
    }

    pub fn get_bool(&self, name: &str, required: bool) -> ResolveResult<Option<bool>> {
        self.get(name, required)
    }

    /// Read `name` from the environment only; absence is an error.
    ///
    /// Saved values are not consulted.
    pub fn required<T: VariableValue>(&self, name: &str) -> ResolveResult<T> {
        let raw = self
            .env
            .var(name)
            .ok_or_else(|| ResolveError::missing(name))?;
        parse_env(name, &raw)
    }

    pub fn required_string(&self, name: &str) -> ResolveResult<String> {
        self.required(name)
    }

    pub fn required_int(&self, name: &str) -> ResolveResult<i32> {
        self.required(name)
    }

    pub fn required_bool(&self, name: &str) -> ResolveResult<bool> {
        self.required(name)
    }

    /// Save `value` under `name`, replacing any previous saved value.
    pub fn save_variable(&self, name: &str, value: &str) -> ResolveResult<()> {
        let _guard = self.write_lock.lock();

        let mut document = self.load_for_update()?;
        document.set_variable(name, value);
        write_document(&document, &self.path)?;

        debug!(name, path = %self.path.display(), "saved variable");
        Ok(())
    }

    /// Copy every environment variable into the document.
    ///
    /// Saved values with the same name are overwritten; others are kept.
    /// Returns the number of variables written.
    pub fn load_from_environment(&self) -> ResolveResult<usize> {
        let _guard = self.write_lock.lock();

        let mut document = self.load_for_update()?;
        let vars = self.env.vars();
        let count = vars.len();
        for (name, value) in vars {
            document.set_variable(name, value);
        }
        write_document(&document, &self.path)?;

        info!(
            count,
            path = %self.path.display(),
            "imported environment into configuration document"
        );
        Ok(count)
    }

    /// Read the document for a read-modify-write; a missing file counts as empty.
    fn load_for_update(&self) -> StoreResult<ConfigDocument> {
        match read_document(&self.path) {
            Err(StoreError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(
                    path = %self.path.display(),
                    "configuration document missing, starting empty"
                );
                Ok(ConfigDocument::new())
            }
            other => other,
        }
    }
}

fn parse_env<T: VariableValue>(name: &str, raw: &str) -> ResolveResult<T> {
    T::parse_variable(raw).ok_or_else(|| ResolveError::format(name, T::KIND, raw))
}
