//! Environment Resolver Library
//!
//! Resolves named configuration variables from a persisted JSON document,
//! falling back to the process environment, and persists new values back to
//! the document.
//!
//! # Modules
//!
//! - `config`: Document storage, path resolution and atomic writes
//! - `env`: Environment sources (real process environment or in-memory)
//! - `error`: Resolution errors
//! - `resolver`: The `VariableResolver` itself
//! - `value`: Typed parsing of raw variable text
//!
//! # Example
//!
//! ```rust,no_run
//! use env_resolver::VariableResolver;
//!
//! let resolver = VariableResolver::open("config/environment.json");
//! resolver.save_variable("DATABASE_PORT", "5432")?;
//!
//! let port = resolver.get_int("DATABASE_PORT", true)?;
//! let debug = resolver.get_bool("DEBUG", false)?.unwrap_or(false);
//! # let _ = (port, debug);
//! # Ok::<(), env_resolver::ResolveError>(())
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod resolver;
pub mod value;

pub use config::{ConfigDocument, StoreError, StoreResult};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{ResolveError, ResolveResult};
pub use resolver::VariableResolver;
pub use value::VariableValue;
