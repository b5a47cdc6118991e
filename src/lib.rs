//! Synchronous access to asynchronously loaded modules.
//!
//! The host hands an asynchronous [`ModuleLoader`] to [`import_sync`], which
//! drives the load on a background scheduler and blocks only the calling
//! thread until the module settles.

mod bridge;
mod error;
mod loader;
mod module;
mod runtime;

pub use bridge::{import_sync, import_sync_with, BridgeConfig, DEFAULT_POLL_INTERVAL};
pub use error::{AsyncLoadError, LoadError};
pub use loader::{ModuleLoader, StaticLoader};
pub use module::{ModuleNamespace, ModuleValue, DEFAULT_EXPORT};
