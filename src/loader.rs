use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use fxhash::FxHashMap;
use parking_lot::RwLock;

use crate::error::LoadError;
use crate::module::ModuleNamespace;

/// Asynchronous source of modules.
///
/// Settlement happens through the scheduler, never inline in `load`: the
/// returned future is spawned and awaited by whoever drives the load.
pub trait ModuleLoader: Send + Sync {
    fn load(&self, specifier: &str) -> BoxFuture<'static, Result<ModuleNamespace, LoadError>>;
}

/// In-memory loader for embedding hosts and tests.
///
/// Modules are registered up front. A load goes through the scheduler like
/// any real one, with an optional per-specifier latency before it settles.
#[derive(Default)]
pub struct StaticLoader {
    modules: RwLock<FxHashMap<String, Result<ModuleNamespace, LoadError>>>,
    latencies: RwLock<FxHashMap<String, Duration>>,
}

impl StaticLoader {
    pub fn new() -> Self {
        Default::default()
    }

    /// Register a module that resolves to `namespace`.
    pub fn module(&self, specifier: &str, namespace: ModuleNamespace) {
        self.modules
            .write()
            .insert(specifier.to_string(), Ok(namespace));
    }

    /// Register a module whose load rejects with `error`.
    pub fn failing(&self, specifier: &str, error: LoadError) {
        self.modules
            .write()
            .insert(specifier.to_string(), Err(error));
    }

    /// Delay settlement of `specifier` by `latency`.
    pub fn latency(&self, specifier: &str, latency: Duration) {
        self.latencies
            .write()
            .insert(specifier.to_string(), latency);
    }
}

impl ModuleLoader for StaticLoader {
    fn load(&self, specifier: &str) -> BoxFuture<'static, Result<ModuleNamespace, LoadError>> {
        let outcome = self
            .modules
            .read()
            .get(specifier)
            .cloned()
            .unwrap_or_else(|| Err(LoadError::NotFound(specifier.to_string())));
        let latency = self.latencies.read().get(specifier).copied();

        async move {
            match latency {
                Some(latency) => tokio::time::sleep(latency).await,
                None => tokio::task::yield_now().await,
            }
            outcome
        }
        .boxed()
    }
}
