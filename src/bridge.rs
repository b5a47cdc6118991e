use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use parking_lot::{Condvar, Mutex};

use crate::error::{AsyncLoadError, LoadError};
use crate::loader::ModuleLoader;
use crate::module::ModuleValue;
use crate::runtime;

/// Upper bound on a single wait before the slot is re-checked.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// The slot is re-checked at least this often while the load is pending.
    pub poll_interval: Duration,
    /// Overall deadline. `None` waits for settlement indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}

enum Slot {
    Pending,
    Fulfilled(ModuleValue),
    Rejected(LoadError),
}

struct SlotCell {
    state: Mutex<Slot>,
    settled: Condvar,
}

impl SlotCell {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(Slot::Pending),
            settled: Condvar::new(),
        })
    }

    fn settle(&self, outcome: Result<ModuleValue, LoadError>) {
        let mut state = self.state.lock();
        // first settlement wins, the slot never leaves a terminal state
        if let Slot::Pending = *state {
            *state = match outcome {
                Ok(value) => Slot::Fulfilled(value),
                Err(error) => Slot::Rejected(error),
            };
        }
        self.settled.notify_all();
    }
}

/// Load `specifier` through `loader` and block until the load settles.
///
/// Only the calling thread blocks. The load itself runs on a background
/// scheduler, so other pending asynchronous work keeps making progress
/// during the wait. A load that never settles keeps this call waiting
/// forever; bound it with [`import_sync_with`] if that is unacceptable.
pub fn import_sync<L>(loader: &L, specifier: &str) -> Result<ModuleValue, AsyncLoadError>
where
    L: ModuleLoader + ?Sized,
{
    import_sync_with(loader, specifier, &BridgeConfig::default())
}

/// [`import_sync`] with an explicit poll interval and optional deadline.
pub fn import_sync_with<L>(
    loader: &L,
    specifier: &str,
    config: &BridgeConfig,
) -> Result<ModuleValue, AsyncLoadError>
where
    L: ModuleLoader + ?Sized,
{
    let slot = SlotCell::new();

    debug!("starting async load of {}", specifier);
    let future = loader.load(specifier);
    let writer = slot.clone();
    let name = specifier.to_string();
    runtime::spawn(async move {
        let outcome = future.await;
        match &outcome {
            Ok(_) => debug!("{} fulfilled", name),
            Err(error) => debug!("{} rejected: {}", name, error),
        }
        writer.settle(outcome.map(|ns| ns.into_default()));
    });

    let started = Instant::now();
    let mut state = slot.state.lock();
    loop {
        match &*state {
            Slot::Pending => {}
            Slot::Fulfilled(value) => return Ok(value.clone()),
            Slot::Rejected(error) => {
                return Err(AsyncLoadError::Load {
                    specifier: specifier.to_string(),
                    source: error.clone(),
                })
            }
        }

        let mut wait = config.poll_interval;
        if let Some(limit) = config.timeout {
            let remaining = limit.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                let waited = started.elapsed();
                warn!("gave up on {} after {:?}", specifier, waited);
                return Err(AsyncLoadError::Timeout {
                    specifier: specifier.to_string(),
                    waited,
                });
            }
            if remaining < wait {
                wait = remaining;
            }
        }

        trace!("{} still pending", specifier);
        slot.settled.wait_for(&mut state, wait);
    }
}
