use std::future::Future;

use lazy_static::lazy_static;

lazy_static! {
    // Shared driver for load futures. Bridge callers block their own thread
    // while this pool keeps the pending task queue moving.
    static ref DRIVER: tokio::runtime::Runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("import-sync-driver")
        .enable_time()
        .build()
        .expect("failed to build loader runtime");
}

pub(crate) fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    DRIVER.spawn(future);
}
