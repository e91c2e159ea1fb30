use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
use {
    std::sync::LazyLock,
    tokio::runtime::{Builder, Handle, Runtime},
};

// The UI thread has no runtime of its own, so background work lands here.
#[cfg(not(target_arch = "wasm32"))]
static IO_RUNTIME: LazyLock<std::io::Result<Runtime>> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("wallet-io")
        .enable_all()
        .build()
});

/// Run a future in the background without waiting for it.
///
/// Native: on the caller's tokio runtime when there is one, otherwise on a shared
/// I/O runtime. WASM: on the browser's microtask queue.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(handle) = Handle::try_current() {
        handle.spawn(future);
        return;
    }
    match &*IO_RUNTIME {
        Ok(rt) => {
            rt.spawn(future);
        }
        Err(e) => log::error!("Failed to start I/O runtime, task dropped: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
