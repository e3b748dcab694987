//! Where submissions run, and how their results get back to the frame loop.

use std::future::Future;
use std::sync::{Arc, Mutex};

/// Browser builds send panics to the devtools console. Native panics already
/// reach stderr.
pub fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Needs an ambient tokio runtime; `main` provides one.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_async<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_async<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// One-shot hand-off from a spawned task to the UI thread. Clones share the
/// same slot.
pub struct ResultSlot<T> {
    inner: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for ResultSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T> ResultSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the lock is poisoned and the value was dropped.
    pub fn fill(&self, value: T) -> bool {
        match self.inner.lock() {
            Ok(mut slot) => {
                *slot = Some(value);
                true
            }
            Err(_) => false,
        }
    }

    /// Takes the value if the task has finished.
    pub fn take(&self) -> Option<T> {
        match self.inner.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => {
                log::warn!("⚠️ [PLATFORM] Result slot lock poisoned");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_hands_over_once() {
        let slot = ResultSlot::new();
        let task_side = slot.clone();

        assert_eq!(slot.take(), None);
        assert!(task_side.fill("done"));
        assert_eq!(slot.take(), Some("done"));
        assert_eq!(slot.take(), None);
    }
}
