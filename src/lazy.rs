use std::fmt;
use std::ops::Deref;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

/// A value that is constructed on first access.
///
/// `Deferred` holds a factory closure until something touches the value,
/// runs the factory exactly once (even under concurrent first access) and
/// behaves as the constructed value from then on. Unlike
/// `once_cell::sync::Lazy` the constructed value can be taken back out with
/// [`into_inner`](Deferred::into_inner).
///
/// The factory must not access the same `Deferred` it initializes.
///
/// # Example
///
/// ```rust
/// use repool::Deferred;
///
/// let config = Deferred::new(|| {
///     // expensive parse, connection setup, ...
///     vec![1, 2, 3]
/// });
/// assert!(!config.is_initialized());
/// assert_eq!(config.len(), 3);
/// assert!(config.is_initialized());
/// ```
pub struct Deferred<T, F = fn() -> T> {
    cell: OnceCell<T>,
    init: Mutex<Option<F>>,
}

impl<T, F: FnOnce() -> T> Deferred<T, F> {
    /// Wrap a factory without running it.
    pub const fn new(init: F) -> Self {
        Self {
            cell: OnceCell::new(),
            init: Mutex::new(Some(init)),
        }
    }

    /// Get the value, running the factory if this is the first access.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| {
            let init = self
                .init
                .lock()
                .take()
                .expect("deferred factory can only run once");
            init()
        })
    }

    /// Whether the factory has already run.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the constructed value, or `None` if the factory never ran.
    pub fn into_inner(self) -> Option<T> {
        self.cell.into_inner()
    }
}

impl<T, F: FnOnce() -> T> Deref for Deferred<T, F> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Deferred<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Deferred").field(value).finish(),
            None => f.write_str("Deferred(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::Deferred;

    #[test]
    fn factory_runs_once() {
        let runs = AtomicUsize::new(0);
        let value = Deferred::new(|| {
            runs.fetch_add(1, Ordering::SeqCst);
            42
        });
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(*value.get(), 42);
        assert_eq!(*value.get(), 42);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn deref_initializes() {
        let value = Deferred::new(|| String::from("built"));
        assert!(!value.is_initialized());
        assert_eq!(value.len(), 5);
        assert!(value.is_initialized());
    }

    #[test]
    fn into_inner_before_and_after_init() {
        let untouched: Deferred<u32, _> = Deferred::new(|| 7);
        assert_eq!(untouched.into_inner(), None);

        let touched = Deferred::new(|| 7);
        let _ = touched.get();
        assert_eq!(touched.into_inner(), Some(7));
    }

    #[test]
    fn concurrent_first_access_initializes_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_in_factory = runs.clone();
        let value = Arc::new(Deferred::new(move || {
            runs_in_factory.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(10));
            1234u64
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let value = value.clone();
                std::thread::spawn(move || *value.get())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1234);
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
