use std::time::Duration;

use crate::{Config, Factory, Pool};

/// A builder for creating a [`Pool`] with custom configuration.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
///
/// use repool::{Builder, Factory};
///
/// struct Sessions;
///
/// impl Factory for Sessions {
///     type Resource = String;
///     type Error = std::convert::Infallible;
///
///     fn create(&self) -> Result<String, Self::Error> {
///         Ok(String::from("session"))
///     }
/// }
///
/// let mut builder = Builder::new();
/// let pool = builder
///     .capacity(10)
///     .max_age(Duration::from_secs(600))
///     .max_idle(Duration::from_secs(60))
///     .build(Sessions);
/// assert_eq!(pool.capacity(), Some(10));
/// ```
pub struct Builder {
    /// Configuration of the pool.
    config: Config,
}

impl Builder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the maximum number of idle resources kept for reuse.
    pub fn capacity(&mut self, capacity: usize) -> &mut Self {
        self.config.capacity = Some(capacity);
        self
    }

    /// Keep every recycled resource, with no upper bound on the store.
    pub fn unbounded(&mut self) -> &mut Self {
        self.config.capacity = None;
        self
    }

    /// Set the maximum lifetime of a resource, counted from construction.
    pub fn max_age(&mut self, max_age: Duration) -> &mut Self {
        self.config.max_age = max_age;
        self
    }

    /// Set how long a resource may sit unused in the store before it is
    /// torn down as stale.
    pub fn max_idle(&mut self, max_idle: Duration) -> &mut Self {
        self.config.max_idle = max_idle;
        self
    }

    /// Build a pool around `factory` with the current configuration.
    pub fn build<F: Factory>(&mut self, factory: F) -> Pool<F> {
        let config = std::mem::take(&mut self.config);
        Pool::with_config(factory, config)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
