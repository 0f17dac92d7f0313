use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::entry::IdleEntry;
use crate::{Factory, Pooled};

/// A thread-safe pool for expensive-to-create, reusable resources.
///
/// Callers [`pull`](Pool::pull) a resource, use it, and
/// [`recycle`](Pool::recycle) it back. The pool stores recycled resources
/// oldest-first and decides on every pull whether to reuse or tear down,
/// based on two limits: `max_age` (lifetime since construction, regardless
/// of use) and `max_idle` (time sitting unused in the store). Construction
/// and teardown are delegated to a caller-supplied [`Factory`].
///
/// Pulls never block: when nothing in the store is usable, the factory
/// builds a fresh resource. Recycles never fail: when the store is full the
/// resource is quietly torn down and the overflow counted.
///
/// # Example
///
/// ```rust
/// use repool::{Factory, Pool};
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
/// let pool = Pool::with_capacity(Sessions, 4);
///
/// let session = pool.pull().unwrap();
/// pool.recycle(session);
///
/// let session = pool.pull().unwrap();
/// let stats = pool.stats();
/// assert_eq!(stats.created, 1);
/// assert_eq!(stats.served_from_pool, 1);
/// # drop(session);
/// ```
pub struct Pool<F: Factory> {
    factory: F,
    max_age: Duration,
    max_idle: Duration,
    state: Mutex<State<F::Resource>>,
}

/// Everything the pool mutates, guarded by one lock: the idle store, the
/// storage mode, and the counters. Factory and reclaimer calls always happen
/// with this lock released.
struct State<T> {
    idle: VecDeque<IdleEntry<T>>,
    capacity: Option<usize>,
    shutdown: bool,
    counters: Counters,
}

impl<T> State<T> {
    fn accepts(&self) -> bool {
        !self.shutdown && self.capacity.is_none_or(|cap| self.idle.len() < cap)
    }
}

#[derive(Default)]
struct Counters {
    created: u64,
    served_from_pool: u64,
    cleared_on_drain: u64,
    killed_stale: u64,
    killed_ttl: u64,
    overflow_discarded: u64,
}

/// Configuration for the pool.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of idle resources kept for reuse. `None` keeps every
    /// recycled resource; `Some(0)` disables storage entirely, turning the
    /// pool into a plain create-and-discard front.
    pub capacity: Option<usize>,
    /// Maximum lifetime of a resource counted from construction. Anything
    /// over this age is torn down on the next pull, however recently it was
    /// used.
    pub max_age: Duration,
    /// Maximum time a resource may sit unused in the store before it is
    /// torn down as stale.
    pub max_idle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: Some(100),
            max_age: Duration::from_secs(30 * 60),
            max_idle: Duration::from_secs(5 * 60),
        }
    }
}

impl<F: Factory> Pool<F> {
    /// Create a new pool with the default configuration: capacity 100,
    /// `max_age` 30 minutes, `max_idle` 5 minutes.
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, Config::default())
    }

    /// Create a new pool with the given idle-store capacity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repool::{Factory, Pool};
    ///
    /// struct Counters;
    ///
    /// impl Factory for Counters {
    ///     type Resource = u64;
    ///     type Error = std::convert::Infallible;
    ///
    ///     fn create(&self) -> Result<u64, Self::Error> {
    ///         Ok(0)
    ///     }
    /// }
    ///
    /// let pool = Pool::with_capacity(Counters, 10);
    /// assert_eq!(pool.capacity(), Some(10));
    /// ```
    pub fn with_capacity(factory: F, capacity: usize) -> Self {
        Self::with_config(
            factory,
            Config {
                capacity: Some(capacity),
                ..Config::default()
            },
        )
    }

    /// Create a new pool with the given configuration.
    pub fn with_config(factory: F, config: Config) -> Self {
        debug!(
            capacity = ?config.capacity,
            max_age_secs = config.max_age.as_secs(),
            max_idle_secs = config.max_idle.as_secs(),
            "resource pool created"
        );
        Self {
            factory,
            max_age: config.max_age,
            max_idle: config.max_idle,
            state: Mutex::new(State {
                idle: VecDeque::new(),
                capacity: config.capacity,
                shutdown: false,
                counters: Counters::default(),
            }),
        }
    }

    /// Take a resource from the pool, constructing a fresh one if nothing
    /// stored is usable.
    ///
    /// The store is inspected oldest-first. An entry over `max_age` is torn
    /// down as expired; an entry idle longer than `max_idle` is torn down as
    /// stale; the age check wins when both apply. The scan stops at the
    /// first usable entry, so one call clears at most one leading run of
    /// dead entries and touches nothing behind it.
    ///
    /// Never blocks on an empty pool. The only error is the factory's own,
    /// passed through untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repool::{Factory, Pool};
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
    /// let pool = Pool::new(Sessions);
    /// let session = pool.pull().unwrap();
    /// assert_eq!(pool.stats().created, 1);
    /// pool.recycle(session);
    /// ```
    pub fn pull(&self) -> Result<Pooled<F::Resource>, F::Error> {
        let now = Instant::now();
        let mut kill_list = Vec::new();
        let reused = {
            let mut state = self.state.lock();
            loop {
                let Some(entry) = state.idle.pop_front() else {
                    break None;
                };
                if now.saturating_duration_since(entry.resource.created_at()) > self.max_age {
                    state.counters.killed_ttl += 1;
                    kill_list.push(entry);
                } else if now.saturating_duration_since(entry.released_at) > self.max_idle {
                    state.counters.killed_stale += 1;
                    kill_list.push(entry);
                } else {
                    state.counters.served_from_pool += 1;
                    break Some(entry.resource);
                }
            }
        };
        if !kill_list.is_empty() {
            trace!(count = kill_list.len(), "tearing down expired resources");
            self.reclaim_all(kill_list);
        }
        if let Some(resource) = reused {
            return Ok(resource);
        }
        let value = self.factory.create()?;
        self.state.lock().counters.created += 1;
        Ok(Pooled::new(value))
    }

    /// Hand a resource back for reuse.
    ///
    /// The resource joins the tail of the idle store. If the store is full,
    /// has a zero capacity, or the pool is shut down, the resource is torn
    /// down instead and the overflow counted; the caller is never told.
    /// Never blocks.
    pub fn recycle(&self, resource: Pooled<F::Resource>) {
        {
            let mut state = self.state.lock();
            if state.accepts() {
                state.idle.push_back(IdleEntry {
                    resource,
                    released_at: Instant::now(),
                });
                return;
            }
            state.counters.overflow_discarded += 1;
        }
        trace!("idle store full, discarding recycled resource");
        self.factory.reclaim(resource.into_inner());
    }

    /// Warm the pool by constructing up to `count` resources and storing
    /// them, so the first real pulls skip construction latency.
    ///
    /// All `count` resources are pulled before any is recycled; otherwise a
    /// single resource would just round-trip `count` times. Storage is still
    /// subject to capacity. If the factory fails part way, the resources
    /// obtained so far are recycled and the error is propagated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repool::{Factory, Pool};
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
    /// let pool = Pool::with_capacity(Sessions, 8);
    /// pool.preheat(3).unwrap();
    /// assert_eq!(pool.stats().idle, 3);
    /// ```
    pub fn preheat(&self, count: usize) -> Result<(), F::Error> {
        let mut held = Vec::with_capacity(count);
        for _ in 0..count {
            match self.pull() {
                Ok(resource) => held.push(resource),
                Err(err) => {
                    for resource in held {
                        self.recycle(resource);
                    }
                    return Err(err);
                }
            }
        }
        for resource in held {
            self.recycle(resource);
        }
        Ok(())
    }

    /// Empty the idle store, tearing down every stored resource.
    pub fn drain(&self) {
        self.clear(None, false);
    }

    /// Discard all idle resources and set a new capacity.
    ///
    /// Resizing never trims in place: the current inventory is always
    /// dropped and the store refills under the new limit.
    pub fn resize(&self, new_capacity: usize) {
        self.clear(Some(Some(new_capacity)), false);
    }

    /// Discard all idle resources and stop caching for good.
    ///
    /// The pool stays usable afterwards, it just never stores again: every
    /// later pull misses and constructs, every later recycle is torn down as
    /// overflow.
    pub fn shutdown(&self) {
        self.clear(None, true);
    }

    /// Shared tail of [`drain`](Pool::drain), [`resize`](Pool::resize) and
    /// [`shutdown`](Pool::shutdown): swap the store for an empty one under
    /// the lock, tear the old one down after releasing it.
    fn clear(&self, new_capacity: Option<Option<usize>>, shutdown: bool) {
        let drained = {
            let mut state = self.state.lock();
            if let Some(capacity) = new_capacity {
                state.capacity = capacity;
            }
            if shutdown {
                state.shutdown = true;
            }
            state.counters.cleared_on_drain += state.idle.len() as u64;
            std::mem::take(&mut state.idle)
        };
        debug!(count = drained.len(), shutdown, "idle store cleared");
        self.reclaim_all(drained);
    }

    /// Tear down a batch with the lock released, so a slow reclaimer cannot
    /// hold up concurrent pulls and recycles.
    fn reclaim_all(&self, entries: impl IntoIterator<Item = IdleEntry<F::Resource>>) {
        for entry in entries {
            self.factory.reclaim(entry.resource.into_inner());
        }
    }

    /// A point-in-time snapshot of the pool.
    ///
    /// All fields are read under a single lock acquisition, so the counters
    /// are mutually consistent, with no torn reads.
    pub fn stats(&self) -> PoolStats {
        let state = self.state.lock();
        PoolStats {
            idle: state.idle.len(),
            capacity: state.capacity,
            shutdown: state.shutdown,
            created: state.counters.created,
            served_from_pool: state.counters.served_from_pool,
            cleared_on_drain: state.counters.cleared_on_drain,
            killed_stale: state.counters.killed_stale,
            killed_ttl: state.counters.killed_ttl,
            overflow_discarded: state.counters.overflow_discarded,
        }
    }

    /// Number of resources currently stored for reuse.
    pub fn idle(&self) -> usize {
        self.state.lock().idle.len()
    }

    /// The configured idle-store capacity. `None` means unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.state.lock().capacity
    }

    /// Whether [`shutdown`](Pool::shutdown) has been called.
    pub fn is_shutdown(&self) -> bool {
        self.state.lock().shutdown
    }
}

impl<F: Factory> Drop for Pool<F> {
    fn drop(&mut self) {
        let idle = std::mem::take(&mut self.state.get_mut().idle);
        self.reclaim_all(idle);
    }
}

impl<F: Factory> fmt::Debug for Pool<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("max_age", &self.max_age)
            .field("max_idle", &self.max_idle)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// A consistent snapshot of the pool's size and lifetime counters, as
/// returned by [`Pool::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoolStats {
    /// Resources currently stored for reuse.
    pub idle: usize,
    /// Maximum idle resources kept; `None` is unbounded.
    pub capacity: Option<usize>,
    /// Whether the pool has been shut down.
    pub shutdown: bool,
    /// Resources constructed by the factory.
    pub created: u64,
    /// Pulls satisfied from the idle store.
    pub served_from_pool: u64,
    /// Resources discarded by drain, resize or shutdown.
    pub cleared_on_drain: u64,
    /// Resources torn down after sitting idle longer than `max_idle`.
    pub killed_stale: u64,
    /// Resources torn down after living longer than `max_age`.
    pub killed_ttl: u64,
    /// Recycled resources discarded because the idle store was full.
    pub overflow_discarded: u64,
}
