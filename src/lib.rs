//! A thread-safe pool for expensive-to-create, reusable resources.
//!
//! Clients [`pull`](Pool::pull) a resource, use it, and
//! [`recycle`](Pool::recycle) it back; the pool decides whether to reuse,
//! evict or discard based on two time limits, and keeps lifetime counters
//! for observability. Construction and teardown are delegated to a
//! caller-supplied [`Factory`].
//!
//! # Features
//!
//! - Pulls never block: a usable idle resource is served, otherwise the
//!   factory constructs a fresh one on the spot.
//! - Oldest-first eviction: resources over `max_age` or idle past
//!   `max_idle` are torn down on the pull path, a whole expired run at a
//!   time.
//! - Bounded storage: recycling into a full store quietly discards the
//!   resource and counts the overflow.
//! - Administrative surface: [`preheat`](Pool::preheat),
//!   [`drain`](Pool::drain), [`resize`](Pool::resize),
//!   [`shutdown`](Pool::shutdown), and a torn-read-free
//!   [`stats`](Pool::stats) snapshot.
//! - The pool never holds its lock while running factory or reclaimer code.
//!
//! # Examples
//!
//! ## Local pool
//!
//! ```rust
//! use repool::{Factory, Pool};
//!
//! struct Connector;
//!
//! impl Factory for Connector {
//!     type Resource = String;
//!     type Error = std::convert::Infallible;
//!
//!     fn create(&self) -> Result<String, Self::Error> {
//!         Ok(String::from("session"))
//!     }
//! }
//!
//! let pool = Pool::with_capacity(Connector, 4);
//!
//! let session = pool.pull().unwrap();
//! assert_eq!(*session, "session");
//! pool.recycle(session);
//!
//! let stats = pool.stats();
//! assert_eq!(stats.created, 1);
//! assert_eq!(stats.idle, 1);
//!
//! let session = pool.pull().unwrap();
//! assert_eq!(pool.stats().served_from_pool, 1);
//! # drop(session);
//! ```
//!
//! ## Multiple threads sharing a pool
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use repool::{Factory, Pool};
//!
//! struct Connector;
//!
//! impl Factory for Connector {
//!     type Resource = String;
//!     type Error = std::convert::Infallible;
//!
//!     fn create(&self) -> Result<String, Self::Error> {
//!         Ok(String::from("session"))
//!     }
//! }
//!
//! let pool = Arc::new(Pool::with_capacity(Connector, 8));
//!
//! let workers: Vec<_> = (0..4)
//!     .map(|_| {
//!         let pool = pool.clone();
//!         std::thread::spawn(move || {
//!             for _ in 0..100 {
//!                 let session = pool.pull().unwrap();
//!                 pool.recycle(session);
//!             }
//!         })
//!     })
//!     .collect();
//! for worker in workers {
//!     worker.join().unwrap();
//! }
//!
//! let stats = pool.stats();
//! assert_eq!(stats.created + stats.served_from_pool, 400);
//! ```

mod builder;
mod entry;
mod factory;
pub mod helpers;
mod lazy;
mod pool;

pub use builder::Builder;
pub use entry::Pooled;
pub use factory::Factory;
pub use lazy::Deferred;
pub use pool::{Config, Pool, PoolStats};
