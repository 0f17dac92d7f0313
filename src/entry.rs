use std::hash::Hash;
use std::ops::{Deref, DerefMut};
use std::time::Instant;

/// A resource checked out of a [`Pool`](crate::Pool).
///
/// `Pooled` pairs the caller's resource with the construction timestamp the
/// pool needs to enforce its age limit; the timestamp travels with the
/// resource but is not part of the public surface. Use a `Pooled` as if it
/// were the resource itself: it dereferences to `T`.
///
/// Hand the resource back with [`Pool::recycle`](crate::Pool::recycle) when
/// done. Dropping a `Pooled` instead simply drops the resource; the pool
/// keeps no record of outstanding checkouts and tolerates resources that
/// never come back.
///
/// # Example
///
/// ```rust
/// use repool::{Factory, Pool};
///
/// struct Lines;
///
/// impl Factory for Lines {
///     type Resource = String;
///     type Error = std::convert::Infallible;
///
///     fn create(&self) -> Result<String, Self::Error> {
///         Ok(String::from("ready"))
///     }
/// }
///
/// let pool = Pool::new(Lines);
/// let mut line = pool.pull().unwrap();
/// line.push_str(" to serve");
/// assert_eq!(&*line, "ready to serve");
/// pool.recycle(line);
/// ```
#[derive(Debug)]
#[must_use]
pub struct Pooled<T> {
    value: T,
    created_at: Instant,
}

impl<T> Pooled<T> {
    /// Wrap a freshly constructed resource, stamping its creation time.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    pub(crate) fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Get a reference to the inner resource.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the inner resource.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwrap the resource, taking it out of pool circulation for good.
    ///
    /// A bare `T` cannot be recycled, so the pool will never see it again.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Pooled<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> DerefMut for Pooled<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

impl<T: PartialEq> PartialEq for Pooled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value.eq(&other.value)
    }
}

impl<T: Eq> Eq for Pooled<T> {}

impl<T: PartialOrd> PartialOrd for Pooled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Pooled<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash> Hash for Pooled<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Pooled<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

/// An idle-store record: a pooled resource plus the moment it last re-entered
/// the store. Everything in the store has been recycled at least once, so
/// both timestamps are always valid.
pub(crate) struct IdleEntry<T> {
    pub(crate) resource: Pooled<T>,
    pub(crate) released_at: Instant,
}
