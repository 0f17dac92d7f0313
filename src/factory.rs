/// Supplies the pool with new resource instances and tears down the ones it
/// will never reuse.
///
/// The pool treats both methods as opaque caller code: it never holds its
/// internal lock while calling either, so a slow `create` or `reclaim`
/// cannot stall concurrent [`pull`](crate::Pool::pull) and
/// [`recycle`](crate::Pool::recycle) calls on other threads.
///
/// # Example
///
/// ```rust
/// use repool::{Factory, Pool};
///
/// struct Buffers;
///
/// impl Factory for Buffers {
///     type Resource = Vec<u8>;
///     type Error = std::convert::Infallible;
///
///     fn create(&self) -> Result<Vec<u8>, Self::Error> {
///         Ok(Vec::with_capacity(4096))
///     }
/// }
///
/// let pool = Pool::new(Buffers);
/// let buf = pool.pull().unwrap();
/// assert_eq!(buf.capacity(), 4096);
/// ```
pub trait Factory {
    /// Type of resource this factory produces.
    type Resource;
    /// Error returned when a resource cannot be constructed.
    type Error;

    /// Construct a new resource instance.
    ///
    /// A failure is propagated unmodified to the [`pull`](crate::Pool::pull)
    /// caller; the pool does not retry.
    fn create(&self) -> Result<Self::Resource, Self::Error>;

    /// Tear down a resource the pool has given up on: evicted for age or
    /// staleness, discarded on overflow, or cleared by a drain.
    ///
    /// The default implementation just drops the resource. The pool calls
    /// this only after its own state change is committed, so a panicking
    /// implementation cannot corrupt the pool.
    fn reclaim(&self, resource: Self::Resource) {
        drop(resource);
    }
}
