//! Elapsed-time clock

/// Monotonic millisecond time source
///
/// The counter is allowed to wrap. Consumers must compute intervals with
/// `now.wrapping_sub(start)`, never by comparing absolute timestamps.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin (usually boot)
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
