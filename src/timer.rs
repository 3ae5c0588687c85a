//! Periodic tick scheduling abstraction.

use core::time::Duration;

/// Trait for abstracting the platform's timer service.
///
/// The driver arms and cancels the timer; the platform is responsible
/// for calling back into [`Ws2812Driver::tick`](crate::Ws2812Driver::tick)
/// on every periodic firing, and into
/// [`Ws2812Driver::autostart`](crate::Ws2812Driver::autostart) when the
/// one-shot startup trigger fires. Firings must not overlap: deliver
/// them sequentially from a single timer context.
pub trait TickTimer {
    /// Begins firing at a fixed interval until [`stop`](Self::stop).
    fn start_periodic(&mut self, interval: Duration);

    /// Arms a single firing after `delay`, with no repeat.
    fn start_oneshot(&mut self, delay: Duration);

    /// Cancels any scheduled firing.
    fn stop(&mut self);
}
