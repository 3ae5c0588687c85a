//! WS2812 driver context with transmit path and breathing control.
//!
//! Provides [`Ws2812Driver`] which owns the strip state, the symbol
//! buffer, and the breathing session, and pushes encoded frames through
//! the platform's [`SpiTransport`]. The periodic [`TickTimer`] drives
//! the breathing effect by calling [`tick`](Ws2812Driver::tick).

use core::time::Duration;

use palette::Srgb;

use crate::breath::{BREATH_INTERVAL, BreathState, DEFAULT_BREATH_COLOR};
use crate::encoder::{buffer_len, encode_frame};
use crate::strip::{LedStrip, StripError};
use crate::timer::TickTimer;
use crate::transport::{SpiTransport, ws2812_config};

/// Settling delay before the one-shot autostart fires.
pub const STARTUP_DELAY: Duration = Duration::from_millis(1000);

/// Strip length of the reference configuration.
pub const DEFAULT_STRIP_LEN: usize = 10;

/// Errors that can occur during driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// The transport is not configured or reports not ready.
    NotReady,

    /// The LED index is outside the strip.
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// The strip length.
        len: usize,
    },

    /// The transport write reported a failure.
    Transport(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for DriverError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DriverError::NotReady => {
                write!(f, "serial transport is not ready")
            }
            DriverError::InvalidIndex { index, len } => {
                write!(f, "LED index {} out of range for strip of {}", index, len)
            }
            DriverError::Transport(err) => {
                write!(f, "transport write failed: {:?}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for DriverError<E> {}

impl<E> From<StripError> for DriverError<E> {
    fn from(err: StripError) -> Self {
        match err {
            StripError::IndexOutOfRange { index, len } => DriverError::InvalidIndex { index, len },
        }
    }
}

/// Drives one WS2812 strip through an SPI transport.
///
/// The driver is the single owner of all mutable state: the per-LED
/// colors, the encoded symbol buffer (regenerated in full on every
/// [`update`](Self::update)), and the breathing session. Instantiate it
/// once and pass it by mutable reference to everything that needs it —
/// exclusive access is also the concurrency contract, since every
/// mutating operation takes `&mut self`, an application thread can
/// never race the tick context in safe code. Platforms that share the
/// driver between contexts must wrap it in their own mutex.
///
/// `BUF` must equal [`buffer_len`]`(N)`; this is checked at compile
/// time.
///
/// # Type Parameters
/// * `T` - Serial transport implementation
/// * `S` - Tick timer implementation
/// * `N` - Number of LEDs in the strip
/// * `BUF` - Symbol buffer length, `buffer_len(N)`
pub struct Ws2812Driver<T: SpiTransport, S: TickTimer, const N: usize, const BUF: usize> {
    transport: T,
    timer: S,
    strip: LedStrip<N>,
    frame: [u8; BUF],
    breath: BreathState,
    initialized: bool,
    tick_faults: u32,
}

impl<T: SpiTransport, S: TickTimer, const N: usize, const BUF: usize> Ws2812Driver<T, S, N, BUF> {
    /// Creates an uninitialized driver with a dark strip.
    ///
    /// Nothing is transmitted until [`init`](Self::init) succeeds.
    pub fn new(transport: T, timer: S) -> Self {
        const {
            assert!(
                BUF == buffer_len(N),
                "BUF must equal buffer_len(N): N * 24 symbols plus the reset gap"
            );
        }

        Self {
            transport,
            timer,
            strip: LedStrip::new(),
            frame: [0; BUF],
            breath: BreathState::new(),
            initialized: false,
            tick_faults: 0,
        }
    }

    /// Configures the transport for WS2812 timing and darkens the strip.
    ///
    /// # Errors
    /// * `NotReady` - The transport reports not ready
    /// * `Transport` - The configuration call failed
    pub fn init(&mut self) -> Result<(), DriverError<T::Error>> {
        if !self.transport.is_ready() {
            return Err(DriverError::NotReady);
        }

        self.transport
            .configure(&ws2812_config())
            .map_err(DriverError::Transport)?;

        self.strip.clear();
        self.frame = [0; BUF];
        self.initialized = true;
        Ok(())
    }

    /// Stops breathing, blacks out the strip, and pushes the blackout.
    ///
    /// The driver is marked uninitialized even if the final write
    /// fails; the failure is still reported.
    ///
    /// # Errors
    /// * `NotReady` / `Transport` - The blackout transmit failed
    pub fn deinit(&mut self) -> Result<(), DriverError<T::Error>> {
        let result = self.stop_breathing();
        self.initialized = false;
        result
    }

    /// Sets the color of a single LED in the state store.
    ///
    /// Takes effect on the strip at the next [`update`](Self::update).
    ///
    /// # Errors
    /// * `InvalidIndex` - `index` is not below the strip length
    pub fn set_led(&mut self, index: usize, color: Srgb<u8>) -> Result<(), DriverError<T::Error>> {
        self.strip.set(index, color)?;
        Ok(())
    }

    /// Sets every LED to the same color in the state store.
    pub fn set_all_leds(&mut self, color: Srgb<u8>) -> Result<(), DriverError<T::Error>> {
        self.strip.set_all(color);
        Ok(())
    }

    /// Turns every LED off in the state store.
    pub fn clear_leds(&mut self) -> Result<(), DriverError<T::Error>> {
        self.strip.clear();
        Ok(())
    }

    /// Encodes the current strip state and writes it out in one
    /// transaction.
    ///
    /// On failure the strip state is left unchanged and nothing is
    /// retried; the caller may retry explicitly.
    ///
    /// # Errors
    /// * `NotReady` - [`init`](Self::init) has not succeeded, or the
    ///   transport reports not ready
    /// * `Transport` - The write failed
    pub fn update(&mut self) -> Result<(), DriverError<T::Error>> {
        if !self.initialized || !self.transport.is_ready() {
            return Err(DriverError::NotReady);
        }

        encode_frame(self.strip.colors(), &mut self.frame);
        self.transport
            .write(&self.frame)
            .map_err(DriverError::Transport)
    }

    /// Starts the breathing effect with the given base color.
    ///
    /// Resets the phase, marks the session active, and arms the
    /// periodic timer at [`BREATH_INTERVAL`]. The platform must call
    /// [`tick`](Self::tick) on each firing. No initialization check is
    /// made here: starting before [`init`](Self::init) is permitted and
    /// simply produces counted tick faults until the transport works.
    pub fn start_breathing(&mut self, color: Srgb<u8>) -> Result<(), DriverError<T::Error>> {
        self.breath.start(color);
        self.timer.start_periodic(BREATH_INTERVAL);
        Ok(())
    }

    /// Stops the breathing effect and blacks out the strip.
    ///
    /// The session is deactivated and the timer cancelled before the
    /// blackout is transmitted, so the driver is in a defined all-off
    /// state even when the final write fails.
    ///
    /// # Errors
    /// * `NotReady` / `Transport` - The blackout transmit failed
    pub fn stop_breathing(&mut self) -> Result<(), DriverError<T::Error>> {
        self.breath.stop();
        self.timer.stop();
        self.strip.clear();
        self.update()
    }

    /// Periodic tick handler; call from every periodic timer firing.
    ///
    /// Ignored while no breathing session is active. Otherwise advances
    /// the phase, writes the scaled base color to the whole strip, and
    /// transmits. There is no return path from the timer context, so a
    /// failed transmit is swallowed and only recorded in
    /// [`tick_faults`](Self::tick_faults); the animation keeps
    /// attempting on subsequent ticks.
    pub fn tick(&mut self) {
        if !self.breath.is_active() {
            return;
        }

        let color = self.breath.advance();
        self.strip.set_all(color);

        if self.update().is_err() {
            self.tick_faults = self.tick_faults.saturating_add(1);
        }
    }

    /// Arms the one-shot startup trigger with [`STARTUP_DELAY`].
    ///
    /// The platform calls [`autostart`](Self::autostart) when it fires.
    pub fn schedule_autostart(&mut self) {
        self.timer.start_oneshot(STARTUP_DELAY);
    }

    /// One-shot startup handler: initializes the transport and begins
    /// breathing with [`DEFAULT_BREATH_COLOR`].
    ///
    /// # Errors
    /// Whatever [`init`](Self::init) reports.
    pub fn autostart(&mut self) -> Result<(), DriverError<T::Error>> {
        self.init()?;
        self.start_breathing(DEFAULT_BREATH_COLOR)
    }

    /// Returns the stored color of the LED at `index`, if it exists.
    pub fn led(&self, index: usize) -> Option<Srgb<u8>> {
        self.strip.get(index)
    }

    /// Returns the strip length.
    pub const fn led_count(&self) -> usize {
        N
    }

    /// Returns true once [`init`](Self::init) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns true while a breathing session is active.
    pub fn is_breathing(&self) -> bool {
        self.breath.is_active()
    }

    /// Number of tick transmissions that failed silently.
    pub fn tick_faults(&self) -> u32 {
        self.tick_faults
    }

    /// Returns a reference to the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a reference to the timer.
    pub fn timer(&self) -> &S {
        &self.timer
    }

    /// Consumes the driver and returns its collaborators.
    pub fn release(self) -> (T, S) {
        (self.transport, self.timer)
    }
}
