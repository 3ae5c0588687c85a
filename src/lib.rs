#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Ws2812Driver`**: Owns the strip state, the symbol buffer, and the
//!   breathing session; the single context object every operation goes through
//! - **`SpiTransport`**: Trait to implement for your SPI peripheral
//! - **`TickTimer`**: Trait to implement for your periodic timer service
//! - **`LedStrip`**: Fixed-length per-LED color store
//! - **`BreathState`**: The breathing session (base color, phase, active flag)
//! - **`encoder`**: Pure functions mapping colors to the SPI symbol stream
//!
//! Colors are `palette::Srgb<u8>` throughout — the same 8-bit triples the
//! protocol carries on the wire.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod breath;
pub mod driver;
pub mod encoder;
pub mod strip;
pub mod timer;
pub mod transport;

pub use breath::{BREATH_INTERVAL, BreathState, DEFAULT_BREATH_COLOR, PHASE_INCREMENT};
pub use driver::{DEFAULT_STRIP_LEN, DriverError, STARTUP_DELAY, Ws2812Driver};
pub use encoder::{
    RESET_BYTES, SYMBOL_ONE, SYMBOL_ZERO, SYMBOLS_PER_LED, buffer_len, encode_bit, encode_frame,
};
pub use strip::{LedStrip, StripError};
pub use timer::TickTimer;
pub use transport::{BitOrder, SpiConfig, SpiTransport, WS2812_SPI_HZ, ws2812_config};

/// All channels off.
pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);
