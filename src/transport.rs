//! Serial transport abstraction.
//!
//! The driver never touches hardware directly. Implement [`SpiTransport`]
//! for your platform's SPI peripheral and hand it to
//! [`Ws2812Driver`](crate::Ws2812Driver). Only the MOSI line carries
//! data — WS2812 is self-clocked, so the clock and input lines can stay
//! unrouted; pin assignment is entirely the implementation's business.

use embedded_hal::spi::{MODE_3, Mode};

/// SPI clock frequency the symbol constants are derived for.
///
/// At 8 MHz one SPI bit is 125 ns, so the fixed symbols in
/// [`encoder`](crate::encoder) land inside the WS2812 pulse-width
/// tolerance. A port to a different clock must recompute them.
pub const WS2812_SPI_HZ: u32 = 8_000_000;

/// Which end of the word is shifted out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most-significant bit first.
    MsbFirst,
    /// Least-significant bit first.
    LsbFirst,
}

/// One-shot transport configuration requested by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in hertz.
    pub frequency_hz: u32,
    /// Word size in bits.
    pub word_bits: u8,
    /// Bit transmission order.
    pub bit_order: BitOrder,
    /// Clock polarity and phase.
    pub mode: Mode,
}

/// Returns the fixed configuration the WS2812 encoding assumes:
/// 8-bit words, MSB first, mode 3, [`WS2812_SPI_HZ`].
pub const fn ws2812_config() -> SpiConfig {
    SpiConfig {
        frequency_hz: WS2812_SPI_HZ,
        word_bits: 8,
        bit_order: BitOrder::MsbFirst,
        mode: MODE_3,
    }
}

/// Trait for abstracting the SPI peripheral used as a bit-timing
/// generator.
///
/// Implementations wrap whatever the platform provides (a HAL SPI
/// device, a DMA channel, a register block) behind three operations.
/// The write must be a single atomic transaction from the driver's
/// perspective: the whole buffer goes out back-to-back, with no other
/// traffic interleaved on the data line.
pub trait SpiTransport {
    /// Transport-specific error type.
    type Error;

    /// Returns true once the peripheral is usable.
    fn is_ready(&self) -> bool;

    /// Applies the requested configuration. Called once from
    /// [`Ws2812Driver::init`](crate::Ws2812Driver::init).
    fn configure(&mut self, config: &SpiConfig) -> Result<(), Self::Error>;

    /// Blocking write of the full buffer.
    fn write(&mut self, buffer: &[u8]) -> Result<(), Self::Error>;
}
