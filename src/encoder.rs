//! WS2812 bit-level encoding for SPI transmission.
//!
//! The strip's one-wire protocol is impersonated by sending one SPI byte
//! per protocol bit. At the 8 MHz clock configured by
//! [`ws2812_config`](crate::transport::ws2812_config) each SPI bit lasts
//! 125 ns, so a byte spans 1 µs and its bit pattern controls how much of
//! that microsecond the data line spends high:
//!
//! - [`SYMBOL_ZERO`] (`0b1100_0000`): 250 ns high, 750 ns low — within
//!   the WS2812 tolerance for a `0` (T0H 400 ns ± 150 ns is the
//!   datasheet nominal; short-high/long-low is what matters).
//! - [`SYMBOL_ONE`] (`0b1111_1100`): 750 ns high, 250 ns low — a `1`.
//!
//! Ports to a different SPI clock recompute these two constants from the
//! target pulse widths divided by the SPI bit period; nothing else in
//! the crate depends on the specific values.
//!
//! After the last LED's data the line must stay low long enough for the
//! chain to latch. [`RESET_BYTES`] zero bytes give 64 µs of low at
//! 8 MHz, comfortably past the 50 µs reset threshold.

use palette::Srgb;

/// Symbol transmitted for a logical `0` bit (2 of 8 SPI bits high).
pub const SYMBOL_ZERO: u8 = 0xC0;

/// Symbol transmitted for a logical `1` bit (6 of 8 SPI bits high).
pub const SYMBOL_ONE: u8 = 0xFC;

/// Symbols per LED: 8 bits × 3 color channels.
pub const SYMBOLS_PER_LED: usize = 24;

/// Zero bytes appended after the last LED to latch the frame.
pub const RESET_BYTES: usize = 64;

/// Returns the symbol buffer length required for a strip of
/// `led_count` LEDs.
///
/// Use this to size the buffer passed to [`encode_frame`], or as the
/// `BUF` parameter of [`Ws2812Driver`](crate::Ws2812Driver).
pub const fn buffer_len(led_count: usize) -> usize {
    led_count * SYMBOLS_PER_LED + RESET_BYTES
}

/// Encodes a single protocol bit as its fixed SPI symbol.
pub const fn encode_bit(bit: bool) -> u8 {
    if bit { SYMBOL_ONE } else { SYMBOL_ZERO }
}

/// Encodes the whole strip into `frame`, overwriting it completely.
///
/// Each LED is packed into a 24-bit word in GRB channel order
/// (`G << 16 | R << 8 | B`) and emitted as one symbol per bit from
/// bit 23 down to bit 0, in strip order. The reset gap of
/// [`RESET_BYTES`] zeros follows the last LED. The buffer is never
/// partially patched; every call regenerates it in full.
///
/// # Panics
/// Panics if `frame.len() != buffer_len(colors.len())`.
pub fn encode_frame(colors: &[Srgb<u8>], frame: &mut [u8]) {
    assert_eq!(
        frame.len(),
        buffer_len(colors.len()),
        "symbol buffer length must match buffer_len(strip length)"
    );

    let mut out = 0;
    for color in colors {
        let grb = u32::from(color.green) << 16 | u32::from(color.red) << 8 | u32::from(color.blue);

        for bit in (0..SYMBOLS_PER_LED).rev() {
            frame[out] = encode_bit((grb >> bit) & 1 == 1);
            out += 1;
        }
    }

    frame[out..].fill(0x00);
}
