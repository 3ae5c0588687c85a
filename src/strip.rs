//! Fixed-length LED strip state.

use crate::COLOR_OFF;
use palette::Srgb;

/// Errors from strip state operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// The LED index is outside the strip.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The strip length.
        len: usize,
    },
}

impl core::fmt::Display for StripError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StripError::IndexOutOfRange { index, len } => {
                write!(f, "LED index {} out of range for strip of {}", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StripError {}

/// The current color of every LED in the strip.
///
/// Always holds exactly `N` colors with stable, zero-based indices.
/// Mutations only ever happen through the explicit set operations;
/// out-of-range indices are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedStrip<const N: usize> {
    colors: [Srgb<u8>; N],
}

impl<const N: usize> LedStrip<N> {
    /// Creates a strip with every LED off.
    pub const fn new() -> Self {
        Self {
            colors: [COLOR_OFF; N],
        }
    }

    /// Sets the color of a single LED.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= N`.
    pub fn set(&mut self, index: usize, color: Srgb<u8>) -> Result<(), StripError> {
        match self.colors.get_mut(index) {
            Some(slot) => {
                *slot = color;
                Ok(())
            }
            None => Err(StripError::IndexOutOfRange { index, len: N }),
        }
    }

    /// Sets every LED to the same color.
    pub fn set_all(&mut self, color: Srgb<u8>) {
        self.colors = [color; N];
    }

    /// Turns every LED off.
    pub fn clear(&mut self) {
        self.set_all(COLOR_OFF);
    }

    /// Returns the color of the LED at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<Srgb<u8>> {
        self.colors.get(index).copied()
    }

    /// Returns all LED colors in strip order.
    pub fn colors(&self) -> &[Srgb<u8>] {
        &self.colors
    }

    /// Returns the strip length.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if the strip has no LEDs.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for LedStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}
