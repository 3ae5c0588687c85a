//! Breathing effect state and intensity curve.
//!
//! The effect is a sinusoidal brightness modulation of a fixed base
//! color. A periodic tick advances a phase accumulator by a fixed
//! increment; the displayed color is the base color scaled by
//! `(sin(phase) + 1) / 2`, a smooth non-negative curve with a period of
//! `2π / PHASE_INCREMENT` ticks (~126 ticks, ~2.5 s at the 20 ms tick).

use core::f32::consts::TAU;
use core::time::Duration;

use libm::sinf;
use palette::Srgb;

/// Interval between breathing ticks.
pub const BREATH_INTERVAL: Duration = Duration::from_millis(20);

/// Phase advance per tick, in radians.
pub const PHASE_INCREMENT: f32 = 0.05;

/// Default base color: dim white, chosen to be non-distracting.
pub const DEFAULT_BREATH_COLOR: Srgb<u8> = Srgb::new(50, 50, 50);

/// Brightness scalar for a given phase, in `[0, 1]`.
///
/// Maximum 1.0 at `π/2`, minimum 0.0 at `3π/2`; 0.5 at phase zero.
pub fn intensity(phase: f32) -> f32 {
    (sinf(phase) + 1.0) * 0.5
}

/// Mutable state of one breathing session.
///
/// Created inactive. [`start`](Self::start) records the base color and
/// zeroes the phase; every [`advance`](Self::advance) moves the phase
/// forward and yields the color to display; [`stop`](Self::stop)
/// returns to the inactive state with the phase zeroed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreathState {
    active: bool,
    base: Srgb<u8>,
    phase: f32,
}

impl BreathState {
    /// Creates an inactive session with the default base color.
    pub const fn new() -> Self {
        Self {
            active: false,
            base: DEFAULT_BREATH_COLOR,
            phase: 0.0,
        }
    }

    /// Activates the session with a fresh phase and the given base color.
    pub fn start(&mut self, base: Srgb<u8>) {
        self.base = base;
        self.phase = 0.0;
        self.active = true;
    }

    /// Deactivates the session and zeroes the phase.
    pub fn stop(&mut self) {
        self.active = false;
        self.phase = 0.0;
    }

    /// Advances the phase one tick and returns the color to display.
    ///
    /// The phase wraps to zero once it reaches or exceeds `2π`, keeping
    /// it in `[0, 2π)`.
    pub fn advance(&mut self) -> Srgb<u8> {
        self.phase += PHASE_INCREMENT;
        if self.phase >= TAU {
            self.phase = 0.0;
        }
        self.current_color()
    }

    /// The base color scaled by the current intensity, channels
    /// truncated to 8 bits.
    pub fn current_color(&self) -> Srgb<u8> {
        let scale = intensity(self.phase);
        Srgb::new(
            (f32::from(self.base.red) * scale) as u8,
            (f32::from(self.base.green) * scale) as u8,
            (f32::from(self.base.blue) * scale) as u8,
        )
    }

    /// Returns true while the session is breathing.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the configured base color.
    pub fn base(&self) -> Srgb<u8> {
        self.base
    }

    /// Returns the current phase in radians.
    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl Default for BreathState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn intensity_peaks_at_quarter_period() {
        assert!((intensity(FRAC_PI_2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn intensity_bottoms_at_three_quarter_period() {
        assert!(intensity(3.0 * FRAC_PI_2) < 1e-6);
    }

    #[test]
    fn intensity_is_half_at_phase_zero() {
        assert!((intensity(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn intensity_stays_in_unit_range_over_a_period() {
        let mut phase = 0.0f32;
        while phase < TAU {
            let i = intensity(phase);
            assert!((0.0..=1.0).contains(&i), "intensity {} at phase {}", i, phase);
            phase += PHASE_INCREMENT;
        }
    }

    #[test]
    fn phase_wraps_after_full_period() {
        let mut state = BreathState::new();
        state.start(DEFAULT_BREATH_COLOR);

        // 125 ticks reach 6.25 rad, still short of 2π; the 126th wraps.
        for _ in 0..125 {
            state.advance();
        }
        assert!(state.phase() > PI);

        state.advance();
        assert_eq!(state.phase(), 0.0);
    }

    #[test]
    fn start_resets_phase_and_records_base() {
        let mut state = BreathState::new();
        state.start(DEFAULT_BREATH_COLOR);
        state.advance();
        assert!(state.phase() > 0.0);

        let red = Srgb::new(200u8, 0, 0);
        state.start(red);

        assert!(state.is_active());
        assert_eq!(state.base(), red);
        assert_eq!(state.phase(), 0.0);
    }

    #[test]
    fn stop_deactivates_and_zeroes_phase() {
        let mut state = BreathState::new();
        state.start(DEFAULT_BREATH_COLOR);
        state.advance();

        state.stop();

        assert!(!state.is_active());
        assert_eq!(state.phase(), 0.0);
    }

    #[test]
    fn advance_scales_base_with_truncation() {
        let mut state = BreathState::new();
        state.start(Srgb::new(100u8, 50, 0));

        let color = state.advance();

        let scale = intensity(PHASE_INCREMENT);
        assert_eq!(color.red, (100.0 * scale) as u8);
        assert_eq!(color.green, (50.0 * scale) as u8);
        assert_eq!(color.blue, 0);
    }

    #[test]
    fn color_sequence_repeats_each_period() {
        let mut state = BreathState::new();
        state.start(Srgb::new(120u8, 120, 120));

        let first: [Srgb<u8>; 5] = core::array::from_fn(|_| state.advance());

        // Skip the remainder of the period; the wrap lands back at phase 0.
        for _ in 0..121 {
            state.advance();
        }

        let second: [Srgb<u8>; 5] = core::array::from_fn(|_| state.advance());
        assert_eq!(first, second);
    }
}
