//! Shared test infrastructure for ws2812-breath integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::time::Duration;
use ws2812_breath::{SpiConfig, SpiTransport, TickTimer, Ws2812Driver, buffer_len};

// ============================================================================
// Reference configuration
// ============================================================================

/// Strip length used across the integration tests.
pub const LEDS: usize = 10;

/// Symbol buffer length for [`LEDS`].
pub const BUF: usize = buffer_len(LEDS);

pub type TestDriver = Ws2812Driver<MockTransport, MockTimer, LEDS, BUF>;

// ============================================================================
// Mock Transport
// ============================================================================

/// Error returned by a [`MockTransport`] told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFailed;

/// Mock SPI transport that records configuration and written frames.
pub struct MockTransport {
    pub ready: bool,
    pub fail_writes: bool,
    pub configured: Option<SpiConfig>,
    pub writes: usize,
    pub last_frame: heapless::Vec<u8, BUF>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            ready: true,
            fail_writes: false,
            configured: None,
            writes: 0,
            last_frame: heapless::Vec::new(),
        }
    }

    pub fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }
}

impl SpiTransport for MockTransport {
    type Error = WriteFailed;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn configure(&mut self, config: &SpiConfig) -> Result<(), WriteFailed> {
        self.configured = Some(*config);
        Ok(())
    }

    fn write(&mut self, buffer: &[u8]) -> Result<(), WriteFailed> {
        if self.fail_writes {
            return Err(WriteFailed);
        }
        self.writes += 1;
        self.last_frame.clear();
        let _ = self.last_frame.extend_from_slice(buffer);
        Ok(())
    }
}

// ============================================================================
// Mock Timer
// ============================================================================

/// What a [`MockTimer`] currently has scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Periodic(Duration),
    OneShot(Duration),
}

/// Mock timer that tracks arm/cancel calls without any real scheduling.
pub struct MockTimer {
    pub state: TimerState,
    pub starts: usize,
    pub stops: usize,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            starts: 0,
            stops: 0,
        }
    }
}

impl TickTimer for MockTimer {
    fn start_periodic(&mut self, interval: Duration) {
        self.state = TimerState::Periodic(interval);
        self.starts += 1;
    }

    fn start_oneshot(&mut self, delay: Duration) {
        self.state = TimerState::OneShot(delay);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.state = TimerState::Idle;
        self.stops += 1;
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Returns an initialized driver over fresh mocks.
pub fn ready_driver() -> TestDriver {
    let mut driver = TestDriver::new(MockTransport::new(), MockTimer::new());
    driver.init().unwrap();
    driver
}
