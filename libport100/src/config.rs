// libport100/src/config.rs
//! Runtime configuration: timeouts and sensing parameters.

/// Default bulk read timeout for command round trips (ms).
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 100;

/// Read timeout used while flushing stale data at open (ms).
pub const DEFAULT_DRAIN_TIMEOUT_MS: u64 = 10;

/// Bulk write timeout (ms).
pub const DEFAULT_WRITE_TIMEOUT_MS: u64 = 100;

/// RF response timeout for SENSF_REQ, in milliseconds.
pub const DEFAULT_SENSE_TIMEOUT_MS: f64 = 10.0;

/// Initial guard time used for Type F sensing.
pub const DEFAULT_SENSE_INITIAL_GUARD_TIME: u8 = 28;

/// Command type selected at open. Type 1 is the host command set.
pub const DEFAULT_COMMAND_TYPE: u8 = 1;

/// Tunables for a chipset session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Bulk read timeout for each frame of a command round trip (ms).
    pub read_timeout_ms: u64,
    /// Read timeout while discarding stale input at open (ms).
    pub drain_timeout_ms: u64,
    /// Bulk write timeout handed to the USB transport (ms).
    pub write_timeout_ms: u64,
    /// How long a card may take to answer SENSF_REQ (ms).
    pub sense_timeout_ms: f64,
    /// InSetProtocol initial guard time used for Type F sensing.
    pub sense_initial_guard_time: u8,
    /// Command set selected with SetCommandType at open.
    pub command_type: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            drain_timeout_ms: DEFAULT_DRAIN_TIMEOUT_MS,
            write_timeout_ms: DEFAULT_WRITE_TIMEOUT_MS,
            sense_timeout_ms: DEFAULT_SENSE_TIMEOUT_MS,
            sense_initial_guard_time: DEFAULT_SENSE_INITIAL_GUARD_TIME,
            command_type: DEFAULT_COMMAND_TYPE,
        }
    }
}

impl Config {
    /// Set `read_timeout_ms`.
    pub fn with_read_timeout_ms(mut self, ms: u64) -> Self {
        self.read_timeout_ms = ms;
        self
    }

    /// Set `drain_timeout_ms`.
    pub fn with_drain_timeout_ms(mut self, ms: u64) -> Self {
        self.drain_timeout_ms = ms;
        self
    }

    /// Set `write_timeout_ms`.
    pub fn with_write_timeout_ms(mut self, ms: u64) -> Self {
        self.write_timeout_ms = ms;
        self
    }

    /// Set `sense_timeout_ms`.
    pub fn with_sense_timeout_ms(mut self, ms: f64) -> Self {
        self.sense_timeout_ms = ms;
        self
    }

    /// Set `sense_initial_guard_time`.
    pub fn with_sense_initial_guard_time(mut self, value: u8) -> Self {
        self.sense_initial_guard_time = value;
        self
    }
}
