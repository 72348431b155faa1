//! DSI command link abstraction
//!
//! The link carries raw DCS command buffers to the panel. The state
//! machine performs no batching: each instruction is one blocking send.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur on the command link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Peripheral did not acknowledge the write
    Nack,
    /// Transfer timed out
    Timeout,
    /// Bus or controller fault
    Bus,
}

/// Wire pixel formats the link can be asked to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PixelFormat {
    Rgb888,
    Rgb666,
    Rgb565,
}

/// One-time link setup, pushed at attach before any command is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkConfig {
    /// Number of data lanes to drive
    pub lanes: u8,
    pub pixel_format: PixelFormat,
    /// DSI mode flag bits from the session descriptor
    pub mode_flags: u32,
}

/// Trait for the DSI command transport
pub trait CommandLink {
    /// Apply one-time link configuration
    fn configure(&mut self, config: LinkConfig) -> Result<(), TransportError>;

    /// Send one raw command buffer (opcode + arguments), blocking
    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError>;
}
