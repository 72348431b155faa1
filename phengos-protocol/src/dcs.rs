//! Standard DCS opcodes
//!
//! The subset of the MIPI Display Command Set the bring-up state machine
//! issues directly. Panel-specific register writes are carried by the
//! descriptor's init sequence instead and never named here.

/// Enter the low-power sleep state
pub const ENTER_SLEEP_MODE: u8 = 0x10;

/// Leave the sleep state; the panel needs a settle delay afterwards
pub const EXIT_SLEEP_MODE: u8 = 0x11;

/// Blank the visible output
pub const SET_DISPLAY_OFF: u8 = 0x28;

/// Unblank the visible output
pub const SET_DISPLAY_ON: u8 = 0x29;

/// Stop emitting tearing-effect pulses
pub const SET_TEAR_OFF: u8 = 0x34;

/// Start emitting tearing-effect pulses on vblank
pub const SET_TEAR_ON: u8 = 0x35;
