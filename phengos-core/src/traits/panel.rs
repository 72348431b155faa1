//! Panel driver trait
//!
//! The upward interface consumed by the orchestrating graphics stack. One
//! implementation per panel controller; the orchestrator guarantees the
//! calls are serialized per session.

use crate::descriptor::{DisplayTiming, Orientation};
use crate::phase::PowerPhase;

use super::power::{RailError, RailId, RailOp};
use super::transport::TransportError;

/// Errors that can occur during panel operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Operation is not legal in the current phase
    NotReady(PowerPhase),
    /// A supply rail failed to switch
    Rail {
        rail: RailId,
        op: RailOp,
        source: RailError,
    },
    /// An init instruction failed to transmit
    Instruction {
        /// Index into the descriptor's init sequence
        index: usize,
        source: TransportError,
    },
    /// A control command (sleep/display) failed to transmit
    Command { opcode: u8, source: TransportError },
}

/// Trait for a bring-up-sequenced display panel
pub trait PanelDriver {
    /// Power the panel and replay its init sequence
    fn prepare(&mut self) -> Result<(), PanelError>;

    /// Turn the visible output on
    fn enable(&mut self) -> Result<(), PanelError>;

    /// Turn the visible output off, leaving the panel powered
    fn disable(&mut self) -> Result<(), PanelError>;

    /// Tear the panel down to the unpowered state
    fn unprepare(&mut self) -> Result<(), PanelError>;

    /// Preferred mode for the graphics stack
    fn mode(&self) -> DisplayTiming;

    /// Mounting orientation for the graphics stack
    fn orientation(&self) -> Orientation;
}
