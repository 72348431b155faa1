//! Hardware abstraction traits
//!
//! These traits define the interface between the bring-up state machine
//! and hardware-specific implementations.

pub mod panel;
pub mod power;
pub mod transport;

pub use panel::{PanelDriver, PanelError};
pub use power::{PowerRail, RailError, RailId, RailOp, ResetLine};
pub use transport::{CommandLink, LinkConfig, PixelFormat, TransportError};
