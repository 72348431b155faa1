//! DSI panel drivers

pub mod loader;
pub mod nt36860;
pub mod registry;

pub use loader::{apply_overrides, PanelOverrides};
pub use nt36860::{AttachError, Nt36860, PanelParts};
