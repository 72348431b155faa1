//! Power rail and reset line abstractions

/// Panel supply rails, named in enable order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RailId {
    /// Logic supply, optional on some boards
    Vddi,
    /// Positive analog supply
    Avdd,
    /// Negative analog supply
    Avee,
}

/// Which direction a rail was being switched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RailOp {
    Enable,
    Disable,
}

/// Errors that can occur switching a rail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RailError {
    /// The supply rejected the request
    Rejected,
    /// The supply failed to settle within its internal deadline
    Timeout,
}

/// Trait for one independently switchable supply rail
pub trait PowerRail {
    /// Switch the rail on
    fn enable(&mut self) -> Result<(), RailError>;

    /// Switch the rail off
    fn disable(&mut self) -> Result<(), RailError>;
}

/// Trait for the panel reset line
///
/// Fire-and-forget: the line either moves or the board is beyond help,
/// so there is nothing useful to return.
pub trait ResetLine {
    /// Drive the line; `active` asserts reset
    fn set_active(&mut self, active: bool);

    /// Hold the panel in reset
    fn assert_reset(&mut self) {
        self.set_active(true);
    }

    /// Let the panel run
    fn release_reset(&mut self) {
        self.set_active(false);
    }
}
