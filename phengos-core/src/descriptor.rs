//! Panel descriptor types
//!
//! A descriptor bundles everything that characterizes one panel variant:
//! display timing, the DCS init sequence, DSI mode flags, and mounting
//! orientation. Built-in descriptors are process-wide immutable data;
//! a decoded descriptor is owned by the session that built it at attach.

use heapless::Vec;
use phengos_protocol::{DecodeError, Instruction, MAX_INSTRUCTIONS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// DSI mode flag bits, values shared with the host graphics stack
pub mod mode_flags {
    /// Video mode (as opposed to command mode)
    pub const VIDEO: u32 = 1 << 0;
    /// Disable the continuous DSI clock between transmissions
    pub const CLOCK_NON_CONTINUOUS: u32 = 1 << 10;
    /// Transmit data in low-power mode
    pub const LPM: u32 = 1 << 11;
}

/// Display timing, fields in the order the override property supplies them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayTiming {
    /// Pixel clock in kHz
    pub clock_khz: u32,
    /// Horizontal active pixels
    pub hdisplay: u16,
    pub hsync_start: u16,
    pub hsync_end: u16,
    pub htotal: u16,
    /// Vertical active lines
    pub vdisplay: u16,
    pub vsync_start: u16,
    pub vsync_end: u16,
    pub vtotal: u16,
    /// Active area width in mm
    pub width_mm: u16,
    /// Active area height in mm
    pub height_mm: u16,
    /// Timing flags passed through to the graphics stack
    pub flags: u32,
}

impl DisplayTiming {
    /// Vertical refresh rate in Hz, rounded to the nearest integer
    pub fn refresh_hz(&self) -> u32 {
        let total = self.htotal as u32 * self.vtotal as u32;
        if total == 0 {
            return 0;
        }
        (self.clock_khz * 1000 + total / 2) / total
    }
}

/// Panel mounting orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    #[default]
    Normal,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Orientation {
    /// Convert a raw override selector, `None` if out of range
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Orientation::Normal),
            1 => Some(Orientation::Rotate90),
            2 => Some(Orientation::Rotate180),
            3 => Some(Orientation::Rotate270),
            _ => None,
        }
    }
}

/// A built-in panel variant description
///
/// Selected by device-identity match at attach and shared by every session
/// for that variant.
#[derive(Debug, Clone, Copy)]
pub struct PanelDescriptor {
    pub timing: DisplayTiming,
    /// DCS init sequence, one opcode-plus-arguments buffer per entry
    pub init: &'static [&'static [u8]],
    pub mode_flags: u32,
    pub orientation: Orientation,
}

/// An owned descriptor built from override configuration at attach
#[derive(Debug, Clone)]
pub struct DecodedDescriptor {
    pub timing: DisplayTiming,
    pub instructions: Vec<Instruction, MAX_INSTRUCTIONS>,
    pub mode_flags: u32,
    pub orientation: Orientation,
}

impl DecodedDescriptor {
    /// Seed an owned descriptor from a built-in one, materializing its
    /// init table as owned instructions
    pub fn from_builtin(builtin: &PanelDescriptor) -> Result<Self, DecodeError> {
        let mut instructions = Vec::new();
        for raw in builtin.init {
            let instruction = Instruction::from_bytes(raw)?;
            instructions
                .push(instruction)
                .map_err(|_| DecodeError::TooManyFrames)?;
        }

        Ok(Self {
            timing: builtin.timing,
            instructions,
            mode_flags: builtin.mode_flags,
            orientation: builtin.orientation,
        })
    }
}

/// The descriptor a session operates from
///
/// Selected once at attach: either a shared reference into the built-in
/// table, or an owned override. There is no global mutable override state;
/// dropping the session drops the override with it.
#[derive(Debug, Clone)]
pub enum DescriptorSource {
    Builtin(&'static PanelDescriptor),
    Decoded(DecodedDescriptor),
}

impl DescriptorSource {
    pub fn timing(&self) -> &DisplayTiming {
        match self {
            DescriptorSource::Builtin(desc) => &desc.timing,
            DescriptorSource::Decoded(desc) => &desc.timing,
        }
    }

    pub fn mode_flags(&self) -> u32 {
        match self {
            DescriptorSource::Builtin(desc) => desc.mode_flags,
            DescriptorSource::Decoded(desc) => desc.mode_flags,
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            DescriptorSource::Builtin(desc) => desc.orientation,
            DescriptorSource::Decoded(desc) => desc.orientation,
        }
    }

    /// Number of instructions in the init sequence
    pub fn instruction_count(&self) -> usize {
        match self {
            DescriptorSource::Builtin(desc) => desc.init.len(),
            DescriptorSource::Decoded(desc) => desc.instructions.len(),
        }
    }

    /// Raw bytes (opcode + arguments) of the init instruction at `index`
    ///
    /// `index` must be below [`Self::instruction_count`].
    pub fn instruction(&self, index: usize) -> &[u8] {
        match self {
            DescriptorSource::Builtin(desc) => desc.init[index],
            DescriptorSource::Decoded(desc) => desc.instructions[index].as_bytes(),
        }
    }
}
