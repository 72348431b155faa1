//! Descriptor override loading
//!
//! Debug-only attach path: an override source supplies named, independently
//! optional fields that are layered over the matched built-in descriptor.
//! A field that is absent or malformed keeps the built-in value; only a
//! fully decoded instruction stream replaces the init sequence. Runs once,
//! synchronously, before the session is reachable by anything else.

use phengos_core::descriptor::{
    DecodedDescriptor, DescriptorSource, DisplayTiming, Orientation, PanelDescriptor,
};
use phengos_protocol::decode_stream;

/// Override fields, all independently optional
///
/// A missing override source entirely is equivalent to
/// `PanelOverrides::default()`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelOverrides<'a> {
    /// Raw orientation selector (0-3)
    pub orientation: Option<u32>,
    /// DSI mode flag bits, replacing the built-in flags verbatim
    pub mode_flags: Option<u32>,
    /// Twelve raw timing values in property order: clock, h geometry,
    /// v geometry, physical size, flags
    pub timing: Option<[u32; 12]>,
    /// Length-prefixed init instruction stream
    pub instruction_stream: Option<&'a [u8]>,
}

/// Build the session descriptor from the built-in entry and overrides
///
/// Falls back to the shared built-in descriptor only if the owned copy
/// cannot be materialized at all.
pub fn apply_overrides(
    builtin: &'static PanelDescriptor,
    overrides: &PanelOverrides<'_>,
) -> DescriptorSource {
    let mut descriptor = match DecodedDescriptor::from_builtin(builtin) {
        Ok(descriptor) => descriptor,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("built-in init table exceeds decoder limits: {}", _e);
            return DescriptorSource::Builtin(builtin);
        }
    };

    if let Some(raw) = overrides.orientation {
        match Orientation::from_raw(raw) {
            Some(orientation) => descriptor.orientation = orientation,
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("orientation override out of range: {}", raw);
            }
        }
    }

    if let Some(flags) = overrides.mode_flags {
        descriptor.mode_flags = flags;
    }

    if let Some(raw) = &overrides.timing {
        match timing_from_raw(raw) {
            Some(timing) => descriptor.timing = timing,
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("timing override has out-of-range geometry, keeping built-in");
            }
        }
    }

    if let Some(stream) = overrides.instruction_stream {
        match decode_stream(stream) {
            Ok(instructions) => descriptor.instructions = instructions,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("init stream override rejected: {}", _e);
            }
        }
    }

    log_summary(&descriptor);
    DescriptorSource::Decoded(descriptor)
}

/// Reassemble a timing override; geometry fields must fit 16 bits
fn timing_from_raw(raw: &[u32; 12]) -> Option<DisplayTiming> {
    let geometry = |value: u32| u16::try_from(value).ok();

    Some(DisplayTiming {
        clock_khz: raw[0],
        hdisplay: geometry(raw[1])?,
        hsync_start: geometry(raw[2])?,
        hsync_end: geometry(raw[3])?,
        htotal: geometry(raw[4])?,
        vdisplay: geometry(raw[5])?,
        vsync_start: geometry(raw[6])?,
        vsync_end: geometry(raw[7])?,
        vtotal: geometry(raw[8])?,
        width_mm: geometry(raw[9])?,
        height_mm: geometry(raw[10])?,
        flags: raw[11],
    })
}

fn log_summary(_descriptor: &DecodedDescriptor) {
    #[cfg(feature = "defmt")]
    {
        let timing = &_descriptor.timing;
        defmt::debug!(
            "session descriptor: {}x{} @ {} Hz, clock {} kHz, flags {:#x}",
            timing.hdisplay,
            timing.vdisplay,
            timing.refresh_hz(),
            timing.clock_khz,
            _descriptor.mode_flags,
        );
        defmt::debug!(
            "  orientation {}, {} init instructions",
            _descriptor.orientation,
            _descriptor.instructions.len(),
        );
    }
}
