//! Built-in panel descriptors
//!
//! One entry per supported panel variant, matched against the device
//! identity once at attach. No runtime remapping: a session keeps the
//! descriptor it attached with.

use phengos_core::descriptor::{mode_flags, DisplayTiming, Orientation, PanelDescriptor};

/// Init sequence for the JDI LPM035M407B module (NT36860 controller),
/// per the module vendor's recommended video-mode timing.
static JDI_LPM035M407B_INIT: &[&[u8]] = &[
    &[0xFF, 0x10], // page select
    &[0xFB, 0x01], // reload
    &[0x2A, 0x00, 0x00, 0x05, 0x9F], // horizontal address range
    &[0x2B, 0x00, 0x00, 0x06, 0x3F], // vertical address range
    &[0x35, 0x00], // tear effect on
    &[0xBA, 0x07], // 4-lane single-port
    &[0xBB, 0x13], // video mode with RAM
    &[0xE5, 0x00], // background fill
    &[0xFF, 0x26], // page select, PWM adjustment
    &[0xFB, 0x01], // reload
    &[0x02, 0xC0], // video delay
    &[0x03, 0x00],
    &[0xFF, 0x25], // page select
    &[0xFB, 0x01], // reload
    &[0x62, 0x60], // pin control
    &[0x65, 0x00], // vsout start
    &[0x66, 0x07],
    &[0x67, 0x56], // vsout width
    &[0xFF, 0xD0], // page select
    &[0xFB, 0x01], // reload
    &[0x05, 0x88], // timing adjustment
    &[0xFF, 0x10], // page select
    &[0xFB, 0x01], // reload
    &[0xC0, 0x80], // no compression
    &[0xBE, 0x01, 0x90, 0x0F, 0x39], // RGB control, high frequency
];

static JDI_LPM035M407B: PanelDescriptor = PanelDescriptor {
    timing: DisplayTiming {
        clock_khz: 140_070,
        hdisplay: 1440,
        hsync_start: 1440 + 30,
        hsync_end: 1440 + 30 + 4,
        htotal: 1440 + 30 + 4 + 30,
        vdisplay: 1600,
        vsync_start: 1600 + 30,
        vsync_end: 1600 + 30 + 8,
        vtotal: 1600 + 30 + 8 + 30,
        width_mm: 60,
        height_mm: 66,
        flags: 0,
    },
    init: JDI_LPM035M407B_INIT,
    mode_flags: mode_flags::VIDEO | mode_flags::LPM | mode_flags::CLOCK_NON_CONTINUOUS,
    orientation: Orientation::Normal,
};

static DESCRIPTORS: &[(&str, &PanelDescriptor)] =
    &[("jdi,lpm035m407b-video", &JDI_LPM035M407B)];

/// Match a device identity against the built-in descriptor table
pub fn lookup(identity: &str) -> Option<&'static PanelDescriptor> {
    DESCRIPTORS
        .iter()
        .find(|(id, _)| *id == identity)
        .map(|(_, descriptor)| *descriptor)
}
