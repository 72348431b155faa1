//! NT36860 DSI panel driver
//!
//! Sequences the power/reset/configuration bring-up for panels built
//! around the Novatek NT36860 controller, and the symmetric teardown.
//! Rail order, reset pulse shape, and settle delays are hardware
//! requirements: later rails depend on earlier ones being stable, so the
//! sequence is strictly serial and every delay runs to completion.

use embedded_hal::delay::DelayNs;

use phengos_core::descriptor::{DescriptorSource, DisplayTiming, Orientation};
use phengos_core::phase::PowerPhase;
use phengos_core::traits::{
    CommandLink, LinkConfig, PanelDriver, PanelError, PixelFormat, PowerRail, RailId, RailOp,
    ResetLine, TransportError,
};
use phengos_protocol::dcs;

use super::loader::{apply_overrides, PanelOverrides};
use super::registry;

// Settle delays from the module vendor's bring-up sequence
const VDDI_SETTLE_MS: u32 = 1;
const AVDD_SETTLE_MS: u32 = 1;
const AVEE_SETTLE_MS: u32 = 10;
const RESET_EDGE_GAP_US: u32 = 20;
const RESET_SETTLE_MS: u32 = 10;
const SLEEP_EXIT_SETTLE_MS: u32 = 100;
const DISPLAY_ON_SETTLE_MS: u32 = 40;
const RAIL_OFF_GAP_MS: u32 = 1;

/// Errors that can occur while attaching a panel session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttachError {
    /// No built-in descriptor matches the device identity
    UnknownPanel,
    /// Link configuration was rejected
    Link(TransportError),
}

/// Hardware handles owned by one panel session
pub struct PanelParts<L, R, P, D> {
    pub link: L,
    pub reset: P,
    /// Optional logic supply; absence is not an error
    pub vddi: Option<R>,
    pub avdd: R,
    pub avee: R,
    pub delay: D,
}

/// One NT36860 panel session
///
/// Owns its hardware handles exclusively for its whole lifetime. The
/// surrounding graphics stack serializes all calls; nothing here expects
/// concurrent access.
pub struct Nt36860<L, R, P, D> {
    link: L,
    reset: P,
    vddi: Option<R>,
    avdd: R,
    avee: R,
    delay: D,
    descriptor: DescriptorSource,
    phase: PowerPhase,
}

impl<L, R, P, D> Nt36860<L, R, P, D>
where
    L: CommandLink,
    R: PowerRail,
    P: ResetLine,
    D: DelayNs,
{
    /// Attach a session: match the identity against the built-in registry,
    /// apply any override configuration, and configure the command link.
    pub fn attach(
        identity: &str,
        mut parts: PanelParts<L, R, P, D>,
        overrides: Option<&PanelOverrides<'_>>,
    ) -> Result<Self, AttachError> {
        let builtin = registry::lookup(identity).ok_or(AttachError::UnknownPanel)?;

        let descriptor = match overrides {
            Some(overrides) => apply_overrides(builtin, overrides),
            None => DescriptorSource::Builtin(builtin),
        };

        parts
            .link
            .configure(LinkConfig {
                lanes: 4,
                pixel_format: PixelFormat::Rgb888,
                mode_flags: descriptor.mode_flags(),
            })
            .map_err(AttachError::Link)?;

        Ok(Self {
            link: parts.link,
            reset: parts.reset,
            vddi: parts.vddi,
            avdd: parts.avdd,
            avee: parts.avee,
            delay: parts.delay,
            descriptor,
            phase: PowerPhase::Off,
        })
    }

    /// Current bring-up phase
    pub fn phase(&self) -> PowerPhase {
        self.phase
    }

    /// The descriptor this session operates from
    pub fn descriptor(&self) -> &DescriptorSource {
        &self.descriptor
    }

    /// Detach: consume the session and return the hardware handles.
    /// The caller is responsible for having torn the panel down first.
    pub fn into_parts(self) -> PanelParts<L, R, P, D> {
        PanelParts {
            link: self.link,
            reset: self.reset,
            vddi: self.vddi,
            avdd: self.avdd,
            avee: self.avee,
            delay: self.delay,
        }
    }

    fn switch_on(rail: &mut R, id: RailId) -> Result<(), PanelError> {
        rail.enable().map_err(|source| PanelError::Rail {
            rail: id,
            op: RailOp::Enable,
            source,
        })
    }

    /// Teardown must run to completion, so a rail that refuses to switch
    /// off is logged and skipped.
    fn switch_off_quiet(rail: &mut R, _id: RailId) {
        if let Err(_e) = rail.disable() {
            #[cfg(feature = "defmt")]
            defmt::warn!("{} refused to switch off during teardown: {}", _id, _e);
        }
    }
}

impl<L, R, P, D> PanelDriver for Nt36860<L, R, P, D>
where
    L: CommandLink,
    R: PowerRail,
    P: ResetLine,
    D: DelayNs,
{
    fn prepare(&mut self) -> Result<(), PanelError> {
        if !self.phase.can_prepare() {
            return Err(PanelError::NotReady(self.phase));
        }

        // Rails come up with the panel held in reset. On failure the
        // rails that made it stay up and reset stays asserted; the
        // caller recovers with unprepare.
        self.phase = PowerPhase::RailsEnabling;
        self.reset.assert_reset();

        if let Some(vddi) = self.vddi.as_mut() {
            Self::switch_on(vddi, RailId::Vddi)?;
        }
        self.delay.delay_ms(VDDI_SETTLE_MS);

        Self::switch_on(&mut self.avdd, RailId::Avdd)?;
        self.delay.delay_ms(AVDD_SETTLE_MS);

        Self::switch_on(&mut self.avee, RailId::Avee)?;
        self.delay.delay_ms(AVEE_SETTLE_MS);

        self.phase = PowerPhase::Resetting;
        self.reset.release_reset();
        self.delay.delay_us(RESET_EDGE_GAP_US);
        self.reset.assert_reset();
        self.delay.delay_us(RESET_EDGE_GAP_US);
        self.reset.release_reset();
        self.delay.delay_ms(RESET_SETTLE_MS);

        // Replay the descriptor's init sequence in order, one send per
        // instruction. The first failure aborts with its index; earlier
        // instructions are not retried or rolled back.
        self.phase = PowerPhase::ConfiguringLanes;
        for index in 0..self.descriptor.instruction_count() {
            self.link
                .send(self.descriptor.instruction(index))
                .map_err(|source| PanelError::Instruction { index, source })?;
        }

        self.phase = PowerPhase::SleepExiting;
        self.link
            .send(&[dcs::EXIT_SLEEP_MODE])
            .map_err(|source| PanelError::Command {
                opcode: dcs::EXIT_SLEEP_MODE,
                source,
            })?;
        self.delay.delay_ms(SLEEP_EXIT_SETTLE_MS);

        self.phase = PowerPhase::Prepared;
        Ok(())
    }

    fn enable(&mut self) -> Result<(), PanelError> {
        if !self.phase.can_enable() {
            return Err(PanelError::NotReady(self.phase));
        }

        // The phase advances even if display-on is rejected: the panel is
        // fully configured and a cosmetic command failure must not wedge
        // the session. Callers that care check the returned error.
        let result = self
            .link
            .send(&[dcs::SET_DISPLAY_ON])
            .map_err(|source| PanelError::Command {
                opcode: dcs::SET_DISPLAY_ON,
                source,
            });
        self.delay.delay_ms(DISPLAY_ON_SETTLE_MS);
        self.phase = PowerPhase::Enabled;

        result
    }

    fn disable(&mut self) -> Result<(), PanelError> {
        if !self.phase.can_disable() {
            return Err(PanelError::NotReady(self.phase));
        }

        self.phase = PowerPhase::Disabling;
        match self.link.send(&[dcs::SET_DISPLAY_OFF]) {
            Ok(()) => {
                self.phase = PowerPhase::Prepared;
                Ok(())
            }
            Err(source) => {
                self.phase = PowerPhase::Enabled;
                Err(PanelError::Command {
                    opcode: dcs::SET_DISPLAY_OFF,
                    source,
                })
            }
        }
    }

    fn unprepare(&mut self) -> Result<(), PanelError> {
        if !self.phase.can_unprepare() {
            return Err(PanelError::NotReady(self.phase));
        }

        // Every step is best-effort: the panel is being torn down
        // regardless, and stopping early would leak powered-but-unreset
        // hardware.
        self.phase = PowerPhase::Unpreparing;
        if let Err(_e) = self.link.send(&[dcs::SET_TEAR_OFF]) {
            #[cfg(feature = "defmt")]
            defmt::warn!("tear-off rejected during teardown: {}", _e);
        }
        if let Err(_e) = self.link.send(&[dcs::ENTER_SLEEP_MODE]) {
            #[cfg(feature = "defmt")]
            defmt::warn!("sleep-enter rejected during teardown: {}", _e);
        }

        self.reset.assert_reset();

        // Rails go down in strict reverse order of enablement.
        self.delay.delay_ms(RAIL_OFF_GAP_MS);
        Self::switch_off_quiet(&mut self.avee, RailId::Avee);
        self.delay.delay_ms(RAIL_OFF_GAP_MS);
        Self::switch_off_quiet(&mut self.avdd, RailId::Avdd);
        if let Some(vddi) = self.vddi.as_mut() {
            self.delay.delay_ms(RAIL_OFF_GAP_MS);
            Self::switch_off_quiet(vddi, RailId::Vddi);
        }

        self.phase = PowerPhase::Off;
        Ok(())
    }

    fn mode(&self) -> DisplayTiming {
        *self.descriptor.timing()
    }

    fn orientation(&self) -> Orientation {
        self.descriptor.orientation()
    }
}
