//! Power phase tracking
//!
//! A session's phase is mutated only by the bring-up state machine and
//! names the stage the hardware is in, so a failed operation leaves the
//! phase pointing at the stage that failed.

/// Bring-up phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerPhase {
    /// Rails down, reset asserted, no activity
    Off,
    /// Supply rails coming up in sequence
    RailsEnabling,
    /// Reset line being pulsed
    Resetting,
    /// Init instructions replaying over the command link
    ConfiguringLanes,
    /// Sleep-exit issued, panel stabilizing
    SleepExiting,
    /// Powered and configured, output off
    Prepared,
    /// Visible output on
    Enabled,
    /// Display-off in flight
    Disabling,
    /// Teardown sequence running
    Unpreparing,
}

impl PowerPhase {
    /// Check if any part of the bring-up sequence has run
    pub fn is_active(&self) -> bool {
        !matches!(self, PowerPhase::Off)
    }

    /// Check if the panel is emitting visible output
    pub fn output_on(&self) -> bool {
        matches!(self, PowerPhase::Enabled)
    }

    /// Check if `prepare` may start
    pub fn can_prepare(&self) -> bool {
        matches!(self, PowerPhase::Off)
    }

    /// Check if `enable` may start
    pub fn can_enable(&self) -> bool {
        matches!(self, PowerPhase::Prepared)
    }

    /// Check if `disable` may start
    pub fn can_disable(&self) -> bool {
        matches!(self, PowerPhase::Enabled)
    }

    /// Check if `unprepare` may start
    ///
    /// Teardown is legal from every phase except `Off` so a failed
    /// `prepare` can be recovered.
    pub fn can_unprepare(&self) -> bool {
        self.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_only_from_off() {
        assert!(PowerPhase::Off.can_prepare());
        assert!(!PowerPhase::Prepared.can_prepare());
        assert!(!PowerPhase::Enabled.can_prepare());
        assert!(!PowerPhase::RailsEnabling.can_prepare());
    }

    #[test]
    fn test_output_gate() {
        assert!(PowerPhase::Prepared.can_enable());
        assert!(!PowerPhase::Enabled.can_enable());
        assert!(!PowerPhase::Off.can_enable());

        assert!(PowerPhase::Enabled.can_disable());
        assert!(!PowerPhase::Prepared.can_disable());
        assert!(!PowerPhase::Off.can_disable());
    }

    #[test]
    fn test_unprepare_recovers_partial_bringup() {
        let partial = [
            PowerPhase::RailsEnabling,
            PowerPhase::Resetting,
            PowerPhase::ConfiguringLanes,
            PowerPhase::SleepExiting,
            PowerPhase::Prepared,
            PowerPhase::Enabled,
        ];

        for phase in partial {
            assert!(phase.can_unprepare());
        }
        assert!(!PowerPhase::Off.can_unprepare());
    }

    #[test]
    fn test_output_on() {
        assert!(PowerPhase::Enabled.output_on());
        assert!(!PowerPhase::Prepared.output_on());
        assert!(!PowerPhase::Disabling.output_on());
    }
}
