//! Vacuum commands — one variant per operation the bridge can ask of the
//! assistant.
//!
//! Each command knows the canned phrase it sends, the ack marker expected in
//! the reply, and the state transition an ack implies. Keeping the three
//! together means the command table in one place instead of scattered string
//! literals.

use crate::state::VacuumState;

/// A controllable vacuum operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VacuumCommand {
    Start,
    Stop,
    Pause,
    ReturnToBase,
    Locate,
    /// Clean a single room. The name is forwarded to the assistant as free
    /// text; it is not validated against the room catalog.
    CleanRoom(String),
}

impl VacuumCommand {
    /// Short name used on the bus and in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Pause => "pause",
            Self::ReturnToBase => "return_to_base",
            Self::Locate => "locate",
            Self::CleanRoom(_) => "clean_room",
        }
    }

    /// The canned phrase sent to the assistant.
    #[must_use]
    pub fn phrase(&self) -> String {
        match self {
            Self::Start => "Start cleaning".to_string(),
            Self::Stop => "Stop cleaning".to_string(),
            Self::Pause => "Pause cleaning".to_string(),
            Self::ReturnToBase => "Send vacuum to dock".to_string(),
            Self::Locate => "Locate vacuum".to_string(),
            Self::CleanRoom(room) => format!("Clean {room}"),
        }
    }

    /// The substring expected in the assistant reply when the command was
    /// accepted.
    #[must_use]
    pub fn ack_marker(&self) -> &'static str {
        match self {
            Self::Start | Self::CleanRoom(_) => "starting",
            Self::Stop => "stopping",
            Self::Pause => "pausing",
            Self::ReturnToBase => "docking",
            Self::Locate => "locating",
        }
    }

    /// The state an acknowledged command transitions to, given the state the
    /// bridge currently believes.
    ///
    /// `Locate` never transitions. `Pause` only transitions when the vacuum
    /// is believed to be cleaning — a stray pause ack must not corrupt an
    /// idle or docked state.
    #[must_use]
    pub fn transition(&self, current: VacuumState) -> Option<VacuumState> {
        match self {
            Self::Start | Self::CleanRoom(_) => Some(VacuumState::Cleaning),
            Self::Stop => Some(VacuumState::Idle),
            Self::Pause => (current == VacuumState::Cleaning).then_some(VacuumState::Paused),
            Self::ReturnToBase => Some(VacuumState::Returning),
            Self::Locate => None,
        }
    }

    /// Parse a device-command bus payload.
    ///
    /// Matches the fixed command set exactly; anything else yields `None`
    /// and is ignored by the bridge. Room selection arrives on a separate
    /// topic and never goes through here.
    #[must_use]
    pub fn from_bus_payload(payload: &str) -> Option<Self> {
        match payload {
            "start" => Some(Self::Start),
            "stop" => Some(Self::Stop),
            "pause" => Some(Self::Pause),
            "return_to_base" => Some(Self::ReturnToBase),
            "locate" => Some(Self::Locate),
            _ => None,
        }
    }
}

impl std::fmt::Display for VacuumCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CleanRoom(room) => write!(f, "clean_room({room})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_the_canned_phrases() {
        assert_eq!(VacuumCommand::Start.phrase(), "Start cleaning");
        assert_eq!(VacuumCommand::Stop.phrase(), "Stop cleaning");
        assert_eq!(VacuumCommand::Pause.phrase(), "Pause cleaning");
        assert_eq!(VacuumCommand::ReturnToBase.phrase(), "Send vacuum to dock");
        assert_eq!(VacuumCommand::Locate.phrase(), "Locate vacuum");
    }

    #[test]
    fn should_interpolate_room_name_into_phrase() {
        let cmd = VacuumCommand::CleanRoom("Kitchen".to_string());
        assert_eq!(cmd.phrase(), "Clean Kitchen");
    }

    #[test]
    fn should_pair_each_command_with_its_ack_marker() {
        assert_eq!(VacuumCommand::Start.ack_marker(), "starting");
        assert_eq!(
            VacuumCommand::CleanRoom("Office".to_string()).ack_marker(),
            "starting"
        );
        assert_eq!(VacuumCommand::Stop.ack_marker(), "stopping");
        assert_eq!(VacuumCommand::Pause.ack_marker(), "pausing");
        assert_eq!(VacuumCommand::ReturnToBase.ack_marker(), "docking");
        assert_eq!(VacuumCommand::Locate.ack_marker(), "locating");
    }

    #[test]
    fn should_transition_start_to_cleaning_from_any_state() {
        for state in [
            VacuumState::Idle,
            VacuumState::Cleaning,
            VacuumState::Paused,
            VacuumState::Returning,
            VacuumState::Docked,
        ] {
            assert_eq!(
                VacuumCommand::Start.transition(state),
                Some(VacuumState::Cleaning)
            );
        }
    }

    #[test]
    fn should_guard_pause_transition_on_cleaning() {
        assert_eq!(
            VacuumCommand::Pause.transition(VacuumState::Cleaning),
            Some(VacuumState::Paused)
        );
        assert_eq!(VacuumCommand::Pause.transition(VacuumState::Idle), None);
        assert_eq!(VacuumCommand::Pause.transition(VacuumState::Docked), None);
        assert_eq!(VacuumCommand::Pause.transition(VacuumState::Returning), None);
    }

    #[test]
    fn should_never_transition_on_locate() {
        for state in [VacuumState::Idle, VacuumState::Cleaning, VacuumState::Docked] {
            assert_eq!(VacuumCommand::Locate.transition(state), None);
        }
    }

    #[test]
    fn should_parse_the_bus_command_set() {
        assert_eq!(
            VacuumCommand::from_bus_payload("start"),
            Some(VacuumCommand::Start)
        );
        assert_eq!(
            VacuumCommand::from_bus_payload("stop"),
            Some(VacuumCommand::Stop)
        );
        assert_eq!(
            VacuumCommand::from_bus_payload("pause"),
            Some(VacuumCommand::Pause)
        );
        assert_eq!(
            VacuumCommand::from_bus_payload("return_to_base"),
            Some(VacuumCommand::ReturnToBase)
        );
        assert_eq!(
            VacuumCommand::from_bus_payload("locate"),
            Some(VacuumCommand::Locate)
        );
    }

    #[test]
    fn should_reject_unknown_bus_payloads() {
        assert_eq!(VacuumCommand::from_bus_payload("START"), None);
        assert_eq!(VacuumCommand::from_bus_payload("clean"), None);
        assert_eq!(VacuumCommand::from_bus_payload(""), None);
        assert_eq!(VacuumCommand::from_bus_payload("start "), None);
    }

    #[test]
    fn should_display_room_command_with_room_name() {
        let cmd = VacuumCommand::CleanRoom("Bedroom".to_string());
        assert_eq!(cmd.to_string(), "clean_room(Bedroom)");
        assert_eq!(VacuumCommand::ReturnToBase.to_string(), "return_to_base");
    }
}
