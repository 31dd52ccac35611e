//! Vacuum commander — the state machine behind every bus command and poll.

use std::time::Duration;

use vacbridge_domain::classifier::{self, Activity};
use vacbridge_domain::command::VacuumCommand;
use vacbridge_domain::error::BridgeError;
use vacbridge_domain::state::VacuumState;
use vacbridge_domain::time::{self, Timestamp};

use crate::ports::Assistant;

/// Outcome of one polling attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The poll cooldown had not elapsed; no exchange happened.
    Skipped,
    /// The state was resolved through the assistant (possibly unchanged).
    Updated(VacuumState),
}

/// Drives the vacuum through the assistant channel and tracks its state.
///
/// Exactly one task owns the commander; bus commands from other tasks are
/// funneled to that owner through a channel, so assistant exchanges are
/// strictly sequential and the state needs no locking.
pub struct VacuumCommander<A> {
    assistant: A,
    state: VacuumState,
    last_update: Option<Timestamp>,
    cooldown: Duration,
}

impl<A: Assistant> VacuumCommander<A> {
    /// Create a commander in the default `idle` state with no poll history,
    /// so the first [`update_state`](Self::update_state) call always polls.
    pub fn new(assistant: A, cooldown: Duration) -> Self {
        Self {
            assistant,
            state: VacuumState::default(),
            last_update: None,
            cooldown,
        }
    }

    /// The last known state.
    #[must_use]
    pub fn state(&self) -> VacuumState {
        self.state
    }

    /// When the state was last confirmed; `None` before the first
    /// confirmation.
    #[must_use]
    pub fn last_update(&self) -> Option<Timestamp> {
        self.last_update
    }

    /// Send a command phrase and check the reply for the ack marker.
    ///
    /// Returns whether the assistant acknowledged. On ack the command's
    /// state transition is applied; an ack in a state the command cannot
    /// transition from (pausing while docked) still reports `true` while
    /// leaving the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Channel`] when the exchange itself fails. A
    /// missing ack marker is a plain `Ok(false)`, not an error.
    pub async fn execute(&mut self, command: &VacuumCommand) -> Result<bool, BridgeError> {
        let reply = self.assistant.assist(&command.phrase()).await?;
        let acknowledged = classifier::command_acknowledged(reply.text(), command.ack_marker());
        if acknowledged {
            if let Some(next) = command.transition(self.state) {
                self.set_state(next);
            }
        } else {
            tracing::warn!(
                command = command.name(),
                reply = reply.text(),
                "command not acknowledged"
            );
        }
        Ok(acknowledged)
    }

    /// Start cleaning everywhere.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn clean(&mut self) -> Result<bool, BridgeError> {
        self.execute(&VacuumCommand::Start).await
    }

    /// Start cleaning a single room.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn clean_room(&mut self, room: impl Into<String>) -> Result<bool, BridgeError> {
        self.execute(&VacuumCommand::CleanRoom(room.into())).await
    }

    /// Pause the current run.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn pause(&mut self) -> Result<bool, BridgeError> {
        self.execute(&VacuumCommand::Pause).await
    }

    /// Stop and go idle.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn stop(&mut self) -> Result<bool, BridgeError> {
        self.execute(&VacuumCommand::Stop).await
    }

    /// Send the vacuum back to its dock.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn return_to_base(&mut self) -> Result<bool, BridgeError> {
        self.execute(&VacuumCommand::ReturnToBase).await
    }

    /// Make the vacuum announce itself. Never changes state.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn locate(&mut self) -> Result<bool, BridgeError> {
        self.execute(&VacuumCommand::Locate).await
    }

    /// Refresh the state through the assistant, honoring the poll cooldown.
    ///
    /// Asks whether the vacuum is docked first and only asks what it is
    /// doing when it is not. A reply that classifies to nothing known keeps
    /// the previous state and leaves the poll clock untouched, so the next
    /// tick retries instead of waiting out a full cooldown.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Channel`] when an exchange fails and
    /// [`BridgeError::Classification`] when the activity reply matches no
    /// known marker. Neither advances the poll clock.
    pub async fn update_state(&mut self) -> Result<PollOutcome, BridgeError> {
        if let Some(previous) = self.last_update {
            let elapsed = time::elapsed_since(previous);
            if elapsed < self.cooldown {
                tracing::debug!(
                    elapsed_secs = elapsed.as_secs(),
                    "skipping state poll, cooldown not elapsed"
                );
                return Ok(PollOutcome::Skipped);
            }
        }

        let docked_reply = self.assistant.assist(classifier::DOCKED_QUERY).await?;
        tracing::debug!(reply = docked_reply.text(), "docked query answered");
        if classifier::reports_docked(docked_reply.text()) {
            self.set_state(VacuumState::Docked);
            return Ok(PollOutcome::Updated(self.state));
        }

        let activity_reply = self.assistant.assist(classifier::ACTIVITY_QUERY).await?;
        tracing::debug!(reply = activity_reply.text(), "activity query answered");
        let next = match classifier::classify_activity(activity_reply.text()) {
            Activity::Cleaning => VacuumState::Cleaning,
            Activity::Paused => VacuumState::Paused,
            // Not docked and not running or paused.
            Activity::Idle => VacuumState::Idle,
            Activity::Unknown => {
                return Err(BridgeError::Classification {
                    response: activity_reply.text().to_owned(),
                });
            }
        };
        self.set_state(next);
        Ok(PollOutcome::Updated(self.state))
    }

    /// Record a confirmed state and stamp the poll clock, even when the
    /// state did not change.
    fn set_state(&mut self, next: VacuumState) {
        if self.state != next {
            tracing::info!(from = %self.state, to = %next, "vacuum state changed");
        }
        self.state = next;
        self.last_update = Some(time::now());
    }
}
