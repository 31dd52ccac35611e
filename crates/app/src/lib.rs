//! # vacbridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that channel adapters must implement:
//!   - `Assistant` — one query in, one free-text reply out
//! - Own the **vacuum state machine** as a use-case struct:
//!   - `VacuumCommander` — send commands, check acknowledgements, poll and
//!     classify the reported state under the rate-limit cooldown
//! - Orchestrate domain objects without knowing *how* the channel or the
//!   bus transport works
//!
//! ## Dependency rule
//! Depends on `vacbridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod commander;
pub mod ports;
