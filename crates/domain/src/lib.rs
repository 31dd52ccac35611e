//! # vacbridge-domain
//!
//! Pure domain model for the vacbridge assistant-to-MQTT vacuum bridge.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **canonical vacuum state** the bridge tracks
//! - Define **commands** (phrase sent to the assistant, expected ack marker,
//!   resulting state transition, bus payload parsing)
//! - Define the **reply classifier** — the deterministic mapping from
//!   assistant free text to a semantic outcome
//! - Define the **room catalog** and the room-select sentinel
//! - Define the **device identity** used for bus topics and discovery
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod classifier;
pub mod command;
pub mod device;
pub mod error;
pub mod rooms;
pub mod state;
pub mod time;
