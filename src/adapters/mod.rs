//! Adapter implementations for port traits.
//!
//! - `live`: real HTTP sources and the system clock.
//! - `recording`: wraps another adapter and records every interaction.
//! - `replaying`: serves interactions from a recorded cassette.

pub mod live;
pub mod recording;
pub mod replaying;
