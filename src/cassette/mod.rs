//! Cassette format for recording and replaying source interactions.

pub mod format;
pub mod recorder;
pub mod replayer;
