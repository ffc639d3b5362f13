//! Per-session state of the drill: quiz questions, streak and browse cursors.
//!
//! Nothing here is persisted; a new session starts from the defaults.

pub mod practice;
pub mod quiz;
