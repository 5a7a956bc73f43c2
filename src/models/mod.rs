//! Domain types for launches and planets.

mod launch;
mod planet;

pub use launch::{Launch, LaunchDraft};
pub use planet::Planet;
