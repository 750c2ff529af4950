//! Testing utilities and simulated list host for Reel

pub mod helpers;
pub mod sim;

pub use helpers::*;
pub use sim::{RendererCall, SimContainer, SimListHost, SimRenderer};
