//! Reporting of computed series to a remote collector

mod client;
mod payload;

pub use client::{Outcome, Reporter};
pub use payload::Payload;
