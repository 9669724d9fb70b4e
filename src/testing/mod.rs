//! Test helpers: ready-made pages, a headless driver and text snapshots.

pub mod fixtures;
pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{dom_to_string, element_to_string};
