//! HTML page generation.

pub mod preview;
