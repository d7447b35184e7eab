//! Library components of the skiptrace launcher.

pub mod logging;
pub mod pipeline;
