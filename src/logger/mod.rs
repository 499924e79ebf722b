//! Diagnostics for the binaries: a `tracing` subscriber on stderr whose
//! filter can be swapped once settings are loaded. Record files written by
//! `flog::LineLogger` never go through here.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
