//! The `settings` module loads the binaries' configuration.
//! See `bin/flog_demo.rs` for a binary exercising it.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
