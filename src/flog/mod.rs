//! File logging: one append-only text file per `LineLogger`, one record per call.
//!
//! Records look like `[13.05.2019 14:07:22]: INFO Service started\n`.

mod error;
pub use error::*;

mod level;
pub use level::*;

mod lock;
pub use lock::*;

mod file_logger;
pub use file_logger::*;
