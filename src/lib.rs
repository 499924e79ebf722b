pub mod flog;
pub mod logger;
pub mod settings;
