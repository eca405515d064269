//! F1 Fantasy Service Library
//!
//! Configuration, round input files, reports and the template data directory
//! around the roster optimizer. The `f1-fantasy` binary is a thin layer over
//! this crate.

pub mod config;
pub mod input;
pub mod logging;
pub mod report;
pub mod service;
pub mod setup;

pub use config::{load_config, LoggingConfig, ServiceConfig, ServiceSettings, CONFIG_FILE};
pub use input::RoundInput;
pub use logging::initialize_logging;
pub use report::{render_report, write_report};
pub use service::{run_round, RunOverrides, RunSummary};
pub use setup::write_template;
