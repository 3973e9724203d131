//! CLI command handlers.

pub mod batch;
pub mod config;
pub mod info;
pub mod light;
pub mod mean;
pub mod person;

pub use batch::{BatchCommandInput, run_batch};
pub use config::run_config_show;
pub use info::run_info;
pub use light::run_light;
pub use mean::run_mean;
pub use person::{run_person, run_rename};
