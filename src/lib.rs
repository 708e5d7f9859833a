pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{faculty::Faculty, report::RosterReport};
pub use crate::domain::model::Student;
pub use crate::domain::ports::StudentSource;
pub use crate::domain::services::{classify, last_by_age};
pub use crate::utils::error::{Result, RosterError};
