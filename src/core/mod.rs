pub mod faculty;
pub mod report;

pub use crate::domain::model::Student;
pub use crate::domain::ports::StudentSource;
pub use crate::utils::error::Result;
