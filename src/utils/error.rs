use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Source already released, retrieval is no longer possible")]
    UseAfterRelease,

    #[error("Cannot pick the last student of an empty roster")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, RosterError>;
