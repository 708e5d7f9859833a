use crate::domain::model::Student;
use crate::utils::error::Result;
use tokio_stream::Stream;

/// A source of students with two retrieval modes over the same fixed,
/// ordered collection.
///
/// Both modes are restartable: every call starts a fresh sequence from the
/// first record, there is no shared cursor. A released source refuses
/// further retrieval with `RosterError::UseAfterRelease`.
pub trait StudentSource {
    /// Lazy synchronous sequence in source order. Each step blocks the
    /// calling thread for the per-item fetch delay before yielding.
    fn students(&self) -> Result<impl Iterator<Item = Student> + '_>;

    /// Same records in the same order, but each step suspends the consuming
    /// task instead of blocking a thread. Dropping the stream between yields
    /// cancels all further production.
    fn students_async(&self) -> Result<impl Stream<Item = Student> + '_>;

    /// Releases the source. Idempotent; retrieval after release fails.
    fn release(&mut self);
}
