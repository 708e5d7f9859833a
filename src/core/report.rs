use crate::core::StudentSource;
use crate::domain::services::{classify, last_by_age};
use crate::utils::error::Result;
use futures_util::pin_mut;
use tokio_stream::StreamExt;

/// Drives the reference scenario against any student source: one
/// classification line per asynchronously fetched student, a blank line,
/// then the last student by age taken from the synchronous sequence.
pub struct RosterReport<S: StudentSource> {
    source: S,
}

impl<S: StudentSource> RosterReport<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        tracing::debug!("streaming students asynchronously");
        let stream = self.source.students_async()?;
        pin_mut!(stream);
        while let Some(student) = stream.next().await {
            lines.push(classify(Some(&student)));
        }
        tracing::info!("classified {} students", lines.len());

        lines.push(String::new());

        let last = last_by_age(self.source.students()?)?;
        lines.push(format!("Last student is {}", last.name));

        Ok(lines)
    }

    /// Consumes the report and releases the underlying source.
    pub fn finish(mut self) {
        self.source.release();
    }
}
