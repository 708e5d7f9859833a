use crate::core::{Result, Student, StudentSource};
use crate::utils::error::RosterError;
use async_stream::stream;
use std::time::Duration;
use tokio_stream::Stream;

/// Per-item fetch delay of the reference scenario.
pub const FETCH_DELAY: Duration = Duration::from_millis(200);

/// An in-memory student source. The roster is fixed at construction and
/// owned for the source's whole lifetime; both retrieval modes walk it in
/// that order with a simulated per-item fetch cost.
pub struct Faculty {
    students: Vec<Student>,
    delay: Duration,
    released: bool,
}

impl Faculty {
    pub fn new(students: Vec<Student>, delay: Duration) -> Self {
        Self {
            students,
            delay,
            released: false,
        }
    }

    /// The four-student reference roster with the default fetch delay.
    pub fn sample() -> Self {
        Self::new(
            vec![
                Student::new("Adam", 17, "Math"),
                Student::new("Beth", 18, "Math"),
                Student::new("Carl", 19, "CS"),
                Student::new("Dora", 20, "CS"),
            ],
            FETCH_DELAY,
        )
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn guard(&self) -> Result<()> {
        if self.released {
            tracing::warn!("retrieval attempted on a released source");
            return Err(RosterError::UseAfterRelease);
        }
        Ok(())
    }
}

impl StudentSource for Faculty {
    fn students(&self) -> Result<impl Iterator<Item = Student> + '_> {
        self.guard()?;
        let delay = self.delay;
        Ok(self.students.iter().map(move |student| {
            if !delay.is_zero() {
                // let's pretend we're doing work
                std::thread::sleep(delay);
            }
            student.clone()
        }))
    }

    fn students_async(&self) -> Result<impl Stream<Item = Student> + '_> {
        self.guard()?;
        let delay = self.delay;
        Ok(stream! {
            for student in &self.students {
                tokio::time::sleep(delay).await;
                yield student.clone();
            }
        })
    }

    fn release(&mut self) {
        // nothing real to free in this toy source, just flip the flag
        if !self.released {
            tracing::debug!("releasing source with {} students", self.students.len());
            self.released = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::pin_mut;
    use tokio_stream::StreamExt;

    fn quiet_sample() -> Faculty {
        Faculty::sample().with_delay(Duration::ZERO)
    }

    #[test]
    fn sync_retrieval_yields_roster_in_order() {
        let faculty = quiet_sample();
        let names: Vec<String> = faculty.students().unwrap().map(|s| s.name).collect();
        assert_eq!(names, vec!["Adam", "Beth", "Carl", "Dora"]);
    }

    #[test]
    fn sync_retrieval_is_restartable() {
        let faculty = quiet_sample();
        let first: Vec<Student> = faculty.students().unwrap().collect();
        let second: Vec<Student> = faculty.students().unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn async_retrieval_matches_sync_order() {
        let faculty = quiet_sample();
        let sync: Vec<Student> = faculty.students().unwrap().collect();
        let streamed: Vec<Student> = tokio_test::block_on(async {
            let stream = faculty.students_async().unwrap();
            pin_mut!(stream);
            let mut out = Vec::new();
            while let Some(student) = stream.next().await {
                out.push(student);
            }
            out
        });
        assert_eq!(streamed, sync);
    }

    #[test]
    fn release_is_idempotent() {
        let mut faculty = quiet_sample();
        faculty.release();
        faculty.release();
        assert_eq!(
            faculty.students().err(),
            Some(RosterError::UseAfterRelease)
        );
    }

    #[test]
    fn retrieval_after_release_fails_in_both_modes() {
        let mut faculty = quiet_sample();
        faculty.release();
        assert!(faculty.students().is_err());
        assert!(faculty.students_async().is_err());
    }
}
