use crate::domain::model::Student;
use crate::utils::error::{Result, RosterError};

/// Labels a student (or the absence of one) for display.
///
/// Pure and total: depends only on `faculty` and `name`.
pub fn classify(student: Option<&Student>) -> String {
    match student {
        Some(Student { name, faculty, .. }) if faculty == "Math" => {
            format!("Math student: {}", name)
        }
        Some(Student { name, .. }) => format!("Non-math student: {}", name),
        None => "Is this even a student?".to_string(),
    }
}

/// Picks the student with the maximum age. Ties go to the record appearing
/// later in source order, matching a stable age-ascending sort's last
/// element.
pub fn last_by_age<I>(students: I) -> Result<Student>
where
    I: IntoIterator<Item = Student>,
{
    let mut last: Option<Student> = None;
    for student in students {
        match &last {
            Some(current) if student.age < current.age => {}
            _ => last = Some(student),
        }
    }
    last.ok_or(RosterError::EmptySequence)
}
