use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Immutable student record. Equality is value-based over all three fields;
/// the natural order is age ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub age: u32,
    pub faculty: String,
}

impl Student {
    pub fn new(name: impl Into<String>, age: u32, faculty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            faculty: faculty.into(),
        }
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        // Age first; name/faculty only keep the order total and consistent
        // with Eq. Source-order tie rules live in the queries, not here.
        self.age
            .cmp(&other.age)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.faculty.cmp(&other.faculty))
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
