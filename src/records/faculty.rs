//! Faculty record.

/// A faculty member and the courses assigned to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Faculty {
    id: String,
    name: String,
    /// Course ids in assignment order.
    assigned: Vec<String>,
}

impl Faculty {
    /// Create a faculty member with no assignments.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            assigned: Vec::new(),
        }
    }

    /// The faculty id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The faculty member's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned course ids, in assignment order.
    #[inline]
    pub fn assigned_courses(&self) -> &[String] {
        &self.assigned
    }

    pub(crate) fn assign_course(&mut self, course_id: String) {
        self.assigned.push(course_id);
    }
}
