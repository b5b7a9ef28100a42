//! Course record.

use crate::common::StudentId;

/// A course with a fixed seat count.
///
/// Courses live in a plain key-unique map keyed by course id; they never
/// touch the ordered index. Roster changes go through the
/// [`Registrar`](crate::records::Registrar), which enforces capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: String,
    name: String,
    capacity: usize,
    /// Student ids in enrollment order.
    enrolled: Vec<StudentId>,
    /// Assigned faculty member, if any.
    faculty: Option<String>,
}

impl Course {
    /// Create a course with an empty roster.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            enrolled: Vec::new(),
            faculty: None,
        }
    }

    /// The course id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The course name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of enrolled students.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Enrolled student ids, in enrollment order.
    #[inline]
    pub fn enrolled_students(&self) -> &[StudentId] {
        &self.enrolled
    }

    /// Seats still available.
    pub fn seats_remaining(&self) -> usize {
        self.capacity.saturating_sub(self.enrolled.len())
    }

    /// Whether the roster is at capacity.
    pub fn is_full(&self) -> bool {
        self.enrolled.len() >= self.capacity
    }

    /// Id of the assigned faculty member, if any.
    pub fn faculty_id(&self) -> Option<&str> {
        self.faculty.as_deref()
    }

    pub(crate) fn add_student(&mut self, id: StudentId) {
        self.enrolled.push(id);
    }

    pub(crate) fn set_faculty(&mut self, faculty_id: String) {
        self.faculty = Some(faculty_id);
    }
}
