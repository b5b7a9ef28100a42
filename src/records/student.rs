//! Student record.

use std::collections::HashMap;

use crate::common::StudentId;

/// A student record: the payload stored under [`StudentId`] in the index.
///
/// The index treats this as opaque. Enrollment and grade bookkeeping is
/// driven by the [`Registrar`](crate::records::Registrar), which updates
/// records through the index's upsert path; the mutators here are therefore
/// crate-private.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    /// Course ids in enrollment order.
    enrolled: Vec<String>,
    grades: HashMap<String, f32>,
}

impl Student {
    /// Create a student with no enrollments.
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            enrolled: Vec::new(),
            grades: HashMap::new(),
        }
    }

    /// The student's id (the index key).
    #[inline]
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// The student's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Course ids this student is enrolled in, in enrollment order.
    #[inline]
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled
    }

    /// Whether the student is enrolled in the given course.
    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.enrolled.iter().any(|c| c == course_id)
    }

    /// The recorded grade for a course, if one has been set.
    pub fn grade(&self, course_id: &str) -> Option<f32> {
        self.grades.get(course_id).copied()
    }

    pub(crate) fn record_enrollment(&mut self, course_id: String) {
        self.enrolled.push(course_id);
    }

    pub(crate) fn record_grade(&mut self, course_id: String, grade: f32) {
        self.grades.insert(course_id, grade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student() {
        let s = Student::new(StudentId::new(1), "Ada");
        assert_eq!(s.id(), StudentId::new(1));
        assert_eq!(s.name(), "Ada");
        assert!(s.enrolled_courses().is_empty());
        assert_eq!(s.grade("CS101"), None);
    }

    #[test]
    fn test_enrollment_and_grades() {
        let mut s = Student::new(StudentId::new(2), "Grace");
        s.record_enrollment("CS101".to_string());
        assert!(s.is_enrolled_in("CS101"));
        assert!(!s.is_enrolled_in("CS201"));

        s.record_grade("CS101".to_string(), 92.5);
        assert_eq!(s.grade("CS101"), Some(92.5));
        // Regrading replaces the stored value.
        s.record_grade("CS101".to_string(), 95.0);
        assert_eq!(s.grade("CS101"), Some(95.0));
    }
}
