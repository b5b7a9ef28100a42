//! Student identifier type.

use std::fmt;

/// Identifies a student record.
///
/// The student id is the key the B+-tree index is ordered by. Using a
/// newtype instead of a bare `u32` keeps ids from being confused with other
/// integers (course capacities, grades) at compile time.
///
/// # Example
/// ```
/// use campusdb::common::StudentId;
///
/// let id = StudentId::new(42);
/// assert_eq!(id.0, 42);
/// assert!(StudentId::new(1) < StudentId::new(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(pub u32);

impl StudentId {
    /// Smallest possible id. Scanning from here visits the whole roster.
    pub const MIN: StudentId = StudentId(0);

    /// Create a new StudentId.
    #[inline]
    pub fn new(id: u32) -> Self {
        StudentId(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_new() {
        let id = StudentId::new(42);
        assert_eq!(id.0, 42);
    }

    #[test]
    fn test_student_id_ordering() {
        assert!(StudentId::new(1) < StudentId::new(2));
        assert!(StudentId::new(5) > StudentId::new(3));
        assert!(StudentId::MIN <= StudentId::new(0));
    }

    #[test]
    fn test_student_id_display() {
        assert_eq!(format!("{}", StudentId::new(42)), "42");
    }
}
