//! Error types for CampusDB.

use crate::common::StudentId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in CampusDB.
///
/// A single crate-wide error type keeps handling consistent across the index
/// and the record-management layer. Note the split in failure semantics:
/// the index itself can only fail at construction time
/// ([`Error::InvalidConfiguration`]); every other variant belongs to the
/// registrar, where absence of a referenced record or a full course is a
/// caller-visible condition, never a panic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The requested B+-tree order is too small to support node splitting.
    ///
    /// Raised only at construction time, before any data is stored.
    #[error("invalid index configuration: order {0} is below the minimum of 3")]
    InvalidConfiguration(usize),

    /// No student record exists for the given id.
    #[error("student {0} not found")]
    StudentNotFound(StudentId),

    /// No course exists with the given id.
    #[error("course {0:?} not found")]
    CourseNotFound(String),

    /// No faculty member exists with the given id.
    #[error("faculty {0:?} not found")]
    FacultyNotFound(String),

    /// The course roster is at its maximum capacity.
    #[error("course {course:?} is full ({capacity} seats)")]
    CourseFull {
        /// Course that rejected the enrollment.
        course: String,
        /// The course's fixed seat count.
        capacity: usize,
    },

    /// The student is already on the course roster.
    #[error("student {student} is already enrolled in {course:?}")]
    AlreadyEnrolled {
        /// Student whose enrollment was rejected.
        student: StudentId,
        /// Course the student is already enrolled in.
        course: String,
    },

    /// A grade was recorded for a course the student is not enrolled in.
    #[error("student {student} is not enrolled in {course:?}")]
    NotEnrolled {
        /// Student the grade was recorded for.
        student: StudentId,
        /// Course the student is not enrolled in.
        course: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfiguration(2);
        assert_eq!(
            format!("{}", err),
            "invalid index configuration: order 2 is below the minimum of 3"
        );

        let err = Error::StudentNotFound(StudentId::new(42));
        assert_eq!(format!("{}", err), "student 42 not found");

        let err = Error::CourseFull {
            course: "CS101".to_string(),
            capacity: 30,
        };
        assert_eq!(format!("{}", err), "course \"CS101\" is full (30 seats)");
    }

    #[test]
    fn test_result_type_alias() {
        // This function returns our Result type
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
