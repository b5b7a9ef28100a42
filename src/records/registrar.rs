//! Registrar - the record-management facade.
//!
//! Owns the three stores and enforces the cross-record rules (capacity,
//! enrollment-before-grading, faculty assignment). Students ride the
//! ordered index; courses and faculty are plain key-unique maps.

use std::collections::HashMap;

use tracing::debug;

use crate::common::{Error, Result, StudentId};
use crate::index::BPlusTree;
use crate::records::{Course, Faculty, Student};

/// Manages student, course, and faculty records.
///
/// The student store is a [`BPlusTree`] keyed by [`StudentId`], which gives
/// id-ordered roster listings via the leaf chain on top of point lookup.
/// The index exposes only lookup, upsert, and ordered scans, so student
/// mutations here follow a read-clone-reinsert pattern through the upsert
/// path; each such update is a single complete index operation.
///
/// # Usage
/// ```
/// use campusdb::common::StudentId;
/// use campusdb::records::Registrar;
///
/// let mut registrar = Registrar::new();
/// registrar.add_student(StudentId::new(42), "Ada Lovelace");
/// registrar.add_course("CS101", "Intro to CS", 30);
/// registrar.enroll(StudentId::new(42), "CS101")?;
///
/// let student = registrar.student(StudentId::new(42)).unwrap();
/// assert!(student.is_enrolled_in("CS101"));
/// # Ok::<(), campusdb::common::Error>(())
/// ```
pub struct Registrar {
    /// Student records, ordered by id.
    students: BPlusTree<StudentId, Student>,
    /// Courses by course id.
    courses: HashMap<String, Course>,
    /// Faculty by faculty id.
    faculty: HashMap<String, Faculty>,
}

impl Registrar {
    /// Create an empty registrar. The student index uses
    /// [`DEFAULT_ORDER`](crate::common::config::DEFAULT_ORDER).
    pub fn new() -> Self {
        Self {
            students: BPlusTree::default(),
            courses: HashMap::new(),
            faculty: HashMap::new(),
        }
    }

    // ========================================================================
    // Students
    // ========================================================================

    /// Add a student, replacing any existing record with the same id.
    pub fn add_student(&mut self, id: StudentId, name: impl Into<String>) {
        debug!(student = %id, "adding student record");
        self.students.insert(id, Student::new(id, name));
    }

    /// Look up a student by id.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.search(&id)
    }

    /// Number of student records.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// All students in ascending id order (one leaf-chain walk).
    pub fn roster(&self) -> impl Iterator<Item = &Student> {
        self.students.iter().map(|(_, student)| student)
    }

    /// Students with id `from` or greater, in ascending id order.
    pub fn roster_from(&self, from: StudentId) -> impl Iterator<Item = &Student> + '_ {
        // The index scan starts at the covering leaf; trim the entries of
        // that leaf that sort below the requested id.
        self.students
            .scan_from(&from)
            .skip_while(move |(id, _)| **id < from)
            .map(|(_, student)| student)
    }

    // ========================================================================
    // Courses
    // ========================================================================

    /// Add a course, replacing any existing course with the same id.
    pub fn add_course(&mut self, id: impl Into<String>, name: impl Into<String>, capacity: usize) {
        let id = id.into();
        debug!(course = %id, capacity, "adding course");
        self.courses.insert(id.clone(), Course::new(id, name, capacity));
    }

    /// Look up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    /// All courses, in no particular order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    // ========================================================================
    // Faculty
    // ========================================================================

    /// Add a faculty member, replacing any existing record with the same id.
    pub fn add_faculty(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        self.faculty.insert(id.clone(), Faculty::new(id, name));
    }

    /// Look up a faculty member by id.
    pub fn faculty_member(&self, id: &str) -> Option<&Faculty> {
        self.faculty.get(id)
    }

    /// Assign a faculty member to a course, recording it on both sides.
    ///
    /// # Errors
    /// [`Error::CourseNotFound`] / [`Error::FacultyNotFound`] if either id
    /// is unknown.
    pub fn assign_faculty(&mut self, course_id: &str, faculty_id: &str) -> Result<()> {
        if !self.faculty.contains_key(faculty_id) {
            return Err(Error::FacultyNotFound(faculty_id.to_string()));
        }
        let course = self
            .courses
            .get_mut(course_id)
            .ok_or_else(|| Error::CourseNotFound(course_id.to_string()))?;
        course.set_faculty(faculty_id.to_string());
        if let Some(member) = self.faculty.get_mut(faculty_id) {
            member.assign_course(course_id.to_string());
        }
        Ok(())
    }

    // ========================================================================
    // Enrollment and grades
    // ========================================================================

    /// Enroll a student in a course, consuming one seat.
    ///
    /// # Errors
    /// - [`Error::StudentNotFound`] / [`Error::CourseNotFound`] if either
    ///   id is unknown
    /// - [`Error::AlreadyEnrolled`] on a repeat enrollment
    /// - [`Error::CourseFull`] when the course is at capacity
    pub fn enroll(&mut self, student_id: StudentId, course_id: &str) -> Result<()> {
        let student = self
            .students
            .search(&student_id)
            .ok_or(Error::StudentNotFound(student_id))?;
        if student.is_enrolled_in(course_id) {
            return Err(Error::AlreadyEnrolled {
                student: student_id,
                course: course_id.to_string(),
            });
        }
        let course = self
            .courses
            .get_mut(course_id)
            .ok_or_else(|| Error::CourseNotFound(course_id.to_string()))?;
        if course.is_full() {
            return Err(Error::CourseFull {
                course: course_id.to_string(),
                capacity: course.capacity(),
            });
        }

        course.add_student(student_id);
        let mut updated = student.clone();
        updated.record_enrollment(course_id.to_string());
        self.students.insert(student_id, updated);
        debug!(student = %student_id, course = course_id, "enrollment recorded");
        Ok(())
    }

    /// Record (or replace) a grade for an enrolled student.
    ///
    /// # Errors
    /// - [`Error::StudentNotFound`] / [`Error::CourseNotFound`] if either
    ///   id is unknown
    /// - [`Error::NotEnrolled`] if the student is not on the course roster
    pub fn set_grade(&mut self, student_id: StudentId, course_id: &str, grade: f32) -> Result<()> {
        if !self.courses.contains_key(course_id) {
            return Err(Error::CourseNotFound(course_id.to_string()));
        }
        let student = self
            .students
            .search(&student_id)
            .ok_or(Error::StudentNotFound(student_id))?;
        if !student.is_enrolled_in(course_id) {
            return Err(Error::NotEnrolled {
                student: student_id,
                course: course_id.to_string(),
            });
        }

        let mut updated = student.clone();
        updated.record_grade(course_id.to_string(), grade);
        self.students.insert(student_id, updated);
        Ok(())
    }

    /// The grade recorded for a student in a course, if any.
    pub fn grade(&self, student_id: StudentId, course_id: &str) -> Option<f32> {
        self.students.search(&student_id)?.grade(course_id)
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new()
    }
}
