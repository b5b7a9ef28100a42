//! Record management: students, courses, and faculty.
//!
//! The student store rides the ordered index ([`crate::index::BPlusTree`])
//! for point lookup plus id-ordered roster scans; courses and faculty are
//! plain key-unique maps with no special structure. [`Registrar`] is the
//! facade the console front end talks to.

mod course;
mod faculty;
mod registrar;
mod student;

pub use course::Course;
pub use faculty::Faculty;
pub use registrar::Registrar;
pub use student::Student;
