//! CampusDB - an in-memory university record store built on a B+-tree index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          CampusDB                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │            Console front end (bin/campusdb)          │   │
//! │  │              line commands → Registrar               │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                            ↓                                │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │            Record layer (records/)                   │   │
//! │  │   Registrar + Student + Course + Faculty              │   │
//! │  │   (courses/faculty: plain key-unique maps)            │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                            ↓                                │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │            Index layer (index/)                       │   │
//! │  │   BPlusTree<StudentId, Student>                       │   │
//! │  │   ordered insert · point lookup · leaf-chain scans    │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index is the load-bearing component: a height-balanced B+-tree with
//! true internal-node splitting, recursive upward propagation, root growth,
//! and a forward-linked leaf chain for ordered full scans. Everything above
//! it is deliberately plain CRUD.
//!
//! # Modules
//! - [`common`] - Shared primitives (StudentId, Error, config)
//! - [`index`] - The B+-tree ordered index
//! - [`records`] - Students, courses, faculty, and the Registrar facade
//!
//! # Quick Start
//! ```
//! use campusdb::common::StudentId;
//! use campusdb::records::Registrar;
//!
//! let mut registrar = Registrar::new();
//! registrar.add_student(StudentId::new(7), "Ada Lovelace");
//! registrar.add_course("CS101", "Intro to CS", 30);
//! registrar.enroll(StudentId::new(7), "CS101")?;
//!
//! assert_eq!(
//!     registrar.student(StudentId::new(7)).map(|s| s.name()),
//!     Some("Ada Lovelace")
//! );
//! # Ok::<(), campusdb::common::Error>(())
//! ```

pub mod common;
pub mod index;
pub mod records;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, Result, StudentId};
pub use index::BPlusTree;
pub use records::{Course, Faculty, Registrar, Student};
