//! Academic catalog domain model.
//!
//! # Responsibility
//! - Define people, courses and subjects as plain data records.
//! - Express the person hierarchy as a tagged union instead of inheritance.
//!
//! # Invariants
//! - Foreign keys point one way only (subject -> course/professor,
//!   course -> coordinator, student -> course).
//! - Reverse navigation is derived by repository queries.

pub mod course;
pub mod person;
pub mod validation;
