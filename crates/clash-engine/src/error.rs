//! Error types for clash-engine queries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClashError {
    /// The reference id named a course the catalog does not contain.
    #[error("course not found: {0}")]
    CourseNotFound(String),
}

pub type Result<T> = std::result::Result<T, ClashError>;
