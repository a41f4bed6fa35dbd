//! # catalog-core
//!
//! Course catalog loading and export for the course-clash timetable
//! checker.
//!
//! A catalog is a small, human-curated table of scheduled courses, loaded
//! once per session from a delimited-text spreadsheet export and held
//! read-only. Raw cells with drifting formats (`10.00` vs `10:00`,
//! day-first dates, combined time-range text) normalize into a typed
//! [`CourseRecord`] at load time; a field that fails to parse becomes an
//! absent value, never an error.
//!
//! ## Quick start
//!
//! ```no_run
//! use catalog_core::{load_catalog, Layout};
//!
//! let catalog = load_catalog("corsi.csv", Layout::Named)?;
//! for (id, label) in catalog.display_labels() {
//!     println!("{id} - {label}");
//! }
//! # Ok::<(), catalog_core::CatalogError>(())
//! ```
//!
//! ## Modules
//!
//! - [`record`] — [`CourseRecord`] and the canonical [`CourseId`]
//! - [`catalog`] — the immutable [`Catalog`] with title disambiguation
//! - [`table`] — raw delimited-table reader (quoting, delimiter sniffing)
//! - [`normalize`] — time/date/time-range cell parsing
//! - [`loader`] — the two layout variants (strict fixed vs permissive named)
//! - [`cache`] — caller-owned, key-invalidated catalog cache
//! - [`export`] — delimited/JSON serialization of conflict results
//! - [`error`] — error types

pub mod cache;
pub mod catalog;
pub mod error;
pub mod export;
pub mod loader;
pub mod normalize;
pub mod record;
pub mod table;

pub use cache::CatalogCache;
pub use catalog::Catalog;
pub use error::CatalogError;
pub use export::{conflict_rows, write_delimited, write_json, ConflictRow};
pub use loader::{catalog_from_str, load_catalog, load_catalog_with_delimiter, Layout};
pub use record::{CourseId, CourseRecord};
