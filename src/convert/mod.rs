//! Route to transformation conversion
//!
//! Pure data transformation: no I/O, no error signaling. Routes that are
//! not API routes are skipped; missing schemas degrade to empty mappings.

pub mod routes;

pub use routes::{join_api_path, migrate_property_metadata, routes_to_transformations};
