//! Data models shared across the SDK

pub mod route;
pub mod transformation;

pub use route::{Route, RouteKind};
pub use transformation::{EXECUTION_TYPE, Transformation};
