//! Route policy and authorization

pub mod gate;
pub mod policy;

pub use gate::{evaluate, Admission};
pub use policy::{normalize_path, resolve, Capability, Route, RoutePolicyEntry, ROUTE_TABLE};
