//! Business logic services

pub mod registry;

pub use registry::Registry;
