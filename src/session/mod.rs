//! Session registry: live simulators shared across requests.

#![allow(unused_imports)]

pub mod registry;

pub use registry::*;
