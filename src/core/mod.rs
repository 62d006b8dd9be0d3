//! Shared constants and plumbing.

#![allow(unused_imports)]

pub mod constants;

pub use constants::*;
