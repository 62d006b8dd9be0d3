//! Battle simulation types and logic.

#![allow(unused_imports)]

pub mod effectiveness;
pub mod logic;
pub mod pool;
pub mod types;
pub mod waves;

pub use logic::*;
pub use types::*;
