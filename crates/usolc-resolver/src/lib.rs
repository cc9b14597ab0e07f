//! Version resolution engine for usolc.
//!
//! Decides which installed `solc` to run: partitions the command line,
//! extracts `pragma solidity` constraints, intersects them with the
//! installed versions, and applies the user's `-U` strategy.

pub mod args;
pub mod error;
pub mod pragma;
pub mod range;
pub mod resolver;
pub mod standard_json;
pub mod strategy;
pub mod version;

pub use error::{ResolveError, ResolveResult};
