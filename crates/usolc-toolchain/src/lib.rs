//! solc toolchain layout: where the compilers live, which versions are
//! installed, and how a version maps to a binary.

pub mod config;
pub mod discovery;
pub mod installed;
