//! Shared utilities for usolc.
//!
//! Cross-cutting pieces used by the other usolc crates: the unified error
//! type, scratch-file handling for captured input, and child process
//! spawning.

pub mod errors;
pub mod fs;
pub mod process;
