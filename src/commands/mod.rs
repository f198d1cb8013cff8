//! CLI command implementations.

pub mod resolve;

pub use resolve::{Outcome, ResolveCommand};
