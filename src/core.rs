//! Core functionality used across the crate.

pub mod chromosome;
pub mod position;

pub use chromosome::Chromosome;
pub use position::Position;
