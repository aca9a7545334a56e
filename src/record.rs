//! Records within the gene reference and island files.

pub mod gene;
pub mod island;

pub use gene::GeneRecord;
pub use island::IslandRecord;
