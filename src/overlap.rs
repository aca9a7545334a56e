//! Facilities for finding the genes that overlap an island.

pub mod hits;
pub mod matcher;

pub use hits::Hits;
pub use hits::Marker;
pub use matcher::Matcher;
