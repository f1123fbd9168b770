//! Data models for Seatmap

pub mod library;
pub mod seat;

// Re-export commonly used types
pub use library::{GlobalStats, Library, LibraryOccupancy, OccupancySnapshot};
pub use seat::{GridDimensions, Seat};
