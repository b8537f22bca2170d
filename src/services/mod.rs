//! Service layer for the logo swap.
//!
//! This module contains the rotation and coloring logic applied to a loaded
//! fastfetch config.

pub mod colorizer;
pub mod cycler;

// Re-export commonly used functions
pub use colorizer::apply_category_colors;
pub use cycler::next_logo_source;
