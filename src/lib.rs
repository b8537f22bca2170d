//! LogoSwap Library
//!
//! This library provides the core of the `logoswap` tool: rotating the logo
//! image of a fastfetch config through a fixed list and recoloring the
//! config's module categories to match the new image.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
