//! Browser services

pub mod color_scheme;
