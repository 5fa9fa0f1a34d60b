//! Command implementations for the NBA fantasy averages CLI

pub mod build_averages;
