// src/lib.rs

//! Surf bulletin library: fetch and parse the NOAA Hawaii surf forecast.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
