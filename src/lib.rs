// src/lib.rs

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod client;
pub mod common;
pub mod sensor;

// Re-export key types for convenience
pub use client::HttpClient;
pub use common::HttpError;
pub use sensor::{Registry, Sensor};
