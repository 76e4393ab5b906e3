// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod csv;
pub mod error;
pub mod net;
pub mod params;
pub mod runner;
pub mod sheet;
pub mod store;
