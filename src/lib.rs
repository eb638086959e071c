// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod core;
pub mod tasks;

pub mod file;
pub mod log;
pub mod pages;
pub mod params;
pub mod progress;
pub mod registry;
pub mod runner;
pub mod variants;
