// src/tasks/mod.rs

pub mod link;
pub mod sitemap;
