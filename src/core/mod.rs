// src/core/mod.rs
// Pure text/HTML helpers with no I/O. Everything here is deterministic
// and testable without touching the filesystem.

pub mod text;
pub mod tokenizer;
