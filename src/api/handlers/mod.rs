// src/api/handlers/mod.rs
pub mod download;
pub mod generator;
pub mod pages;
pub mod pwned;
