// src/generators/mod.rs
pub mod leet;
pub mod password;
mod pattern;

pub use password::{GenerateError, PasswordGenerator};
