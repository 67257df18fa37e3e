#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod board;
pub mod constraints;
pub mod engine;
pub mod error;
pub mod mask;
pub mod parse;
pub mod peers;
pub mod queue;
pub mod validate;
