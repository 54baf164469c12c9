pub mod config;
pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod server;
