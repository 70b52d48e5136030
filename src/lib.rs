pub mod config;
pub mod controller;
pub mod evaluation;
pub mod output;
pub mod prompt;
pub mod scoring;
