//! Resume insight library
//!
//! Loads resumes, normalizes their text and derives lexical statistics:
//! extractive summaries, strength and weakness keywords, job-title
//! suggestions, skill highlighting and a skill-hit leaderboard.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, ResumeInsightError};
pub use config::Config;
