pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LineReader, CliConfig, Settings};
pub use core::{counter::count_vowels, engine::CountEngine};
pub use utils::error::{Result, VowelError};
