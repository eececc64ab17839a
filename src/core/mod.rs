pub mod counter;
pub mod engine;

#[cfg(test)]
mod counter_proptest;

pub use crate::domain::model::{InputScope, OutputFormat, VowelReport, VOWELS};
pub use crate::domain::ports::{ConfigProvider, LineSource};
pub use crate::utils::error::Result;
