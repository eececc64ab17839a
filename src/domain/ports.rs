use crate::domain::model::{InputScope, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Yields the single line of text a run operates on.
#[async_trait]
pub trait LineSource: Send {
    /// Returns the first line without its terminator, or
    /// `VowelError::InputUnavailable` when the stream is already exhausted.
    async fn read_line(&mut self) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn scope(&self) -> InputScope;
    fn format(&self) -> OutputFormat;
}
