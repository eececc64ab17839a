use crate::core::counter::count_vowels;
use crate::core::{ConfigProvider, LineSource, VowelReport};
use crate::utils::error::Result;

pub struct CountEngine<S: LineSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: LineSource, C: ConfigProvider> CountEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn run(&mut self) -> Result<VowelReport> {
        // Read
        let line = self.source.read_line().await?;
        tracing::debug!("Read input line ({} bytes)", line.len());

        // Count
        let scope = self.config.scope();
        let text = scope.select(&line);
        let count = count_vowels(text);
        let characters = text.chars().count();
        tracing::debug!(
            "Counted {} vowels in {} characters (scope: {:?})",
            count,
            characters,
            scope
        );

        Ok(VowelReport {
            count,
            characters,
            scope,
        })
    }
}
