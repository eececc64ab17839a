use crate::utils::error::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// 固定的母音集合，只包含 ASCII 小寫字母
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Which part of the input line gets scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InputScope {
    /// The whole line, spaces included.
    #[default]
    Line,
    /// Only the first whitespace-delimited word of the line.
    FirstWord,
}

impl InputScope {
    pub fn select<'a>(&self, line: &'a str) -> &'a str {
        match self {
            InputScope::Line => line,
            InputScope::FirstWord => line.split_whitespace().next().unwrap_or(""),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// The bare count followed by a newline.
    #[default]
    Plain,
    /// The full report as a single JSON object.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelReport {
    pub count: usize,
    pub characters: usize,
    pub scope: InputScope,
}

impl VowelReport {
    /// 依輸出格式產生要寫到 stdout 的一行文字 (不含換行)
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Plain => Ok(self.count.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }

    /// Writes the rendered report and a trailing newline. A closed stdout
    /// surfaces as `VowelError::IoError` instead of a panic.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        let line = self.render(format)?;
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}
