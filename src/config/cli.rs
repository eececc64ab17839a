use crate::core::LineSource;
use crate::utils::error::{Result, VowelError};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Reads the first line from any buffered async reader.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
}

impl<R> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineReader<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R> LineSource for LineReader<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf).await?;
        if read == 0 {
            return Err(VowelError::InputUnavailable);
        }

        // 去掉行尾的 \n 或 \r\n
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        // 非 UTF-8 位元組不可能是母音，直接以替代字元處理
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
