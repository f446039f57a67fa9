use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tokio::sync::Mutex;

/// Line-oriented console shared by the screens and the UI port.
///
/// Reader and writer sit behind one lock so a prompt and its answer are
/// never interleaved with other output.
pub struct Terminal<R, W> {
    io: Mutex<TerminalIo<R, W>>,
}

struct TerminalIo<R, W> {
    reader: R,
    writer: W,
}

pub type StdTerminal = Terminal<BufReader<Stdin>, Stdout>;

impl StdTerminal {
    pub fn stdio() -> Self {
        Terminal::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new(TerminalIo { reader, writer }),
        }
    }

    pub async fn write_line(&self, text: &str) -> anyhow::Result<()> {
        let mut io = self.io.lock().await;
        io.writer.write_all(text.as_bytes()).await?;
        io.writer.write_all(b"\n").await?;
        io.writer.flush().await?;
        Ok(())
    }

    /// Writes `label` and reads one line. `None` once input is exhausted.
    pub async fn prompt(&self, label: &str) -> anyhow::Result<Option<String>> {
        let mut io = self.io.lock().await;
        io.writer.write_all(label.as_bytes()).await?;
        io.writer.write_all(b": ").await?;
        io.writer.flush().await?;

        let mut line = String::new();
        if io.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(answer))
    }
}

impl<R> Terminal<R, Vec<u8>> {
    /// Everything written so far.
    pub async fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.io.lock().await.writer).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prompt_strips_line_endings_and_detects_eof() {
        let terminal = Terminal::new(b"first\r\nsecond\n".as_slice(), Vec::new());

        assert_eq!(terminal.prompt("A").await.unwrap().as_deref(), Some("first"));
        assert_eq!(terminal.prompt("B").await.unwrap().as_deref(), Some("second"));
        assert_eq!(terminal.prompt("C").await.unwrap(), None);
        assert_eq!(terminal.transcript().await, "A: B: C: ");
    }

    #[tokio::test]
    async fn write_line_appends_newline() {
        let terminal = Terminal::new(b"".as_slice(), Vec::new());
        terminal.write_line("hello").await.unwrap();
        assert_eq!(terminal.transcript().await, "hello\n");
    }
}
