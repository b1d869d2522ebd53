use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// `Console` over a line reader and a writer.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, message: &str) -> Result<()> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail later as malformed numbers.
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_until_eof() {
        let mut console = LineConsole::new(Cursor::new("4\r\n7\nlast"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("4"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("7"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut console = LineConsole::new(Cursor::new(b"\xff\xfe\n".to_vec()), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}"));
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        console.prompt("W: ").unwrap();
        console.say("done").unwrap();
        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "W: done\n");
    }
}
