//! Line oriented catalog reader.
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// [LineReader] owns the single line buffer of a catalog reader.
/// It presents one line at a time, stripped of its termination.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf: String,
}

impl LineReader<BufReader<File>> {
    /// Opens a local catalog
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let fd = File::open(path)?;
        Ok(Self::new(BufReader::new(fd)))
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::with_capacity(256),
        }
    }
    /// Reads next line. Returns None once the stream is exhausted.
    pub fn next_line(&mut self) -> std::io::Result<Option<&str>> {
        self.buf.clear();
        let size = self.reader.read_line(&mut self.buf)?;
        if size == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.trim_end_matches(|c: char| c == '\n' || c == '\r')))
    }
    /// Reads and discards `n` lines, stops early on end of stream.
    pub fn skip_lines(&mut self, n: usize) -> std::io::Result<()> {
        for _ in 0..n {
            if self.next_line()?.is_none() {
                break;
            }
        }
        Ok(())
    }
}

impl<R: BufRead + Seek> LineReader<R> {
    /// Moves back to start of stream
    pub fn rewind(&mut self) -> std::io::Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::LineReader;
    use std::io::Cursor;
    #[test]
    fn lines() {
        let mut reader = LineReader::new(Cursor::new("first\r\nsecond\n\nfourth"));
        assert_eq!(reader.next_line().unwrap(), Some("first"));
        assert_eq!(reader.next_line().unwrap(), Some("second"));
        assert_eq!(reader.next_line().unwrap(), Some(""));
        assert_eq!(reader.next_line().unwrap(), Some("fourth"));
        assert_eq!(reader.next_line().unwrap(), None);

        reader.rewind().unwrap();
        reader.skip_lines(2).unwrap();
        assert_eq!(reader.next_line().unwrap(), Some(""));
        reader.skip_lines(10).unwrap();
        assert_eq!(reader.next_line().unwrap(), None);
    }
}
