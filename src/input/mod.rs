use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::engine::error::RsvpError;

pub mod keys;
pub mod tty;

pub use keys::{Command, KeyDecoder};

const CHUNK: usize = 8 << 10;

/// Where the text to present comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Stdin,
    File(PathBuf),
}

impl TextSource {
    /// Reads the whole source into memory. The file is closed on return.
    pub fn load(&self) -> Result<Vec<u8>, RsvpError> {
        match self {
            TextSource::Stdin => load_text(io::stdin().lock()),
            TextSource::File(path) => {
                let file = File::open(path).map_err(RsvpError::io("opening text source"))?;
                load_text(file)
            }
        }
    }
}

/// Buffers `reader` to end of stream, retrying interrupted reads.
pub fn load_text<R: Read>(mut reader: R) -> Result<Vec<u8>, RsvpError> {
    let mut text = Vec::new();
    let mut chunk = [0u8; CHUNK];
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(RsvpError::io("reading text source")(e)),
        };
        if text.capacity() - text.len() < n {
            let additional = text.capacity().max(CHUNK);
            text.try_reserve(additional)
                .map_err(|_| RsvpError::Resource {
                    what: "loading the text source",
                })?;
        }
        text.extend_from_slice(&chunk[..n]);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_text_reads_everything() {
        let input = "word ".repeat(10_000);
        let text = load_text(input.as_bytes()).unwrap();
        assert_eq!(text, input.as_bytes());
    }

    #[test]
    fn test_load_empty_source() {
        assert!(load_text(io::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_load_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();

        let source = TextSource::File(file.path().to_path_buf());
        assert_eq!(source.load().unwrap(), b"hello world");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = TextSource::File(PathBuf::from("/nonexistent/rq/text.txt"));
        match source.load() {
            Err(RsvpError::Io { op, .. }) => assert_eq!(op, "opening text source"),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::InvalidData))
        }
    }

    #[test]
    fn test_read_failure_is_io_error() {
        assert!(matches!(load_text(Broken), Err(RsvpError::Io { .. })));
    }
}
