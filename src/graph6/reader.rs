use super::decode;
use crate::{
    error::{EncodingError, Result},
    graph::Graph,
};
use log::trace;
use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::Path;

/// The optional header of a graph6 file.
const HEADER: &[u8] = b">>graph6<<";

/// An iterator over the graphs of a graph6 stream, one graph per line.
///
/// Blank lines are skipped. The first line may start with the `>>graph6<<`
/// header.
pub struct Reader<R> {
    lines: Split<R>,
    line: usize,
}

impl<R: BufRead> Reader<R> {
    pub fn new(input: R) -> Self {
        Self {
            lines: input.split(b'\n'),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Graph>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bytes = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;
            let mut text = bytes.strip_suffix(b"\r").unwrap_or(&bytes);
            if self.line == 1 {
                text = text.strip_prefix(HEADER).unwrap_or(text);
            }
            if text.is_empty() {
                trace!("line {}: skipped", self.line);
                continue;
            }
            let text = match std::str::from_utf8(text) {
                Ok(text) => text,
                Err(_) => {
                    return Some(Err(EncodingError::Syntax(format!(
                        "line {}: not a graph6 string",
                        self.line
                    ))
                    .into()))
                }
            };
            trace!("line {}: {}", self.line, text);
            return Some(decode(text));
        }
    }
}

/// Read every graph of a graph6 file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<Graph>> {
    Reader::new(BufReader::new(File::open(path)?)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn is_syntax_error(result: Option<Result<Graph>>) -> bool {
        match result {
            Some(Err(Error::MalformedEncoding(EncodingError::Syntax(_)))) => true,
            _ => false,
        }
    }

    #[test]
    fn test_reader() {
        let input = ">>graph6<<A_\n\nBg\r\nC~\n";
        let graphs: Vec<_> = Reader::new(input.as_bytes())
            .map(|g| g.unwrap().number_of_edges())
            .collect();
        assert_eq!(graphs, vec![1, 2, 6]);
    }

    #[test]
    fn test_reader_error() {
        let mut reader = Reader::new("A_\nC\n@\n".as_bytes());
        assert!(reader.next().unwrap().is_ok());
        assert_eq!(
            reader.next().unwrap(),
            Err(Error::MalformedEncoding(EncodingError::Truncated {
                expected: 1,
                found: 0
            }))
        );
        assert!(reader.next().unwrap().is_ok());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_reader_non_ascii() {
        let mut reader = Reader::new(&b"A_\nA\xff\nB\xc3\xa9\nBg\n"[..]);
        assert!(reader.next().unwrap().is_ok());
        assert!(is_syntax_error(reader.next()));
        assert!(is_syntax_error(reader.next()));
        assert_eq!(reader.next().unwrap().unwrap().number_of_edges(), 2);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_reader_keeps_whitespace() {
        let mut reader = Reader::new("A_ \t\nA_\r\n".as_bytes());
        assert!(is_syntax_error(reader.next()));
        assert!(reader.next().unwrap().is_ok());
    }

    #[test]
    fn test_header_only_on_first_line() {
        let mut reader = Reader::new(">>graph6<<@\n>>graph6<<@\n".as_bytes());
        assert_eq!(reader.next().unwrap().unwrap().number_of_vertices(), 1);
        assert!(is_syntax_error(reader.next()));
    }
}
