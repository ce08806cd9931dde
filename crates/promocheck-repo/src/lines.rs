//! Line-oriented code parsing shared by the file source and the fuzz API.
//!
//! One code per line. A trailing `\n` or `\r\n` is stripped; nothing else is trimmed.

use promocheck_domain::policy::InvalidLinePolicy;
use promocheck_domain::{CodeIndex, SourceError};
use promocheck_types::{
    Code, MAX_CODE_LEN, ValidationError, ValidationErrorKind, validate_code_bytes,
};
use std::io::{self, BufRead};

/// Longest line kept in memory: a maximal code plus `\r\n`. Longer lines are discarded
/// as they stream past and reported as [`Line::Oversized`].
const MAX_LINE_LEN: usize = MAX_CODE_LEN + 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Line {
    /// The line (terminator included) is in the buffer.
    Fits,
    /// The line was longer than [`MAX_LINE_LEN`]; the buffer is empty.
    Oversized,
    Eof,
}

fn strip_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Read the next line into `buf`, never storing more than [`MAX_LINE_LEN`] bytes.
fn read_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    origin: &str,
) -> Result<Line, SourceError> {
    buf.clear();
    let mut read_any = false;
    let mut oversized = false;
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(SourceError::Read {
                    origin: origin.to_string(),
                    source,
                });
            }
        };
        if chunk.is_empty() {
            break;
        }
        read_any = true;

        let (take, done) = match chunk.iter().position(|&b| b == b'\n') {
            Some(i) => (i + 1, true),
            None => (chunk.len(), false),
        };
        if !oversized {
            if buf.len() + take <= MAX_LINE_LEN {
                buf.extend_from_slice(&chunk[..take]);
            } else {
                oversized = true;
                buf.clear();
            }
        }
        reader.consume(take);
        if done {
            break;
        }
    }

    Ok(match (read_any, oversized) {
        (false, _) => Line::Eof,
        (true, true) => Line::Oversized,
        (true, false) => Line::Fits,
    })
}

fn malformed(origin: &str, line: u64, source: ValidationError) -> SourceError {
    SourceError::Malformed {
        origin: origin.to_string(),
        line,
        source,
    }
}

/// Stream `reader` until `code` is found. Memory stays bounded by [`MAX_LINE_LEN`] plus
/// the reader's own buffer, whatever the line lengths.
pub(crate) fn scan_for<R: BufRead>(
    mut reader: R,
    origin: &str,
    code: &Code,
    policy: InvalidLinePolicy,
) -> Result<bool, SourceError> {
    let mut buf = Vec::with_capacity(MAX_LINE_LEN);
    let mut line_no: u64 = 0;
    loop {
        let read = read_line(&mut reader, &mut buf, origin)?;
        if read == Line::Eof {
            return Ok(false);
        }
        line_no += 1;
        if read == Line::Oversized {
            if policy == InvalidLinePolicy::Reject {
                return Err(malformed(
                    origin,
                    line_no,
                    ValidationError::new(ValidationErrorKind::TooLong),
                ));
            }
            continue;
        }

        let line = strip_eol(&buf);
        if line == code.as_bytes() {
            tracing::trace!(%origin, line = line_no, "code found");
            return Ok(true);
        }
        if policy == InvalidLinePolicy::Reject {
            validate_code_bytes(line).map_err(|source| malformed(origin, line_no, source))?;
        }
    }
}

/// Materialize every code in `reader`.
pub(crate) fn load_index<R: BufRead>(
    mut reader: R,
    origin: &str,
    policy: InvalidLinePolicy,
) -> Result<CodeIndex, SourceError> {
    let mut index = CodeIndex::new();
    let mut buf = Vec::with_capacity(MAX_LINE_LEN);
    let mut line_no: u64 = 0;
    let mut skipped: u64 = 0;
    loop {
        let parsed = match read_line(&mut reader, &mut buf, origin)? {
            Line::Eof => break,
            Line::Oversized => Err(ValidationError::new(ValidationErrorKind::TooLong)),
            Line::Fits => Code::parse_bytes(strip_eol(&buf)),
        };
        line_no += 1;
        match parsed {
            Ok(code) => {
                index.insert(code);
            }
            Err(source) => match policy {
                InvalidLinePolicy::Skip => skipped += 1,
                InvalidLinePolicy::Reject => return Err(malformed(origin, line_no, source)),
            },
        }
    }
    if skipped > 0 {
        tracing::debug!(%origin, skipped, "ignored lines that are not valid codes");
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::parse(s).expect("valid code")
    }

    #[test]
    fn strips_lf_and_crlf_only() {
        assert_eq!(strip_eol(b"abc\n"), b"abc");
        assert_eq!(strip_eol(b"abc\r\n"), b"abc");
        assert_eq!(strip_eol(b"abc"), b"abc");
        assert_eq!(strip_eol(b" abc \n"), b" abc ");
    }

    #[test]
    fn scan_finds_first_middle_and_last_lines() {
        let data = b"abc\nxyz\npromo\nsale";
        for c in ["abc", "promo", "sale"] {
            assert!(scan_for(&data[..], "t", &code(c), InvalidLinePolicy::Skip).unwrap(), "{c}");
        }
    }

    #[test]
    fn scan_does_not_match_partials_or_other_case() {
        let data = b"abc\nxyz\npromo\nABC\n";
        for c in ["ab", "prom", "sale"] {
            assert!(!scan_for(&data[..], "t", &code(c), InvalidLinePolicy::Skip).unwrap(), "{c}");
        }
    }

    #[test]
    fn scan_handles_windows_line_endings() {
        let data = b"gold\r\npromo\r\n";
        assert!(scan_for(&data[..], "t", &code("promo"), InvalidLinePolicy::Skip).unwrap());
    }

    #[test]
    fn scan_stops_at_match_before_malformed_tail() {
        let data = b"promo\nNOT A CODE\n";
        assert!(scan_for(&data[..], "t", &code("promo"), InvalidLinePolicy::Reject).unwrap());
    }

    #[test]
    fn scan_rejects_malformed_line_before_match() {
        let data = b"gold\nBAD\npromo\n";
        let err = scan_for(&data[..], "t", &code("promo"), InvalidLinePolicy::Reject).unwrap_err();
        match err {
            SourceError::Malformed { line, source, .. } => {
                assert_eq!(line, 2);
                assert_eq!(source.kind, ValidationErrorKind::InvalidCharacter);
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn load_skips_invalid_lines_by_default() {
        let data = b"abc\n\nTOOLONG\nxyz\nabc\n";
        let index = load_index(&data[..], "t", InvalidLinePolicy::Skip).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.contains("abc"));
        assert!(index.contains("xyz"));
    }

    #[test]
    fn load_rejects_invalid_lines_when_strict() {
        let data = b"abc\nxyz\nabcdefg\n";
        let err = load_index(&data[..], "codes.txt", InvalidLinePolicy::Reject).unwrap_err();
        assert_eq!(err.to_string(), "codes.txt:3: invalid code");
    }

    /// Hands out at most `chunk` bytes per `fill_buf`, like a small `BufReader`.
    struct Chunked<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl std::io::Read for Chunked<'_> {
        fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
            let n = self.fill_buf()?.len().min(out.len());
            out[..n].copy_from_slice(&self.data[..n]);
            self.consume(n);
            Ok(n)
        }
    }

    impl BufRead for Chunked<'_> {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            let n = self.chunk.min(self.data.len());
            Ok(&self.data[..n])
        }

        fn consume(&mut self, amt: usize) {
            self.data = &self.data[amt..];
        }
    }

    fn huge_line_then(tail: &[u8]) -> Vec<u8> {
        let mut data = vec![b'x'; 4 * 1024 * 1024];
        data.push(b'\n');
        data.extend_from_slice(tail);
        data
    }

    #[test]
    fn oversized_line_never_grows_the_buffer() {
        let data = huge_line_then(b"promo\n");
        let mut reader = Chunked {
            data: &data,
            chunk: 8192,
        };
        let mut buf = Vec::with_capacity(MAX_LINE_LEN);
        let capacity = buf.capacity();

        assert_eq!(read_line(&mut reader, &mut buf, "t").unwrap(), Line::Oversized);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), capacity);

        assert_eq!(read_line(&mut reader, &mut buf, "t").unwrap(), Line::Fits);
        assert_eq!(buf, b"promo\n");
        assert_eq!(read_line(&mut reader, &mut buf, "t").unwrap(), Line::Eof);
        assert_eq!(buf.capacity(), capacity);
    }

    #[test]
    fn line_split_across_chunks_is_reassembled() {
        let mut reader = Chunked {
            data: b"pr\r\nsale\r\n",
            chunk: 3,
        };
        let mut buf = Vec::new();
        assert_eq!(read_line(&mut reader, &mut buf, "t").unwrap(), Line::Fits);
        assert_eq!(strip_eol(&buf), b"pr");
        assert_eq!(read_line(&mut reader, &mut buf, "t").unwrap(), Line::Fits);
        assert_eq!(strip_eol(&buf), b"sale");
    }

    #[test]
    fn unterminated_oversized_tail_is_one_line() {
        let data = vec![b'y'; 100_000];
        let mut reader = Chunked {
            data: &data,
            chunk: 4096,
        };
        let mut buf = Vec::new();
        assert_eq!(read_line(&mut reader, &mut buf, "t").unwrap(), Line::Oversized);
        assert_eq!(read_line(&mut reader, &mut buf, "t").unwrap(), Line::Eof);
    }

    #[test]
    fn scan_skips_oversized_lines() {
        let data = huge_line_then(b"promo\n");
        let reader = Chunked {
            data: &data,
            chunk: 8192,
        };
        assert!(scan_for(reader, "t", &code("promo"), InvalidLinePolicy::Skip).unwrap());
    }

    #[test]
    fn oversized_lines_are_malformed_when_strict() {
        let data = huge_line_then(b"promo\n");
        let err = scan_for(&data[..], "t", &code("promo"), InvalidLinePolicy::Reject).unwrap_err();
        match err {
            SourceError::Malformed { line, source, .. } => {
                assert_eq!(line, 1);
                assert_eq!(source.kind, ValidationErrorKind::TooLong);
            }
            other => panic!("expected malformed, got {other:?}"),
        }

        let err = load_index(&data[..], "codes.txt", InvalidLinePolicy::Reject).unwrap_err();
        assert_eq!(err.to_string(), "codes.txt:1: invalid code");
    }

    #[test]
    fn load_skips_oversized_lines() {
        let data = huge_line_then(b"abc\nxyz");
        let index = load_index(&data[..], "t", InvalidLinePolicy::Skip).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.contains("xyz"));
    }

    #[test]
    fn empty_input_is_an_empty_index() {
        let index = load_index(&b""[..], "t", InvalidLinePolicy::Reject).unwrap();
        assert!(index.is_empty());
    }
}
