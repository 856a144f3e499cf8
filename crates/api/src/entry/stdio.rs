#![forbid(unsafe_code)]

use crate::{ApiResponse, ApiServer};
use std::io::{BufRead, BufReader, Read, Write};

const MAX_LINE_BYTES: usize = 1024 * 1024;

#[derive(Debug, PartialEq, Eq)]
enum RequestLine {
    Eof,
    Line(String),
    TooLarge,
    NotUtf8,
}

fn write_newline_json(
    stdout: &mut std::io::StdoutLock<'_>,
    resp: &ApiResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(stdout, "{}", serde_json::to_string(resp)?)?;
    stdout.flush()?;
    Ok(())
}

/// Reads at most `MAX_LINE_BYTES` (plus the newline) into memory; the tail of
/// a longer line is skipped so the next read starts on a fresh line.
fn read_request_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> std::io::Result<RequestLine> {
    buf.clear();
    let read = reader
        .by_ref()
        .take(MAX_LINE_BYTES as u64 + 1)
        .read_until(b'\n', buf)?;
    if read == 0 {
        return Ok(RequestLine::Eof);
    }
    if buf.len() > MAX_LINE_BYTES && buf.last() != Some(&b'\n') {
        skip_rest_of_line(reader)?;
        return Ok(RequestLine::TooLarge);
    }
    match std::str::from_utf8(buf) {
        Ok(line) => Ok(RequestLine::Line(line.to_string())),
        Err(_) => Ok(RequestLine::NotUtf8),
    }
}

fn skip_rest_of_line<R: BufRead>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let (consumed, done) = {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|byte| *byte == b'\n') {
                Some(pos) => (pos + 1, true),
                None => (available.len(), false),
            }
        };
        reader.consume(consumed);
        if done {
            return Ok(());
        }
    }
}

/// Serves one JSON request per line until stdin closes.
///
/// Every non-empty line yields exactly one response line, in order.
pub(crate) fn run_stdio(server: &mut ApiServer) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();
    let mut buf = Vec::new();

    loop {
        let resp = match read_request_line(&mut reader, &mut buf)? {
            RequestLine::Eof => break,
            RequestLine::Line(line) => {
                let raw = line.trim();
                if raw.is_empty() {
                    continue;
                }
                server.handle_line(raw)
            }
            RequestLine::TooLarge => {
                tracing::warn!(max_bytes = MAX_LINE_BYTES, "request line too large");
                ApiResponse::bad_request(None, "request", "exceeds max allowed size")
            }
            RequestLine::NotUtf8 => {
                tracing::warn!("request line is not valid UTF-8");
                ApiResponse::bad_request(None, "request", "must be valid UTF-8")
            }
        };
        write_newline_json(&mut stdout, &resp)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn oversized_line_is_skipped_up_to_its_newline() {
        let mut input = vec![b'a'; MAX_LINE_BYTES + 10];
        input.extend_from_slice(b"\n{\"next\":1}\n");
        let mut reader = Cursor::new(input);
        let mut buf = Vec::new();

        assert_eq!(
            read_request_line(&mut reader, &mut buf).unwrap(),
            RequestLine::TooLarge
        );
        assert!(buf.len() <= MAX_LINE_BYTES + 1);
        assert_eq!(
            read_request_line(&mut reader, &mut buf).unwrap(),
            RequestLine::Line("{\"next\":1}\n".to_string())
        );
        assert_eq!(
            read_request_line(&mut reader, &mut buf).unwrap(),
            RequestLine::Eof
        );
    }

    #[test]
    fn line_at_the_cap_is_accepted() {
        let mut input = vec![b' '; MAX_LINE_BYTES];
        input.push(b'\n');
        let mut reader = Cursor::new(input);
        let mut buf = Vec::new();

        match read_request_line(&mut reader, &mut buf).unwrap() {
            RequestLine::Line(line) => assert_eq!(line.len(), MAX_LINE_BYTES + 1),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_does_not_end_the_stream() {
        let mut reader = Cursor::new(b"{\"name\":\"\xff\"}\n{}\n".to_vec());
        let mut buf = Vec::new();

        assert_eq!(
            read_request_line(&mut reader, &mut buf).unwrap(),
            RequestLine::NotUtf8
        );
        assert_eq!(
            read_request_line(&mut reader, &mut buf).unwrap(),
            RequestLine::Line("{}\n".to_string())
        );
    }
}
