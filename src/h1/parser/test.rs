use bytes::BytesMut;

use super::{Parser, State};
use crate::common::{Buffer, ParseResult};
use crate::h1::ParseError;
use crate::http::{StatusCode, Version};
use crate::response::Parts;

macro_rules! ready {
    ($e:expr) => {
        match $e {
            ParseResult::Ok(ok) => ok,
            ParseResult::Err(err) => panic!("unexpected `ParseResult::Err`: {err:?}"),
            ParseResult::Pending => panic!("unexpected `ParseResult::Pending`")
        }
    };
}

fn parser() -> Parser {
    Parser::new(Buffer::new(256, 1024), Buffer::new(2048, 32 * 1024))
}

/// Feed `input` in pieces split at `offsets`, returns the rest once complete.
fn parse_split(parser: &mut Parser, parts: &mut Parts, input: &[u8], offsets: &[usize]) -> BytesMut {
    let mut start = 0;
    for &offset in offsets.iter().chain(Some(&input.len())) {
        let chunk = BytesMut::from(&input[start..offset]);
        start = offset;
        match parser.parse(chunk, parts) {
            ParseResult::Pending => assert_ne!(offset, input.len(), "incomplete response head"),
            ParseResult::Ok(mut rest) => {
                rest.extend_from_slice(&input[offset..]);
                return rest;
            }
            ParseResult::Err(err) => panic!("unexpected `ParseResult::Err` at {offset}: {err:?}"),
        }
    }
    unreachable!()
}

fn parse_err(input: &[u8]) -> ParseError {
    let mut parts = Parts::default();
    match parser().parse(BytesMut::from(input), &mut parts) {
        ParseResult::Err(err) => err,
        ParseResult::Ok(rest) => panic!("expected `Err` but returns `Ok` with {rest:?}"),
        ParseResult::Pending => panic!("expected `Err` but returns `Pending`"),
    }
}

const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
    Content-Type: text/html\r\n\
    Content-Length: 5\r\n\
    Set-Cookie: a=1\r\n\
    set-cookie:   b=2  \r\n\
    \r\n\
    Hello";

#[test]
fn test_parse_response_head() {
    let mut parser = parser();
    let mut parts = Parts::default();

    let rest = ready!(parser.parse(BytesMut::from(RESPONSE), &mut parts));

    assert_eq!(parser.state(), State::Complete);
    assert_eq!(&rest[..], b"Hello");
    assert_eq!(parts.version, Version::HTTP_11);
    assert_eq!(parts.status, StatusCode::OK);
    assert_eq!(parts.reason, "OK");
    assert_eq!(parts.content_length, Some(5));
    assert_eq!(parts.content_type(), Some("text/html"));
    assert!(!parts.encoding.is_chunked());
    assert_eq!(parts.headers.len(), 4);
    assert_eq!(
        parts.headers.get_all("SET-COOKIE").collect::<Vec<_>>(),
        ["a=1", "b=2"]
    );
}

#[test]
fn test_parse_status_line() {
    macro_rules! test {
        ($input:literal => $v:ident, $code:literal, $reason:literal) => {
            let mut parts = Parts::default();
            let input = concat!($input, "\r\n\r\n").as_bytes();
            let rest = ready!(parser().parse(BytesMut::from(input), &mut parts));
            assert!(rest.is_empty());
            assert_eq!(parts.version, Version::$v);
            assert_eq!(parts.status.as_u16(), $code);
            assert_eq!(parts.reason, $reason);
        };
    }

    test!("HTTP/1.1 200 OK" => HTTP_11, 200, "OK");
    test!("HTTP/1.0 404 Not Found" => HTTP_10, 404, "Not Found");
    test!("HTTP/1.1 599 " => HTTP_11, 599, "");
    test!("HTTP/1.1 204" => HTTP_11, 204, "");
    test!("HTTP/1.1 500 Internal  Server Error" => HTTP_11, 500, "Internal  Server Error");
}

#[test]
fn test_parse_bare_lf() {
    let mut parts = Parts::default();
    let rest = ready!(parser().parse(
        BytesMut::from(&b"HTTP/1.1 200 OK\nContent-Length: 0\n\nnext"[..]),
        &mut parts
    ));
    assert_eq!(&rest[..], b"next");
    assert_eq!(parts.content_length, Some(0));
}

#[test]
fn test_parse_errors() {
    macro_rules! test {
        ($input:literal => $err:ident) => {
            assert_eq!(parse_err($input), ParseError::$err, "{:?}", $input);
        };
    }

    test!(b"HTTP/1.1 20 OK\r\n" => InvalidStatusCode);
    test!(b"HTTP/1.1 2000 OK\r\n" => InvalidStatusCode);
    test!(b"HTTP/1.1 2x0 OK\r\n" => InvalidStatusCode);
    test!(b"HTTP/1.1  200 OK\r\n" => InvalidStatusCode);
    test!(b"HTTP/2.0 200 OK\r\n" => UnsupportedVersion);
    test!(b"ICY 200 OK\r\n" => UnsupportedVersion);
    test!(b"HTTP/1.1\r\n" => InvalidStatusLine);
    test!(b"\r\n" => InvalidStatusLine);
    test!(b"HTTP/1.1 200\rOK\r\n" => InvalidSeparator);

    test!(b"HTTP/1.1 200 OK\r\nContent-Type text/html\r\n\r\n" => InvalidHeader);
    test!(b"HTTP/1.1 200 OK\r\n: empty\r\n\r\n" => InvalidHeader);
    test!(b"HTTP/1.1 200 OK\r\nContent-Length: -1\r\n\r\n" => InvalidContentLength);
    test!(b"HTTP/1.1 200 OK\r\nContent-Length: five\r\n\r\n" => InvalidContentLength);
    test!(b"HTTP/1.1 200 OK\r\nContent-Length: +5\r\n\r\n" => InvalidContentLength);
    test!(b"HTTP/1.1 200 OK\r\nContent-Length:\r\n\r\n" => InvalidContentLength);
    test!(b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nContent-Length: 6\r\n\r\n" => InvalidContentLength);
    test!(b"HTTP/1.1 200 OK\r\nContent-Length: 99999999999999999999\r\n\r\n" => InvalidContentLength);
    test!(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: gzip\r\n\r\n" => UnknownCodings);
}

#[test]
fn test_parse_framing() {
    let mut parts = Parts::default();
    ready!(parser().parse(
        BytesMut::from(
            &b"HTTP/1.1 200 OK\r\n\
            Transfer-Encoding: chunked\r\n\
            Content-Length: 10\r\n\
            Content-Encoding: gzip, identity\r\n\
            \r\n"[..]
        ),
        &mut parts
    ));
    assert!(parts.encoding.is_chunked());
    assert_eq!(parts.content_length, None);
    assert_eq!(parts.encoding.content_codings(), ["gzip"]);

    let mut parts = Parts::default();
    ready!(parser().parse(
        BytesMut::from(&b"HTTP/1.1 200 OK\r\nContent-Length: 7\r\ncontent-length: 7\r\n\r\n"[..]),
        &mut parts
    ));
    assert_eq!(parts.content_length, Some(7));

    let mut parts = Parts::default();
    ready!(parser().parse(BytesMut::from(&b"HTTP/1.1 200 OK\r\n\r\n"[..]), &mut parts));
    assert_eq!(parts.content_length, None);
    assert!(!parts.encoding.is_chunked());
}

#[test]
fn test_parse_pending() {
    let mut parser = parser();
    let mut parts = Parts::default();

    assert!(parser.parse(BytesMut::from(&b"HTTP/1.1 2"[..]), &mut parts).is_pending());
    assert_eq!(parser.state(), State::StatusLine);
    assert!(parser.parse(BytesMut::from(&b"00 OK\r\nHost: a"[..]), &mut parts).is_pending());
    assert_eq!(parser.state(), State::Headers);
    assert_eq!(parts.status, StatusCode::OK);
    assert!(parser.parse(BytesMut::from(&b"\r\n\r"[..]), &mut parts).is_pending());

    let rest = ready!(parser.parse(BytesMut::from(&b"\nbody"[..]), &mut parts));
    assert_eq!(&rest[..], b"body");
    assert_eq!(parts.headers.get("host"), Some("a"));
}

#[test]
fn test_parse_split_at_every_offset() {
    let mut whole = Parts::default();
    let expected_rest = ready!(parser().parse(BytesMut::from(RESPONSE), &mut whole));

    for offset in 0..=RESPONSE.len() {
        let mut parts = Parts::default();
        let rest = parse_split(&mut parser(), &mut parts, RESPONSE, &[offset]);
        assert_eq!(parts, whole, "split at {offset}");
        assert_eq!(rest, expected_rest, "split at {offset}");
    }

    for a in 0..RESPONSE.len() {
        for b in a..RESPONSE.len() {
            let mut parts = Parts::default();
            let rest = parse_split(&mut parser(), &mut parts, RESPONSE, &[a, b]);
            assert_eq!(parts, whole, "split at {a} and {b}");
            assert_eq!(rest, expected_rest, "split at {a} and {b}");
        }
    }

    // one byte per read
    let offsets: Vec<usize> = (1..RESPONSE.len()).collect();
    let mut parts = Parts::default();
    let rest = parse_split(&mut parser(), &mut parts, RESPONSE, &offsets);
    assert_eq!(parts, whole);
    assert_eq!(rest, expected_rest);
}

#[test]
fn test_parse_oversized() {
    let mut parser = Parser::new(Buffer::new(8, 32), Buffer::new(8, 64));
    let mut parts = Parts::default();

    // status line never terminated
    assert!(parser.parse(BytesMut::from(&b"HTTP/1.1 200 "[..]), &mut parts).is_pending());
    assert!(matches!(
        parser.parse(BytesMut::from(&b"Very Long Reason That Overflows"[..]), &mut parts),
        ParseResult::Err(ParseError::StatusLineTooLong)
    ));

    parser.reset();
    parts.clear();
    assert!(matches!(
        parser.parse(BytesMut::from(&b"HTTP/1.1 200 Very Long Reason That Overflows\r\n"[..]), &mut parts),
        ParseResult::Err(ParseError::StatusLineTooLong)
    ));

    // header block limit applies to all lines, across reads
    parser.reset();
    parts.clear();
    assert!(parser.parse(BytesMut::from(&b"HTTP/1.1 200 OK\r\n"[..]), &mut parts).is_pending());
    let mut result = ParseResult::Pending;
    for _ in 0..8 {
        result = parser.parse(BytesMut::from(&b"X-Filler: 0123456789\r\n"[..]), &mut parts);
        if !result.is_pending() {
            break;
        }
    }
    assert!(matches!(result, ParseResult::Err(ParseError::HeadersTooLarge)));
}

#[test]
fn test_parse_reset_reuse() {
    let mut parser = parser();
    let mut parts = Parts::default();

    let rest = ready!(parser.parse(BytesMut::from(RESPONSE), &mut parts));
    assert_eq!(&rest[..], b"Hello");

    // bytes after completion are returned untouched
    let rest = ready!(parser.parse(BytesMut::from(&b"more"[..]), &mut parts));
    assert_eq!(&rest[..], b"more");

    parser.reset();
    parts.clear();
    assert_eq!(parser.state(), State::StatusLine);

    let rest = ready!(parser.parse(
        BytesMut::from(&b"HTTP/1.0 304 Not Modified\r\nETag: \"x\"\r\n\r\n"[..]),
        &mut parts
    ));
    assert!(rest.is_empty());
    assert_eq!(parts.status, StatusCode::NOT_MODIFIED);
    assert_eq!(parts.headers.len(), 1);
    assert_eq!(parts.content_length, None);
}
