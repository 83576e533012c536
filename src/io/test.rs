use bytes::BytesMut;
use std::io;

use super::StreamClient;
use super::mock::Mock;

#[test]
fn read_returns_arrived_bytes() {
    let mut client = StreamClient::new(Mock::new().feed(b"HTTP/1.1").feed(b" 200"), 64);

    assert_eq!(&client.read().unwrap()[..], b"HTTP/1.1");
    assert_eq!(&client.read().unwrap()[..], b" 200");
    assert_eq!(
        client.read().unwrap_err().kind(),
        io::ErrorKind::UnexpectedEof
    );
}

#[test]
fn read_is_bounded_by_read_size() {
    let mut client = StreamClient::new(Mock::new().feed(b"abcdefgh"), 3);

    assert_eq!(&client.read().unwrap()[..], b"abc");
    assert_eq!(&client.read().unwrap()[..], b"def");
    assert_eq!(&client.read().unwrap()[..], b"gh");
}

#[test]
fn unread_is_returned_before_wire_bytes() {
    let mut client = StreamClient::new(Mock::new().feed(b"cd"), 64);

    client.unread(BytesMut::from(&b"ab"[..]));
    assert_eq!(client.buffered(), 2);
    assert_eq!(&client.read().unwrap()[..], b"ab");
    assert_eq!(client.get_ref().read_calls, 0);

    assert_eq!(&client.read().unwrap()[..], b"cd");
    assert_eq!(client.get_ref().read_calls, 1);
}

#[test]
fn unread_prepends_in_order() {
    let mut client = StreamClient::new(Mock::new(), 64);

    client.unread(BytesMut::from(&b"world"[..]));
    client.unread(BytesMut::from(&b"hello "[..]));
    client.unread(BytesMut::new());

    assert_eq!(&client.read().unwrap()[..], b"hello world");
    assert_eq!(client.buffered(), 0);
}

#[test]
fn partial_consumption_requeues_remainder() {
    let mut client = StreamClient::new(Mock::new().feed(b"abcdef").feed(b"gh"), 64);

    let mut bytes = client.read().unwrap();
    let rest = bytes.split_off(2);
    assert_eq!(&bytes[..], b"ab");
    client.unread(rest);

    assert_eq!(&client.read().unwrap()[..], b"cdef");
    assert_eq!(&client.read().unwrap()[..], b"gh");
}

#[test]
fn read_error_is_propagated() {
    let mut client = StreamClient::new(Mock::new().feed_error(io::ErrorKind::TimedOut), 64);
    assert_eq!(client.read().unwrap_err().kind(), io::ErrorKind::TimedOut);
}

#[test]
fn write_whole_buffer() {
    let mut client = StreamClient::new(Mock::new(), 64);
    client.write(b"GET / HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(client.get_ref().written, b"GET / HTTP/1.1\r\n\r\n");
}
