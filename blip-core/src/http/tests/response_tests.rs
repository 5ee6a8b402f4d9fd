use crate::http::{Body, Response, status_line};
use bytes::Bytes;
use http::StatusCode;
use pretty_assertions::assert_eq;
use std::time::{Duration, SystemTime};

fn fixed_date() -> SystemTime {
    // Sun, 06 Nov 1994 08:49:37 GMT
    SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777)
}

#[test]
fn status_lines_match_wire_strings() {
    assert_eq!(status_line(StatusCode::OK), "200 OK");
    assert_eq!(status_line(StatusCode::NOT_FOUND), "404 Not Found");
    assert_eq!(status_line(StatusCode::BAD_REQUEST), "400 Bad Request");
    assert_eq!(
        status_line(StatusCode::METHOD_NOT_ALLOWED),
        "405 Method Not Allowed"
    );
    assert_eq!(
        status_line(StatusCode::INTERNAL_SERVER_ERROR),
        "500 Internal Server Error"
    );
}

#[test]
fn head_has_fixed_header_order() {
    let response = Response::file("index.html", Bytes::from_static(b"<h1>hi</h1>"));

    let head = response.head(fixed_date());

    assert_eq!(
        std::str::from_utf8(&head).unwrap(),
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/html\r\n\
         Content-Length: 11\r\n\
         Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
         \r\n"
    );
}

#[test]
fn empty_response_is_text_plain_with_zero_length() {
    let response = Response::empty(StatusCode::NOT_FOUND);

    let head = response.head(fixed_date());

    assert_eq!(
        std::str::from_utf8(&head).unwrap(),
        "HTTP/1.1 404 Not Found\r\n\
         Content-Type: text/plain\r\n\
         Content-Length: 0\r\n\
         Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
         \r\n"
    );
    assert!(matches!(response.body, Body::Empty));
}

#[test]
fn file_head_announces_length_without_body() {
    let response = Response::file_head("photo.png", 41_000);

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type, "image/png");
    assert_eq!(response.content_length, 41_000);
    assert!(matches!(response.body, Body::Empty));
}

#[tokio::test]
async fn write_to_sends_head_then_body() {
    let response = Response::file("app.js", Bytes::from_static(b"console.log(1);"));
    let mut out = Vec::new();

    response.write_to(&mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    let (head, body) = text.split_once("\r\n\r\n").unwrap();
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("\r\nContent-Type: application/javascript\r\n"));
    assert!(head.contains("\r\nContent-Length: 15\r\n"));
    assert!(head.contains("\r\nDate: "));
    assert!(head.ends_with(" GMT"));
    assert_eq!(body, "console.log(1);");
}

#[tokio::test]
async fn write_to_omits_body_for_empty_responses() {
    let response = Response::empty(StatusCode::METHOD_NOT_ALLOWED);
    let mut out = Vec::new();

    response.write_to(&mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
    assert!(text.ends_with("\r\n\r\n"));
}
