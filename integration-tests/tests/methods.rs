use integration_tests::harness::TestServer;
use integration_tests::harness::raw::{RawResponse, raw_exchange};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use reqwest::header::CONTENT_LENGTH;

/// POST is refused even for paths that exist.
#[test]
fn post_is_method_not_allowed() {
    let srv = TestServer::start("public");

    let res = srv.client().post(srv.url("/index.html")).send().unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[CONTENT_LENGTH], "0");
    assert!(res.bytes().unwrap().is_empty());
}

#[test]
fn other_methods_are_405_regardless_of_path() {
    let srv = TestServer::start("public");

    for request in [
        "PUT /index.html HTTP/1.1\r\n\r\n",
        "DELETE /missing.html HTTP/1.1\r\n\r\n",
        "OPTIONS * HTTP/1.1\r\n\r\n",
        "PATCH /sub/ HTTP/1.1\r\n\r\n",
        "PURGE / HTTP/1.1\r\n\r\n",
    ] {
        let raw = raw_exchange(srv.addr(), request.as_bytes());
        let res = RawResponse::parse(&raw);

        assert_eq!(res.status_line, "HTTP/1.1 405 Method Not Allowed", "{request:?}");
        assert_eq!(res.header("Content-Length"), Some("0"), "{request:?}");
        assert_eq!(res.header("Content-Type"), Some("text/plain"), "{request:?}");
        assert!(res.body.is_empty(), "{request:?}");
    }
}

/// Methods are case-sensitive tokens: lowercase "get" is not GET.
#[test]
fn lowercase_get_is_not_get() {
    let srv = TestServer::start("public");

    let raw = raw_exchange(srv.addr(), b"get /index.html HTTP/1.1\r\n\r\n");
    let res = RawResponse::parse(&raw);

    assert_eq!(res.status_line, "HTTP/1.1 405 Method Not Allowed");
}
