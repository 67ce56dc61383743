use forge_dns_domain::config::{ProbeConfig, ProbeRule};
use forge_dns_infrastructure::probe::{render_response, select_body, ProbeResponder};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

fn request_for(host: &str) -> String {
    format!(
        "GET / HTTP/1.1\r\nHost: {}\r\nUser-Agent: probe\r\nAccept: */*\r\n\r\n",
        host
    )
}

#[test]
fn test_select_body_matches_host_header() {
    let config = ProbeConfig::default();

    assert_eq!(select_body(&request_for("ctest.cdn.nintendo.net"), &config), "ok");
    assert!(select_body(&request_for("conntest.nintendowifi.net"), &config)
        .contains("This is test.html page"));
}

#[test]
fn test_select_body_falls_back_for_unknown_host() {
    let config = ProbeConfig::default();
    assert_eq!(
        select_body(&request_for("example.com"), &config),
        "What's your problem?"
    );
}

#[test]
fn test_select_body_requires_full_header_line() {
    let config = ProbeConfig::default();
    // Host is a prefix of a rule host but not the whole line.
    assert_eq!(
        select_body(&request_for("ctest.cdn.nintendo.net.evil"), &config),
        "What's your problem?"
    );
}

#[test]
fn test_first_matching_rule_wins() {
    let config = ProbeConfig {
        rules: vec![
            ProbeRule::new("a.example", "first"),
            ProbeRule::new("a.example", "second"),
        ],
        ..ProbeConfig::default()
    };
    assert_eq!(select_body(&request_for("a.example"), &config), "first");
}

#[test]
fn test_render_response_layout() {
    let config = ProbeConfig::default();
    let response = render_response(request_for("ctest.cdn.nintendo.net").as_bytes(), &config);

    assert_eq!(
        String::from_utf8(response).unwrap(),
        "HTTP/1.0 200 OK\r\nContent-Length: 2\r\nContent-Type: text/html\r\nX-Organization: Nintendo\r\n\r\nok"
    );
}

#[test]
fn test_render_response_content_length_counts_bytes() {
    let config = ProbeConfig {
        fallback_body: "héllo".to_string(),
        extra_headers: vec![],
        ..ProbeConfig::default()
    };
    let response = String::from_utf8(render_response(b"garbage", &config)).unwrap();

    assert!(response.starts_with("HTTP/1.0 200 OK\r\nContent-Length: 6\r\n"));
    assert!(response.ends_with("\r\n\r\nhéllo"));
}

#[tokio::test]
async fn test_responder_serves_sequential_connections() {
    let responder = ProbeResponder::bind(
        "127.0.0.1:0".parse().unwrap(),
        Arc::new(ProbeConfig::default()),
    )
    .await
    .unwrap();
    let addr = responder.local_addr().unwrap();
    tokio::spawn(responder.run());

    for (host, expected_body) in [
        ("ctest.cdn.nintendo.net", "ok"),
        ("example.com", "What's your problem?"),
    ] {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request_for(host).as_bytes()).await.unwrap();

        let mut response = String::new();
        tokio::time::timeout(Duration::from_secs(2), stream.read_to_string(&mut response))
            .await
            .expect("response in time")
            .unwrap();

        assert!(response.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(response.ends_with(expected_body), "body for {}", host);
    }
}
