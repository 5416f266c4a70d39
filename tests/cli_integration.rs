use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;

#[test]
fn prints_banner_and_failed_without_endpoint() {
    Command::cargo_bin("servicenex-notifier")
        .unwrap()
        .env_remove("SERVICENEX_ENDPOINT")
        .assert()
        .success()
        .stdout(predicate::str::contains("ServiceNex Notifier version"))
        .stdout(predicate::str::contains("Sending installation notification"))
        .stdout(predicate::str::contains("FAILED"));
}

#[test]
fn failed_run_never_prints_the_api_key() {
    // A port with nothing listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Command::cargo_bin("servicenex-notifier")
        .unwrap()
        .env("SERVICENEX_ENDPOINT", format!("http://{addr}/hook"))
        .env("SERVICENEX_API_KEY", "cli-secret-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installation notification error"))
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("cli-secret-key").not());
}

#[test]
fn successful_run_prints_success() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = std::thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let head_end = loop {
            let n = socket.read(&mut chunk).unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|window| window == b"\r\n\r\n") {
                break pos;
            }
        };

        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .next()
            .unwrap_or(0);

        while buf.len() < head_end + 4 + content_length {
            let n = socket.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
            .unwrap();
        socket.flush().unwrap();
    });

    Command::cargo_bin("servicenex-notifier")
        .unwrap()
        .env("SERVICENEX_ENDPOINT", format!("http://{addr}/hook"))
        .env("SERVICENEX_API_KEY", "cli-key")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Installation notification succeeded (status: 200)",
        ))
        .stdout(predicate::str::contains("SUCCESS"));

    server.join().unwrap();
}
