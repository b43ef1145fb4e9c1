use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serves one canned HTTP response on loopback.
///
/// Returns the base URL and a handle yielding the request line that was received.
pub(crate) fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local address");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");
        loop {
            let mut header = String::new();
            let read = reader.read_line(&mut header).expect("read header");
            if read == 0 || header == "\r\n" {
                break;
            }
        }

        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush response");
        request_line.trim_end().to_string()
    });

    (format!("http://{}", addr), handle)
}

/// A loopback URL nothing is listening on.
pub(crate) fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    format!("http://{}", addr)
}
