//! Static file server for the built dashboard.
//!
//! Serves the trunk output from `dist/` with a client-side-routing
//! fallback to `index.html`. Development convenience; production
//! deployments sit behind a real web server.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const BIND_ADDR: &str = "127.0.0.1:8080";
const DIST_DIR: &str = "dist";

fn main() {
    let listener = match TcpListener::bind(BIND_ADDR) {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("could not bind {BIND_ADDR}: {err}");
            return;
        }
    };

    println!("dashboard served at http://{BIND_ADDR} from {DIST_DIR}/");
    println!("press Ctrl+C to stop");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => serve(stream),
            Err(err) => eprintln!("connection error: {err}"),
        }
    }
}

fn serve(mut stream: TcpStream) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => return,
    };

    let raw_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = raw_path.split('?').next().unwrap_or("/");

    let (body, content_type, status) = load(path);
    let header = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );
    if stream.write_all(header.as_bytes()).is_ok() {
        let _ = stream.write_all(&body);
    }
    let _ = stream.flush();
}

fn load(path: &str) -> (Vec<u8>, &'static str, &'static str) {
    let mut file = PathBuf::from(DIST_DIR);
    file.push(path.trim_start_matches('/'));

    // Unknown routes fall back to index.html so the client-side router can
    // resolve them.
    if path == "/" || !file.is_file() {
        file = PathBuf::from(DIST_DIR).join("index.html");
    }

    match fs::read(&file) {
        Ok(body) => (body, content_type_for(&file), "200 OK"),
        Err(_) => (
            b"<!DOCTYPE html><html><body><h1>dashboard build missing - run `trunk build` first</h1></body></html>"
                .to_vec(),
            "text/html; charset=utf-8",
            "404 NOT FOUND",
        ),
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
