//! Logger module
//!
//! Stdout/stderr logging for the gateway: startup banner, access lines and
//! error reporting. Access lines carry a CLF-style local timestamp.

use crate::config::Config;
use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("dapps gateway started");
    write_info(&format!(
        "Serving {} (dapps list: {})",
        config.files.index_path.display(),
        config.files.dapps_path.display()
    ));
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Explorer upstream: https://{}{}",
        config.proxy.upstream_host, config.proxy.upstream_base_path
    ));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    write_info(&format!(
        "[{}] \"{method} {uri} {version:?}\"",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    ));
}

pub fn log_response(bytes: usize) {
    write_info(&format!("[Response] {bytes} bytes"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
