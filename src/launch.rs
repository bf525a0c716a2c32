// src/launch.rs
//! Deployment helpers used by the preflight binary
//!
//! The launcher prefers a configured port and scans upward when it is
//! already occupied.

use std::net::TcpListener;

/// True when the port can be bound on the loopback interface
pub fn port_is_free(port: u16) -> bool {
    TcpListener::bind(("127.0.0.1", port)).is_ok()
}

/// First free port at or above `preferred`, trying at most `limit` ports
pub fn next_free_port(preferred: u16, limit: u16) -> Option<u16> {
    (0..limit)
        .map(|offset| preferred.saturating_add(offset))
        .find(|port| port_is_free(*port))
}
