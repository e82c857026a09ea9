use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum HostPortError {
    #[error("Invalid port: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Invalid hostname: {0}")]
    InvalidHostname(#[from] AddrParseError),
}

/// Gets the host:port from the env vars HOST and PORT.
/// Uses defaults `127.0.0.1:5000` for whichever is unset.
pub fn get_api_base_url() -> Result<SocketAddr, HostPortError> {
    listen_address(std::env::var("HOST").ok(), std::env::var("PORT").ok())
}

fn listen_address(host: Option<String>, port: Option<String>) -> Result<SocketAddr, HostPortError> {
    let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match port {
        Some(p) => p.trim().parse::<u16>()?,
        None => DEFAULT_PORT,
    };
    Ok(format!("{}:{}", host.trim(), port).parse::<SocketAddr>()?)
}
