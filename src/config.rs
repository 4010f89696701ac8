use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16
}

impl Config {

    pub fn from_env() -> Result<Self> {

        Self::from_lookup(|key| std::env::var(key).ok())

    }

    /// Resolves the config from any key lookup, so tests don't have to touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| Error::InvalidPort { value, source })?,
            None => DEFAULT_PORT
        };

        Ok(Config {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port
        })

    }

    pub fn addr(&self) -> SocketAddr {

        SocketAddr::new(self.host, self.port)

    }

}
