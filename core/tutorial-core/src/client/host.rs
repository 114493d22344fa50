//! Cluster hosts and the round-robin host pool.

use crate::error::{TutorialError, TutorialResult};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One database node, identified by `host:port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CassandraHost {
    host: String,
    port: u16,
}

impl CassandraHost {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parse `host` or `host:port`.
    pub fn parse(spec: &str, default_port: u16) -> TutorialResult<Self> {
        let spec = spec.trim();
        let (host, port) = match spec.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| TutorialError::InvalidHost(spec.to_string()))?;
                (host, port)
            }
            None => (spec, default_port),
        };
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(TutorialError::InvalidHost(spec.to_string()));
        }
        Ok(Self::new(host, port))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port`, as reported in query results.
    pub fn name(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for CassandraHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated seed list. Duplicate hosts are dropped.
pub fn parse_seeds(seeds: &str, default_port: u16) -> TutorialResult<Vec<CassandraHost>> {
    let mut hosts: Vec<CassandraHost> = Vec::new();
    for spec in seeds.split(',').filter(|s| !s.trim().is_empty()) {
        let host = CassandraHost::parse(spec, default_port)?;
        if !hosts.contains(&host) {
            hosts.push(host);
        }
    }
    Ok(hosts)
}

/// Hands out hosts in round-robin order.
#[derive(Debug)]
pub struct HostPool {
    hosts: Vec<CassandraHost>,
    next: AtomicUsize,
}

impl HostPool {
    pub fn new(hosts: Vec<CassandraHost>) -> Self {
        Self {
            hosts,
            next: AtomicUsize::new(0),
        }
    }

    /// Next host in rotation, `None` for an empty pool.
    pub fn next_host(&self) -> Option<&CassandraHost> {
        if self.hosts.is_empty() {
            return None;
        }
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.hosts.len();
        self.hosts.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_and_port() {
        let host = CassandraHost::parse("localhost:9160", 9160).unwrap();
        assert_eq!(host.host(), "localhost");
        assert_eq!(host.port(), 9160);
        assert_eq!(host.name(), "localhost:9160");

        let host = CassandraHost::parse(" node1 ", 9161).unwrap();
        assert_eq!(host.name(), "node1:9161");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(CassandraHost::parse("localhost:port", 9160).is_err());
        assert!(CassandraHost::parse(":9160", 9160).is_err());
        assert!(CassandraHost::parse("local host", 9160).is_err());
    }

    #[test]
    fn test_parse_seeds_dedups() {
        let hosts = parse_seeds("a:1, b ,a:1,,", 9160).unwrap();
        let names: Vec<String> = hosts.iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["a:1", "b:9160"]);
    }

    #[test]
    fn test_round_robin() {
        let pool = HostPool::new(parse_seeds("a,b", 1).unwrap());
        let picked: Vec<String> = (0..4).map(|_| pool.next_host().unwrap().name()).collect();
        assert_eq!(picked, vec!["a:1", "b:1", "a:1", "b:1"]);
        assert!(HostPool::new(Vec::new()).next_host().is_none());
    }
}
