//! Instance address resolution
//!
//! Split a scrape target `instance` into the host and port reported on the
//! resource, next to the scheme the target is scraped with.

/// Hosts that carry no externally meaningful identity.
const UNROUTABLE_HOSTS: [&str; 3] = ["", "localhost", "0.0.0.0"];

/// Network locator of a scrape target.
///
/// `host` and `port` are absent rather than empty when the instance does not
/// provide them. `scheme` is kept as given, including the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetAddress {
    pub host: Option<String>,
    pub port: Option<String>,
    pub scheme: String,
}

impl TargetAddress {
    /// Resolve `instance` (`host` or `host:port`) and `scheme`.
    ///
    /// The instance is split on its last colon. Loopback and wildcard hosts
    /// (`localhost`, `0.0.0.0`) and an empty host are dropped, the port is kept.
    pub fn resolve(instance: &str, scheme: &str) -> Self {
        let (host, port) = instance.rsplit_once(':').unwrap_or((instance, ""));

        TargetAddress {
            host: (!UNROUTABLE_HOSTS.contains(&host)).then(|| host.to_string()),
            port: (!port.is_empty()).then(|| port.to_string()),
            scheme: scheme.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TargetAddress;

    fn address(host: Option<&str>, port: Option<&str>, scheme: &str) -> TargetAddress {
        TargetAddress {
            host: host.map(str::to_string),
            port: port.map(str::to_string),
            scheme: scheme.to_string(),
        }
    }

    #[test]
    fn test_resolve() {
        let cases = [
            ("hostname:8888", "http", address(Some("hostname"), Some("8888"), "http")),
            ("myinstance", "https", address(Some("myinstance"), None, "https")),
            ("myinstance:443", "", address(Some("myinstance"), Some("443"), "")),
            ("", "", address(None, None, "")),
            ("", "http", address(None, None, "http")),
            ("0.0.0.0:8888", "http", address(None, Some("8888"), "http")),
            ("0.0.0.0", "http", address(None, None, "http")),
            ("localhost:8888", "http", address(None, Some("8888"), "http")),
            ("localhost", "http", address(None, None, "http")),
            (":9100", "http", address(None, Some("9100"), "http")),
            ("hostname:", "http", address(Some("hostname"), None, "http")),
        ];

        for (instance, scheme, want) in cases {
            assert_eq!(
                TargetAddress::resolve(instance, scheme),
                want,
                "instance {instance:?}, scheme {scheme:?}"
            );
        }
    }

    #[test]
    fn test_resolve_splits_on_last_colon() {
        let got = TargetAddress::resolve("[::1]:9090", "http");
        assert_eq!(got, address(Some("[::1]"), Some("9090"), "http"));

        let got = TargetAddress::resolve("a:b:c", "http");
        assert_eq!(got, address(Some("a:b"), Some("c"), "http"));
    }

    #[test]
    fn test_loopback_match_is_exact() {
        let got = TargetAddress::resolve("localhost.localdomain:80", "http");
        assert_eq!(got.host.as_deref(), Some("localhost.localdomain"));

        let got = TargetAddress::resolve("127.0.0.1:80", "http");
        assert_eq!(got.host.as_deref(), Some("127.0.0.1"));
    }
}
