use crate::routes::paths::parse_prefixed_address;
use crate::shared::config::AppConfig;

/// Read-only values a card needs from the application session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafeSession {
    pub short_name: String,
    pub safe_address: String,
    pub chain_id: String,
}

impl SafeSession {
    /// Build from the `:safe` route segment (`eth:0xabc` or a bare address).
    /// A bare address takes the short name from config.
    pub fn from_route(segment: &str, config: &AppConfig) -> Self {
        let (short_name, safe_address) = parse_prefixed_address(segment)
            .unwrap_or_else(|| (config.chain.short_name.clone(), segment.to_string()));
        Self {
            short_name,
            safe_address,
            chain_id: config.chain.chain_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_route_with_prefix() {
        let session = SafeSession::from_route("gno:0xAbC", &AppConfig::default());
        assert_eq!(session.short_name, "gno");
        assert_eq!(session.safe_address, "0xAbC");
        assert_eq!(session.chain_id, "1");
    }

    #[test]
    fn test_from_route_bare_address() {
        let session = SafeSession::from_route("0xAbC", &AppConfig::default());
        assert_eq!(session.short_name, "eth");
        assert_eq!(session.safe_address, "0xAbC");
    }
}
