//! URL builders for safe routes and share links.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::safe::SafeSession;

/// Segments of the share landing route, used by both `AppRoutes` and
/// [`share_user_variable_url`].
pub const SHARE_ROUTE_SEGMENTS: [&str; 2] = ["share", "safe-variable"];

pub fn share_route_path() -> String {
    format!("/{}", SHARE_ROUTE_SEGMENTS.join("/"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SafeRoute {
    Apps,
    Variables,
    DataSources,
}

impl SafeRoute {
    fn segment(&self) -> &'static str {
        match self {
            SafeRoute::Apps => "apps",
            SafeRoute::Variables => "variables",
            SafeRoute::DataSources => "data-sources",
        }
    }
}

/// `/{short_name}:{safe_address}/{route}`
pub fn generate_safe_route(route: SafeRoute, session: &SafeSession) -> String {
    format!(
        "/{}:{}/{}",
        session.short_name,
        session.safe_address,
        route.segment()
    )
}

/// Link that opens a variable inside the apps page of the current safe.
pub fn open_variable_link(session: &SafeSession, variable_url: &str) -> String {
    format!(
        "{}?variableUrl={}",
        generate_safe_route(SafeRoute::Apps, session),
        encode_uri(variable_url)
    )
}

/// Absolute link that can be shared outside the current safe.
pub fn share_user_variable_url(origin: &str, variable_url: &str, chain_id: &str) -> String {
    format!(
        "{}{}?variableUrl={}&chain={}",
        origin.trim_end_matches('/'),
        share_route_path(),
        encode_uri(variable_url),
        urlencoding::encode(chain_id)
    )
}

/// Characters the browser's `encodeURI` escapes within ASCII. URL structure
/// characters stay intact so the variable URL remains readable inside the link.
const ENCODE_URI_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode like `encodeURI`.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, ENCODE_URI_SET).to_string()
}

/// Split `eth:0xabc` into `("eth", "0xabc")`.
pub fn parse_prefixed_address(segment: &str) -> Option<(String, String)> {
    let (prefix, address) = segment.split_once(':')?;
    if prefix.is_empty() || address.is_empty() {
        return None;
    }
    Some((prefix.to_string(), address.to_string()))
}

pub fn current_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SafeSession {
        SafeSession {
            short_name: "eth".to_string(),
            safe_address: "0x1234".to_string(),
            chain_id: "1".to_string(),
        }
    }

    #[test]
    fn test_generate_safe_route() {
        assert_eq!(generate_safe_route(SafeRoute::Apps, &session()), "/eth:0x1234/apps");
        assert_eq!(
            generate_safe_route(SafeRoute::DataSources, &session()),
            "/eth:0x1234/data-sources"
        );
    }

    #[test]
    fn test_encode_uri() {
        assert_eq!(encode_uri("https://vars.example/a?b=1&c=2"), "https://vars.example/a?b=1&c=2");
        assert_eq!(encode_uri("https://vars.example/my var"), "https://vars.example/my%20var");
        assert_eq!(encode_uri("ü"), "%C3%BC");
        assert_eq!(encode_uri("100%"), "100%25");
        assert_eq!(encode_uri("a[0]|{b}^`c`"), "a%5B0%5D%7C%7Bb%7D%5E%60c%60");
        assert_eq!(encode_uri("-_.!~*'();,/?:@&=+$#"), "-_.!~*'();,/?:@&=+$#");
    }

    #[test]
    fn test_open_variable_link() {
        assert_eq!(
            open_variable_link(&session(), "https://vars.example/gas price"),
            "/eth:0x1234/apps?variableUrl=https://vars.example/gas%20price"
        );
    }

    #[test]
    fn test_share_url_contains_variable_and_chain() {
        let url = share_user_variable_url("https://safe.example/", "https://vars.example/gas", "100");
        assert_eq!(
            url,
            "https://safe.example/share/safe-variable?variableUrl=https://vars.example/gas&chain=100"
        );
        assert!(url.contains("https://vars.example/gas"));
        assert!(url.contains("chain=100"));
    }

    #[test]
    fn test_share_url_targets_share_route() {
        assert_eq!(share_route_path(), "/share/safe-variable");
        let url = share_user_variable_url("https://safe.example", "https://vars.example/gas", "1");
        let path = url.trim_start_matches("https://safe.example");
        assert!(path.starts_with(&format!("{}?", share_route_path())));
    }

    #[test]
    fn test_parse_prefixed_address() {
        assert_eq!(
            parse_prefixed_address("gno:0xabc"),
            Some(("gno".to_string(), "0xabc".to_string()))
        );
        assert_eq!(parse_prefixed_address("0xabc"), None);
        assert_eq!(parse_prefixed_address(":0xabc"), None);
        assert_eq!(parse_prefixed_address("eth:"), None);
    }
}
