//! WebRTC ICE server entries handed to signaling clients

use serde::{Deserialize, Serialize};

/// One ICE server entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceServer {
    pub urls: Vec<String>,
}

impl IceServer {
    /// Build a STUN entry, prefixing every `host:port` with `stun:`
    #[must_use]
    pub fn stun<S: AsRef<str>>(servers: &[S]) -> Self {
        Self {
            urls: servers
                .iter()
                .map(|server| format!("stun:{}", server.as_ref()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stun_urls_are_prefixed() {
        let entry = IceServer::stun(&["stun1.example.com:443", "stun2.example.com:129"]);
        assert_eq!(
            entry.urls,
            vec!["stun:stun1.example.com:443", "stun:stun2.example.com:129"]
        );
    }

    #[test]
    fn serializes_as_urls_object() {
        let entry = IceServer::stun(&["a:1"]);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"urls":["stun:a:1"]}"#);
    }
}
