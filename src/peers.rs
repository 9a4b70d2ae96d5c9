//! Peer list model and extraction from the node's `/eth/v1/node/peers` response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ParseError;

/// Lifecycle state reported for peers with an active connection.
pub const CONNECTED_STATE: &str = "connected";

/// One connected peer as shown in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerRecord {
    pub peer_id: String,
    pub last_seen_p2p_address: String,
    pub state: String,
    pub direction: String,
}

impl PeerRecord {
    /// Column headers, in cell order.
    pub fn headers() -> [&'static str; 4] {
        ["peer_id", "last_seen_p2p_address", "state", "direction"]
    }

    /// Cell values, in the same order as [`PeerRecord::headers`].
    pub fn cells(&self) -> [&str; 4] {
        [
            self.peer_id.as_str(),
            self.last_seen_p2p_address.as_str(),
            self.state.as_str(),
            self.direction.as_str(),
        ]
    }
}

/// Connected peers of one refresh cycle, in response order.
pub type PeerSnapshot = Vec<PeerRecord>;

/// Wire schema of a single entry in `data`.
///
/// Missing fields default to an empty string. Other fields (`enr`, ...) are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawPeer {
    #[serde(default, deserialize_with = "lenient_string")]
    peer_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    last_seen_p2p_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    direction: String,
}

impl From<RawPeer> for PeerRecord {
    fn from(raw: RawPeer) -> Self {
        Self {
            peer_id: raw.peer_id,
            last_seen_p2p_address: raw.last_seen_p2p_address,
            state: raw.state,
            direction: raw.direction,
        }
    }
}

/// Accepts any JSON value: strings as-is, `null` as empty, anything else as its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Parses a peers response body and keeps only connected peers.
///
/// Fails only if the body is not JSON or its top level is not an object.
/// A missing or non-array `data` yields an empty snapshot.
pub fn extract_peers(body: &str) -> Result<PeerSnapshot, ParseError> {
    let document: Value = serde_json::from_str(body)?;
    let Value::Object(mut top) = document else {
        return Err(ParseError::NotAnObject);
    };

    let Some(Value::Array(entries)) = top.remove("data") else {
        return Ok(Vec::new());
    };

    let snapshot = entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| serde_json::from_value::<RawPeer>(entry).ok())
        .filter(|raw| raw.state == CONNECTED_STATE)
        .map(PeerRecord::from)
        .collect();

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_connected_peers_in_order() {
        let body = r#"{"data":[
            {"peer_id":"a","state":"connected"},
            {"peer_id":"b","state":"disconnected"},
            {"peer_id":"c","state":"connecting"},
            {"peer_id":"d","state":"connected"},
            {"peer_id":"e","state":"disconnecting"},
            {"peer_id":"f","state":"connected"}
        ]}"#;

        let peers = extract_peers(body).unwrap();
        let ids: Vec<&str> = peers.iter().map(|p| p.peer_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d", "f"]);
    }

    #[test]
    fn state_match_is_exact() {
        let body = r#"{"data":[
            {"peer_id":"a","state":"Connected"},
            {"peer_id":"b","state":" connected"},
            {"peer_id":"c"}
        ]}"#;
        assert!(extract_peers(body).unwrap().is_empty());
    }

    #[test]
    fn unknown_fields_do_not_change_output() {
        let plain = r#"{"data":[{"peer_id":"a","last_seen_p2p_address":"/ip4/1.2.3.4/tcp/9000","state":"connected","direction":"inbound"}]}"#;
        let with_enr = r#"{"meta":{"count":1},"data":[{"peer_id":"a","enr":"enr:-Iu4QHk","last_seen_p2p_address":"/ip4/1.2.3.4/tcp/9000","state":"connected","direction":"inbound","agent":"x"}]}"#;
        assert_eq!(extract_peers(plain).unwrap(), extract_peers(with_enr).unwrap());
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let body = r#"{"data":[{"state":"connected"}]}"#;
        let peers = extract_peers(body).unwrap();
        assert_eq!(
            peers,
            vec![PeerRecord {
                state: "connected".to_string(),
                ..PeerRecord::default()
            }]
        );
    }

    #[test]
    fn null_and_non_string_values_are_lenient() {
        let body = r#"{"data":[{"peer_id":null,"last_seen_p2p_address":42,"state":"connected","direction":true}]}"#;
        let peers = extract_peers(body).unwrap();
        assert_eq!(peers[0].peer_id, "");
        assert_eq!(peers[0].last_seen_p2p_address, "42");
        assert_eq!(peers[0].direction, "true");
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let body = r#"{"data":[1,"connected",null,{"peer_id":"a","state":"connected"}]}"#;
        let peers = extract_peers(body).unwrap();
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].peer_id, "a");
    }

    #[test]
    fn missing_or_malformed_data_yields_empty_snapshot() {
        assert!(extract_peers("{}").unwrap().is_empty());
        assert!(extract_peers(r#"{"data":null}"#).unwrap().is_empty());
        assert!(extract_peers(r#"{"data":{"peer_id":"a"}}"#).unwrap().is_empty());
        assert!(extract_peers(r#"{"data":"connected"}"#).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            extract_peers("<html>502 Bad Gateway</html>"),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(extract_peers(""), Err(ParseError::Json(_))));
    }

    #[test]
    fn non_object_top_level_is_a_parse_error() {
        assert!(matches!(extract_peers("[]"), Err(ParseError::NotAnObject)));
        assert!(matches!(extract_peers("\"data\""), Err(ParseError::NotAnObject)));
    }

    #[test]
    fn beacon_api_example() {
        let body = r#"{"data":[{"peer_id":"16Uiu...","last_seen_p2p_address":"/ip4/1.2.3.4/tcp/9000","state":"connected","direction":"outbound"},{"peer_id":"Qm123","state":"disconnected"}]}"#;
        let peers = extract_peers(body).unwrap();
        assert_eq!(peers.len(), 1);
        assert_eq!(
            peers[0].cells(),
            ["16Uiu...", "/ip4/1.2.3.4/tcp/9000", "connected", "outbound"]
        );
    }
}
