use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============ Record kind ============

/// DNS record type requested for the new subdomain.
///
/// Determines how the backend interprets [`SubdomainRequest::host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// IPv4 address record; the host must be a dotted-quad address.
    #[default]
    A,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Free-form text record.
    Txt,
}

impl RecordKind {
    /// All kinds in selector order.
    pub const ALL: [Self; 4] = [Self::A, Self::Cname, Self::Mx, Self::Txt];

    /// Wire name (`"A"`, `"CNAME"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
        }
    }

    /// Next kind in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::A => Self::Cname,
            Self::Cname => Self::Mx,
            Self::Mx => Self::Txt,
            Self::Txt => Self::A,
        }
    }

    /// Previous kind in selector order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::A => Self::Txt,
            Self::Cname => Self::A,
            Self::Mx => Self::Cname,
            Self::Txt => Self::Mx,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "TXT" => Ok(Self::Txt),
            other => Err(format!("unsupported record kind: {other}")),
        }
    }
}

// ============ POST /data ============

/// Body of `POST /data`.
///
/// Built fresh for every submission; `subdomain` is derived from `prefix`
/// and the dashboard's base domain and is never edited directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdomainRequest {
    /// Fully qualified name (`prefix.base` or `base`).
    pub subdomain: String,
    /// Time-to-live in minutes.
    pub ttl: u32,
    pub kind: RecordKind,
    pub prefix: String,
    /// Record target (IPv4 address for `A`).
    pub host: String,
    pub description: String,
}

/// Success body of `POST /data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
}

// ============ POST /domains ============

/// Which domain list the backend should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainListKind {
    /// Domains currently held at the registrar.
    #[default]
    Listing,
    /// Subdomain records created through the dashboard.
    Changed,
}

impl DomainListKind {
    pub const ALL: [Self; 2] = [Self::Listing, Self::Changed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Changed => "changed",
        }
    }

    /// The other list kind (the selector only has two entries).
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Listing => Self::Changed,
            Self::Changed => Self::Listing,
        }
    }
}

/// Body of `POST /domains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainsQuery {
    pub kind: DomainListKind,
}

/// One row of the domains table.
///
/// The registrar listing leaves `target` empty; the changed list fills it
/// with the record target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainInfo {
    /// Registrar status or record type.
    pub tag: String,
    pub name: String,
    /// Expiry date (listing) or creation date (changed), as sent.
    pub date: String,
    pub target: String,
}

/// Success body of `POST /domains`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domains: Vec<DomainInfo>,
}

/// The backend encodes an empty list as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subdomain_request_wire_shape() {
        let req = SubdomainRequest {
            subdomain: "api.example.com".into(),
            ttl: 10,
            kind: RecordKind::Cname,
            prefix: "api".into(),
            host: "origin.example.net".into(),
            description: "api gateway".into(),
        };
        let value = serde_json::to_value(&req).unwrap_or_default();
        assert_eq!(
            value,
            json!({
                "subdomain": "api.example.com",
                "ttl": 10,
                "kind": "CNAME",
                "prefix": "api",
                "host": "origin.example.net",
                "description": "api gateway",
            })
        );
    }

    #[test]
    fn record_kind_cycles_through_all_kinds() {
        let mut kind = RecordKind::A;
        let mut seen = Vec::new();
        for _ in 0..RecordKind::ALL.len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(seen, RecordKind::ALL);
        assert_eq!(kind, RecordKind::A);
        assert_eq!(RecordKind::A.prev(), RecordKind::Txt);
    }

    #[test]
    fn record_kind_parses_case_insensitively() {
        assert_eq!("mx".parse::<RecordKind>(), Ok(RecordKind::Mx));
        assert_eq!("TXT".parse::<RecordKind>(), Ok(RecordKind::Txt));
        assert!("AAAA".parse::<RecordKind>().is_err());
    }

    #[test]
    fn domains_query_wire_shape() {
        let body = DomainsQuery {
            kind: DomainListKind::Changed,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap_or_default(),
            json!({"kind": "changed"})
        );
    }

    #[test]
    fn domain_info_tolerates_missing_target() {
        let parsed: Result<DomainsResponse, _> = serde_json::from_value(json!({
            "domains": [{"tag": "ACTIVE", "name": "example.com", "date": "2026-01-01 00:00:00"}]
        }));
        assert!(parsed.is_ok(), "unexpected parse result: {parsed:?}");
        let Ok(parsed) = parsed else { return };
        assert_eq!(parsed.domains.len(), 1);
        assert_eq!(parsed.domains[0].target, "");
    }

    #[test]
    fn null_or_missing_domains_is_empty_list() {
        let parsed: Result<DomainsResponse, _> = serde_json::from_str(r#"{"domains":null}"#);
        assert_eq!(parsed.ok(), Some(DomainsResponse::default()));

        let parsed: Result<DomainsResponse, _> = serde_json::from_str("{}");
        assert_eq!(parsed.ok(), Some(DomainsResponse::default()));
    }
}
