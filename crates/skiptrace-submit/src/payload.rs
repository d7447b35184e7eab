//! Request and response bodies of the actor run API.

use serde::{Deserialize, Serialize};

/// Results requested per address.
pub const DEFAULT_MAX_RESULTS: u32 = 1;

/// Input document for a new actor run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInput {
    pub street_citystatezip: Vec<String>,
    pub max_results: u32,
}

impl RunInput {
    pub fn new(addresses: Vec<String>) -> Self {
        Self {
            street_citystatezip: addresses,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Reply to a successful run start.
#[derive(Debug, Clone, Deserialize)]
pub struct RunResponse {
    pub data: RunData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_serializes_with_wire_names() {
        let input = RunInput::new(vec!["123 Main St; Springfield, IL 62704".to_string()]);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "street_citystatezip": ["123 Main St; Springfield, IL 62704"],
                "max_results": 1
            })
        );
    }

    #[test]
    fn response_reads_status_url() {
        let body = r#"{"data":{"id":"abc","status":"READY","statusUrl":"https://x/status"}}"#;
        let response: RunResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.status_url.as_deref(), Some("https://x/status"));
        assert_eq!(response.data.id.as_deref(), Some("abc"));
        assert_eq!(response.data.status.as_deref(), Some("READY"));
    }

    #[test]
    fn response_without_status_url_still_parses() {
        let response: RunResponse = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(response.data.status_url.is_none());
    }
}
