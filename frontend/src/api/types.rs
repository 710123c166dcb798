use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub id: String,
    pub user_type: String,
    #[serde(default)]
    pub is_administrator: bool,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub published_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            error: "Not signed in".to_string(),
            code: "UNAUTHORIZED".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_constructors_set_codes() {
        assert_eq!(ApiError::unknown("boom").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("network").code, "REQUEST_FAILED");
        assert!(ApiError::unauthorized().is_unauthorized());
        assert!(!ApiError::unknown("boom").is_unauthorized());
    }

    #[test]
    fn api_error_display_matches_error_text() {
        assert_eq!(format!("{}", ApiError::unknown("boom")), "boom");
        assert_eq!(
            ApiError::request_failed("bad gateway").to_string(),
            "bad gateway"
        );
    }

    #[test]
    fn identity_response_defaults_optional_fields() {
        let identity: IdentityResponse =
            serde_json::from_str(r#"{"id":"u1","user_type":"student"}"#).unwrap();
        assert!(!identity.is_administrator);
        assert!(identity.display_name.is_none());
    }

    #[test]
    fn news_item_parses_iso_dates() {
        let item: NewsItem = serde_json::from_str(
            r#"{"headline":"Spring cohort opens","published_on":"2026-03-01"}"#,
        )
        .unwrap();
        assert_eq!(item.published_on, NaiveDate::from_ymd_opt(2026, 3, 1));
        assert!(item.href.is_none());
    }
}
