//! Pagination utilities for list endpoints.
//!
//! List endpoints accept `?page=` (1-indexed) or `?offset=` together with an
//! optional `?limit=`; the page size defaults to 10.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Deserializes an optional string into an optional i64.
///
/// Query parameters may arrive as empty strings, which are treated as `None`.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Metadata about a paginated response.
///
/// ```json
/// {
///   "data": [...],
///   "meta": { "total": 42, "limit": 10, "page": 2, "hasMore": true }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total: i64,
    /// Maximum items per page (the limit that was applied)
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Whether there are more items after this page
    pub has_more: bool,
}

impl PaginationMeta {
    /// Builds the metadata for a page fetched with `params` out of `total` rows.
    pub fn new(total: i64, params: &PaginationParams) -> Self {
        let limit = params.limit();
        let offset = params.offset();
        Self {
            total,
            limit,
            offset: params.page().is_none().then_some(offset),
            page: params.page(),
            has_more: offset.saturating_add(limit) < total,
        }
    }
}

/// Query parameters for pagination.
///
/// When `page` is provided it takes precedence over `offset`. `limit` is
/// clamped to [1, 100], `offset` to a minimum of 0 and `page` to a minimum
/// of 1.
#[derive(Debug, Clone, Hash, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct PaginationParams {
    /// Maximum number of items to return (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0, ignored if `page` is set)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
    /// Page number (1-indexed)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: Some(10),
            offset: None,
            page: Some(1),
        }
    }
}

impl PaginationParams {
    /// Returns the effective limit, clamped to [1, 100]. Defaults to 10.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    /// Returns the effective offset, derived from `page` when present.
    #[must_use]
    pub fn offset(&self) -> i64 {
        if let Some(page) = self.page {
            (page.max(1) - 1).saturating_mul(self.limit())
        } else {
            self.offset.unwrap_or(0).max(0)
        }
    }

    /// Returns the page number if provided, clamped to a minimum of 1.
    #[must_use]
    pub fn page(&self) -> Option<i64> {
        self.page.map(|p| p.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_default() {
        let params = PaginationParams::default();
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.page(), Some(1));
    }

    #[test]
    fn test_limit_is_clamped() {
        let params = PaginationParams {
            limit: Some(500),
            offset: None,
            page: None,
        };
        assert_eq!(params.limit(), 100);

        let params = PaginationParams {
            limit: Some(0),
            offset: None,
            page: None,
        };
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_page_takes_precedence_over_offset() {
        let params = PaginationParams {
            limit: Some(10),
            offset: Some(5),
            page: Some(3),
        };
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_negative_values_are_clamped() {
        let params = PaginationParams {
            limit: None,
            offset: Some(-4),
            page: None,
        };
        assert_eq!(params.offset(), 0);

        let params = PaginationParams {
            limit: None,
            offset: None,
            page: Some(-2),
        };
        assert_eq!(params.offset(), 0);
        assert_eq!(params.page(), Some(1));
    }

    #[test]
    fn test_huge_page_saturates_instead_of_overflowing() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page":"9223372036854775807","limit":"10"}"#).unwrap();
        assert_eq!(params.offset(), i64::MAX);

        let meta = PaginationMeta::new(5, &params);
        assert!(!meta.has_more);
        assert_eq!(meta.page, Some(i64::MAX));

        let params = PaginationParams {
            limit: Some(100),
            offset: Some(i64::MAX),
            page: None,
        };
        assert!(!PaginationMeta::new(i64::MAX, &params).has_more);
    }

    #[test]
    fn test_empty_query_values_deserialize_to_none() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"limit":"","page":"2"}"#).unwrap();
        assert_eq!(params.limit, None);
        assert_eq!(params.page, Some(2));
    }

    #[test]
    fn test_meta_has_more() {
        let params = PaginationParams {
            limit: Some(10),
            offset: None,
            page: Some(2),
        };
        let meta = PaginationMeta::new(25, &params);
        assert!(meta.has_more);
        assert_eq!(meta.page, Some(2));
        assert_eq!(meta.offset, None);

        let meta = PaginationMeta::new(20, &params);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = PaginationMeta::new(3, &PaginationParams::default());
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["hasMore"], false);
        assert!(json.get("offset").is_none());
    }
}
