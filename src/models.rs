//! Short link data model shared by the mock and HTTP backends

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// A short link as returned by every link operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLinkRecord {
    pub id: u64,
    pub origin_url: String,
    pub short_url: String,
    /// Epoch seconds
    pub expire_at: i64,
    pub is_expired: bool,
}

impl ShortLinkRecord {
    /// Expiry evaluated against an arbitrary instant, independent of the stored flag.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_at <= now.timestamp()
    }

    pub fn expire_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expire_at, 0)
    }

    /// Compare on a single field. Strings compare case-insensitively.
    pub fn compare_by(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Id => self.id.cmp(&other.id),
            SortField::OriginUrl => cmp_ignore_case(&self.origin_url, &other.origin_url),
            SortField::ShortUrl => cmp_ignore_case(&self.short_url, &other.short_url),
            SortField::ExpireAt => self.expire_at.cmp(&other.expire_at),
            SortField::IsExpired => self.is_expired.cmp(&other.is_expired),
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Record fields usable as a sort key
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    Id,
    OriginUrl,
    ShortUrl,
    ExpireAt,
    IsExpired,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Pagination and sorting for the admin listing.
///
/// `page` is 1-based. Zero values for `page`/`page_size` count as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl QueryParams {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn sorted(mut self, sort: SortField, order: SortOrder) -> Self {
        self.sort = Some(sort);
        self.order = Some(order);
        self
    }

    pub fn effective_page(&self) -> u64 {
        self.page.filter(|&p| p > 0).unwrap_or(Self::DEFAULT_PAGE)
    }

    pub fn effective_page_size(&self) -> u64 {
        self.page_size
            .filter(|&s| s > 0)
            .unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }

    /// Sorting applies only when both field and order are given.
    pub fn sort_spec(&self) -> Option<(SortField, SortOrder)> {
        self.sort.zip(self.order)
    }

    /// Query-string pairs for the remote listing endpoint; unset fields are omitted.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_ref().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_ref().to_string()));
        }
        pairs
    }
}

/// One page of the admin listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPage {
    pub total: u64,
    pub list: Vec<ShortLinkRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateShortLinkRequest {
    pub origin_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<i64>,
}

impl CreateShortLinkRequest {
    pub fn new(origin_url: impl Into<String>) -> Self {
        Self {
            origin_url: origin_url.into(),
            ..Self::default()
        }
    }
}

/// Partial update; present fields overwrite the stored record. The id is never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortLinkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expired: Option<bool>,
}

impl ShortLinkPatch {
    pub fn is_empty(&self) -> bool {
        self.origin_url.is_none()
            && self.short_url.is_none()
            && self.expire_at.is_none()
            && self.is_expired.is_none()
    }

    pub fn apply_to(&self, record: &mut ShortLinkRecord) {
        if let Some(ref origin_url) = self.origin_url {
            record.origin_url = origin_url.clone();
        }
        if let Some(ref short_url) = self.short_url {
            record.short_url = short_url.clone();
        }
        if let Some(expire_at) = self.expire_at {
            record.expire_at = expire_at;
        }
        if let Some(is_expired) = self.is_expired {
            record.is_expired = is_expired;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedLink {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record(id: u64, origin: &str, expire_at: i64) -> ShortLinkRecord {
        ShortLinkRecord {
            id,
            origin_url: origin.to_string(),
            short_url: format!("https://www.s.example.com/{:06}", id),
            expire_at,
            is_expired: false,
        }
    }

    #[test]
    fn test_record_serializes_snake_case() {
        let json = serde_json::to_value(record(3, "https://a.test", 100)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["origin_url"], "https://a.test");
        assert_eq!(json["expire_at"], 100);
        assert_eq!(json["is_expired"], false);
    }

    #[test]
    fn test_compare_strings_ignore_case() {
        let a = record(1, "https://Apple.test", 0);
        let b = record(2, "https://apple.test", 0);
        let c = record(3, "https://banana.test", 0);
        assert_eq!(a.compare_by(&b, SortField::OriginUrl), Ordering::Equal);
        assert_eq!(a.compare_by(&c, SortField::OriginUrl), Ordering::Less);
        assert_eq!(c.compare_by(&a, SortField::Id), Ordering::Greater);
    }

    #[test]
    fn test_is_expired_at() {
        let now = Utc::now();
        let past = record(1, "https://a.test", now.timestamp() - 10);
        let future = record(2, "https://a.test", now.timestamp() + 10);
        assert!(past.is_expired_at(now));
        assert!(!future.is_expired_at(now));
    }

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!(SortField::from_str("origin_url").unwrap(), SortField::OriginUrl);
        assert_eq!(SortField::from_str("expire_at").unwrap(), SortField::ExpireAt);
        assert!(SortField::from_str("clicks").is_err());
        assert_eq!(SortOrder::from_str("DESC").unwrap(), SortOrder::Desc);
    }

    #[test]
    fn test_query_params_defaults() {
        let params = QueryParams::default();
        assert_eq!(params.effective_page(), 1);
        assert_eq!(params.effective_page_size(), 10);

        let zeros = QueryParams::new(0, 0);
        assert_eq!(zeros.effective_page(), 1);
        assert_eq!(zeros.effective_page_size(), 10);
    }

    #[test]
    fn test_sort_spec_requires_both() {
        let mut params = QueryParams::new(1, 5);
        params.sort = Some(SortField::Id);
        assert_eq!(params.sort_spec(), None);
        params.order = Some(SortOrder::Desc);
        assert_eq!(params.sort_spec(), Some((SortField::Id, SortOrder::Desc)));
    }

    #[test]
    fn test_query_pairs_omit_unset() {
        let params = QueryParams {
            page: Some(2),
            sort: Some(SortField::ShortUrl),
            ..QueryParams::default()
        };
        assert_eq!(
            params.to_query_pairs(),
            vec![("page", "2".to_string()), ("sort", "short_url".to_string())]
        );
        assert!(QueryParams::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_patch_overlays_present_fields_only() {
        let mut rec = record(7, "https://old.test", 100);
        let patch = ShortLinkPatch {
            origin_url: Some("https://new.test".into()),
            is_expired: Some(true),
            ..ShortLinkPatch::default()
        };
        patch.apply_to(&mut rec);
        assert_eq!(rec.id, 7);
        assert_eq!(rec.origin_url, "https://new.test");
        assert_eq!(rec.expire_at, 100);
        assert!(rec.is_expired);
        assert!(!patch.is_empty());
        assert!(ShortLinkPatch::default().is_empty());
    }

    #[test]
    fn test_patch_skips_none_when_serialized() {
        let patch = ShortLinkPatch {
            short_url: Some("https://s.test/x".into()),
            ..ShortLinkPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"short_url":"https://s.test/x"}"#);
    }
}
