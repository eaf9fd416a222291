use chrono::{DateTime, Utc};

use crate::models::ShortLinkRecord;
use crate::utils::generate_short_token;

pub const SHORT_URL_BASE: &str = "https://www.s.example.com/";

const SECONDS_PER_DAY: i64 = 86_400;
const SHORT_TOKEN_LEN: usize = 6;
/// Inclusive day ranges for the two expiry branches
const EXPIRED_DAYS: (i64, i64) = (1, 10);
const ACTIVE_DAYS: (i64, i64) = (1, 30);
const MAX_RANDOM_ID: u64 = 1000;
const ORIGIN_SUFFIX_BOUND: u64 = 100;

/// Fabricates short link records.
///
/// `expire_at` lands whole days before or after "now"; `is_expired` is
/// derived from that timestamp so the two never disagree at generation.
#[derive(Debug, Clone, Copy)]
pub struct MockLinkGenerator {
    expired_ratio: f64,
}

impl Default for MockLinkGenerator {
    fn default() -> Self {
        Self::new(0.7)
    }
}

impl MockLinkGenerator {
    pub fn new(expired_ratio: f64) -> Self {
        Self {
            expired_ratio: expired_ratio.clamp(0.0, 1.0),
        }
    }

    pub fn generate(&self, id: Option<u64>) -> ShortLinkRecord {
        self.generate_at(id, Utc::now())
    }

    /// Same as [`generate`](Self::generate) with an explicit clock.
    pub fn generate_at(&self, id: Option<u64>, now: DateTime<Utc>) -> ShortLinkRecord {
        let now_secs = now.timestamp();

        let expire_at = if rand::random::<f64>() < self.expired_ratio {
            now_secs - SECONDS_PER_DAY * random_days(EXPIRED_DAYS)
        } else {
            now_secs + SECONDS_PER_DAY * random_days(ACTIVE_DAYS)
        };

        // 未指定 id（或 id 为 0）时，origin 后缀与 id 各自独立随机
        let (id, origin_suffix) = match id.filter(|&id| id > 0) {
            Some(id) => (id, id),
            None => (
                rand::random_range(1..=MAX_RANDOM_ID),
                rand::random_range(0..ORIGIN_SUFFIX_BOUND),
            ),
        };

        ShortLinkRecord {
            id,
            origin_url: format!("https://www.example{}.com", origin_suffix),
            short_url: random_short_url(),
            expire_at,
            is_expired: expire_at <= now_secs,
        }
    }
}

pub(crate) fn random_short_url() -> String {
    format!("{}{}", SHORT_URL_BASE, generate_short_token(SHORT_TOKEN_LEN))
}

fn random_days((low, high): (i64, i64)) -> i64 {
    rand::random_range(low..=high)
}
