use chrono::{DateTime, Duration, Utc};

use super::dashboard::DashboardData;

/// Session cache for fetched dashboard data.
///
/// An explicit value owned by whoever drives the fetches: initialised empty
/// at session start, filled after a successful load, and emptied either by
/// `invalidate()` (manual refresh) or by TTL expiry.
#[derive(Debug, Clone)]
pub struct QueryCache {
    ttl: Duration,
    entry: Option<CachedData>,
}

#[derive(Debug, Clone)]
struct CachedData {
    data: DashboardData,
    fetched_at: DateTime<Utc>,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Data fetched no longer than `ttl` before `now`, if any.
    pub fn get_fresh(&self, now: DateTime<Utc>) -> Option<&DashboardData> {
        self.entry
            .as_ref()
            .filter(|cached| Self::is_within_ttl(cached.fetched_at, now, self.ttl))
            .map(|cached| &cached.data)
    }

    /// Last stored data regardless of age.
    pub fn get(&self) -> Option<&DashboardData> {
        self.entry.as_ref().map(|cached| &cached.data)
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.get_fresh(now).is_some()
    }

    /// Replace the cached data wholesale.
    pub fn store(&mut self, data: DashboardData, fetched_at: DateTime<Utc>) {
        self.entry = Some(CachedData { data, fetched_at });
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|cached| cached.fetched_at)
    }

    /// Drop cached data so the next load fetches again.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    fn is_within_ttl(fetched_at: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
        // A clock that moved backwards counts as fresh data.
        now.signed_duration_since(fetched_at) <= ttl
    }
}
