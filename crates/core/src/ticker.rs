//! Ticker engine: timestamp aggregation and bounded paging over tracks.
//!
//! Every query runs a single linear scan over all `(id, time_recorded)`
//! pairs. There is deliberately no index or incremental state; the track
//! collection is expected to stay small. This is a known scaling limitation,
//! accepted rather than hidden.

use uuid::Uuid;

use crate::types::Timestamp;

/// A track's identity and insertion time. The only inputs the ticker needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackStamp {
    pub id: Uuid,
    pub time_recorded: Timestamp,
}

/// Aggregated timestamps for one ticker query.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Timestamps {
    /// Most recent `time_recorded` across the whole collection.
    pub latest: Option<Timestamp>,
    /// Earliest `time_recorded` across the whole collection.
    pub oldest: Option<Timestamp>,
    /// Smallest `time_recorded` strictly greater than the cursor.
    /// `None` when nothing lies beyond the cursor.
    pub oldest_newer: Option<Timestamp>,
}

/// One page of track ids, oldest first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickerPage {
    pub track_ids: Vec<Uuid>,
    /// `time_recorded` of the last entry in the page.
    pub t_stop: Option<Timestamp>,
}

/// Full result of a ticker query.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerWindow {
    pub timestamps: Timestamps,
    pub page: TickerPage,
}

/// Scan all tracks once, computing the running max (`latest`), running min
/// (`oldest`), and the running min among entries newer than `cursor`
/// (`oldest_newer`).
///
/// The oldest-newer search is seeded with `now` as a sentinel and reported
/// absent when no entry beats it; tracks are recorded in the past, so a
/// genuine hit always wins.
pub fn scan_timestamps(
    tracks: &[TrackStamp],
    cursor: Option<Timestamp>,
    now: Timestamp,
) -> Timestamps {
    let mut latest: Option<Timestamp> = None;
    let mut oldest: Option<Timestamp> = None;
    let mut oldest_newer = now;
    let mut newer_found = false;

    for stamp in tracks {
        let ts = stamp.time_recorded;
        if latest.map_or(true, |cur| ts > cur) {
            latest = Some(ts);
        }
        if oldest.map_or(true, |cur| ts < cur) {
            oldest = Some(ts);
        }
        let after_cursor = cursor.map_or(true, |c| ts > c);
        if after_cursor && ts < oldest_newer {
            oldest_newer = ts;
            newer_found = true;
        }
    }

    Timestamps {
        latest,
        oldest,
        oldest_newer: if newer_found { Some(oldest_newer) } else { None },
    }
}

/// Collect up to `page_size` track ids strictly newer than `cursor`,
/// ordered ascending by `time_recorded`.
pub fn page_after(
    tracks: &[TrackStamp],
    cursor: Option<Timestamp>,
    page_size: usize,
) -> TickerPage {
    let mut eligible: Vec<&TrackStamp> = tracks
        .iter()
        .filter(|s| cursor.map_or(true, |c| s.time_recorded > c))
        .collect();
    eligible.sort_by_key(|s| s.time_recorded);
    eligible.truncate(page_size);

    TickerPage {
        t_stop: eligible.last().map(|s| s.time_recorded),
        track_ids: eligible.iter().map(|s| s.id).collect(),
    }
}

/// Run both the timestamp scan and the paging pass for one ticker query.
pub fn compute(
    tracks: &[TrackStamp],
    cursor: Option<Timestamp>,
    page_size: usize,
    now: Timestamp,
) -> TickerWindow {
    TickerWindow {
        timestamps: scan_timestamps(tracks, cursor, now),
        page: page_after(tracks, cursor, page_size),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn stamp(offset_secs: i64) -> TrackStamp {
        TrackStamp {
            id: Uuid::new_v4(),
            time_recorded: base() + Duration::seconds(offset_secs),
        }
    }

    fn base() -> Timestamp {
        Utc.with_ymd_and_hms(2018, 11, 1, 12, 0, 0).unwrap()
    }

    fn now() -> Timestamp {
        base() + Duration::hours(1)
    }

    #[test]
    fn empty_collection_yields_no_timestamps_and_no_page() {
        let window = compute(&[], None, 5, now());
        assert_eq!(window.timestamps, Timestamps::default());
        assert!(window.page.track_ids.is_empty());
        assert!(window.page.t_stop.is_none());
    }

    #[test]
    fn latest_is_max_and_oldest_is_min() {
        // Insertion order deliberately shuffled.
        let tracks = vec![stamp(30), stamp(10), stamp(50), stamp(20)];
        let ts = scan_timestamps(&tracks, None, now());
        assert_eq!(ts.latest, Some(base() + Duration::seconds(50)));
        assert_eq!(ts.oldest, Some(base() + Duration::seconds(10)));
        // Without a cursor every entry qualifies, so oldest-newer == oldest.
        assert_eq!(ts.oldest_newer, ts.oldest);
    }

    #[test]
    fn oldest_newer_is_strictly_after_the_cursor() {
        let tracks = vec![stamp(10), stamp(20), stamp(30)];
        let cursor = base() + Duration::seconds(20);
        let ts = scan_timestamps(&tracks, Some(cursor), now());
        // Equal-to-cursor does not qualify; only 30s does.
        assert_eq!(ts.oldest_newer, Some(base() + Duration::seconds(30)));
    }

    #[test]
    fn cursor_at_or_after_latest_yields_absent_oldest_newer_and_empty_page() {
        let tracks = vec![stamp(10), stamp(20)];
        let cursor = base() + Duration::seconds(20);
        let window = compute(&tracks, Some(cursor), 5, now());
        assert_eq!(window.timestamps.oldest_newer, None);
        assert!(window.page.track_ids.is_empty());
        // `latest` is cursor-independent.
        assert_eq!(
            window.timestamps.latest,
            Some(base() + Duration::seconds(20))
        );
    }

    #[test]
    fn page_is_sorted_ascending_and_capped() {
        let tracks = vec![
            stamp(40),
            stamp(10),
            stamp(60),
            stamp(20),
            stamp(50),
            stamp(30),
        ];
        let page = page_after(&tracks, None, 5);
        assert_eq!(page.track_ids.len(), 5);

        let by_time: Vec<Uuid> = {
            let mut sorted = tracks.clone();
            sorted.sort_by_key(|s| s.time_recorded);
            sorted.iter().take(5).map(|s| s.id).collect()
        };
        assert_eq!(page.track_ids, by_time);
        // t_stop is the time of the last entry in the page (50s offset).
        assert_eq!(page.t_stop, Some(base() + Duration::seconds(50)));
    }

    #[test]
    fn page_with_cursor_only_contains_newer_entries() {
        let tracks = vec![stamp(10), stamp(20), stamp(30), stamp(40)];
        let cursor = base() + Duration::seconds(20);
        let page = page_after(&tracks, Some(cursor), 5);

        assert_eq!(page.track_ids.len(), 2);
        for id in &page.track_ids {
            let ts = tracks
                .iter()
                .find(|s| s.id == *id)
                .map(|s| s.time_recorded)
                .unwrap();
            assert!(ts > cursor);
        }
    }

    #[test]
    fn page_shorter_than_page_size_stops_at_the_last_track() {
        let tracks = vec![stamp(10), stamp(20)];
        let page = page_after(&tracks, None, 5);
        assert_eq!(page.track_ids.len(), 2);
        assert_eq!(page.t_stop, Some(base() + Duration::seconds(20)));
    }
}
