//! Stand-in calendar event source.
//!
//! Real ICS/HTML parsing is out of scope; this source fabricates two
//! fixture events per month of the configured year, regardless of the
//! link contents.  Swap it for a real integration by implementing
//! [`EventSource`] over an actual fetch/parse.

use async_trait::async_trait;
use chrono::NaiveDate;
use pauta_shared::{CalendarEvent, ServiceError};
use rand::Rng;

use crate::collaborators::EventSource;

const MATCHUPS: [&str; 4] = [
    "Flamengo vs Vasco",
    "Corinthians vs Palmeiras",
    "São Paulo vs Santos",
    "Grêmio vs Inter",
];

/// Fabricates a season of match fixtures: two per month, one in each
/// half of the month.
pub struct FixtureEventSource {
    year: i32,
}

impl FixtureEventSource {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Default for FixtureEventSource {
    fn default() -> Self {
        Self::new(2025)
    }
}

#[async_trait]
impl EventSource for FixtureEventSource {
    async fn fetch_events(&self, link: &str) -> Result<Vec<CalendarEvent>, ServiceError> {
        tracing::debug!(link = %link, year = self.year, "Fabricating fixture events");

        let mut rng = rand::thread_rng();
        let mut events = Vec::with_capacity(24);
        for month in 1..=12 {
            // Day 28 is valid in every month.
            let days = [rng.gen_range(1..=15), rng.gen_range(16..=28)];
            for day in days {
                let Some(date) = NaiveDate::from_ymd_opt(self.year, month, day) else {
                    continue;
                };
                let matchup = MATCHUPS[rng.gen_range(0..MATCHUPS.len())];
                events.push(CalendarEvent {
                    title: matchup.to_string(),
                    date,
                });
            }
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[tokio::test]
    async fn fabricates_two_events_per_month() {
        let source = FixtureEventSource::new(2025);
        let events = source.fetch_events("https://example.test/cal.ics").await.unwrap();

        assert_eq!(events.len(), 24);
        for month in 1..=12 {
            let in_month = events.iter().filter(|e| e.date.month() == month).count();
            assert_eq!(in_month, 2, "month {month}");
        }
        assert!(events.iter().all(|e| e.date.year() == 2025));
        assert!(events.iter().all(|e| MATCHUPS.contains(&e.title.as_str())));
    }
}
