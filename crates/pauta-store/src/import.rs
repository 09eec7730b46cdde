//! Calendar-import derivation.
//!
//! Importing is a pure function from an externally supplied event list to
//! a batch of draft posts; fetching the events themselves is the job of
//! the event-source collaborator in the client layer.

use chrono::{Duration, NaiveTime};
use pauta_shared::{CalendarEvent, PostFormat, PostStatus};

use crate::models::Post;

/// Promotional posts are scheduled this many days before the event.
pub const LEAD_TIME_DAYS: i64 = 2;

/// Derive one draft post per event: dated two days before the event,
/// status draft, format static, with a templated caption referencing the
/// event.  Ids are derived from the event timestamp plus a per-batch
/// index so they never collide within the batch.
pub fn drafts_from_events(events: &[CalendarEvent], client: &str) -> Vec<Post> {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let event_ms = event
                .date
                .and_time(NaiveTime::MIN)
                .and_utc()
                .timestamp_millis();
            Post {
                id: format!("imported-{event_ms}-{i}"),
                title: format!("JOGO - {}", event.title),
                date: event.date - Duration::days(LEAD_TIME_DAYS),
                format: PostFormat::Static,
                status: PostStatus::Draft,
                client: client.to_string(),
                caption: format!(
                    "Prepare-se! Faltam {} dias para o confronto {} no dia {}. \
                     Vamos torcer juntos! ⚽🏟️ #Futebol #MatchDay",
                    LEAD_TIME_DAYS,
                    event.title,
                    event.date.format("%d/%m/%Y"),
                ),
                image_url: None,
                comments: Vec::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(title: &str, date: &str) -> CalendarEvent {
        CalendarEvent {
            title: title.to_string(),
            date: date.parse().unwrap(),
        }
    }

    #[test]
    fn drafts_are_dated_two_days_before_the_event() {
        let events = vec![event("Game A", "2025-06-12"), event("Game B", "2025-07-01")];
        let drafts = drafts_from_events(&events, "TechStart Solutions");

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].date, "2025-06-10".parse::<NaiveDate>().unwrap());
        assert_eq!(drafts[1].date, "2025-06-29".parse::<NaiveDate>().unwrap());
        for draft in &drafts {
            assert_eq!(draft.status, PostStatus::Draft);
            assert_eq!(draft.format, PostFormat::Static);
            assert_eq!(draft.client, "TechStart Solutions");
        }
    }

    #[test]
    fn captions_reference_the_event() {
        let drafts = drafts_from_events(&[event("Game A", "2025-06-12")], "c");
        assert!(drafts[0].caption.contains("Game A"));
        assert!(drafts[0].caption.contains("12/06/2025"));
        assert_eq!(drafts[0].title, "JOGO - Game A");
    }

    #[test]
    fn ids_are_unique_even_for_same_day_events() {
        let events = vec![event("Game A", "2025-06-12"), event("Game B", "2025-06-12")];
        let drafts = drafts_from_events(&events, "c");
        assert_ne!(drafts[0].id, drafts[1].id);
        assert!(drafts.iter().all(|d| d.id.starts_with("imported-")));
    }
}
