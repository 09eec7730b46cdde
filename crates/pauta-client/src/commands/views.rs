//! Read-only view commands: the calendar month grid and the kanban
//! board, projected from the store for the UI.

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use pauta_store::board::board_columns;
use pauta_store::calendar::{month_grid, WEEKDAY_LABELS};

use crate::commands::posts::PostDto;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCellDto {
    pub day: u32,
    pub date: String,
    pub is_today: bool,
    pub posts: Vec<PostDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDto {
    /// Header label, e.g. `Junho 2025`.
    pub label: String,
    /// Sunday-first weekday header labels.
    pub weekdays: [&'static str; 7],
    /// Blank cells before day 1.
    pub leading_blanks: usize,
    pub cells: Vec<DayCellDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumnDto {
    pub status: String,
    pub label: String,
    pub count: usize,
    pub posts: Vec<PostDto>,
}

/// The grid for the currently displayed month.
pub fn calendar(state: &Arc<Mutex<AppState>>) -> Result<CalendarDto, String> {
    calendar_at(state, Utc::now().date_naive())
}

/// Advance the displayed month (wrapping December into the next year)
/// and return the new grid.
pub fn next_month(state: &Arc<Mutex<AppState>>) -> Result<CalendarDto, String> {
    {
        let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
        guard.month_cursor = guard.month_cursor.next();
    }
    calendar(state)
}

/// Step the displayed month back (wrapping January into the previous
/// year) and return the new grid.
pub fn prev_month(state: &Arc<Mutex<AppState>>) -> Result<CalendarDto, String> {
    {
        let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
        guard.month_cursor = guard.month_cursor.prev();
    }
    calendar(state)
}

fn calendar_at(state: &Arc<Mutex<AppState>>, today: NaiveDate) -> Result<CalendarDto, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    let cursor = guard.month_cursor;
    let grid = month_grid(cursor, guard.store.list_posts(), today);

    Ok(CalendarDto {
        label: cursor.label(),
        weekdays: WEEKDAY_LABELS,
        leading_blanks: grid.leading_blanks,
        cells: grid
            .cells
            .into_iter()
            .map(|cell| DayCellDto {
                day: cell.day,
                date: cell.date.format("%Y-%m-%d").to_string(),
                is_today: cell.is_today,
                posts: cell.posts.into_iter().map(PostDto::from).collect(),
            })
            .collect(),
    })
}

/// The six workflow columns in fixed order.
pub fn board(state: &Arc<Mutex<AppState>>) -> Result<Vec<BoardColumnDto>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(board_columns(guard.store.list_posts())
        .into_iter()
        .map(|column| BoardColumnDto {
            status: column.status.as_str().to_string(),
            label: column.status.label().to_string(),
            count: column.count(),
            posts: column.posts.into_iter().map(PostDto::from).collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::posts::set_post_status;
    use pauta_store::calendar::MonthCursor;

    fn shared_state() -> Arc<Mutex<AppState>> {
        Arc::new(Mutex::new(AppState::new()))
    }

    #[test]
    fn board_reflects_a_status_change() {
        let state = shared_state();

        let find = |columns: &[BoardColumnDto], status: &str| -> usize {
            columns.iter().find(|c| c.status == status).unwrap().count
        };

        let before = board(&state).unwrap();
        assert_eq!(find(&before, "approval"), 1);
        assert_eq!(find(&before, "approved"), 0);

        set_post_status(&state, "1", "approved").unwrap();

        let after = board(&state).unwrap();
        assert_eq!(find(&after, "approval"), 0);
        assert_eq!(find(&after, "approved"), 1);
    }

    #[test]
    fn board_columns_carry_display_labels() {
        let state = shared_state();
        let columns = board(&state).unwrap();
        assert_eq!(columns.len(), 6);
        assert_eq!(columns[0].status, "draft");
        assert_eq!(columns[0].label, "Rascunho");
    }

    #[test]
    fn month_navigation_wraps_the_year() {
        let state = shared_state();
        state.lock().unwrap().month_cursor = MonthCursor::new(2025, 12).unwrap();

        assert_eq!(next_month(&state).unwrap().label, "Janeiro 2026");
        assert_eq!(prev_month(&state).unwrap().label, "Dezembro 2025");
    }

    #[test]
    fn calendar_buckets_seed_posts_into_the_current_month() {
        let state = shared_state();
        let today = "2025-06-10".parse().unwrap();
        state.lock().unwrap().month_cursor = MonthCursor::from_date(today);
        state.lock().unwrap().store = pauta_store::ContentStore::seeded(today);

        let dto = calendar_at(&state, today).unwrap();
        assert_eq!(dto.cells.len(), 30);
        let cell = dto.cells.iter().find(|c| c.date == "2025-06-10").unwrap();
        assert!(cell.is_today);
        assert_eq!(cell.posts.len(), 1);
        assert_eq!(cell.posts[0].id, "1");
    }
}
