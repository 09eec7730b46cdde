//! Calendar projector: a Sunday-first month grid over the post list.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::models::Post;

/// Weekday header labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

const MONTH_LABELS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// A displayed month.  Always anchored on the first day of the month, so
/// navigation is pure date arithmetic and wraps year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor(NaiveDate);

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Cursor for the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    /// The following month.  Saturates at the calendar bounds.
    pub fn next(self) -> Self {
        self.0
            .checked_add_months(Months::new(1))
            .map(Self)
            .unwrap_or(self)
    }

    /// The preceding month.  Saturates at the calendar bounds.
    pub fn prev(self) -> Self {
        self.0
            .checked_sub_months(Months::new(1))
            .map(Self)
            .unwrap_or(self)
    }

    pub fn days_in_month(self) -> u32 {
        self.next()
            .first_day()
            .pred_opt()
            .map(|d| d.day())
            .unwrap_or(31)
    }

    /// Header label, e.g. `Janeiro 2025`.
    pub fn label(self) -> String {
        format!(
            "{} {}",
            MONTH_LABELS[self.0.month0() as usize],
            self.0.year()
        )
    }
}

/// One day cell of the month grid.
#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    pub date: NaiveDate,
    /// Whether this cell is the current day and gets highlighted styling.
    pub is_today: bool,
    /// All posts scheduled on this day, in store insertion order.
    pub posts: Vec<Post>,
}

/// The full grid for one month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    /// Blank cells before day 1, equal to the Sunday-based weekday index
    /// of the first day of the month.
    pub leading_blanks: usize,
    /// One cell per day of the month.
    pub cells: Vec<DayCell>,
}

/// Project the post list onto a month grid.  Posts dated outside the
/// displayed month never appear.
pub fn month_grid(cursor: MonthCursor, posts: &[Post], today: NaiveDate) -> MonthGrid {
    let first = cursor.first_day();
    let leading_blanks = first.weekday().num_days_from_sunday() as usize;

    let cells = (1..=cursor.days_in_month())
        .filter_map(|day| first.with_day(day))
        .map(|date| DayCell {
            day: date.day(),
            date,
            is_today: date == today,
            posts: posts.iter().filter(|p| p.date == date).cloned().collect(),
        })
        .collect();

    MonthGrid {
        leading_blanks,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pauta_shared::{PostFormat, PostStatus};

    fn cursor(year: i32, month: u32) -> MonthCursor {
        MonthCursor::new(year, month).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn post_on(id: &str, d: &str) -> Post {
        Post {
            id: id.to_string(),
            title: id.to_string(),
            date: date(d),
            format: PostFormat::Static,
            status: PostStatus::Draft,
            client: "TechStart Solutions".to_string(),
            caption: String::new(),
            image_url: None,
            comments: Vec::new(),
        }
    }

    #[test]
    fn cell_count_matches_month_length() {
        let today = date("2025-01-01");
        assert_eq!(month_grid(cursor(2025, 2), &[], today).cells.len(), 28);
        assert_eq!(month_grid(cursor(2024, 2), &[], today).cells.len(), 29);
        assert_eq!(month_grid(cursor(2025, 6), &[], today).cells.len(), 30);
        assert_eq!(month_grid(cursor(2025, 7), &[], today).cells.len(), 31);
    }

    #[test]
    fn leading_blanks_match_weekday_of_day_one() {
        let today = date("2025-01-01");
        // 2025-06-01 is a Sunday.
        assert_eq!(month_grid(cursor(2025, 6), &[], today).leading_blanks, 0);
        // 2025-02-01 is a Saturday.
        assert_eq!(month_grid(cursor(2025, 2), &[], today).leading_blanks, 6);
        // 2025-07-01 is a Tuesday.
        assert_eq!(month_grid(cursor(2025, 7), &[], today).leading_blanks, 2);
    }

    #[test]
    fn post_appears_exactly_in_its_date_cell() {
        let posts = vec![post_on("june", "2025-06-10"), post_on("july", "2025-07-01")];
        let grid = month_grid(cursor(2025, 6), &posts, date("2025-01-01"));

        for cell in &grid.cells {
            let ids: Vec<&str> = cell.posts.iter().map(|p| p.id.as_str()).collect();
            if cell.day == 10 {
                assert_eq!(ids, ["june"]);
            } else {
                assert!(ids.is_empty(), "day {} should be empty", cell.day);
            }
        }
    }

    #[test]
    fn multiple_posts_on_one_day_all_render() {
        let posts = vec![
            post_on("a", "2025-06-10"),
            post_on("b", "2025-06-10"),
            post_on("c", "2025-06-10"),
        ];
        let grid = month_grid(cursor(2025, 6), &posts, date("2025-01-01"));
        assert_eq!(grid.cells[9].posts.len(), 3);
    }

    #[test]
    fn today_is_highlighted_only_in_its_own_month() {
        let today = date("2025-06-15");
        let grid = month_grid(cursor(2025, 6), &[], today);
        let highlighted: Vec<u32> = grid
            .cells
            .iter()
            .filter(|c| c.is_today)
            .map(|c| c.day)
            .collect();
        assert_eq!(highlighted, [15]);

        let other = month_grid(cursor(2025, 7), &[], today);
        assert!(other.cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn navigation_wraps_year_boundaries() {
        assert_eq!(cursor(2025, 12).next(), cursor(2026, 1));
        assert_eq!(cursor(2025, 1).prev(), cursor(2024, 12));
        assert_eq!(cursor(2025, 6).next().prev(), cursor(2025, 6));
    }

    #[test]
    fn label_is_month_name_and_year() {
        assert_eq!(cursor(2025, 1).label(), "Janeiro 2025");
        assert_eq!(cursor(2024, 12).label(), "Dezembro 2024");
    }

    #[test]
    fn cursor_rejects_invalid_month() {
        assert!(MonthCursor::new(2025, 0).is_none());
        assert!(MonthCursor::new(2025, 13).is_none());
    }
}
