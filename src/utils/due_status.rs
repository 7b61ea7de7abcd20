//! Due-status labels for the task table.
//!
//! Turns an ISO due date into the label shown in the "Due" column: overdue
//! dates render as `expired (Ny past due)`, upcoming ones as `30 Jun 2016`.

use chrono::NaiveDate;

/// Render the due-status label for a task's due date.
///
/// `None` renders the empty-cell placeholder. A date string the server sent
/// in an unexpected format is shown as-is rather than dropped.
pub fn due_status_label(due_on: Option<&str>, today: NaiveDate) -> String {
    let raw = match due_on {
        Some(raw) => raw,
        None => return "—".to_string(),
    };
    let date = match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return raw.to_string(),
    };

    if date < today {
        // Whole years past due, floored at one so a freshly expired task
        // still reads as expired.
        let years = (today.signed_duration_since(date).num_days() / 365).max(1);
        format!("expired ({}y past due)", years)
    } else {
        date.format("%-d %b %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_due_date() {
        assert_eq!(due_status_label(None, date(2019, 7, 1)), "—");
    }

    #[test]
    fn test_upcoming_date_formats() {
        assert_eq!(
            due_status_label(Some("2016-06-30"), date(2015, 1, 1)),
            "30 Jun 2016"
        );
        assert_eq!(
            due_status_label(Some("2016-06-05"), date(2015, 1, 1)),
            "5 Jun 2016"
        );
    }

    #[test]
    fn test_due_today_is_not_expired() {
        assert_eq!(
            due_status_label(Some("2019-07-01"), date(2019, 7, 1)),
            "1 Jul 2019"
        );
    }

    #[test]
    fn test_expired_years() {
        assert_eq!(
            due_status_label(Some("2016-06-30"), date(2019, 7, 1)),
            "expired (3y past due)"
        );
        assert_eq!(
            due_status_label(Some("2017-07-10"), date(2019, 7, 1)),
            "expired (1y past due)"
        );
    }

    #[test]
    fn test_expired_floors_at_one_year() {
        assert_eq!(
            due_status_label(Some("2019-06-01"), date(2019, 7, 1)),
            "expired (1y past due)"
        );
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        assert_eq!(
            due_status_label(Some("next sprint"), date(2019, 7, 1)),
            "next sprint"
        );
    }
}
