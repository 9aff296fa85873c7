use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, Months, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn to_iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM-DD`; a trailing `T...` time part is ignored.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let day = s.trim().split('T').next().unwrap_or("");
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// `YYYY-MM` → (month, year). `None` input means the current month.
pub fn parse_month(s: Option<&str>) -> AppResult<(u32, i32)> {
    let Some(s) = s else {
        let t = today();
        return Ok((t.month(), t.year()));
    };
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("{s} (expected YYYY-MM)")))?;
    Ok((d.month(), d.year()))
}

/// `Jun 18, 2025` style, falling back to the raw value.
pub fn pretty_date(s: &str) -> String {
    parse_date(s)
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| s.to_string())
}

/// First and last day of the month containing `d`.
pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = d.with_day(1).unwrap_or(d);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);
    (first, last)
}
