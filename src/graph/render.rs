use super::aggregate::missing_days_offset;
use super::band::{format_cell, tier_for, Tier};
use crate::model::{WeekMap, DAYS_PER_WEEK, MAX_DAYS, MAX_WEEKS};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveTime};

const MONTH_ROW_INDENT: &str = "             ";
const BLANK_MONTH: &str = "    ";
const BLANK_DAY: &str = "     ";

/// Renders the full graph: month row, then one line per weekday from
/// day index 6 down to 0, oldest week on the left.
pub fn render(weeks: &WeekMap, now: &DateTime<FixedOffset>, color: bool) -> String {
    let mut out = month_row(now);
    out.push('\n');

    let today_day = missing_days_offset(now) - 1;

    for day in (0..DAYS_PER_WEEK).rev() {
        out.push_str(day_label(day));
        for week in (0..=MAX_WEEKS + 1).rev() {
            let value = weeks
                .get(&week)
                .and_then(|column| column.get(day))
                .copied()
                .unwrap_or(0);
            let tier = if week == 0 && day == today_day {
                Tier::Today
            } else {
                tier_for(value)
            };
            out.push_str(&tier.paint(&format_cell(value), color));
        }
        out.push('\n');
    }

    out
}

/// Month abbreviations aligned to the week columns. A name is printed on
/// the first step that enters a new month.
pub fn month_row(now: &DateTime<FixedOffset>) -> String {
    let midnight = *now - now.time().signed_duration_since(NaiveTime::MIN);
    let mut step = midnight - Duration::days(MAX_DAYS as i64);
    let mut month = step.month();

    let mut out = String::from(MONTH_ROW_INDENT);
    loop {
        if step.month() != month {
            out.push_str(&format!("{} ", step.format("%b")));
            month = step.month();
        } else {
            out.push_str(BLANK_MONTH);
        }
        step += Duration::days(7);
        if step > *now {
            break;
        }
    }
    out
}

pub fn day_label(day: usize) -> &'static str {
    match day {
        1 => " Mon ",
        3 => " Wed ",
        5 => " Fri ",
        _ => BLANK_DAY,
    }
}
