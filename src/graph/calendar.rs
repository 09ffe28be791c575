use crate::model::{CommitCounts, WeekColumn, WeekMap, DAYS_PER_WEEK};

/// Groups day buckets into week columns. Only weeks whose seventh bucket
/// falls inside the window are kept; a trailing partial week is dropped.
pub fn fold(counts: &CommitCounts) -> WeekMap {
    let mut weeks = WeekMap::new();
    let mut column = WeekColumn::with_capacity(DAYS_PER_WEEK);

    for (day, count) in counts.iter() {
        let week = day / DAYS_PER_WEEK;
        let day_of_week = day % DAYS_PER_WEEK;

        if day_of_week == 0 {
            column = WeekColumn::with_capacity(DAYS_PER_WEEK);
        }

        column.push(count);

        if day_of_week == DAYS_PER_WEEK - 1 {
            weeks.insert(week, std::mem::take(&mut column));
        }
    }

    weeks
}
