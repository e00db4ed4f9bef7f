//! Daily answer lookup
//!
//! Resolves which entity the daily draw selects for a given calendar date.

use crate::core::Entity;
use crate::game::{DailyPicker, TargetPicker};
use chrono::{Datelike, NaiveDate};

/// Resolve the daily target for a date
///
/// `date` is `YYYY-MM-DD`; `None` means today's local date.
///
/// # Errors
///
/// Returns an error if the date string is malformed or the pool is empty.
pub fn daily_answer<'a>(
    pool: &'a [Entity],
    date: Option<&str>,
) -> Result<(NaiveDate, &'a Entity), String> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{s}': {e}"))?,
        None => chrono::Local::now().date_naive(),
    };

    let picker = DailyPicker::for_date(date.year(), date.month(), date.day());
    let target = picker
        .pick(pool)
        .ok_or_else(|| "the catalog holds no candidates".to_string())?;

    Ok((date, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityData;

    fn pool() -> Vec<Entity> {
        (1..=25)
            .map(|id| {
                Entity::new(EntityData {
                    id,
                    title: format!("作品{id}"),
                    ..EntityData::default()
                })
            })
            .collect()
    }

    #[test]
    fn same_date_same_answer() {
        let pool = pool();
        let (_, a) = daily_answer(&pool, Some("2024-03-15")).unwrap();
        let (_, b) = daily_answer(&pool, Some("2024-03-15")).unwrap();
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn malformed_date_is_an_error() {
        let pool = pool();
        assert!(daily_answer(&pool, Some("15/03/2024")).is_err());
        assert!(daily_answer(&pool, Some("not-a-date")).is_err());
    }

    #[test]
    fn empty_pool_is_an_error() {
        let empty: Vec<Entity> = Vec::new();
        assert!(daily_answer(&empty, Some("2024-03-15")).is_err());
    }
}
