//! Release date: the first date phrase in the `year` field.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::FieldExtractor;
use crate::document::{partial, PartialDocument};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

const MONTHS: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|\
                      aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

// Alternatives are ordered most specific first; the leftmost match wins.
static DATE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:(?P<y1>\d{{4}}),?\s+(?P<m1>{m})\.?(?:\s+(?P<d1>\d{{1,2}}))?|(?P<m2>{m})\.?\s+(?:(?P<d2>\d{{1,2}}),?\s+)?(?P<y2>\d{{4}})|(?P<y3>\d{{4}}))\b",
        m = MONTHS
    ))
    .unwrap()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseDateExtractor;

impl FieldExtractor for ReleaseDateExtractor {
    fn name(&self) -> &'static str {
        "release"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let text = table.first_text(FieldCode::Year)?;
        let date = search_date(text)?;
        Some(partial("release", date.format("%Y-%m-%d").to_string()))
    }
}

/// First recognizable date in free text; a missing day or month defaults to 1
pub fn search_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_PHRASE.captures(text)?;

    let (year, month, day) = if let Some(year) = caps.name("y1") {
        (year.as_str(), group(&caps, "m1"), group(&caps, "d1"))
    } else if let Some(year) = caps.name("y2") {
        (year.as_str(), group(&caps, "m2"), group(&caps, "d2"))
    } else {
        (caps.name("y3")?.as_str(), None, None)
    };

    let year: i32 = year.parse().ok()?;
    let month = match month {
        Some(name) => month_number(name)?,
        None => 1,
    };
    let day = match day {
        Some(d) => d.parse().ok()?,
        None => 1,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Value;
    use crate::extract::test_support::schema;

    fn release(text: &str) -> Option<PartialDocument> {
        let table = RawTable::new().with_text(FieldCode::Year, text);
        ReleaseDateExtractor.extract(&table, &schema())
    }

    #[test]
    fn test_year_month_day() {
        let out = release("Released 2021, March 15").unwrap();
        assert_eq!(out.get("release"), Some(&Value::from("2021-03-15")));
    }

    #[test]
    fn test_year_month_defaults_day() {
        assert_eq!(search_date("2020, October"), NaiveDate::from_ymd_opt(2020, 10, 1));
    }

    #[test]
    fn test_month_day_year() {
        assert_eq!(search_date("Sept 9, 2019"), NaiveDate::from_ymd_opt(2019, 9, 9));
    }

    #[test]
    fn test_first_date_wins() {
        assert_eq!(
            search_date("Exp. release 2022, Q1 (announced 2021, December 1)"),
            NaiveDate::from_ymd_opt(2022, 1, 1)
        );
    }

    #[test]
    fn test_impossible_date_is_none() {
        assert_eq!(search_date("2021, February 30"), None);
    }

    #[test]
    fn test_absent_or_unparsable() {
        assert!(ReleaseDateExtractor.extract(&RawTable::new(), &schema()).is_none());
        assert!(release("Cancelled").is_none());
    }
}
