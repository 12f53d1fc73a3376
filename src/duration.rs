//! Duration Model
//!
//! Two input shapes, one wire shape: `{"start": ..., "end": ...}`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A `YYYY-MM` month, kept exactly as the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct YearMonth {
    raw: String,
    date: NaiveDate,
}

impl YearMonth {
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidYearMonth(value.to_string());

        let bytes = value.as_bytes();
        let shaped = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !shaped {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
            .map_err(|_| invalid())?;

        Ok(Self { raw: value.to_string(), date })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// Time span of an event or entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DurationRepr", from = "DurationRepr")]
pub enum Duration {
    /// Free text on both ends, e.g. `("Jan. 2022", "Present")`.
    Text { start: String, end: String },
    /// Calendar months.
    Months { start: YearMonth, end: YearMonth },
}

impl Duration {
    pub fn text(start: impl Into<String>, end: impl Into<String>) -> Self {
        Duration::Text { start: start.into(), end: end.into() }
    }

    /// Open-ended text period; `end` is empty.
    pub fn since(start: impl Into<String>) -> Self {
        Duration::text(start, "")
    }

    pub fn months(start: &str, end: &str) -> Result<Self, ModelError> {
        Ok(Duration::Months {
            start: YearMonth::parse(start)?,
            end: YearMonth::parse(end)?,
        })
    }

    pub fn start(&self) -> &str {
        match self {
            Duration::Text { start, .. } => start,
            Duration::Months { start, .. } => start.as_str(),
        }
    }

    pub fn end(&self) -> &str {
        match self {
            Duration::Text { end, .. } => end,
            Duration::Months { end, .. } => end.as_str(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DurationRepr {
    start: String,
    #[serde(default)]
    end: String,
}

impl From<Duration> for DurationRepr {
    fn from(duration: Duration) -> Self {
        match duration {
            Duration::Text { start, end } => DurationRepr { start, end },
            Duration::Months { start, end } => DurationRepr { start: start.raw, end: end.raw },
        }
    }
}

impl From<DurationRepr> for Duration {
    fn from(repr: DurationRepr) -> Self {
        match (YearMonth::parse(&repr.start), YearMonth::parse(&repr.end)) {
            (Ok(start), Ok(end)) => Duration::Months { start, end },
            _ => Duration::Text { start: repr.start, end: repr.end },
        }
    }
}
