use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Which request field a date value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl Display for DateField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar date in the rate table, canonically `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateDate(Date);

impl RateDate {
    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    /// Parse exactly `YYYY-MM-DD`, rejecting calendar-invalid components.
    ///
    /// The shape is checked structurally first, so oversized fields such as a
    /// five-digit year fail the same way as an out-of-range month or day.
    pub fn parse(input: &str, field: DateField) -> Result<Self, ValidationError> {
        if !has_calendar_shape(input) {
            return Err(ValidationError::InvalidDate {
                field,
                value: input.to_owned(),
            });
        }

        let date = Date::parse(input, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
            field,
            value: input.to_owned(),
        })?;

        Ok(Self(date))
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_ymd(self) -> String {
        self.0
            .format(DATE_FORMAT)
            .expect("RateDate must be formattable as YYYY-MM-DD")
    }
}

fn has_calendar_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

impl Display for RateDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_ymd())
    }
}

impl Serialize for RateDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_ymd())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_date() {
        let parsed = RateDate::parse("2013-01-28", DateField::Start).expect("must parse");
        assert_eq!(parsed.format_ymd(), "2013-01-28");
    }

    #[test]
    fn rejects_wrong_shape() {
        for value in ["20130-01-28", "2013-101-28", "2013-1-28", "2013/01/28", ""] {
            let err = RateDate::parse(value, DateField::Start).expect_err("must fail");
            assert!(matches!(
                err,
                ValidationError::InvalidDate {
                    field: DateField::Start,
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_calendar_overflow() {
        let err = RateDate::parse("2013-02-30", DateField::End).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::InvalidDate {
                field: DateField::End,
                ..
            }
        ));
        let err = RateDate::parse("2013-13-01", DateField::End).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn orders_chronologically() {
        let earlier = RateDate::parse("2013-01-28", DateField::Start).expect("must parse");
        let later = RateDate::parse("2013-01-31", DateField::End).expect("must parse");
        assert!(earlier < later);
    }

    #[test]
    fn serializes_to_canonical_form() {
        let date = RateDate::parse("2002-01-02", DateField::Start).expect("must parse");
        let json = serde_json::to_string(&date).expect("must serialize");
        assert_eq!(json, "\"2002-01-02\"");
    }
}
