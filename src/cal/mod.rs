//! Calendar dates: the capability trait for date-like values, the
//! concrete `CalendarDate` type, and date-to-string formatting.

pub mod date;
pub mod fmt;

use std::cmp::Ordering;

use locale;

use self::date::{Month, Weekday};
use self::fmt::Style;
use self::fmt::custom::DateFormat;


/// The **date piece** trait is for values that have date components of
/// years, months, and days.
///
/// Implementers must keep `yearday` and the `(month, day)` pair
/// denoting the same calendar day; the comparison and formatting
/// methods below read whichever is more convenient and assume they
/// agree.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// Compares this date chronologically with another one: first by
    /// year, with ties broken by day-of-year. Comparing the components
    /// directly sidesteps the overflow that a subtract-then-cast
    /// strategy would risk on narrow integer widths.
    fn compare<D: DatePiece>(&self, other: &D) -> Ordering {
        self.year().cmp(&other.year())
            .then_with(|| self.yearday().cmp(&other.yearday()))
    }

    /// Whether this date falls strictly before another one.
    fn is_before<D: DatePiece>(&self, other: &D) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Whether this date falls strictly after another one.
    fn is_after<D: DatePiece>(&self, other: &D) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Renders this date in one of the two canonical styles, with
    /// English month and weekday names.
    ///
    /// ```rust
    /// use caldate::{CalendarDate, DatePiece, Month, Style};
    ///
    /// let date = CalendarDate::ymd(2020, Month::July, 26).unwrap();
    /// assert_eq!(date.date_string(Style::Short), "26-07-2020");
    /// ```
    fn date_string(&self, style: Style) -> String where Self: Sized {
        style.formatter().format(self, &fmt::ENGLISH)
    }

    /// Renders this date through an arbitrary pre-parsed formatter,
    /// taking month and weekday names from the given locale.
    fn format_with(&self, format: &DateFormat, locale: &locale::Time) -> String where Self: Sized {
        format.format(self, locale)
    }
}
