//! Concrete date values: years, months, weekdays, and calendar dates.

use std::cmp::Ordering;
use std::error::Error as ErrorTrait;
use std::fmt;

use cal::DatePiece;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// The number of days in this year: 366 for leap years, 365
    /// otherwise.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed between 2000 and
    ///    this year;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        // Standard leap-year calculations, performed on the remainder
        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}


/// A **calendar date** is a day-long span on the timeline, with no
/// time-of-day and no time zone attached.
///
/// The day-of-year and weekday are computed at construction, so every
/// value upholds the `DatePiece` contract that `yearday` and the
/// `(month, day)` pair denote the same calendar day.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct CalendarDate {
    year:    i64,
    month:   Month,
    day:     i8,
    yearday: i16,
    weekday: Weekday,
}

impl CalendarDate {

    /// Creates a new calendar date from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use caldate::{CalendarDate, DatePiece, Month};
    ///
    /// let date = CalendarDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(CalendarDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<CalendarDate, Error> {
        let (leap_days_elapsed, is_leap_year) = Year(year).leap_year_calculations();

        if day < 1 || day > month.days_in_month(is_leap_year) {
            return Err(Error::OutOfRange);
        }

        let mut yearday = month.days_before_start() + day as i16;
        if is_leap_year && month > February {
            yearday += 1;
        }

        // Days between the 1st January 1970 and this date. The 10958
        // is the number of days from 1970 to the reference year 2000,
        // which the leap-year cycle calculations are based around.
        let days = (year - 2000) * 365
                 + 10958
                 + leap_days_elapsed
                 + yearday as i64 - 1;

        Ok(CalendarDate {
            year,
            month,
            day,
            yearday,
            weekday: days_to_weekday(days),
        })
    }

    /// Creates a new calendar date from the given year and day-of-year
    /// values.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use caldate::{CalendarDate, DatePiece, Month};
    ///
    /// let date = CalendarDate::yd(2015, 256).unwrap();
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<CalendarDate, Error> {
        let leap = Year(year).is_leap_year();

        if yearday < 1 || yearday > Year(year).day_count() as i64 {
            return Err(Error::OutOfRange);
        }

        let mut remaining = yearday;
        for number in 1 .. 13 {
            let month = Month::from_one(number)?;
            let in_month = month.days_in_month(leap) as i64;

            if remaining <= in_month {
                return CalendarDate::ymd(year, month, remaining as i8);
            }

            remaining -= in_month;
        }

        // The bounds check above makes the scan always terminate early.
        Err(Error::OutOfRange)
    }
}

impl DatePiece for CalendarDate {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.year >= 0 && self.year <= 9999 {
            write!(f, "CalendarDate({:04}-{:02}-{:02})", self.year, self.month as i8, self.day)
        }
        else {
            write!(f, "CalendarDate({:+05}-{:02}-{:02})", self.year, self.month as i8, self.day)
        }
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &CalendarDate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &CalendarDate) -> Ordering {
        self.compare(other)
    }
}


/// Computes the weekday, given the number of days that have passed
/// since the 1st January 1970.
fn days_to_weekday(days: i64) -> Weekday {
    // The 1st January 1970 was a Thursday, so add 4 to the day count.
    let weekday = (days + 4) % 7;

    // We can unwrap since we’ve already done the bounds checking.
    Weekday::from_zero(if weekday < 0 { weekday + 7 } else { weekday } as i8).unwrap()
}

/// Split a number of years into a number of year-cycles, and the number
/// of years left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


/// The error that gets returned when a date field is out of range.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "date field out of range")
    }
}

impl ErrorTrait for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    pub(crate) fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the number of months that have elapsed in a year before
    /// this month, used to index month-name tables.
    pub fn months_from_january(self) -> usize {
        match self {
            January =>   0, February =>   1, March     =>  2,
            April   =>   3, May      =>   4, June      =>  5,
            July    =>   6, August   =>   7, September =>  8,
            October =>   9, November =>  10, December  => 11,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use caldate::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Month, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::OutOfRange),
        })
    }
}


/// A named day of the week.
///
/// Weekdays don’t get an `Ord` instance: there’s no standard for
/// whether the week starts on a Sunday or a Monday, and the field is
/// ignored when dates are compared anyway.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

impl Weekday {

    /// Returns the number of days this weekday is from Sunday, used to
    /// index weekday-name tables.
    pub fn days_from_sunday(self) -> usize {
        self as usize
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use caldate::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Weekday, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::OutOfRange),
        })
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn some_leap_years() {
        for year in &[2004, 2008, 2012, 2016] {
            assert!(CalendarDate::ymd(*year, February, 29).is_ok());
            assert!(CalendarDate::ymd(*year + 1, February, 29).is_err());
        }

        assert!(CalendarDate::ymd(1600, February, 29).is_ok());
        assert!(CalendarDate::ymd(1900, February, 29).is_err());
        assert!(CalendarDate::ymd(2000, February, 29).is_ok());
    }

    #[test]
    fn days_out_of_range() {
        assert!(CalendarDate::ymd(2021, April, 31).is_err());
        assert!(CalendarDate::ymd(2021, April, 0).is_err());
        assert!(CalendarDate::ymd(2021, January, 32).is_err());
    }

    #[test]
    fn yeardays_out_of_range() {
        assert!(CalendarDate::yd(2021, 0).is_err());
        assert!(CalendarDate::yd(2021, 366).is_err());
        assert!(CalendarDate::yd(2020, 366).is_ok());
    }

    #[test]
    fn month_numbers() {
        assert_eq!(Month::from_one(5), Ok(May));
        assert!(Month::from_one(0).is_err());
        assert!(Month::from_one(13).is_err());
    }

    #[test]
    fn weekday_numbers() {
        assert_eq!(Weekday::from_zero(0), Ok(Sunday));
        assert_eq!(Weekday::from_zero(4), Ok(Thursday));
        assert!(Weekday::from_zero(7).is_err());
    }

    mod debug {
        use super::*;

        #[test]
        fn recently() {
            let date = CalendarDate::ymd(1600, February, 28).unwrap();
            assert_eq!(format!("{:?}", date), "CalendarDate(1600-02-28)");
        }

        #[test]
        fn just_then() {
            let date = CalendarDate::ymd(-753, December, 1).unwrap();
            assert_eq!(format!("{:?}", date), "CalendarDate(-0753-12-01)");
        }

        #[test]
        fn far_far_future() {
            let date = CalendarDate::ymd(10601, January, 31).unwrap();
            assert_eq!(format!("{:?}", date), "CalendarDate(+10601-01-31)");
        }
    }
}
