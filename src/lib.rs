#![crate_name = "caldate"]
#![crate_type = "rlib"]
#![crate_type = "dylib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for calendar date comparison and formatting.
//!
//! # Examples
//!
//! ```rust
//! use caldate::{CalendarDate, DatePiece, Month, Style};
//!
//! let date = CalendarDate::ymd(2020, Month::July, 26).unwrap();
//! assert_eq!(date.date_string(Style::Short), "26-07-2020");
//! assert_eq!(date.date_string(Style::Long),  "Sunday, 26 July 2020");
//! ```
//!
//! Dates compare chronologically, whatever their concrete type:
//!
//! ```rust
//! use caldate::{CalendarDate, DatePiece, Month};
//!
//! let haircut = CalendarDate::ymd(2019, Month::December, 31).unwrap();
//! let regrets = CalendarDate::ymd(2020, Month::January, 1).unwrap();
//! assert!(haircut.is_before(&regrets));
//! ```

extern crate locale;
extern crate pad;

#[macro_use]
extern crate lazy_static;

pub mod cal;
pub mod strings;

pub use cal::DatePiece;
pub use cal::date::{CalendarDate, Error, Month, Weekday, Year};
pub use cal::fmt::{Style, UnsupportedStyle, LONG_DATE, SHORT_DATE};
pub use cal::fmt::custom::{DateFormat, Field, FormatError};
