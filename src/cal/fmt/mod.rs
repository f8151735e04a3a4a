//! Date-to-string formatting: the two canonical styles, and the
//! template engine behind them.

pub mod custom;

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;

use locale;

use self::custom::DateFormat;


/// The template behind the long date style: “Sunday, 26 July 2020”.
pub static LONG_DATE: &str = "%WEEKDAY%, %D% %MONTH% %Y%";

/// The template behind the short date style: “26-07-2020”.
pub static SHORT_DATE: &str = "%dd%-%mm%-%yyyy%";

lazy_static! {

    // The canonical formatters are parsed once, the first time a style
    // is rendered, and are read-only afterwards. The templates are
    // known-good literals, so the unwraps cannot fire.
    static ref LONG_FORMAT:  DateFormat<'static> = DateFormat::parse(LONG_DATE).unwrap();
    static ref SHORT_FORMAT: DateFormat<'static> = DateFormat::parse(SHORT_DATE).unwrap();

    /// Month and weekday names for the crate-default English locale.
    pub static ref ENGLISH: locale::Time = locale::Time::english();
}


/// A selector for one of the two canonical date representations.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Style {

    /// Zero-padded day, month, and year: “26-07-2020”.
    Short,

    /// Weekday and month written out in full: “Sunday, 26 July 2020”.
    Long,
}

impl Style {

    /// The template string this style renders with.
    pub fn template(self) -> &'static str {
        match self {
            Style::Short => SHORT_DATE,
            Style::Long  => LONG_DATE,
        }
    }

    /// The process-wide pre-parsed formatter for this style.
    pub fn formatter(self) -> &'static DateFormat<'static> {
        match self {
            Style::Short => &SHORT_FORMAT,
            Style::Long  => &LONG_FORMAT,
        }
    }
}

impl FromStr for Style {
    type Err = UnsupportedStyle;

    /// Matches style names case-insensitively, so both `"SHORT"` and
    /// `"short"` select `Style::Short`. Anything else is an error
    /// rather than a silent fallback.
    fn from_str(input: &str) -> Result<Style, UnsupportedStyle> {
        if input.eq_ignore_ascii_case("short") {
            Ok(Style::Short)
        }
        else if input.eq_ignore_ascii_case("long") {
            Ok(Style::Long)
        }
        else {
            Err(UnsupportedStyle { name: input.to_owned() })
        }
    }
}


/// The error that gets returned when a style name matches neither of
/// the canonical styles.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct UnsupportedStyle {

    /// The name that failed to match.
    pub name: String,
}

impl fmt::Display for UnsupportedStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unsupported date style {:?}", self.name)
    }
}

impl ErrorTrait for UnsupportedStyle {
}
