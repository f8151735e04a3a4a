//! The date-to-string template engine.
//!
//! A template is an ordinary string in which `%`-delimited tokens stand
//! in for date fields: `"%dd%-%mm%-%yyyy%"` renders the 26th of July
//! 2020 as `"26-07-2020"`. Token names are runs of ASCII alphanumerics.
//! A name that isn’t in the token table is left in the output verbatim,
//! delimiters included, so templates written against a larger token
//! table still render; a `%` that never gets closed is a parse error.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::io;
use std::io::Write;
use std::str::CharIndices;

use cal::DatePiece;

use locale;
use pad::{PadStr, Alignment};


/// A position in a template string, measured in bytes.
pub type Pos = usize;


// locale 0.2’s `Time::long_day_name` reads from its short-name table
// (an upstream indexing slip), so it can only ever produce “Sun”, not
// “Sunday”. Full weekday names come from this table instead, indexed
// by `Weekday::days_from_sunday`.
static LONG_DAY_NAMES: &[&str; 7] = &[
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];


/// One piece of a parsed template: either a literal run of characters,
/// or a date field to be substituted.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {

    /// A run of ordinary characters, emitted as-is.
    Literal(&'a str),

    /// `%Y%`: the year, unpadded.
    Year,

    /// `%yyyy%`: the year, zero-padded to four digits.
    PaddedYear,

    /// `%D%`: the day of the month, unpadded.
    Day,

    /// `%dd%`: the day of the month, zero-padded to two digits.
    PaddedDay,

    /// `%mm%`: the month ordinal (January is 1), zero-padded to two
    /// digits.
    PaddedMonth,

    /// `%MONTH%`: the month name written out in full.
    MonthName,

    /// `%WEEKDAY%`: the weekday name written out in full.
    WeekdayName,
}

impl<'a> Field<'a> {
    fn format<T>(&self, when: &T, w: &mut Vec<u8>, locale: &locale::Time) -> io::Result<()>
    where T: DatePiece {
        match *self {
            Field::Literal(s)   => w.write_all(s.as_bytes()),
            Field::Year         => write_unpadded(w, when.year()),
            Field::PaddedYear   => write_padded(w, when.year(), 4),
            Field::Day          => write_unpadded(w, when.day()),
            Field::PaddedDay    => write_padded(w, when.day(), 2),
            Field::PaddedMonth  => write_padded(w, when.month() as i8, 2),
            Field::MonthName    => w.write_all(locale.long_month_name(when.month().months_from_january()).as_bytes()),
            Field::WeekdayName  => w.write_all(LONG_DAY_NAMES[when.weekday().days_from_sunday()].as_bytes()),
        }
    }
}

fn write_unpadded<N: fmt::Display>(w: &mut Vec<u8>, number: N) -> io::Result<()> {
    w.write_all(number.to_string().as_bytes())
}

fn write_padded<N: fmt::Display>(w: &mut Vec<u8>, number: N, width: usize) -> io::Result<()> {
    let padded = number.to_string().pad(width, '0', Alignment::Right, false);
    w.write_all(padded.as_bytes())
}


/// A reusable formatter, bound to one parsed template.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateFormat<'a> {
    pub fields: Vec<Field<'a>>,
}

impl<'a> DateFormat<'a> {

    /// Parses a template string into a formatter, which can then be
    /// applied to any number of dates. The literal parts of the
    /// template are kept as slices of the input, so the formatter
    /// borrows from it.
    pub fn parse(input: &'a str) -> Result<DateFormat<'a>, FormatError> {
        let mut parser = TemplateParser::new(input);
        parser.parse_template()?;

        Ok(DateFormat { fields: parser.fields })
    }

    /// Renders the given date through this template. Month and weekday
    /// names come from the given locale.
    pub fn format<T>(&self, when: &T, locale: &locale::Time) -> String where T: DatePiece {
        let mut buf = Vec::<u8>::new();

        for field in &self.fields {
            // Writing into an in-memory Vec<u8> cannot fail.
            let _ = field.format(when, &mut buf, locale);
        }

        String::from_utf8(buf).unwrap()  // the fields only ever write UTF-8
    }
}


/// The errors that can turn up while parsing a template string.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FormatError {

    /// A `%` opened a token that never got its closing `%`.
    UnterminatedToken { open_pos: Pos },

    /// A character that cannot be part of a token name appeared between
    /// two token delimiters.
    InvalidChar { c: char, pos: Pos },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FormatError::UnterminatedToken { open_pos } => {
                write!(f, "unterminated token opened at position {}", open_pos)
            },
            FormatError::InvalidChar { c, pos } => {
                write!(f, "invalid character {:?} in token at position {}", c, pos)
            },
        }
    }
}

impl ErrorTrait for FormatError {
}


struct TemplateParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
}

impl<'a> TemplateParser<'a> {
    fn new(input: &'a str) -> TemplateParser<'a> {
        TemplateParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
        }
    }

    // The literal fields are slices of the original template string,
    // which shares a lifetime with the formatter object, requiring
    // fewer allocations. An anchor marks where the current run of
    // ordinary characters started; the run gets collected into one
    // Literal field when a token (or the end of input) is reached.

    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor {
            self.anchor = None;
            let text = match position {
                Some(new_pos) => &self.input[pos .. new_pos],
                None          => &self.input[pos ..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    fn parse_template(&mut self) -> Result<(), FormatError> {
        loop {
            match self.iter.next() {
                Some((pos, '%')) => {
                    self.collect_up_to_anchor(Some(pos));

                    let field = self.parse_token(pos)?;
                    self.fields.push(field);
                },
                Some((pos, _)) => {
                    if self.anchor.is_none() {
                        self.anchor = Some(pos);
                    }
                },
                None => break,
            }
        }

        // Finally, collect any literal characters after the last token
        // that haven’t been turned into a Literal field yet.
        self.collect_up_to_anchor(None);
        Ok(())
    }

    fn parse_token(&mut self, open_pos: Pos) -> Result<Field<'a>, FormatError> {
        loop {
            match self.iter.next() {
                Some((pos, '%')) => {
                    let name = &self.input[open_pos + 1 .. pos];

                    return Ok(match name {
                        "Y"       => Field::Year,
                        "yyyy"    => Field::PaddedYear,
                        "D"       => Field::Day,
                        "dd"      => Field::PaddedDay,
                        "mm"      => Field::PaddedMonth,
                        "MONTH"   => Field::MonthName,
                        "WEEKDAY" => Field::WeekdayName,

                        // Unknown tokens pass through verbatim,
                        // delimiters included.
                        _ => Field::Literal(&self.input[open_pos ..= pos]),
                    });
                },
                Some((pos, c)) => {
                    if !c.is_ascii_alphanumeric() {
                        return Err(FormatError::InvalidChar { c, pos });
                    }
                },
                None => return Err(FormatError::UnterminatedToken { open_pos }),
            }
        }
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::{DateFormat, FormatError};
    pub(crate) use super::Field::*;

    mod parse {
        use super::*;

        macro_rules! test {
            ($name: ident: $input: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(DateFormat::parse($input), $result)
                }
            };
        }

        test!(empty_string: ""            => Ok(DateFormat { fields: vec![] }));
        test!(entirely_literal: "Date!"   => Ok(DateFormat { fields: vec![ Literal("Date!") ] }));
        test!(single_token: "%Y%"         => Ok(DateFormat { fields: vec![ Year ] }));
        test!(two_years: "%Y%%Y%"         => Ok(DateFormat { fields: vec![ Year, Year ] }));
        test!(surrounded: "(%D%)"         => Ok(DateFormat { fields: vec![ Literal("("), Day, Literal(")") ] }));
        test!(a_bunch_of_tokens: "%yyyy%-%mm%-%dd%" => Ok(DateFormat { fields: vec![ PaddedYear, Literal("-"), PaddedMonth, Literal("-"), PaddedDay ] }));
        test!(the_long_template: "%WEEKDAY%, %D% %MONTH% %Y%" => Ok(DateFormat { fields: vec![ WeekdayName, Literal(", "), Day, Literal(" "), MonthName, Literal(" "), Year ] }));

        test!(unknown_token: "%FOO%"      => Ok(DateFormat { fields: vec![ Literal("%FOO%") ] }));
        test!(empty_token: "%%"           => Ok(DateFormat { fields: vec![ Literal("%%") ] }));
        test!(case_matters: "%WeekDay%"   => Ok(DateFormat { fields: vec![ Literal("%WeekDay%") ] }));

        test!(unterminated: "%dd"         => Err(FormatError::UnterminatedToken { open_pos: 0 }));
        test!(unterminated_at_end: "abc%" => Err(FormatError::UnterminatedToken { open_pos: 3 }));
        test!(stray_percent: "50% off"    => Err(FormatError::InvalidChar { c: ' ', pos: 3 }));
        test!(dash_in_token: "%dd-mm%"    => Err(FormatError::InvalidChar { c: '-', pos: 3 }));
    }

    mod format {
        use super::*;
        use cal::date::{CalendarDate, Month};
        use locale;

        fn sample() -> CalendarDate {
            CalendarDate::ymd(2020, Month::July, 26).unwrap()
        }

        fn render(template: &str) -> String {
            DateFormat::parse(template).unwrap()
                       .format(&sample(), &locale::Time::english())
        }

        #[test]
        fn short_fields() {
            assert_eq!(render("%dd%-%mm%-%yyyy%"), "26-07-2020");
        }

        #[test]
        fn long_fields() {
            assert_eq!(render("%WEEKDAY%, %D% %MONTH% %Y%"), "Sunday, 26 July 2020");
        }

        #[test]
        fn unknown_token_passes_through() {
            assert_eq!(render("%FOO%"), "%FOO%");
        }

        #[test]
        fn literals_survive_around_tokens() {
            assert_eq!(render("day %D% of %MONTH%!"), "day 26 of July!");
        }

        #[test]
        fn weekday_names_come_out_in_full() {
            // One date per day of the week: the 4th to the 10th of
            // March 2021 run Thursday through Wednesday.
            for &(day, name) in &[
                ( 4, "Thursday"), ( 5, "Friday"), ( 6, "Saturday"),
                ( 7, "Sunday"),   ( 8, "Monday"), ( 9, "Tuesday"),
                (10, "Wednesday"),
            ] {
                let date = CalendarDate::ymd(2021, Month::March, day).unwrap();
                let rendered = DateFormat::parse("%WEEKDAY%").unwrap()
                                          .format(&date, &locale::Time::english());

                assert_eq!(rendered, name);
            }
        }

        #[test]
        fn zero_padding_never_truncates() {
            let date = CalendarDate::ymd(10601, Month::January, 31).unwrap();
            let rendered = DateFormat::parse("%yyyy%").unwrap()
                                      .format(&date, &locale::Time::english());

            assert_eq!(rendered, "10601");
        }
    }
}
