//! Basic operations on strings: repeating, padding, and character
//! iteration.
//!
//! Sizes are signed, and anything at or below zero behaves as zero, so
//! none of these functions have an error path. “Length” here always
//! means the number of `char`s in a string, not the number of bytes.

use std::fmt::Display;
use std::str::Chars;


/// Repeats a character `size` times in a string. A size at or below
/// zero produces an empty string.
pub fn repeat(c: char, size: i64) -> String {
    if size <= 0 {
        return String::new();
    }

    (0 .. size).map(|_| c).collect()
}

/// Pads the right side of a value’s string form with `c` up to the
/// given size. Values already at or beyond the size are returned
/// unchanged, never truncated.
pub fn pad_right<T: Display>(value: T, c: char, size: i64) -> String {
    let text = value.to_string();
    let fill = repeat(c, size - text.chars().count() as i64);

    text + &fill
}

/// Pads the left side of a value’s string form with `c` up to the
/// given size. The counterpart of `pad_right`.
pub fn pad_left<T: Display>(value: T, c: char, size: i64) -> String {
    let text = value.to_string();
    let mut result = repeat(c, size - text.chars().count() as i64);

    result.push_str(&text);
    result
}

/// Returns an iterator over the characters of a string, each yielded
/// as its own one-character `String`. Calling this again on the same
/// input starts an independent iteration from the beginning.
pub fn chars_of(s: &str) -> CharStrings {
    CharStrings { iter: s.chars() }
}


/// An iterator over the characters of a string, as one-character
/// strings.
///
/// Use the `chars_of` function to create instances of this iterator.
#[derive(Clone, Debug)]
pub struct CharStrings<'a> {
    iter: Chars<'a>,
}

impl<'a> Iterator for CharStrings<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.iter.next().map(|c| c.to_string())
    }
}

impl<'a> DoubleEndedIterator for CharStrings<'a> {
    fn next_back(&mut self) -> Option<String> {
        self.iter.next_back().map(|c| c.to_string())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn repeat_some() {
        assert_eq!(repeat('-', 4), "----");
    }

    #[test]
    fn repeat_zero() {
        assert_eq!(repeat('x', 0), "");
    }

    #[test]
    fn repeat_negative() {
        assert_eq!(repeat('x', -3), "");
    }

    #[test]
    fn pad_right_shorter() {
        assert_eq!(pad_right(7, '0', 3), "700");
    }

    #[test]
    fn pad_right_exact() {
        assert_eq!(pad_right("abc", '.', 3), "abc");
    }

    #[test]
    fn pad_right_never_truncates() {
        assert_eq!(pad_right("abcd", '.', 3), "abcd");
    }

    #[test]
    fn pad_left_shorter() {
        assert_eq!(pad_left(7, '0', 3), "007");
    }

    #[test]
    fn pad_left_never_truncates() {
        assert_eq!(pad_left(12345, '0', 4), "12345");
    }

    #[test]
    fn pad_counts_chars_not_bytes() {
        assert_eq!(pad_left("é", '.', 3), "..é");
    }

    #[test]
    fn chars_of_empty() {
        assert_eq!(chars_of("").count(), 0);
    }

    #[test]
    fn chars_of_ab() {
        let collected: Vec<String> = chars_of("ab").collect();
        assert_eq!(collected, vec!["a", "b"]);
    }

    #[test]
    fn chars_of_multibyte() {
        let collected: Vec<String> = chars_of("héllo").collect();
        assert_eq!(collected, vec!["h", "é", "l", "l", "o"]);
    }

    #[test]
    fn chars_of_restarts() {
        let input = "abc";
        let first:  Vec<String> = chars_of(input).collect();
        let second: Vec<String> = chars_of(input).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn chars_of_backwards() {
        let collected: Vec<String> = chars_of("ab").rev().collect();
        assert_eq!(collected, vec!["b", "a"]);
    }
}
