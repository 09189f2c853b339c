// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

/// Strips prefix of given string Cow. Returns option with `Some` if
/// prefix found and stripped.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(Cow::Borrowed),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Some(Cow::Owned(s));
            }
            None
        }
    }
}

/// Keeps only decimal digits of the input, converting any Unicode decimal
/// digit (full-width, Arabic-Indic, ...) into its ASCII form.
///
/// Returns `Cow::Borrowed` if the input already consists of ASCII digits only.
pub fn normalize_digits(text: &str) -> Cow<'_, str> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        dec_from_char::normalize_decimals(text)
            .chars()
            .filter(char::is_ascii_digit)
            .collect(),
    )
}

/// Cuts a digit string down to at most `max_len` digits, keeping the
/// leftmost ones. Input is expected to be ASCII.
pub fn truncate_cow<'a>(cow: Cow<'a, str>, max_len: usize) -> Cow<'a, str> {
    if cow.len() <= max_len {
        return cow;
    }
    match cow {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..max_len]),
        Cow::Owned(mut s) => {
            s.truncate(max_len);
            Cow::Owned(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{normalize_digits, strip_cow_prefix, truncate_cow};

    #[test]
    fn test_usage() {
        let str_to_strip = Cow::Owned("test0:test".to_owned());
        let stripped = strip_cow_prefix(str_to_strip, "test0");
        assert_eq!(stripped, Some(Cow::Owned(":test".to_owned())));

        let str_to_strip = Cow::Owned("test:test0".to_owned());
        let stripped = strip_cow_prefix(str_to_strip, "test0");
        assert_eq!(stripped, None)
    }

    #[test]
    fn normalize_keeps_borrowed_digits() {
        assert!(matches!(normalize_digits("5551234"), Cow::Borrowed("5551234")));
        assert_eq!(normalize_digits("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_digits("+44 ７９１１"), "447911");
        assert_eq!(normalize_digits("abc"), "");
    }

    #[test]
    fn truncate_keeps_leftmost() {
        assert_eq!(truncate_cow(Cow::Borrowed("123456"), 4), "1234");
        assert_eq!(truncate_cow(Cow::Owned("12".to_owned()), 4), "12");
    }
}
