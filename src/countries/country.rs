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

use crate::phoneinput::helper_constants::PLUS_SIGN;

/// A single registry row: two-letter country code, display name and the
/// dial code digits (without leading `+`).
///
/// Dial codes are not unique: Canada and the United States both dial `1`,
/// Kazakhstan and Russia both dial `7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
}

impl Country {
    pub const fn new(code: &'static str, name: &'static str, dial_code: &'static str) -> Self {
        Self { code, name, dial_code }
    }

    /// Placeholder selection for an empty registry.
    pub const fn unknown() -> Self {
        Self::new("ZZ", "Unknown", "")
    }

    /// Dial code as shown in a country picker, e.g. `+44`.
    pub fn display_dial_code(&self) -> String {
        fast_cat::concat_str!(PLUS_SIGN, self.dial_code)
    }

    /// Flag emoji built from regional indicator symbols. Returns an empty
    /// string for codes that are not two ASCII letters.
    pub fn flag(&self) -> String {
        if !is_valid_country_code(self.code) {
            return String::new();
        }
        self.code
            .chars()
            .filter_map(|c| {
                let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
                char::from_u32(REGIONAL_INDICATOR_A + offset)
            })
            .collect()
    }
}

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

pub(crate) fn is_valid_country_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}

pub(crate) fn is_valid_dial_code(dial_code: &str) -> bool {
    !dial_code.is_empty() && dial_code.chars().all(|c| c.is_ascii_digit())
}
