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

use crate::countries::Country;

use super::enums::CountryResolution;

/// Representative number handed out by an [`ExampleNumberApi`](crate::interfaces::ExampleNumberApi).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleNumber {
    pub country_calling_code: u16,
    pub national_number: String,
}

impl ExampleNumber {
    pub fn new(country_calling_code: u16, national_number: impl Into<String>) -> Self {
        Self { country_calling_code, national_number: national_number.into() }
    }
}

/// Result of splitting a canonical value into a country and national digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedNumber {
    pub country: Country,
    pub digits: String,
    pub resolution: CountryResolution,
}

/// Working state of one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEditState {
    pub selected_country: Country,
    /// National digits only, never the dial code.
    pub raw_digits: String,
    pub is_user_selected_country: bool,
    /// Set when the owner cleared the value. Holds until digits are typed or
    /// a country is picked again.
    pub cleared: bool,
}

impl PhoneEditState {
    pub fn empty(selected_country: Country) -> Self {
        Self {
            selected_country,
            raw_digits: String::new(),
            is_user_selected_country: false,
            cleared: false,
        }
    }

    /// Canonical value of this state: empty while there are no digits and
    /// either no country was picked or the value was cleared since,
    /// `+<dial><digits>` otherwise.
    pub fn canonical_value(&self) -> String {
        if self.raw_digits.is_empty() && (self.cleared || !self.is_user_selected_country) {
            return String::new();
        }
        super::e164_codec::compose(self.selected_country.dial_code, &self.raw_digits)
    }
}
