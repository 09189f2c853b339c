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

use thiserror::Error;

/// Raised by the display formatter. Purely cosmetic: the caller falls back
/// to the raw digits and the canonical value is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormattingFault {
    #[error("Formatting is not supported for country {0}")]
    UnsupportedCountry(String),
    #[error("Could not format digits: {0}")]
    Unparsable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExampleNumberError {
    #[error("Invalid or unknown country code provided: {0}")]
    UnknownCountry(String),
    #[error("No example number")]
    NoExampleNumber,
}

/// Every degradation the normalizer or controller recovered from.
///
/// None of these ever reaches a caller as an `Err`; they are recorded so the
/// recovery can be observed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneInputFault {
    #[error("{0}")]
    FormattingFault(#[from] FormattingFault),

    /// No example number for the country, the digit limit fell back to the ceiling.
    #[error("No digit limit for {country_code}, using {fallback} digits")]
    UnknownCountryLimit { country_code: String, fallback: usize },

    /// A dial code shared by several countries was settled by registry order.
    #[error("Dial code {dial_code} is ambiguous, resolved to {resolved_to}")]
    AmbiguousDialCode { dial_code: String, resolved_to: String },

    #[error("Number {0} is not valid")]
    InvalidNumber(String),
}
