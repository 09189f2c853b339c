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

use strum::IntoStaticStr;

/// Describes how decomposition picked a country for the matched dial code.
#[derive(Debug, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryResolution {
    /// **Single candidate.**
    /// Only one country owns the longest matched dial code.
    Unique,
    /// **Preferred country.**
    /// Several countries share the dial code and the caller's preferred
    /// country was among them.
    PreferredHint,
    /// **Registry order.**
    /// Several countries share the dial code and no usable preference was
    /// given, so the first one listed in the registry was taken.
    RegistryOrder,
}

/// The stimuli a [`PhoneInput`](super::PhoneInput) reacts to.
#[derive(Debug, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stimulus {
    Mount,
    Keystroke,
    CountrySelected,
    ExternalValueChanged,
    DefaultCountryChanged,
}
