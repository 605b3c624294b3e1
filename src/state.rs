// Copyright 2025, The LineageOS Project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// What the driver reports when TX is off. Nothing else is recognized as off.
pub const DISABLED_SENTINEL: &[u8] = b"disable\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureState {
    Disabled,
    Enabled,
}

impl FeatureState {
    /// Interprets the node content. Only an exact match of [`DISABLED_SENTINEL`] is off, so
    /// unknown content (including the "0" written by `set_enabled(false)`) reads as on.
    pub fn from_content(content: &[u8]) -> Self {
        if content == DISABLED_SENTINEL {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }

    /// Token written to the node to request this state.
    pub fn token(self) -> &'static [u8] {
        match self {
            Self::Disabled => b"0",
            Self::Enabled => b"1",
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

impl From<bool> for FeatureState {
    fn from(enable: bool) -> Self {
        if enable {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl fmt::Display for FeatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::Enabled => f.write_str("enabled"),
        }
    }
}
