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

//! PowerShare (reverse wireless charging) HAL for oplus devices.

pub mod aidl;
pub mod node;
pub mod service;
pub mod state;

pub use crate::node::{ControlNode, NodeError, WIRELESS_TX_ENABLE_PATH};
pub use crate::service::PowerShare;
pub use crate::state::FeatureState;

/// Log tag used by the service.
pub const LOG_TAG: &str = "vendor.lineage.powershare-service.oplus";
