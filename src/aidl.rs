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

//! Rust side of the `vendor.lineage.powershare.IPowerShare` interface.
//!
//! Marshalling and dispatch belong to the binder transport. This module only fixes the shape
//! a service object has to provide so the transport can call into it.

use std::fmt;
use thiserror::Error;

/// Interface descriptor, as registered with the service manager.
pub const DESCRIPTOR: &str = "vendor.lineage.powershare.IPowerShare";

/// Instance name the HAL is published under.
pub const DEFAULT_INSTANCE: &str = "vendor.lineage.powershare.IPowerShare/default";

/// Exception codes a transaction can fail with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionCode {
    IllegalArgument,
    IllegalState,
    UnsupportedOperation,
    ServiceSpecific(i32),
}

impl fmt::Display for ExceptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalArgument => f.write_str("ILLEGAL_ARGUMENT"),
            Self::IllegalState => f.write_str("ILLEGAL_STATE"),
            Self::UnsupportedOperation => f.write_str("UNSUPPORTED_OPERATION"),
            Self::ServiceSpecific(code) => write!(f, "SERVICE_SPECIFIC({code})"),
        }
    }
}

/// Transport-level failure of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{exception}: {message}")]
pub struct Status {
    exception: ExceptionCode,
    message: String,
}

impl Status {
    pub fn new_exception(exception: ExceptionCode, message: &str) -> Self {
        Self { exception, message: message.to_owned() }
    }

    pub fn exception_code(&self) -> ExceptionCode {
        self.exception
    }
}

/// Result of a transaction.
pub type Result<T> = std::result::Result<T, Status>;

/// Marker for objects that can be handed to the transport. The transport dispatches from its
/// own thread pool, so implementors must be shareable across threads.
pub trait Interface: Send + Sync {}

/// Reverse wireless charging control.
pub trait IPowerShare: Interface {
    /// Battery level below which sharing stops.
    fn get_min_battery(&self) -> Result<i32>;

    fn set_min_battery(&self, min_battery: i32) -> Result<()>;

    fn is_enabled(&self) -> Result<bool>;

    fn set_enabled(&self, enable: bool) -> Result<()>;
}
