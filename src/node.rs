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

//! Access to the kernel node that gates wireless TX.

use nix::fcntl::OFlag;
use nix::sys::stat::stat;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Node exported by the oplus wireless charging driver.
pub const WIRELESS_TX_ENABLE_PATH: &str = "/proc/wireless/enable_tx";

/// Errors that can occur while touching the control node
#[derive(Debug, Error)]
pub enum NodeError {
    /// stat() failed, the driver doesn't expose the node on this device
    #[error("{} is missing", .path.display())]
    Absent {
        path: PathBuf,
        #[source]
        source: nix::errno::Errno,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A pseudo-file owned by the kernel. Nothing is cached; every call goes to the filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlNode {
    path: PathBuf,
}

impl Default for ControlNode {
    fn default() -> Self {
        Self::new(WIRELESS_TX_ENABLE_PATH)
    }
}

impl ControlNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks that the node can be stat'ed.
    pub fn exists(&self) -> Result<(), NodeError> {
        stat(self.path.as_path())
            .map(drop)
            .map_err(|source| NodeError::Absent { path: self.path.clone(), source })
    }

    /// Reads the whole content, as raw bytes.
    pub fn read(&self) -> Result<Vec<u8>, NodeError> {
        fs::read(&self.path).map_err(|source| NodeError::Read { path: self.path.clone(), source })
    }

    /// Replaces the content with `value`. The node is opened with O_SYNC so the data has reached
    /// the driver when this returns. The node is never created.
    pub fn write(&self, value: &[u8]) -> Result<(), NodeError> {
        let map_err = |source| NodeError::Write { path: self.path.clone(), source };
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .custom_flags(OFlag::O_SYNC.bits())
            .open(&self.path)
            .map_err(map_err)?;
        file.write_all(value).map_err(map_err)
    }
}
