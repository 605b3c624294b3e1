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

//! Implementation of IPowerShare on top of the wireless TX control node.
//!
//! No call ever fails at the transport level. A missing node reads as disabled and ignores
//! writes, I/O errors are logged and mapped to the same defaults.

use crate::aidl::{self, IPowerShare, Interface};
use crate::node::{ControlNode, NodeError};
use crate::state::FeatureState;
use log::{debug, error, warn};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct PowerShare {
    node: ControlNode,
}

impl PowerShare {
    pub fn new() -> Self {
        Self::default()
    }

    /// For devices (and tests) where the driver exposes the node somewhere else.
    pub fn with_node_path(path: impl Into<PathBuf>) -> Self {
        Self { node: ControlNode::new(path) }
    }

    pub fn node(&self) -> &ControlNode {
        &self.node
    }

    fn state(&self) -> Result<FeatureState, NodeError> {
        self.node.exists()?;
        let content = self.node.read()?;
        Ok(FeatureState::from_content(&content))
    }

    fn apply(&self, state: FeatureState) -> Result<(), NodeError> {
        self.node.exists()?;
        self.node.write(state.token())?;
        debug!("PowerShare {state}");
        Ok(())
    }
}

impl Interface for PowerShare {}

impl IPowerShare for PowerShare {
    fn get_min_battery(&self) -> aidl::Result<i32> {
        Ok(0)
    }

    // The driver has no threshold knob.
    fn set_min_battery(&self, _min_battery: i32) -> aidl::Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> aidl::Result<bool> {
        match self.state() {
            Ok(state) => Ok(state.is_enabled()),
            Err(e @ NodeError::Absent { .. }) => {
                warn!("PowerShare node missing, assuming disabled: {e}");
                Ok(false)
            }
            Err(e) => {
                error!("Failed to read current PowerShare state: {:?}", anyhow::Error::new(e));
                Ok(false)
            }
        }
    }

    fn set_enabled(&self, enable: bool) -> aidl::Result<()> {
        match self.apply(enable.into()) {
            Ok(()) => {}
            Err(e @ NodeError::Absent { .. }) => {
                warn!("Attempted to set PowerShare on a device without support: {e}");
            }
            Err(e) => {
                error!("Failed to write PowerShare state: {:?}", anyhow::Error::new(e));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::{tempdir, NamedTempFile};

    fn node_with(content: &[u8]) -> Result<NamedTempFile> {
        let file = NamedTempFile::new()?;
        fs::write(file.path(), content)?;
        Ok(file)
    }

    #[test]
    fn is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PowerShare>();
        let _: Box<dyn IPowerShare> = Box::new(PowerShare::new());
    }

    #[test]
    fn absent_node() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("enable_tx");
        let service = PowerShare::with_node_path(&path);

        assert!(!service.is_enabled()?);
        service.set_enabled(true)?;
        service.set_enabled(false)?;
        assert!(!path.exists());
        assert!(!service.is_enabled()?);
        Ok(())
    }

    #[test]
    fn disabled_sentinel() -> Result<()> {
        let file = node_with(b"disable\n")?;
        let service = PowerShare::with_node_path(file.path());
        assert!(!service.is_enabled()?);
        Ok(())
    }

    #[test]
    fn any_other_content_is_enabled() -> Result<()> {
        let contents: [&[u8]; 6] = [b"1", b"0", b"enable\n", b"disable", b"", b"\x00garbage"];
        for content in contents {
            let file = node_with(content)?;
            let service = PowerShare::with_node_path(file.path());
            assert!(service.is_enabled()?, "{content:?}");
        }
        Ok(())
    }

    #[test]
    fn set_enabled_writes_tokens() -> Result<()> {
        let file = node_with(b"disable\n")?;
        let service = PowerShare::with_node_path(file.path());

        service.set_enabled(true)?;
        assert_eq!(fs::read(file.path())?, b"1");
        service.set_enabled(false)?;
        assert_eq!(fs::read(file.path())?, b"0");
        Ok(())
    }

    #[test]
    fn zero_reads_back_as_enabled() -> Result<()> {
        let file = node_with(b"1")?;
        let service = PowerShare::with_node_path(file.path());

        assert!(service.is_enabled()?);
        service.set_enabled(false)?;
        assert_eq!(fs::read(file.path())?, b"0");
        // The driver reports "disable\n", not the "0" we wrote.
        assert!(service.is_enabled()?);
        Ok(())
    }

    #[test]
    fn io_failures_are_swallowed() -> Result<()> {
        // A directory passes stat() but can be neither read nor written as a file.
        let dir = tempdir()?;
        let service = PowerShare::with_node_path(dir.path());

        assert!(!service.is_enabled()?);
        service.set_enabled(true)?;
        assert!(dir.path().is_dir());
        Ok(())
    }

    #[test]
    fn min_battery_is_not_stored() -> Result<()> {
        let file = node_with(b"disable\n")?;
        let service = PowerShare::with_node_path(file.path());

        assert_eq!(service.get_min_battery()?, 0);
        for value in [i32::MIN, -1, 0, 20, 100, i32::MAX] {
            service.set_min_battery(value)?;
            assert_eq!(service.get_min_battery()?, 0);
        }
        assert!(!service.is_enabled()?);
        assert_eq!(fs::read(file.path())?, b"disable\n");
        Ok(())
    }

    #[test]
    fn default_uses_wireless_tx_node() {
        assert_eq!(PowerShare::new().node(), &ControlNode::default());
    }
}
