// Copyright 2025 eraflo
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

//! The stub logical device.

use crate::resources::{impl_device_object, ObjectCore};
use lumen_rhi::{Device, DeviceIndex, ObjectId, PhysicalDevice, ResourceKind, RhiError, RhiResult};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug)]
struct DeviceBinding {
    index: DeviceIndex,
    physical_device: Arc<dyn PhysicalDevice>,
}

/// A logical device that records what it was initialized against and
/// nothing else.
#[derive(Debug)]
pub struct StubDevice {
    core: ObjectCore,
    binding: Mutex<Option<DeviceBinding>>,
}

impl StubDevice {
    /// Creates an uninitialized stub device with the given id.
    pub fn new(id: ObjectId) -> Self {
        Self {
            core: ObjectCore::new(id, ResourceKind::Device),
            binding: Mutex::new(None),
        }
    }
}

impl_device_object!(StubDevice);

impl Device for StubDevice {
    fn init(
        &self,
        index: DeviceIndex,
        physical_device: Arc<dyn PhysicalDevice>,
    ) -> RhiResult<()> {
        if !index.is_valid() {
            return Err(RhiError::InvalidDeviceIndex { index });
        }

        let mut binding = self.binding.lock();
        if let Some(existing) = binding.as_ref() {
            return Err(RhiError::DeviceAlreadyInitialized {
                index: existing.index,
            });
        }

        log::debug!(
            "Stub device {} initialized at index {index} on '{}'.",
            self.core.id(),
            physical_device.descriptor().name
        );
        *binding = Some(DeviceBinding {
            index,
            physical_device,
        });
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.binding.lock().is_some()
    }

    fn device_index(&self) -> Option<DeviceIndex> {
        self.binding.lock().as_ref().map(|binding| binding.index)
    }

    fn physical_device(&self) -> Option<Arc<dyn PhysicalDevice>> {
        self.binding
            .lock()
            .as_ref()
            .map(|binding| Arc::clone(&binding.physical_device))
    }
}
