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

//! The fake physical devices reported by the stub factory.

use crate::settings::StubFactorySettings;
use lumen_rhi::{PhysicalDevice, PhysicalDeviceDescriptor, PhysicalDeviceList};
use std::sync::Arc;

/// A physical device that exists only on paper.
#[derive(Debug, Clone)]
pub struct StubPhysicalDevice {
    descriptor: PhysicalDeviceDescriptor,
}

impl StubPhysicalDevice {
    /// Creates a stub physical device with the given descriptor.
    pub fn new(descriptor: PhysicalDeviceDescriptor) -> Self {
        Self { descriptor }
    }

    /// Builds the device list described by `settings`.
    ///
    /// With the default settings this is exactly one device.
    pub fn enumerate(settings: &StubFactorySettings) -> PhysicalDeviceList {
        (0..settings.physical_device_count)
            .map(|index| {
                let name = if settings.physical_device_count == 1 {
                    settings.physical_device_name.clone()
                } else {
                    format!("{} {index}", settings.physical_device_name)
                };
                let device = StubPhysicalDevice::new(PhysicalDeviceDescriptor {
                    name,
                    device_type: settings.physical_device_type,
                    device_id: device_id(index),
                    ..Default::default()
                });
                Arc::new(device) as Arc<dyn PhysicalDevice>
            })
            .collect()
    }
}

/// Device ids saturate at `u32::MAX` instead of wrapping.
fn device_id(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

impl PhysicalDevice for StubPhysicalDevice {
    fn descriptor(&self) -> &PhysicalDeviceDescriptor {
        &self.descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_rhi::PhysicalDeviceType;

    #[test]
    fn default_settings_enumerate_one_device() {
        let devices = StubPhysicalDevice::enumerate(&StubFactorySettings::default());
        assert_eq!(devices.len(), 1);

        let descriptor = devices[0].descriptor();
        assert_eq!(descriptor.name, "UnitTest Physical Device");
        assert_eq!(descriptor.device_type, PhysicalDeviceType::Cpu);
        assert_eq!(descriptor.heap_memory_bytes, 0);
    }

    #[test]
    fn several_devices_get_numbered_names() {
        let settings = StubFactorySettings {
            physical_device_count: 3,
            ..Default::default()
        };
        let devices = StubPhysicalDevice::enumerate(&settings);

        assert_eq!(devices.len(), 3);
        assert_eq!(devices[2].descriptor().name, "UnitTest Physical Device 2");
        assert_eq!(devices[2].descriptor().device_id, 2);
    }

    #[test]
    fn device_ids_saturate_instead_of_wrapping() {
        assert_eq!(device_id(3), 3);
        assert_eq!(device_id(u32::MAX as usize), u32::MAX);
        assert_eq!(device_id(usize::MAX), u32::MAX);
    }

    #[test]
    fn zero_devices_is_allowed() {
        let settings = StubFactorySettings {
            physical_device_count: 0,
            ..Default::default()
        };
        assert!(StubPhysicalDevice::enumerate(&settings).is_empty());
    }
}
