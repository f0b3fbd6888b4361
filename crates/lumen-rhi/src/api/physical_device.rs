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

//! Physical device descriptors, as reported by factory enumeration.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

/// The physical type of a graphics device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PhysicalDeviceType {
    /// A GPU integrated into the CPU.
    IntegratedGpu,
    /// A discrete, dedicated GPU.
    DiscreteGpu,
    /// A virtualized GPU.
    VirtualGpu,
    /// A software device running on the CPU.
    Cpu,
    /// An unknown device type.
    #[default]
    Unknown,
}

/// Standardized, backend-agnostic information about a physical device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhysicalDeviceDescriptor {
    /// The name of the device (e.g., "NVIDIA GeForce RTX 4090").
    pub name: String,
    /// The physical type of the device.
    pub device_type: PhysicalDeviceType,
    /// PCI vendor id, or 0 when not applicable.
    pub vendor_id: u32,
    /// PCI device id, or 0 when not applicable.
    pub device_id: u32,
    /// Driver version as reported by the backend.
    pub driver_version: u32,
    /// Size of the device-local heap in bytes.
    pub heap_memory_bytes: u64,
}

/// A graphics-capable device visible on the host, enumerated before a logical
/// [`Device`](crate::Device) is created against it.
pub trait PhysicalDevice: Send + Sync + Debug + 'static {
    /// Returns the descriptor of this physical device.
    fn descriptor(&self) -> &PhysicalDeviceDescriptor;
}

/// The result of enumerating physical devices.
pub type PhysicalDeviceList = Vec<Arc<dyn PhysicalDevice>>;
