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

//! Backend-agnostic value types used across the RHI contracts.

mod identity;
mod kind;
mod physical_device;

pub use self::identity::{ApiPriority, ApiType, DeviceIndex, ObjectId};
pub use self::kind::ResourceKind;
pub use self::physical_device::{
    PhysicalDevice, PhysicalDeviceDescriptor, PhysicalDeviceList, PhysicalDeviceType,
};
