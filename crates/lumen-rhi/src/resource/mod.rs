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

//! Resource contracts handed out by an [`RhiFactory`](crate::RhiFactory).
//!
//! Every object a factory creates implements [`DeviceObject`], plus the one
//! contract matching its [`ResourceKind`]. Objects are reference counted and
//! owned by whoever asked for them; factories keep no reference after
//! construction.

mod contracts;
mod object;

pub use self::contracts::*;
pub use self::object::RhiObject;

use crate::api::{DeviceIndex, ObjectId, PhysicalDevice, ResourceKind};
use crate::error::RhiResult;
use std::fmt::Debug;
use std::sync::Arc;

/// The base contract shared by every RHI object.
pub trait DeviceObject: Send + Sync + Debug + 'static {
    /// The id assigned to this object when it was created.
    fn id(&self) -> ObjectId;

    /// The resource kind this object implements.
    fn kind(&self) -> ResourceKind;

    /// The debug name of this object, if one was set.
    fn name(&self) -> Option<String>;

    /// Sets the debug name of this object.
    fn set_name(&self, name: &str);

    /// This object viewed through its base contract.
    fn as_device_object(&self) -> &dyn DeviceObject;
}

/// A logical device.
///
/// A device is created uninitialized and must be bound to a physical device
/// exactly once through [`Device::init`].
pub trait Device: DeviceObject {
    /// Binds this device to `physical_device` at `index`.
    ///
    /// ## Errors
    /// * `RhiError::DeviceAlreadyInitialized` - If the device was already bound.
    fn init(
        &self,
        index: DeviceIndex,
        physical_device: Arc<dyn PhysicalDevice>,
    ) -> RhiResult<()>;

    /// Returns `true` once [`Device::init`] has succeeded.
    fn is_initialized(&self) -> bool;

    /// The index this device was initialized with.
    fn device_index(&self) -> Option<DeviceIndex>;

    /// The physical device this device was initialized against.
    fn physical_device(&self) -> Option<Arc<dyn PhysicalDevice>>;
}
