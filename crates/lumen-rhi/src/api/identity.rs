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

//! Identity values: API tags, factory priorities, device indices and object ids.

use std::fmt;
use uuid::Uuid;

/// Namespace under which API names are hashed into [`ApiType`] tags.
const API_TYPE_NAMESPACE: Uuid = Uuid::from_u128(0x6c75_6d65_6e2d_7268_692d_6170_6974_7970);

/// An opaque tag identifying a graphics API implementation.
///
/// The tag is derived from the API's name, so two factories reporting the same
/// name always report the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiType(Uuid);

impl ApiType {
    /// Derives the tag for the given API name.
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&API_TYPE_NAMESPACE, name.as_bytes()))
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The priority a factory claims when several of them compete for registration.
///
/// Higher values win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiPriority(pub u32);

impl ApiPriority {
    /// Lowest priority, for fallback backends.
    pub const LOW: Self = Self(1);
    /// Middle priority.
    pub const MIDDLE: Self = Self(2);
    /// Highest priority, for the preferred backend of a platform.
    pub const HIGH: Self = Self(3);
}

impl Default for ApiPriority {
    fn default() -> Self {
        Self::MIDDLE
    }
}

/// The index of a logical device among the devices driven by one factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DeviceIndex(pub usize);

impl DeviceIndex {
    /// The index used when only one device is in play.
    pub const DEFAULT: Self = Self(0);

    /// The number of device slots a factory can drive at once.
    pub const MAX_COUNT: usize = 8;

    /// Returns `true` if the index addresses one of the [`DeviceIndex::MAX_COUNT`] slots.
    pub const fn is_valid(&self) -> bool {
        self.0 < Self::MAX_COUNT
    }
}

impl fmt::Display for DeviceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique handle identifying one RHI object created by a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
