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

//! Defines the error type shared by every RHI backend.

use crate::api::{DeviceIndex, ResourceKind};
use std::fmt;

/// A convenience alias for results produced by the RHI.
pub type RhiResult<T> = Result<T, RhiError>;

/// An error raised by a factory, a registry or a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RhiError {
    /// The backend does not implement the requested resource kind.
    Unsupported {
        /// The kind that was requested.
        kind: ResourceKind,
    },
    /// A factory tried to register while another one was still active.
    FactoryAlreadyRegistered {
        /// The name of the factory currently registered.
        active: String,
        /// The name of the factory that was turned away.
        rejected: String,
    },
    /// A factory tried to unregister without being the active one.
    FactoryNotRegistered {
        /// The name of the factory that tried to unregister.
        name: String,
    },
    /// An operation needed an active factory and none was registered.
    NoActiveFactory,
    /// Physical device enumeration did not return the expected number of devices.
    UnexpectedPhysicalDeviceCount {
        /// The number of devices the caller required.
        expected: usize,
        /// The number of devices that were enumerated.
        found: usize,
    },
    /// A device was initialized a second time.
    DeviceAlreadyInitialized {
        /// The index the device is already bound to.
        index: DeviceIndex,
    },
    /// The device index is outside of the range supported by the backend.
    InvalidDeviceIndex {
        /// The rejected index.
        index: DeviceIndex,
    },
    /// Backend settings could not be parsed.
    Settings(String),
}

impl fmt::Display for RhiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhiError::Unsupported { kind } => write!(
                f,
                "Not implemented: {} is not supported by this backend",
                kind.name()
            ),
            RhiError::FactoryAlreadyRegistered { active, rejected } => write!(
                f,
                "Cannot register factory '{rejected}': factory '{active}' is already active"
            ),
            RhiError::FactoryNotRegistered { name } => {
                write!(f, "Factory '{name}' is not the active factory")
            }
            RhiError::NoActiveFactory => write!(f, "No RHI factory is registered."),
            RhiError::UnexpectedPhysicalDeviceCount { expected, found } => write!(
                f,
                "Expected {expected} physical device(s), enumerated {found}"
            ),
            RhiError::DeviceAlreadyInitialized { index } => {
                write!(f, "Device is already initialized at index {index}")
            }
            RhiError::InvalidDeviceIndex { index } => {
                write!(f, "Invalid device index: {index}")
            }
            RhiError::Settings(msg) => write!(f, "Invalid backend settings: {msg}"),
        }
    }
}

impl std::error::Error for RhiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_display_names_the_kind() {
        let err = RhiError::Unsupported {
            kind: ResourceKind::RayTracingTlas,
        };
        assert_eq!(
            format!("{err}"),
            "Not implemented: ray-tracing TLAS is not supported by this backend"
        );
    }

    #[test]
    fn registration_errors_display() {
        let err = RhiError::FactoryAlreadyRegistered {
            active: "UnitTest".to_string(),
            rejected: "Other".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Cannot register factory 'Other': factory 'UnitTest' is already active"
        );

        let err = RhiError::UnexpectedPhysicalDeviceCount {
            expected: 1,
            found: 3,
        };
        assert_eq!(
            format!("{err}"),
            "Expected 1 physical device(s), enumerated 3"
        );
    }

    #[test]
    fn device_errors_display() {
        let err = RhiError::DeviceAlreadyInitialized {
            index: DeviceIndex::DEFAULT,
        };
        assert_eq!(format!("{err}"), "Device is already initialized at index 0");
    }
}
