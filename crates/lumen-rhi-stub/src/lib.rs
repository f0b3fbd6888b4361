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

//! # Lumen RHI Stub
//!
//! A backend-free implementation of the RHI for unit tests.
//!
//! [`StubFactory`] creates a stub object for every supported resource kind and
//! reports ray-tracing kinds as unsupported. Register it into an
//! [`RhiContext`](lumen_rhi::RhiContext) and drive the code under test through
//! the abstract RHI contracts; no GPU, driver or window is needed.
//!
//! ```rust
//! use lumen_rhi::{Device, RhiContext, RhiFactory};
//! use lumen_rhi_stub::StubFactory;
//!
//! let context = RhiContext::new();
//! let factory = StubFactory::new().register(&context).unwrap();
//!
//! let device = factory.create_default_device().unwrap();
//! assert!(device.is_initialized());
//! ```

#![warn(missing_docs)]

pub mod device;
pub mod factory;
pub mod logging;
pub mod physical_device;
pub mod resources;
pub mod settings;

pub use self::device::StubDevice;
pub use self::factory::{StubFactory, StubFactoryRegistration};
pub use self::logging::init_test_logging;
pub use self::physical_device::StubPhysicalDevice;
pub use self::settings::{StubFactorySettings, UnsupportedPolicy};
