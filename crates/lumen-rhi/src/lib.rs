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

//! # Lumen RHI
//!
//! Backend-agnostic contracts for the rendering hardware interface.
//!
//! This crate defines the 'what' of talking to a graphics device: the
//! [`RhiFactory`] that creates every resource kind, the resource contracts it
//! hands out, and the small amount of shared state (the [`FactoryRegistry`]
//! and the [`ResourceInvalidateBus`]) that backends and renderer code agree
//! on. The 'how' lives in backend crates such as `lumen-rhi-stub`.
//!
//! Nothing in here is global. Code under test receives an [`RhiContext`] and
//! looks the active factory up through it.

#![warn(missing_docs)]

pub mod api;
pub mod context;
pub mod error;
pub mod event;
pub mod factory;
pub mod registry;
pub mod resource;

// Re-export the most important traits and types for easier use.
pub use self::api::*;
pub use self::context::RhiContext;
pub use self::error::{RhiError, RhiResult};
pub use self::event::{EventProducer, EventQueue, ResourceInvalidateBus, ResourceInvalidateEvent};
pub use self::factory::RhiFactory;
pub use self::registry::FactoryRegistry;
pub use self::resource::*;
