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

//! The shared state handed to code that talks to the RHI.

use crate::error::RhiResult;
use crate::event::ResourceInvalidateBus;
use crate::factory::RhiFactory;
use crate::registry::FactoryRegistry;
use std::sync::Arc;

/// Bundles the factory registry and the invalidation bus.
///
/// Pass a context (or a reference to it) to the code under test instead of
/// reaching for globals. Two contexts never share state.
#[derive(Debug, Default)]
pub struct RhiContext {
    registry: FactoryRegistry,
    invalidate_bus: Arc<ResourceInvalidateBus>,
}

impl RhiContext {
    /// Creates a context with an empty registry and a fresh invalidation bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: FactoryRegistry::new(),
            invalidate_bus: Arc::new(ResourceInvalidateBus::new()),
        }
    }

    /// The registry holding the active factory.
    pub fn registry(&self) -> &FactoryRegistry {
        &self.registry
    }

    /// The resource invalidation bus.
    pub fn invalidate_bus(&self) -> &Arc<ResourceInvalidateBus> {
        &self.invalidate_bus
    }

    /// Shortcut for [`FactoryRegistry::get`].
    pub fn active_factory(&self) -> RhiResult<Arc<dyn RhiFactory>> {
        self.registry.get()
    }
}
