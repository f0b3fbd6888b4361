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

//! Holds the factory that is currently active.
//!
//! The registry is an ordinary value owned by an [`RhiContext`](crate::RhiContext),
//! not a process global: tests that need isolation create their own context.

use crate::error::{RhiError, RhiResult};
use crate::factory::RhiFactory;
use parking_lot::RwLock;
use std::sync::Arc;

/// Tracks the single active [`RhiFactory`].
///
/// Registration is exclusive: while one factory is registered, any other
/// registration attempt is rejected.
#[derive(Debug, Default)]
pub struct FactoryRegistry {
    active: RwLock<Option<Arc<dyn RhiFactory>>>,
}

impl FactoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: RwLock::new(None),
        }
    }

    /// Makes `factory` the active factory.
    ///
    /// ## Errors
    /// * `RhiError::FactoryAlreadyRegistered` - If another factory (or this one)
    ///   is already active.
    pub fn register(&self, factory: Arc<dyn RhiFactory>) -> RhiResult<()> {
        let mut active = self.active.write();
        if let Some(current) = active.as_ref() {
            log::error!(
                "Factory '{}' tried to register while '{}' is active.",
                factory.name(),
                current.name()
            );
            return Err(RhiError::FactoryAlreadyRegistered {
                active: current.name().to_string(),
                rejected: factory.name().to_string(),
            });
        }

        log::info!(
            "Registered RHI factory '{}' (api type {}, priority {}).",
            factory.name(),
            factory.api_type(),
            factory.default_priority().0
        );
        *active = Some(factory);
        Ok(())
    }

    /// Removes `factory` from the registry.
    ///
    /// The factory is matched by identity, not by name.
    ///
    /// ## Errors
    /// * `RhiError::FactoryNotRegistered` - If `factory` is not the active one.
    pub fn unregister(&self, factory: &Arc<dyn RhiFactory>) -> RhiResult<()> {
        let mut active = self.active.write();
        match active.as_ref() {
            Some(current) if Arc::ptr_eq(current, factory) => {
                log::info!("Unregistered RHI factory '{}'.", factory.name());
                *active = None;
                Ok(())
            }
            _ => Err(RhiError::FactoryNotRegistered {
                name: factory.name().to_string(),
            }),
        }
    }

    /// Returns the active factory, if any.
    #[must_use]
    pub fn active(&self) -> Option<Arc<dyn RhiFactory>> {
        self.active.read().clone()
    }

    /// Returns the active factory.
    ///
    /// ## Errors
    /// * `RhiError::NoActiveFactory` - If nothing is registered.
    pub fn get(&self) -> RhiResult<Arc<dyn RhiFactory>> {
        self.active().ok_or(RhiError::NoActiveFactory)
    }

    /// Returns `true` if `factory` is the active factory.
    #[must_use]
    pub fn is_registered(&self, factory: &Arc<dyn RhiFactory>) -> bool {
        self.active
            .read()
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, factory))
    }

    /// Returns `true` if no factory is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.read().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = FactoryRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.active().is_none());
    }

    #[test]
    fn test_get_without_factory_fails() {
        let registry = FactoryRegistry::default();
        assert_eq!(registry.get().unwrap_err(), RhiError::NoActiveFactory);
    }
}
