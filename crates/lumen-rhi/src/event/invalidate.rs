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

use super::EventQueue;
use crate::api::{ObjectId, ResourceKind};

/// Announces that an RHI object changed in a way that invalidates whatever was
/// built on top of it (views, shader resource groups, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceInvalidateEvent {
    /// The object that was invalidated.
    pub object: ObjectId,
    /// The kind of the invalidated object.
    pub kind: ResourceKind,
}

/// The queue carrying [`ResourceInvalidateEvent`]s.
///
/// Consumers and their processing order are owned by the renderer; the RHI
/// only queues, gates and clears.
pub type ResourceInvalidateBus = EventQueue<ResourceInvalidateEvent>;
