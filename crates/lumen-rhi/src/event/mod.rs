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

//! Event queues shared between backends and the code that consumes their
//! notifications.
//!
//! The primary component is the [`EventQueue`], a generic, thread-safe channel
//! that can be switched off. The [`ResourceInvalidateBus`] is the queue RHI
//! objects use to announce that something depending on them must be rebuilt.

mod invalidate;
mod queue;

pub use self::invalidate::{ResourceInvalidateBus, ResourceInvalidateEvent};
pub use self::queue::{EventProducer, EventQueue};
