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

//! A tagged union over every resource contract.

use super::*;
use crate::api::{ObjectId, ResourceKind};
use std::sync::Arc;

macro_rules! rhi_object {
    ($($variant:ident => $contract:ident),* $(,)?) => {
        /// Any object a factory can create, tagged by its kind.
        ///
        /// Returned by [`RhiFactory::create`](crate::RhiFactory::create) so callers can
        /// branch on the kind instead of calling one method per kind.
        #[derive(Debug, Clone)]
        pub enum RhiObject {
            $(
                #[allow(missing_docs)]
                $variant(Arc<dyn $contract>),
            )*
        }

        impl RhiObject {
            /// The resource kind of the wrapped object.
            pub fn kind(&self) -> ResourceKind {
                match self {
                    $(RhiObject::$variant(_) => ResourceKind::$variant,)*
                }
            }

            /// The wrapped object viewed through its base contract.
            pub fn as_device_object(&self) -> &dyn DeviceObject {
                match self {
                    $(RhiObject::$variant(object) => object.as_device_object(),)*
                }
            }

            /// The id of the wrapped object.
            pub fn id(&self) -> ObjectId {
                match self {
                    $(RhiObject::$variant(object) => object.id(),)*
                }
            }

            /// The debug name of the wrapped object.
            pub fn name(&self) -> Option<String> {
                match self {
                    $(RhiObject::$variant(object) => object.name(),)*
                }
            }

            /// Returns `true` if both values wrap the same allocation.
            pub fn ptr_eq(&self, other: &RhiObject) -> bool {
                match (self, other) {
                    $((RhiObject::$variant(a), RhiObject::$variant(b)) => Arc::ptr_eq(a, b),)*
                    _ => false,
                }
            }
        }
    };
}

rhi_object! {
    Device => Device,
    SwapChain => SwapChain,
    Fence => Fence,
    Buffer => Buffer,
    BufferView => BufferView,
    BufferPool => BufferPool,
    Image => Image,
    ImageView => ImageView,
    ImagePool => ImagePool,
    StreamingImagePool => StreamingImagePool,
    ShaderResourceGroupPool => ShaderResourceGroupPool,
    ShaderResourceGroup => ShaderResourceGroup,
    PipelineLibrary => PipelineLibrary,
    PipelineState => PipelineState,
    Scope => Scope,
    FrameGraphCompiler => FrameGraphCompiler,
    FrameGraphExecuter => FrameGraphExecuter,
    TransientAttachmentPool => TransientAttachmentPool,
    QueryPool => QueryPool,
    Query => Query,
    IndirectBufferSignature => IndirectBufferSignature,
    IndirectBufferWriter => IndirectBufferWriter,
    RayTracingBufferPools => RayTracingBufferPools,
    RayTracingBlas => RayTracingBlas,
    RayTracingTlas => RayTracingTlas,
    RayTracingPipelineState => RayTracingPipelineState,
    RayTracingShaderTable => RayTracingShaderTable,
    DispatchRaysIndirectBuffer => DispatchRaysIndirectBuffer,
}
