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

//! One contract per resource kind.
//!
//! The contracts carry no methods of their own yet; they exist so that each
//! kind is a distinct type at the API boundary.

use super::DeviceObject;

macro_rules! resource_contract {
    ($($(#[$attr:meta])* $name:ident;)*) => {
        $(
            $(#[$attr])*
            pub trait $name: DeviceObject {}
        )*
    };
}

resource_contract! {
    /// A presentable chain of images.
    SwapChain;
    /// A CPU/GPU synchronization fence.
    Fence;
    /// A linear GPU buffer.
    Buffer;
    /// A typed view over a buffer.
    BufferView;
    /// A pool that owns buffers.
    BufferPool;
    /// A GPU image.
    Image;
    /// A typed view over an image.
    ImageView;
    /// A pool that owns images.
    ImagePool;
    /// A pool for images streamed in mip by mip.
    StreamingImagePool;
    /// A pool that owns shader resource groups.
    ShaderResourceGroupPool;
    /// A group of shader bindings.
    ShaderResourceGroup;
    /// A cache of compiled pipeline states.
    PipelineLibrary;
    /// A compiled pipeline state.
    PipelineState;
    /// A unit of work inside a frame graph.
    Scope;
    /// Compiles a frame graph.
    FrameGraphCompiler;
    /// Executes a compiled frame graph.
    FrameGraphExecuter;
    /// A pool of frame-scoped attachments.
    TransientAttachmentPool;
    /// A pool of GPU queries.
    QueryPool;
    /// A single GPU query.
    Query;
    /// The layout of an indirect command buffer.
    IndirectBufferSignature;
    /// Writes commands into an indirect buffer.
    IndirectBufferWriter;
    /// Buffer pools backing ray-tracing structures.
    RayTracingBufferPools;
    /// A bottom-level acceleration structure.
    RayTracingBlas;
    /// A top-level acceleration structure.
    RayTracingTlas;
    /// A ray-tracing pipeline state.
    RayTracingPipelineState;
    /// A ray-tracing shader binding table.
    RayTracingShaderTable;
    /// The argument buffer of an indirect ray dispatch.
    DispatchRaysIndirectBuffer;
}
