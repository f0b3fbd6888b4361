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

//! The closed catalogue of resource kinds a factory can be asked for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every kind of object an [`RhiFactory`](crate::RhiFactory) knows how to create.
///
/// This is the key of [`RhiFactory::create`](crate::RhiFactory::create): each
/// variant maps to exactly one dedicated creation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    /// A logical device.
    Device,
    /// A presentable chain of images.
    SwapChain,
    /// A CPU/GPU synchronization fence.
    Fence,
    /// A linear GPU buffer.
    Buffer,
    /// A typed view over a buffer.
    BufferView,
    /// A pool that owns buffers.
    BufferPool,
    /// A GPU image.
    Image,
    /// A typed view over an image.
    ImageView,
    /// A pool that owns images.
    ImagePool,
    /// A pool for images streamed in mip by mip.
    StreamingImagePool,
    /// A pool that owns shader resource groups.
    ShaderResourceGroupPool,
    /// A group of shader bindings.
    ShaderResourceGroup,
    /// A cache of compiled pipeline states.
    PipelineLibrary,
    /// A compiled pipeline state.
    PipelineState,
    /// A unit of work inside a frame graph.
    Scope,
    /// Compiles a frame graph.
    FrameGraphCompiler,
    /// Executes a compiled frame graph.
    FrameGraphExecuter,
    /// A pool of frame-scoped attachments.
    TransientAttachmentPool,
    /// A pool of GPU queries.
    QueryPool,
    /// A single GPU query.
    Query,
    /// The layout of an indirect command buffer.
    IndirectBufferSignature,
    /// Writes commands into an indirect buffer.
    IndirectBufferWriter,
    /// Buffer pools backing ray-tracing structures.
    RayTracingBufferPools,
    /// A bottom-level acceleration structure.
    RayTracingBlas,
    /// A top-level acceleration structure.
    RayTracingTlas,
    /// A ray-tracing pipeline state.
    RayTracingPipelineState,
    /// A ray-tracing shader binding table.
    RayTracingShaderTable,
    /// The argument buffer of an indirect ray dispatch.
    DispatchRaysIndirectBuffer,
}

impl ResourceKind {
    /// All resource kinds, in declaration order.
    pub const ALL: [ResourceKind; 28] = [
        ResourceKind::Device,
        ResourceKind::SwapChain,
        ResourceKind::Fence,
        ResourceKind::Buffer,
        ResourceKind::BufferView,
        ResourceKind::BufferPool,
        ResourceKind::Image,
        ResourceKind::ImageView,
        ResourceKind::ImagePool,
        ResourceKind::StreamingImagePool,
        ResourceKind::ShaderResourceGroupPool,
        ResourceKind::ShaderResourceGroup,
        ResourceKind::PipelineLibrary,
        ResourceKind::PipelineState,
        ResourceKind::Scope,
        ResourceKind::FrameGraphCompiler,
        ResourceKind::FrameGraphExecuter,
        ResourceKind::TransientAttachmentPool,
        ResourceKind::QueryPool,
        ResourceKind::Query,
        ResourceKind::IndirectBufferSignature,
        ResourceKind::IndirectBufferWriter,
        ResourceKind::RayTracingBufferPools,
        ResourceKind::RayTracingBlas,
        ResourceKind::RayTracingTlas,
        ResourceKind::RayTracingPipelineState,
        ResourceKind::RayTracingShaderTable,
        ResourceKind::DispatchRaysIndirectBuffer,
    ];

    /// A short human-readable name, used in logs and error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            ResourceKind::Device => "device",
            ResourceKind::SwapChain => "swap chain",
            ResourceKind::Fence => "fence",
            ResourceKind::Buffer => "buffer",
            ResourceKind::BufferView => "buffer view",
            ResourceKind::BufferPool => "buffer pool",
            ResourceKind::Image => "image",
            ResourceKind::ImageView => "image view",
            ResourceKind::ImagePool => "image pool",
            ResourceKind::StreamingImagePool => "streaming image pool",
            ResourceKind::ShaderResourceGroupPool => "shader resource group pool",
            ResourceKind::ShaderResourceGroup => "shader resource group",
            ResourceKind::PipelineLibrary => "pipeline library",
            ResourceKind::PipelineState => "pipeline state",
            ResourceKind::Scope => "scope",
            ResourceKind::FrameGraphCompiler => "frame graph compiler",
            ResourceKind::FrameGraphExecuter => "frame graph executer",
            ResourceKind::TransientAttachmentPool => "transient attachment pool",
            ResourceKind::QueryPool => "query pool",
            ResourceKind::Query => "query",
            ResourceKind::IndirectBufferSignature => "indirect buffer signature",
            ResourceKind::IndirectBufferWriter => "indirect buffer writer",
            ResourceKind::RayTracingBufferPools => "ray-tracing buffer pools",
            ResourceKind::RayTracingBlas => "ray-tracing BLAS",
            ResourceKind::RayTracingTlas => "ray-tracing TLAS",
            ResourceKind::RayTracingPipelineState => "ray-tracing pipeline state",
            ResourceKind::RayTracingShaderTable => "ray-tracing shader table",
            ResourceKind::DispatchRaysIndirectBuffer => "dispatch-rays indirect buffer",
        }
    }

    /// Returns `true` for the kinds that only exist on ray-tracing capable backends.
    pub const fn is_ray_tracing(&self) -> bool {
        matches!(
            self,
            ResourceKind::RayTracingBufferPools
                | ResourceKind::RayTracingBlas
                | ResourceKind::RayTracingTlas
                | ResourceKind::RayTracingPipelineState
                | ResourceKind::RayTracingShaderTable
                | ResourceKind::DispatchRaysIndirectBuffer
        )
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_kinds_are_listed_once() {
        let unique: HashSet<_> = ResourceKind::ALL.iter().collect();
        assert_eq!(unique.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn six_kinds_are_ray_tracing() {
        let ray_tracing = ResourceKind::ALL
            .iter()
            .filter(|kind| kind.is_ray_tracing())
            .count();
        assert_eq!(ray_tracing, 6);
        assert!(!ResourceKind::Device.is_ray_tracing());
        assert!(ResourceKind::DispatchRaysIndirectBuffer.is_ray_tracing());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(ResourceKind::FrameGraphExecuter.to_string(), "frame graph executer");
    }
}
