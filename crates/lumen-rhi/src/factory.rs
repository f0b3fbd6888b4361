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

//! The abstract factory every RHI backend implements.

use crate::api::{ApiPriority, ApiType, DeviceIndex, PhysicalDeviceList, ResourceKind};
use crate::error::{RhiError, RhiResult};
use crate::resource::*;
use std::fmt::Debug;
use std::sync::Arc;

/// Creates every kind of RHI object for one backend.
///
/// Supported kinds have an infallible creation method. Kinds a backend may not
/// support (everything ray tracing) return a [`RhiResult`] so callers can branch
/// on [`RhiError::Unsupported`] instead of crashing.
pub trait RhiFactory: Send + Sync + Debug + 'static {
    /// The name of the backend.
    fn name(&self) -> &str;

    /// The API tag of the backend, derived from [`RhiFactory::name`].
    fn api_type(&self) -> ApiType {
        ApiType::from_name(self.name())
    }

    /// The priority this factory claims when several backends are available.
    fn default_priority(&self) -> ApiPriority;

    /// Indicates whether the backend can drive extended-reality devices.
    fn supports_xr(&self) -> bool;

    /// Lists the physical devices visible to this backend.
    fn enumerate_physical_devices(&self) -> PhysicalDeviceList;

    /// Creates an uninitialized logical device.
    fn create_device(&self) -> Arc<dyn Device>;
    /// Creates a swap chain.
    fn create_swap_chain(&self) -> Arc<dyn SwapChain>;
    /// Creates a fence.
    fn create_fence(&self) -> Arc<dyn Fence>;
    /// Creates a buffer.
    fn create_buffer(&self) -> Arc<dyn Buffer>;
    /// Creates a buffer view.
    fn create_buffer_view(&self) -> Arc<dyn BufferView>;
    /// Creates a buffer pool.
    fn create_buffer_pool(&self) -> Arc<dyn BufferPool>;
    /// Creates an image.
    fn create_image(&self) -> Arc<dyn Image>;
    /// Creates an image view.
    fn create_image_view(&self) -> Arc<dyn ImageView>;
    /// Creates an image pool.
    fn create_image_pool(&self) -> Arc<dyn ImagePool>;
    /// Creates a streaming image pool.
    fn create_streaming_image_pool(&self) -> Arc<dyn StreamingImagePool>;
    /// Creates a shader resource group pool.
    fn create_shader_resource_group_pool(&self) -> Arc<dyn ShaderResourceGroupPool>;
    /// Creates a shader resource group.
    fn create_shader_resource_group(&self) -> Arc<dyn ShaderResourceGroup>;
    /// Creates a pipeline library.
    fn create_pipeline_library(&self) -> Arc<dyn PipelineLibrary>;
    /// Creates a pipeline state.
    fn create_pipeline_state(&self) -> Arc<dyn PipelineState>;
    /// Creates a frame graph scope.
    fn create_scope(&self) -> Arc<dyn Scope>;
    /// Creates a frame graph compiler.
    fn create_frame_graph_compiler(&self) -> Arc<dyn FrameGraphCompiler>;
    /// Creates a frame graph executer.
    fn create_frame_graph_executer(&self) -> Arc<dyn FrameGraphExecuter>;
    /// Creates a transient attachment pool.
    fn create_transient_attachment_pool(&self) -> Arc<dyn TransientAttachmentPool>;
    /// Creates a query pool.
    fn create_query_pool(&self) -> Arc<dyn QueryPool>;
    /// Creates a query.
    fn create_query(&self) -> Arc<dyn Query>;
    /// Creates an indirect buffer signature.
    fn create_indirect_buffer_signature(&self) -> Arc<dyn IndirectBufferSignature>;
    /// Creates an indirect buffer writer.
    fn create_indirect_buffer_writer(&self) -> Arc<dyn IndirectBufferWriter>;

    /// Creates the buffer pools backing ray-tracing structures.
    fn create_ray_tracing_buffer_pools(&self) -> RhiResult<Arc<dyn RayTracingBufferPools>>;
    /// Creates a bottom-level acceleration structure.
    fn create_ray_tracing_blas(&self) -> RhiResult<Arc<dyn RayTracingBlas>>;
    /// Creates a top-level acceleration structure.
    fn create_ray_tracing_tlas(&self) -> RhiResult<Arc<dyn RayTracingTlas>>;
    /// Creates a ray-tracing pipeline state.
    fn create_ray_tracing_pipeline_state(&self) -> RhiResult<Arc<dyn RayTracingPipelineState>>;
    /// Creates a ray-tracing shader table.
    fn create_ray_tracing_shader_table(&self) -> RhiResult<Arc<dyn RayTracingShaderTable>>;
    /// Creates an indirect dispatch-rays buffer.
    fn create_dispatch_rays_indirect_buffer(
        &self,
    ) -> RhiResult<Arc<dyn DispatchRaysIndirectBuffer>>;

    /// Creates an object of the given kind through its dedicated method.
    ///
    /// ## Errors
    /// * `RhiError::Unsupported` - If the backend does not implement `kind`.
    fn create(&self, kind: ResourceKind) -> RhiResult<RhiObject> {
        let object = match kind {
            ResourceKind::Device => RhiObject::Device(self.create_device()),
            ResourceKind::SwapChain => RhiObject::SwapChain(self.create_swap_chain()),
            ResourceKind::Fence => RhiObject::Fence(self.create_fence()),
            ResourceKind::Buffer => RhiObject::Buffer(self.create_buffer()),
            ResourceKind::BufferView => RhiObject::BufferView(self.create_buffer_view()),
            ResourceKind::BufferPool => RhiObject::BufferPool(self.create_buffer_pool()),
            ResourceKind::Image => RhiObject::Image(self.create_image()),
            ResourceKind::ImageView => RhiObject::ImageView(self.create_image_view()),
            ResourceKind::ImagePool => RhiObject::ImagePool(self.create_image_pool()),
            ResourceKind::StreamingImagePool => {
                RhiObject::StreamingImagePool(self.create_streaming_image_pool())
            }
            ResourceKind::ShaderResourceGroupPool => {
                RhiObject::ShaderResourceGroupPool(self.create_shader_resource_group_pool())
            }
            ResourceKind::ShaderResourceGroup => {
                RhiObject::ShaderResourceGroup(self.create_shader_resource_group())
            }
            ResourceKind::PipelineLibrary => {
                RhiObject::PipelineLibrary(self.create_pipeline_library())
            }
            ResourceKind::PipelineState => RhiObject::PipelineState(self.create_pipeline_state()),
            ResourceKind::Scope => RhiObject::Scope(self.create_scope()),
            ResourceKind::FrameGraphCompiler => {
                RhiObject::FrameGraphCompiler(self.create_frame_graph_compiler())
            }
            ResourceKind::FrameGraphExecuter => {
                RhiObject::FrameGraphExecuter(self.create_frame_graph_executer())
            }
            ResourceKind::TransientAttachmentPool => {
                RhiObject::TransientAttachmentPool(self.create_transient_attachment_pool())
            }
            ResourceKind::QueryPool => RhiObject::QueryPool(self.create_query_pool()),
            ResourceKind::Query => RhiObject::Query(self.create_query()),
            ResourceKind::IndirectBufferSignature => {
                RhiObject::IndirectBufferSignature(self.create_indirect_buffer_signature())
            }
            ResourceKind::IndirectBufferWriter => {
                RhiObject::IndirectBufferWriter(self.create_indirect_buffer_writer())
            }
            ResourceKind::RayTracingBufferPools => {
                RhiObject::RayTracingBufferPools(self.create_ray_tracing_buffer_pools()?)
            }
            ResourceKind::RayTracingBlas => RhiObject::RayTracingBlas(self.create_ray_tracing_blas()?),
            ResourceKind::RayTracingTlas => RhiObject::RayTracingTlas(self.create_ray_tracing_tlas()?),
            ResourceKind::RayTracingPipelineState => {
                RhiObject::RayTracingPipelineState(self.create_ray_tracing_pipeline_state()?)
            }
            ResourceKind::RayTracingShaderTable => {
                RhiObject::RayTracingShaderTable(self.create_ray_tracing_shader_table()?)
            }
            ResourceKind::DispatchRaysIndirectBuffer => {
                RhiObject::DispatchRaysIndirectBuffer(self.create_dispatch_rays_indirect_buffer()?)
            }
        };
        Ok(object)
    }

    /// Creates a device and initializes it against the only physical device
    /// this backend exposes, at [`DeviceIndex::DEFAULT`].
    ///
    /// ## Errors
    /// * `RhiError::UnexpectedPhysicalDeviceCount` - If enumeration does not
    ///   return exactly one physical device.
    /// * Any error returned by [`Device::init`].
    fn create_default_device(&self) -> RhiResult<Arc<dyn Device>> {
        let mut physical_devices = self.enumerate_physical_devices();
        if physical_devices.len() != 1 {
            log::error!(
                "Expected a single physical device, '{}' enumerated {}.",
                self.name(),
                physical_devices.len()
            );
            return Err(RhiError::UnexpectedPhysicalDeviceCount {
                expected: 1,
                found: physical_devices.len(),
            });
        }
        let physical_device = physical_devices.remove(0);

        let device = self.create_device();
        device.init(DeviceIndex::DEFAULT, physical_device)?;
        log::debug!(
            "Created default device {} on backend '{}'.",
            device.id(),
            self.name()
        );
        Ok(device)
    }
}
