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

//! The stub factory and its scoped registration.

use crate::device::StubDevice;
use crate::physical_device::StubPhysicalDevice;
use crate::resources::*;
use crate::settings::{StubFactorySettings, UnsupportedPolicy};
use lumen_rhi::*;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// An [`RhiFactory`] that needs no graphics backend.
///
/// Every supported kind yields a fresh stub object with its own [`ObjectId`].
/// Ray-tracing kinds are not implemented; see [`UnsupportedPolicy`] for how
/// that is reported.
#[derive(Debug)]
pub struct StubFactory {
    platform_name: String,
    settings: StubFactorySettings,
    next_object_id: AtomicU64,
}

impl StubFactory {
    /// The name every stub factory reports.
    pub const PLATFORM_NAME: &'static str = "UnitTest";

    /// Creates a factory with default settings.
    pub fn new() -> Self {
        Self::with_settings(StubFactorySettings::default())
    }

    /// Creates a factory with the given settings.
    pub fn with_settings(settings: StubFactorySettings) -> Self {
        Self {
            platform_name: Self::PLATFORM_NAME.to_string(),
            settings,
            next_object_id: AtomicU64::new(0),
        }
    }

    /// The settings this factory was created with.
    pub fn settings(&self) -> &StubFactorySettings {
        &self.settings
    }

    /// Registers this factory as the active one in `context`.
    ///
    /// The factory stays registered until the returned guard is dropped.
    ///
    /// ## Errors
    /// * `RhiError::FactoryAlreadyRegistered` - If `context` already has an
    ///   active factory.
    pub fn register(self, context: &RhiContext) -> RhiResult<StubFactoryRegistration<'_>> {
        StubFactoryRegistration::new(context, Arc::new(self))
    }

    fn spawn<T: DeviceObject>(&self, make: impl FnOnce(ObjectId) -> T) -> Arc<T> {
        let id = ObjectId(self.next_object_id.fetch_add(1, Ordering::Relaxed));
        let object = make(id);
        log::trace!("Stub factory created {} {id}.", object.kind());
        Arc::new(object)
    }

    fn unsupported<T: ?Sized>(&self, kind: ResourceKind) -> RhiResult<Arc<T>> {
        log::error!("Not implemented: the stub backend cannot create a {kind}.");
        match self.settings.unsupported_policy {
            UnsupportedPolicy::Report => Err(RhiError::Unsupported { kind }),
            UnsupportedPolicy::Panic => panic!("Not implemented: {kind}"),
        }
    }
}

impl Default for StubFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RhiFactory for StubFactory {
    fn name(&self) -> &str {
        &self.platform_name
    }

    fn default_priority(&self) -> ApiPriority {
        ApiPriority::MIDDLE
    }

    fn supports_xr(&self) -> bool {
        false
    }

    fn enumerate_physical_devices(&self) -> PhysicalDeviceList {
        StubPhysicalDevice::enumerate(&self.settings)
    }

    fn create_device(&self) -> Arc<dyn Device> {
        self.spawn(StubDevice::new)
    }

    fn create_swap_chain(&self) -> Arc<dyn SwapChain> {
        self.spawn(StubSwapChain::new)
    }

    fn create_fence(&self) -> Arc<dyn Fence> {
        self.spawn(StubFence::new)
    }

    fn create_buffer(&self) -> Arc<dyn Buffer> {
        self.spawn(StubBuffer::new)
    }

    fn create_buffer_view(&self) -> Arc<dyn BufferView> {
        self.spawn(StubBufferView::new)
    }

    fn create_buffer_pool(&self) -> Arc<dyn BufferPool> {
        self.spawn(StubBufferPool::new)
    }

    fn create_image(&self) -> Arc<dyn Image> {
        self.spawn(StubImage::new)
    }

    fn create_image_view(&self) -> Arc<dyn ImageView> {
        self.spawn(StubImageView::new)
    }

    fn create_image_pool(&self) -> Arc<dyn ImagePool> {
        self.spawn(StubImagePool::new)
    }

    fn create_streaming_image_pool(&self) -> Arc<dyn StreamingImagePool> {
        self.spawn(StubStreamingImagePool::new)
    }

    fn create_shader_resource_group_pool(&self) -> Arc<dyn ShaderResourceGroupPool> {
        self.spawn(StubShaderResourceGroupPool::new)
    }

    fn create_shader_resource_group(&self) -> Arc<dyn ShaderResourceGroup> {
        self.spawn(StubShaderResourceGroup::new)
    }

    fn create_pipeline_library(&self) -> Arc<dyn PipelineLibrary> {
        self.spawn(StubPipelineLibrary::new)
    }

    fn create_pipeline_state(&self) -> Arc<dyn PipelineState> {
        self.spawn(StubPipelineState::new)
    }

    fn create_scope(&self) -> Arc<dyn Scope> {
        self.spawn(StubScope::new)
    }

    fn create_frame_graph_compiler(&self) -> Arc<dyn FrameGraphCompiler> {
        self.spawn(StubFrameGraphCompiler::new)
    }

    fn create_frame_graph_executer(&self) -> Arc<dyn FrameGraphExecuter> {
        self.spawn(StubFrameGraphExecuter::new)
    }

    fn create_transient_attachment_pool(&self) -> Arc<dyn TransientAttachmentPool> {
        self.spawn(StubTransientAttachmentPool::new)
    }

    fn create_query_pool(&self) -> Arc<dyn QueryPool> {
        self.spawn(StubQueryPool::new)
    }

    fn create_query(&self) -> Arc<dyn Query> {
        self.spawn(StubQuery::new)
    }

    fn create_indirect_buffer_signature(&self) -> Arc<dyn IndirectBufferSignature> {
        self.spawn(StubIndirectBufferSignature::new)
    }

    fn create_indirect_buffer_writer(&self) -> Arc<dyn IndirectBufferWriter> {
        self.spawn(StubIndirectBufferWriter::new)
    }

    fn create_ray_tracing_buffer_pools(&self) -> RhiResult<Arc<dyn RayTracingBufferPools>> {
        self.unsupported(ResourceKind::RayTracingBufferPools)
    }

    fn create_ray_tracing_blas(&self) -> RhiResult<Arc<dyn RayTracingBlas>> {
        self.unsupported(ResourceKind::RayTracingBlas)
    }

    fn create_ray_tracing_tlas(&self) -> RhiResult<Arc<dyn RayTracingTlas>> {
        self.unsupported(ResourceKind::RayTracingTlas)
    }

    fn create_ray_tracing_pipeline_state(&self) -> RhiResult<Arc<dyn RayTracingPipelineState>> {
        self.unsupported(ResourceKind::RayTracingPipelineState)
    }

    fn create_ray_tracing_shader_table(&self) -> RhiResult<Arc<dyn RayTracingShaderTable>> {
        self.unsupported(ResourceKind::RayTracingShaderTable)
    }

    fn create_dispatch_rays_indirect_buffer(
        &self,
    ) -> RhiResult<Arc<dyn DispatchRaysIndirectBuffer>> {
        self.unsupported(ResourceKind::DispatchRaysIndirectBuffer)
    }
}

/// Keeps a [`StubFactory`] registered in an [`RhiContext`].
///
/// Dropping the guard unregisters the factory, then disables and clears the
/// context's invalidation bus so no queued event leaks into the next test.
#[derive(Debug)]
pub struct StubFactoryRegistration<'a> {
    context: &'a RhiContext,
    factory: Arc<StubFactory>,
    handle: Arc<dyn RhiFactory>,
}

impl<'a> StubFactoryRegistration<'a> {
    /// Registers `factory` in `context`.
    ///
    /// ## Errors
    /// * `RhiError::FactoryAlreadyRegistered` - If `context` already has an
    ///   active factory.
    pub fn new(context: &'a RhiContext, factory: Arc<StubFactory>) -> RhiResult<Self> {
        let handle: Arc<dyn RhiFactory> = factory.clone();
        context.registry().register(Arc::clone(&handle))?;
        Ok(Self {
            context,
            factory,
            handle,
        })
    }

    /// The registered factory.
    pub fn factory(&self) -> &Arc<StubFactory> {
        &self.factory
    }

    /// The registered factory as the registry sees it.
    pub fn handle(&self) -> &Arc<dyn RhiFactory> {
        &self.handle
    }

    /// The context the factory is registered in.
    pub fn context(&self) -> &'a RhiContext {
        self.context
    }
}

impl Deref for StubFactoryRegistration<'_> {
    type Target = StubFactory;

    fn deref(&self) -> &Self::Target {
        &self.factory
    }
}

impl Drop for StubFactoryRegistration<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.context.registry().unregister(&self.handle) {
            log::error!("Failed to unregister stub factory: {e}");
        }

        let bus = self.context.invalidate_bus();
        bus.allow_queuing(false);
        let cleared = bus.clear_queued_events();
        log::debug!("Stub factory torn down, {cleared} invalidation event(s) discarded.");
    }
}
