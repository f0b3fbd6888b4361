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

//! Stub objects for every resource kind the stub factory supports.
//!
//! None of them owns anything on a GPU. They carry an id, their kind and an
//! optional debug name, which is all the RHI contracts ask of them.

use lumen_rhi::*;
use parking_lot::Mutex;

/// The state every stub object carries.
#[derive(Debug)]
pub(crate) struct ObjectCore {
    id: ObjectId,
    kind: ResourceKind,
    name: Mutex<Option<String>>,
}

impl ObjectCore {
    pub(crate) fn new(id: ObjectId, kind: ResourceKind) -> Self {
        Self {
            id,
            kind,
            name: Mutex::new(None),
        }
    }

    pub(crate) fn id(&self) -> ObjectId {
        self.id
    }

    pub(crate) fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub(crate) fn name(&self) -> Option<String> {
        self.name.lock().clone()
    }

    pub(crate) fn set_name(&self, name: &str) {
        *self.name.lock() = Some(name.to_string());
    }
}

/// Implements [`DeviceObject`] for a type holding an `ObjectCore` in `core`.
macro_rules! impl_device_object {
    ($ty:ty) => {
        impl lumen_rhi::DeviceObject for $ty {
            fn id(&self) -> lumen_rhi::ObjectId {
                self.core.id()
            }

            fn kind(&self) -> lumen_rhi::ResourceKind {
                self.core.kind()
            }

            fn name(&self) -> Option<String> {
                self.core.name()
            }

            fn set_name(&self, name: &str) {
                self.core.set_name(name)
            }

            fn as_device_object(&self) -> &dyn lumen_rhi::DeviceObject {
                self
            }
        }
    };
}
pub(crate) use impl_device_object;

macro_rules! stub_resources {
    ($($(#[$attr:meta])* $name:ident => $contract:ident;)*) => {
        $(
            $(#[$attr])*
            #[derive(Debug)]
            pub struct $name {
                core: ObjectCore,
            }

            impl $name {
                /// Creates the stub with the given id.
                pub fn new(id: ObjectId) -> Self {
                    Self {
                        core: ObjectCore::new(id, ResourceKind::$contract),
                    }
                }
            }

            impl_device_object!($name);

            impl $contract for $name {}
        )*
    };
}

stub_resources! {
    /// Stub swap chain.
    StubSwapChain => SwapChain;
    /// Stub fence.
    StubFence => Fence;
    /// Stub buffer.
    StubBuffer => Buffer;
    /// Stub buffer view.
    StubBufferView => BufferView;
    /// Stub buffer pool.
    StubBufferPool => BufferPool;
    /// Stub image.
    StubImage => Image;
    /// Stub image view.
    StubImageView => ImageView;
    /// Stub image pool.
    StubImagePool => ImagePool;
    /// Stub streaming image pool.
    StubStreamingImagePool => StreamingImagePool;
    /// Stub shader resource group pool.
    StubShaderResourceGroupPool => ShaderResourceGroupPool;
    /// Stub shader resource group.
    StubShaderResourceGroup => ShaderResourceGroup;
    /// Stub pipeline library.
    StubPipelineLibrary => PipelineLibrary;
    /// Stub pipeline state.
    StubPipelineState => PipelineState;
    /// Stub frame graph scope.
    StubScope => Scope;
    /// Stub frame graph compiler.
    StubFrameGraphCompiler => FrameGraphCompiler;
    /// Stub frame graph executer.
    StubFrameGraphExecuter => FrameGraphExecuter;
    /// Stub transient attachment pool.
    StubTransientAttachmentPool => TransientAttachmentPool;
    /// Stub query pool.
    StubQueryPool => QueryPool;
    /// Stub query.
    StubQuery => Query;
    /// Stub indirect buffer signature.
    StubIndirectBufferSignature => IndirectBufferSignature;
    /// Stub indirect buffer writer.
    StubIndirectBufferWriter => IndirectBufferWriter;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_reports_its_kind_and_id() {
        let buffer = StubBuffer::new(ObjectId(3));
        assert_eq!(buffer.id(), ObjectId(3));
        assert_eq!(buffer.kind(), ResourceKind::Buffer);
        assert_eq!(buffer.name(), None);
    }

    #[test]
    fn debug_name_can_be_set() {
        let image = StubImage::new(ObjectId(1));
        image.set_name("GBuffer Albedo");
        assert_eq!(image.name().as_deref(), Some("GBuffer Albedo"));
    }
}
