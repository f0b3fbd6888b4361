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

use lumen_rhi::*;
use lumen_rhi_stub::{init_test_logging, StubFactory, StubFactorySettings};
use std::sync::Arc;

fn supported_kinds() -> impl Iterator<Item = ResourceKind> {
    ResourceKind::ALL
        .into_iter()
        .filter(|kind| !kind.is_ray_tracing())
}

fn ray_tracing_kinds() -> impl Iterator<Item = ResourceKind> {
    ResourceKind::ALL
        .into_iter()
        .filter(|kind| kind.is_ray_tracing())
}

#[test]
fn test_every_supported_kind_yields_distinct_instances() {
    init_test_logging();
    let factory = StubFactory::new();

    for kind in supported_kinds() {
        let first = factory
            .create(kind)
            .unwrap_or_else(|e| panic!("{kind} should be supported: {e}"));
        let second = factory.create(kind).unwrap();

        assert_eq!(first.kind(), kind);
        assert_eq!(second.kind(), kind);
        assert!(!first.ptr_eq(&second), "{kind} instances must not be shared");
        assert_ne!(first.id(), second.id(), "{kind} instances must have distinct ids");

        let base = first.as_device_object();
        assert_eq!(base.kind(), kind);
        assert_eq!(base.id(), first.id());
    }
}

#[test]
fn test_dedicated_methods_return_independent_objects() {
    let factory = StubFactory::new();

    let a = factory.create_buffer();
    let b = factory.create_buffer();
    assert!(!Arc::ptr_eq(&a, &b));

    // Dropping one handle leaves the other untouched.
    a.set_name("Staging");
    drop(a);
    assert_eq!(b.name(), None);
    assert_eq!(Arc::strong_count(&b), 1);

    let compiler = factory.create_frame_graph_compiler();
    let executer = factory.create_frame_graph_executer();
    assert_eq!(compiler.kind(), ResourceKind::FrameGraphCompiler);
    assert_eq!(executer.kind(), ResourceKind::FrameGraphExecuter);
}

#[test]
fn test_enumerate_physical_devices_returns_exactly_one() {
    let factory = StubFactory::new();
    assert_eq!(factory.enumerate_physical_devices().len(), 1);
    assert_eq!(factory.enumerate_physical_devices().len(), 1);
}

#[test]
fn test_create_default_device_initializes_against_single_physical_device() {
    // --- 1. ARRANGE ---
    let factory = StubFactory::new();
    let expected = factory.enumerate_physical_devices()[0].descriptor().clone();

    // --- 2. ACT ---
    let device = factory
        .create_default_device()
        .expect("Default device creation should succeed");

    // --- 3. ASSERT ---
    assert!(device.is_initialized());
    assert_eq!(device.kind(), ResourceKind::Device);
    assert_eq!(device.device_index(), Some(DeviceIndex::DEFAULT));
    let physical = device
        .physical_device()
        .expect("Device should be bound to a physical device");
    assert_eq!(physical.descriptor(), &expected);
}

#[test]
fn test_create_default_device_rejects_other_device_counts() {
    for count in [0, 2] {
        let factory = StubFactory::with_settings(StubFactorySettings {
            physical_device_count: count,
            ..Default::default()
        });

        let err = factory.create_default_device().unwrap_err();
        assert_eq!(
            err,
            RhiError::UnexpectedPhysicalDeviceCount {
                expected: 1,
                found: count
            }
        );
    }
}

#[test]
fn test_identity_is_fixed() {
    let factory = StubFactory::new();
    assert_eq!(factory.name(), "UnitTest");
    assert_eq!(factory.api_type(), ApiType::from_name(factory.name()));
    assert_eq!(factory.default_priority(), ApiPriority::MIDDLE);
    assert!(!factory.supports_xr());
}

#[test]
fn test_ray_tracing_kinds_are_unsupported() {
    init_test_logging();
    let factory = StubFactory::new();

    for kind in ray_tracing_kinds() {
        match factory.create(kind) {
            Err(RhiError::Unsupported { kind: reported }) => assert_eq!(reported, kind),
            Err(e) => panic!("Unexpected error for {kind}: {e}"),
            Ok(object) => panic!("{kind} unexpectedly produced object {}", object.id()),
        }
    }

    assert!(factory.create_ray_tracing_buffer_pools().is_err());
    assert!(factory.create_ray_tracing_tlas().is_err());
    assert!(factory.create_ray_tracing_pipeline_state().is_err());
    assert!(factory.create_dispatch_rays_indirect_buffer().is_err());
}

#[test]
#[should_panic(expected = "Not implemented")]
fn test_panic_policy_from_settings_fires_through_kind_dispatch() {
    // --- 1. ARRANGE ---
    let settings = StubFactorySettings::from_json_str(r#"{ "unsupported_policy": "panic" }"#)
        .expect("Settings should parse");
    let factory = StubFactory::with_settings(settings);

    // --- 2. ACT ---
    let _ = factory.create(ResourceKind::RayTracingBlas);
}

#[test]
fn test_factory_usable_through_trait_object() {
    let factory: Arc<dyn RhiFactory> = Arc::new(StubFactory::new());

    let device = factory.create_default_device().unwrap();
    let pool = factory.create_query_pool();
    let query = factory.create_query();

    assert!(device.is_initialized());
    assert_ne!(pool.id(), query.id());
}
