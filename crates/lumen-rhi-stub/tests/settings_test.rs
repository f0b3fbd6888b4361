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

use lumen_rhi::{PhysicalDeviceType, RhiFactory};
use lumen_rhi_stub::{StubFactory, StubFactorySettings, UnsupportedPolicy};
use std::io::Write;

#[test]
fn test_load_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file creation failed");
    write!(
        file,
        r#"{{
            "physical_device_count": 2,
            "physical_device_name": "Headless",
            "physical_device_type": "VirtualGpu"
        }}"#
    )
    .expect("Write failed");

    let settings = StubFactorySettings::load(file.path()).expect("Settings should load");
    assert_eq!(settings.physical_device_count, 2);
    assert_eq!(settings.physical_device_type, PhysicalDeviceType::VirtualGpu);
    assert_eq!(settings.unsupported_policy, UnsupportedPolicy::Report);

    let factory = StubFactory::with_settings(settings);
    let devices = factory.enumerate_physical_devices();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].descriptor().name, "Headless 0");
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("Temp dir creation failed");
    let path = dir.path().join("missing.json");

    let err = StubFactorySettings::load(&path).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_settings_round_trip_through_json() {
    let settings = StubFactorySettings {
        unsupported_policy: UnsupportedPolicy::Panic,
        ..Default::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains("\"panic\""));
    assert_eq!(StubFactorySettings::from_json_str(&json).unwrap(), settings);
}
