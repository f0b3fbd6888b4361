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

//! Logging bootstrap for test binaries.

use env_logger::{Builder, Env};

/// Installs an `env_logger` that writes through the test harness.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once, or after another logger was installed, does nothing.
pub fn init_test_logging() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .is_test(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_test_logging();
        init_test_logging();
        log::info!("Logging initialized twice without panicking.");
    }
}
