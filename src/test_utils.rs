#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `ProjectTown` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::CONFIG_DIR_ENV;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the configuration directory
/// environment variable.
static CONFIG_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `PROJECTTOWN_CONFIG_DIR` at a temporary directory
/// for a test scope and restores the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because other
/// threads may read the environment concurrently. Every test that touches the
/// variable goes through this guard, which holds `CONFIG_DIR_LOCK` for its
/// whole lifetime, so modifications are serialized and always restored, even
/// on panic.
pub struct ConfigDirGuard {
    original: Option<std::ffi::OsString>,
    // Held for the lifetime of the guard to keep access exclusive
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under a global lock"
)]
impl ConfigDirGuard {
    /// Create a new guard that sets the configuration directory to the temp directory.
    pub fn new(temp_dir: &TempDir) -> Self {
        // A panicking test poisons the lock; the guarded data is `()` so recover it
        let lock = CONFIG_DIR_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os(CONFIG_DIR_ENV);
        // SAFETY: serialized by CONFIG_DIR_LOCK, restored on drop
        unsafe {
            std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under a global lock"
)]
impl Drop for ConfigDirGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held; we restore the pre-test state
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(CONFIG_DIR_ENV, original);
            }
        } else {
            unsafe {
                std::env::remove_var(CONFIG_DIR_ENV);
            }
        }
    }
}

#[test]
fn guard_restores_previous_value() {
    let before = {
        let _lock = CONFIG_DIR_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        std::env::var_os(CONFIG_DIR_ENV)
    };
    {
        let dir = create_test_dir();
        let _guard = ConfigDirGuard::new(&dir);
        assert_eq!(
            std::env::var_os(CONFIG_DIR_ENV).unwrap(),
            dir.path().as_os_str()
        );
    }
    let _lock = CONFIG_DIR_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    assert_eq!(std::env::var_os(CONFIG_DIR_ENV), before);
}
