/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ::ucp::cli::{RadCliError, RadCliResult};

const RETRY_INTERVAL: Duration = Duration::from_secs(1);
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Exclusive lock on the config file, held as `<config>.lock` next to it.
/// The lock file is removed when the guard goes away.
#[derive(Debug)]
pub struct ConfigLock {
    path: PathBuf,
}

impl ConfigLock {
    pub async fn acquire(config_path: &Path) -> RadCliResult<ConfigLock> {
        let mut lock_path = config_path.as_os_str().to_owned();
        lock_path.push(".lock");
        let path = PathBuf::from(lock_path);

        // the lock lives next to the config, which may not exist yet
        if let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        let deadline = tokio::time::Instant::now() + LOCK_TIMEOUT;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(ConfigLock { path }),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if tokio::time::Instant::now() >= deadline {
                        return Err(RadCliError::GenericError(format!(
                            "failed to acquire the lock on '{}', another rad command may be editing the config. Remove the lock file if it is stale",
                            path.display()
                        )));
                    }
                    tracing::info!(lock = %path.display(), "config file is locked, retrying");
                    tokio::time::sleep(RETRY_INTERVAL).await;
                }
                Err(e) => return Err(RadCliError::IOError(e)),
            }
        }
    }
}

impl Drop for ConfigLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(lock = %self.path.display(), error = %e, "failed to release config lock");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lock_file_is_created_and_removed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = dir.path().join("config.yaml");
        let lock_file = dir.path().join("config.yaml.lock");

        let lock = ConfigLock::acquire(&config).await.expect("lock should be free");
        assert!(lock_file.exists());

        drop(lock);
        assert!(!lock_file.exists());
    }

    #[tokio::test]
    async fn lock_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = dir.path().join(".rad").join("config.yaml");

        let lock = ConfigLock::acquire(&config).await.expect("lock should be created");
        assert!(dir.path().join(".rad").join("config.yaml.lock").exists());
        drop(lock);
    }

    #[tokio::test(start_paused = true)]
    async fn held_lock_times_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = dir.path().join("config.yaml");
        let _held = ConfigLock::acquire(&config).await.expect("lock should be free");

        let err = ConfigLock::acquire(&config)
            .await
            .expect_err("second acquire should time out");

        assert!(err.to_string().contains("failed to acquire the lock"));
    }
}
