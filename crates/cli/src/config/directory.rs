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

use std::path::{Path, PathBuf};

use ::ucp::cli::{RadCliError, RadCliResult};
use serde::{Deserialize, Serialize};

/// `.rad/rad.yaml` in a project directory:
///
/// ```yaml
/// workspace:
///   application: todo-app
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(skip)]
    pub filepath: PathBuf,
    #[serde(default)]
    pub workspace: DirectoryWorkspace,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryWorkspace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

impl DirectoryConfig {
    /// Searches `start` and its parents for `.rad/rad.yaml`.
    pub fn find(start: &Path) -> RadCliResult<Option<DirectoryConfig>> {
        for dir in start.ancestors() {
            let candidate = dir.join(".rad").join("rad.yaml");
            if candidate.is_file() {
                return DirectoryConfig::load(&candidate).map(Some);
            }
        }
        Ok(None)
    }

    pub fn load(path: &Path) -> RadCliResult<DirectoryConfig> {
        let text = std::fs::read_to_string(path)?;
        let mut config: DirectoryConfig = serde_yaml::from_str(&text).map_err(|e| {
            RadCliError::GenericError(format!("failed to read '{}': {}", path.display(), e))
        })?;
        config.filepath = path.to_path_buf();
        Ok(config)
    }

    pub fn application(&self) -> Option<&str> {
        self.workspace.application.as_deref().filter(|a| !a.is_empty())
    }
}
