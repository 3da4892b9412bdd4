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

//! The user's `~/.rad/config.yaml`.
//!
//! ```yaml
//! workspaces:
//!   default: dev
//!   items:
//!     dev:
//!       connection:
//!         kind: kubernetes
//!         context: kind-dev
//!       environment: /planes/radius/local/resourceGroups/dev/providers/Applications.Core/environments/dev
//!       scope: /planes/radius/local/resourceGroups/dev
//! ```
//!
//! Reads go through figment so `RAD_WORKSPACES_*` variables can override
//! the file (`RAD_WORKSPACES_DEFAULT=prod`). Writes only ever persist what
//! is in the file, under an exclusive lock.

pub mod directory;
mod lock;


use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use ::ucp::ResourceId;
use ::ucp::cli::{RadCliError, RadCliResult};
pub use directory::DirectoryConfig;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::{Deserialize, Serialize};

use self::lock::ConfigLock;

pub const FALLBACK_SCOPE: &str = "/planes/radius/local/resourceGroups/default";
pub const FALLBACK_ENVIRONMENT: &str =
    "/planes/radius/local/resourceGroups/default/providers/Applications.Core/environments/default";

const ENV_PREFIX: &str = "RAD_WORKSPACES_";

/// Default location: `$HOME/.rad/config.yaml`.
pub fn default_config_path() -> RadCliResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".rad").join("config.yaml"))
        .ok_or_else(|| RadCliError::generic("could not find the user's home directory"))
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub workspaces: WorkspaceSection,
    // sections owned by other commands, kept as-is on write
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub items: BTreeMap<String, Workspace>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkspaceSource {
    #[default]
    UserConfig,
    Fallback,
}

impl fmt::Display for WorkspaceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceSource::UserConfig => f.write_str("userconfig"),
            WorkspaceSource::Fallback => f.write_str("fallback"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ucp: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Connection {
    Kubernetes {
        // empty means the kubeconfig's current context
        #[serde(default)]
        context: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overrides: Option<ConnectionOverrides>,
    },
}

impl Default for Connection {
    fn default() -> Connection {
        Connection::Kubernetes {
            context: String::new(),
            overrides: None,
        }
    }
}

impl Connection {
    pub fn kubernetes(context: &str) -> Connection {
        Connection::Kubernetes {
            context: context.to_string(),
            overrides: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub connection: Connection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_application: Option<String>,
    #[serde(skip)]
    pub source: WorkspaceSource,
}

impl Workspace {
    /// The workspace used when the config names none: the current kube
    /// context with the `default` group and environment.
    pub fn fallback() -> Workspace {
        Workspace {
            name: String::new(),
            connection: Connection::default(),
            environment: Some(FALLBACK_ENVIRONMENT.to_string()),
            scope: Some(FALLBACK_SCOPE.to_string()),
            default_application: None,
            source: WorkspaceSource::Fallback,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.source == WorkspaceSource::UserConfig
    }

    pub fn environment_name(&self) -> RadCliResult<Option<String>> {
        match &self.environment {
            Some(id) if !id.is_empty() => Ok(Some(ResourceId::parse(id)?.name().to_string())),
            _ => Ok(None),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "default"
        } else {
            &self.name
        }
    }
}

impl WorkspaceSection {
    /// Looks up a workspace by name, or the default one when no name is
    /// given. `Ok(None)` means nothing is configured.
    pub fn get_workspace(&self, name: Option<&str>) -> RadCliResult<Option<Workspace>> {
        let name = match name.filter(|n| !n.is_empty()) {
            Some(name) => name.to_lowercase(),
            None => match self.default.as_deref().filter(|n| !n.is_empty()) {
                Some(name) => name.to_lowercase(),
                None => return Ok(None),
            },
        };

        match self.items.get(&name) {
            Some(ws) => {
                let mut ws = ws.clone();
                ws.name = name;
                ws.source = WorkspaceSource::UserConfig;
                Ok(Some(ws))
            }
            None => Err(RadCliError::GenericError(format!(
                "the workspace '{name}' does not exist. use `rad init` or `rad workspace create` and try again"
            ))),
        }
    }

    // lowercases names; the last spelling wins on a clash
    fn fold_names(self) -> WorkspaceSection {
        let mut items = BTreeMap::new();
        for (name, mut ws) in self.items {
            let folded = name.to_lowercase();
            if items.contains_key(&folded) {
                tracing::warn!(workspace = %folded, "workspace is defined more than once in the config file");
            }
            ws.name = folded.clone();
            ws.source = WorkspaceSource::UserConfig;
            items.insert(folded, ws);
        }
        WorkspaceSection {
            default: self.default.map(|d| d.to_lowercase()),
            items,
        }
    }

    fn check_duplicates(&self) -> RadCliResult<()> {
        let mut seen = BTreeMap::new();
        for name in self.items.keys() {
            if let Some(other) = seen.insert(name.to_lowercase(), name) {
                return Err(RadCliError::GenericError(format!(
                    "the config file contains workspaces '{other}' and '{name}' which differ only in case. Workspace names are case-insensitive, remove one of them and try again"
                )));
            }
        }
        Ok(())
    }

    fn validate(&self) -> RadCliResult<()> {
        if let Some(default) = &self.default {
            if !self.items.contains_key(default) {
                return Err(RadCliError::GenericError(format!(
                    "the default workspace '{default}' does not exist"
                )));
            }
        }
        for ws in self.items.values() {
            if let Some(scope) = &ws.scope {
                ResourceId::parse_scope(scope)?;
            }
            if let Some(environment) = &ws.environment {
                ResourceId::parse(environment)?;
            }
        }
        Ok(())
    }
}

/// Everything a command needs to know about local configuration.
#[derive(Clone, Debug, Default)]
pub struct ConfigHolder {
    pub path: PathBuf,
    pub config: ConfigFile,
    pub directory_config: Option<DirectoryConfig>,
}

impl ConfigHolder {
    pub fn load(path: Option<PathBuf>) -> RadCliResult<ConfigHolder> {
        let path = match path {
            Some(path) => path,
            None => default_config_path()?,
        };
        let config = load(&path)?;
        let directory_config = std::env::current_dir()
            .ok()
            .map(|dir| DirectoryConfig::find(&dir))
            .transpose()?
            .flatten();

        Ok(ConfigHolder {
            path,
            config,
            directory_config,
        })
    }
}

/// Reads the config file with environment overrides. A missing file is an
/// empty config.
pub fn load(path: &Path) -> RadCliResult<ConfigFile> {
    let config: ConfigFile = Figment::new()
        .merge(Yaml::file(path))
        .merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .map(|key| format!("workspaces.{key}").into()),
        )
        .extract()
        .map_err(|e| {
            RadCliError::GenericError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

    Ok(ConfigFile {
        workspaces: config.workspaces.fold_names(),
        other: config.other,
    })
}

// the file only, no environment overrides
fn read_file(path: &Path) -> RadCliResult<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(text) if text.trim().is_empty() => Ok(ConfigFile::default()),
        Ok(text) => Ok(serde_yaml::from_str(&text)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(RadCliError::IOError(e)),
    }
}

fn write_file(path: &Path, config: &ConfigFile) -> RadCliResult<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let contents = serde_yaml::to_string(config)?;
    let mut file = tempfile::NamedTempFile::new_in(&dir)?;
    file.write_all(contents.as_bytes())?;
    file.persist(path).map_err(|e| RadCliError::IOError(e.error))?;
    Ok(())
}

/// Applies `edit` to the workspace section of the file at `path` and writes
/// the result back. The file is re-read under the lock so concurrent edits
/// are not lost.
pub async fn edit_workspaces<F>(path: &Path, edit: F) -> RadCliResult<ConfigFile>
where
    F: FnOnce(&mut WorkspaceSection) -> RadCliResult<()>,
{
    let _lock = ConfigLock::acquire(path).await?;

    let config = read_file(path)?;
    config.workspaces.check_duplicates()?;

    let mut section = config.workspaces.fold_names();
    edit(&mut section)?;
    section.validate()?;

    let config = ConfigFile {
        workspaces: section,
        other: config.other,
    };
    write_file(path, &config)?;
    Ok(config)
}
