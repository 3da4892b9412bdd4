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

use ::ucp::cli::{OutputFormat, RadCliResult};
use serde::Serialize;

use crate::output::{Column, OutputFile, Tabular, write_object};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub release: String,
    pub version: String,
    pub commit: String,
}

impl VersionInfo {
    pub fn current() -> VersionInfo {
        let release = env!("CARGO_PKG_VERSION");
        VersionInfo {
            release: release.to_string(),
            // major.minor
            version: release.splitn(3, '.').take(2).collect::<Vec<_>>().join("."),
            // set by the release build
            commit: option_env!("RAD_GIT_COMMIT").unwrap_or("unknown").to_string(),
        }
    }
}

impl Tabular for VersionInfo {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("RELEASE", |v| v.release.clone()),
            Column::<Self>::new("VERSION", |v| v.version.clone()),
            Column::<Self>::new("COMMIT", |v| v.commit.clone()),
        ]
    }
}

pub async fn show_version(output: &mut OutputFile, format: OutputFormat) -> RadCliResult<()> {
    write_object(output, format, &VersionInfo::current()).await
}
