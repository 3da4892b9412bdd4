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

//! Types shared by the `rad` command line: its error type and the output
//! formats every command understands.

use std::fmt;

use crate::UcpError;

pub type RadCliResult<T> = Result<T, RadCliError>;

#[derive(thiserror::Error, Debug)]
pub enum RadCliError {
    #[error("{0}")]
    GenericError(String),
    #[error(transparent)]
    ApiInvocationError(#[from] UcpError),
    // the user pressed Esc or Ctrl-C at a prompt; nothing more is printed
    #[error("exit console")]
    ExitConsole,
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Error while handling yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl RadCliError {
    pub fn generic(message: impl Into<String>) -> RadCliError {
        RadCliError::GenericError(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RadCliError::ApiInvocationError(e) if e.is_not_found())
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}
