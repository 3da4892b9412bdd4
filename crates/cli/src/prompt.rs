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

use std::io::{ErrorKind, IsTerminal};

use ::ucp::cli::{RadCliError, RadCliResult};
use dialoguer::Select;

const NO: &str = "No";
const YES: &str = "Yes";

/// Interactive questions asked by commands before destructive actions.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Asks a yes/no question, defaulting to no.
    fn confirm(&self, message: &str) -> RadCliResult<bool>;

    /// Returns the index of the chosen item.
    fn select(&self, message: &str, items: &[String]) -> RadCliResult<usize>;
}

#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str) -> RadCliResult<bool> {
        let choice = self.select(message, &[NO.to_string(), YES.to_string()])?;
        Ok(choice == 1)
    }

    fn select(&self, message: &str, items: &[String]) -> RadCliResult<usize> {
        if !std::io::stdin().is_terminal() {
            return Err(RadCliError::generic(
                "--yes is required when not running interactively",
            ));
        }

        Select::new()
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?
            // Esc
            .ok_or(RadCliError::ExitConsole)
    }
}

// Ctrl-C leaves the console the same way Esc does
fn prompt_error(err: dialoguer::Error) -> RadCliError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == ErrorKind::Interrupted => RadCliError::ExitConsole,
        e => RadCliError::GenericError(format!("prompt failed: {e}")),
    }
}

/// Skips the prompt when `--yes` was given.
pub fn confirm_unless(yes: bool, prompter: &dyn Prompter, message: &str) -> RadCliResult<bool> {
    if yes {
        return Ok(true);
    }
    prompter.confirm(message)
}
