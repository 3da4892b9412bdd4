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

pub mod args;
pub mod cmds;
pub mod manifest;

#[cfg(test)]
mod tests;

use ::ucp::cli::RadCliResult;
pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> RadCliResult<()> {
        let workspace = ctx.workspace()?;
        let client = ctx.client(&workspace)?;

        match self {
            Cmd::List => {
                cmds::list(client.as_ref(), &mut ctx.output_file, ctx.config.format).await
            }
            Cmd::Show(args) => {
                cmds::show(
                    &args.resource_type,
                    client.as_ref(),
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Create(args) => {
                cmds::create(
                    args.type_name.as_deref(),
                    &args.from_file,
                    client.as_ref(),
                    &mut ctx.output_file,
                )
                .await
            }
            Cmd::Delete(args) => {
                cmds::delete(
                    &args.resource_type.resource_type,
                    args.yes,
                    client.as_ref(),
                    ctx.prompter.as_ref(),
                    &mut ctx.output_file,
                )
                .await
            }
        }
    }
}
