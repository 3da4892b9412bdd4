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
pub mod packs;


use ::ucp::cli::RadCliResult;
pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::validation::require_scope;

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> RadCliResult<()> {
        let workspace = ctx.workspace()?;

        match self {
            Cmd::Create(args) => {
                let scope = require_scope(args.group.as_deref(), &workspace)?;
                let client = ctx.client(&workspace)?;
                cmds::create(args, &scope, client.as_ref(), &mut ctx.output_file).await
            }
            Cmd::List(args) => {
                let scope = require_scope(args.group.as_deref(), &workspace)?;
                let client = ctx.client_in_scope(&workspace, &scope)?;
                cmds::list(client.as_ref(), &mut ctx.output_file, ctx.config.format).await
            }
            Cmd::Show(args) => {
                let scope = require_scope(args.group.as_deref(), &workspace)?;
                let client = ctx.client(&workspace)?;
                cmds::show(
                    &args.name,
                    &scope,
                    client.as_ref(),
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Delete(args) => {
                let scope = require_scope(args.group.as_deref(), &workspace)?;
                let client = ctx.client_in_scope(&workspace, &scope)?;
                cmds::delete(
                    &args.name,
                    args.yes,
                    &scope,
                    client.as_ref(),
                    ctx.prompter.as_ref(),
                    &mut ctx.output_file,
                )
                .await
            }
        }
    }
}
