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

#[cfg(test)]
mod tests;

use ::ucp::cli::RadCliResult;
pub use args::Cmd;

use self::args::EnvironmentTarget;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::config::Workspace;
use crate::parameters;
use crate::validation::{
    require_environment_id, require_recipe_name, require_resource_type, require_scope,
};

fn environment_id(target: &EnvironmentTarget, workspace: &Workspace) -> RadCliResult<String> {
    let scope = require_scope(target.group.as_deref(), workspace)?;
    require_environment_id(target.environment.as_deref(), &scope, workspace)
}

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> RadCliResult<()> {
        let workspace = ctx.workspace()?;
        let client = ctx.client(&workspace)?;

        match self {
            Cmd::List(args) => {
                let environment = environment_id(&args.target, &workspace)?;
                cmds::list(
                    &environment,
                    client.as_ref(),
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Show(args) => {
                let name = require_recipe_name(args.name.as_deref())?;
                let resource_type = require_resource_type(&args.resource_type)?;
                let environment = environment_id(&args.target, &workspace)?;
                cmds::show(
                    &name,
                    &resource_type,
                    &environment,
                    client.as_ref(),
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Register(args) => {
                let recipe = cmds::NewRecipe {
                    name: require_recipe_name(args.name.as_deref())?,
                    resource_type: require_resource_type(&args.resource_type)?,
                    template_kind: args.template_kind,
                    template_path: args.template_path,
                    template_version: args.template_version,
                    parameters: parameters::parse(&args.parameters)?,
                    plain_http: args.plain_http,
                };
                let environment = environment_id(&args.target, &workspace)?;
                cmds::register(recipe, &environment, client.as_ref(), &mut ctx.output_file).await
            }
            Cmd::Unregister(args) => {
                let name = require_recipe_name(args.name.as_deref())?;
                let resource_type = require_resource_type(&args.resource_type)?;
                let environment = environment_id(&args.target, &workspace)?;
                cmds::unregister(
                    &name,
                    &resource_type,
                    &environment,
                    client.as_ref(),
                    &mut ctx.output_file,
                )
                .await
            }
        }
    }
}
