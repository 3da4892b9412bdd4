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

use std::sync::Arc;

use ::ucp::cli::RadCliError;
use clap::{CommandFactory, Parser};
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::config::ConfigHolder;
use crate::connections::KubernetesConnectionFactory;
use crate::prompt::DialoguerPrompter;

mod app;
mod async_write;
mod cfg;
mod config;
mod connections;
mod deploy;
mod env;
mod generate_shell_complete;
mod group;
mod output;
mod parameters;
mod prompt;
mod recipe;
mod recipe_pack;
mod resource;
mod resource_type;
#[cfg(test)]
mod test_support;
mod validation;
mod version;
mod workspace;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let options = CliOptions::parse();
    init_logging(options.debug)?;

    let Some(command) = options.commands else {
        return Ok(CliOptions::command().print_long_help()?);
    };

    // needs nothing but the command definition
    if let CliCommand::GenerateShellComplete(cmd) = &command {
        generate_shell_complete::cmds::generate(cmd.shell)?;
        return Ok(());
    }

    let ctx = RuntimeContext {
        config: RuntimeConfig {
            format: options.output,
            workspace: options.workspace,
        },
        config_holder: ConfigHolder::load(options.config)?,
        connections: Arc::new(KubernetesConnectionFactory::default()),
        prompter: Box::new(DialoguerPrompter),
        output_file: Box::pin(tokio::io::stdout()),
    };

    let result = match command {
        CliCommand::Workspace(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Group(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Env(cmd) => cmd.dispatch(ctx).await,
        CliCommand::App(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Resource(cmd) => cmd.dispatch(ctx).await,
        CliCommand::ResourceType(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Recipe(cmd) => cmd.dispatch(ctx).await,
        CliCommand::RecipePack(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Deploy(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Version(cmd) => cmd.dispatch(ctx).await,
        CliCommand::GenerateShellComplete(_) => Ok(()),
    };

    match result {
        // the user backed out of a prompt
        Err(RadCliError::ExitConsole) => Ok(()),
        other => Ok(other?),
    }
}

fn init_logging(debug: bool) -> eyre::Result<()> {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("rustls=warn".parse()?)
        .add_directive("kube=warn".parse()?);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(fmt::time::LocalTime::rfc_3339()),
        )
        .with(env_filter)
        .try_init()?;
    Ok(())
}
