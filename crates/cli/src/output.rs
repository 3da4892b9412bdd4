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

//! Rendering of command results in the `--output` format.

use std::pin::Pin;

use ::ucp::ResourceId;
use ::ucp::cli::{OutputFormat, RadCliResult};
use ::ucp::models::{
    ApplicationResource, EnvironmentRecipe, EnvironmentResource, GenericResource,
    RecipePackResource, RecipeParameter, ResourceGroupResource,
};
use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use tokio::io::AsyncWrite;

use crate::{async_write, async_write_table_as_csv};

pub type OutputFile = Pin<Box<dyn AsyncWrite>>;

pub struct Column<T> {
    pub heading: &'static str,
    pub value: fn(&T) -> String,
}

impl<T> Column<T> {
    pub const fn new(heading: &'static str, value: fn(&T) -> String) -> Column<T> {
        Column { heading, value }
    }
}

/// Objects that can be printed as table rows. Json and yaml output use
/// the serde representation instead.
pub trait Tabular: Serialize + Sized {
    fn columns() -> Vec<Column<Self>>;
}

pub fn table_of<T: Tabular>(items: &[T]) -> Table {
    let columns = T::columns();
    let mut table = Table::new();
    table.set_format(*FORMAT_CLEAN);
    table.set_titles(Row::new(
        columns.iter().map(|c| Cell::new(c.heading)).collect(),
    ));
    for item in items {
        table.add_row(Row::new(
            columns
                .iter()
                .map(|c| Cell::new(&(c.value)(item)))
                .collect(),
        ));
    }
    table
}

pub async fn write_list<T: Tabular>(
    output: &mut OutputFile,
    format: OutputFormat,
    items: &[T],
) -> RadCliResult<()> {
    write_formatted(output, format, items, items).await
}

pub async fn write_object<T: Tabular>(
    output: &mut OutputFile,
    format: OutputFormat,
    item: &T,
) -> RadCliResult<()> {
    write_formatted(output, format, item, std::slice::from_ref(item)).await
}

async fn write_formatted<S, T>(
    output: &mut OutputFile,
    format: OutputFormat,
    value: &S,
    rows: &[T],
) -> RadCliResult<()>
where
    S: Serialize + ?Sized,
    T: Tabular,
{
    match format {
        OutputFormat::Json => {
            async_write!(output, "{}\n", serde_json::to_string_pretty(value)?)?;
        }
        OutputFormat::Yaml => {
            async_write!(output, "{}", serde_yaml::to_string(value)?)?;
        }
        OutputFormat::Csv => {
            let table = table_of(rows);
            async_write_table_as_csv!(output, table)?;
        }
        OutputFormat::Table => {
            let table = table_of(rows);
            async_write!(output, "{}", table)?;
        }
    }
    Ok(())
}

/// The resource group an id lives in, or empty.
pub fn group_of(id: Option<&str>) -> String {
    id.and_then(|id| ResourceId::parse(id).ok())
        .and_then(|id| id.find_scope("resourceGroups").map(str::to_string))
        .unwrap_or_default()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl Tabular for ResourceGroupResource {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("ID", |g| text(&g.id)),
            Column::<Self>::new("NAME", |g| text(&g.name)),
        ]
    }
}

impl Tabular for GenericResource {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("RESOURCE", |r| text(&r.name)),
            Column::<Self>::new("TYPE", |r| text(&r.resource_type)),
            Column::<Self>::new("GROUP", |r| group_of(r.id.as_deref())),
            Column::<Self>::new("STATE", |r| {
                r.provisioning_state().unwrap_or_default().to_string()
            }),
        ]
    }
}

impl Tabular for ApplicationResource {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("RESOURCE", |a| text(&a.name)),
            Column::<Self>::new("TYPE", |a| text(&a.resource_type)),
            Column::<Self>::new("GROUP", |a| group_of(a.id.as_deref())),
            Column::<Self>::new("STATE", |a| text(&a.properties.provisioning_state)),
        ]
    }
}

impl Tabular for EnvironmentResource {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("RESOURCE", |e| text(&e.name)),
            Column::<Self>::new("TYPE", |e| text(&e.resource_type)),
            Column::<Self>::new("GROUP", |e| group_of(e.id.as_deref())),
            Column::<Self>::new("NAMESPACE", |e| {
                e.properties
                    .compute
                    .as_ref()
                    .map(|c| c.namespace.clone())
                    .unwrap_or_default()
            }),
            Column::<Self>::new("STATE", |e| text(&e.properties.provisioning_state)),
        ]
    }
}

impl Tabular for EnvironmentRecipe {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("RECIPE", |r| r.name.clone()),
            Column::<Self>::new("TYPE", |r| r.resource_type.clone()),
            Column::<Self>::new("TEMPLATE KIND", |r| r.template_kind.clone()),
            Column::<Self>::new("TEMPLATE VERSION", |r| r.template_version.clone()),
            Column::<Self>::new("TEMPLATE", |r| r.template_path.clone()),
        ]
    }
}

impl Tabular for RecipeParameter {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("PARAMETER", |p| p.name.clone()),
            Column::<Self>::new("TYPE", |p| p.parameter_type.clone()),
            Column::<Self>::new("DEFAULT VALUE", |p| p.default_value.clone()),
            Column::<Self>::new("MIN", |p| p.min_value.clone()),
            Column::<Self>::new("MAX", |p| p.max_value.clone()),
        ]
    }
}

impl Tabular for RecipePackResource {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("NAME", |p| text(&p.name)),
            Column::<Self>::new("GROUP", |p| group_of(p.id.as_deref())),
            Column::<Self>::new("RESOURCE TYPES", |p| {
                p.properties
                    .recipes
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
        ]
    }
}
