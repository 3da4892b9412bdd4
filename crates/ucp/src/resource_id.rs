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

use std::fmt;
use std::str::FromStr;

use crate::UcpError;

const UCP_PREFIX: &str = "ucp:";
const PLANES_SEGMENT: &str = "planes";
const PROVIDERS_SEGMENT: &str = "providers";

/// ScopeSegment is a `type/name` pair in the scope part of an id, for
/// example `resourceGroups/my-group`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeSegment {
    pub scope_type: String,
    pub name: String,
}

/// TypeSegment is a resource type and name after `providers`. The first
/// segment carries the namespace (`Applications.Core/containers`); the
/// name of the last segment may be missing, which makes the id refer to
/// a collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeSegment {
    pub resource_type: String,
    pub name: Option<String>,
}

impl TypeSegment {
    pub fn new(resource_type: &str, name: &str) -> TypeSegment {
        TypeSegment {
            resource_type: resource_type.to_string(),
            name: Some(name.to_string()),
        }
    }
}

/// ResourceId is a parsed UCP or ARM resource id.
///
/// UCP ids look like
/// `/planes/radius/local/resourceGroups/g/providers/Applications.Core/containers/c`,
/// ARM ids like `/subscriptions/s/resourceGroups/g/providers/Microsoft.Foo/bars/b`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId {
    ucp_qualified: bool,
    planes: bool,
    scope_segments: Vec<ScopeSegment>,
    type_segments: Vec<TypeSegment>,
}

impl ResourceId {
    pub fn parse(id: &str) -> Result<ResourceId, UcpError> {
        let invalid = || UcpError::InvalidResourceId(id.to_string());

        let (ucp_qualified, rest) = match id.strip_prefix(UCP_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, id),
        };
        if !rest.starts_with('/') {
            return Err(invalid());
        }

        let trimmed = rest.trim_start_matches('/').trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid());
        }

        let planes = segments
            .first()
            .is_some_and(|s| s.eq_ignore_ascii_case(PLANES_SEGMENT));
        let scope_start = usize::from(planes);
        let providers = segments
            .iter()
            .position(|s| s.eq_ignore_ascii_case(PROVIDERS_SEGMENT));
        let scope_end = providers.unwrap_or(segments.len());

        let scope_part = &segments[scope_start..scope_end];
        if scope_part.len() % 2 != 0 {
            return Err(invalid());
        }
        let scope_segments = scope_part
            .chunks(2)
            .map(|pair| ScopeSegment {
                scope_type: pair[0].to_string(),
                name: pair[1].to_string(),
            })
            .collect();

        let mut type_segments = Vec::new();
        if let Some(providers) = providers {
            let types = &segments[providers + 1..];
            // namespace and type are required
            if types.len() < 2 {
                return Err(invalid());
            }
            if types
                .iter()
                .any(|s| s.eq_ignore_ascii_case(PROVIDERS_SEGMENT))
            {
                return Err(invalid());
            }

            type_segments.push(TypeSegment {
                resource_type: format!("{}/{}", types[0], types[1]),
                name: types.get(2).map(|s| s.to_string()),
            });
            let mut rest = types.get(3..).unwrap_or_default();
            while !rest.is_empty() {
                if type_segments.last().is_some_and(|t| t.name.is_none()) {
                    return Err(invalid());
                }
                type_segments.push(TypeSegment {
                    resource_type: rest[0].to_string(),
                    name: rest.get(1).map(|s| s.to_string()),
                });
                rest = rest.get(2..).unwrap_or_default();
            }
        }

        Ok(ResourceId {
            ucp_qualified,
            planes,
            scope_segments,
            type_segments,
        })
    }

    /// Parses an id that must not contain any resource types.
    pub fn parse_scope(id: &str) -> Result<ResourceId, UcpError> {
        let parsed = ResourceId::parse(id)?;
        if !parsed.is_scope() {
            return Err(UcpError::InvalidResourceId(id.to_string()));
        }
        Ok(parsed)
    }

    pub fn is_scope(&self) -> bool {
        self.type_segments.is_empty()
    }

    pub fn is_collection(&self) -> bool {
        self.type_segments.last().is_some_and(|t| t.name.is_none())
    }

    pub fn is_ucp_qualified(&self) -> bool {
        self.ucp_qualified
    }

    pub fn is_ucp(&self) -> bool {
        self.planes
    }

    pub fn scope_segments(&self) -> &[ScopeSegment] {
        &self.scope_segments
    }

    pub fn type_segments(&self) -> &[TypeSegment] {
        &self.type_segments
    }

    /// Name of the resource, or of the innermost scope for a scope id.
    pub fn name(&self) -> &str {
        match self.type_segments.last() {
            Some(t) => t.name.as_deref().unwrap_or_default(),
            None => self
                .scope_segments
                .last()
                .map(|s| s.name.as_str())
                .unwrap_or_default(),
        }
    }

    /// Fully-qualified resource type, for example
    /// `Applications.Core/containers` or `Applications.Core/containers/ports`.
    pub fn type_name(&self) -> String {
        self.type_segments
            .iter()
            .map(|t| t.resource_type.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The scope part of the id, without any resource types.
    pub fn root_scope(&self) -> String {
        let mut scope = String::new();
        if self.planes {
            scope.push('/');
            scope.push_str(PLANES_SEGMENT);
        }
        for segment in &self.scope_segments {
            scope.push('/');
            scope.push_str(&segment.scope_type);
            scope.push('/');
            scope.push_str(&segment.name);
        }
        if scope.is_empty() {
            scope.push('/');
        }
        scope
    }

    /// Returns the name of the first scope segment whose type matches,
    /// ignoring case. `find_scope("resourceGroups")` gives the group name.
    pub fn find_scope(&self, scope_type: &str) -> Option<&str> {
        self.scope_segments
            .iter()
            .find(|s| s.scope_type.eq_ignore_ascii_case(scope_type))
            .map(|s| s.name.as_str())
    }

    /// Name of the plane instance for UCP ids: `local` for
    /// `/planes/radius/local/...`.
    pub fn plane_name(&self) -> Option<&str> {
        if !self.planes {
            return None;
        }
        self.scope_segments.first().map(|s| s.name.as_str())
    }

    pub fn append(&self, segment: TypeSegment) -> ResourceId {
        let mut id = self.clone();
        id.type_segments.push(segment);
        id
    }

    /// Returns the parent: drops the last type segment, or the last scope
    /// segment for a scope id.
    pub fn truncate(&self) -> ResourceId {
        let mut id = self.clone();
        if id.type_segments.pop().is_none() {
            id.scope_segments.pop();
        }
        id
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ucp_qualified {
            f.write_str(UCP_PREFIX)?;
        }
        let scope = self.root_scope();
        if self.type_segments.is_empty() {
            return f.write_str(&scope);
        }

        f.write_str(scope.trim_end_matches('/'))?;
        f.write_str("/")?;
        f.write_str(PROVIDERS_SEGMENT)?;
        for segment in &self.type_segments {
            write!(f, "/{}", segment.resource_type)?;
            if let Some(name) = &segment.name {
                write!(f, "/{name}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for ResourceId {
    type Err = UcpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceId::parse(s)
    }
}

/// `/planes/radius/<plane>/resourceGroups/<group>`
pub fn resource_group_scope(plane: &str, group: &str) -> String {
    format!("/planes/radius/{plane}/resourceGroups/{group}")
}

/// `<scope>/providers/<type>/<name>`
pub fn resource_id_in_scope(scope: &str, resource_type: &str, name: &str) -> String {
    format!(
        "{}/providers/{}/{}",
        scope.trim_end_matches('/'),
        resource_type,
        name
    )
}
