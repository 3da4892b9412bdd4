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

use async_trait::async_trait;
use mockall::automock;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{
    ApiVersionResource, ApplicationResource, EnvironmentResource, ErrorResponse, GenericResource,
    LocationResource, RecipeGetMetadataRequest, RecipeGetMetadataResponse, RecipePackResource,
    ResourceGroupResource, ResourceList, ResourceProviderResource, ResourceProviderSummary,
    ResourceTypeResource,
};
use crate::poller::{self, PollTarget};
use crate::resource_id::{ResourceId, resource_id_in_scope};
use crate::resource_types::{
    APPLICATIONS, ENVIRONMENTS, RECIPE_PACKS, RESOURCE_TYPES_LIST, UCP_API_VERSION,
    api_version_for,
};
use crate::UcpError;

// trait to invoke REST methods on the control plane. `name_or_id` arguments
// accept either a bare name, resolved against the client's root scope, or
// a full resource id.
#[automock]
#[async_trait]
pub trait ManagementClient: std::fmt::Debug + Send + Sync {
    // generic resources
    async fn list_resources_of_type(
        &self,
        resource_type: &str,
    ) -> Result<Vec<GenericResource>, UcpError>;
    async fn list_resources_of_type_in_application(
        &self,
        application: &str,
        resource_type: &str,
    ) -> Result<Vec<GenericResource>, UcpError>;
    async fn list_resources_of_type_in_environment(
        &self,
        environment: &str,
        resource_type: &str,
    ) -> Result<Vec<GenericResource>, UcpError>;
    async fn list_resources_in_application(
        &self,
        application: &str,
    ) -> Result<Vec<GenericResource>, UcpError>;
    async fn list_resources_in_environment(
        &self,
        environment: &str,
    ) -> Result<Vec<GenericResource>, UcpError>;
    async fn list_resources_in_resource_group(
        &self,
        plane: &str,
        group: &str,
    ) -> Result<Vec<GenericResource>, UcpError>;
    async fn get_resource(
        &self,
        resource_type: &str,
        name_or_id: &str,
    ) -> Result<GenericResource, UcpError>;
    async fn create_or_update_resource(
        &self,
        resource_type: &str,
        name_or_id: &str,
        resource: &GenericResource,
    ) -> Result<GenericResource, UcpError>;
    async fn delete_resource(
        &self,
        resource_type: &str,
        name_or_id: &str,
    ) -> Result<bool, UcpError>;

    // applications
    async fn list_applications(&self) -> Result<Vec<ApplicationResource>, UcpError>;
    async fn get_application(&self, name_or_id: &str) -> Result<ApplicationResource, UcpError>;
    async fn create_or_update_application(
        &self,
        name_or_id: &str,
        resource: &ApplicationResource,
    ) -> Result<(), UcpError>;
    async fn create_application_if_not_found(
        &self,
        name_or_id: &str,
        resource: &ApplicationResource,
    ) -> Result<(), UcpError>;
    async fn delete_application(&self, name_or_id: &str) -> Result<bool, UcpError>;

    // environments
    async fn list_environments(&self) -> Result<Vec<EnvironmentResource>, UcpError>;
    async fn list_environments_all(&self) -> Result<Vec<EnvironmentResource>, UcpError>;
    async fn get_environment(&self, name_or_id: &str) -> Result<EnvironmentResource, UcpError>;
    async fn get_recipe_metadata(
        &self,
        environment: &str,
        request: &RecipeGetMetadataRequest,
    ) -> Result<RecipeGetMetadataResponse, UcpError>;
    async fn create_or_update_environment(
        &self,
        name_or_id: &str,
        resource: &EnvironmentResource,
    ) -> Result<(), UcpError>;
    async fn delete_environment(&self, name_or_id: &str) -> Result<bool, UcpError>;

    // resource groups
    async fn list_resource_groups(
        &self,
        plane: &str,
    ) -> Result<Vec<ResourceGroupResource>, UcpError>;
    async fn get_resource_group(
        &self,
        plane: &str,
        name: &str,
    ) -> Result<ResourceGroupResource, UcpError>;
    async fn create_or_update_resource_group(
        &self,
        plane: &str,
        name: &str,
        resource: &ResourceGroupResource,
    ) -> Result<(), UcpError>;
    async fn delete_resource_group(&self, plane: &str, name: &str) -> Result<bool, UcpError>;

    // resource providers and resource types
    async fn list_resource_provider_summaries(
        &self,
        plane: &str,
    ) -> Result<Vec<ResourceProviderSummary>, UcpError>;
    async fn get_resource_provider_summary(
        &self,
        plane: &str,
        name: &str,
    ) -> Result<ResourceProviderSummary, UcpError>;
    async fn create_or_update_resource_provider(
        &self,
        plane: &str,
        name: &str,
        resource: &ResourceProviderResource,
    ) -> Result<ResourceProviderResource, UcpError>;
    async fn delete_resource_provider(&self, plane: &str, name: &str) -> Result<bool, UcpError>;
    async fn create_or_update_resource_type(
        &self,
        plane: &str,
        provider: &str,
        type_name: &str,
        resource: &ResourceTypeResource,
    ) -> Result<ResourceTypeResource, UcpError>;
    async fn delete_resource_type(
        &self,
        plane: &str,
        provider: &str,
        type_name: &str,
    ) -> Result<bool, UcpError>;
    async fn create_or_update_api_version(
        &self,
        plane: &str,
        provider: &str,
        type_name: &str,
        version: &str,
        resource: &ApiVersionResource,
    ) -> Result<ApiVersionResource, UcpError>;
    async fn create_or_update_location(
        &self,
        plane: &str,
        provider: &str,
        location: &str,
        resource: &LocationResource,
    ) -> Result<LocationResource, UcpError>;

    // recipe packs
    async fn list_recipe_packs(&self) -> Result<Vec<RecipePackResource>, UcpError>;
    async fn get_recipe_pack(&self, name_or_id: &str) -> Result<RecipePackResource, UcpError>;
    async fn create_or_update_recipe_pack(
        &self,
        name_or_id: &str,
        resource: &RecipePackResource,
    ) -> Result<RecipePackResource, UcpError>;
    async fn delete_recipe_pack(&self, name_or_id: &str) -> Result<bool, UcpError>;
}

#[derive(Debug)]
pub struct UcpManagementClient {
    config: crate::Config,
    http_client: reqwest::Client,
}

impl UcpManagementClient {
    pub fn new_with_config(config: &crate::Config) -> UcpManagementClient {
        UcpManagementClient {
            config: config.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn root_scope(&self) -> &str {
        &self.config.root_scope
    }

    // <root scope>/providers/<type>/<name> unless it already is an id
    fn qualify(&self, resource_type: &str, name_or_id: &str) -> String {
        if name_or_id.starts_with('/') {
            name_or_id.to_string()
        } else {
            resource_id_in_scope(&self.config.root_scope, resource_type, name_or_id)
        }
    }

    fn collection(&self, scope: &str, resource_type: &str) -> String {
        format!("{}/providers/{}", scope.trim_end_matches('/'), resource_type)
    }

    // /planes/radius/<plane>
    fn plane_scope(&self, plane: &str) -> String {
        format!("/planes/radius/{plane}")
    }

    fn provider_id(&self, plane: &str, name: &str) -> String {
        format!(
            "{}/providers/System.Resources/resourceProviders/{}",
            self.plane_scope(plane),
            name
        )
    }

    fn url(&self, id: &str, api_version: &str) -> String {
        format!(
            "{}{}?api-version={}",
            self.config.base_url.trim_end_matches('/'),
            id,
            api_version
        )
    }

    async fn get<T: DeserializeOwned>(&self, id: &str, api_version: &str) -> Result<T, UcpError> {
        let url = self.url(id, api_version);
        tracing::debug!(url = %url, "GET");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &text));
        }
        parse_body(&text)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        api_version: &str,
    ) -> Result<Vec<T>, UcpError> {
        let mut results = Vec::new();
        let mut next = Some(self.url(collection_id, api_version));

        while let Some(url) = next.take() {
            tracing::debug!(url = %url, "GET (list)");
            let response = self.http_client.get(&url).send().await?;
            let status = response.status();
            let text = response.text().await?;

            if !status.is_success() {
                return Err(error_from_response(status, &text));
            }

            let page: ResourceList<T> = parse_body(&text)?;
            results.extend(page.value);
            next = page.next_link.filter(|link| !link.is_empty());
        }

        Ok(results)
    }

    // PUT, wait for the operation when asked to, then return the final
    // state of the resource
    async fn put<B, T>(&self, id: &str, api_version: &str, body: &B) -> Result<T, UcpError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(id, api_version);
        tracing::debug!(url = %url, "PUT");

        let body = serde_json::to_string(body)
            .map_err(|e| UcpError::Serde(format!("Error Serializing request: {}", e)))?;
        let response = self
            .http_client
            .put(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let target = PollTarget::from_response(status, response.headers());
        let delay = poller::retry_after(response.headers());
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &text));
        }

        match target {
            Some(target) => {
                poller::wait_for_completion(&self.http_client, target, delay).await?;
                self.get(id, api_version).await
            }
            None if text.trim().is_empty() => self.get(id, api_version).await,
            None => parse_body(&text),
        }
    }

    async fn post<B, T>(&self, id: &str, api_version: &str, body: &B) -> Result<T, UcpError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(id, api_version);
        tracing::debug!(url = %url, "POST");

        let response = self.http_client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &text));
        }
        parse_body(&text)
    }

    // Ok(false) when there was nothing to delete
    async fn delete(&self, id: &str, api_version: &str) -> Result<bool, UcpError> {
        let url = self.url(id, api_version);
        tracing::debug!(url = %url, "DELETE");

        let response = self.http_client.delete(&url).send().await?;
        let status = response.status();
        let target = PollTarget::from_response(status, response.headers());
        let delay = poller::retry_after(response.headers());
        let text = response.text().await?;

        match status {
            StatusCode::NOT_FOUND | StatusCode::NO_CONTENT => Ok(false),
            s if !s.is_success() => Err(error_from_response(s, &text)),
            _ => {
                if let Some(target) = target {
                    poller::wait_for_completion(&self.http_client, target, delay).await?;
                }
                Ok(true)
            }
        }
    }

    async fn filter_by_membership(
        &self,
        property: &str,
        owner: &str,
        resource_type: &str,
    ) -> Result<Vec<GenericResource>, UcpError> {
        let owner_name = name_of(owner);
        Ok(self
            .list_resources_of_type(resource_type)
            .await?
            .into_iter()
            .filter(|r| r.belongs_to(property, &owner_name))
            .collect())
    }
}

// implementation of the trait for the control plane REST API
#[async_trait]
impl ManagementClient for UcpManagementClient {
    async fn list_resources_of_type(
        &self,
        resource_type: &str,
    ) -> Result<Vec<GenericResource>, UcpError> {
        let collection = self.collection(&self.config.root_scope, resource_type);
        self.list(&collection, api_version_for(resource_type)).await
    }

    async fn list_resources_of_type_in_application(
        &self,
        application: &str,
        resource_type: &str,
    ) -> Result<Vec<GenericResource>, UcpError> {
        self.filter_by_membership("application", application, resource_type)
            .await
    }

    async fn list_resources_of_type_in_environment(
        &self,
        environment: &str,
        resource_type: &str,
    ) -> Result<Vec<GenericResource>, UcpError> {
        self.filter_by_membership("environment", environment, resource_type)
            .await
    }

    async fn list_resources_in_application(
        &self,
        application: &str,
    ) -> Result<Vec<GenericResource>, UcpError> {
        let mut results = Vec::new();
        for resource_type in RESOURCE_TYPES_LIST {
            results.extend(
                self.list_resources_of_type_in_application(application, resource_type)
                    .await?,
            );
        }
        Ok(results)
    }

    async fn list_resources_in_environment(
        &self,
        environment: &str,
    ) -> Result<Vec<GenericResource>, UcpError> {
        let mut results = Vec::new();
        for resource_type in RESOURCE_TYPES_LIST {
            results.extend(
                self.list_resources_of_type_in_environment(environment, resource_type)
                    .await?,
            );
        }
        Ok(results)
    }

    async fn list_resources_in_resource_group(
        &self,
        plane: &str,
        group: &str,
    ) -> Result<Vec<GenericResource>, UcpError> {
        let collection = format!("{}/resourceGroups/{}/resources", self.plane_scope(plane), group);
        self.list(&collection, UCP_API_VERSION).await
    }

    async fn get_resource(
        &self,
        resource_type: &str,
        name_or_id: &str,
    ) -> Result<GenericResource, UcpError> {
        let id = self.qualify(resource_type, name_or_id);
        self.get(&id, api_version_for(resource_type)).await
    }

    async fn create_or_update_resource(
        &self,
        resource_type: &str,
        name_or_id: &str,
        resource: &GenericResource,
    ) -> Result<GenericResource, UcpError> {
        let id = self.qualify(resource_type, name_or_id);
        self.put(&id, api_version_for(resource_type), resource).await
    }

    async fn delete_resource(
        &self,
        resource_type: &str,
        name_or_id: &str,
    ) -> Result<bool, UcpError> {
        let id = self.qualify(resource_type, name_or_id);
        self.delete(&id, api_version_for(resource_type)).await
    }

    async fn list_applications(&self) -> Result<Vec<ApplicationResource>, UcpError> {
        let collection = self.collection(&self.config.root_scope, APPLICATIONS);
        self.list(&collection, api_version_for(APPLICATIONS)).await
    }

    async fn get_application(&self, name_or_id: &str) -> Result<ApplicationResource, UcpError> {
        let id = self.qualify(APPLICATIONS, name_or_id);
        self.get(&id, api_version_for(APPLICATIONS)).await
    }

    async fn create_or_update_application(
        &self,
        name_or_id: &str,
        resource: &ApplicationResource,
    ) -> Result<(), UcpError> {
        let id = self.qualify(APPLICATIONS, name_or_id);
        let _: ApplicationResource = self.put(&id, api_version_for(APPLICATIONS), resource).await?;
        Ok(())
    }

    async fn create_application_if_not_found(
        &self,
        name_or_id: &str,
        resource: &ApplicationResource,
    ) -> Result<(), UcpError> {
        match self.get_application(name_or_id).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                self.create_or_update_application(name_or_id, resource)
                    .await
            }
            Err(e) => Err(e),
        }
    }

    async fn delete_application(&self, name_or_id: &str) -> Result<bool, UcpError> {
        // resources first; the application cannot go while they exist
        for resource in self.list_resources_in_application(name_or_id).await? {
            let (Some(id), Some(resource_type)) = (&resource.id, &resource.resource_type) else {
                continue;
            };
            match self.delete_resource(resource_type, id).await {
                Ok(_) => {}
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }

        let id = self.qualify(APPLICATIONS, name_or_id);
        self.delete(&id, api_version_for(APPLICATIONS)).await
    }

    async fn list_environments(&self) -> Result<Vec<EnvironmentResource>, UcpError> {
        let collection = self.collection(&self.config.root_scope, ENVIRONMENTS);
        self.list(&collection, api_version_for(ENVIRONMENTS)).await
    }

    async fn list_environments_all(&self) -> Result<Vec<EnvironmentResource>, UcpError> {
        let scope = ResourceId::parse(&self.config.root_scope)?;
        let plane = match scope.plane_name() {
            Some(plane) => self.plane_scope(plane),
            None => scope.root_scope(),
        };
        let collection = self.collection(&plane, ENVIRONMENTS);
        self.list(&collection, api_version_for(ENVIRONMENTS)).await
    }

    async fn get_environment(&self, name_or_id: &str) -> Result<EnvironmentResource, UcpError> {
        let id = self.qualify(ENVIRONMENTS, name_or_id);
        self.get(&id, api_version_for(ENVIRONMENTS)).await
    }

    async fn get_recipe_metadata(
        &self,
        environment: &str,
        request: &RecipeGetMetadataRequest,
    ) -> Result<RecipeGetMetadataResponse, UcpError> {
        let id = format!("{}/getMetadata", self.qualify(ENVIRONMENTS, environment));
        self.post(&id, api_version_for(ENVIRONMENTS), request).await
    }

    async fn create_or_update_environment(
        &self,
        name_or_id: &str,
        resource: &EnvironmentResource,
    ) -> Result<(), UcpError> {
        let id = self.qualify(ENVIRONMENTS, name_or_id);
        let _: EnvironmentResource = self.put(&id, api_version_for(ENVIRONMENTS), resource).await?;
        Ok(())
    }

    async fn delete_environment(&self, name_or_id: &str) -> Result<bool, UcpError> {
        let environment = name_of(name_or_id);
        for application in self.list_applications().await? {
            let in_environment = ResourceId::parse(&application.properties.environment)
                .is_ok_and(|id| id.name().eq_ignore_ascii_case(&environment));
            if !in_environment {
                continue;
            }
            if let Some(id) = &application.id {
                self.delete_application(id).await?;
            }
        }

        let id = self.qualify(ENVIRONMENTS, name_or_id);
        self.delete(&id, api_version_for(ENVIRONMENTS)).await
    }

    async fn list_resource_groups(
        &self,
        plane: &str,
    ) -> Result<Vec<ResourceGroupResource>, UcpError> {
        let collection = format!("{}/resourceGroups", self.plane_scope(plane));
        self.list(&collection, UCP_API_VERSION).await
    }

    async fn get_resource_group(
        &self,
        plane: &str,
        name: &str,
    ) -> Result<ResourceGroupResource, UcpError> {
        let id = format!("{}/resourceGroups/{}", self.plane_scope(plane), name);
        self.get(&id, UCP_API_VERSION).await
    }

    async fn create_or_update_resource_group(
        &self,
        plane: &str,
        name: &str,
        resource: &ResourceGroupResource,
    ) -> Result<(), UcpError> {
        let id = format!("{}/resourceGroups/{}", self.plane_scope(plane), name);
        let _: ResourceGroupResource = self.put(&id, UCP_API_VERSION, resource).await?;
        Ok(())
    }

    async fn delete_resource_group(&self, plane: &str, name: &str) -> Result<bool, UcpError> {
        let id = format!("{}/resourceGroups/{}", self.plane_scope(plane), name);
        self.delete(&id, UCP_API_VERSION).await
    }

    async fn list_resource_provider_summaries(
        &self,
        plane: &str,
    ) -> Result<Vec<ResourceProviderSummary>, UcpError> {
        let collection = format!(
            "{}/providers/System.Resources/resourceProviderSummaries",
            self.plane_scope(plane)
        );
        self.list(&collection, UCP_API_VERSION).await
    }

    async fn get_resource_provider_summary(
        &self,
        plane: &str,
        name: &str,
    ) -> Result<ResourceProviderSummary, UcpError> {
        let id = format!(
            "{}/providers/System.Resources/resourceProviderSummaries/{}",
            self.plane_scope(plane),
            name
        );
        self.get(&id, UCP_API_VERSION).await
    }

    async fn create_or_update_resource_provider(
        &self,
        plane: &str,
        name: &str,
        resource: &ResourceProviderResource,
    ) -> Result<ResourceProviderResource, UcpError> {
        self.put(&self.provider_id(plane, name), UCP_API_VERSION, resource)
            .await
    }

    async fn delete_resource_provider(&self, plane: &str, name: &str) -> Result<bool, UcpError> {
        self.delete(&self.provider_id(plane, name), UCP_API_VERSION)
            .await
    }

    async fn create_or_update_resource_type(
        &self,
        plane: &str,
        provider: &str,
        type_name: &str,
        resource: &ResourceTypeResource,
    ) -> Result<ResourceTypeResource, UcpError> {
        let id = format!("{}/resourceTypes/{}", self.provider_id(plane, provider), type_name);
        self.put(&id, UCP_API_VERSION, resource).await
    }

    async fn delete_resource_type(
        &self,
        plane: &str,
        provider: &str,
        type_name: &str,
    ) -> Result<bool, UcpError> {
        let id = format!("{}/resourceTypes/{}", self.provider_id(plane, provider), type_name);
        self.delete(&id, UCP_API_VERSION).await
    }

    async fn create_or_update_api_version(
        &self,
        plane: &str,
        provider: &str,
        type_name: &str,
        version: &str,
        resource: &ApiVersionResource,
    ) -> Result<ApiVersionResource, UcpError> {
        let id = format!(
            "{}/resourceTypes/{}/apiVersions/{}",
            self.provider_id(plane, provider),
            type_name,
            version
        );
        self.put(&id, UCP_API_VERSION, resource).await
    }

    async fn create_or_update_location(
        &self,
        plane: &str,
        provider: &str,
        location: &str,
        resource: &LocationResource,
    ) -> Result<LocationResource, UcpError> {
        let id = format!("{}/locations/{}", self.provider_id(plane, provider), location);
        self.put(&id, UCP_API_VERSION, resource).await
    }

    async fn list_recipe_packs(&self) -> Result<Vec<RecipePackResource>, UcpError> {
        let collection = self.collection(&self.config.root_scope, RECIPE_PACKS);
        self.list(&collection, api_version_for(RECIPE_PACKS)).await
    }

    async fn get_recipe_pack(&self, name_or_id: &str) -> Result<RecipePackResource, UcpError> {
        let id = self.qualify(RECIPE_PACKS, name_or_id);
        self.get(&id, api_version_for(RECIPE_PACKS)).await
    }

    async fn create_or_update_recipe_pack(
        &self,
        name_or_id: &str,
        resource: &RecipePackResource,
    ) -> Result<RecipePackResource, UcpError> {
        let id = self.qualify(RECIPE_PACKS, name_or_id);
        self.put(&id, api_version_for(RECIPE_PACKS), resource).await
    }

    async fn delete_recipe_pack(&self, name_or_id: &str) -> Result<bool, UcpError> {
        let id = self.qualify(RECIPE_PACKS, name_or_id);
        self.delete(&id, api_version_for(RECIPE_PACKS)).await
    }
}

// name of a resource given either its name or its id
fn name_of(name_or_id: &str) -> String {
    if name_or_id.starts_with('/') {
        if let Ok(id) = ResourceId::parse(name_or_id) {
            return id.name().to_string();
        }
    }
    name_or_id.to_string()
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, UcpError> {
    serde_json::from_str(text)
        .map_err(|e| UcpError::Serde(format!("Error mapping response body: {}", e)))
}

/// Builds a `UcpError::Response` out of a non-success response, reading the
/// ARM error envelope when there is one.
pub(crate) fn error_from_response(status: StatusCode, text: &str) -> UcpError {
    let details = serde_json::from_str::<ErrorResponse>(text)
        .map(|r| r.error)
        .unwrap_or_default();

    let code = if details.code.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown")
            .replace(' ', "")
    } else {
        details.code
    };
    let message = if details.message.is_empty() {
        format!("control plane returned status code {} and message {}", status.as_u16(), text)
    } else {
        details.message
    };

    UcpError::Response {
        status: status.as_u16(),
        code,
        message,
    }
}
