use super::{namespace_path, to_body};
use crate::client::validation::{validate_namespace_name, validate_namespace_shape};
use crate::client::{MoorchehClient, RequestSpec};
use crate::types::namespace::CreateNamespaceRequest;
use crate::types::{CreateNamespaceResponse, NamespaceList, NamespaceType};
use crate::Result;
use tracing::{debug, info};

/// Namespace management.
#[derive(Debug, Clone, Copy)]
pub struct Namespaces<'a> {
    client: &'a MoorchehClient,
}

impl<'a> Namespaces<'a> {
    pub(crate) fn new(client: &'a MoorchehClient) -> Self {
        Self { client }
    }

    /// Creates a namespace.
    ///
    /// `vector_dimension` is required (and positive) for vector namespaces and
    /// must be `None` for text namespaces. An existing name fails with
    /// [`Error::Conflict`](crate::Error::Conflict).
    pub async fn create(
        &self,
        namespace_name: &str,
        namespace_type: NamespaceType,
        vector_dimension: Option<u32>,
    ) -> Result<CreateNamespaceResponse> {
        validate_namespace_name("namespace_name", namespace_name)?;
        validate_namespace_shape(namespace_type, vector_dimension)?;

        info!(
            namespace = namespace_name,
            namespace_type = namespace_type.as_str(),
            "creating namespace"
        );
        let body = to_body(&CreateNamespaceRequest {
            namespace_name,
            namespace_type,
            vector_dimension,
        })?;

        let created: CreateNamespaceResponse = self
            .client
            .execute_json(RequestSpec::post("/namespaces", 201).with_body(body))
            .await?;

        info!(namespace = namespace_name, "namespace created");
        Ok(created)
    }

    /// Deletes a namespace and everything in it. Irreversible.
    pub async fn delete(&self, namespace_name: &str) -> Result<()> {
        validate_namespace_name("namespace_name", namespace_name)?;

        info!(namespace = namespace_name, "deleting namespace");
        self.client
            .execute(RequestSpec::delete(namespace_path(namespace_name, ""), 200))
            .await?;
        info!(namespace = namespace_name, "namespace deleted");
        Ok(())
    }

    /// Lists all namespaces visible to the API key.
    pub async fn list(&self) -> Result<NamespaceList> {
        let listing: NamespaceList = self
            .client
            .execute_json(RequestSpec::get("/namespaces", 200))
            .await?;

        info!(count = listing.namespaces.len(), "listed namespaces");
        debug!(execution_time = ?listing.execution_time, "list namespaces timing");
        Ok(listing)
    }
}
