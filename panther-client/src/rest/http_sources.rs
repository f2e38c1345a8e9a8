//! HTTP log source operations

use panther_core::domain::http_source::HttpSource;
use panther_core::dto::http_source::{CreateHttpSourceInput, UpdateHttpSourceInput};
use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;

use super::{RestClient, RestFamily};
use crate::error::Result;
use crate::url::HTTP_SOURCE_PATH;

/// HTTP log sources; creation answers 201
pub const HTTP_SOURCES: RestFamily = RestFamily {
    name: "HTTP source",
    path: HTTP_SOURCE_PATH,
    create_status: StatusCode::CREATED,
    update_status: StatusCode::OK,
    get_status: StatusCode::OK,
    delete_status: StatusCode::NO_CONTENT,
};

impl RestClient {
    /// Create an HTTP log source
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - Label, log types and authentication settings
    ///
    /// # Returns
    /// The created source, with its server-assigned integration id
    ///
    /// # Example
    /// ```no_run
    /// # use panther_client::{ClientConfig, PantherClient};
    /// # use panther_core::dto::http_source::{CreateHttpSourceInput, HttpSourceModifiableAttributes};
    /// # use tokio_util::sync::CancellationToken;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PantherClient::new(&ClientConfig::new("https://api.example.com/v1", "token"))?;
    /// let source = client
    ///     .rest()
    ///     .create_http_source(
    ///         &CancellationToken::new(),
    ///         &CreateHttpSourceInput {
    ///             attributes: HttpSourceModifiableAttributes {
    ///                 integration_label: "webhooks".into(),
    ///                 log_stream_type: "JSON".into(),
    ///                 log_types: vec!["Custom.Webhook".into()],
    ///                 auth_method: "None".into(),
    ///                 ..Default::default()
    ///             },
    ///         },
    ///     )
    ///     .await?;
    /// println!("created {}", source.integration_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_http_source(
        &self,
        cancel: &CancellationToken,
        input: &CreateHttpSourceInput,
    ) -> Result<HttpSource> {
        self.create(cancel, &HTTP_SOURCES, input).await
    }

    /// Update an HTTP log source identified by its integration id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The integration id and the full set of new attributes
    ///
    /// # Returns
    /// The source as stored after the update
    pub async fn update_http_source(
        &self,
        cancel: &CancellationToken,
        input: &UpdateHttpSourceInput,
    ) -> Result<HttpSource> {
        self.update(cancel, &HTTP_SOURCES, input).await
    }

    /// Get an HTTP log source by integration id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The integration id
    ///
    /// # Returns
    /// The source; secret attributes come back empty
    pub async fn get_http_source(&self, cancel: &CancellationToken, id: &str) -> Result<HttpSource> {
        self.get(cancel, &HTTP_SOURCES, id).await
    }

    /// Delete an HTTP log source
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The integration id
    pub async fn delete_http_source(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.delete(cancel, &HTTP_SOURCES, id).await
    }
}
