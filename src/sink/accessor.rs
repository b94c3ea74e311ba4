//! Lazily built, memoized handle to the applicant sink

use super::client::RestClient;
use super::traits::ApplicantSink;
use crate::config::{ConfigSource, SinkConfig};
use crate::error::ConfigurationError;
use std::sync::Arc;

/// Shared handle to the sink
pub type ClientHandle = Arc<dyn ApplicantSink>;

type Connector = Box<dyn Fn(&SinkConfig) -> Result<ClientHandle, ConfigurationError> + Send + Sync>;

/// Builds the sink client on first use and hands out the same handle afterwards
pub struct ClientAccessor {
    source: Box<dyn ConfigSource>,
    connect: Connector,
    cached: Option<ClientHandle>,
}

impl ClientAccessor {
    /// Accessor that connects with [`RestClient`]
    pub fn new(source: impl ConfigSource + 'static) -> Self {
        Self::with_connector(source, |config| {
            Ok(Arc::new(RestClient::new(config)?) as ClientHandle)
        })
    }

    /// Accessor with a custom way of turning settings into a client
    pub fn with_connector(
        source: impl ConfigSource + 'static,
        connect: impl Fn(&SinkConfig) -> Result<ClientHandle, ConfigurationError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            source: Box::new(source),
            connect: Box::new(connect),
            cached: None,
        }
    }

    /// Return the cached client, building it on the first successful call.
    ///
    /// Failures are not cached; the next call reads the configuration again.
    pub fn get_client(&mut self) -> Result<ClientHandle, ConfigurationError> {
        if let Some(client) = &self.cached {
            return Ok(Arc::clone(client));
        }

        let config = self.source.load().inspect_err(|e| {
            tracing::warn!("Sink configuration unavailable: {e}");
        })?;
        let client = (self.connect)(&config)?;
        tracing::debug!(table = %config.table, "Sink client constructed");

        self.cached = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Whether a client has been built
    pub fn is_ready(&self) -> bool {
        self.cached.is_some()
    }
}
