//! Concurrent lead delivery to configured sinks.

use std::time::Duration;

use futures_util::future::join_all;
use url::Url;

use crate::config::schema::SinkConfig;
use crate::lead::LeadRecord;
use crate::observability::metrics;

/// Upper bound on how long a submission waits for sink deliveries before the
/// caller is acknowledged. Deliveries still in flight when the ceiling hits
/// are not cancelled; their outcome is only logged.
pub const SETTLE_CEILING: Duration = Duration::from_secs(8);

/// Per-delivery client timeout. Keeps background deliveries from lingering
/// forever after the caller has already been acknowledged.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(30);

/// A downstream endpoint that receives a copy of each lead record.
#[derive(Debug, Clone)]
pub enum Sink {
    /// Generic webhook. Receives the record as a JSON POST.
    Webhook { url: Url },

    /// Leads API. As the webhook, plus a bearer credential when configured.
    Api { url: Url, api_key: Option<String> },
}

impl Sink {
    /// Stable name used in logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Sink::Webhook { .. } => "webhook",
            Sink::Api { .. } => "leads-api",
        }
    }

    fn url(&self) -> &Url {
        match self {
            Sink::Webhook { url } | Sink::Api { url, .. } => url,
        }
    }
}

/// Dispatches lead records to all configured sinks concurrently.
pub struct SinkDispatcher {
    client: reqwest::Client,
    sinks: Vec<Sink>,
}

impl SinkDispatcher {
    /// Build a dispatcher from sink configuration. Zero sinks is valid.
    pub fn from_config(config: &SinkConfig) -> Result<Self, reqwest::Error> {
        let mut sinks = Vec::new();
        if let Some(url) = &config.webhook_url {
            sinks.push(Sink::Webhook { url: url.clone() });
        }
        if let Some(url) = &config.api_url {
            sinks.push(Sink::Api {
                url: url.clone(),
                api_key: config.api_key.clone(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()?;

        Ok(Self { client, sinks })
    }

    /// Number of configured sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Forward a lead record to every configured sink.
    ///
    /// Each sink gets its own spawned task; this method resolves once all
    /// deliveries have settled or [`SETTLE_CEILING`] has elapsed, whichever
    /// comes first. Dropping the join future does not abort the spawned
    /// tasks, so late deliveries still complete and log their outcome.
    pub async fn dispatch(&self, record: &LeadRecord) {
        if self.sinks.is_empty() {
            tracing::warn!("No delivery sinks configured; lead is only recorded in application logs");
            return;
        }

        let handles: Vec<_> = self
            .sinks
            .iter()
            .map(|sink| {
                let client = self.client.clone();
                let sink = sink.clone();
                let record = record.clone();
                tokio::spawn(async move { deliver(client, sink, record).await })
            })
            .collect();

        if tokio::time::timeout(SETTLE_CEILING, join_all(handles))
            .await
            .is_err()
        {
            tracing::warn!(
                ceiling_secs = SETTLE_CEILING.as_secs(),
                "Sink delivery ceiling reached; acknowledging caller before all sinks settled"
            );
        }
    }
}

/// Perform one delivery and log the outcome. Never returns an error: sink
/// failures are a logging concern, not a caller concern.
async fn deliver(client: reqwest::Client, sink: Sink, record: LeadRecord) {
    let mut request = client.post(sink.url().clone()).json(&record);
    if let Sink::Api { api_key: Some(key), .. } = &sink {
        request = request.bearer_auth(key);
    }

    match request.send().await {
        Ok(response) if response.status().is_success() => {
            tracing::info!(
                sink = sink.name(),
                status = %response.status(),
                "Lead forwarded"
            );
            metrics::record_sink_delivery(sink.name(), true);
        }
        Ok(response) => {
            tracing::error!(
                sink = sink.name(),
                status = %response.status(),
                "Sink rejected lead"
            );
            metrics::record_sink_delivery(sink.name(), false);
        }
        Err(error) => {
            tracing::error!(
                sink = sink.name(),
                error = %error,
                "Sink delivery failed"
            );
            metrics::record_sink_delivery(sink.name(), false);
        }
    }
}
