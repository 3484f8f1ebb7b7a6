//! Provider HTTP clients and the best-effort fan-out

use std::sync::OnceLock;

use tokio::task::JoinSet;

use crate::providers::ProviderDescriptor;
use crate::state::{ProviderKind, ProviderReport};

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Fetch one provider. Transport errors, non-success statuses, and
/// undecodable bodies all surface as `reqwest::Error`.
async fn fetch_provider(descriptor: &ProviderDescriptor) -> Result<ProviderReport, reqwest::Error> {
    let response = http_client()
        .get(&descriptor.url)
        .send()
        .await?
        .error_for_status()?;

    let report = match descriptor.provider {
        ProviderKind::OpenWeatherMap => ProviderReport::OpenWeatherMap(response.json().await?),
        ProviderKind::WeatherApi => ProviderReport::WeatherApi(response.json().await?),
        ProviderKind::WeatherStack => ProviderReport::WeatherStack(response.json().await?),
    };
    Ok(report)
}

/// Query every provider concurrently and merge whatever succeeded, in
/// whatever order the requests settle. Failures are logged and dropped; the
/// merge itself never fails, so an empty result is a legitimate outcome.
pub async fn fetch_all(descriptors: &[ProviderDescriptor]) -> Vec<ProviderReport> {
    let mut join_set = JoinSet::new();
    for descriptor in descriptors {
        let descriptor = descriptor.clone();
        join_set.spawn(async move { (descriptor.provider, fetch_provider(&descriptor).await) });
    }

    // Barrier: every provider settles before any output is produced
    let mut reports = Vec::with_capacity(descriptors.len());
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((_, Ok(report))) => reports.push(report),
            Ok((provider, Err(error))) => {
                tracing::warn!("Error fetching from {}: {}", provider.label(), error);
            }
            Err(error) => {
                tracing::warn!("Provider fetch task failed: {}", error);
            }
        }
    }
    reports
}
