//! Provider registry - the three services and their request URLs

use std::env;
use std::sync::OnceLock;

use crate::state::ProviderKind;

/// Fixed query coordinates (Mumbai); not configurable at runtime.
pub const LATITUDE: &str = "19.0760";
pub const LONGITUDE: &str = "72.8777";

/// Environment variable holding each provider's credential
pub fn credential_var(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::OpenWeatherMap => "OPENWEATHERMAP_API_KEY",
        ProviderKind::WeatherApi => "WEATHERAPI_KEY",
        ProviderKind::WeatherStack => "WEATHERSTACK_API_KEY",
    }
}

/// A provider plus its fully-formed request URL
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderDescriptor {
    pub provider: ProviderKind,
    pub url: String,
}

/// Build one descriptor per provider from the fixed coordinates and the
/// given credential. An empty credential is not an error here; the remote
/// service rejects the request and the orchestrator drops that provider.
pub fn build_registry(credential: impl Fn(ProviderKind) -> String) -> Vec<ProviderDescriptor> {
    ProviderKind::ALL
        .iter()
        .map(|&provider| {
            let key = urlencoding::encode(&credential(provider)).into_owned();
            let url = match provider {
                ProviderKind::OpenWeatherMap => format!(
                    "https://api.openweathermap.org/data/2.5/weather?lat={LATITUDE}&lon={LONGITUDE}&appid={key}"
                ),
                ProviderKind::WeatherApi => format!(
                    "https://api.weatherapi.com/v1/current.json?q={LATITUDE},{LONGITUDE}&key={key}"
                ),
                ProviderKind::WeatherStack => format!(
                    "https://api.weatherstack.com/current?access_key={key}&query={LATITUDE},{LONGITUDE}"
                ),
            };
            ProviderDescriptor { provider, url }
        })
        .collect()
}

/// Registry built once from the environment
pub fn registry() -> &'static [ProviderDescriptor] {
    static REGISTRY: OnceLock<Vec<ProviderDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        build_registry(|provider| env::var(credential_var(provider)).unwrap_or_default())
    })
}
