//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder when a payload carries no recognizable city name
pub const UNKNOWN_CITY: &str = "Unknown";
/// Placeholder when a payload carries no recognizable field value
pub const NOT_AVAILABLE: &str = "N/A";

/// The three weather services the app aggregates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ProviderKind {
    OpenWeatherMap,
    WeatherApi,
    WeatherStack,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::OpenWeatherMap,
        ProviderKind::WeatherApi,
        ProviderKind::WeatherStack,
    ];

    /// Display key, unique per provider
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::OpenWeatherMap => "OpenWeatherMap",
            ProviderKind::WeatherApi => "WeatherAPI",
            ProviderKind::WeatherStack => "WeatherStack",
        }
    }
}

// ============================================================================
// Provider payloads
// ============================================================================
//
// Each provider returns a structurally different JSON document. Every leaf is
// optional: a body that parses but lacks fields still counts as a successful
// fetch and degrades per field at projection time.

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpenWeatherMapPayload {
    pub name: Option<String>,
    pub main: Option<OpenWeatherMapMain>,
    #[serde(default)]
    pub weather: Vec<OpenWeatherMapCondition>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpenWeatherMapMain {
    pub temp: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpenWeatherMapCondition {
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherApiPayload {
    pub location: Option<WeatherApiLocation>,
    pub current: Option<WeatherApiCurrent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherApiLocation {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherApiCurrent {
    pub temp_c: Option<f64>,
    pub condition: Option<WeatherApiCondition>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherApiCondition {
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherStackPayload {
    pub location: Option<WeatherStackLocation>,
    pub current: Option<WeatherStackCurrent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherStackLocation {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherStackCurrent {
    pub temperature: Option<f64>,
    #[serde(default)]
    pub weather_descriptions: Vec<String>,
}

/// One provider's successful response, tagged by the provider it came from.
/// Failed fetches produce no report at all, never a placeholder variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum ProviderReport {
    OpenWeatherMap(OpenWeatherMapPayload),
    WeatherApi(WeatherApiPayload),
    WeatherStack(WeatherStackPayload),
}

impl ProviderReport {
    pub fn provider(&self) -> ProviderKind {
        match self {
            ProviderReport::OpenWeatherMap(_) => ProviderKind::OpenWeatherMap,
            ProviderReport::WeatherApi(_) => ProviderKind::WeatherApi,
            ProviderReport::WeatherStack(_) => ProviderKind::WeatherStack,
        }
    }

    pub fn city(&self) -> Option<&str> {
        match self {
            ProviderReport::OpenWeatherMap(payload) => payload.name.as_deref(),
            ProviderReport::WeatherApi(payload) => payload
                .location
                .as_ref()
                .and_then(|location| location.name.as_deref()),
            ProviderReport::WeatherStack(payload) => payload
                .location
                .as_ref()
                .and_then(|location| location.name.as_deref()),
        }
    }

    /// Values are rendered as-is; no unit conversion is applied.
    pub fn temperature_celsius(&self) -> Option<f64> {
        match self {
            ProviderReport::OpenWeatherMap(payload) => {
                payload.main.as_ref().and_then(|main| main.temp)
            }
            ProviderReport::WeatherApi(payload) => {
                payload.current.as_ref().and_then(|current| current.temp_c)
            }
            ProviderReport::WeatherStack(payload) => payload
                .current
                .as_ref()
                .and_then(|current| current.temperature),
        }
    }

    pub fn conditions(&self) -> Option<&str> {
        match self {
            ProviderReport::OpenWeatherMap(payload) => payload
                .weather
                .first()
                .and_then(|condition| condition.description.as_deref()),
            ProviderReport::WeatherApi(payload) => payload
                .current
                .as_ref()
                .and_then(|current| current.condition.as_ref())
                .and_then(|condition| condition.text.as_deref()),
            ProviderReport::WeatherStack(payload) => payload
                .current
                .as_ref()
                .and_then(|current| current.weather_descriptions.first())
                .map(String::as_str),
        }
    }
}

// ============================================================================
// Display projection
// ============================================================================

/// One table row, fully formatted for rendering
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayRow {
    pub provider: ProviderKind,
    pub city: String,
    pub temperature: String,
    pub conditions: String,
    pub pinned: bool,
}

impl DisplayRow {
    fn project(report: &ProviderReport, pinned: bool) -> Self {
        let temperature = match report.temperature_celsius() {
            Some(temp) => format!("{temp}°C"),
            None => NOT_AVAILABLE.to_string(),
        };
        Self {
            provider: report.provider(),
            city: report.city().unwrap_or(UNKNOWN_CITY).to_string(),
            temperature,
            conditions: report.conditions().unwrap_or(NOT_AVAILABLE).to_string(),
            pinned,
        }
    }

    /// What toggling this row would do
    pub fn action_label(&self) -> &'static str {
        if self.pinned {
            "unpin"
        } else {
            "pin"
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Latest merged fetch results, replaced wholesale on every cycle
    #[debug(section = "Providers", label = "Results", debug_fmt)]
    pub results: Vec<ProviderReport>,

    /// Providers the user pinned to the top of the table.
    /// May name providers absent from `results`.
    #[debug(section = "Providers", label = "Pinned", debug_fmt)]
    pub pinned: Vec<ProviderKind>,

    /// Whether a fetch cycle is in flight
    #[debug(section = "Fetch", label = "Loading")]
    pub is_loading: bool,

    /// Cursor into the displayed (sorted) table
    #[debug(skip)]
    pub selected: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            pinned: Vec::new(),
            is_loading: false,
            selected: 0,
        }
    }

    pub fn is_pinned(&self, provider: ProviderKind) -> bool {
        self.pinned.contains(&provider)
    }

    /// Project and sort the results for rendering: pinned providers first,
    /// no ordering contract within either group. Pure; runs on every render.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        let mut rows: Vec<DisplayRow> = self
            .results
            .iter()
            .map(|report| DisplayRow::project(report, self.is_pinned(report.provider())))
            .collect();
        rows.sort_by_key(|row| !row.pinned);
        rows
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_for(provider: ProviderKind) -> ProviderReport {
        match provider {
            ProviderKind::OpenWeatherMap => {
                ProviderReport::OpenWeatherMap(OpenWeatherMapPayload::default())
            }
            ProviderKind::WeatherApi => ProviderReport::WeatherApi(WeatherApiPayload::default()),
            ProviderKind::WeatherStack => {
                ProviderReport::WeatherStack(WeatherStackPayload::default())
            }
        }
    }

    #[test]
    fn test_pinned_rows_precede_unpinned() {
        for pins in [
            vec![],
            vec![ProviderKind::OpenWeatherMap],
            vec![ProviderKind::WeatherApi],
            vec![ProviderKind::WeatherStack],
            vec![ProviderKind::WeatherApi, ProviderKind::WeatherStack],
            ProviderKind::ALL.to_vec(),
        ] {
            let state = AppState {
                results: ProviderKind::ALL.iter().copied().map(report_for).collect(),
                pinned: pins.clone(),
                ..Default::default()
            };

            let rows = state.display_rows();
            assert_eq!(rows.len(), 3);
            if let Some(boundary) = rows.iter().position(|row| !row.pinned) {
                assert!(
                    rows[boundary..].iter().all(|row| !row.pinned),
                    "pinned row after boundary with pins {pins:?}"
                );
            }
            assert_eq!(rows.iter().filter(|row| row.pinned).count(), pins.len());
        }
    }

    #[test]
    fn test_pins_survive_missing_providers() {
        let state = AppState {
            results: vec![report_for(ProviderKind::WeatherApi)],
            pinned: vec![ProviderKind::WeatherStack],
            ..Default::default()
        };

        // The pin references a provider with no current result
        let rows = state.display_rows();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].pinned);
        assert!(state.is_pinned(ProviderKind::WeatherStack));
    }

    #[test]
    fn test_empty_payload_falls_back_to_placeholders() {
        let report = ProviderReport::OpenWeatherMap(OpenWeatherMapPayload::default());
        let row = DisplayRow::project(&report, false);

        assert_eq!(row.city, UNKNOWN_CITY);
        assert_eq!(row.temperature, NOT_AVAILABLE);
        assert_eq!(row.conditions, NOT_AVAILABLE);
        assert_eq!(row.action_label(), "pin");
    }

    #[test]
    fn test_temperature_formatting() {
        let report = ProviderReport::WeatherApi(WeatherApiPayload {
            location: None,
            current: Some(WeatherApiCurrent {
                temp_c: Some(29.0),
                condition: None,
            }),
        });
        let row = DisplayRow::project(&report, false);
        assert_eq!(row.temperature, "29°C");

        let report = ProviderReport::WeatherStack(WeatherStackPayload {
            location: None,
            current: Some(WeatherStackCurrent {
                temperature: Some(28.5),
                weather_descriptions: vec!["Haze".into()],
            }),
        });
        let row = DisplayRow::project(&report, true);
        assert_eq!(row.temperature, "28.5°C");
        assert_eq!(row.conditions, "Haze");
        assert_eq!(row.action_label(), "unpin");
    }
}
