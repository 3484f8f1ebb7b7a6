//! Actions - user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{ProviderKind, ProviderReport};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Providers category =====
    /// Intent: start a fetch cycle across all providers (triggers async task)
    ProvidersFetch,

    /// Result: every provider settled; carries whatever succeeded
    /// (possibly empty). A fetch cycle never fails as a whole.
    ProvidersDidSettle(Vec<ProviderReport>),

    // ===== Pin category =====
    /// Toggle a provider's membership in the pin set
    PinToggle(ProviderKind),

    // ===== Row category =====
    /// Move the table cursor down
    RowNext,

    /// Move the table cursor up
    RowPrev,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
