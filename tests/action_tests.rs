//! Action and state tests using TestHarness
//!
//! FRAMEWORK PATTERN: TestHarness
//! - Create harness with initial state
//! - Emit actions to simulate user/async events
//! - Drain and assert emitted actions
//! - Use fluent assertions for readable tests

use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};
use weathermux::{
    action::Action,
    components::{Component, ProviderBoard, ProviderBoardProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, ProviderKind, ProviderReport, WeatherApiPayload, WeatherStackPayload},
};

fn weatherapi_report() -> ProviderReport {
    ProviderReport::WeatherApi(WeatherApiPayload::default())
}

#[test]
fn test_reducer_providers_fetch() {
    // PATTERN: Create store with reducer, dispatch actions, verify state
    let mut store = EffectStore::new(AppState::default(), reducer);

    // Initial state
    assert!(store.state().results.is_empty());
    assert!(!store.state().is_loading);

    // Dispatch fetch - should set loading and return FetchProviders effect
    let result = store.dispatch(Action::ProvidersFetch);
    assert!(result.changed, "State should change");
    assert!(store.state().is_loading);
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(result.effects[0], Effect::FetchProviders));
}

#[test]
fn test_reducer_providers_settle() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::ProvidersFetch); // Set loading
    store.dispatch(Action::ProvidersDidSettle(vec![weatherapi_report()]));

    assert!(!store.state().is_loading);
    assert_eq!(store.state().results, vec![weatherapi_report()]);
}

#[test]
fn test_reducer_pin_double_toggle() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(!store.state().is_pinned(ProviderKind::OpenWeatherMap));
    store.dispatch(Action::PinToggle(ProviderKind::OpenWeatherMap));
    assert!(store.state().is_pinned(ProviderKind::OpenWeatherMap));
    store.dispatch(Action::PinToggle(ProviderKind::OpenWeatherMap));
    assert!(!store.state().is_pinned(ProviderKind::OpenWeatherMap));
}

#[test]
fn test_component_keyboard_events() {
    // PATTERN: TestHarness for component testing
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = ProviderBoard;

    // PATTERN: send_keys helper - parse key strings, call handler
    // NumericComponentId is a simple built-in ComponentId type
    let actions = harness.send_keys::<NumericComponentId, _, _>("r", |state, event| {
        let props = ProviderBoardProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    // PATTERN: Fluent assertions
    actions.assert_count(1);
    actions.assert_first(Action::ProvidersFetch);
}

#[test]
fn test_component_pin_key_targets_top_row() {
    let state = AppState {
        results: vec![weatherapi_report()],
        ..Default::default()
    };
    let mut harness = TestHarness::<AppState, Action>::new(state);
    let mut component = ProviderBoard;

    let actions = harness.send_keys::<NumericComponentId, _, _>("p", |state, event| {
        let props = ProviderBoardProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(1);
    actions.assert_first(Action::PinToggle(ProviderKind::WeatherApi));
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = ProviderBoard;

    // When not focused, events should be ignored
    let actions = harness.send_keys::<NumericComponentId, _, _>("r j p q", |state, event| {
        let props = ProviderBoardProps {
            state,
            is_focused: false, // Not focused!
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_harness_emit_and_drain() {
    // PATTERN: Emit actions and drain them
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::ProvidersFetch);
    harness.emit(Action::PinToggle(ProviderKind::WeatherStack));
    harness.emit(Action::ProvidersDidSettle(Vec::new()));

    // Drain all emitted actions
    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::ProvidersFetch,
        Action::ProvidersDidSettle(vec![
            weatherapi_report(),
            ProviderReport::WeatherStack(WeatherStackPayload::default()),
        ]),
    ];

    // PATTERN: assert_emitted! macro for pattern matching
    assert_emitted!(actions, Action::ProvidersFetch);
    assert_emitted!(actions, Action::ProvidersDidSettle(_));
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::PinToggle(_));
}
