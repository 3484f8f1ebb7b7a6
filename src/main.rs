//! weathermux - multi-provider weather comparison TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventKind,
    EventRoutingState, HandlerResponse, Keybindings,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weathermux::action::Action;
use weathermux::api;
use weathermux::components::{Component, ProviderBoard, ProviderBoardProps};
use weathermux::effect::Effect;
use weathermux::providers;
use weathermux::reducer::reducer;
use weathermux::state::AppState;

/// Compare current weather across three providers
#[derive(Parser, Debug)]
#[command(name = "weathermux")]
#[command(about = "Fetch current weather from three providers and compare them")]
struct Args {
    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum MuxComponentId {
    Board,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum MuxContext {
    Main,
}

impl EventRoutingState<MuxComponentId, MuxContext> for AppState {
    fn focused(&self) -> Option<MuxComponentId> {
        Some(MuxComponentId::Board)
    }

    fn modal(&self) -> Option<MuxComponentId> {
        None
    }

    fn binding_context(&self, _id: MuxComponentId) -> MuxContext {
        MuxContext::Main
    }

    fn default_context(&self) -> MuxContext {
        MuxContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args { debug: debug_args } = Args::parse();

    // Provider fetch failures are logged, never rendered; quiet unless
    // RUST_LOG opts in
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(io::stderr)
        .init();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::new()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(ProviderBoard));
    let mut bus: EventBus<AppState, Action, MuxComponentId, MuxContext> = EventBus::new();
    let keybindings: Keybindings<MuxContext> = Keybindings::new();

    let ui_board = Rc::clone(&ui);
    bus.register(MuxComponentId::Board, move |event, state| {
        let props = ProviderBoardProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = ui_board
            .borrow_mut()
            .handle_event(&event.kind, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::ProvidersFetch),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                event_ctx.set_component_area(MuxComponentId::Board, area);
                let props = ProviderBoardProps {
                    state,
                    is_focused: render_ctx.is_focused(),
                };
                ui.borrow_mut().render(frame, area, props);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchProviders => {
            ctx.tasks().spawn("providers", async move {
                Action::ProvidersDidSettle(api::fetch_all(providers::registry()).await)
            });
        }
    }
}
