//! The event/action loop that drives the widget.
//!
//! One `tokio::select!` over three sources: terminal events from the poller
//! task, actions from components and finished fetch tasks, and the spinner
//! interval. Rendering happens only when a dispatch reports a change.

use std::io;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Layout, Rect},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::action::Action;
use crate::api::WeatherClient;
use crate::components::{
    BannerTheme, CityList, CityListProps, HelpBar, HelpBarProps, MessageBanner, MessageBannerProps,
    WeatherPanel, WeatherPanelProps,
};
use crate::component::Component;
use crate::effect::Effect;
use crate::event::{EventKind, PollerConfig, RawEvent, process_raw_event, spawn_event_poller};
use crate::reducer::reducer;
use crate::state::AppState;
use crate::store::{EffectStoreWithMiddleware, LoggingMiddleware};
use crate::tasks::TaskManager;

/// Spinner advance cadence while a request is in flight.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Width of the city list column.
const CITY_LIST_WIDTH: u16 = 28;

/// The component tree and its layout.
pub struct Ui {
    city_list: CityList,
    weather_panel: WeatherPanel,
    banner: MessageBanner,
    help_bar: HelpBar,
    theme: BannerTheme,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            city_list: CityList::new(),
            weather_panel: WeatherPanel,
            banner: MessageBanner,
            help_bar: HelpBar,
            theme: BannerTheme::default(),
        }
    }

    /// Route a terminal event to the components. Global keys (quit) are
    /// handled here; everything else goes to the list and the panel.
    pub fn handle_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let EventKind::Key(key) = event {
            let ctrl_c = key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return vec![Action::Quit];
            }
        }

        let mut actions: Vec<Action> = self
            .city_list
            .handle_event(
                event,
                CityListProps {
                    cities: state.catalog.names(),
                    selected: state.selected,
                    fetch_enabled: state.controls_enabled(),
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.extend(self.weather_panel.handle_event(
            event,
            WeatherPanelProps { state },
        ));
        actions
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let banner_height = if state.banner.is_some() {
            MessageBanner::HEIGHT
        } else {
            0
        };
        let rows = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(banner_height),
            Constraint::Length(1),
        ])
        .split(area);
        let columns =
            Layout::horizontal([Constraint::Length(CITY_LIST_WIDTH), Constraint::Min(1)])
                .split(rows[0]);

        self.city_list.render(
            frame,
            columns[0],
            CityListProps {
                cities: state.catalog.names(),
                selected: state.selected,
                fetch_enabled: state.controls_enabled(),
                is_focused: true,
            },
        );
        self.weather_panel
            .render(frame, columns[1], WeatherPanelProps { state });
        Component::<Action>::render(
            &mut self.banner,
            frame,
            rows[1],
            MessageBannerProps {
                banner: state.banner.as_ref(),
                theme: &self.theme,
            },
        );
        Component::<Action>::render(
            &mut self.help_bar,
            frame,
            rows[2],
            HelpBarProps {
                controls_enabled: state.controls_enabled(),
            },
        );
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the store, the fetch task manager, and the action channel.
pub struct App {
    store: EffectStoreWithMiddleware<AppState, Action, Effect, LoggingMiddleware>,
    tasks: TaskManager<Action>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    client: WeatherClient,
    poller_config: PollerConfig,
    should_render: bool,
    ui: Ui,
}

impl App {
    pub fn new(state: AppState, client: WeatherClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store: EffectStoreWithMiddleware::new(state, reducer, LoggingMiddleware),
            tasks: TaskManager::new(action_tx.clone()),
            action_tx,
            action_rx,
            client,
            poller_config: PollerConfig::default(),
            should_render: true,
            ui: Ui::new(),
        }
    }

    /// Queue an action before the loop starts (e.g. a `--city` preselect
    /// followed by an initial fetch).
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Run until a `Quit` action arrives.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, self.poller_config, cancel_token.clone());

        let mut tick = tokio::time::interval(TICK_INTERVAL);

        loop {
            if self.should_render {
                let Self { ui, store, .. } = &mut *self;
                let state = store.state();
                terminal.draw(|frame| ui.render(frame, frame.area(), state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);
                    if matches!(event, EventKind::Resize(_, _)) {
                        self.should_render = true;
                    }
                    for action in self.ui.handle_event(&event, self.store.state()) {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if matches!(action, Action::Quit) {
                        break;
                    }

                    let result = self.store.dispatch(action);
                    for effect in result.effects {
                        self.handle_effect(effect);
                    }
                    if result.changed {
                        self.should_render = true;
                    }
                }

                _ = tick.tick() => {
                    // Only the loading view animates, so skip the dispatch
                    // entirely when idle.
                    if self.store.state().phase.is_loading() {
                        let _ = self.action_tx.send(Action::Tick);
                    }
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.tasks.cancel_all();

        Ok(())
    }

    fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchWeather { city } => {
                let client = self.client.clone();
                // Keyed spawn: a new fetch aborts the previous one, so at
                // most one request is ever in flight.
                self.tasks.spawn("weather", async move {
                    match client.current(city.as_str()).await {
                        Ok(report) => Action::WeatherDidLoad(report),
                        Err(e) => Action::WeatherDidError(e),
                    }
                });
            }
        }
    }
}
