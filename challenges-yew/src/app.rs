use crate::pages::{ChallengesScreen, WelcomeScreen};
use crate::providers::ChallengesProvider;
use gloo::events::EventListener;
use yew::prelude::*;

/// Path of the board page; every other path shows the welcome page
pub const CHALLENGES_PATH: &str = "/challenges";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Challenges,
}

impl AppState {
    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/') == CHALLENGES_PATH {
            AppState::Challenges
        } else {
            AppState::Welcome
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AppState::Welcome => "/",
            AppState::Challenges => CHALLENGES_PATH,
        }
    }
}

fn current_path() -> String {
    gloo::utils::window()
        .location()
        .pathname()
        .unwrap_or_default()
}

fn push_path(path: &str) {
    match gloo::utils::window().history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
                tracing::warn!("Failed to push {}: {:?}", path, e);
            }
        }
        Err(e) => tracing::warn!("History unavailable: {:?}", e),
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    /// Start on this page instead of the one named by the URL path
    #[prop_or_default]
    pub initial_state: Option<AppState>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let initial_state = props.initial_state;
    let state = use_state(move || {
        initial_state.unwrap_or_else(|| AppState::from_path(&current_path()))
    });

    // Back/forward buttons
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "popstate", move |_| {
                let next = AppState::from_path(&current_path());
                tracing::debug!("Navigated to {:?}", next);
                state.set(next);
            });
            move || drop(listener)
        });
    }

    let on_get_started = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            tracing::info!("Opening challenge board");
            push_path(AppState::Challenges.path());
            state.set(AppState::Challenges);
        })
    };

    html! {
        <ChallengesProvider>
            {match *state {
                AppState::Welcome => html! {
                    <WelcomeScreen {on_get_started} />
                },
                AppState::Challenges => html! {
                    <ChallengesScreen />
                },
            }}
        </ChallengesProvider>
    }
}
