use leptos::{ev, ev::KeyboardEvent, prelude::*};
use leptos_use::{use_document_visibility, use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, VisibilityState};

use super::dom::{self, Timers};
use crate::effects::{
    describe_error, ErrorLocation, Greeting, SequenceDetector, Typewriter, EASTER_EGG_MESSAGE, SPIN_DURATION, TYPING_INTERVAL,
};

/// Retypes `text` one character at a time once the page is hydrated.
///
/// The server renders the full text so it is readable without WASM.
#[component]
pub fn TypingText(text: &'static str, #[prop(into)] class: String) -> impl IntoView {
    let typer = StoredValue::new(Typewriter::new(text));
    let (shown, set_shown) = signal(text.to_string());
    let interval = StoredValue::new(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = interval.try_get_value().flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        if !typer.try_update_value(Typewriter::start).unwrap_or(false) {
            return;
        }
        set_shown(String::new());
        let tick = move || match typer.try_update_value(|t| (t.tick(), t.visible())) {
            Some((true, visible)) => set_shown(visible),
            _ => stop(),
        };
        match set_interval_with_handle(tick, TYPING_INTERVAL) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => {
                log::warn!("typing effect disabled: {err:?}");
                set_shown(text.to_string());
            }
        }
    });
    on_cleanup(stop);

    view! { <p class=class>{shown}</p> }
}

/// Prefixes `text` with a greeting for the visitor's local time of day.
#[component]
pub fn GreetingText(text: &'static str, #[prop(into)] class: String) -> impl IntoView {
    let (greeting, set_greeting) = signal(None::<Greeting>);
    // the server can't know the visitor's clock
    Effect::new(move |_| set_greeting(Some(Greeting::now())));

    view! {
        <p class=class>
            {move || match greeting() {
                Some(g) => g.prefix(text),
                None => text.to_string(),
            }}
        </p>
    }
}

/// Console diagnostics for load time, visibility changes and uncaught errors.
#[component]
pub fn PageLifecycle() -> impl IntoView {
    let visibility = use_document_visibility();

    Effect::new(move |prev: Option<VisibilityState>| {
        let state = visibility.get();
        if prev.is_some_and(|p| p != state) {
            if state == VisibilityState::Hidden {
                log::info!("page hidden - pausing animations");
            } else {
                log::info!("page visible - resuming animations");
            }
        }
        state
    });

    Effect::new(move |_| {
        if let Some(perf) = window().performance() {
            log::info!("⚡ portfolio loaded in {}ms", perf.now().round());
        }
        log::info!("✅ all features loaded successfully");
    });

    let _ = use_event_listener(use_window(), ev::error, |ev| {
        match ev.dyn_ref::<ErrorEvent>() {
            Some(err) => {
                let location = ErrorLocation {
                    file: err.filename(),
                    line: err.lineno(),
                    column: err.colno(),
                };
                log::error!("portfolio error: {}", describe_error(&err.message(), &location));
                log::debug!("error value: {:?}", err.error());
            }
            None => log::error!("portfolio error: {}", ev.type_()),
        }
    });
}

/// Spins the page when the Konami code is typed anywhere.
#[component]
pub fn EasterEgg(spinning: RwSignal<bool>) -> impl IntoView {
    let detector = StoredValue::new(SequenceDetector::konami());
    let timers = Timers::new();

    let _ = use_event_listener(use_window(), ev::keydown, move |ev: KeyboardEvent| {
        let code = ev.key_code();
        if !detector.try_update_value(|d| d.push(code)).unwrap_or(false) {
            return;
        }
        log::info!("🎉 Konami code activated! You found the easter egg!");
        spinning.set(true);
        timers.restart(
            move || {
                spinning.set(false);
                dom::alert(EASTER_EGG_MESSAGE);
            },
            SPIN_DURATION,
        );
    });
}
