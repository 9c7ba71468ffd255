use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::dom;
use crate::content::{RESUME_LABEL, RESUME_NOTICE, RESUME_PREPARING_LABEL, RESUME_PREP_DELAY};

/// Resume call-to-action. There is no hosted PDF yet, so it only explains how to add one.
#[component]
pub fn ResumeDownload() -> impl IntoView {
    let UseTimeoutFnReturn {
        start, is_pending, ..
    } = use_timeout_fn(
        move |_: ()| dom::alert(RESUME_NOTICE),
        RESUME_PREP_DELAY.as_millis() as f64,
    );

    view! {
        <a
            href="#"
            class="resume__download btn btn--outline"
            style:opacity=move || if is_pending.get() { "0.7" } else { "1" }
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                if is_pending.get_untracked() {
                    return;
                }
                log::info!("resume download clicked");
                start(());
            }
        >
            <span class="resume__download-icon">
                {move || if is_pending.get() { "⏳" } else { "📄" }}
            </span>
            {move || if is_pending.get() { RESUME_PREPARING_LABEL } else { RESUME_LABEL }}
        </a>
    }
}
