use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{
    scroll::{scroll_destination, SectionSpan},
    timers::PendingTimers,
};

pub const HEADER_ID: &str = "header";

fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn header_height() -> Option<f64> {
    html_element_by_id(HEADER_ID).map(|h| h.offset_height() as f64)
}

/// Measures the given section ids, skipping any that aren't on the page.
pub fn measure_sections<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<SectionSpan<'a>> {
    ids.into_iter()
        .filter_map(|id| {
            let el = html_element_by_id(id)?;
            Some(SectionSpan::new(
                id,
                el.offset_top() as f64,
                el.offset_height() as f64,
            ))
        })
        .collect()
}

pub fn document_height() -> f64 {
    document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default()
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

/// Smoothly scrolls so that `target` (a `#id` selector) sits below the header.
pub fn scroll_to_section(target: &str) {
    let element = document()
        .query_selector(target)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(element) = element else {
        log::info!("element not found: {target}");
        return;
    };
    let top = scroll_destination(element.offset_top() as f64, header_height());
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        log::warn!("alert failed: {err:?}");
    }
}

/// Schedules `cb` to run `after` the given time, returning a handle that can cancel it.
pub fn delay(cb: impl FnOnce() + 'static, after: Duration) -> Option<TimeoutHandle> {
    match set_timeout_with_handle(cb, after) {
        Ok(handle) => Some(handle),
        Err(err) => {
            log::warn!("couldn't schedule timer: {err:?}");
            None
        }
    }
}

/// Pending timers owned by a component, cleared when it is disposed.
#[derive(Clone, Copy)]
pub struct Timers(StoredValue<PendingTimers<TimeoutHandle>>);

impl Timers {
    pub fn new() -> Self {
        let timers = Self(StoredValue::new(PendingTimers::default()));
        on_cleanup(move || timers.cancel());
        timers
    }

    pub fn schedule(&self, cb: impl FnOnce() + 'static, after: Duration) {
        if let Some(handle) = delay(cb, after) {
            self.0.update_value(|pending| pending.push(handle));
        }
    }

    /// Like [`Timers::schedule`], but clears whatever this owner had pending first.
    pub fn restart(&self, cb: impl FnOnce() + 'static, after: Duration) {
        if let Some(handle) = delay(cb, after) {
            let displaced = self.0.try_update_value(|pending| pending.replace(handle));
            displaced
                .into_iter()
                .flatten()
                .for_each(|handle| handle.clear());
        }
    }

    pub fn cancel(&self) {
        // the owner may already be disposed during cleanup
        if let Some(pending) = self.0.try_update_value(PendingTimers::drain) {
            pending.into_iter().for_each(|handle| handle.clear());
        }
    }
}
