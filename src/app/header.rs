use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{on_click_outside, use_window_scroll};
use wasm_bindgen::JsCast;

use super::dom::{self, HEADER_ID};
use crate::content::{NavSection, NAV_SECTIONS, OWNER};
use crate::nav::{ClickTarget, NavMenu};
use crate::scroll::{anchor_target, is_scrolled, probe_position, scroll_progress, ActiveLink};

#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::default());
    let menu_open = move || menu.with(NavMenu::is_open);
    let (scrolled, set_scrolled) = signal(false);
    let active = RwSignal::new(ActiveLink::default());
    let menu_ref = NodeRef::<html::Ul>::new();
    let toggle_ref = NodeRef::<html::Button>::new();
    let (_, scroll_y) = use_window_scroll();

    let _ = on_click_outside(menu_ref, move |ev| {
        let on_toggle = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .zip(toggle_ref.get_untracked())
            .is_some_and(|(node, toggle)| toggle.contains(Some(&node)));
        let target = if on_toggle {
            ClickTarget::Toggle
        } else {
            ClickTarget::Elsewhere
        };
        menu.maybe_update(|m| m.click(target));
    });

    // runs once on mount and again on every scroll
    Effect::new(move |_| {
        let y = scroll_y.get();
        set_scrolled(is_scrolled(y));
        let sections = dom::measure_sections(NAV_SECTIONS.iter().map(|s| s.id));
        let probe = probe_position(y, dom::header_height());
        active.maybe_update(|a| a.update(&sections, probe));
    });

    let nav_links = NAV_SECTIONS
        .iter()
        .map(|section| {
            let NavSection { id, label } = *section;
            let href = section.href();
            view! {
                <li class="nav__item">
                    <a
                        href=href.clone()
                        class=move || {
                            if active.with(|a| a.is_active(id)) {
                                "nav__link active"
                            } else {
                                "nav__link"
                            }
                        }
                        on:click=move |ev: MouseEvent| {
                            menu.maybe_update(NavMenu::close);
                            if let Some(target) = anchor_target(&href) {
                                ev.prevent_default();
                                log::info!("navigating to {target}");
                                dom::scroll_to_section(target);
                            }
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header
            id=HEADER_ID
            class=move || if scrolled() { "header scrolled" } else { "header" }
        >
            <nav class="nav mx-auto max-w-6xl px-4 flex items-center justify-between">
                <a href="#home" class="nav__logo font-bold text-xl">
                    {OWNER}
                </a>
                <ul
                    node_ref=menu_ref
                    id="nav-menu"
                    class=move || if menu_open() { "nav__menu active" } else { "nav__menu" }
                >
                    {nav_links}
                </ul>
                <button
                    node_ref=toggle_ref
                    id="nav-toggle"
                    class=move || if menu_open() { "nav__toggle active" } else { "nav__toggle" }
                    aria-label="Toggle navigation"
                    aria-controls="nav-menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        menu.update(NavMenu::toggle);
                    }
                >
                    <span class="nav__bar"></span>
                    <span class="nav__bar"></span>
                    <span class="nav__bar"></span>
                </button>
            </nav>
        </header>
    }
}

/// Thin bar pinned to the top of the viewport showing how far the page is scrolled.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (progress, set_progress) = signal(0.0_f64);

    Effect::new(move |_| {
        let y = scroll_y.get();
        set_progress(scroll_progress(
            y,
            dom::document_height(),
            dom::viewport_height(),
        ));
    });

    view! {
        <div class="scroll-progress">
            <div class="scroll-progress-bar" style:width=move || format!("{}%", progress())></div>
        </div>
    }
}
