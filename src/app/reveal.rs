use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::dom::Timers;
use crate::reveal::{BatchStagger, HoverState, HoverStagger, RevealFlag, RevealGroup, StaggerOrder};

/// Shared by the reveals of one list so that items entering in the same
/// frame stagger against each other. Provide it as context above the list.
#[derive(Clone, Copy)]
pub struct RevealBatch(StoredValue<BatchStagger>);

impl RevealBatch {
    pub fn new() -> Self {
        Self(StoredValue::new(BatchStagger::default()))
    }

    fn join(&self) -> usize {
        let Some((slot, opened)) = self.0.try_update_value(BatchStagger::join) else {
            return 0;
        };
        if opened {
            // observer callbacks for one frame all run before the next frame's callbacks
            let batch = self.0;
            request_animation_frame(move || {
                batch.try_update_value(BatchStagger::close);
            });
        }
        slot
    }
}

/// Wraps `children` in an element that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(
    group: RevealGroup,
    #[prop(optional)] index: usize,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    let flag = StoredValue::new(RevealFlag::default());
    let batch = use_context::<RevealBatch>();
    let timers = Timers::new();

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                let first = flag
                    .try_update_value(|f| f.observe(entry.is_intersecting()))
                    .unwrap_or(false);
                if !first {
                    continue;
                }
                observer.unobserve(&entry.target());
                let slot = match (group.order, batch) {
                    (StaggerOrder::Batch, Some(batch)) => batch.join(),
                    _ => 0,
                };
                let delay = group.delay(index, slot);
                if delay.is_zero() {
                    set_revealed(true);
                } else {
                    timers.schedule(move || set_revealed(true), delay);
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(group.root_margin)
            .thresholds(vec![group.threshold]),
    );

    view! {
        <div
            node_ref=target
            class=class
            style:opacity=move || group.opacity(revealed())
            style:transform=move || group.transform(revealed())
            style:transition=group.transition
        >
            {children()}
        </div>
    }
}

/// Runtime side of a [`HoverStagger`]: which items are currently lifted.
#[derive(Clone, Copy)]
pub struct StaggeredHover {
    effect: HoverStagger,
    state: RwSignal<HoverState>,
    timers: Timers,
}

impl StaggeredHover {
    pub fn new(effect: HoverStagger, count: usize) -> Self {
        Self {
            effect,
            state: RwSignal::new(HoverState::new(count)),
            timers: Timers::new(),
        }
    }

    pub fn enter(&self) {
        self.timers.cancel();
        let state = self.state;
        let mut generation = 0;
        state.update(|s| generation = s.enter());
        let count = state.with_untracked(HoverState::len);
        for (i, delay) in self.effect.schedule(count) {
            self.timers
                .schedule(move || state.maybe_update(|s| s.lift(i, generation)), delay);
        }
    }

    /// Restores every item at once; staggers still pending are dropped.
    pub fn leave(&self) {
        self.timers.cancel();
        self.state.update(HoverState::leave);
    }

    pub fn transform(&self, index: usize) -> &'static str {
        if self.is_lifted(index) {
            self.effect.transform
        } else {
            self.effect.rest_transform()
        }
    }

    pub fn shadow(&self, index: usize) -> &'static str {
        match self.effect.shadow {
            Some(shadow) if self.is_lifted(index) => shadow,
            _ => "none",
        }
    }

    fn is_lifted(&self, index: usize) -> bool {
        self.state.with(|s| s.is_lifted(index))
    }
}
