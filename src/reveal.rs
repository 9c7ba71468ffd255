use std::time::Duration;

/// Share of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so reveals fire a little before full entry.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay for the `index`-th item of a batch staggered by `step`.
pub fn stagger_delay(step: Duration, index: usize) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// What a group's stagger delay is counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerOrder {
    /// The element's position among its siblings on the page.
    Position,
    /// The element's slot among the entries reported in the same frame.
    Batch,
}

/// Reveal-on-intersect settings shared by a family of elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGroup {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub stagger: Duration,
    pub order: StaggerOrder,
    pub hidden_transform: &'static str,
    pub visible_transform: &'static str,
    pub transition: &'static str,
}

impl RevealGroup {
    /// Skill and project cards fade up together.
    pub const CARDS: Self = Self {
        threshold: REVEAL_THRESHOLD,
        root_margin: REVEAL_ROOT_MARGIN,
        stagger: Duration::ZERO,
        order: StaggerOrder::Position,
        hidden_transform: "translateY(30px)",
        visible_transform: "translateY(0)",
        transition: "opacity 0.6s ease, transform 0.6s ease",
    };

    pub const TIMELINE: Self = Self {
        threshold: REVEAL_THRESHOLD,
        root_margin: REVEAL_ROOT_MARGIN,
        stagger: Duration::from_millis(200),
        order: StaggerOrder::Batch,
        hidden_transform: "translateX(-30px)",
        visible_transform: "translateX(0)",
        transition: "all 0.6s ease",
    };

    pub const EDUCATION: Self = Self {
        threshold: REVEAL_THRESHOLD,
        root_margin: REVEAL_ROOT_MARGIN,
        stagger: Duration::from_millis(300),
        order: StaggerOrder::Position,
        hidden_transform: "translateY(50px)",
        visible_transform: "translateY(0)",
        transition: "all 0.8s ease",
    };

    /// Reveal delay for an element at `position` that joined its batch at `batch_slot`.
    pub fn delay(&self, position: usize, batch_slot: usize) -> Duration {
        match self.order {
            StaggerOrder::Position => stagger_delay(self.stagger, position),
            StaggerOrder::Batch => stagger_delay(self.stagger, batch_slot),
        }
    }

    pub fn opacity(&self, revealed: bool) -> &'static str {
        if revealed {
            "1"
        } else {
            "0"
        }
    }

    pub fn transform(&self, revealed: bool) -> &'static str {
        if revealed {
            self.visible_transform
        } else {
            self.hidden_transform
        }
    }
}

/// One-shot hidden -> visible latch for an observed element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealFlag {
    revealed: bool,
}

impl RevealFlag {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds an intersection change; true only for the first intersection.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            true
        } else {
            false
        }
    }
}

/// Numbers the reveals that start within one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStagger {
    open: bool,
    next: usize,
}

impl BatchStagger {
    /// Takes the next slot. The flag is true when this call opened a new batch.
    pub fn join(&mut self) -> (usize, bool) {
        let opened = !self.open;
        self.open = true;
        let slot = self.next;
        self.next += 1;
        (slot, opened)
    }

    pub fn close(&mut self) {
        self.open = false;
        self.next = 0;
    }
}

/// Hover effect applied item by item across a card's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStagger {
    pub step: Duration,
    pub transform: &'static str,
    pub shadow: Option<&'static str>,
}

impl HoverStagger {
    pub const SKILL_ITEMS: Self = Self {
        step: Duration::from_millis(50),
        transform: "scale(1.05)",
        shadow: None,
    };

    pub const TECH_TAGS: Self = Self {
        step: Duration::from_millis(100),
        transform: "translateY(-2px)",
        shadow: Some("0 4px 8px rgba(30, 58, 138, 0.3)"),
    };

    /// `(index, delay)` for each of `count` items.
    pub fn schedule(&self, count: usize) -> impl Iterator<Item = (usize, Duration)> + '_ {
        (0..count).map(move |i| (i, stagger_delay(self.step, i)))
    }

    pub fn rest_transform(&self) -> &'static str {
        if self.transform.starts_with("scale") {
            "scale(1)"
        } else {
            "translateY(0)"
        }
    }
}

/// Which items of a hovered card are lifted.
///
/// Every enter/leave starts a new generation, so a staggered lift that was
/// scheduled for an earlier pass is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    lifted: Vec<bool>,
    generation: u64,
}

impl HoverState {
    pub fn new(count: usize) -> Self {
        Self {
            lifted: vec![false; count],
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.lifted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifted.is_empty()
    }

    /// Starts a hover pass, returning the token its lifts must carry.
    pub fn enter(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Lifts one item. Returns true if anything changed.
    pub fn lift(&mut self, index: usize, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.lifted.get_mut(index) {
            Some(item) if !*item => {
                *item = true;
                true
            }
            _ => false,
        }
    }

    /// Drops every item back at once and invalidates pending lifts.
    pub fn leave(&mut self) {
        self.generation += 1;
        self.lifted.iter_mut().for_each(|item| *item = false);
    }

    pub fn is_lifted(&self, index: usize) -> bool {
        self.lifted.get(index).copied().unwrap_or(false)
    }
}
