/// Vertical offset after which the header switches to its "scrolled" style.
pub const SCROLLED_THRESHOLD: f64 = 100.0;
/// Added below the header when probing for the section in view.
pub const PROBE_PADDING: f64 = 50.0;
/// Probe offset used when the header can't be measured.
pub const FALLBACK_PROBE_OFFSET: f64 = 100.0;
/// Space left between the header and a section after smooth scrolling.
pub const SCROLL_GUTTER: f64 = 20.0;
pub const FALLBACK_HEADER_HEIGHT: f64 = 80.0;

/// Measured vertical extent of a page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

impl<'a> SectionSpan<'a> {
    pub fn new(id: &'a str, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Document position used to decide which section is "in view".
pub fn probe_position(scroll_y: f64, header_height: Option<f64>) -> f64 {
    match header_height {
        Some(h) => scroll_y + h + PROBE_PADDING,
        None => scroll_y + FALLBACK_PROBE_OFFSET,
    }
}

/// Returns the section containing `position`.
///
/// Every section is checked. If spans overlap, the last matching section wins.
pub fn section_at<'a>(sections: &[SectionSpan<'a>], position: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|s| s.contains(position))
        .last()
        .map(|s| s.id)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Percentage of the scrollable document that has been scrolled, in `[0, 100]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    let percent = scroll_top / scrollable * 100.0;
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Window offset that brings a section just below the fixed header.
pub fn scroll_destination(element_top: f64, header_height: Option<f64>) -> f64 {
    element_top - header_height.unwrap_or(FALLBACK_HEADER_HEIGHT) - SCROLL_GUTTER
}

/// Same-page anchor targeted by a link, e.g. `"#about"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// The single navigation link currently marked active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveLink {
    current: Option<String>,
}

impl ActiveLink {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    /// Re-evaluates the active link for the given probe position.
    ///
    /// When no section contains the position the previous link stays active.
    /// Returns true if the active link changed.
    pub fn update(&mut self, sections: &[SectionSpan], position: f64) -> bool {
        match section_at(sections, position) {
            Some(id) if !self.is_active(id) => {
                self.current = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionSpan<'static>> {
        vec![
            SectionSpan::new("home", 0.0, 600.0),
            SectionSpan::new("about", 600.0, 400.0),
            SectionSpan::new("skills", 1000.0, 800.0),
            SectionSpan::new("contact", 1800.0, 500.0),
        ]
    }

    #[test]
    fn test_exactly_one_active_link_per_section() {
        let sections = layout();
        let mut active = ActiveLink::default();
        for span in &sections {
            let mut pos = span.top;
            while pos < span.top + span.height {
                active.update(&sections, pos);
                let marked = sections.iter().filter(|s| active.is_active(s.id)).count();
                assert_eq!(marked, 1);
                assert_eq!(active.current(), Some(span.id));
                pos += 37.0;
            }
        }
    }

    #[test]
    fn test_section_bounds_are_half_open() {
        let sections = layout();
        assert_eq!(section_at(&sections, 599.9), Some("home"));
        assert_eq!(section_at(&sections, 600.0), Some("about"));
        assert_eq!(section_at(&sections, 2300.0), None);
        assert_eq!(section_at(&sections, -1.0), None);
    }

    #[test]
    fn test_overlap_last_match_wins() {
        let sections = vec![
            SectionSpan::new("first", 0.0, 500.0),
            SectionSpan::new("second", 400.0, 500.0),
        ];
        assert_eq!(section_at(&sections, 450.0), Some("second"));
        assert_eq!(section_at(&sections, 100.0), Some("first"));
    }

    #[test]
    fn test_active_link_kept_when_nothing_matches() {
        let sections = layout();
        let mut active = ActiveLink::default();
        assert!(active.update(&sections, 700.0));
        assert!(!active.update(&sections, 5000.0));
        assert_eq!(active.current(), Some("about"));
        // same section again is not a change
        assert!(!active.update(&sections, 800.0));
    }

    #[test]
    fn test_probe_position() {
        assert_eq!(probe_position(200.0, Some(70.0)), 320.0);
        assert_eq!(probe_position(200.0, None), 300.0);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // overscroll (e.g. rubber-banding) stays clamped
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
        for top in [0.0, 13.0, 250.0, 999.0, 4000.0] {
            let p = scroll_progress(top, 1800.0, 700.0);
            assert!((0.0..=100.0).contains(&p));
        }
    }

    #[test]
    fn test_progress_without_scrollable_height() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_scroll_destination() {
        assert_eq!(scroll_destination(1000.0, Some(70.0)), 910.0);
        assert_eq!(scroll_destination(1000.0, None), 900.0);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#projects"), Some("#projects"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://github.com"), None);
        assert_eq!(anchor_target("/cv"), None);
    }
}
