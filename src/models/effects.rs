//! Geometry behind the pointer and scroll flourishes. Everything here maps
//! an event position to a CSS value; none of it holds state.

pub const CARD_LIFT: &str = "translateY(-8px) rotateX(2deg)";
pub const PILLAR_TILT_DIVISOR: f64 = 20.0;
pub const COMMUNITY_TILT_DIVISOR: f64 = 30.0;

const BACKGROUND_PARALLAX_SPEED: f64 = 0.5;
const SHAPE_PARALLAX_STEP: f64 = 0.1;
const STAGGER_STEPS_PER_SEC: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Position of `point` (viewport coordinates) relative to the rect's corner.
    pub fn local(&self, point: Point) -> Point {
        Point {
            x: point.x - self.left,
            y: point.y - self.top,
        }
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll position that puts a section just below the fixed navbar.
pub fn anchor_scroll_top(section_top: f64, navbar_height: f64) -> f64 {
    section_top - navbar_height
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn transform(&self) -> String {
        format!(
            "translateY(-8px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Leans the card toward the pointer; larger divisors tilt less.
pub fn tilt(pointer: Point, rect: Rect, divisor: f64) -> Tilt {
    let local = rect.local(pointer);
    Tilt {
        rotate_x: (local.y - rect.height / 2.0) / divisor,
        rotate_y: (rect.width / 2.0 - local.x) / divisor,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px;",
            self.left,
            self.top,
            size = self.size
        )
    }
}

/// A square ripple covering the button, centred on the click.
pub fn ripple(click: Point, rect: Rect) -> Ripple {
    let size = rect.width.max(rect.height);
    let local = rect.local(click);
    Ripple {
        size,
        left: local.x - size / 2.0,
        top: local.y - size / 2.0,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxFrame {
    pub background_offset: f64,
    pub shape_offsets: Vec<f64>,
}

impl ParallaxFrame {
    pub fn background_transform(&self) -> String {
        format!("translateY({}px)", self.background_offset)
    }

    pub fn shape_transform(&self, index: usize) -> Option<String> {
        self.shape_offsets
            .get(index)
            .map(|offset| format!("translate(-50%, -50%) translateY({}px)", offset))
    }
}

/// `None` once the hero has scrolled out; the last frame stays applied.
pub fn parallax(scrolled: f64, hero_height: f64, shapes: usize) -> Option<ParallaxFrame> {
    if scrolled >= hero_height {
        return None;
    }
    Some(ParallaxFrame {
        background_offset: scrolled * BACKGROUND_PARALLAX_SPEED,
        shape_offsets: (0..shapes)
            .map(|index| scrolled * (index + 1) as f64 * SHAPE_PARALLAX_STEP)
            .collect(),
    })
}

pub fn stagger_delay(index: usize) -> String {
    format!("{}s", index as f64 / STAGGER_STEPS_PER_SEC)
}

pub fn timeline_transition(index: usize) -> String {
    let delay = stagger_delay(index);
    format!("opacity 0.6s ease {delay}, transform 0.6s ease {delay}")
}

/// What happens to an element the first time it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealEffect {
    AddClass(&'static str),
    /// Fades and slides a roadmap entry in from the left.
    SlideIn,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealRule {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    pub effect: RevealEffect,
}

pub const REVEALS: [RevealRule; 3] = [
    RevealRule {
        selector: ".fade-in",
        threshold: 0.1,
        root_margin: Some("0px 0px -50px 0px"),
        effect: RevealEffect::AddClass("visible"),
    },
    RevealRule {
        selector: ".feature-visual",
        threshold: 0.5,
        root_margin: None,
        effect: RevealEffect::AddClass("animate"),
    },
    RevealRule {
        selector: ".timeline-item",
        threshold: 0.3,
        root_margin: None,
        effect: RevealEffect::SlideIn,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 10.0,
        top: 20.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(100.0, 100.0));
        assert!(navbar_scrolled(100.5, 100.0));
    }

    #[test]
    fn tilt_leans_toward_pointer() {
        let t = tilt(Point { x: 60.0, y: 110.0 }, CARD, PILLAR_TILT_DIVISOR);
        assert_eq!(t, Tilt { rotate_x: 2.0, rotate_y: 2.5 });
        assert_eq!(t.transform(), "translateY(-8px) rotateX(2deg) rotateY(2.5deg)");
    }

    #[test]
    fn community_tilt_is_gentler() {
        let pointer = Point { x: 10.0, y: 20.0 };
        let pillar = tilt(pointer, CARD, PILLAR_TILT_DIVISOR);
        let community = tilt(pointer, CARD, COMMUNITY_TILT_DIVISOR);
        assert!(community.rotate_y.abs() < pillar.rotate_y.abs());
    }

    #[test]
    fn ripple_is_centred_on_click() {
        let r = ripple(Point { x: 110.0, y: 70.0 }, CARD);
        assert_eq!(r, Ripple { size: 200.0, left: 0.0, top: -50.0 });
        assert_eq!(r.style(), "width: 200px; height: 200px; left: 0px; top: -50px;");
    }

    #[test]
    fn parallax_stops_below_the_hero() {
        assert_eq!(parallax(800.0, 800.0, 3), None);
        let frame = parallax(100.0, 800.0, 3).unwrap();
        assert_eq!(frame.background_transform(), "translateY(50px)");
        assert_eq!(
            frame.shape_transform(1).as_deref(),
            Some("translate(-50%, -50%) translateY(20px)")
        );
        assert_eq!(frame.shape_transform(3), None);
    }

    #[test]
    fn anchor_offset_accounts_for_navbar() {
        assert_eq!(anchor_scroll_top(1200.0, 80.0), 1120.0);
    }

    #[test]
    fn timeline_transition_is_staggered() {
        assert_eq!(timeline_transition(0), "opacity 0.6s ease 0s, transform 0.6s ease 0s");
        assert_eq!(stagger_delay(3), "0.3s");
    }
}
