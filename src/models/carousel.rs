use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for {total} slides")]
    InvalidIndex { index: usize, total: usize },
}

/// Why autoplay stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendReason {
    Pointer,
    Touch,
    Keyboard,
    /// The page is going away. Nothing resumes from this.
    Unload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplay {
    Running,
    Suspended(SuspendReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Previous,
    GoTo(usize),
    /// One autoplay interval elapsed.
    Tick,
    Suspend(SuspendReason),
    Resume,
    /// Arrow-key navigation: moves one slide and suspends autoplay.
    Arrow(ArrowKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

impl ArrowKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

/// What the carousel should look like for its current slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub track_transform: String,
    /// `true` at the active position, one entry per slide (and per indicator).
    pub active: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
    autoplay: Autoplay,
}

impl Carousel {
    /// Starts at slide 0 with autoplay running. `total` never changes afterwards.
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            autoplay: Autoplay::Running,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay == Autoplay::Running && self.total > 1
    }

    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + 1) % self.total;
    }

    pub fn previous(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + self.total - 1) % self.total;
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.total {
            return Err(CarouselError::InvalidIndex {
                index,
                total: self.total,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Advances only while autoplay is running. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if self.autoplay != Autoplay::Running || self.total == 0 {
            return false;
        }
        self.next();
        true
    }

    pub fn suspend(&mut self, reason: SuspendReason) {
        if self.autoplay != Autoplay::Suspended(SuspendReason::Unload) {
            self.autoplay = Autoplay::Suspended(reason);
        }
    }

    /// Pointer leave resumes autoplay whatever suspended it, except unload.
    pub fn resume(&mut self) {
        if self.autoplay != Autoplay::Suspended(SuspendReason::Unload) {
            self.autoplay = Autoplay::Running;
        }
    }

    pub fn apply(&mut self, action: CarouselAction) -> Result<(), CarouselError> {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Previous => self.previous(),
            CarouselAction::GoTo(index) => self.go_to(index)?,
            CarouselAction::Tick => {
                self.tick();
            }
            CarouselAction::Suspend(reason) => self.suspend(reason),
            CarouselAction::Resume => self.resume(),
            CarouselAction::Arrow(ArrowKey::Left) => {
                self.previous();
                self.suspend(SuspendReason::Keyboard);
            }
            CarouselAction::Arrow(ArrowKey::Right) => {
                self.next();
                self.suspend(SuspendReason::Keyboard);
            }
        }
        Ok(())
    }

    pub fn view(&self) -> CarouselView {
        let offset = -(self.current as i64) * 100;
        CarouselView {
            track_transform: format!("translateX({}%)", offset),
            active: (0..self.total).map(|index| index == self.current).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_modulo_total() {
        for total in 1..6 {
            let mut carousel = Carousel::new(total);
            for n in 1..20 {
                carousel.next();
                assert_eq!(carousel.current(), n % total, "total={total} n={n}");
            }
        }
    }

    #[test]
    fn previous_from_first_slide_wraps_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.previous();
        assert_eq!(carousel.current(), 3);
        carousel.previous();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        carousel.tick();
        assert_eq!(carousel.current(), 0);
        assert!(carousel.view().active.is_empty());
        assert!(!carousel.is_autoplay_active());
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.go_to(2), Ok(()));
        assert_eq!(carousel.current(), 2);
        assert_eq!(
            carousel.go_to(3),
            Err(CarouselError::InvalidIndex { index: 3, total: 3 })
        );
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn view_marks_exactly_one_active_slide() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(1).unwrap();
        let view = carousel.view();
        assert_eq!(view.track_transform, "translateX(-100%)");
        assert_eq!(view.active, vec![false, true, false]);
        assert_eq!(view, carousel.view());
    }

    #[test]
    fn first_slide_has_no_offset() {
        assert_eq!(Carousel::new(3).view().track_transform, "translateX(0%)");
    }

    #[test]
    fn suspended_autoplay_does_not_advance_until_resumed() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.tick());
        carousel.suspend(SuspendReason::Pointer);
        for _ in 0..5 {
            assert!(!carousel.tick());
        }
        assert_eq!(carousel.current(), 1);
        carousel.resume();
        assert!(carousel.tick());
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn arrow_keys_navigate_and_suspend() {
        let mut carousel = Carousel::new(3);
        carousel.apply(CarouselAction::Arrow(ArrowKey::Left)).unwrap();
        assert_eq!(carousel.current(), 2);
        assert_eq!(
            carousel.autoplay(),
            Autoplay::Suspended(SuspendReason::Keyboard)
        );
        carousel.apply(CarouselAction::Arrow(ArrowKey::Right)).unwrap();
        assert_eq!(carousel.current(), 0);
        assert!(!carousel.is_autoplay_active());
    }

    #[test]
    fn unload_suspension_is_final() {
        let mut carousel = Carousel::new(3);
        carousel.suspend(SuspendReason::Unload);
        carousel.resume();
        carousel.suspend(SuspendReason::Pointer);
        assert_eq!(carousel.autoplay(), Autoplay::Suspended(SuspendReason::Unload));
    }

    #[test]
    fn arrow_key_parsing() {
        assert_eq!(ArrowKey::from_key("ArrowLeft"), Some(ArrowKey::Left));
        assert_eq!(ArrowKey::from_key("ArrowRight"), Some(ArrowKey::Right));
        assert_eq!(ArrowKey::from_key("ArrowUp"), None);
    }
}
