/// Keys that move focus along a tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Next,
    Previous,
    First,
    Last,
}

impl TabKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }

    /// Index of the tab that should receive focus, wrapping at both ends.
    pub fn target(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = match self {
            TabKey::Next => (current + 1) % len,
            TabKey::Previous => (current + len - 1) % len,
            TabKey::First => 0,
            TabKey::Last => len - 1,
        };
        Some(index)
    }
}

pub fn announcement(label: &str) -> String {
    format!("{} tab selected", label.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_wrap_around() {
        assert_eq!(TabKey::Next.target(2, 3), Some(0));
        assert_eq!(TabKey::Previous.target(0, 3), Some(2));
        assert_eq!(TabKey::Next.target(0, 3), Some(1));
    }

    #[test]
    fn home_and_end_jump_to_ends() {
        assert_eq!(TabKey::First.target(2, 4), Some(0));
        assert_eq!(TabKey::Last.target(0, 4), Some(3));
    }

    #[test]
    fn empty_list_has_no_target() {
        assert_eq!(TabKey::Next.target(0, 0), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(TabKey::from_key("Enter"), None);
        assert_eq!(TabKey::from_key("End"), Some(TabKey::Last));
    }

    #[test]
    fn announcement_uses_trimmed_label() {
        assert_eq!(announcement("  Security \n"), "Security tab selected");
    }
}
