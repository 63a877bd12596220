use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl TrackingEvent {
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }

    pub fn cta_click() -> Self {
        Self::new("CTA", "Click", "Join Waitlist Button")
    }

    pub fn community_click(label: &str) -> Self {
        Self::new("Community", "Click", label.trim())
    }

    pub fn signup(succeeded: bool) -> Self {
        Self::new(
            "Waitlist",
            "Signup",
            if succeeded { "Success" } else { "Error" },
        )
    }
}

/// Where tracking events go.
pub trait EventSink {
    fn emit(&self, event: TrackingEvent);
}

/// Writes events to the browser console. Stand-in for a telemetry backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, event: TrackingEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => gloo_console::log!("Event tracked:", json),
            Err(e) => log::warn!("Failed to serialize tracking event: {}", e),
        }
    }
}

pub fn track_event(event: TrackingEvent) {
    ConsoleSink.emit(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_record() {
        let json = serde_json::to_value(TrackingEvent::signup(true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "Waitlist", "action": "Signup", "label": "Success"})
        );
    }

    #[test]
    fn community_label_is_trimmed() {
        assert_eq!(TrackingEvent::community_click("  Discord \n").label, "Discord");
    }
}
