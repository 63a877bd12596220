use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::config::{self, LandingConfig};
use crate::utils::validation::Email;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("API Error")]
    Rejected,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// The backend that accepts waitlist registrations.
pub trait Registrar {
    fn register<'a>(&'a self, email: &'a Email) -> LocalBoxFuture<'a, Result<(), RemoteError>>;
}

/// Fake backend: fixed latency, random failures.
#[derive(Debug, Clone)]
pub struct SimulatedRegistrar {
    latency_ms: u32,
    success_rate: f64,
    random: fn() -> f64,
}

impl SimulatedRegistrar {
    pub fn new(latency_ms: u32, success_rate: f64) -> Self {
        Self::with_random(latency_ms, success_rate, js_sys::Math::random)
    }

    /// `random` must return values in `[0, 1)`.
    pub fn with_random(latency_ms: u32, success_rate: f64, random: fn() -> f64) -> Self {
        Self {
            latency_ms,
            success_rate: success_rate.clamp(0.0, 1.0),
            random,
        }
    }

    pub fn latency_ms(&self) -> u32 {
        self.latency_ms
    }

    fn roll(&self) -> Result<(), RemoteError> {
        if (self.random)() < self.success_rate {
            Ok(())
        } else {
            Err(RemoteError::Rejected)
        }
    }
}

impl Registrar for SimulatedRegistrar {
    fn register<'a>(&'a self, email: &'a Email) -> LocalBoxFuture<'a, Result<(), RemoteError>> {
        async move {
            TimeoutFuture::new(self.latency_ms).await;
            let outcome = self.roll();
            match outcome {
                Ok(()) => log::debug!("Simulated registration accepted for {}", email),
                Err(_) => log::debug!("Simulated registration rejected for {}", email),
            }
            outcome
        }
        .boxed_local()
    }
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a Email,
}

/// POSTs `{"email": ...}` to a real endpoint. Any 2xx counts as registered.
#[derive(Debug, Clone)]
pub struct HttpRegistrar {
    endpoint: String,
}

impl HttpRegistrar {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Registrar for HttpRegistrar {
    fn register<'a>(&'a self, email: &'a Email) -> LocalBoxFuture<'a, Result<(), RemoteError>> {
        async move {
            let response = Request::post(&self.endpoint)
                .credentials(RequestCredentials::Include)
                .json(&RegisterRequest { email })
                .map_err(|e| RemoteError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| RemoteError::Network(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(RemoteError::Status(response.status()))
            }
        }
        .boxed_local()
    }
}

/// Picks the HTTP registrar when an endpoint was configured at build time.
pub fn registrar_from_config(settings: &LandingConfig) -> Box<dyn Registrar> {
    match config::get_waitlist_endpoint() {
        Some(endpoint) => {
            log::info!("Waitlist registrations go to {}", endpoint);
            Box::new(HttpRegistrar::new(endpoint))
        }
        None => {
            log::info!("No waitlist endpoint configured, using simulated backend");
            Box::new(SimulatedRegistrar::new(
                settings.simulated_latency_ms,
                settings.simulated_success_rate,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_backend_uses_configured_contract() {
        let settings = LandingConfig::default();
        let registrar =
            SimulatedRegistrar::new(settings.simulated_latency_ms, settings.simulated_success_rate);
        assert_eq!(registrar.latency_ms(), 1_500);
        assert_eq!(registrar.success_rate, 0.95);
    }

    #[test]
    fn roll_succeeds_below_success_rate() {
        let registrar = SimulatedRegistrar::with_random(0, 0.95, || 0.94);
        assert!(registrar.roll().is_ok());
        let registrar = SimulatedRegistrar::with_random(0, 0.95, || 0.0);
        assert!(registrar.roll().is_ok());
    }

    #[test]
    fn roll_fails_at_or_above_success_rate() {
        let registrar = SimulatedRegistrar::with_random(0, 0.95, || 0.95);
        assert!(matches!(registrar.roll(), Err(RemoteError::Rejected)));
        let registrar = SimulatedRegistrar::with_random(0, 0.95, || 0.999);
        assert_eq!(registrar.roll().unwrap_err().to_string(), "API Error");
    }

    #[test]
    fn success_rate_is_clamped() {
        let always = SimulatedRegistrar::with_random(0, 7.0, || 0.999);
        assert!(always.roll().is_ok());
        let never = SimulatedRegistrar::with_random(0, -1.0, || 0.0);
        assert!(never.roll().is_err());
    }

    #[test]
    fn request_body_is_a_bare_email_field() {
        let email = Email::parse("a@b.co").unwrap();
        let body = serde_json::to_string(&RegisterRequest { email: &email }).unwrap();
        assert_eq!(body, r#"{"email":"a@b.co"}"#);
    }
}
