//! Stand-in for the travel-plan backend.
//!
//! [`MockTravelApi`] accepts a validated [`TravelFormData`], waits a fixed delay and
//! answers with a [`SubmitResponse`]. It can be switched to reject every call so the
//! client's failure path can be exercised.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::models::TravelFormData;

pub const SUCCESS_MESSAGE: &str = "Your travel plan has been created successfully!";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Response body of `POST /api/travel-plans`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

/// Behaviour of the mock travel-plan endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MockApi {
    pub delay_ms: u64,
    pub simulate_failure: bool,
}

impl MockApi {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            simulate_failure: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockTravelApi {
    config: MockApi,
}

impl MockTravelApi {
    pub fn new(config: MockApi) -> Self {
        Self { config }
    }

    pub async fn submit(&self, plan: &TravelFormData) -> Result<SubmitResponse, SubmitError> {
        tracing::info!(
            destination = %plan.destination,
            from = %plan.duration.from,
            to = %plan.duration.to,
            travel_type = plan.travel_type.value(),
            "Submitting travel plan"
        );

        sleep(self.config.delay()).await;

        if self.config.simulate_failure {
            tracing::warn!("Mock travel API configured to fail");
            return Err(SubmitError::Network(NETWORK_ERROR_MESSAGE.to_string()));
        }

        Ok(SubmitResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TravelType, TripDuration};
    use chrono::NaiveDate;
    use std::time::Instant;

    fn plan() -> TravelFormData {
        TravelFormData {
            destination: "Lisbon, Portugal".to_string(),
            duration: TripDuration {
                from: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2025, 5, 4).unwrap(),
            },
            travel_type: TravelType::Couple,
        }
    }

    #[tokio::test]
    async fn test_submit_succeeds_after_delay() {
        let api = MockTravelApi::new(MockApi {
            delay_ms: 30,
            simulate_failure: false,
        });

        let started = Instant::now();
        let response = api.submit(&plan()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(30));
        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_submit_can_simulate_failure() {
        let api = MockTravelApi::new(MockApi {
            delay_ms: 0,
            simulate_failure: true,
        });

        let err = api.submit(&plan()).await.unwrap_err();
        assert_eq!(err, SubmitError::Network(NETWORK_ERROR_MESSAGE.to_string()));
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_default_config_uses_fixed_delay() {
        let api = MockTravelApi::default();
        assert_eq!(api.config.delay(), Duration::from_millis(1500));
        assert!(!api.config.simulate_failure);
    }
}
