//! Mock provider implementation for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{AddressProvider, RawAddress, RawPlace, SearchRequest};
use crate::error::ProviderError;

/// Canned outcome of a mock lookup.
#[derive(Debug, Clone)]
pub enum MockReply {
    Places(Vec<RawPlace>),
    Status(u16),
    Malformed,
}

/// Mock provider that counts calls and records the last request.
#[derive(Debug)]
pub struct MockProvider {
    reply: Mutex<MockReply>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<SearchRequest>>,
}

impl MockProvider {
    /// Creates a mock that answers with `places`.
    pub fn with_places(places: Vec<RawPlace>) -> Self {
        Self::new(MockReply::Places(places))
    }

    /// Creates a mock that answers with an error status.
    pub fn failing(status: u16) -> Self {
        Self::new(MockReply::Status(status))
    }

    /// Creates a mock whose body does not match the schema.
    pub fn malformed() -> Self {
        Self::new(MockReply::Malformed)
    }

    fn new(reply: MockReply) -> Self {
        Self {
            reply: Mutex::new(reply),
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Makes every lookup wait `delay` before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Replaces the canned reply for subsequent lookups.
    pub fn set_reply(&self, reply: MockReply) {
        *self.reply.lock().unwrap() = reply;
    }

    /// Number of lookups started so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<SearchRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressProvider for MockProvider {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RawPlace>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.reply.lock().unwrap().clone();
        match reply {
            MockReply::Places(places) => Ok(places),
            MockReply::Status(status) => Err(ProviderError::Status(status)),
            MockReply::Malformed => {
                let err = serde_json::from_str::<Vec<RawPlace>>(r#"{"error":"oops"}"#)
                    .expect_err("object is not a list");
                Err(ProviderError::Decode(err))
            }
        }
    }
}

/// Builds a place with a road, house number, postcode and city.
pub fn place(road: &str, house_number: &str, postcode: &str, city: &str) -> RawPlace {
    RawPlace::new(
        "52.4811434",
        "13.4351882",
        RawAddress {
            road: Some(road.to_string()),
            house_number: Some(house_number.to_string()),
            postcode: Some(postcode.to_string()),
            city: Some(city.to_string()),
            ..Default::default()
        },
    )
}
