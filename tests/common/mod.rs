// Test doubles for the voice API
#![allow(dead_code)]

use anyhow::Result;
use std::sync::{Arc, Mutex};
use vapi_console::{StartRequest, VoiceClient, VoiceClientFactory};

/// Calls observed by a `FakeFactory` and the clients it created
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Connect(String),
    Start(StartRequest),
    Stop,
}

#[derive(Clone, Default)]
pub struct FakeFactory {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub start_error: Option<String>,
    pub stop_error: Option<String>,
    pub join_url: Option<String>,
}

impl FakeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_start(message: &str) -> Self {
        Self {
            start_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_stop(message: &str) -> Self {
        Self {
            stop_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_join_url(url: &str) -> Self {
        Self {
            join_url: Some(url.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn start_requests(&self) -> Vec<StartRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Start(request) => Some(request),
                _ => None,
            })
            .collect()
    }
}

impl VoiceClientFactory for FakeFactory {
    fn connect(&self, api_key: &str) -> Result<Box<dyn VoiceClient>> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Connect(api_key.to_string()));

        Ok(Box::new(FakeClient {
            calls: Arc::clone(&self.calls),
            start_error: self.start_error.clone(),
            stop_error: self.stop_error.clone(),
            join_url: self.join_url.clone(),
        }))
    }
}

pub struct FakeClient {
    calls: Arc<Mutex<Vec<Call>>>,
    start_error: Option<String>,
    stop_error: Option<String>,
    join_url: Option<String>,
}

#[async_trait::async_trait]
impl VoiceClient for FakeClient {
    async fn start(&mut self, request: &StartRequest) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Start(request.clone()));
        match &self.start_error {
            Some(message) => anyhow::bail!("{}", message),
            None => Ok(()),
        }
    }

    async fn stop(&mut self) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Stop);
        match &self.stop_error {
            Some(message) => anyhow::bail!("{}", message),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }

    fn join_url(&self) -> Option<&str> {
        Some(self.join_url.as_deref().unwrap_or("https://call.example/join"))
    }
}
