use super::pages::Pages;
use crate::config::Config;
use crate::interview::InterviewSettings;
use crate::session::{SessionController, StopOutcome};
use crate::vapi::VoiceClientFactory;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// State of one browser session; both flows are independent
pub struct BrowserSession {
    pub assistant: SessionController,

    pub interview: SessionController,

    /// Role, level and duration of the last interview start attempt
    pub interview_settings: InterviewSettings,

    /// Last request that touched this session
    pub last_seen: DateTime<Utc>,
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserSession {
    pub fn new() -> Self {
        Self {
            assistant: SessionController::new("assistant"),
            interview: SessionController::new("interview"),
            interview_settings: InterviewSettings::default(),
            last_seen: Utc::now(),
        }
    }

    /// Whole seconds since the last request, zero if the clock went backwards
    pub fn idle_secs(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.last_seen).num_seconds()).unwrap_or(0)
    }

    /// Stop any remote session still held before this state is dropped
    pub async fn shutdown(&mut self, id: &str) {
        for controller in [&mut self.assistant, &mut self.interview] {
            if !controller.has_handle() {
                continue;
            }

            match controller.stop().await {
                Ok(StopOutcome::Stopped) => info!("Stopped abandoned session in {}", id),
                Ok(StopOutcome::Orphaned { error }) => {
                    warn!("Abandoned session in {} may still be running: {}", id, error)
                }
                Err(_) => {}
            }
        }
    }
}

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// Creates voice clients for start actions
    pub factory: Arc<dyn VoiceClientFactory>,

    /// Browser sessions (session id → state)
    pub sessions: Arc<RwLock<HashMap<String, Arc<Mutex<BrowserSession>>>>>,

    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(config: Config, factory: Arc<dyn VoiceClientFactory>) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            factory,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            pages: Arc::new(Pages::new()?),
        })
    }

    /// Look up a session this server issued and mark it as seen
    pub async fn existing_session(
        &self,
        id: Option<&str>,
    ) -> Option<(String, Arc<Mutex<BrowserSession>>)> {
        let id = id?;
        let session = self.sessions.read().await.get(id).cloned()?;
        session.lock().await.last_seen = Utc::now();

        Some((id.to_string(), session))
    }

    /// Look up a browser session, creating a fresh INACTIVE one when the
    /// requested id is missing or unknown.
    ///
    /// Returns the id to hand back to the browser. Ids are always generated
    /// here, never adopted from the request.
    pub async fn browser_session(&self, id: Option<&str>) -> (String, Arc<Mutex<BrowserSession>>) {
        if let Some(found) = self.existing_session(id).await {
            return found;
        }

        self.evict_idle(Utc::now()).await;

        let id = uuid::Uuid::new_v4().to_string();
        let session = Arc::new(Mutex::new(BrowserSession::new()));
        self.sessions
            .write()
            .await
            .insert(id.clone(), Arc::clone(&session));
        info!("New browser session {}", id);

        (id, session)
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop sessions idle for longer than `service.http.session_idle_secs`
    /// as of `now`, stopping their remote sessions first.
    ///
    /// Sessions locked by an in-flight request are skipped. Returns the
    /// number evicted.
    pub async fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let limit = self.config.service.http.session_idle_secs;

        let expired: Vec<(String, Arc<Mutex<BrowserSession>>)> = {
            let mut sessions = self.sessions.write().await;
            let ids: Vec<String> = sessions
                .iter()
                .filter(|(_, session)| {
                    session
                        .try_lock()
                        .map(|s| s.idle_secs(now) >= limit)
                        .unwrap_or(false)
                })
                .map(|(id, _)| id.clone())
                .collect();

            ids.into_iter()
                .filter_map(|id| sessions.remove(&id).map(|session| (id, session)))
                .collect()
        };

        for (id, session) in &expired {
            info!("Evicting idle browser session {}", id);
            session.lock().await.shutdown(id).await;
        }

        expired.len()
    }

    /// Periodically evict idle sessions for the lifetime of the server
    pub fn spawn_idle_reaper(&self, period: Duration) -> JoinHandle<()> {
        let state = self.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let evicted = state.evict_idle(Utc::now()).await;
                if evicted > 0 {
                    info!("Evicted {} idle browser sessions", evicted);
                }
            }
        })
    }
}
