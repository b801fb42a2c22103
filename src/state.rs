use crate::config::AppConfig;
use crate::tracker::Tracker;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_parts(config, Tracker::new()))
    }

    pub fn from_parts(config: Arc<AppConfig>, tracker: Tracker) -> Self {
        Self {
            config,
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Locks the session. Every request runs to completion while holding it.
    ///
    /// A panic under the lock poisons it; the tracker only mutates through
    /// whole actions, so the guard is taken back instead of failing every
    /// later request.
    pub fn session(&self) -> MutexGuard<'_, Tracker> {
        self.tracker.lock().unwrap_or_else(|poisoned| {
            warn!("session lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            log: crate::config::LogConfig {
                filter: "calorie_tracker=debug".into(),
                json: false,
            },
        });
        Self::from_parts(config, Tracker::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FoodId;
    use crate::tracker::Action;

    #[test]
    fn session_survives_a_panic_under_the_lock() {
        let state = AppState::fake();
        let shared = state.clone();
        let joined = std::thread::spawn(move || {
            let _guard = shared.session();
            panic!("handler blew up");
        })
        .join();
        assert!(joined.is_err());
        assert!(state.tracker.is_poisoned());

        let mut tracker = state.session();
        tracker.dispatch(Action::SelectFood {
            food_id: Some(FoodId(1)),
        });
        tracker.dispatch(Action::AddEntry);
        assert_eq!(tracker.log().len(), 1);
    }
}
