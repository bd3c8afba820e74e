use std::sync::Arc;

use tokio::sync::Mutex;

use super::MatchEngine;
use crate::model::MatchView;

/// Cloneable handle that serialises access to one [`MatchEngine`].
///
/// Each call to [`with`](Self::with) runs under the lock, so commands from
/// concurrent event handlers apply one after another and a goal can never
/// interleave with an undo.
#[derive(Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<MatchEngine>>,
}

impl SharedEngine {
    pub fn new(engine: MatchEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `command` against the engine while holding the lock.
    pub async fn with<R>(&self, command: impl FnOnce(&mut MatchEngine) -> R) -> R {
        let mut engine = self.inner.lock().await;
        command(&mut engine)
    }

    pub async fn view(&self) -> MatchView {
        self.inner.lock().await.view()
    }
}
