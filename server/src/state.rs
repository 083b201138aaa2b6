use lib::{
    draw::{Draw, now_ms},
    protocol::SessionId,
};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    config::ServerConfig,
    registry::{ConnectionRegistry, Outbound},
    session::Submission,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) reward: String,
    pub(crate) disconnect_on_win: bool,
}

impl From<&ServerConfig> for Settings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            reward: config.reward.clone(),
            disconnect_on_win: config.disconnect_on_win,
        }
    }
}

#[derive(Clone)]
pub(crate) struct ServerState {
    pub(crate) registry: ConnectionRegistry,
    draws: watch::Receiver<Draw>,
}

impl ServerState {
    pub(crate) const fn new(registry: ConnectionRegistry, draws: watch::Receiver<Draw>) -> Self {
        Self { registry, draws }
    }

    pub(crate) async fn submit(&self, id: SessionId, input: &str) {
        let mut sessions = self.registry.lock().await;
        let Some(slot) = sessions.get_mut(id) else {
            return;
        };

        let draw = self.draws.borrow().clone();
        match slot.session.submit_raw_input(input, &draw, now_ms()) {
            Submission::Accepted { entry, reply } => {
                info!("session {} entry: {}", id, entry);
                slot.send(Outbound::Text(reply));
            }
            Submission::Rejected { reason, reply } => {
                info!("session {} invalid entry: {}", id, reason);
                slot.send(Outbound::Text(reply));
            }
            Submission::Ignored => {
                debug!(
                    "session {} sent input while {:?}, ignoring",
                    id,
                    slot.session.state()
                );
            }
        }
    }
}
