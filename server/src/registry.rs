use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use lib::protocol::SessionId;
use tokio::sync::{
    Mutex, MutexGuard,
    mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
};
use tracing::{debug, info};

use crate::session::ClientSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outbound {
    Text(String),
    Close,
}

#[derive(Debug)]
pub(crate) struct SessionSlot {
    pub(crate) session: ClientSession,
    outbound: UnboundedSender<Outbound>,
}

impl SessionSlot {
    pub(crate) fn send(&self, message: Outbound) {
        if self.outbound.send(message).is_err() {
            debug!(
                "session {} writer already gone, dropping output",
                self.session.id()
            );
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Sessions {
    slots: HashMap<SessionId, SessionSlot>,
}

impl Sessions {
    pub(crate) fn get_mut(&mut self, id: SessionId) -> Option<&mut SessionSlot> {
        self.slots.get_mut(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Calls `f` once for every session holding an entry. The set of
    /// sessions is fixed before the first call.
    pub(crate) fn for_each_with_entry<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&mut SessionSlot),
    {
        let mut pending: Vec<SessionId> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.session.entry().is_some())
            .map(|(id, _)| *id)
            .collect();
        pending.sort_unstable();

        let mut visited = 0;
        for id in pending {
            if let Some(slot) = self.slots.get_mut(&id)
                && slot.session.entry().is_some()
            {
                f(slot);
                visited += 1;
            }
        }
        visited
    }

    fn close_all(&mut self) -> usize {
        let count = self.slots.len();
        for (_, slot) in self.slots.drain() {
            slot.send(Outbound::Close);
        }
        count
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ConnectionRegistry {
    sessions: Arc<Mutex<Sessions>>,
    next_id: Arc<AtomicU64>,
}

impl ConnectionRegistry {
    pub(crate) fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(Sessions::default())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub(crate) async fn register(
        &self,
        peer: SocketAddr,
    ) -> (SessionId, String, UnboundedReceiver<Outbound>) {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let session = ClientSession::new(id, peer);
        let greeting = session.greeting();
        let (outbound, rx) = unbounded_channel();

        self.sessions
            .lock()
            .await
            .slots
            .insert(id, SessionSlot { session, outbound });
        info!("session {} connected from {}", id, peer);
        (id, greeting, rx)
    }

    pub(crate) async fn remove(&self, id: SessionId) -> Option<ClientSession> {
        let removed = self.sessions.lock().await.slots.remove(&id);
        if let Some(slot) = &removed {
            info!(
                "session {} disconnected from {}",
                id,
                slot.session.peer()
            );
        }
        removed.map(|slot| slot.session)
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.sessions.lock().await
    }

    pub(crate) async fn close_all(&self) -> usize {
        self.sessions.lock().await.close_all()
    }
}
