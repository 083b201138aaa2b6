use std::net::SocketAddr;

use lib::{
    draw::{Draw, Entry, EntryError},
    protocol::SessionId,
};

use crate::responses;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    AwaitingEntry,
    WaitingForDraw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Submission {
    Accepted { entry: Entry, reply: String },
    Rejected { reason: EntryError, reply: String },
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Win,
    Lose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub(crate) entry: Entry,
    pub(crate) outcome: Outcome,
    pub(crate) reply: String,
    pub(crate) close: bool,
}

#[derive(Debug)]
pub(crate) struct ClientSession {
    id: SessionId,
    peer: SocketAddr,
    state: SessionState,
    entry: Option<Entry>,
}

impl ClientSession {
    pub(crate) const fn new(id: SessionId, peer: SocketAddr) -> Self {
        Self {
            id,
            peer,
            state: SessionState::AwaitingEntry,
            entry: None,
        }
    }

    pub(crate) const fn id(&self) -> SessionId {
        self.id
    }

    pub(crate) const fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub(crate) const fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) const fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    pub(crate) fn greeting(&self) -> String {
        responses::welcome()
    }

    pub(crate) fn submit_raw_input(
        &mut self,
        input: &str,
        draw: &Draw,
        now_ms: u64,
    ) -> Submission {
        if self.state != SessionState::AwaitingEntry {
            return Submission::Ignored;
        }

        match Entry::parse(input) {
            Ok(entry) => {
                self.entry = Some(entry);
                self.state = SessionState::WaitingForDraw;
                Submission::Accepted {
                    entry,
                    reply: responses::waiting_for_draw(now_ms, draw.boundary_ms()),
                }
            }
            Err(reason) => Submission::Rejected {
                reason,
                reply: responses::entry_prompt(),
            },
        }
    }

    pub(crate) fn resolve(
        &mut self,
        draw: &Draw,
        reward: &str,
        disconnect_on_win: bool,
    ) -> Option<Resolution> {
        if self.state != SessionState::WaitingForDraw {
            return None;
        }
        let entry = self.entry.take()?;
        self.state = SessionState::AwaitingEntry;

        let resolution = if entry.numbers() == draw.canonical_order() {
            Resolution {
                entry,
                outcome: Outcome::Win,
                reply: responses::draw_won(draw, reward, !disconnect_on_win),
                close: disconnect_on_win,
            }
        } else {
            Resolution {
                entry,
                outcome: Outcome::Lose,
                reply: responses::draw_lost(draw),
                close: false,
            }
        };
        Some(resolution)
    }
}
