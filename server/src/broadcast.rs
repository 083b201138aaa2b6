use lib::draw::Draw;
use tracing::info;

use crate::{
    registry::{Outbound, Sessions},
    session::Outcome,
    state::Settings,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RoundSummary {
    pub(crate) winners: usize,
    pub(crate) losers: usize,
}

pub(crate) fn resolve_all(
    sessions: &mut Sessions,
    draw: &Draw,
    settings: &Settings,
) -> RoundSummary {
    let mut summary = RoundSummary::default();
    sessions.for_each_with_entry(|slot| {
        let Some(resolution) =
            slot.session
                .resolve(draw, &settings.reward, settings.disconnect_on_win)
        else {
            return;
        };

        let id = slot.session.id();
        match resolution.outcome {
            Outcome::Win => {
                info!(
                    "session {} ********** WINNER ********** ({})",
                    id, resolution.entry
                );
                summary.winners += 1;
            }
            Outcome::Lose => {
                info!("session {} lost with {}", id, resolution.entry);
                summary.losers += 1;
            }
        }

        slot.send(Outbound::Text(resolution.reply));
        if resolution.close {
            slot.send(Outbound::Close);
        }
    });
    summary
}
