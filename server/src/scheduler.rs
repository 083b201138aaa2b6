use std::{sync::Arc, time::Duration};

use lib::{
    draw::{
        Draw, GeneratorError, GlobalSeed, compute_next_boundary, derive_seed, format_numbers,
        generate, now_ms,
    },
    protocol::format_clock,
};
use tokio::{sync::watch, task::JoinHandle, time::sleep};
use tracing::{error, info};

use crate::{
    broadcast::resolve_all, error::BoxError, registry::ConnectionRegistry, state::Settings,
};

pub trait DrawSource: Send + Sync {
    fn draw_at(&self, boundary_ms: u64) -> Result<Draw, GeneratorError>;
}

#[derive(Debug, Clone, Copy)]
pub struct SeededDrawSource {
    global_seed: GlobalSeed,
    max_steps: usize,
}

impl SeededDrawSource {
    pub const fn new(global_seed: GlobalSeed, max_steps: usize) -> Self {
        Self {
            global_seed,
            max_steps,
        }
    }
}

impl DrawSource for SeededDrawSource {
    fn draw_at(&self, boundary_ms: u64) -> Result<Draw, GeneratorError> {
        let seed = derive_seed(boundary_ms, self.global_seed);
        let numbers = generate(seed, self.max_steps)?;
        Ok(Draw::new(boundary_ms, seed, numbers))
    }
}

pub(crate) struct DrawScheduler {
    interval_ms: u64,
    source: Arc<dyn DrawSource>,
}

impl DrawScheduler {
    pub(crate) fn new(interval_ms: u64, source: Arc<dyn DrawSource>) -> Self {
        Self {
            interval_ms,
            source,
        }
    }

    pub(crate) fn next_draw(&self, now_ms: u64) -> Result<Draw, GeneratorError> {
        let boundary = compute_next_boundary(now_ms, self.interval_ms);
        let draw = self.source.draw_at(boundary)?;
        info!(
            "[{}] next draw {} (seed {})",
            format_clock(draw.boundary_ms()),
            format_numbers(draw.generation_order()),
            draw.seed()
        );
        Ok(draw)
    }

    pub(crate) fn spawn(
        self,
        current: Draw,
        draws: watch::Sender<Draw>,
        registry: ConnectionRegistry,
        settings: Arc<Settings>,
    ) -> RepeatingTask {
        let handle = tokio::spawn(async move {
            let result = self.run(current, draws, registry, settings).await;
            if let Err(err) = &result {
                error!("draw scheduling stopped: {}", err);
            }
            result
        });
        RepeatingTask {
            handle: Some(handle),
            failure: None,
        }
    }

    async fn run(
        self,
        mut current: Draw,
        draws: watch::Sender<Draw>,
        registry: ConnectionRegistry,
        settings: Arc<Settings>,
    ) -> Result<(), GeneratorError> {
        loop {
            let wait = current.boundary_ms().saturating_sub(now_ms());
            sleep(Duration::from_millis(wait)).await;

            // The next draw is published before the registry is released, so
            // an entry accepted after this point always sees its own draw.
            let mut sessions = registry.lock().await;
            let summary = resolve_all(&mut sessions, &current, &settings);
            info!(
                "draw {} resolved: {} winners, {} losers, {} connected",
                format_numbers(current.generation_order()),
                summary.winners,
                summary.losers,
                sessions.len()
            );

            current = self.next_draw(now_ms())?;
            draws.send_replace(current.clone());
        }
    }
}

pub(crate) struct RepeatingTask {
    handle: Option<JoinHandle<Result<(), GeneratorError>>>,
    failure: Option<GeneratorError>,
}

impl RepeatingTask {
    pub(crate) fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    /// `Ok` if the task was cancelled, the generator failure otherwise. Once
    /// the task has been joined, later calls return the same outcome at once.
    pub(crate) async fn finished(&mut self) -> Result<(), BoxError> {
        let Some(handle) = self.handle.as_mut() else {
            return self.failure.clone().map_or(Ok(()), |err| Err(err.into()));
        };
        let joined = handle.await;
        self.handle = None;
        match joined {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                self.failure = Some(err.clone());
                Err(err.into())
            }
            Err(err) if err.is_cancelled() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
