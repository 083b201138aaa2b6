use std::{
    future::{Future, pending},
    net::SocketAddr,
    sync::Arc,
};

use lib::draw::{Draw, GlobalSeed, now_ms};
use tokio::{net::TcpListener, sync::watch, task::JoinHandle};
use tracing::{error, info};

mod accept_loop;
mod broadcast;
mod config;
mod connection;
mod error;
mod registry;
mod responses;
mod reward;
mod scheduler;
mod session;
mod signal;
mod state;

pub use config::ServerConfig;
pub use error::BoxError;
pub use reward::RewardSource;
pub use scheduler::{DrawSource, SeededDrawSource};
pub use signal::shutdown_signal;

use crate::{
    registry::ConnectionRegistry,
    scheduler::{DrawScheduler, RepeatingTask},
    state::{ServerState, Settings},
};

pub async fn run(listener: TcpListener, config: ServerConfig) -> Result<(), BoxError> {
    run_until(listener, config, pending::<()>()).await
}

pub async fn run_until(
    listener: TcpListener,
    config: ServerConfig,
    shutdown: impl Future<Output = ()> + Send,
) -> Result<(), BoxError> {
    let global_seed = config
        .global_seed
        .map_or_else(|| GlobalSeed::generate(config.interval_ms), GlobalSeed::new);
    let source = Arc::new(SeededDrawSource::new(global_seed, config.max_steps));
    info!("draw will be chosen every {}ms", config.interval_ms);

    let mut service = DrawService::start(listener, config, source)?;
    tokio::pin!(shutdown);

    let failure = tokio::select! {
        _ = &mut shutdown => None,
        result = service.wait() => Some(result),
    };
    match failure {
        Some(result) => result,
        None => {
            info!("shutdown signal received, stopping server");
            service.stop().await
        }
    }
}

pub struct DrawService {
    local_addr: SocketAddr,
    draws: watch::Receiver<Draw>,
    registry: ConnectionRegistry,
    scheduler: RepeatingTask,
    acceptor: Option<JoinHandle<()>>,
}

impl DrawService {
    pub fn start(
        listener: TcpListener,
        config: ServerConfig,
        source: Arc<dyn DrawSource>,
    ) -> Result<Self, BoxError> {
        config.validate()?;
        let local_addr = listener.local_addr()?;
        let scheduler = DrawScheduler::new(config.interval_ms, source);
        let first = scheduler.next_draw(now_ms())?;

        let (draws_tx, draws) = watch::channel(first.clone());
        let registry = ConnectionRegistry::new();
        let settings = Arc::new(Settings::from(&config));
        let scheduler = scheduler.spawn(first, draws_tx, registry.clone(), settings);

        let state = ServerState::new(registry.clone(), draws.clone());
        let acceptor = tokio::spawn(accept_loop::accept_connections(listener, state));
        info!("server listening on {}", local_addr);

        Ok(Self {
            local_addr,
            draws,
            registry,
            scheduler,
            acceptor: Some(acceptor),
        })
    }

    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn draws(&self) -> watch::Receiver<Draw> {
        self.draws.clone()
    }

    pub async fn wait(&mut self) -> Result<(), BoxError> {
        let result = self.scheduler.finished().await;
        if let Err(err) = &result {
            error!("draw generator failed, closing all connections: {}", err);
        }
        self.halt().await;
        result
    }

    pub async fn stop(mut self) -> Result<(), BoxError> {
        self.scheduler.cancel();
        let result = self.scheduler.finished().await;
        self.halt().await;
        result
    }

    async fn halt(&mut self) {
        self.scheduler.cancel();
        let closed = self.registry.close_all().await;
        if let Some(acceptor) = self.acceptor.take() {
            acceptor.abort();
            let _ = acceptor.await;
        }
        info!("closed {} connections", closed);
    }
}
