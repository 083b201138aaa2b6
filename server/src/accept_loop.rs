use crate::{connection::handle_connection, state::ServerState};
use tokio::{net::TcpListener, task::JoinSet};
use tracing::error;

/// Accepts until aborted. Dropping this future aborts every connection task
/// it spawned, which closes their sockets.
pub(crate) async fn accept_connections(listener: TcpListener, state: ServerState) {
    let mut connections = JoinSet::new();
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _)) => {
                        let state = state.clone();
                        connections.spawn(async move {
                            if let Err(err) = handle_connection(stream, state).await {
                                error!("connection handling failed: {}", err);
                            }
                        });
                    }
                    Err(err) => {
                        error!("accept error: {}", err);
                    }
                }
            }
            Some(joined) = connections.join_next(), if !connections.is_empty() => {
                if let Err(err) = joined
                    && err.is_panic()
                {
                    error!("connection task panicked: {}", err);
                }
            }
        }
    }
}
