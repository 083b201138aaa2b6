use lib::protocol::{SessionId, read_line, write_text};
use tokio::{
    io::{AsyncWriteExt, BufReader},
    net::{
        TcpStream,
        tcp::{OwnedReadHalf, OwnedWriteHalf},
    },
    sync::mpsc::UnboundedReceiver,
};

use crate::{error::BoxError, registry::Outbound, state::ServerState};

pub(crate) async fn handle_connection(
    stream: TcpStream,
    state: ServerState,
) -> Result<(), BoxError> {
    let peer = stream.peer_addr()?;
    let (id, greeting, outbound) = state.registry.register(peer).await;
    let result = serve(stream, &state, id, &greeting, outbound).await;
    state.registry.remove(id).await;
    result
}

async fn serve(
    stream: TcpStream,
    state: &ServerState,
    id: SessionId,
    greeting: &str,
    mut outbound: UnboundedReceiver<Outbound>,
) -> Result<(), BoxError> {
    let (read_half, mut write_half) = stream.into_split();
    write_text(&mut write_half, greeting).await?;
    tokio::select! {
        read_result = read_entries(BufReader::new(read_half), state, id) => read_result,
        write_result = write_outbound(&mut write_half, &mut outbound) => write_result,
    }
}

async fn read_entries(
    mut reader: BufReader<OwnedReadHalf>,
    state: &ServerState,
    id: SessionId,
) -> Result<(), BoxError> {
    while let Some(line) = read_line(&mut reader).await? {
        state.submit(id, &line).await;
    }
    Ok(())
}

async fn write_outbound(
    writer: &mut OwnedWriteHalf,
    outbound: &mut UnboundedReceiver<Outbound>,
) -> Result<(), BoxError> {
    while let Some(message) = outbound.recv().await {
        match message {
            Outbound::Text(text) => write_text(writer, &text).await?,
            Outbound::Close => break,
        }
    }
    writer.shutdown().await?;
    Ok(())
}
