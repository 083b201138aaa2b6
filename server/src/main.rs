use std::path::PathBuf;

use clap::Parser;
use lib::constants::{DEFAULT_DRAW_INTERVAL_MS, DEFAULT_MAX_STEPS, DEFAULT_SERVER_PORT};
use luckydraw_server::{BoxError, RewardSource, ServerConfig, shutdown_signal};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "luckydraw-server")]
#[command(about = "Six-number draw game served over plain TCP")]
struct Cli {
    #[arg(help = "Port to listen on", default_value_t = DEFAULT_SERVER_PORT)]
    port: u16,
    #[arg(
        long,
        help = "Milliseconds between draws",
        default_value_t = DEFAULT_DRAW_INTERVAL_MS
    )]
    interval_ms: u64,
    #[arg(
        long,
        help = "Scrambler steps allowed per draw",
        default_value_t = DEFAULT_MAX_STEPS
    )]
    max_steps: usize,
    #[arg(long, help = "Fix the global seed instead of picking one at random")]
    global_seed: Option<u64>,
    #[arg(long, env = "LUCKYDRAW_REWARD", help = "Token handed to winners")]
    reward: Option<String>,
    #[arg(long, help = "Read the winners' token from this file")]
    reward_file: Option<PathBuf>,
    #[arg(
        long,
        help = "Close a winner's connection after the token is sent",
        default_value_t = false
    )]
    disconnect_on_win: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let reward = RewardSource::from_args(cli.reward, cli.reward_file)?
        .load()
        .await?;
    let mut config = ServerConfig::new(reward)
        .with_interval_ms(cli.interval_ms)
        .with_max_steps(cli.max_steps)
        .with_disconnect_on_win(cli.disconnect_on_win);
    if let Some(global_seed) = cli.global_seed {
        config = config.with_global_seed(global_seed);
    }

    let listener = TcpListener::bind(("0.0.0.0", cli.port)).await?;
    luckydraw_server::run_until(listener, config, shutdown_signal()).await
}
