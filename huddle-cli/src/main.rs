use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use huddle_client::{ClientConfig, LogSink, Session, SessionCommand, WebRtcStack, WsTransport};
use huddle_core::{ParticipantName, RoomName};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "huddle")]
#[command(about = "Multi-party audio conference client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a signaling server and join a room.
    Join {
        /// Signaling endpoint.
        #[arg(long, default_value = "ws://localhost:8080/groupcall")]
        server: String,

        /// Room to join.
        #[arg(short, long)]
        room: String,

        /// Display name inside the room.
        #[arg(short, long)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Join { server, room, name } => join(server, room, name).await,
    }
}

async fn join(server: String, room: String, name: String) -> Result<()> {
    println!("{}", format!("Connecting to {}...", server).cyan());

    let (signal_tx, signal_rx) = mpsc::channel(256);
    let transport = WsTransport::connect(&server, signal_tx)
        .await
        .context("Failed to reach signaling server")?;

    let config = ClientConfig {
        server_url: server,
        ..Default::default()
    };
    let rtc = Arc::new(WebRtcStack::new(config));

    let (command_tx, command_rx) = mpsc::channel(16);
    let session = Session::new(
        command_rx,
        signal_rx,
        Arc::new(transport),
        rtc,
        Arc::new(LogSink),
    );
    let session_task = tokio::spawn(session.run());

    command_tx
        .send(SessionCommand::Register {
            name: ParticipantName::from(name.as_str()),
            room: RoomName::from(room.as_str()),
        })
        .await
        .context("Session ended before registration")?;

    println!("{}", format!("ROOM {}", room).green().bold());
    println!("Press Ctrl-C to leave.");

    tokio::signal::ctrl_c().await?;

    println!("{}", "Leaving room...".yellow());
    let _ = command_tx.send(SessionCommand::Leave).await;
    // Dropping the command channel ends the session loop even if the join
    // never completed.
    drop(command_tx);
    session_task.await?;

    println!("{}", "Left the room.".green());
    Ok(())
}
