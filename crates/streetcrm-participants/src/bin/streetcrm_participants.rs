//! streetcrm-participants CLI
//!
//! Terminal front end for the event participant panel: list the attendee
//! table, list linkable participants, link and unlink.

use std::cell::Cell;

use clap::{Parser, Subcommand};
use streetcrm_participants::io::{PageEffects, ReqwestHttpClient};
use streetcrm_participants::{
    ApiRoutes, EventId, ParticipantClient, ParticipantId, ParticipantPanel,
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "streetcrm-participants")]
#[command(about = "Inspect and edit the participants of a streetcrm event")]
#[command(version)]
struct Args {
    /// Server origin, e.g. http://localhost:8000
    #[arg(long, env = "STREETCRM_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Event whose participants are shown
    #[arg(short, long)]
    event: u64,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the attendee table
    List,

    /// Print participants that can be linked to the event
    Available,

    /// Link a participant to the event
    Link { person: u64 },

    /// Unlink a participant from the event
    Unlink { person: u64 },
}

/// Page effects for a terminal: alerts go to stderr, a reload re-lists
#[derive(Default)]
struct Terminal {
    reload_requested: Cell<bool>,
}

impl PageEffects for Terminal {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn reload(&self) {
        self.reload_requested.set(true);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let event = EventId(args.event);
    let client = ParticipantClient::new(
        ApiRoutes::new(&args.base_url),
        ReqwestHttpClient::new(),
        Terminal::default(),
    );

    match args.command {
        Commands::List => print_table(&client, event).await,
        Commands::Available => {
            for participant in client.fetch_available_or_empty(event).await {
                println!("{}\t{}", participant.id, participant.full_name());
            }
        }
        Commands::Link { person } => {
            client.link_person(event, ParticipantId(person)).await?;
        }
        Commands::Unlink { person } => {
            client.unlink_person(event, ParticipantId(person)).await?;
        }
    }

    if client.page().reload_requested.get() {
        print_table(&client, event).await;
    }

    Ok(())
}

/// Fetch the linked participants fresh and print one line per row
async fn print_table(client: &ParticipantClient<ReqwestHttpClient, Terminal>, event: EventId) {
    let mut panel = ParticipantPanel::new(event);
    panel.render_rows(client.fetch_participants_or_empty(event).await);

    println!("ID\tFirst\tLast\tInstitution\tPhone\tAddress");
    for row in panel.rows() {
        let view = row.view();
        println!("{}\t{}", view.hidden_id(), view.cells().join("\t"));
    }
}
