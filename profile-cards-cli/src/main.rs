use std::process::ExitCode;

use clap::{Parser, Subcommand};
use profile_cards_lib::ProfileStore;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod navigate;
mod render;

#[derive(Parser, Debug)]
#[command(name = "profile-cards")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print the users list screen
    List,
    /// Print the details screen of a single user
    Show {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    /// Replay navigation steps and print where they end up
    ///
    /// Each step is either `back` or a route path such as `users_details/3`.
    Navigate { steps: Vec<String> },
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = match ProfileStore::builtin() {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load built-in profiles: {e}");
            return sysexits::ExitCode::Software.into();
        }
    };

    let code = match &cli.command {
        Command::List => render::list(&store),
        Command::Show { id } => render::show(&store, (*id).into()),
        Command::Navigate { steps } => navigate::handle(&store, steps),
    };

    code.into()
}
