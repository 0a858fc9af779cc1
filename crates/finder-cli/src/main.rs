//! finder — find restaurants near you from the terminal
//!
//! The page the browser front end draws (banner, radius, map markers,
//! result cards) is printed as text instead.
//!
//! Usage examples
//! --------------
//!
//! - One search around a position, default radius (1500 m)
//!   $ finder --location 37.7749,-122.4194 search
//!
//! - Wider radius
//!   $ finder -l 37.7749,-122.4194 -r 5000 search
//!
//! - Keep the page open: change the radius, search again, select results
//!   $ finder -l 37.7749,-122.4194 interactive
//!
//! Configuration
//! -------------
//!
//! The API key comes from `--api-key` or `GOOGLE_MAPS_API_KEY`
//! (`VITE_GOOGLE_MAPS_API_KEY` also works). Without a key the search
//! capability cannot start and the error screen is shown. Without
//! `--location` / `FINDER_LOCATION` there is no location: no search runs and
//! the map placeholder stays.
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see every request.
mod args;
mod logging;
mod repl;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use finder_core::config::{API_KEY_VAR, ENDPOINT_VAR, TIMEOUT_VAR};
use finder_core::prelude::*;
use std::io;

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let args = CliArgs::parse();

    // Flags win over the environment
    let config = FinderConfig::from_lookup(|name| {
        let flag = match name {
            API_KEY_VAR => args.api_key.clone(),
            ENDPOINT_VAR => args.endpoint.clone(),
            TIMEOUT_VAR => args.timeout.map(|t| t.to_string()),
            _ => None,
        };
        flag.or_else(|| std::env::var(name).ok())
    });

    let radius = args
        .radius
        .or_else(|| config.as_ref().ok().map(|c| c.default_radius))
        .unwrap_or(DEFAULT_RADIUS_METERS);
    tracing::debug!(radius, "Starting restaurant finder");
    let controller = Controller::new(radius);

    let mut session = match config.and_then(|c| GooglePlacesClient::from_config(&c)) {
        Ok(client) => Session::new(controller, client),
        Err(e) => Session::failed(controller, &e),
    };

    let location = TextLocation(args.location.unwrap_or_default());
    session.start(&location);

    match args.command {
        Commands::Search => {
            let screen = session.screen();
            print!("{screen}");
            if let Screen::Fatal { message, .. } = screen {
                anyhow::bail!(message);
            }
        }

        Commands::Interactive => {
            if let Screen::Fatal { message, .. } = session.screen() {
                print!("{}", session.screen());
                anyhow::bail!(message);
            }
            let stdin = io::stdin();
            repl::run(&mut session, stdin.lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}
