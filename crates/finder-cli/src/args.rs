use clap::{Parser, Subcommand};

/// CLI arguments for finder-cli
#[derive(Debug, Parser)]
#[command(
    name = "finder",
    version,
    about = "Find restaurants near a location using the Google Places nearby search"
)]
pub struct CliArgs {
    /// Google Maps API key (falls back to VITE_GOOGLE_MAPS_API_KEY)
    #[arg(long = "api-key", env = "GOOGLE_MAPS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Your position as "lat,lng" (e.g. 37.7749,-122.4194). Without it there is no location.
    #[arg(short = 'l', long = "location", env = "FINDER_LOCATION", global = true)]
    pub location: Option<String>,

    /// Search radius in meters (default: 1500)
    #[arg(short = 'r', long = "radius", allow_negative_numbers = true, global = true)]
    pub radius: Option<i64>,

    /// Nearby search endpoint
    #[arg(long = "endpoint", global = true)]
    pub endpoint: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long = "timeout", global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one search and print the page
    Search,

    /// Keep the page open and edit the radius, search again or select results
    Interactive,
}
