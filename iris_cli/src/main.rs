use clap::Parser;
use tracing::debug;

use iris_osrm::{ClientConfig, OsrmClient, Overview, Profile, RouteOptions};

mod parsers;
mod render;

const LICENSE: &str = "MIT License - https://opensource.org/license/mit";

#[derive(Parser)]
#[clap(author, version, about = "Query the public OSRM routing service", long_about = None)]
struct Cli {
    /// Routing profile; English and Spanish names are accepted
    #[arg(short, long, default_value = "car")]
    profile: String,

    /// Geometry encoding: polyline, polyline6 or geojson
    #[arg(short, long, default_value = "polyline")]
    geometry: String,

    /// Ask for alternative routes
    #[arg(long)]
    alternatives: bool,

    /// Include turn-by-turn steps
    #[arg(long)]
    steps: bool,

    /// Keep going straight at waypoints instead of allowing U-turns
    #[arg(long)]
    straight: bool,

    /// Request the full overview geometry
    #[arg(long)]
    overview: bool,

    /// Do not ask the service to generate snapping hints
    #[arg(long)]
    no_hints: bool,

    /// Seconds before a request is abandoned
    #[arg(short, long, default_value_t = 10)]
    timeout: u8,

    /// Colorize the output
    #[arg(short, long)]
    color: bool,

    /// Lowercase the rendered output
    #[arg(long)]
    lowercase: bool,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Print the license and exit
    #[arg(long)]
    license: bool,

    #[arg(short, long)]
    debug: bool,

    /// Start position as `lat,lon`
    from: Option<String>,

    /// End position as `lat,lon`
    to: Option<String>,

    /// Comma-joined hint tokens from an earlier response
    hints: Option<String>,
}

fn bail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    if cli.license {
        println!("{LICENSE}");
        return Ok(());
    }

    let Some(profile) = Profile::from_localized_name(&cli.profile) else {
        bail(&format!("unknown profile: {}", cli.profile));
    };

    let geometries = match parsers::parse_geometries(&cli.geometry) {
        Ok(geometries) => geometries,
        Err(message) => bail(&message),
    };

    let (Some(from), Some(to)) = (&cli.from, &cli.to) else {
        bail("two positions are required, each as `lat,lon`");
    };

    let coordinates = match (parsers::parse_coordinate(from), parsers::parse_coordinate(to)) {
        (Ok(from), Ok(to)) => vec![from, to],
        (Err(message), _) | (_, Err(message)) => bail(&message),
    };

    debug!(%profile, ?coordinates, "resolved request");

    let options = RouteOptions {
        alternatives: cli.alternatives,
        steps: cli.steps,
        continue_straight: cli.straight,
        geometries,
        overview: if cli.overview {
            Overview::Full
        } else {
            Overview::False
        },
        generate_hints: !cli.no_hints,
        hints: cli
            .hints
            .as_deref()
            .map(parsers::parse_hints)
            .unwrap_or_default(),
        ..RouteOptions::default()
    };

    let client = OsrmClient::new(ClientConfig {
        timeout_secs: cli.timeout,
        proxy: None,
    });

    let document = client.route(profile, &coordinates, &options).await?;

    println!(
        "{}",
        render::render(&document, cli.color, cli.compact, cli.lowercase)
    );

    Ok(())
}
