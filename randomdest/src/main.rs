use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use randomdest::{
    error::AppError,
    imagery::ImageryConfig,
    models::{Coordinate, Destination, RouteView},
    plan_route, sample_destination, sample_destination_with, DEFAULT_RADIUS_KM,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Pick a random destination around a coordinate and frame the route to it"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draw a random destination around an origin
    Destination {
        /// Origin as "<lat>,<lon>", e.g. 47.608,-122.335
        #[arg(env = "DEFAULT_COORDS", allow_hyphen_values = true)]
        origin: Coordinate,

        /// Maximum distance from the origin in kilometres
        #[arg(long, default_value_t = DEFAULT_RADIUS_KM, value_parser = parse_radius)]
        radius_km: f64,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        json: bool,
    },
    /// Midpoint and zoom level for showing the route between two points
    Route {
        #[arg(allow_hyphen_values = true)]
        origin: Coordinate,

        #[arg(allow_hyphen_values = true)]
        destination: Coordinate,

        /// Distance drawn for the destination; measured from the endpoints when omitted
        #[arg(long, value_parser = parse_distance)]
        distance_km: Option<f64>,

        /// Imagery service key; when set the route image URL is printed too
        #[arg(long, env = "BING_MAPS_KEY", hide_env_values = true)]
        maps_key: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Imagery URL for a single point
    Map {
        #[arg(allow_hyphen_values = true)]
        coords: Coordinate,

        #[arg(long, env = "BING_MAPS_KEY", hide_env_values = true)]
        maps_key: String,
    },
}

#[derive(Debug, Serialize)]
struct RouteOutput {
    #[serde(flatten)]
    route: RouteView,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "randomdest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Args::parse().command {
        Command::Destination {
            origin,
            radius_km,
            seed,
            json,
        } => {
            tracing::info!("drawing destination within {radius_km} km of {origin}");
            let destination = match seed {
                Some(seed) => {
                    sample_destination_with(&mut StdRng::seed_from_u64(seed), origin, radius_km)
                }
                None => sample_destination(origin, radius_km),
            };
            print_destination(&destination, json)?;
        }
        Command::Route {
            origin,
            destination,
            distance_km,
            maps_key,
            json,
        } => {
            let route = plan_route(origin, destination, distance_km);
            let image_url = maps_key
                .map(|key| ImageryConfig::new(key).map(|config| config.route_url(&route)))
                .transpose()?
                .map(String::from);
            print_route(RouteOutput { route, image_url }, json)?;
        }
        Command::Map { coords, maps_key } => {
            let config = ImageryConfig::new(maps_key)?;
            println!("{}", config.point_url(coords));
        }
    }

    Ok(())
}

fn print_destination(destination: &Destination, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(destination)?);
        return Ok(());
    }
    println!(
        "Bearing: {}°, Distance: {} km",
        destination.bearing_deg, destination.distance_km
    );
    println!("New coords: {}", destination.coordinate);
    Ok(())
}

fn print_route(output: RouteOutput, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    let route = output.route;
    println!("Midpoint: {}", route.midpoint);
    println!("Distance: {:.3} km", route.distance_km);
    println!("Zoom: {}", route.zoom);
    if let Some(url) = output.image_url {
        println!("Route image: {url}");
    }
    Ok(())
}

fn parse_radius(value: &str) -> Result<f64, String> {
    let radius: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(format!("radius must be a positive number of kilometres, got {radius}"))
    }
}

fn parse_distance(value: &str) -> Result<f64, String> {
    let distance: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if distance.is_finite() && distance >= 0.0 {
        Ok(distance)
    } else {
        Err(format!("distance must be a non-negative number of kilometres, got {distance}"))
    }
}
