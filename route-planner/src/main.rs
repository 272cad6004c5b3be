use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use route_planner::config::AppConfig;
use route_planner::console::{Command, HELP, parse_command};
use route_planner::geocode::GeocodeClient;
use route_planner::render::{RecordingMap, RouteRenderer};
use route_planner::routing::RouteClient;
use route_planner::routing::mock::MockRouteService;
use route_planner::session::Session;

/// Reply served by `--mock` when no file is given.
const DEFAULT_MOCK_REPLY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/mock_route.json");

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_planner=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(2);
    });

    // `--mock [FILE]` serves a canned route locally instead of the real service
    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        if arg != "--mock" {
            eprintln!("usage: route-planner [--mock [REPLY.json]]");
            std::process::exit(2);
        }
        let path = args.next().map(PathBuf::from).unwrap_or_else(|| DEFAULT_MOCK_REPLY.into());
        let mock = MockRouteService::from_file(&path).expect("Failed to load mock reply");
        let addr = mock.spawn().await.expect("Failed to start mock routing service");
        println!("Mock routing service on http://{addr} ({})", path.display());
        config.route = config.route.with_base_url(format!("http://{addr}"));
    }

    let routes = RouteClient::new(config.route.clone()).expect("Failed to create route client");
    let geocoder =
        GeocodeClient::new(config.geocode.clone()).expect("Failed to create geocoding client");
    let map = RecordingMap::new(config.map.center, config.map.zoom);
    let mut session = Session::new(routes, geocoder, RouteRenderer::new(map, config.map));

    println!("Routing service: {}", config.route.base_url);
    println!("{HELP}");
    print_panel(&session.panel().lines());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Event(event)) => {
                for notice in session.dispatch(event).await {
                    println!("! {notice}");
                }
                print_panel(&session.panel().lines());
                println!("  ({} layers on the map)", session.renderer().map().layer_count());
            }
            Ok(Command::Show { html: false }) => print_panel(&session.panel().lines()),
            Ok(Command::Show { html: true }) => match session.panel().render_html() {
                Ok(html) => println!("{html}"),
                Err(e) => eprintln!("Failed to render panel: {e}"),
            },
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(e) => println!("? {e}"),
        }
    }
}

fn print_panel(lines: &[String]) {
    for line in lines {
        println!("  {line}");
    }
}
