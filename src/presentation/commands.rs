// Console commands standing in for the page's inputs and buttons
use crate::application::dashboard::Dashboard;
use crate::application::document::{Document, InputField, Region};
use crate::presentation::console::{format_region, ConsoleDocument};
use crate::presentation::map_layer::MarkerLayer;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::{Stream, StreamExt};

const HELP: &str = "commands: city <name> | refresh | bus <label> | search | show | markers | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Type into the city input.
    City(String),
    /// Press the weather refresh button.
    Refresh,
    /// Type into the bus label input.
    Bus(String),
    /// Press the transport search button.
    Search,
    /// Reprint every region.
    Show,
    Markers,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "city" => Command::City(arg.to_string()),
            "refresh" => Command::Refresh,
            "bus" => Command::Bus(arg.to_string()),
            "search" => Command::Search,
            "show" => Command::Show,
            "markers" => Command::Markers,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        };
        Some(command)
    }
}

/// Reads commands from stdin until `quit`, end of input or Ctrl-C.
pub async fn run_console(
    dashboard: &Dashboard,
    document: &ConsoleDocument,
    map: &MarkerLayer,
) -> anyhow::Result<()> {
    let lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    println!("{}", HELP);
    run_commands(lines, dashboard, document, map).await
}

/// Button presses return at once; their fetches finish in the background.
async fn run_commands<S>(
    mut lines: S,
    dashboard: &Dashboard,
    document: &ConsoleDocument,
    map: &MarkerLayer,
) -> anyhow::Result<()>
where
    S: Stream<Item = std::io::Result<String>> + Unpin,
{
    loop {
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next() => line,
        };
        let Some(line) = line else {
            break;
        };

        let Some(command) = Command::parse(&line?) else {
            continue;
        };

        match command {
            Command::City(city) => document.set_input_value(InputField::City, &city),
            Command::Refresh => dashboard.refresh_weather_clicked(),
            Command::Bus(label) => document.set_input_value(InputField::BusLabel, &label),
            Command::Search => dashboard.search_transport_clicked(),
            Command::Show => print_regions(document),
            Command::Markers => print_markers(dashboard, map),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(line) => println!("unknown command '{}'; {}", line, HELP),
        }
    }

    Ok(())
}

fn print_regions(document: &ConsoleDocument) {
    for region in [Region::Weather, Region::Crime, Region::Transport, Region::Events] {
        match document.content(region) {
            Some(content) => println!("{}", format_region(region, &content)),
            None => println!("[{}] (not loaded)", region.element_id()),
        }
    }
}

fn print_markers(dashboard: &Dashboard, map: &MarkerLayer) {
    println!(
        "[map] {} zoom {}, tiles {} ({})",
        map.center(),
        map.zoom(),
        map.tiles().url_template,
        map.tiles().attribution
    );
    let label = dashboard.state().last_searched_label();
    println!(
        "[map] {} markers, {} tracking vehicle label '{}'",
        map.len(),
        dashboard.transport_marker_count(),
        label
    );
    if map.is_empty() {
        println!("  (no markers)");
    }
    for (handle, marker) in map.markers() {
        match marker.rotation {
            Some(angle) => println!(
                "  #{} {} ({}°) {}",
                handle.0, marker.position, angle, marker.popup
            ),
            None => println!("  #{} {} {}", handle.0, marker.position, marker.popup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::map_view::UniformJitter;
    use crate::application::testing::ScriptedApi;
    use crate::domain::geo::Coordinate;
    use crate::infrastructure::config::load_dashboard_config_from;
    use crate::presentation::map_layer::TileLayer;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   "), None);
        assert_eq!(
            Command::parse("city Le Havre"),
            Some(Command::City("Le Havre".to_string()))
        );
        assert_eq!(Command::parse("city"), Some(Command::City(String::new())));
        assert_eq!(Command::parse("REFRESH"), Some(Command::Refresh));
        assert_eq!(
            Command::parse("bus   42 "),
            Some(Command::Bus("42".to_string()))
        );
        assert_eq!(Command::parse("search"), Some(Command::Search));
        assert_eq!(Command::parse("show"), Some(Command::Show));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(
            Command::parse("fly away"),
            Some(Command::Unknown("fly away".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stuck_search_does_not_block_commands() {
        let config = load_dashboard_config_from("config/does-not-exist").unwrap();
        let api = Arc::new(ScriptedApi::default());
        let _release = api.gate_transport("42");
        let document = Arc::new(ConsoleDocument::quiet());
        let map = Arc::new(
            MarkerLayer::initialize(Coordinate::new(49.4431, 1.0993), 13, TileLayer::default())
                .unwrap(),
        );
        let dashboard = Dashboard::new(
            &config,
            api.clone(),
            document.clone(),
            map.clone(),
            Arc::new(UniformJitter::new(config.pins.spread)),
        );

        let script = ["bus 42", "search", "city Caen", "quit", "refresh"]
            .map(|line| Ok::<_, std::io::Error>(line.to_string()));
        tokio::time::timeout(
            Duration::from_secs(5),
            run_commands(tokio_stream::iter(script), &dashboard, &document, &map),
        )
        .await
        .expect("command loop should reach quit")
        .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(dashboard.state().last_searched_label(), "42");
        assert_eq!(document.input_value(InputField::City), Some("Caen".to_string()));
        assert_eq!(api.requests(), vec!["transport:42"]);

        tokio::time::timeout(Duration::from_secs(5), dashboard.shutdown())
            .await
            .expect("shutdown should cancel the stuck search");
    }
}
