use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dashboard::{
    DashboardOrchestrator, DashboardState, FetchState, SnapshotDirSource, UserAction,
    ZoneBusyness,
};
use data_loader::{Restaurant, RestaurantId};
use pipeline::{map_markers, orchestrate, FilterSelection, RatingRange, SortKey};
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Nibbler - restaurant explorer
#[derive(Parser)]
#[command(name = "nibbler")]
#[command(about = "Filter, sort and compare restaurants from a Nibbler snapshot", long_about = None)]
struct Cli {
    /// Directory holding restaurants.json and (optionally) zone_predictions.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List restaurants matching the given filters
    List {
        #[arg(long)]
        cuisine: Option<String>,

        /// Price label, matched exactly (e.g. "$$")
        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        zone: Option<String>,

        /// Overall rating band such as "3-4" (lower bound exclusive)
        #[arg(long)]
        rating_range: Option<RatingRange>,

        #[arg(long)]
        food_rating: Option<f32>,

        /// Required aspect; repeat to require several
        #[arg(long = "aspect")]
        aspects: Vec<String>,

        /// alphabetical, rating, cuisine, zone or price
        #[arg(long)]
        sort: Option<SortKey>,

        /// Maximum number of restaurants to print
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Also print map markers for the listed restaurants
        #[arg(long)]
        markers: bool,
    },

    /// Show the options available for each filter
    Facets,

    /// Compare two restaurants side by side
    Compare {
        first: RestaurantId,
        second: RestaurantId,
    },

    /// Show predicted busyness per zone
    Busyness,

    /// Apply a JSON list of user actions and print the resulting dashboard
    Replay {
        /// File containing e.g. [{"action": "set_cuisine", "cuisine": "Thai"}]
        #[arg(long)]
        events: PathBuf,
    },

    /// Measure visible-list computation over random selections
    Benchmark {
        /// Number of selections to evaluate
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the snapshot (this is the only async step)
    let orchestrator = DashboardOrchestrator::new(SnapshotDirSource::new(&cli.data_dir));
    let state = orchestrator.load(DashboardState::new()).await;
    if let FetchState::Failed(message) = state.fetch_state() {
        bail!("Could not load snapshot from {}: {}", cli.data_dir.display(), message);
    }
    println!(
        "{} Loaded {} restaurants",
        "✓".green(),
        state.store().len()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            cuisine,
            price,
            zone,
            rating_range,
            food_rating,
            aspects,
            sort,
            limit,
            markers,
        } => {
            let actions = vec![
                UserAction::SetCuisine { cuisine },
                UserAction::SetPrice { price },
                UserAction::SetZone { zone },
                UserAction::SetRatingRange { rating_range },
                UserAction::SetFoodRating { food_rating },
                UserAction::SetAspects { aspects },
                UserAction::SetSort { sort },
            ];
            handle_list(state.apply_all(actions), limit, markers)
        }
        Commands::Facets => handle_facets(&state),
        Commands::Compare { first, second } => handle_compare(state, first, second),
        Commands::Busyness => handle_busyness(state.busyness()),
        Commands::Replay { events } => handle_replay(state, events),
        Commands::Benchmark { iterations } => handle_benchmark(&state, iterations),
    }
}

/// Handle the 'list' command
fn handle_list(state: DashboardState, limit: usize, markers: bool) -> Result<()> {
    let visible = state.visible();
    println!(
        "{}",
        format!("{} of {} restaurants match", visible.len(), state.store().len())
            .bold()
            .blue()
    );
    print_restaurants(visible, state.busyness(), limit);

    if markers {
        println!("{}", "Map markers:".bold());
        for marker in map_markers(visible).iter().take(limit) {
            println!(
                "  #{} at ({:.5}, {:.5})",
                marker.id, marker.latitude, marker.longitude
            );
        }
    }
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(state: &DashboardState) -> Result<()> {
    let facets = state.store().facets();

    let print_facet = |title: &str, values: Vec<String>| {
        println!("{} ({})", title.bold().blue(), values.len());
        for value in values {
            println!("  {} {}", "•".green(), value);
        }
    };

    print_facet("Sort keys", SortKey::ALL.iter().map(|k| k.to_string()).collect());
    print_facet("Cuisines", facets.cuisines);
    print_facet("Prices", facets.prices);
    print_facet("Zones", facets.zones);
    print_facet(
        "Rating ranges",
        RatingRange::PRESETS.iter().map(|r| r.to_string()).collect(),
    );
    print_facet(
        "Food ratings",
        facets.food_ratings.iter().map(|r| format!("{r:.1}")).collect(),
    );
    print_facet("Aspects", facets.aspects);
    Ok(())
}

/// Handle the 'compare' command
fn handle_compare(state: DashboardState, first: RestaurantId, second: RestaurantId) -> Result<()> {
    for id in [first, second] {
        if state.store().get(id).is_none() {
            bail!("Restaurant {} not found", id);
        }
    }

    let state = state
        .apply(UserAction::AddToCompare { id: first })
        .apply(UserAction::AddToCompare { id: second });
    let rows = state
        .compare()
        .comparison()
        .ok_or_else(|| anyhow!("Nothing to compare"))?;

    println!("{}", "Compare Restaurants".bold().blue());
    let width = rows.iter().map(|row| row.left.chars().count()).max().unwrap_or(0);
    for row in rows {
        println!(
            "{:<16} {:<width$}  {}",
            row.label.cyan(),
            row.left,
            row.right,
            width = width
        );
    }
    Ok(())
}

/// Handle the 'busyness' command
fn handle_busyness(busyness: &ZoneBusyness) -> Result<()> {
    if busyness.is_empty() {
        println!("No zone predictions in this snapshot.");
        return Ok(());
    }

    println!("{}", "Zone busyness:".bold().blue());
    for (zone, value, level) in busyness.levels() {
        println!("  {:<32} {:>5.2}  {}", zone, value, level);
    }
    Ok(())
}

/// Handle the 'replay' command
fn handle_replay(state: DashboardState, events: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&events)
        .with_context(|| format!("Failed to read {}", events.display()))?;
    let actions: Vec<UserAction> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid user actions in {}", events.display()))?;
    info!("Replaying {} user actions", actions.len());

    let state = state.apply_all(actions);

    println!("{}", "Visible restaurants:".bold().blue());
    print_restaurants(state.visible(), state.busyness(), usize::MAX);

    println!("{}", "Compare:".bold().blue());
    let picked: Vec<&str> = state
        .compare()
        .entries()
        .iter()
        .map(|restaurant| restaurant.display_name())
        .collect();
    match picked.as_slice() {
        [] => println!("  No restaurants to compare."),
        [only] => println!("  {} (pick one more to compare)", only),
        _ => println!("  {}", picked.join(" vs ")),
    }

    println!("{}", "Favorites:".bold().blue());
    for restaurant in state.favorites().iter() {
        println!("  {} {}", "♥".red(), restaurant.display_name());
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(state: &DashboardState, iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    let store = state.store();
    let facets = store.facets();
    let mut rng = rand::rng();

    // Pick a random value for roughly half of the dimensions each round
    let mut pick = |values: &[String]| -> Option<String> {
        if values.is_empty() || !rng.random_bool(0.5) {
            return None;
        }
        Some(values[rng.random_range(0..values.len())].clone())
    };

    let selections: Vec<FilterSelection> = (0..iterations)
        .map(|_| {
            let mut selection = FilterSelection::new();
            selection.cuisine = pick(&facets.cuisines);
            selection.zone = pick(&facets.zones);
            selection.price = pick(&facets.prices);
            selection.aspects.extend(pick(&facets.aspects));
            selection
        })
        .collect();

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    let mut total_visible = 0;
    for mut selection in selections {
        selection.rating_range = rng
            .random_bool(0.3)
            .then(|| RatingRange::PRESETS[rng.random_range(0..RatingRange::PRESETS.len())]);
        selection.sort = rng
            .random_bool(0.5)
            .then(|| SortKey::ALL[rng.random_range(0..SortKey::ALL.len())]);

        let start = Instant::now();
        let visible = orchestrate(store, &selection);
        timings.push(start.elapsed());
        total_visible += visible.len();
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];

    println!("Benchmark results ({} restaurants):", store.len());
    println!("Selections evaluated: {}", iterations);
    println!("Average visible: {:.1}", total_visible as f32 / iterations as f32);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));

    Ok(())
}

/// Helper function to format and print a restaurant list
fn print_restaurants(restaurants: &[Arc<Restaurant>], busyness: &ZoneBusyness, limit: usize) {
    if restaurants.is_empty() {
        println!("No restaurants found.");
        return;
    }

    for (idx, restaurant) in restaurants.iter().take(limit).enumerate() {
        let rating = restaurant
            .overall_rating
            .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
        let zone = restaurant.zone.as_deref().unwrap_or("-");
        let crowd = restaurant
            .zone
            .as_deref()
            .filter(|_| !busyness.is_empty())
            .map(|zone| format!(" ({})", busyness.level_for(zone)))
            .unwrap_or_default();

        println!(
            "{}. {} [{}] {} - {} - Rating: {}{}",
            (idx + 1).to_string().green(),
            restaurant.display_name(),
            restaurant.primary_cuisine.as_deref().unwrap_or("-"),
            restaurant.price.as_deref().unwrap_or("-"),
            zone,
            rating,
            crowd,
        );
    }
    if restaurants.len() > limit {
        println!("... and {} more", restaurants.len() - limit);
    }
}
