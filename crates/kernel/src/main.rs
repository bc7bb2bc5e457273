//! Kembara catalog CLI
//!
//! Renders the annual plan, gallery and activities views to the terminal.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kembara_kernel::config::Config;
use kembara_kernel::content::ContentStore;
use kembara_kernel::gallery::{LoadOutcome, ScrollPosition};
use kembara_kernel::gather::{GatherResult, MonthGroup, PlanStats};
use kembara_kernel::models::{Activity, AdventureEvent};
use kembara_kernel::views::{ActivitiesView, AnnualPlanView, GalleryCard, GalleryView};

/// Viewport height used for simulated scroll events.
const VIEWPORT_HEIGHT: f64 = 900.0;

#[derive(Parser)]
#[command(name = "kembara", version, about = "Query the Kembara adventure catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annual adventure plan (grid or timeline).
    Plan(PlanArgs),
    /// Photo gallery with simulated infinite scroll.
    Gallery(GalleryArgs),
    /// Activities catalog.
    Activities(ActivitiesArgs),
    /// Annual plan headline numbers.
    Stats {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct PlanArgs {
    /// Free-text search over title, location and description.
    #[arg(long, short, default_value = "")]
    query: String,
    /// Event type, or "All".
    #[arg(long = "type", default_value = "All")]
    event_type: String,
    /// Month name, or "All".
    #[arg(long, default_value = "All")]
    month: String,
    /// Group results by month.
    #[arg(long)]
    timeline: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GalleryArgs {
    /// Free-text search over title, description, location and tags.
    #[arg(long, short, default_value = "")]
    query: String,
    /// Tag, or "All".
    #[arg(long, default_value = "All")]
    tag: String,
    /// Number of scroll-to-bottom events to simulate.
    #[arg(long, default_value_t = 0)]
    scrolls: u32,
    /// Image ids to like.
    #[arg(long = "like")]
    likes: Vec<u32>,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ActivitiesArgs {
    /// Activity category, or "All".
    #[arg(long, default_value = "All")]
    category: String,
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let config = Config::from_env().context("failed to load configuration")?;
    let content = ContentStore::load().context("failed to load site content")?;
    info!(
        events = content.events.len(),
        images = content.gallery.initial.len(),
        "content loaded"
    );

    match cli.command {
        Command::Plan(args) => run_plan(&config, content.events, args),
        Command::Gallery(args) => run_gallery(&config, content, args).await,
        Command::Activities(args) => run_activities(content.activities, args),
        Command::Stats { json } => {
            let stats = PlanStats::from_events(&content.events);
            if json {
                print_json(&stats)
            } else {
                println!("Total adventures: {}", stats.total);
                println!("Confirmed:        {}", stats.confirmed);
                println!("Activity types:   {}", stats.event_types);
                println!("Months covered:   {}", stats.months_covered);
                Ok(())
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{json}");
    Ok(())
}

fn run_plan(config: &Config, events: Vec<AdventureEvent>, args: PlanArgs) -> Result<()> {
    let mut view = AnnualPlanView::new(events, config.season_year);
    view.set_query(args.query);
    view.set_type(args.event_type);
    view.set_month(args.month);

    if args.timeline {
        let timeline = view.timeline();
        if args.json {
            return print_json(&timeline);
        }
        print_timeline(&timeline, view.season_year());
    } else {
        let grid = view.grid();
        if args.json {
            return print_json(&grid);
        }
        print_grid(&grid, view.season_year());
    }

    Ok(())
}

fn print_event(event: &AdventureEvent, season_year: i32) {
    println!(
        "  [{}] {} | {} | {} | {}",
        event.event_type,
        event.title,
        event.date_label(season_year),
        event.location,
        event.status_label()
    );
}

fn print_grid(grid: &GatherResult<'_, AdventureEvent>, season_year: i32) {
    println!("{}", grid.summary("adventures"));
    if grid.is_empty() {
        println!("No adventures found. Try clearing the search or filters.");
        return;
    }
    for event in &grid.items {
        print_event(event, season_year);
    }
}

fn print_timeline(timeline: &[MonthGroup<'_>], season_year: i32) {
    if timeline.is_empty() {
        println!("No adventures found. Try clearing the search or filters.");
        return;
    }
    for group in timeline {
        println!("{} ({})", group.month, group.events.len());
        for event in &group.events {
            print_event(event, season_year);
        }
    }
}

async fn run_gallery(config: &Config, content: ContentStore, args: GalleryArgs) -> Result<()> {
    let mut view = GalleryView::simulated(content.gallery, config.feed);
    view.set_query(args.query);
    view.set_tag(args.tag);
    for id in args.likes {
        view.toggle_like(id);
    }

    // Pretend the visitor scrolled the grid's end into view.
    let at_bottom = ScrollPosition {
        container_bottom: VIEWPORT_HEIGHT,
        viewport_height: VIEWPORT_HEIGHT,
    };
    for _ in 0..args.scrolls {
        let Some(handle) = view.on_scroll(at_bottom) else {
            info!("no more images to load");
            break;
        };
        match handle.await.context("gallery load task failed")? {
            LoadOutcome::Appended(count) => info!(count, "loaded more images"),
            LoadOutcome::Failed => warn!("image batch failed to load"),
            outcome => info!(?outcome, "load finished"),
        }
    }

    let cards = view.visible();
    if args.json {
        return print_json(&cards);
    }

    println!("Showing {} of {} photos", cards.len(), view.image_count());
    if cards.is_empty() {
        println!("No photos found. Try clearing the search or tag.");
        return Ok(());
    }
    for card in &cards {
        print_card(card);
    }
    if view.show_end_message() {
        println!("You've explored all our current adventures.");
    }

    Ok(())
}

fn print_card(card: &GalleryCard) {
    let (tags, hidden) = card.image.tag_preview(2);
    let more = if hidden > 0 {
        format!(" +{hidden}")
    } else {
        String::new()
    };
    println!(
        "  #{} {} | {} | {} | {} likes{} | {}{}",
        card.image.id,
        card.image.title,
        card.image.date,
        card.image.location,
        card.display_likes,
        if card.liked { " (liked)" } else { "" },
        tags.join(", "),
        more
    );
}

fn run_activities(activities: Vec<Activity>, args: ActivitiesArgs) -> Result<()> {
    let mut view = ActivitiesView::new(activities);
    view.set_category(args.category);

    let visible = view.visible();
    if args.json {
        return print_json(&visible);
    }

    for activity in &visible.items {
        println!(
            "  [{}] {} | {} | {}",
            activity.category.as_str(),
            activity.title,
            activity.duration,
            activity.difficulty.label()
        );
    }
    Ok(())
}
