use anyhow::{Context, Result, bail};
use catalog::{Catalog, UserId, parser, sample_catalog};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::RecommendationEngine;
use std::io::{self, Write};
use std::path::PathBuf;

/// cine-recs - Hybrid Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "cine-recs")]
#[command(
    about = "Movie recommendations via collaborative and content-based filtering",
    long_about = None
)]
struct Cli {
    /// Path to a movies CSV file (movieId,title,genres)
    #[arg(long)]
    movies: Option<PathBuf>,

    /// Path to a ratings CSV file (userId,movieId,rating)
    #[arg(long)]
    ratings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get collaborative-filtering recommendations for a user
    Recommend {
        /// User ID to get recommendations for
        #[arg(long)]
        user_id: UserId,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Find movies similar to a given title (content-based)
    Similar {
        /// Movie title (exact match)
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Combine collaborative and content-based recommendations
    Hybrid {
        /// User ID to get recommendations for
        #[arg(long)]
        user_id: UserId,

        /// Optional favorite movie title for the content branch
        #[arg(long)]
        title: Option<String>,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show information about a movie
    Info {
        /// Movie title (exact match)
        #[arg(long)]
        title: String,
    },

    /// List all movies in the catalog
    Movies,

    /// Run the interactive menu loop
    Interactive,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = load_catalog(&cli)?;
    let (movies, ratings) = catalog.counts();
    println!(
        "{} Loaded catalog: {} movies, {} ratings",
        "✓".green(),
        movies,
        ratings
    );

    let mut engine = RecommendationEngine::from_catalog(catalog);

    match cli.command {
        Commands::Recommend { user_id, limit } => {
            let recs = engine.get_collaborative_recommendations(user_id, limit);
            print_titles(&format!("Recommendations for user {}", user_id), &recs);
        }
        Commands::Similar { title, limit } => {
            let recs = engine.get_content_based_recommendations(&title, limit);
            if recs.is_empty() && engine.get_movie_info(&title).is_none() {
                println!("{}", format!("Movie '{}' not found", title).red());
            } else {
                print_titles(&format!("Movies similar to '{}'", title), &recs);
            }
        }
        Commands::Hybrid {
            user_id,
            title,
            limit,
        } => {
            let recs = engine.get_hybrid_recommendations(user_id, title.as_deref(), limit);
            print_titles(&format!("Hybrid recommendations for user {}", user_id), &recs);
        }
        Commands::Info { title } => print_movie_info(&engine, &title),
        Commands::Movies => print_catalog(&engine),
        Commands::Interactive => run_interactive(&mut engine)?,
    }

    Ok(())
}

/// Load the catalog from CSV files, falling back to the built-in
/// sample data when no files are given.
fn load_catalog(cli: &Cli) -> Result<Catalog> {
    match (&cli.movies, &cli.ratings) {
        (Some(movies_path), Some(ratings_path)) => {
            let movies =
                parser::load_movies(movies_path).context("Failed to load movies file")?;
            let ratings =
                parser::load_ratings(ratings_path).context("Failed to load ratings file")?;
            Ok(Catalog::from_parts(movies, ratings))
        }
        (None, None) => {
            println!("No data files given, using the built-in sample catalog");
            Ok(sample_catalog())
        }
        _ => bail!("--movies and --ratings must be given together"),
    }
}

fn print_titles(header: &str, titles: &[String]) {
    println!("{}", header.bold().blue());
    if titles.is_empty() {
        println!("  (no recommendations)");
        return;
    }
    for (i, title) in titles.iter().enumerate() {
        println!("{}. {}", (i + 1).to_string().green(), title);
    }
}

fn print_movie_info(engine: &RecommendationEngine, title: &str) {
    match engine.get_movie_info(title) {
        Some(movie) => {
            println!("{}", "Movie Information:".bold().blue());
            println!("  Title:    {}", movie.title);
            println!("  Movie ID: {}", movie.id);
            println!("  Genres:   {}", movie.genres);
        }
        None => println!("{}", format!("Movie '{}' not found", title).red()),
    }
}

fn print_catalog(engine: &RecommendationEngine) {
    println!("{}", "Available Movies:".bold().blue());
    for movie in engine.catalog().movies() {
        println!(
            "{:>3}. {} [{}]",
            movie.id.to_string().green(),
            movie.title,
            movie.genres
        );
    }
}

/// Prompt on stdout and read one trimmed line from stdin.
fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_limit() -> Result<usize> {
    let raw = prompt("Number of recommendations (default 5): ")?;
    if raw.is_empty() {
        return Ok(5);
    }
    raw.parse().context("Invalid number")
}

/// The interactive menu loop.
fn run_interactive(engine: &mut RecommendationEngine) -> Result<()> {
    println!("\nType 'quit' at the menu to exit.");

    loop {
        println!("\n{}", "Options:".bold());
        println!("1. Recommendations for a user (collaborative filtering)");
        println!("2. Similar movies (content-based filtering)");
        println!("3. Hybrid recommendations");
        println!("4. Movie information");
        println!("5. Add a rating");
        println!("6. Quit");

        let choice = prompt("\nEnter your choice (1-6): ")?;
        let outcome = match choice.as_str() {
            "1" => interactive_recommend(engine),
            "2" => interactive_similar(engine),
            "3" => interactive_hybrid(engine),
            "4" => {
                let title = prompt("Movie title: ")?;
                print_movie_info(engine, &title);
                Ok(())
            }
            "5" => interactive_add_rating(engine),
            "6" | "quit" => {
                println!("Bye!");
                return Ok(());
            }
            _ => {
                println!("{}", "Invalid choice, enter a number from 1 to 6".red());
                Ok(())
            }
        };

        // Bad input keeps the loop alive rather than exiting
        if let Err(e) = outcome {
            println!("{}", format!("Error: {}", e).red());
        }
    }
}

fn interactive_recommend(engine: &RecommendationEngine) -> Result<()> {
    let user_id: UserId = prompt("User ID: ")?.parse().context("Invalid user ID")?;
    let limit = prompt_limit()?;
    let recs = engine.get_collaborative_recommendations(user_id, limit);
    print_titles(&format!("Recommendations for user {}", user_id), &recs);
    Ok(())
}

fn interactive_similar(engine: &RecommendationEngine) -> Result<()> {
    let title = prompt("Movie title: ")?;
    let limit = prompt_limit()?;
    let recs = engine.get_content_based_recommendations(&title, limit);
    if recs.is_empty() && engine.get_movie_info(&title).is_none() {
        println!("{}", format!("Movie '{}' not found", title).red());
    } else {
        print_titles(&format!("Movies similar to '{}'", title), &recs);
    }
    Ok(())
}

fn interactive_hybrid(engine: &RecommendationEngine) -> Result<()> {
    let user_id: UserId = prompt("User ID: ")?.parse().context("Invalid user ID")?;
    let title = prompt("Favorite movie title (optional, Enter to skip): ")?;
    let limit = prompt_limit()?;
    let title = if title.is_empty() { None } else { Some(title) };
    let recs = engine.get_hybrid_recommendations(user_id, title.as_deref(), limit);
    print_titles("Hybrid recommendations", &recs);
    Ok(())
}

fn interactive_add_rating(engine: &mut RecommendationEngine) -> Result<()> {
    let user_id: UserId = prompt("User ID: ")?.parse().context("Invalid user ID")?;
    let movie_id: catalog::MovieId =
        prompt("Movie ID: ")?.parse().context("Invalid movie ID")?;
    let score: f32 = prompt("Rating (1-5): ")?.parse().context("Invalid rating")?;

    // Range validation lives here at the UI boundary; the engine
    // accepts whatever it is handed
    if !(1.0..=5.0).contains(&score) {
        bail!("Rating must be between 1 and 5");
    }

    engine.add_rating(user_id, movie_id, score);
    println!("{} Rating added", "✓".green());
    Ok(())
}
