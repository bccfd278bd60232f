//! Example: quick tour of the recommendation engine
//!
//! Run with: cargo run --package engine --example quick_demo
//!
//! This example shows how to:
//! 1. Build an engine over the sample catalog
//! 2. Get collaborative recommendations for a user
//! 3. Get content-based recommendations for a movie
//! 4. Combine both with a hybrid query
//! 5. Add a rating and watch the results shift

use engine::RecommendationEngine;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== Recommendation Engine Quick Demo ===\n");

    // Build the engine over the built-in sample catalog
    let start = Instant::now();
    let mut engine = RecommendationEngine::with_sample_data();
    let (movies, ratings) = engine.catalog().counts();
    println!(
        "Built engine over {} movies / {} ratings in {:?}\n",
        movies,
        ratings,
        start.elapsed()
    );

    // Collaborative filtering
    let user_id = 1;
    println!("Collaborative recommendations for user {}:", user_id);
    for (i, title) in engine
        .get_collaborative_recommendations(user_id, 3)
        .iter()
        .enumerate()
    {
        println!("  {}. {}", i + 1, title);
    }
    println!();

    // Content-based filtering
    let reference = "The Dark Knight";
    println!("Movies similar to '{}':", reference);
    for (i, title) in engine
        .get_content_based_recommendations(reference, 3)
        .iter()
        .enumerate()
    {
        println!("  {}. {}", i + 1, title);
    }
    println!();

    // Hybrid
    println!("Hybrid recommendations for user 2 (favorite: The Matrix):");
    for (i, title) in engine
        .get_hybrid_recommendations(2, Some("The Matrix"), 3)
        .iter()
        .enumerate()
    {
        println!("  {}. {}", i + 1, title);
    }
    println!();

    // Ingest a new rating and show the shift
    println!("User 1 rates Forrest Gump (id 6) with 5.0...");
    engine.add_rating(1, 6, 5.0);
    println!("Collaborative recommendations for user 1 now:");
    for (i, title) in engine
        .get_collaborative_recommendations(1, 3)
        .iter()
        .enumerate()
    {
        println!("  {}. {}", i + 1, title);
    }

    Ok(())
}
