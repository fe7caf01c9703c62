use songwalk_core::{RecommendError, Recommendations, SimilarityGraph};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::utils::format_number;

pub fn display_search_info(args: &Args, graph: &SimilarityGraph, colors: &ColorScheme) {
    println!(
        "🎵 Finding songs similar to {}",
        colors.song_name(&format!("\"{}\"", args.song))
    );

    if args.verbose {
        println!(
            "📂 Loaded {} songs and {} connections from {:?}",
            colors.number(&format_number(graph.universe.len())),
            colors.number(&format_number(graph.forward.edge_count())),
            args.table
        );
    }

    if args.steps != 500 {
        println!(
            "🚶 Walking {} steps",
            colors.number(&format_number(args.steps))
        );
    }

    if let Some(seed) = args.seed {
        println!("🎲 Using seed {}", colors.number(&seed.to_string()));
    }

    println!("🔍 Searching...");
}

pub fn display_recommendations(
    result: &Recommendations,
    graph: &SimilarityGraph,
    search_duration: f64,
    args: &Args,
    colors: &ColorScheme,
) {
    if args.quiet {
        for song in &result.songs {
            println!("{}", song);
        }
        return;
    }

    println!(
        "\n{} Songs similar to {}:\n",
        colors.success("✅"),
        colors.song_name(&format!("\"{}\"", result.resolved))
    );

    for (rank, song) in result.songs.iter().enumerate() {
        println!("{}", format_song_line(rank + 1, song, graph, colors));
    }

    if args.verbose {
        display_walk_statistics(result, search_duration, colors);
    }
}

pub fn format_song_line(
    rank: usize,
    song: &str,
    graph: &SimilarityGraph,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{:3} {}",
        colors.rank(&format!("{}.", rank)),
        colors.song_name(&format!("\"{}\"", song))
    );

    let artist = graph
        .universe
        .id(song)
        .and_then(|id| graph.metadata_for(id))
        .and_then(|metadata| metadata.artist.as_deref());

    if let Some(artist) = artist {
        formatted_line.push_str(&format!(" - {}", colors.artist(artist)));
    }

    formatted_line
}

pub fn display_failure(error: &RecommendError, colors: &ColorScheme) {
    eprintln!("{} {}", colors.error("❌ Error:"), error);

    let suggestions = error.suggestions();
    if !suggestions.is_empty() && !matches!(error, RecommendError::NotFound { .. }) {
        eprintln!("💡 Try one of: {}", suggestions.join(", "));
    }
}

fn display_walk_statistics(result: &Recommendations, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Walked {} steps over the {} graph in {} sec ({} restarts, {} stalls)",
        colors.stats("📊"),
        colors.number(&format_number(result.walk.steps)),
        result.direction.as_str(),
        colors.number(&format!("{:.3}", search_duration)),
        colors.number(&format_number(result.walk.restarts)),
        colors.number(&format_number(result.walk.stalls))
    );

    for (song, visits) in &result.walk.top_visits {
        println!(
            "    {} {}",
            colors.song_name(&format!("\"{}\"", song)),
            colors.number(&format!("[{} visits]", visits))
        );
    }
}
