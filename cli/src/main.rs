use clap::Parser;
use songwalk::colors::ColorScheme;
use songwalk::display::{display_failure, display_recommendations, display_search_info};
use songwalk::json_output::{create_json_output, print_json_output};
use songwalk::{Args, SongwalkApp};
use std::time::Instant;

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color && !args.json);

    let app = match SongwalkApp::new(&args) {
        Ok(app) => app,
        Err(error_message) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error_message);
            std::process::exit(1);
        }
    };

    let graph = match app.load_graph() {
        Ok(graph) => graph,
        Err(error_message) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error_message);
            std::process::exit(1);
        }
    };

    if !args.json && !args.quiet {
        display_search_info(&args, &graph, &colors);
    }

    let search_timer = Instant::now();
    let outcome = app.recommend(&graph, &args.song);
    let search_duration = search_timer.elapsed().as_secs_f64();

    if args.json {
        let json_output = create_json_output(&outcome, search_duration, &args, &graph);
        print_json_output(&json_output);
        if outcome.is_err() {
            std::process::exit(1);
        }
        return;
    }

    match outcome {
        Ok(result) => display_recommendations(&result, &graph, search_duration, &args, &colors),
        Err(error) => {
            display_failure(&error, &colors);
            std::process::exit(1);
        }
    }
}
