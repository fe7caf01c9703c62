#![allow(dead_code)]

use songwalk_core::{SimilarityGraph, load_graph};

pub const HEADER: &str =
    "source,target,value,s_artist,t_artist,s_tags,t_tags,s_attribute,t_attribute";

/// Builds a table with only the required columns.
pub fn simple_table(rows: &[(&str, &str, &str)]) -> String {
    let mut table = String::from("source,target,value\n");
    for (source, target, value) in rows {
        table.push_str(&format!("{},{},{}\n", quote(source), quote(target), value));
    }
    table
}

pub fn simple_graph(rows: &[(&str, &str, f64)]) -> SimilarityGraph {
    let weights: Vec<String> = rows.iter().map(|(_, _, weight)| weight.to_string()).collect();
    let borrowed: Vec<(&str, &str, &str)> = rows
        .iter()
        .zip(&weights)
        .map(|((source, target, _), weight)| (*source, *target, weight.as_str()))
        .collect();
    load_graph(&simple_table(&borrowed)).unwrap()
}

fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// A small slice of the song graph with artist and tag columns filled in.
pub fn song_table() -> String {
    [
        HEADER,
        r#"Numb,In the End,0.9,Linkin Park,Linkin Park,"[['nu metal', 100], ['rock', 80]]","[['nu metal', 100]]",song,song"#,
        r#"Numb,Scream,0.7,Linkin Park,Avenged Sevenfold,"[['nu metal', 100]]","[['metal', 100]]",song,song"#,
        r#"In the End,Faint,0.8,Linkin Park,Linkin Park,"[['nu metal', 100]]","[['nu metal', 90]]",song,song"#,
        r#"Faint,Numb,0.6,Linkin Park,Linkin Park,"[['nu metal', 90]]","[['nu metal', 100]]",song,song"#,
        r#"Scream,Numb,0.5,Avenged Sevenfold,Linkin Park,"[['metal', 100]]","[['nu metal', 100]]",song,song"#,
        r#"Linkin Park artist,Numb,1.0,,Linkin Park,[],"[['nu metal', 100]]",artist,song"#,
        "",
    ]
    .join("\n")
}
