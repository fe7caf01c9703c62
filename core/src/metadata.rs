use crate::parsing::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Song,
    Artist,
    #[default]
    Unknown,
}

impl From<&str> for NodeKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "song" => NodeKind::Song,
            "artist" => NodeKind::Artist,
            _ => NodeKind::Unknown,
        }
    }
}

/// Descriptive columns carried alongside an edge endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SongMetadata {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy)]
pub enum Endpoint {
    Source,
    Target,
}

impl Endpoint {
    fn columns(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Endpoint::Source => ("s_attribute", "s_artist", "s_tags"),
            Endpoint::Target => ("t_attribute", "t_artist", "t_tags"),
        }
    }
}

impl SongMetadata {
    pub fn from_record(record: &Record<'_>, endpoint: Endpoint) -> Option<Self> {
        let (attribute_column, artist_column, tags_column) = endpoint.columns();

        let kind = record.get(attribute_column).map(NodeKind::from).unwrap_or_default();
        let artist = record
            .get(artist_column)
            .filter(|artist| !artist.is_empty())
            .map(str::to_string);
        let tags = record.get(tags_column).map(parse_tag_list).unwrap_or_default();

        let metadata = Self { kind, artist, tags };
        if metadata.is_empty() { None } else { Some(metadata) }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == NodeKind::Unknown && self.artist.is_none() && self.tags.is_empty()
    }
}

/// Reads a tag column such as `[['rock', 100], ['indie', 42]]`, keeping the
/// tag names in order. Anything unreadable yields no tags.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return vec![];
    }

    let normalized = raw.replace('\'', "\"");
    match serde_json::from_str::<Vec<serde_json::Value>>(&normalized) {
        Ok(entries) => entries.iter().filter_map(tag_name).collect(),
        Err(_) => vec![],
    }
}

fn tag_name(entry: &serde_json::Value) -> Option<String> {
    let name = match entry {
        serde_json::Value::Array(pair) => pair.first().and_then(|name| name.as_str()),
        serde_json::Value::String(name) => Some(name.as_str()),
        _ => None,
    };
    name.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_python_style_tag_pairs() {
        let tags = parse_tag_list("[['rock', 100], ['alternative rock', 57]]");
        assert_eq!(tags, vec!["rock", "alternative rock"]);
    }

    #[test]
    fn plain_string_tags_are_kept() {
        assert_eq!(parse_tag_list("['pop', 'dance']"), vec!["pop", "dance"]);
    }

    #[test]
    fn unreadable_tags_are_dropped() {
        assert!(parse_tag_list("rock; pop").is_empty());
        assert!(parse_tag_list("").is_empty());
    }

    #[test]
    fn node_kind_is_case_insensitive() {
        assert_eq!(NodeKind::from("Song"), NodeKind::Song);
        assert_eq!(NodeKind::from(" ARTIST "), NodeKind::Artist);
        assert_eq!(NodeKind::from("album"), NodeKind::Unknown);
    }
}
