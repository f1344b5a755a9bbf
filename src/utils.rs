use crate::types::{GenreTableRow, TrackArtist};

pub fn fmt_metric(value: f64) -> String {
    let rendered = format!("{:.3}", value);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn artist_summary(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .take(3)
        .map(|a| a.name.clone())
        .collect::<Vec<String>>()
        .join(",")
}

pub fn sort_genre_rows(rows: &mut Vec<GenreTableRow>) {
    // stable sort keeps first-seen order among equal counts
    rows.sort_by(|a, b| b.count.cmp(&a.count));
}
