//! Terminal table rendering for ranking snapshots.
//!
//! One row per player with rank position, name, level and score; players
//! arrive already sorted by score descending.

use super::RankingView;

pub fn render(view: &RankingView) -> String {
    if view.players.is_empty() {
        return String::from("No players in this snapshot.\n");
    }

    let mut output = String::new();

    output.push_str(&format!("snapshot: {}\n\n", view.import_tag));
    output.push_str(&format!(
        "{:<6} {:<24} {:>6} {:>10}\n",
        "Rank", "Name", "Level", "Score"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for (position, player) in view.players.iter().enumerate() {
        output.push_str(&format!(
            "{:<6} {:<24} {:>6} {:>10.1}\n",
            position + 1,
            truncate(player.name(), 24),
            player.level(),
            player.score()
        ));
    }

    output.push_str(&format!("\n{} players\n", view.players.len()));

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}
