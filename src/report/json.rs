//! JSON output for ranking snapshots.
//!
//! Serializes a RankingView to JSON for scripting and piping.

use super::RankingView;

pub fn render(view: &RankingView) -> String {
    serde_json::to_string_pretty(view).unwrap_or_else(|_| String::from("{}"))
}
