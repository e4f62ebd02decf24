pub mod json;
pub mod table;

use serde::Serialize;

use crate::player::Player;

/// One snapshot as shown to the caller: the tag that identifies it plus
/// its players, already ordered by score descending.
#[derive(Serialize)]
pub struct RankingView<'a> {
    pub import_tag: &'a str,
    pub players: &'a [Player],
}

pub fn print(view: &RankingView, json_output: bool) {
    if json_output {
        println!("{}", json::render(view));
    } else {
        print!("{}", table::render(view));
    }
}
