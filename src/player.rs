use serde::Serialize;

/// One validated player entry. Constructed only from input that already
/// passed row validation, and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    name: String,
    level: i64,
    score: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, level: i64, score: f64) -> Self {
        Player {
            name: name.into(),
            level,
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}
