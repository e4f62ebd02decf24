//! SQLite persistence for imported players.
//!
//! One table, `jogadores`, holds every row ever imported; the
//! `data_importacao` column groups rows into snapshots. Rows are inserted
//! once and never updated.
//!
//! Storage failures stop at this boundary: writes report zero inserted,
//! reads report an empty result, and the cause goes to stderr. Callers
//! never see a storage error type.

use rusqlite::{params, Connection};
use std::path::Path;

use crate::player::Player;

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS jogadores (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            nivel INTEGER NOT NULL,
            pontuacao REAL NOT NULL,
            data_importacao TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_jogadores_data_importacao
         ON jogadores(data_importacao)",
        [],
    )?;

    Ok(())
}

/// Database handle. Open once per command, reuse across all operations.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database file and ensure the schema exists. Idempotent;
    /// safe to call on every startup.
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Store { conn })
    }

    /// Insert one row per player, all sharing `import_tag`, in a single
    /// transaction. Either every row is visible after return or none is.
    /// Returns the count inserted; 0 on storage failure.
    pub fn insert(&mut self, players: &[Player], import_tag: &str) -> usize {
        match self.try_insert(players, import_tag) {
            Ok(count) => count,
            Err(e) => {
                eprintln!("error: failed to insert players: {e}");
                0
            }
        }
    }

    fn try_insert(
        &mut self,
        players: &[Player],
        import_tag: &str,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let tx = self.conn.transaction()?;

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO jogadores (nome, nivel, pontuacao, data_importacao)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;

            for player in players {
                stmt.execute(params![
                    player.name(),
                    player.level(),
                    player.score(),
                    import_tag
                ])?;
            }
        }

        tx.commit()?;
        Ok(players.len())
    }

    /// Distinct import tags, most recent first. The tag format sorts
    /// lexicographically in chronological order.
    pub fn list_import_tags(&self) -> Vec<String> {
        match self.try_list_import_tags() {
            Ok(tags) => tags,
            Err(e) => {
                eprintln!("error: failed to list snapshots: {e}");
                Vec::new()
            }
        }
    }

    fn try_list_import_tags(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT data_importacao
             FROM jogadores
             ORDER BY data_importacao DESC",
        )?;

        let tags = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tags)
    }

    /// All players imported under `import_tag`, ordered by score
    /// descending. Tie order between equal scores is unspecified.
    pub fn load_snapshot(&self, import_tag: &str) -> Vec<Player> {
        match self.try_load_snapshot(import_tag) {
            Ok(players) => players,
            Err(e) => {
                eprintln!("error: failed to load snapshot: {e}");
                Vec::new()
            }
        }
    }

    fn try_load_snapshot(
        &self,
        import_tag: &str,
    ) -> Result<Vec<Player>, Box<dyn std::error::Error>> {
        let mut stmt = self.conn.prepare(
            "SELECT nome, nivel, pontuacao
             FROM jogadores
             WHERE data_importacao = ?1
             ORDER BY pontuacao DESC",
        )?;

        let players = stmt
            .query_map(params![import_tag], |row| {
                Ok(Player::new(
                    row.get::<_, String>(0)?,
                    row.get(1)?,
                    row.get(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(players)
    }
}
