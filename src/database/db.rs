use super::db_structs::{Player, PlayerCalculation};
use indexmap::IndexMap;
use rusqlite::{params, types::Value, Connection, OpenFlags, Row};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

const NAME_COLUMN: &str = "Name";
const POSITION_COLUMN: &str = "Position";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Failed to connect to database: {0}")]
    ConnectionError(#[source] rusqlite::Error),

    #[error("Database query failed: {0}")]
    QueryError(#[from] rusqlite::Error),

    #[error("Table '{0}' does not exist")]
    TableNotFound(String),

    #[error("Table '{table}' has no '{column}' column")]
    MissingColumn { table: String, column: String },

    #[error("Invalid table name '{0}'")]
    InvalidTableName(String)
}

pub struct DbClient {
    conn: Connection
}

impl DbClient {
    /// Opens an existing SQLite database. A missing file is an error rather than
    /// silently creating an empty store.
    pub fn connect(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX
        )
        .map_err(DbError::ConnectionError)?;

        info!("Connected to {}", path.display());
        Ok(DbClient { conn })
    }

    /// Reads every row of `table` as a player. `Name` and `Position` are matched
    /// case-insensitively, every other column is read as a stat.
    pub fn get_players(&self, table: &str) -> Result<Vec<Player>, DbError> {
        Self::check_table_name(table)?;

        if !self.table_exists(table)? {
            return Err(DbError::TableNotFound(table.to_string()));
        }

        info!("Fetching players from {}...", table);
        let mut stmt = self.conn.prepare(&format!("SELECT * FROM \"{}\"", table))?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let name_idx = Self::column_index(&columns, NAME_COLUMN, table)?;
        let position_idx = Self::column_index(&columns, POSITION_COLUMN, table)?;

        let mut rows = stmt.query([])?;
        let mut players = Vec::new();

        while let Some(row) = rows.next()? {
            players.push(Self::player_from_row(row, &columns, name_idx, position_idx)?);
        }

        info!("Fetched {} players", players.len());
        Ok(players)
    }

    /// Replaces `table` with the given calculations.
    pub fn save_calculations(&mut self, table: &str, calculations: &[PlayerCalculation]) -> Result<(), DbError> {
        Self::check_table_name(table)?;

        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS \"{table}\";
             CREATE TABLE \"{table}\" (
                 Name TEXT,
                 Position TEXT,
                 raw_score REAL,
                 normalised_rating REAL
             );"
        ))?;

        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO \"{}\" (Name, Position, raw_score, normalised_rating) VALUES (?1, ?2, ?3, ?4)",
                table
            ))?;

            for c in calculations {
                stmt.execute(params![c.name, c.position, c.raw_score, c.normalised_rating])?;
            }
        }

        tx.commit()?;

        info!("Saved {} calculations to {}", calculations.len(), table);
        Ok(())
    }

    /// Reads back a table written by [`DbClient::save_calculations`].
    pub fn get_calculations(&self, table: &str) -> Result<Vec<PlayerCalculation>, DbError> {
        Self::check_table_name(table)?;

        if !self.table_exists(table)? {
            return Err(DbError::TableNotFound(table.to_string()));
        }

        let mut stmt = self.conn.prepare(&format!(
            "SELECT Name, Position, raw_score, normalised_rating FROM \"{}\" ORDER BY rowid",
            table
        ))?;

        let calculations = stmt
            .query_map([], |row| {
                Ok(PlayerCalculation {
                    name: row.get(0)?,
                    position: row.get(1)?,
                    raw_score: row.get(2)?,
                    normalised_rating: row.get(3)?
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(calculations)
    }

    fn table_exists(&self, table: &str) -> Result<bool, DbError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![table],
            |row| row.get(0)
        )?;

        Ok(count > 0)
    }

    /// Table names are interpolated into SQL, so only plain identifiers are accepted.
    fn check_table_name(table: &str) -> Result<(), DbError> {
        let mut chars = table.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_') && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false
        };

        if valid {
            Ok(())
        } else {
            Err(DbError::InvalidTableName(table.to_string()))
        }
    }

    fn column_index(columns: &[String], column: &str, table: &str) -> Result<usize, DbError> {
        columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
            .ok_or_else(|| DbError::MissingColumn {
                table: table.to_string(),
                column: column.to_string()
            })
    }

    fn player_from_row(
        row: &Row,
        columns: &[String],
        name_idx: usize,
        position_idx: usize
    ) -> Result<Player, DbError> {
        let name = Self::text(row.get::<_, Value>(name_idx)?);
        let position = Self::text(row.get::<_, Value>(position_idx)?);
        let mut stats = IndexMap::with_capacity(columns.len().saturating_sub(2));

        for (idx, column) in columns.iter().enumerate() {
            if idx == name_idx || idx == position_idx {
                continue;
            }

            let value = Self::stat(row.get::<_, Value>(idx)?);
            if value.is_none() {
                debug!("{} has no value for {}", name, column);
            }
            stats.insert(column.clone(), value);
        }

        Ok(Player {
            name,
            position,
            stats,
            role: None,
            raw_score: None,
            normalised_rating: None
        })
    }

    fn text(value: Value) -> String {
        match value {
            Value::Text(s) => s,
            Value::Integer(i) => i.to_string(),
            Value::Real(r) => r.to_string(),
            Value::Null | Value::Blob(_) => String::new()
        }
    }

    /// Finite numeric cells and numeric text are values; anything else is undefined.
    fn stat(value: Value) -> Option<f64> {
        match value {
            Value::Integer(i) => Some(i as f64),
            Value::Real(r) if r.is_finite() => Some(r),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None
        }
    }
}
