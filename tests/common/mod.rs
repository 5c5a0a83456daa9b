use rusqlite::{params_from_iter, types::Value, Connection};
use std::{
    path::{Path, PathBuf},
    sync::Once
};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub type StatRow<'a> = (&'a str, &'a str, &'a [(&'a str, Option<f64>)]);

pub fn stat_row<'a>(name: &'a str, position: &'a str, stats: &'a [(&'a str, Option<f64>)]) -> StatRow<'a> {
    (name, position, stats)
}

/// Creates `stats.db` in `dir` with a `player_stats` table holding `rows`.
/// Columns are the union of all stat names, in first-seen order.
pub fn create_stats_db(dir: &Path, rows: &[StatRow]) -> PathBuf {
    let path = dir.join("stats.db");
    let conn = Connection::open(&path).unwrap();
    create_stats_table(&conn, "player_stats", rows);

    path
}

pub fn create_stats_table(conn: &Connection, table: &str, rows: &[StatRow]) {
    let mut columns: Vec<&str> = Vec::new();
    for (_, _, stats) in rows {
        for (stat, _) in stats.iter() {
            if !columns.contains(stat) {
                columns.push(*stat);
            }
        }
    }

    let column_defs = columns
        .iter()
        .map(|c| format!(", \"{}\" REAL", c))
        .collect::<String>();
    conn.execute_batch(&format!("CREATE TABLE {} (Name TEXT, Position TEXT{});", table, column_defs))
        .unwrap();

    let placeholders = (0..columns.len() + 2).map(|i| format!("?{}", i + 1)).collect::<Vec<_>>().join(", ");
    let column_list = columns.iter().map(|c| format!(", \"{}\"", c)).collect::<String>();
    let sql = format!(
        "INSERT INTO {} (Name, Position{}) VALUES ({})",
        table, column_list, placeholders
    );

    for (name, position, stats) in rows {
        let mut values = vec![Value::Text(name.to_string()), Value::Text(position.to_string())];
        for column in &columns {
            let value = stats.iter().find(|(s, _)| s == column).and_then(|(_, v)| *v);
            values.push(value.map(Value::Real).unwrap_or(Value::Null));
        }
        conn.execute(&sql, params_from_iter(values)).unwrap();
    }
}
