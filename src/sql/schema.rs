//! Table DDL for the base entities and the favorite join tables.
//! Statements are idempotent (`IF NOT EXISTS`); they create missing tables and never alter existing ones.

use crate::models::FavoriteKind;

pub const USERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE
    )
"#;

pub const CHARACTERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS characters (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        gender TEXT,
        birth_year TEXT,
        height TEXT,
        eye_color TEXT,
        hair_color TEXT
    )
"#;

pub const PLANETS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS planets (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        climate TEXT,
        terrain TEXT,
        population TEXT,
        diameter TEXT
    )
"#;

pub const VEHICLES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        model TEXT,
        manufacturer TEXT,
        vehicle_class TEXT,
        passengers TEXT
    )
"#;

/// Join table for one favorite kind. The composite primary key allows at most one row per pair.
pub fn join_table_ddl(kind: FavoriteKind) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {join} (
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            {col} INTEGER NOT NULL REFERENCES {entity}(id) ON DELETE CASCADE,
            PRIMARY KEY (user_id, {col})
        )
        "#,
        join = kind.join_table(),
        col = kind.join_column(),
        entity = kind.entity_table(),
    )
}

/// All DDL in dependency order: base tables first, then join tables.
pub fn all_ddl() -> Vec<String> {
    let mut out: Vec<String> = [USERS_DDL, CHARACTERS_DDL, PLANETS_DDL, VEHICLES_DDL]
        .iter()
        .map(|s| s.to_string())
        .collect();
    out.extend(FavoriteKind::ALL.iter().map(|k| join_table_ddl(*k)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_tables_come_after_base_tables() {
        let ddl = all_ddl();
        assert_eq!(ddl.len(), 7);
        assert!(ddl[0].contains("users"));
        assert!(ddl[4].contains("favorite_characters"));
        assert!(ddl[6].contains("REFERENCES vehicles(id)"));
    }

    #[test]
    fn join_table_has_composite_key() {
        let ddl = join_table_ddl(FavoriteKind::Planet);
        assert!(ddl.contains("PRIMARY KEY (user_id, planet_id)"));
    }
}
