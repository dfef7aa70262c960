#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        -- Mirror of the static model catalog, seeded on open.
        CREATE TABLE IF NOT EXISTS agent_models (
          id INTEGER PRIMARY KEY,
          name TEXT UNIQUE NOT NULL,
          provider TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS agents (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          creator_id INTEGER NOT NULL,
          created_at_ms INTEGER NOT NULL,
          name TEXT NOT NULL,
          description TEXT NOT NULL DEFAULT '',
          model_id INTEGER NOT NULL,
          role TEXT NOT NULL,
          instructions TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS master_agents (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          creator_id INTEGER NOT NULL,
          created_at_ms INTEGER NOT NULL,
          name TEXT NOT NULL,
          description TEXT NOT NULL DEFAULT '',
          model TEXT NOT NULL,
          vendor TEXT NOT NULL,
          role TEXT NOT NULL,
          instructions TEXT NOT NULL
        );
"#;
