#![forbid(unsafe_code)]

// Link tables are many-to-many in shape; the store only ever attaches a detail or
// item to the master it was created with. Cascades are done by the store, not by
// foreign keys.
pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS masters (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          creator_id INTEGER NOT NULL,
          created_at_ms INTEGER NOT NULL,
          master_type TEXT NOT NULL CHECK (master_type IN ('list', 'agent')),
          name TEXT NOT NULL,
          description TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS master_details (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          creator_id INTEGER NOT NULL,
          created_at_ms INTEGER NOT NULL,
          name TEXT NOT NULL,
          description TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS master_items (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          creator_id INTEGER NOT NULL,
          created_at_ms INTEGER NOT NULL,
          name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS master_detail_relations (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          master_id INTEGER NOT NULL,
          master_detail_id INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS master_item_relations (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          master_id INTEGER NOT NULL,
          master_item_id INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS master_item_detail_relations (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          master_item_id INTEGER NOT NULL,
          master_detail_id INTEGER NOT NULL,
          content TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS master_agent_relations (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          master_id INTEGER NOT NULL,
          master_agent_id INTEGER NOT NULL
        );
"#;
