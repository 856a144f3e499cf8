#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS meta (
          key TEXT PRIMARY KEY,
          value TEXT NOT NULL
        );

        -- Rows are never removed: `deleted` is the only destruction path.
        CREATE TABLE IF NOT EXISTS franchises (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL CHECK(length(name) <= 200),
          deleted INTEGER NOT NULL DEFAULT 0 CHECK(deleted IN (0, 1))
        );

        CREATE TABLE IF NOT EXISTS branches (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL CHECK(length(name) <= 200),
          deleted INTEGER NOT NULL DEFAULT 0 CHECK(deleted IN (0, 1)),
          franchise_id INTEGER NOT NULL,
          FOREIGN KEY(franchise_id) REFERENCES franchises(id) ON DELETE RESTRICT
        );

        CREATE TABLE IF NOT EXISTS products (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL CHECK(length(name) <= 200),
          stock INTEGER NOT NULL CHECK(stock >= 0),
          deleted INTEGER NOT NULL DEFAULT 0 CHECK(deleted IN (0, 1)),
          branch_id INTEGER NOT NULL,
          FOREIGN KEY(branch_id) REFERENCES branches(id) ON DELETE RESTRICT
        );
"#;
