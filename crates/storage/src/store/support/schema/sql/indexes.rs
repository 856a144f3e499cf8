#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE INDEX IF NOT EXISTS idx_branches_franchise ON branches(franchise_id, deleted, id);
        CREATE INDEX IF NOT EXISTS idx_products_branch ON products(branch_id, deleted, id);
        CREATE INDEX IF NOT EXISTS idx_products_branch_stock ON products(branch_id, deleted, stock);
"#;
