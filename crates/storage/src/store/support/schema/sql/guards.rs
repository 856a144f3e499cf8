#![forbid(unsafe_code)]

// `deleted` only moves 0 -> 1 and parent ids never change after insert.
pub(super) const SQL: &str = r#"

        CREATE TRIGGER IF NOT EXISTS trg_franchises_deleted_monotonic
        BEFORE UPDATE OF deleted ON franchises
        WHEN OLD.deleted = 1 AND NEW.deleted = 0
        BEGIN
          SELECT RAISE(ABORT, 'franchises.deleted cannot be reverted');
        END;

        CREATE TRIGGER IF NOT EXISTS trg_branches_deleted_monotonic
        BEFORE UPDATE OF deleted ON branches
        WHEN OLD.deleted = 1 AND NEW.deleted = 0
        BEGIN
          SELECT RAISE(ABORT, 'branches.deleted cannot be reverted');
        END;

        CREATE TRIGGER IF NOT EXISTS trg_products_deleted_monotonic
        BEFORE UPDATE OF deleted ON products
        WHEN OLD.deleted = 1 AND NEW.deleted = 0
        BEGIN
          SELECT RAISE(ABORT, 'products.deleted cannot be reverted');
        END;

        CREATE TRIGGER IF NOT EXISTS trg_branches_franchise_immutable
        BEFORE UPDATE OF franchise_id ON branches
        WHEN NEW.franchise_id <> OLD.franchise_id
        BEGIN
          SELECT RAISE(ABORT, 'branches.franchise_id is immutable');
        END;

        CREATE TRIGGER IF NOT EXISTS trg_products_branch_immutable
        BEFORE UPDATE OF branch_id ON products
        WHEN NEW.branch_id <> OLD.branch_id
        BEGIN
          SELECT RAISE(ABORT, 'products.branch_id is immutable');
        END;
"#;
