#![forbid(unsafe_code)]

use super::{Ctx, created, name_body, no_content, ok, product_body};
use crate::{ApiResponse, Method};
use fc_core::ids::BranchId;
use fc_storage::{ProductCreateRequest, SqliteStore};

pub(crate) fn branch(
    store: &mut SqliteStore,
    verb: Method,
    branch_id: BranchId,
    ctx: Ctx<'_>,
) -> ApiResponse {
    match verb {
        Method::Get => ok(ctx.id, store.branch_detail(branch_id)),
        Method::Put => match name_body(&ctx) {
            Ok(name) => ok(ctx.id, store.branch_update(branch_id, &name)),
            Err(resp) => resp,
        },
        Method::Delete => no_content(ctx.id, store.branch_delete(branch_id)),
        Method::Post => ApiResponse::method_not_allowed(ctx.id),
    }
}

pub(crate) fn branch_products(
    store: &mut SqliteStore,
    verb: Method,
    branch_id: BranchId,
    ctx: Ctx<'_>,
) -> ApiResponse {
    match verb {
        Method::Get => ok(ctx.id, store.product_list(branch_id)),
        Method::Post => match product_body(&ctx) {
            Ok((name, stock)) => created(
                ctx.id,
                store.product_create(branch_id, ProductCreateRequest { name, stock }),
            ),
            Err(resp) => resp,
        },
        _ => ApiResponse::method_not_allowed(ctx.id),
    }
}
