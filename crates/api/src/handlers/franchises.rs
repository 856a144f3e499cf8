#![forbid(unsafe_code)]

use super::{Ctx, created, name_body, no_content, ok};
use crate::{ApiResponse, Method};
use fc_core::ids::FranchiseId;
use fc_storage::SqliteStore;

pub(crate) fn franchises(store: &mut SqliteStore, verb: Method, ctx: Ctx<'_>) -> ApiResponse {
    match verb {
        Method::Get => ok(ctx.id, store.franchise_list()),
        Method::Post => match name_body(&ctx) {
            Ok(name) => created(ctx.id, store.franchise_create(&name)),
            Err(resp) => resp,
        },
        _ => ApiResponse::method_not_allowed(ctx.id),
    }
}

pub(crate) fn franchise(
    store: &mut SqliteStore,
    verb: Method,
    franchise_id: FranchiseId,
    ctx: Ctx<'_>,
) -> ApiResponse {
    match verb {
        Method::Get => ok(ctx.id, store.franchise_detail(franchise_id)),
        Method::Put => match name_body(&ctx) {
            Ok(name) => ok(ctx.id, store.franchise_update(franchise_id, &name)),
            Err(resp) => resp,
        },
        Method::Delete => no_content(ctx.id, store.franchise_delete(franchise_id)),
        Method::Post => ApiResponse::method_not_allowed(ctx.id),
    }
}

pub(crate) fn franchise_branches(
    store: &mut SqliteStore,
    verb: Method,
    franchise_id: FranchiseId,
    ctx: Ctx<'_>,
) -> ApiResponse {
    match verb {
        Method::Get => ok(ctx.id, store.branch_list(franchise_id)),
        Method::Post => match name_body(&ctx) {
            Ok(name) => created(ctx.id, store.branch_create(franchise_id, &name)),
            Err(resp) => resp,
        },
        _ => ApiResponse::method_not_allowed(ctx.id),
    }
}

pub(crate) fn franchise_top_stock(
    store: &SqliteStore,
    verb: Method,
    franchise_id: FranchiseId,
    ctx: Ctx<'_>,
) -> ApiResponse {
    match verb {
        Method::Get => ok(ctx.id, store.franchise_top_stock(franchise_id)),
        _ => ApiResponse::method_not_allowed(ctx.id),
    }
}
