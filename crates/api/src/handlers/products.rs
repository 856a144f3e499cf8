#![forbid(unsafe_code)]

use super::{Ctx, no_content, ok, product_body};
use crate::{ApiResponse, Method};
use fc_core::ids::ProductId;
use fc_storage::{ProductUpdateRequest, SqliteStore};

pub(crate) fn product(
    store: &mut SqliteStore,
    verb: Method,
    product_id: ProductId,
    ctx: Ctx<'_>,
) -> ApiResponse {
    match verb {
        Method::Get => ok(ctx.id, store.product_get(product_id)),
        Method::Put => match product_body(&ctx) {
            Ok((name, stock)) => ok(
                ctx.id,
                store.product_update(product_id, ProductUpdateRequest { name, stock }),
            ),
            Err(resp) => resp,
        },
        Method::Delete => no_content(ctx.id, store.product_delete(product_id)),
        Method::Post => ApiResponse::method_not_allowed(ctx.id),
    }
}
