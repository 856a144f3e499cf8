#![forbid(unsafe_code)]

use crate::{ApiRequest, ApiResponse, Method, Route, handlers, parse_route};
use fc_storage::SqliteStore;

pub(crate) struct ApiServer {
    store: SqliteStore,
}

impl ApiServer {
    pub(crate) fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    pub(crate) fn handle_line(&mut self, raw: &str) -> ApiResponse {
        match serde_json::from_str::<ApiRequest>(raw) {
            Ok(request) => self.handle(request),
            Err(err) => {
                tracing::warn!(error = %err, "malformed request line");
                ApiResponse::bad_request(None, "request", &err.to_string())
            }
        }
    }

    pub(crate) fn handle(&mut self, request: ApiRequest) -> ApiResponse {
        let ApiRequest {
            id,
            method,
            path,
            body,
        } = request;

        let Some(route) = parse_route(&path) else {
            tracing::debug!(%method, %path, "no route");
            return ApiResponse::not_found(id);
        };
        let Some(verb) = Method::parse(&method) else {
            return ApiResponse::method_not_allowed(id);
        };

        let ctx = handlers::Ctx {
            id,
            body: body.as_ref(),
        };
        let resp = match route {
            Route::Franchises => handlers::franchises(&mut self.store, verb, ctx),
            Route::Franchise(franchise_id) => {
                handlers::franchise(&mut self.store, verb, franchise_id, ctx)
            }
            Route::FranchiseBranches(franchise_id) => {
                handlers::franchise_branches(&mut self.store, verb, franchise_id, ctx)
            }
            Route::FranchiseTopStock(franchise_id) => {
                handlers::franchise_top_stock(&self.store, verb, franchise_id, ctx)
            }
            Route::Branch(branch_id) => handlers::branch(&mut self.store, verb, branch_id, ctx),
            Route::BranchProducts(branch_id) => {
                handlers::branch_products(&mut self.store, verb, branch_id, ctx)
            }
            Route::Product(product_id) => {
                handlers::product(&mut self.store, verb, product_id, ctx)
            }
        };

        tracing::debug!(%method, %path, status = resp.status, "request handled");
        resp
    }
}
