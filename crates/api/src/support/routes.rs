#![forbid(unsafe_code)]

use fc_core::ids::{BranchId, FranchiseId, ProductId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    /// `/api/franchises`
    Franchises,
    /// `/api/franchises/{id}`
    Franchise(FranchiseId),
    /// `/api/franchises/{id}/branches`
    FranchiseBranches(FranchiseId),
    /// `/api/franchises/{id}/top-stock-products`
    FranchiseTopStock(FranchiseId),
    /// `/api/branches/{id}`
    Branch(BranchId),
    /// `/api/branches/{id}/products`
    BranchProducts(BranchId),
    /// `/api/products/{id}`
    Product(ProductId),
}

/// Maps a request path onto a route; unknown shapes and non-numeric ids yield `None`.
pub(crate) fn parse_route(path: &str) -> Option<Route> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>();

    match segments.as_slice() {
        ["api", "franchises"] => Some(Route::Franchises),
        ["api", "franchises", id] => Some(Route::Franchise(FranchiseId::new(parse_id(id)?))),
        ["api", "franchises", id, "branches"] => Some(Route::FranchiseBranches(
            FranchiseId::new(parse_id(id)?),
        )),
        ["api", "franchises", id, "top-stock-products"] => Some(Route::FranchiseTopStock(
            FranchiseId::new(parse_id(id)?),
        )),
        ["api", "branches", id] => Some(Route::Branch(BranchId::new(parse_id(id)?))),
        ["api", "branches", id, "products"] => {
            Some(Route::BranchProducts(BranchId::new(parse_id(id)?)))
        }
        ["api", "products", id] => Some(Route::Product(ProductId::new(parse_id(id)?))),
        _ => None,
    }
}

/// Plain decimal digits only; signs and whitespace are not ids.
fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok()
}
