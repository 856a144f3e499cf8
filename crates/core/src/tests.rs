use super::ids::*;
use super::model::*;

#[test]
fn entity_name_validation() {
    assert_eq!(EntityName::try_new("").unwrap_err(), NameError::Blank);
    assert_eq!(EntityName::try_new(" \t\n").unwrap_err(), NameError::Blank);
    assert_eq!(
        EntityName::try_new("x".repeat(201)).unwrap_err(),
        NameError::TooLong { len: 201, max: 200 }
    );
    assert!(EntityName::try_new("x".repeat(200)).is_ok());
    assert!(EntityName::try_new("Sucursal Norte").is_ok());
}

#[test]
fn entity_name_counts_chars_not_bytes() {
    // 200 two-byte chars are 400 bytes but still within the bound.
    let name = "ñ".repeat(200);
    assert_eq!(name.len(), 400);
    assert!(EntityName::try_new(name).is_ok());
}

#[test]
fn entity_name_is_kept_verbatim() {
    let name = EntityName::try_new("  Padded  ").unwrap();
    assert_eq!(name.as_str(), "  Padded  ");
}

#[test]
fn stock_rejects_negative_values() {
    assert_eq!(Stock::try_new(-1).unwrap_err(), StockError::Negative(-1));
    assert_eq!(Stock::try_new(0).unwrap().get(), 0);
    assert_eq!(Stock::try_new(42).unwrap().get(), 42);
}

#[test]
fn ids_round_trip_raw_values() {
    assert_eq!(FranchiseId::new(7).to_string(), "7");
    assert_eq!(BranchId::new(3).get(), 3);
    assert!(ProductId::new(1) < ProductId::new(2));
}

#[test]
fn entity_labels() {
    assert_eq!(Entity::Franchise.to_string(), "franchise");
    assert_eq!(Entity::Branch.as_str(), "branch");
    assert_eq!(Entity::Product.as_str(), "product");
}
