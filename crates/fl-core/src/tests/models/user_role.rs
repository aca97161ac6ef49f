use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Farmer.as_str(), "farmer");
    assert_eq!(UserRole::Buyer.as_str(), "buyer");
    assert_eq!(UserRole::Admin.as_str(), "admin");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("farmer").unwrap(), UserRole::Farmer);
    assert_eq!(UserRole::from_str("buyer").unwrap(), UserRole::Buyer);
    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert!(UserRole::from_str("vendor").is_err());
}

#[test]
fn test_user_role_serde_snake_case() {
    assert_eq!(serde_json::to_string(&UserRole::Farmer).unwrap(), "\"farmer\"");
    let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, UserRole::Admin);
}

#[test]
fn test_user_role_from_str_error_mentions_value() {
    let err = UserRole::from_str("vendor").unwrap_err();
    assert!(err.to_string().contains("vendor"));
}
