use crate::{UserProfile, UserRole};

use serde_json::json;

fn profile_json() -> serde_json::Value {
    json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "name": "Asha Patel",
        "email": "asha@example.com",
        "phone": "555-0100",
        "user_type": "farmer",
        "city": "Fresno",
        "state": "CA"
    })
}

#[test]
fn test_profile_deserializes_from_api_shape() {
    let profile: UserProfile = serde_json::from_value(profile_json()).unwrap();
    assert_eq!(profile.name, "Asha Patel");
    assert_eq!(profile.user_type, UserRole::Farmer);
    assert_eq!(profile.city.as_deref(), Some("Fresno"));
    assert!(profile.created_at.is_none());
}

#[test]
fn test_profile_optional_fields_absent() {
    let mut value = profile_json();
    value.as_object_mut().unwrap().remove("city");
    value.as_object_mut().unwrap().remove("state");

    let profile: UserProfile = serde_json::from_value(value).unwrap();
    assert!(profile.city.is_none());
    assert!(profile.state.is_none());
}

#[test]
fn test_profile_round_trips_through_store_format() {
    let profile: UserProfile = serde_json::from_value(profile_json()).unwrap();
    let serialized = serde_json::to_string(&profile).unwrap();
    let restored: UserProfile = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, profile);
}

#[test]
fn test_is_admin() {
    let mut profile: UserProfile = serde_json::from_value(profile_json()).unwrap();
    assert!(!profile.is_admin());
    profile.user_type = UserRole::Admin;
    assert!(profile.is_admin());
}
