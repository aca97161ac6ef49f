
use fl_core::{UserProfile, UserRole};

use uuid::Uuid;

/// Profile fixture shared by the store and state tests.
pub(crate) fn profile(name: &str) -> UserProfile {
    UserProfile {
        id: Uuid::nil(),
        name: name.to_string(),
        email: "asha@example.com".to_string(),
        phone: "555-0100".to_string(),
        user_type: UserRole::Farmer,
        city: Some("Fresno".to_string()),
        state: Some("CA".to_string()),
        created_at: None,
    }
}
