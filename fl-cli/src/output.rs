use fl_auth::SessionSnapshot;
use fl_core::UserProfile;

/// One-line description of an account.
pub fn describe_user(user: &UserProfile) -> String {
    match (&user.city, &user.state) {
        (Some(city), Some(state)) => format!(
            "{} <{}> - {} ({}, {})",
            user.name, user.email, user.user_type, city, state
        ),
        _ => format!("{} <{}> - {}", user.name, user.email, user.user_type),
    }
}

/// One-line description of the resolved session state.
pub fn describe_session(snapshot: &SessionSnapshot) -> String {
    if snapshot.loading {
        return String::from("session unresolved (bootstrap has not run)");
    }

    match &snapshot.user {
        Some(user) => format!("authenticated as {} ({})", user.name, user.user_type),
        None => String::from("not logged in"),
    }
}
