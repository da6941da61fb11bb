pub mod details;
pub mod list;

use contracts::system::users::UserRole;

/// `(value, label)` pairs for the role select
pub fn role_options() -> Vec<(String, String)> {
    UserRole::all()
        .into_iter()
        .map(|r| (r.code().to_string(), r.label().to_string()))
        .collect()
}
