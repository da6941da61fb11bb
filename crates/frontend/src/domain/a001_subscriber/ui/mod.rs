pub mod create;
pub mod details;
pub mod list;

use contracts::domain::a001_subscriber::aggregate::ClientType;

/// `(value, label)` pairs for the client type select
pub fn client_type_options() -> Vec<(String, String)> {
    ClientType::all()
        .into_iter()
        .map(|ct| (ct.code().to_string(), ct.label().to_string()))
        .collect()
}
