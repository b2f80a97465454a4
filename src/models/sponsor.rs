use serde::{Deserialize, Serialize};

/// A sponsor directory entry. `order` controls display sequence on the
/// sponsors page; inactive sponsors stay in the data but are never shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub tier: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub order: i32,
}
