use serde::Deserialize;
use utoipa::ToSchema;

/// Contact fields a caller may attach when resolving a customer. All
/// optional; only supplied values overwrite what is stored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
