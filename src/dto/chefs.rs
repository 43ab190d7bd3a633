use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Chef;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateChefRequest {
    pub fullname: String,
    pub specialization: String,
    pub pic: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateChefRequest {
    pub fullname: Option<String>,
    pub specialization: Option<String>,
    pub pic: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChefList {
    pub items: Vec<Chef>,
}
