use crate::db::{DbPool, OrmConn};
use crate::services::payment_service::StripeClient;

/// Shared handles cloned into every handler. The sqlx pool serves
/// migrations, audit writes and reporting SQL; SeaORM serves the services.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub stripe: StripeClient,
}
