//! Builders wiring the account repository into HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use accounts_backend::domain::AccountService;
use accounts_backend::domain::ports::AccountRepository;
use accounts_backend::inbound::http::state::HttpState;
use accounts_backend::outbound::memory::InMemoryAccountRepository;
use accounts_backend::outbound::persistence::DieselAccountRepository;

use super::ServerConfig;

fn state_for<R>(repo: R) -> web::Data<HttpState>
where
    R: AccountRepository + 'static,
{
    let service = Arc::new(AccountService::new(Arc::new(repo)));
    web::Data::new(HttpState::new(service.clone(), service))
}

/// Build HTTP state from the configured store.
///
/// The state is built once and shared by every worker so the in-memory
/// store, when used, is a single process-wide map.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    match &config.db_pool {
        Some(pool) => state_for(DieselAccountRepository::new(pool.clone())),
        None => {
            warn!("no database configured; accounts are kept in memory and lost on restart");
            state_for(InMemoryAccountRepository::new())
        }
    }
}
