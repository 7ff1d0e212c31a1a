//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountsCommand, AccountsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Account mutations.
    pub accounts: Arc<dyn AccountsCommand>,
    /// Account reads.
    pub accounts_query: Arc<dyn AccountsQuery>,
}

impl HttpState {
    /// Bundle the account driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use accounts_backend::domain::AccountService;
    /// use accounts_backend::inbound::http::state::HttpState;
    /// use accounts_backend::outbound::memory::InMemoryAccountRepository;
    ///
    /// let service = Arc::new(AccountService::new(Arc::new(InMemoryAccountRepository::new())));
    /// let _state = HttpState::new(service.clone(), service);
    /// ```
    pub fn new(accounts: Arc<dyn AccountsCommand>, accounts_query: Arc<dyn AccountsQuery>) -> Self {
        Self {
            accounts,
            accounts_query,
        }
    }
}
