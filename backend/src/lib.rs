//! Accounts backend library.
//!
//! Hexagonal layout: [`domain`] holds the account aggregate, service, and
//! ports; [`inbound`] adapts HTTP onto the driving ports; [`outbound`]
//! implements the repository port over PostgreSQL or process memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
pub use settings::ServerSettings;
