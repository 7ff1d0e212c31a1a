//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every account endpoint, the health probes, and the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document is
//! served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::accounts::{AccountBody, AmountRequestBody, CreateAccountRequestBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts backend API",
        description = "Create, fund, debit, list, and close bank accounts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::create_account,
        crate::inbound::http::accounts::list_accounts,
        crate::inbound::http::accounts::get_account,
        crate::inbound::http::accounts::deposit,
        crate::inbound::http::accounts::withdraw,
        crate::inbound::http::accounts::delete_account,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AccountBody,
        AmountRequestBody,
        CreateAccountRequestBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "accounts", description = "Account lifecycle and balance operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
