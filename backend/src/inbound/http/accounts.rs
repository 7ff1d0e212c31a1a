//! Account HTTP handlers.
//!
//! ```text
//! POST   /api/accounts
//! GET    /api/accounts
//! GET    /api/accounts/{id}
//! PUT    /api/accounts/{id}/deposit
//! PUT    /api/accounts/{id}/withdraw
//! DELETE /api/accounts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Account, NewAccount};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_account_id};

/// Plain-text body returned after a successful delete.
pub const ACCOUNT_DELETED: &str = "Account Deleted";

/// Request payload for opening an account.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequestBody {
    /// Name of the account holder.
    #[schema(example = "Alice")]
    pub account_holder_name: String,
    /// Opening balance; defaults to zero.
    #[serde(default)]
    #[schema(example = 100.0)]
    pub balance: f64,
}

/// Request payload for deposits and withdrawals.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmountRequestBody {
    /// Amount to add or subtract.
    #[schema(example = 50.0)]
    pub amount: f64,
}

/// Account representation returned by every account endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountBody {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    /// Name of the account holder.
    #[schema(example = "Alice")]
    pub account_holder_name: String,
    /// Current balance.
    #[schema(example = 150.0)]
    pub balance: f64,
}

impl From<Account> for AccountBody {
    fn from(value: Account) -> Self {
        Self {
            id: value.id().get(),
            account_holder_name: value.holder_name().to_owned(),
            balance: value.balance(),
        }
    }
}

/// Open a new account.
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountRequestBody,
    responses(
        (status = 201, description = "Account created", body = AccountBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "createAccount"
)]
#[post("/accounts")]
pub async fn create_account(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAccountRequestBody>,
) -> ApiResult<HttpResponse> {
    let CreateAccountRequestBody {
        account_holder_name,
        balance,
    } = payload.into_inner();
    let account = state
        .accounts
        .create_account(NewAccount::new(account_holder_name, balance))
        .await?;
    Ok(HttpResponse::Created().json(AccountBody::from(account)))
}

/// Fetch one account.
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    params(("id" = i64, Path, description = "Account identifier")),
    responses(
        (status = 200, description = "Account found", body = AccountBody),
        (status = 400, description = "Invalid account id", body = ErrorSchema),
        (status = 404, description = "Account does not exist", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "getAccountById"
)]
#[get("/accounts/{id}")]
pub async fn get_account(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AccountBody>> {
    let id = parse_account_id(&path, FieldName::new("id"))?;
    let account = state.accounts_query.get_account_by_id(id).await?;
    Ok(web::Json(account.into()))
}

/// Add funds to an account.
#[utoipa::path(
    put,
    path = "/api/accounts/{id}/deposit",
    params(("id" = i64, Path, description = "Account identifier")),
    request_body = AmountRequestBody,
    responses(
        (status = 200, description = "Deposit applied", body = AccountBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Account does not exist", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "deposit"
)]
#[put("/accounts/{id}/deposit")]
pub async fn deposit(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AmountRequestBody>,
) -> ApiResult<web::Json<AccountBody>> {
    let id = parse_account_id(&path, FieldName::new("id"))?;
    let account = state.accounts.deposit(id, payload.amount).await?;
    Ok(web::Json(account.into()))
}

/// Withdraw funds from an account.
#[utoipa::path(
    put,
    path = "/api/accounts/{id}/withdraw",
    params(("id" = i64, Path, description = "Account identifier")),
    request_body = AmountRequestBody,
    responses(
        (status = 200, description = "Withdrawal applied", body = AccountBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Account does not exist", body = ErrorSchema),
        (status = 409, description = "Insufficient balance", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "withdraw"
)]
#[put("/accounts/{id}/withdraw")]
pub async fn withdraw(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AmountRequestBody>,
) -> ApiResult<web::Json<AccountBody>> {
    let id = parse_account_id(&path, FieldName::new("id"))?;
    let account = state.accounts.withdraw(id, payload.amount).await?;
    Ok(web::Json(account.into()))
}

/// List every account.
#[utoipa::path(
    get,
    path = "/api/accounts",
    responses(
        (status = 200, description = "All accounts", body = [AccountBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "getAllAccounts"
)]
#[get("/accounts")]
pub async fn list_accounts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<AccountBody>>> {
    let accounts = state.accounts_query.get_all_accounts().await?;
    Ok(web::Json(accounts.into_iter().map(AccountBody::from).collect()))
}

/// Close an account.
#[utoipa::path(
    delete,
    path = "/api/accounts/{id}",
    params(("id" = i64, Path, description = "Account identifier")),
    responses(
        (status = 200, description = "Account deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid account id", body = ErrorSchema),
        (status = 404, description = "Account does not exist", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "deleteAccount"
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_account_id(&path, FieldName::new("id"))?;
    state.accounts.delete_account(id).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(ACCOUNT_DELETED))
}

/// Register every account handler on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_account)
        .service(list_accounts)
        .service(get_account)
        .service(deposit)
        .service(withdraw)
        .service(delete_account);
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
