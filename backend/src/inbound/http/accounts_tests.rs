//! Tests for account HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockAccountsCommand, MockAccountsQuery};
use crate::domain::{AccountService, Error, TRACE_ID_HEADER};
use crate::inbound::http::validation::json_config;
use crate::middleware::Trace;
use crate::outbound::memory::InMemoryAccountRepository;

fn in_memory_state() -> HttpState {
    let service = Arc::new(AccountService::new(Arc::new(
        InMemoryAccountRepository::new(),
    )));
    HttpState::new(service.clone(), service)
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .wrap(Trace)
        .service(web::scope("/api").configure(configure))
}

async fn create(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    name: &str,
    balance: f64,
) -> AccountBody {
    let req = actix_test::TestRequest::post()
        .uri("/api/accounts")
        .set_json(json!({"accountHolderName": name, "balance": balance}))
        .to_request();
    let res = actix_test::call_service(app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    actix_test::read_body_json(res).await
}

#[rstest]
#[actix_web::test]
async fn create_account_returns_created_account() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let body = create(&app, "Alice", 100.0).await;

    assert!(body.id > 0);
    assert_eq!(body.account_holder_name, "Alice");
    assert_eq!(body.balance, 100.0);
}

#[rstest]
#[actix_web::test]
async fn create_account_defaults_balance_to_zero() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/accounts")
        .set_json(json!({"accountHolderName": "Bob"}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: AccountBody = actix_test::read_body_json(res).await;
    assert_eq!(body.balance, 0.0);
}

#[rstest]
#[actix_web::test]
async fn malformed_body_is_rejected_with_error_envelope() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/accounts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"balance\": 10}")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_body");
}

#[rstest]
#[actix_web::test]
async fn deposit_adds_to_balance() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let account = create(&app, "Alice", 100.0).await;

    let req = actix_test::TestRequest::put()
        .uri(&format!("/api/accounts/{}/deposit", account.id))
        .set_json(json!({"amount": 50.0}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: AccountBody = actix_test::read_body_json(res).await;
    assert_eq!(body.balance, 150.0);
}

#[rstest]
#[actix_web::test]
async fn uncovered_withdrawal_is_conflict_and_balance_is_unchanged() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let account = create(&app, "Alice", 100.0).await;

    let req = actix_test::TestRequest::put()
        .uri(&format!("/api/accounts/{}/withdraw", account.id))
        .set_json(json!({"amount": 150.0}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let trace_header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["message"], "Insufficient Balance.");
    assert_eq!(body["details"]["code"], "insufficient_balance");
    assert_eq!(body["traceId"].as_str(), trace_header.as_deref());

    let req = actix_test::TestRequest::get()
        .uri(&format!("/api/accounts/{}", account.id))
        .to_request();
    let fetched: AccountBody = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.balance, 100.0);
}

#[rstest]
#[actix_web::test]
async fn withdrawing_full_balance_leaves_zero() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let account = create(&app, "Alice", 100.0).await;

    let req = actix_test::TestRequest::put()
        .uri(&format!("/api/accounts/{}/withdraw", account.id))
        .set_json(json!({"amount": 100.0}))
        .to_request();
    let body: AccountBody = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.balance, 0.0);
}

#[rstest]
#[actix_web::test]
async fn deleted_account_is_not_found() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let account = create(&app, "Alice", 100.0).await;

    let req = actix_test::TestRequest::delete()
        .uri(&format!("/api/accounts/{}", account.id))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let text = actix_test::read_body(res).await;
    assert_eq!(text.as_ref(), ACCOUNT_DELETED.as_bytes());

    let req = actix_test::TestRequest::get()
        .uri(&format!("/api/accounts/{}", account.id))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "Account Does Not Exist");
}

#[rstest]
#[case("/api/accounts/999", "get")]
#[case("/api/accounts/999", "delete")]
#[case("/api/accounts/999/deposit", "put")]
#[case("/api/accounts/999/withdraw", "put")]
#[actix_web::test]
async fn missing_account_is_not_found(#[case] uri: &str, #[case] method: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = match method {
        "get" => actix_test::TestRequest::get(),
        "delete" => actix_test::TestRequest::delete(),
        _ => actix_test::TestRequest::put().set_json(json!({"amount": 1.0})),
    }
    .uri(uri)
    .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn list_returns_exactly_created_accounts() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let a = create(&app, "A", 1.0).await;
    let b = create(&app, "B", 2.0).await;

    let req = actix_test::TestRequest::get().uri("/api/accounts").to_request();
    let listed: Vec<AccountBody> = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(listed, vec![a, b]);
}

#[rstest]
#[case("abc")]
#[case("0")]
#[actix_web::test]
async fn invalid_account_id_is_bad_request(#[case] raw: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::get()
        .uri(&format!("/api/accounts/{raw}"))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "invalid_account_id");
}

#[rstest]
#[actix_web::test]
async fn unavailable_store_is_service_unavailable() {
    let mut query = MockAccountsQuery::new();
    query
        .expect_get_all_accounts()
        .times(1)
        .returning(|| Err(Error::service_unavailable("account repository unavailable")));
    let state = HttpState::new(Arc::new(MockAccountsCommand::new()), Arc::new(query));
    let app = actix_test::init_service(test_app(state)).await;

    let req = actix_test::TestRequest::get().uri("/api/accounts").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[rstest]
#[actix_web::test]
async fn internal_failures_are_redacted() {
    let mut command = MockAccountsCommand::new();
    command
        .expect_create_account()
        .times(1)
        .returning(|_| Err(Error::internal("account repository error: database error")));
    let state = HttpState::new(Arc::new(command), Arc::new(MockAccountsQuery::new()));
    let app = actix_test::init_service(test_app(state)).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/accounts")
        .set_json(json!({"accountHolderName": "Alice", "balance": 1.0}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Internal server error");
    assert!(body.get("details").is_none());
}
