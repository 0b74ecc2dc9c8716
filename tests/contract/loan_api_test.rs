// Contract tests for the loan, payment and ledger endpoints
//
// Runs the full route table against the in-memory gateway.

use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::{test, web, App};
use loanledger::core::RepositoryGateway;
use loanledger::gateway::InMemoryGateway;
use loanledger::modules::{self, customers::Customer};
use serde_json::{json, Value};

macro_rules! test_app {
    ($gateway:expr) => {{
        let gateway: Arc<dyn RepositoryGateway> = $gateway;
        test::init_service(
            App::new()
                .app_data(web::Data::from(gateway))
                .configure(modules::configure),
        )
        .await
    }};
}

fn gateway() -> Arc<InMemoryGateway> {
    Arc::new(InMemoryGateway::new().with_customer(Customer::new("C-1001", "Meera Iyer")))
}

fn loan_payload() -> Value {
    json!({
        "customer_id": "C-1001",
        "principal": 120000,
        "interest_rate": 10,
        "period_years": 2
    })
}

/// POST /api/v1/loans returns computed terms
#[actix_web::test]
async fn test_create_loan_contract() {
    let app = test_app!(gateway());

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(loan_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["loan_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body["customer_id"], "C-1001");
    assert_eq!(body["period_years"], 2);
    assert_eq!(body["total_interest"].to_string(), "24000.00");
    assert_eq!(body["total_amount_payable"].to_string(), "144000.00");
    assert_eq!(body["monthly_emi"].to_string(), "6000.00");
    assert!(body.get("created_at").is_some());
}

#[actix_web::test]
async fn test_create_loan_accepts_numeric_customer_id() {
    let gateway =
        Arc::new(InMemoryGateway::new().with_customer(Customer::new("42", "Numeric Customer")));
    let app = test_app!(gateway);

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(json!({
            "customer_id": 42,
            "principal": 2400,
            "interest_rate": 0,
            "term_years": 2
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["customer_id"], "42");
    assert_eq!(body["monthly_emi"].to_string(), "100.00");
}

#[actix_web::test]
async fn test_create_loan_validation_errors() {
    let app = test_app!(gateway());

    let invalid = [
        json!({"customer_id": "C-1001", "principal": 0, "interest_rate": 10, "period_years": 2}),
        json!({"customer_id": "C-1001", "principal": 1000, "interest_rate": -1, "period_years": 2}),
        json!({"customer_id": "C-1001", "principal": 1000, "interest_rate": 10, "period_years": 0}),
        json!({"customer_id": "", "principal": 1000, "interest_rate": 10, "period_years": 1}),
        json!({"customer_id": "C-1001", "principal": "lots", "interest_rate": 10, "period_years": 1}),
        json!({"customer_id": "C-1001", "interest_rate": 10, "period_years": 1}),
        json!({"customer_id": "C-1001", "principal": 1000, "interest_rate": 7.12345, "period_years": 1}),
        json!({"customer_id": "C-1001", "principal": 1000, "interest_rate": 100000, "period_years": 1}),
        json!({"customer_id": "C-1001", "principal": 100000000000000000u64, "interest_rate": 0, "period_years": 1}),
    ];

    for payload in invalid {
        let req = test::TestRequest::post()
            .uri("/api/v1/loans")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "payload {} should be rejected", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], 400);
        assert!(body["error"]["message"].is_string());
    }
}

#[actix_web::test]
async fn test_create_loan_unknown_customer() {
    let app = test_app!(gateway());

    let mut payload = loan_payload();
    payload["customer_id"] = json!("C-9999");

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_unknown_loan_is_404_everywhere() {
    let app = test_app!(gateway());

    let get = test::TestRequest::get()
        .uri("/api/v1/loans/missing")
        .to_request();
    assert_eq!(test::call_service(&app, get).await.status(), 404);

    let ledger = test::TestRequest::get()
        .uri("/api/v1/loans/missing/ledger")
        .to_request();
    assert_eq!(test::call_service(&app, ledger).await.status(), 404);

    let pay = test::TestRequest::post()
        .uri("/api/v1/loans/missing/payments")
        .set_json(json!({"amount": 100, "payment_type": "LUMP_SUM"}))
        .to_request();
    assert_eq!(test::call_service(&app, pay).await.status(), 404);
}

/// Payment then ledger, matching the single-installment walkthrough
#[actix_web::test]
async fn test_payment_and_ledger_contract() {
    let app = test_app!(gateway());

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(loan_payload())
        .to_request();
    let loan: Value = test::call_and_read_body_json(&app, req).await;
    let loan_id = loan["loan_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/loans/{}/payments", loan_id))
        .set_json(json!({"amount": 6000, "payment_type": "EMI"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let payment: Value = test::read_body_json(resp).await;
    assert_eq!(payment["loan_id"], loan_id.as_str());
    assert_eq!(payment["payment_type"], "INSTALLMENT");
    assert_eq!(payment["remaining_balance"].to_string(), "138000.00");
    assert_eq!(payment["installments_left"], 23);
    assert_eq!(payment["message"], "Payment recorded successfully.");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/loans/{}/payments", loan_id))
        .set_json(json!({
            "amount": 20000.5,
            "payment_type": "LUMP_SUM",
            "paid_at": "2020-01-01T00:00:00Z"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/loans/{}/ledger", loan_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let ledger: Value = test::read_body_json(resp).await;
    assert_eq!(ledger["loan_id"], loan_id.as_str());
    assert_eq!(ledger["monthly_emi"].to_string(), "6000.00");
    assert_eq!(ledger["amount_paid"].to_string(), "26000.50");
    assert_eq!(ledger["balance_amount"].to_string(), "117999.50");
    // 117999.50 / 6000 = 19.67
    assert_eq!(ledger["installments_left"], 20);

    // recorded order, even though the second payment is backdated
    let transactions = ledger["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0]["type"], "INSTALLMENT");
    assert_eq!(transactions[0]["amount"].to_string(), "6000");
    assert_eq!(transactions[1]["type"], "LUMP_SUM");
    assert_eq!(transactions[1]["date"], "2020-01-01T00:00:00Z");
}

#[actix_web::test]
async fn test_payment_validation_errors() {
    let app = test_app!(gateway());

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(loan_payload())
        .to_request();
    let loan: Value = test::call_and_read_body_json(&app, req).await;
    let loan_id = loan["loan_id"].as_str().unwrap();
    let uri = format!("/api/v1/loans/{}/payments", loan_id);

    let invalid = [
        json!({"amount": 0, "payment_type": "EMI"}),
        json!({"amount": -5, "payment_type": "LUMP_SUM"}),
        json!({"amount": 10.001, "payment_type": "LUMP_SUM"}),
        json!({"amount": 100, "payment_type": "REFUND"}),
        json!({"payment_type": "EMI"}),
    ];

    for payload in invalid {
        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "payload {} should be rejected", payload);
    }

    // rejected payments leave no trace
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/loans/{}/ledger", loan_id))
        .to_request();
    let ledger: Value = test::call_and_read_body_json(&app, req).await;
    assert!(ledger["transactions"].as_array().unwrap().is_empty());
    assert_eq!(ledger["installments_left"], 24);
}

/// Amounts past the money column width are rejected before anything is stored
#[actix_web::test]
async fn test_oversized_payment_is_rejected() {
    let app = test_app!(gateway());

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(loan_payload())
        .to_request();
    let loan: Value = test::call_and_read_body_json(&app, req).await;
    let loan_id = loan["loan_id"].as_str().unwrap();
    let uri = format!("/api/v1/loans/{}/payments", loan_id);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header(ContentType::json())
            .set_payload(r#"{"amount": 79228162514264337593543950335, "payment_type": "LUMP_SUM"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/loans/{}/ledger", loan_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let ledger: Value = test::read_body_json(resp).await;
    assert!(ledger["transactions"].as_array().unwrap().is_empty());
    assert_eq!(ledger["balance_amount"].to_string(), "144000.00");
}
