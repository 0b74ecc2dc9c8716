// MySQL gateway against a real database
//
// Requires TEST_DATABASE_URL pointing at a disposable MySQL schema.
// Run with: cargo test --test mysql_gateway_test -- --ignored

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use loanledger::config::DatabaseConfig;
use loanledger::core::{AppError, RepositoryGateway};
use loanledger::gateway::MySqlGateway;
use loanledger::loans::LoanCalculator;
use loanledger::payments::{NewPayment, PaymentType};
use rust_decimal_macros::dec;
use sqlx::MySqlPool;

async fn setup() -> (MySqlPool, Arc<MySqlGateway>, String) {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let pool = MySqlPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    DatabaseConfig::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    let customer_id = uuid::Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO customers (id, name) VALUES (?, ?)")
        .bind(&customer_id)
        .bind("Integration Customer")
        .execute(&pool)
        .await
        .expect("Failed to seed customer");

    let gateway = Arc::new(MySqlGateway::new(pool.clone()));
    (pool, gateway, customer_id)
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_loan_round_trip() {
    let (_pool, gateway, customer_id) = setup().await;

    let customer = gateway.get_customer(&customer_id).await.unwrap();
    assert_eq!(customer.map(|c| c.name), Some("Integration Customer".to_string()));

    let terms = LoanCalculator::create_loan(dec!(10000), dec!(7.25), 3).unwrap();
    let loan = gateway.insert_loan(&customer_id, &terms).await.unwrap();

    let stored = gateway.get_loan(&loan.id).await.unwrap().expect("loan stored");
    assert_eq!(stored.customer_id, customer_id);
    assert_eq!(stored.terms, terms);

    let loans = gateway.get_loans_for_customer(&customer_id).await.unwrap();
    assert_eq!(loans.len(), 1);
    assert!(gateway.get_loan("missing").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_payments_keep_insertion_order() {
    let (_pool, gateway, customer_id) = setup().await;

    let terms = LoanCalculator::create_loan(dec!(1200), dec!(0), 1).unwrap();
    let loan = gateway.insert_loan(&customer_id, &terms).await.unwrap();

    let backdated = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
    let inputs = [
        NewPayment::new(PaymentType::Installment, dec!(100), None).unwrap(),
        NewPayment::new(PaymentType::LumpSum, dec!(250.75), Some(backdated)).unwrap(),
    ];
    for payment in inputs {
        gateway.insert_payment(&loan.id, payment).await.unwrap();
    }

    let payments = gateway.get_payments(&loan.id).await.unwrap();
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].payment_type, PaymentType::Installment);
    assert_eq!(payments[1].amount, dec!(250.75));
    assert_eq!(payments[1].paid_at, backdated);
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_payment_for_unknown_loan_is_rejected() {
    let (_pool, gateway, _customer_id) = setup().await;

    let payment = NewPayment::new(PaymentType::LumpSum, dec!(10), None).unwrap();
    let result = gateway.insert_payment("missing", payment).await;
    assert!(matches!(result, Err(AppError::LoanNotFound(_))));

    assert!(gateway.ping().await.is_ok());
}
