// End-to-end payment workflow through the services and the in-memory gateway

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use loanledger::core::{AppError, RepositoryGateway};
use loanledger::gateway::InMemoryGateway;
use loanledger::ledger::LedgerService;
use loanledger::loans::LoanService;
use loanledger::modules::customers::Customer;
use loanledger::payments::{NewPayment, PaymentService, PaymentType};
use rust_decimal_macros::dec;

fn gateway() -> Arc<dyn RepositoryGateway> {
    Arc::new(InMemoryGateway::new().with_customer(Customer::new("cust-7", "Kiran Das")))
}

#[tokio::test]
async fn test_installments_then_lump_sum_settle_the_loan() {
    let gateway = gateway();
    let loans = LoanService::new(gateway.clone());
    let payments = PaymentService::new(gateway.clone());
    let ledgers = LedgerService::new(gateway.clone());

    // 1000 + 100 interest over 12 months: 91.67 per month
    let loan = loans
        .create_loan("cust-7", dec!(1000), dec!(10), 1)
        .await
        .expect("Failed to create loan");
    assert_eq!(loan.terms.installment, dec!(91.67));

    for expected_left in [11u64, 10, 9] {
        let payment = NewPayment::new(PaymentType::Installment, dec!(91.67), None).unwrap();
        let result = payments.record_payment(&loan.id, payment).await.unwrap();
        assert_eq!(result.installments_left, Some(expected_left));
    }

    let payment = NewPayment::new(PaymentType::LumpSum, dec!(824.99), None).unwrap();
    let result = payments.record_payment(&loan.id, payment).await.unwrap();
    assert_eq!(result.remaining_balance, dec!(0.00));
    assert_eq!(result.installments_left, Some(0));

    let ledger = ledgers.get_ledger(&loan.id).await.unwrap();
    assert_eq!(ledger.transactions.len(), 4);
    assert_eq!(ledger.status.amount_paid, dec!(1100.00));
    assert!(ledger.status.is_settled());
}

#[tokio::test]
async fn test_ledger_matches_payment_result() {
    let gateway = gateway();
    let loan = LoanService::new(gateway.clone())
        .create_loan("cust-7", dec!(120000), dec!(10), 2)
        .await
        .unwrap();

    let payment = NewPayment::new(PaymentType::Installment, dec!(6000), None).unwrap();
    let result = PaymentService::new(gateway.clone())
        .record_payment(&loan.id, payment)
        .await
        .unwrap();
    assert_eq!(result.remaining_balance, dec!(138000.00));
    assert_eq!(result.installments_left, Some(23));

    let ledger = LedgerService::new(gateway).get_ledger(&loan.id).await.unwrap();
    assert_eq!(ledger.status.balance, result.remaining_balance);
    assert_eq!(Some(ledger.status.installments_left), result.installments_left);
    assert_eq!(ledger.transactions[0].transaction_id, result.payment.id);
}

#[tokio::test]
async fn test_backdated_payment_keeps_its_timestamp() {
    let gateway = gateway();
    let loan = LoanService::new(gateway.clone())
        .create_loan("cust-7", dec!(5000), dec!(5), 1)
        .await
        .unwrap();

    let paid_at = Utc.with_ymd_and_hms(2023, 3, 15, 9, 30, 0).unwrap();
    let payment = NewPayment::new(PaymentType::LumpSum, dec!(250.50), Some(paid_at)).unwrap();
    let result = PaymentService::new(gateway)
        .record_payment(&loan.id, payment)
        .await
        .unwrap();

    assert_eq!(result.payment.paid_at, paid_at);
    // 5250.00 - 250.50
    assert_eq!(result.remaining_balance, dec!(4999.50));
}

#[tokio::test]
async fn test_payment_on_unknown_loan_stores_nothing() {
    let gateway = gateway();
    let payment = NewPayment::new(PaymentType::LumpSum, dec!(10), None).unwrap();

    let result = PaymentService::new(gateway.clone())
        .record_payment("no-such-loan", payment)
        .await;
    assert!(matches!(result, Err(AppError::LoanNotFound(_))));
    assert!(gateway.get_payments("no-such-loan").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_payment_on_degenerate_loan_is_still_recorded() {
    let gateway = gateway();
    let loan = LoanService::new(gateway.clone())
        .create_loan("cust-7", dec!(0.01), dec!(0), 1)
        .await
        .unwrap();

    let payment = NewPayment::new(PaymentType::LumpSum, dec!(0.01), None).unwrap();
    let result = PaymentService::new(gateway.clone())
        .record_payment(&loan.id, payment)
        .await
        .unwrap();

    assert_eq!(result.remaining_balance, dec!(0.00));
    assert_eq!(result.installments_left, None);
    assert_eq!(gateway.get_payments(&loan.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_loan_is_never_stored() {
    let gateway = gateway();
    let result = LoanService::new(gateway.clone())
        .create_loan("cust-7", dec!(-1), dec!(10), 1)
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert!(gateway.get_loans_for_customer("cust-7").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_payments_are_all_applied() {
    let gateway = gateway();
    let loan = LoanService::new(gateway.clone())
        .create_loan("cust-7", dec!(2400), dec!(0), 2)
        .await
        .unwrap();

    let tasks = (0..10).map(|_| {
        let service = PaymentService::new(gateway.clone());
        let loan_id = loan.id.clone();
        tokio::spawn(async move {
            let payment = NewPayment::new(PaymentType::Installment, dec!(100), None).unwrap();
            service.record_payment(&loan_id, payment).await
        })
    });

    for task in futures_util::future::join_all(tasks).await {
        task.unwrap().unwrap();
    }

    let ledger = LedgerService::new(gateway).get_ledger(&loan.id).await.unwrap();
    assert_eq!(ledger.transactions.len(), 10);
    assert_eq!(ledger.status.balance, dec!(1400.00));
    assert_eq!(ledger.status.installments_left, 14);
}
