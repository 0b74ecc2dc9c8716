use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{MySql, MySqlPool};
use std::str::FromStr;

use crate::core::{AppError, Result};
use crate::modules::payments::models::{Payment, PaymentType};

/// Repository for payment persistence
///
/// Payments are append-only: there is no update or delete.
pub struct PaymentRepository {
    pool: MySqlPool,
}

impl PaymentRepository {
    /// Create a new PaymentRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Append a payment within an existing database transaction
    ///
    /// # Arguments
    /// * `payment` - Payment to insert
    /// * `executor` - Database connection or transaction
    pub async fn create_with_tx<'a, E>(&self, payment: &Payment, executor: E) -> Result<()>
    where
        E: sqlx::Executor<'a, Database = MySql>,
    {
        sqlx::query(
            r#"
            INSERT INTO payments (id, loan_id, payment_type, amount, paid_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&payment.id)
        .bind(&payment.loan_id)
        .bind(payment.payment_type.as_str())
        .bind(payment.amount)
        .bind(payment.paid_at.naive_utc())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Find all payments of a loan in insertion order
    ///
    /// Ordered by the auto-increment sequence, not by `paid_at`, because
    /// timestamps may be backdated by the caller.
    pub async fn find_by_loan(&self, loan_id: &str) -> Result<Vec<Payment>> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r#"
            SELECT id, loan_id, payment_type, amount, paid_at
            FROM payments
            WHERE loan_id = ?
            ORDER BY seq ASC
            "#,
        )
        .bind(loan_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Payment::try_from).collect()
    }
}

/// Database row representation for the payments table
#[derive(sqlx::FromRow)]
struct PaymentRow {
    id: String,
    loan_id: String,
    payment_type: String,
    amount: Decimal,
    paid_at: NaiveDateTime,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = AppError;

    fn try_from(row: PaymentRow) -> Result<Self> {
        let payment_type = PaymentType::from_str(&row.payment_type).map_err(AppError::Internal)?;

        Ok(Payment {
            id: row.id,
            loan_id: row.loan_id,
            payment_type,
            amount: row.amount,
            paid_at: row.paid_at.and_utc(),
        })
    }
}
