// LoanRepository: MySQL persistence for loans
//
// Loans are written once and never updated. The row lock helper is used by
// the payment workflow to sequence appends per loan.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{MySql, MySqlPool, Transaction};

use crate::core::{AppError, Result};
use crate::modules::loans::models::{Loan, LoanTerms};

/// Repository for loan database operations
pub struct LoanRepository {
    pool: MySqlPool,
}

impl LoanRepository {
    /// Create a new loan repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a new loan
    ///
    /// # Arguments
    /// * `loan` - Loan with terms already computed
    pub async fn create(&self, loan: &Loan) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO loans (
                id, customer_id, principal, interest_rate, term_years,
                interest, total_amount, installment, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&loan.id)
        .bind(&loan.customer_id)
        .bind(loan.terms.principal)
        .bind(loan.terms.interest_rate)
        .bind(loan.terms.term_years)
        .bind(loan.terms.interest)
        .bind(loan.terms.total_amount)
        .bind(loan.terms.installment)
        .bind(loan.created_at.naive_utc())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Find a loan by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Loan>> {
        let row = sqlx::query_as::<_, LoanRow>(
            r#"
            SELECT
                id, customer_id, principal, interest_rate, term_years,
                interest, total_amount, installment, created_at
            FROM loans
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Loan::try_from).transpose()
    }

    /// Find all loans of a customer, oldest first
    pub async fn find_by_customer(&self, customer_id: &str) -> Result<Vec<Loan>> {
        let rows = sqlx::query_as::<_, LoanRow>(
            r#"
            SELECT
                id, customer_id, principal, interest_rate, term_years,
                interest, total_amount, installment, created_at
            FROM loans
            WHERE customer_id = ?
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Loan::try_from).collect()
    }

    /// Lock a loan row for the rest of the transaction
    ///
    /// # Returns
    /// * `Result<bool>` - false when the loan does not exist
    pub async fn lock_for_update(tx: &mut Transaction<'_, MySql>, id: &str) -> Result<bool> {
        let locked: Option<String> = sqlx::query_scalar(
            r#"
            SELECT id
            FROM loans
            WHERE id = ?
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(tx.as_mut())
        .await?;

        Ok(locked.is_some())
    }
}

/// Database row representation for the loans table
#[derive(sqlx::FromRow)]
struct LoanRow {
    id: String,
    customer_id: String,
    principal: Decimal,
    interest_rate: Decimal,
    term_years: u32,
    interest: Decimal,
    total_amount: Decimal,
    installment: Decimal,
    created_at: NaiveDateTime,
}

impl TryFrom<LoanRow> for Loan {
    type Error = AppError;

    fn try_from(row: LoanRow) -> Result<Self> {
        Ok(Loan {
            id: row.id,
            customer_id: row.customer_id,
            terms: LoanTerms {
                principal: row.principal,
                interest_rate: row.interest_rate,
                term_years: row.term_years,
                interest: row.interest,
                total_amount: row.total_amount,
                installment: row.installment,
            },
            created_at: row.created_at.and_utc(),
        })
    }
}
