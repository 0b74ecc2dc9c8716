use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

use crate::core::{money, AppError, Result};
use crate::modules::loans::models::{LoanStatus, LoanTerms};
use crate::modules::payments::models::Payment;

/// Loan accounting engine
///
/// Pure functions only: no I/O, no shared state. Identical inputs always
/// produce identical outputs, so a ledger and an overview computed from the
/// same payment history never disagree.
pub struct LoanCalculator;

impl LoanCalculator {
    /// Compute the fixed terms of a new loan (simple interest, equal monthly installments)
    ///
    /// # Arguments
    /// * `principal` - Amount lent, strictly positive, at most 2 decimal places
    /// * `annual_rate_percent` - Annual interest rate as a percentage, non-negative,
    ///   at most 4 decimal places
    /// * `term_years` - Loan term in whole years, at least 1
    ///
    /// # Returns
    /// `LoanTerms` with interest and total rounded to 2 decimal places and
    /// `installment = round2(total / (term_years * 12))`
    ///
    /// # Errors
    /// `InvalidInput` on any violated precondition, arithmetic overflow, or
    /// an amount or rate outside what the loans table can store
    pub fn create_loan(
        principal: Decimal,
        annual_rate_percent: Decimal,
        term_years: u32,
    ) -> Result<LoanTerms> {
        money::validate_amount("Principal", principal)?;
        money::validate_rate(annual_rate_percent)?;

        if term_years == 0 {
            return Err(AppError::invalid_input(
                "Loan term must be at least 1 year",
            ));
        }

        let overflow = || AppError::invalid_input("Loan amounts are too large to compute");

        let years = Decimal::from(term_years);
        let months = Decimal::from(LoanTerms::months_for(term_years));

        let raw_interest = principal
            .checked_mul(annual_rate_percent)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .and_then(|v| v.checked_mul(years))
            .ok_or_else(overflow)?;
        let interest = money::round2(raw_interest);
        let total_amount = money::round2(principal.checked_add(interest).ok_or_else(overflow)?);
        money::validate_max_amount("Total amount", total_amount)?;
        let installment = money::round2(total_amount.checked_div(months).ok_or_else(overflow)?);

        if installment.is_zero() {
            warn!(
                principal = %principal,
                term_years = term_years,
                "Loan terms produce a zero installment"
            );
        }

        Ok(LoanTerms {
            principal,
            interest_rate: annual_rate_percent,
            term_years,
            interest,
            total_amount,
            installment,
        })
    }

    /// Amount paid to date: exact sum of all payments, rounded once
    ///
    /// # Errors
    /// `Internal` when the payment total overflows
    pub fn amount_paid(payments: &[Payment]) -> Result<Decimal> {
        money::sum_rounded(payments.iter().map(|p| p.amount))
    }

    /// Derive the current financial state of a loan from its payment history
    ///
    /// # Arguments
    /// * `loan_id` - Used only to label errors
    /// * `terms` - Terms fixed at loan creation
    /// * `payments` - Every payment recorded against the loan, in any order
    ///
    /// # Returns
    /// `LoanStatus` where the balance may be negative (overpaid) and
    /// `installments_left` is 0 once the balance is settled
    ///
    /// # Errors
    /// * `DegenerateLoan` - installment amount is not positive
    /// * `Internal` - payment total overflows
    pub fn derive_loan_status(
        loan_id: &str,
        terms: &LoanTerms,
        payments: &[Payment],
    ) -> Result<LoanStatus> {
        if terms.installment <= Decimal::ZERO {
            return Err(AppError::degenerate_loan(loan_id));
        }

        let amount_paid = Self::amount_paid(payments)?;
        let balance = terms
            .total_amount
            .checked_sub(amount_paid)
            .map(money::round2)
            .ok_or_else(|| {
                AppError::internal(format!("Balance overflow for loan {}", loan_id))
            })?;

        let mut status = LoanStatus {
            amount_paid,
            balance,
            installments_left: 0,
        };

        if !status.is_settled() {
            status.installments_left = balance
                .checked_div(terms.installment)
                .map(|ratio| ratio.ceil())
                .and_then(|ceiled| ceiled.to_u64())
                .ok_or_else(|| {
                    AppError::internal(format!(
                        "Installment count overflow for loan {}",
                        loan_id
                    ))
                })?;
        }

        Ok(status)
    }
}
