use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, Result};

/// Payment type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    /// Regular scheduled installment (EMI)
    #[serde(rename = "INSTALLMENT", alias = "EMI")]
    Installment,

    /// Payment outside the schedule, applied directly to the balance
    #[serde(rename = "LUMP_SUM")]
    LumpSum,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Installment => "INSTALLMENT",
            PaymentType::LumpSum => "LUMP_SUM",
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "INSTALLMENT" | "EMI" => Ok(PaymentType::Installment),
            "LUMP_SUM" => Ok(PaymentType::LumpSum),
            _ => Err(format!("Invalid payment type: {}", s)),
        }
    }
}

/// Append-only payment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub loan_id: String,
    pub payment_type: PaymentType,
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
}

/// Payment about to be appended to a loan's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub payment_type: PaymentType,
    pub amount: Decimal,
    /// Explicit (possibly backdated) timestamp; insertion time when absent
    pub paid_at: Option<DateTime<Utc>>,
}

impl NewPayment {
    /// Create a validated payment request
    ///
    /// # Errors
    /// `InvalidInput` when the amount is not positive or has more than 2 decimal places
    pub fn new(
        payment_type: PaymentType,
        amount: Decimal,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        money::validate_amount("Payment amount", amount)?;

        Ok(Self {
            payment_type,
            amount,
            paid_at,
        })
    }

    /// Materialize the stored record for a loan
    pub fn into_payment(self, loan_id: &str) -> Payment {
        Payment {
            id: uuid::Uuid::new_v4().to_string(),
            loan_id: loan_id.to_string(),
            payment_type: self.payment_type,
            amount: self.amount,
            paid_at: self.paid_at.unwrap_or_else(Utc::now),
        }
    }
}
