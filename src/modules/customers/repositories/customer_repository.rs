use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::customers::models::Customer;

/// Read access to the customers table
pub struct CustomerRepository {
    pool: MySqlPool,
}

impl CustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Find a customer by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }
}
