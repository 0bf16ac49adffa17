//! Inquiry repository.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use export_tracker_core::models::{Inquiry, InquiryInput};
use export_tracker_core::{CustomerId, InquiryId, InquiryStatus};

use super::orders::customer_ref;
use super::{RepositoryError, write_error};

#[derive(Debug, sqlx::FromRow)]
struct InquiryRow {
    id: InquiryId,
    inquiry_number: String,
    customer_id: Option<CustomerId>,
    inquiry_date: NaiveDate,
    product_description: String,
    quantity: Option<Decimal>,
    unit: String,
    target_price: Option<Decimal>,
    currency: String,
    delivery_terms: String,
    destination_port: Option<String>,
    remarks: Option<String>,
    status: InquiryStatus,
    follow_up_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    customer_company_name: Option<String>,
    customer_country: Option<String>,
}

impl From<InquiryRow> for Inquiry {
    fn from(row: InquiryRow) -> Self {
        Self {
            id: row.id,
            inquiry_number: row.inquiry_number,
            customer_id: row.customer_id,
            inquiry_date: row.inquiry_date,
            product_description: row.product_description,
            quantity: row.quantity,
            unit: row.unit,
            target_price: row.target_price,
            currency: row.currency,
            delivery_terms: row.delivery_terms,
            destination_port: row.destination_port,
            remarks: row.remarks,
            status: row.status,
            follow_up_date: row.follow_up_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            customer: customer_ref(
                row.customer_id,
                row.customer_company_name,
                row.customer_country,
            ),
        }
    }
}

const SELECT: &str = r"
    SELECT i.id, i.inquiry_number, i.customer_id, i.inquiry_date, i.product_description,
           i.quantity, i.unit, i.target_price, i.currency, i.delivery_terms,
           i.destination_port, i.remarks, i.status, i.follow_up_date,
           i.created_at, i.updated_at,
           c.company_name AS customer_company_name, c.country AS customer_country
";

const JOIN_CUSTOMER: &str = "LEFT JOIN tracker.customers c ON c.id = i.customer_id";

/// Repository for inquiry database operations.
pub struct InquiryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InquiryRepository<'a> {
    /// Create a new inquiry repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all inquiries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        let rows = sqlx::query_as::<_, InquiryRow>(&format!(
            "{SELECT} FROM tracker.inquiries i {JOIN_CUSTOMER} \
             ORDER BY i.inquiry_date DESC, i.created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert an inquiry from validated input.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the inquiry number is taken or
    /// the customer does not exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        id: InquiryId,
        input: &InquiryInput,
    ) -> Result<Inquiry, RepositoryError> {
        let row = sqlx::query_as::<_, InquiryRow>(&format!(
            r"
            WITH i AS (
                INSERT INTO tracker.inquiries (
                    id, inquiry_number, customer_id, inquiry_date, product_description,
                    quantity, unit, target_price, currency, delivery_terms,
                    destination_port, remarks, status, follow_up_date
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                RETURNING *
            )
            {SELECT} FROM i {JOIN_CUSTOMER}
            "
        ))
        .bind(id)
        .bind(&input.inquiry_number)
        .bind(input.customer_id)
        .bind(input.inquiry_date)
        .bind(&input.product_description)
        .bind(input.quantity)
        .bind(&input.unit)
        .bind(input.target_price)
        .bind(&input.currency)
        .bind(&input.delivery_terms)
        .bind(&input.destination_port)
        .bind(&input.remarks)
        .bind(input.status)
        .bind(input.follow_up_date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| write_error(e, "inquiry number already exists"))?;

        Ok(row.into())
    }
}
