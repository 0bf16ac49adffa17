//! Quotation repository.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use export_tracker_core::models::{InquiryRef, Quotation, QuotationInput};
use export_tracker_core::{CustomerId, InquiryId, QuotationId, QuotationStatus};

use super::orders::customer_ref;
use super::{RepositoryError, write_error};

#[derive(Debug, sqlx::FromRow)]
struct QuotationRow {
    id: QuotationId,
    quotation_number: String,
    inquiry_id: Option<InquiryId>,
    customer_id: Option<CustomerId>,
    quotation_date: NaiveDate,
    valid_until: Option<NaiveDate>,
    product_description: String,
    hsn_code: Option<String>,
    quantity: Option<Decimal>,
    unit: String,
    unit_price: Decimal,
    total_amount: Option<Decimal>,
    currency: String,
    delivery_terms: String,
    payment_terms: String,
    destination_port: Option<String>,
    remarks: Option<String>,
    status: QuotationStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    inquiry_number: Option<String>,
    customer_company_name: Option<String>,
    customer_country: Option<String>,
}

impl From<QuotationRow> for Quotation {
    fn from(row: QuotationRow) -> Self {
        let inquiry = row
            .inquiry_id
            .zip(row.inquiry_number)
            .map(|(id, inquiry_number)| InquiryRef { id, inquiry_number });
        Self {
            id: row.id,
            quotation_number: row.quotation_number,
            inquiry_id: row.inquiry_id,
            customer_id: row.customer_id,
            quotation_date: row.quotation_date,
            valid_until: row.valid_until,
            product_description: row.product_description,
            hsn_code: row.hsn_code,
            quantity: row.quantity,
            unit: row.unit,
            unit_price: row.unit_price,
            total_amount: row.total_amount,
            currency: row.currency,
            delivery_terms: row.delivery_terms,
            payment_terms: row.payment_terms,
            destination_port: row.destination_port,
            remarks: row.remarks,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
            customer: customer_ref(
                row.customer_id,
                row.customer_company_name,
                row.customer_country,
            ),
            inquiry,
        }
    }
}

const SELECT: &str = r"
    SELECT q.id, q.quotation_number, q.inquiry_id, q.customer_id, q.quotation_date,
           q.valid_until, q.product_description, q.hsn_code, q.quantity, q.unit,
           q.unit_price, q.total_amount, q.currency, q.delivery_terms, q.payment_terms,
           q.destination_port, q.remarks, q.status, q.created_at, q.updated_at,
           inq.inquiry_number,
           c.company_name AS customer_company_name, c.country AS customer_country
";

const JOINS: &str = "LEFT JOIN tracker.inquiries inq ON inq.id = q.inquiry_id \
     LEFT JOIN tracker.customers c ON c.id = q.customer_id";

/// Repository for quotation database operations.
pub struct QuotationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> QuotationRepository<'a> {
    /// Create a new quotation repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all quotations, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Quotation>, RepositoryError> {
        let rows = sqlx::query_as::<_, QuotationRow>(&format!(
            "{SELECT} FROM tracker.quotations q {JOINS} \
             ORDER BY q.quotation_date DESC, q.created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert a quotation from validated input.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the quotation number is taken or
    /// a referenced inquiry or customer does not exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        id: QuotationId,
        input: &QuotationInput,
    ) -> Result<Quotation, RepositoryError> {
        let row = sqlx::query_as::<_, QuotationRow>(&format!(
            r"
            WITH q AS (
                INSERT INTO tracker.quotations (
                    id, quotation_number, inquiry_id, customer_id, quotation_date,
                    valid_until, product_description, hsn_code, quantity, unit, unit_price,
                    total_amount, currency, delivery_terms, payment_terms, destination_port,
                    remarks, status
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                        $16, $17, $18)
                RETURNING *
            )
            {SELECT} FROM q {JOINS}
            "
        ))
        .bind(id)
        .bind(&input.quotation_number)
        .bind(input.inquiry_id)
        .bind(input.customer_id)
        .bind(input.quotation_date)
        .bind(input.valid_until)
        .bind(&input.product_description)
        .bind(&input.hsn_code)
        .bind(input.quantity)
        .bind(&input.unit)
        .bind(input.unit_price)
        .bind(input.total_amount)
        .bind(&input.currency)
        .bind(&input.delivery_terms)
        .bind(&input.payment_terms)
        .bind(&input.destination_port)
        .bind(&input.remarks)
        .bind(input.status)
        .fetch_one(self.pool)
        .await
        .map_err(|e| write_error(e, "quotation number already exists"))?;

        Ok(row.into())
    }
}
