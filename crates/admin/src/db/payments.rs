//! Payment (receivable) repository.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use export_tracker_core::models::{OrderRef, Payment, PaymentInput};
use export_tracker_core::{CustomerId, OrderId, PaymentId, PaymentMode, PaymentStatus};

use super::orders::customer_ref;
use super::{RepositoryError, write_error};

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: PaymentId,
    payment_reference: String,
    order_id: OrderId,
    customer_id: Option<CustomerId>,
    invoice_number: Option<String>,
    invoice_date: Option<NaiveDate>,
    invoice_amount: Decimal,
    invoice_currency: String,
    payment_due_date: NaiveDate,
    payment_received_date: Option<NaiveDate>,
    amount_received: Decimal,
    received_currency: String,
    exchange_rate_at_receipt: Option<Decimal>,
    inr_realized: Decimal,
    bank_charges: Decimal,
    firc_number: Option<String>,
    firc_date: Option<NaiveDate>,
    firc_bank: Option<String>,
    payment_mode: PaymentMode,
    bank_ref_number: Option<String>,
    remarks: Option<String>,
    status: PaymentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    order_number: Option<String>,
    customer_company_name: Option<String>,
    customer_country: Option<String>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = RepositoryError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let order_number = row.order_number.ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "payment {} references missing order {}",
                row.id, row.order_id
            ))
        })?;

        Ok(Self {
            id: row.id,
            payment_reference: row.payment_reference,
            order_id: row.order_id,
            customer_id: row.customer_id,
            invoice_number: row.invoice_number,
            invoice_date: row.invoice_date,
            invoice_amount: row.invoice_amount,
            invoice_currency: row.invoice_currency,
            payment_due_date: row.payment_due_date,
            payment_received_date: row.payment_received_date,
            amount_received: row.amount_received,
            received_currency: row.received_currency,
            exchange_rate_at_receipt: row.exchange_rate_at_receipt,
            inr_realized: row.inr_realized,
            bank_charges: row.bank_charges,
            firc_number: row.firc_number,
            firc_date: row.firc_date,
            firc_bank: row.firc_bank,
            payment_mode: row.payment_mode,
            bank_ref_number: row.bank_ref_number,
            remarks: row.remarks,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
            order: Some(OrderRef {
                id: row.order_id,
                order_number,
            }),
            customer: customer_ref(
                row.customer_id,
                row.customer_company_name,
                row.customer_country,
            ),
        })
    }
}

const SELECT: &str = r"
    SELECT p.id, p.payment_reference, p.order_id, p.customer_id, p.invoice_number,
           p.invoice_date, p.invoice_amount, p.invoice_currency, p.payment_due_date,
           p.payment_received_date, p.amount_received, p.received_currency,
           p.exchange_rate_at_receipt, p.inr_realized, p.bank_charges, p.firc_number,
           p.firc_date, p.firc_bank, p.payment_mode, p.bank_ref_number, p.remarks, p.status,
           p.created_at, p.updated_at,
           ord.order_number,
           c.company_name AS customer_company_name, c.country AS customer_country
";

const JOINS: &str = "LEFT JOIN tracker.orders ord ON ord.id = p.order_id \
     LEFT JOIN tracker.customers c ON c.id = p.customer_id";

const DUPLICATE: &str = "payment reference already exists";

// =============================================================================
// Repository
// =============================================================================

/// Repository for payment database operations.
pub struct PaymentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PaymentRepository<'a> {
    /// Create a new payment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all payments, latest due date first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a payment's order is missing.
    pub async fn list(&self) -> Result<Vec<Payment>, RepositoryError> {
        let rows = sqlx::query_as::<_, PaymentRow>(&format!(
            "{SELECT} FROM tracker.payments p {JOINS} \
             ORDER BY p.payment_due_date DESC, p.created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a payment by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the payment's order is missing.
    pub async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepositoryError> {
        let row = sqlx::query_as::<_, PaymentRow>(&format!(
            "{SELECT} FROM tracker.payments p {JOINS} WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Insert a payment from validated input.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the reference is taken or the
    /// order does not exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        id: PaymentId,
        input: &PaymentInput,
    ) -> Result<Payment, RepositoryError> {
        let query = format!(
            r"
            WITH p AS (
                INSERT INTO tracker.payments (
                    id, payment_reference, order_id, customer_id, invoice_number,
                    invoice_date, invoice_amount, invoice_currency, payment_due_date,
                    payment_received_date, amount_received, received_currency,
                    exchange_rate_at_receipt, inr_realized, bank_charges, firc_number,
                    firc_date, firc_bank, payment_mode, bank_ref_number, remarks, status
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                        $16, $17, $18, $19, $20, $21, $22)
                RETURNING *
            )
            {SELECT} FROM p {JOINS}
            "
        );
        let row = bind_input(sqlx::query_as::<_, PaymentRow>(&query).bind(id), input)
            .fetch_one(self.pool)
            .await
            .map_err(|e| write_error(e, DUPLICATE))?;

        row.try_into()
    }

    /// Replace every editable field of a payment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no payment has this ID.
    /// Returns `RepositoryError::Conflict` if the reference is taken.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: PaymentId,
        input: &PaymentInput,
    ) -> Result<Payment, RepositoryError> {
        let query = format!(
            r"
            WITH p AS (
                UPDATE tracker.payments
                SET payment_reference = $2, order_id = $3, customer_id = $4,
                    invoice_number = $5, invoice_date = $6, invoice_amount = $7,
                    invoice_currency = $8, payment_due_date = $9, payment_received_date = $10,
                    amount_received = $11, received_currency = $12,
                    exchange_rate_at_receipt = $13, inr_realized = $14, bank_charges = $15,
                    firc_number = $16, firc_date = $17, firc_bank = $18, payment_mode = $19,
                    bank_ref_number = $20, remarks = $21, status = $22, updated_at = now()
                WHERE id = $1
                RETURNING *
            )
            {SELECT} FROM p {JOINS}
            "
        );
        let row = bind_input(sqlx::query_as::<_, PaymentRow>(&query).bind(id), input)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| write_error(e, DUPLICATE))?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }
}

type PaymentQuery<'q> =
    sqlx::query::QueryAs<'q, sqlx::Postgres, PaymentRow, sqlx::postgres::PgArguments>;

/// Bind `$2..=$22` in column order.
fn bind_input<'q>(query: PaymentQuery<'q>, input: &'q PaymentInput) -> PaymentQuery<'q> {
    query
        .bind(&input.payment_reference)
        .bind(input.order_id)
        .bind(input.customer_id)
        .bind(&input.invoice_number)
        .bind(input.invoice_date)
        .bind(input.invoice_amount)
        .bind(&input.invoice_currency)
        .bind(input.payment_due_date)
        .bind(input.payment_received_date)
        .bind(input.amount_received)
        .bind(&input.received_currency)
        .bind(input.exchange_rate_at_receipt)
        .bind(input.inr_realized)
        .bind(input.bank_charges)
        .bind(&input.firc_number)
        .bind(input.firc_date)
        .bind(&input.firc_bank)
        .bind(input.payment_mode)
        .bind(&input.bank_ref_number)
        .bind(&input.remarks)
        .bind(input.status)
}
