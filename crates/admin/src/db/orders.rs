//! Export order repository.
//!
//! Orders are read joined with their customer so list pages can show the
//! company name without a second query.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use export_tracker_core::models::{CustomerRef, Order, OrderInput};
use export_tracker_core::{CustomerId, IncentiveStatus, OrderId, OrderStatus, QuotationId};

use super::{RepositoryError, write_error};

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    order_number: String,
    quotation_id: Option<QuotationId>,
    customer_id: Option<CustomerId>,
    order_date: NaiveDate,
    product_description: String,
    hsn_code: Option<String>,
    quantity: Decimal,
    unit: String,
    unit_price: Decimal,
    total_amount: Decimal,
    currency: String,
    exchange_rate: Decimal,
    inr_value: Option<Decimal>,
    delivery_terms: String,
    payment_terms: String,
    lc_number: Option<String>,
    lc_date: Option<NaiveDate>,
    lc_expiry_date: Option<NaiveDate>,
    lc_amount: Option<Decimal>,
    lc_bank: Option<String>,
    destination_port: Option<String>,
    origin_port: String,
    shipping_bill_number: Option<String>,
    shipping_bill_date: Option<NaiveDate>,
    gst_invoice_number: Option<String>,
    gst_invoice_date: Option<NaiveDate>,
    gst_amount: Decimal,
    igst_amount: Decimal,
    rodtep_claim: Decimal,
    rodtep_status: IncentiveStatus,
    drawback_amount: Decimal,
    drawback_status: IncentiveStatus,
    remarks: Option<String>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    customer_company_name: Option<String>,
    customer_country: Option<String>,
}

/// Build the joined customer reference from `LEFT JOIN` columns.
pub(super) fn customer_ref(
    id: Option<CustomerId>,
    company_name: Option<String>,
    country: Option<String>,
) -> Option<CustomerRef> {
    Some(CustomerRef {
        id: id?,
        company_name: company_name?,
        country: country.unwrap_or_default(),
    })
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        let customer = customer_ref(
            row.customer_id,
            row.customer_company_name,
            row.customer_country,
        );
        Self {
            id: row.id,
            order_number: row.order_number,
            quotation_id: row.quotation_id,
            customer_id: row.customer_id,
            order_date: row.order_date,
            product_description: row.product_description,
            hsn_code: row.hsn_code,
            quantity: row.quantity,
            unit: row.unit,
            unit_price: row.unit_price,
            total_amount: row.total_amount,
            currency: row.currency,
            exchange_rate: row.exchange_rate,
            inr_value: row.inr_value,
            delivery_terms: row.delivery_terms,
            payment_terms: row.payment_terms,
            lc_number: row.lc_number,
            lc_date: row.lc_date,
            lc_expiry_date: row.lc_expiry_date,
            lc_amount: row.lc_amount,
            lc_bank: row.lc_bank,
            destination_port: row.destination_port,
            origin_port: row.origin_port,
            shipping_bill_number: row.shipping_bill_number,
            shipping_bill_date: row.shipping_bill_date,
            gst_invoice_number: row.gst_invoice_number,
            gst_invoice_date: row.gst_invoice_date,
            gst_amount: row.gst_amount,
            igst_amount: row.igst_amount,
            rodtep_claim: row.rodtep_claim,
            rodtep_status: row.rodtep_status,
            drawback_amount: row.drawback_amount,
            drawback_status: row.drawback_status,
            remarks: row.remarks,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
            customer,
        }
    }
}

/// Columns of `o` (an orders row or CTE) plus the joined customer `c`.
const SELECT: &str = r"
    SELECT o.id, o.order_number, o.quotation_id, o.customer_id, o.order_date,
           o.product_description, o.hsn_code, o.quantity, o.unit, o.unit_price,
           o.total_amount, o.currency, o.exchange_rate, o.inr_value, o.delivery_terms,
           o.payment_terms, o.lc_number, o.lc_date, o.lc_expiry_date, o.lc_amount, o.lc_bank,
           o.destination_port, o.origin_port, o.shipping_bill_number, o.shipping_bill_date,
           o.gst_invoice_number, o.gst_invoice_date, o.gst_amount, o.igst_amount,
           o.rodtep_claim, o.rodtep_status, o.drawback_amount, o.drawback_status,
           o.remarks, o.status, o.created_at, o.updated_at,
           c.company_name AS customer_company_name, c.country AS customer_country
";

const JOIN_CUSTOMER: &str = "LEFT JOIN tracker.customers c ON c.id = o.customer_id";

const DUPLICATE: &str = "order number already exists";

// =============================================================================
// Repository
// =============================================================================

/// Repository for export order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all orders, newest order date first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "{SELECT} FROM tracker.orders o {JOIN_CUSTOMER} \
             ORDER BY o.order_date DESC, o.created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "{SELECT} FROM tracker.orders o {JOIN_CUSTOMER} WHERE o.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Insert an order from validated input.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the order number is taken or
    /// the customer does not exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, id: OrderId, input: &OrderInput) -> Result<Order, RepositoryError> {
        let query = format!(
            r"
            WITH o AS (
                INSERT INTO tracker.orders (
                    id, order_number, quotation_id, customer_id, order_date,
                    product_description, hsn_code, quantity, unit, unit_price,
                    total_amount, currency, exchange_rate, inr_value, delivery_terms,
                    payment_terms, lc_number, lc_date, lc_expiry_date, lc_amount, lc_bank,
                    destination_port, origin_port, shipping_bill_number, shipping_bill_date,
                    gst_invoice_number, gst_invoice_date, gst_amount, igst_amount,
                    rodtep_claim, rodtep_status, drawback_amount, drawback_status,
                    remarks, status
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                        $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28,
                        $29, $30, $31, $32, $33, $34, $35)
                RETURNING *
            )
            {SELECT} FROM o {JOIN_CUSTOMER}
            "
        );
        let row = bind_input(sqlx::query_as::<_, OrderRow>(&query).bind(id), input)
            .fetch_one(self.pool)
            .await
            .map_err(|e| write_error(e, DUPLICATE))?;

        Ok(row.into())
    }

    /// Replace every editable field of an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    /// Returns `RepositoryError::Conflict` if the order number is taken.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(&self, id: OrderId, input: &OrderInput) -> Result<Order, RepositoryError> {
        let query = format!(
            r"
            WITH o AS (
                UPDATE tracker.orders
                SET order_number = $2, quotation_id = $3, customer_id = $4, order_date = $5,
                    product_description = $6, hsn_code = $7, quantity = $8, unit = $9,
                    unit_price = $10, total_amount = $11, currency = $12, exchange_rate = $13,
                    inr_value = $14, delivery_terms = $15, payment_terms = $16,
                    lc_number = $17, lc_date = $18, lc_expiry_date = $19, lc_amount = $20,
                    lc_bank = $21, destination_port = $22, origin_port = $23,
                    shipping_bill_number = $24, shipping_bill_date = $25,
                    gst_invoice_number = $26, gst_invoice_date = $27, gst_amount = $28,
                    igst_amount = $29, rodtep_claim = $30, rodtep_status = $31,
                    drawback_amount = $32, drawback_status = $33, remarks = $34, status = $35,
                    updated_at = now()
                WHERE id = $1
                RETURNING *
            )
            {SELECT} FROM o {JOIN_CUSTOMER}
            "
        );
        let row = bind_input(sqlx::query_as::<_, OrderRow>(&query).bind(id), input)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| write_error(e, DUPLICATE))?;

        row.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    /// Delete an order together with its payments and shipments.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: OrderId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tracker.orders WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

type OrderQuery<'q> =
    sqlx::query::QueryAs<'q, sqlx::Postgres, OrderRow, sqlx::postgres::PgArguments>;

/// Bind `$2..=$35` in column order.
fn bind_input<'q>(query: OrderQuery<'q>, input: &'q OrderInput) -> OrderQuery<'q> {
    query
        .bind(&input.order_number)
        .bind(input.quotation_id)
        .bind(input.customer_id)
        .bind(input.order_date)
        .bind(&input.product_description)
        .bind(&input.hsn_code)
        .bind(input.quantity)
        .bind(&input.unit)
        .bind(input.unit_price)
        .bind(input.total_amount)
        .bind(&input.currency)
        .bind(input.exchange_rate)
        .bind(input.inr_value)
        .bind(&input.delivery_terms)
        .bind(&input.payment_terms)
        .bind(&input.lc_number)
        .bind(input.lc_date)
        .bind(input.lc_expiry_date)
        .bind(input.lc_amount)
        .bind(&input.lc_bank)
        .bind(&input.destination_port)
        .bind(&input.origin_port)
        .bind(&input.shipping_bill_number)
        .bind(input.shipping_bill_date)
        .bind(&input.gst_invoice_number)
        .bind(input.gst_invoice_date)
        .bind(input.gst_amount)
        .bind(input.igst_amount)
        .bind(input.rodtep_claim)
        .bind(input.rodtep_status)
        .bind(input.drawback_amount)
        .bind(input.drawback_status)
        .bind(&input.remarks)
        .bind(input.status)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_ref_requires_id_and_name() {
        let id = CustomerId::generate();
        let joined = customer_ref(Some(id), Some("Gulf Spices".to_string()), None).unwrap();
        assert_eq!(joined.id, id);
        assert_eq!(joined.country, "");

        assert!(customer_ref(None, Some("Orphan".to_string()), None).is_none());
        assert!(customer_ref(Some(id), None, None).is_none());
    }
}
