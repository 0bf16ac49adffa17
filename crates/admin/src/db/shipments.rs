//! Shipment repository.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use export_tracker_core::models::{OrderRef, Shipment, ShipmentInput};
use export_tracker_core::{CustomerId, OrderId, ShipmentId, ShipmentStatus};

use super::orders::customer_ref;
use super::{RepositoryError, write_error};

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct ShipmentRow {
    id: ShipmentId,
    shipment_number: String,
    order_id: OrderId,
    customer_id: Option<CustomerId>,
    shipment_date: Option<NaiveDate>,
    etd: Option<NaiveDate>,
    eta: Option<NaiveDate>,
    vessel_name: Option<String>,
    voyage_number: Option<String>,
    bl_number: Option<String>,
    bl_date: Option<NaiveDate>,
    container_number: Option<String>,
    container_size: String,
    shipping_line: Option<String>,
    freight_amount: Decimal,
    freight_currency: String,
    insurance_amount: Decimal,
    origin_port: Option<String>,
    destination_port: Option<String>,
    cha_name: Option<String>,
    cha_reference: Option<String>,
    customs_clearance_date: Option<NaiveDate>,
    let_export_date: Option<NaiveDate>,
    remarks: Option<String>,
    status: ShipmentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    order_number: Option<String>,
    customer_company_name: Option<String>,
    customer_country: Option<String>,
}

impl TryFrom<ShipmentRow> for Shipment {
    type Error = RepositoryError;

    fn try_from(row: ShipmentRow) -> Result<Self, Self::Error> {
        let order_number = row.order_number.ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "shipment {} references missing order {}",
                row.id, row.order_id
            ))
        })?;

        Ok(Self {
            id: row.id,
            shipment_number: row.shipment_number,
            order_id: row.order_id,
            customer_id: row.customer_id,
            shipment_date: row.shipment_date,
            etd: row.etd,
            eta: row.eta,
            vessel_name: row.vessel_name,
            voyage_number: row.voyage_number,
            bl_number: row.bl_number,
            bl_date: row.bl_date,
            container_number: row.container_number,
            container_size: row.container_size,
            shipping_line: row.shipping_line,
            freight_amount: row.freight_amount,
            freight_currency: row.freight_currency,
            insurance_amount: row.insurance_amount,
            origin_port: row.origin_port,
            destination_port: row.destination_port,
            cha_name: row.cha_name,
            cha_reference: row.cha_reference,
            customs_clearance_date: row.customs_clearance_date,
            let_export_date: row.let_export_date,
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
    SELECT s.id, s.shipment_number, s.order_id, s.customer_id, s.shipment_date, s.etd,
           s.eta, s.vessel_name, s.voyage_number, s.bl_number, s.bl_date,
           s.container_number, s.container_size, s.shipping_line, s.freight_amount,
           s.freight_currency, s.insurance_amount, s.origin_port, s.destination_port,
           s.cha_name, s.cha_reference, s.customs_clearance_date, s.let_export_date,
           s.remarks, s.status, s.created_at, s.updated_at,
           ord.order_number,
           c.company_name AS customer_company_name, c.country AS customer_country
";

const JOINS: &str = "LEFT JOIN tracker.orders ord ON ord.id = s.order_id \
     LEFT JOIN tracker.customers c ON c.id = s.customer_id";

const DUPLICATE: &str = "shipment number already exists";

// =============================================================================
// Repository
// =============================================================================

/// Repository for shipment database operations.
pub struct ShipmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShipmentRepository<'a> {
    /// Create a new shipment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all shipments, latest shipment date first and undated last.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a shipment's order is missing.
    pub async fn list(&self) -> Result<Vec<Shipment>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShipmentRow>(&format!(
            "{SELECT} FROM tracker.shipments s {JOINS} \
             ORDER BY s.shipment_date DESC NULLS LAST, s.created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a shipment by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the shipment's order is missing.
    pub async fn get(&self, id: ShipmentId) -> Result<Option<Shipment>, RepositoryError> {
        let row = sqlx::query_as::<_, ShipmentRow>(&format!(
            "{SELECT} FROM tracker.shipments s {JOINS} WHERE s.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Insert a shipment from validated input.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the shipment number is taken or
    /// the order does not exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        id: ShipmentId,
        input: &ShipmentInput,
    ) -> Result<Shipment, RepositoryError> {
        let query = format!(
            r"
            WITH s AS (
                INSERT INTO tracker.shipments (
                    id, shipment_number, order_id, customer_id, shipment_date, etd, eta,
                    vessel_name, voyage_number, bl_number, bl_date, container_number,
                    container_size, shipping_line, freight_amount, freight_currency,
                    insurance_amount, origin_port, destination_port, cha_name, cha_reference,
                    customs_clearance_date, let_export_date, remarks, status
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                        $16, $17, $18, $19, $20, $21, $22, $23, $24, $25)
                RETURNING *
            )
            {SELECT} FROM s {JOINS}
            "
        );
        let row = bind_input(sqlx::query_as::<_, ShipmentRow>(&query).bind(id), input)
            .fetch_one(self.pool)
            .await
            .map_err(|e| write_error(e, DUPLICATE))?;

        row.try_into()
    }

    /// Replace every editable field of a shipment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no shipment has this ID.
    /// Returns `RepositoryError::Conflict` if the shipment number is taken.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: ShipmentId,
        input: &ShipmentInput,
    ) -> Result<Shipment, RepositoryError> {
        let query = format!(
            r"
            WITH s AS (
                UPDATE tracker.shipments
                SET shipment_number = $2, order_id = $3, customer_id = $4, shipment_date = $5,
                    etd = $6, eta = $7, vessel_name = $8, voyage_number = $9, bl_number = $10,
                    bl_date = $11, container_number = $12, container_size = $13,
                    shipping_line = $14, freight_amount = $15, freight_currency = $16,
                    insurance_amount = $17, origin_port = $18, destination_port = $19,
                    cha_name = $20, cha_reference = $21, customs_clearance_date = $22,
                    let_export_date = $23, remarks = $24, status = $25, updated_at = now()
                WHERE id = $1
                RETURNING *
            )
            {SELECT} FROM s {JOINS}
            "
        );
        let row = bind_input(sqlx::query_as::<_, ShipmentRow>(&query).bind(id), input)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| write_error(e, DUPLICATE))?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }
}

type ShipmentQuery<'q> =
    sqlx::query::QueryAs<'q, sqlx::Postgres, ShipmentRow, sqlx::postgres::PgArguments>;

/// Bind `$2..=$25` in column order.
fn bind_input<'q>(query: ShipmentQuery<'q>, input: &'q ShipmentInput) -> ShipmentQuery<'q> {
    query
        .bind(&input.shipment_number)
        .bind(input.order_id)
        .bind(input.customer_id)
        .bind(input.shipment_date)
        .bind(input.etd)
        .bind(input.eta)
        .bind(&input.vessel_name)
        .bind(&input.voyage_number)
        .bind(&input.bl_number)
        .bind(input.bl_date)
        .bind(&input.container_number)
        .bind(&input.container_size)
        .bind(&input.shipping_line)
        .bind(input.freight_amount)
        .bind(&input.freight_currency)
        .bind(input.insurance_amount)
        .bind(&input.origin_port)
        .bind(&input.destination_port)
        .bind(&input.cha_name)
        .bind(&input.cha_reference)
        .bind(input.customs_clearance_date)
        .bind(input.let_export_date)
        .bind(&input.remarks)
        .bind(input.status)
}
