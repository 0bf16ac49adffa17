//! Customer repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use export_tracker_core::models::{Customer, CustomerInput};
use export_tracker_core::{CustomerId, CustomerStatus};

use super::{RepositoryError, write_error};

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: CustomerId,
    company_name: String,
    contact_person: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    country: String,
    city: Option<String>,
    address: Option<String>,
    gst_number: Option<String>,
    pan_number: Option<String>,
    iec_code: Option<String>,
    payment_terms: String,
    credit_limit: Decimal,
    notes: Option<String>,
    status: CustomerStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            company_name: row.company_name,
            contact_person: row.contact_person,
            email: row.email,
            phone: row.phone,
            country: row.country,
            city: row.city,
            address: row.address,
            gst_number: row.gst_number,
            pan_number: row.pan_number,
            iec_code: row.iec_code,
            payment_terms: row.payment_terms,
            credit_limit: row.credit_limit,
            notes: row.notes,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: &str = "id, company_name, contact_person, email, phone, country, city, address, \
     gst_number, pan_number, iec_code, payment_terms, credit_limit, notes, status, \
     created_at, updated_at";

// =============================================================================
// Repository
// =============================================================================

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all customers by company name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {COLUMNS} FROM tracker.customers ORDER BY company_name ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {COLUMNS} FROM tracker.customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a customer from validated input.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the ID is already taken.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        id: CustomerId,
        input: &CustomerInput,
    ) -> Result<Customer, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            r"
            INSERT INTO tracker.customers (
                id, company_name, contact_person, email, phone, country, city, address,
                gst_number, pan_number, iec_code, payment_terms, credit_limit, notes, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {COLUMNS}
            "
        ))
        .bind(id)
        .bind(&input.company_name)
        .bind(&input.contact_person)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.country)
        .bind(&input.city)
        .bind(&input.address)
        .bind(&input.gst_number)
        .bind(&input.pan_number)
        .bind(&input.iec_code)
        .bind(&input.payment_terms)
        .bind(input.credit_limit)
        .bind(&input.notes)
        .bind(input.status)
        .fetch_one(self.pool)
        .await
        .map_err(|e| write_error(e, "customer already exists"))?;

        Ok(row.into())
    }

    /// Replace every editable field of a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: CustomerId,
        input: &CustomerInput,
    ) -> Result<Customer, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            r"
            UPDATE tracker.customers
            SET company_name = $2, contact_person = $3, email = $4, phone = $5, country = $6,
                city = $7, address = $8, gst_number = $9, pan_number = $10, iec_code = $11,
                payment_terms = $12, credit_limit = $13, notes = $14, status = $15,
                updated_at = now()
            WHERE id = $1
            RETURNING {COLUMNS}
            "
        ))
        .bind(id)
        .bind(&input.company_name)
        .bind(&input.contact_person)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.country)
        .bind(&input.city)
        .bind(&input.address)
        .bind(&input.gst_number)
        .bind(&input.pan_number)
        .bind(&input.iec_code)
        .bind(&input.payment_terms)
        .bind(input.credit_limit)
        .bind(&input.notes)
        .bind(input.status)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| write_error(e, "customer already exists"))?;

        row.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    /// Delete a customer. Dependent records keep a `NULL` customer reference.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tracker.customers WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
