//! Backend selection for the data layer.
//!
//! Handlers talk to [`DataSource`] and never to a repository or the demo
//! store directly, so every page and endpoint behaves the same in demo mode.

use sqlx::PgPool;

use export_tracker_core::models::{
    Customer, CustomerInput, Inquiry, InquiryInput, Order, OrderInput, Payment, PaymentInput,
    Quotation, QuotationInput, Shipment, ShipmentInput,
};
use export_tracker_core::reports::ReportSources;
use export_tracker_core::{
    CustomerId, InquiryId, OrderId, PaymentId, QuotationId, ShipmentId,
};

use super::{
    CustomerRepository, DemoStore, InquiryRepository, OrderRepository, PaymentRepository,
    QuotationRepository, RepositoryError, ShipmentRepository,
};

/// Where records are read from and written to.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// The `tracker` schema in `PostgreSQL`.
    Postgres(PgPool),
    /// Process-local demo data.
    Demo(DemoStore),
}

/// Every record, loaded once for the dashboard and report builders.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
    pub shipments: Vec<Shipment>,
    pub inquiries: Vec<Inquiry>,
    pub quotations: Vec<Quotation>,
}

impl Snapshot {
    /// Borrow the snapshot as report input.
    #[must_use]
    pub fn sources(&self) -> ReportSources<'_> {
        ReportSources {
            customers: &self.customers,
            orders: &self.orders,
            payments: &self.payments,
            shipments: &self.shipments,
            inquiries: &self.inquiries,
            quotations: &self.quotations,
        }
    }
}

impl DataSource {
    #[must_use]
    pub const fn is_demo(&self) -> bool {
        matches!(self, Self::Demo(_))
    }

    /// Check the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the database does not answer.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        match self {
            Self::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
            Self::Demo(_) => Ok(()),
        }
    }

    /// Load every table.
    ///
    /// # Errors
    ///
    /// Returns the first repository error encountered.
    pub async fn snapshot(&self) -> Result<Snapshot, RepositoryError> {
        Ok(Snapshot {
            customers: self.list_customers().await?,
            orders: self.list_orders().await?,
            payments: self.list_payments().await?,
            shipments: self.list_shipments().await?,
            inquiries: self.list_inquiries().await?,
            quotations: self.list_quotations().await?,
        })
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, RepositoryError> {
        match self {
            Self::Postgres(pool) => CustomerRepository::new(pool).list().await,
            Self::Demo(store) => Ok(store.list_customers().await),
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        let customer = match self {
            Self::Postgres(pool) => CustomerRepository::new(pool).get(id).await?,
            Self::Demo(store) => store.get_customer(id).await,
        };
        customer.ok_or(RepositoryError::NotFound)
    }

    /// Create a customer with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a constraint violation.
    pub async fn create_customer(&self, input: CustomerInput) -> Result<Customer, RepositoryError> {
        let id = CustomerId::generate();
        match self {
            Self::Postgres(pool) => CustomerRepository::new(pool).create(id, &input).await,
            Self::Demo(store) => store.create_customer(id, input).await,
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        input: CustomerInput,
    ) -> Result<Customer, RepositoryError> {
        match self {
            Self::Postgres(pool) => CustomerRepository::new(pool).update(id, &input).await,
            Self::Demo(store) => store.update_customer(id, input).await,
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), RepositoryError> {
        match self {
            Self::Postgres(pool) => CustomerRepository::new(pool).delete(id).await,
            Self::Demo(store) => store.delete_customer(id).await,
        }
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError> {
        match self {
            Self::Postgres(pool) => OrderRepository::new(pool).list().await,
            Self::Demo(store) => Ok(store.list_orders().await),
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    pub async fn get_order(&self, id: OrderId) -> Result<Order, RepositoryError> {
        let order = match self {
            Self::Postgres(pool) => OrderRepository::new(pool).get(id).await?,
            Self::Demo(store) => store.get_order(id).await,
        };
        order.ok_or(RepositoryError::NotFound)
    }

    /// Create an order with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate order number or a
    /// dangling reference.
    pub async fn create_order(&self, input: OrderInput) -> Result<Order, RepositoryError> {
        let id = OrderId::generate();
        match self {
            Self::Postgres(pool) => OrderRepository::new(pool).create(id, &input).await,
            Self::Demo(store) => store.create_order(id, input).await,
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    /// Returns `RepositoryError::Conflict` on a constraint violation.
    pub async fn update_order(
        &self,
        id: OrderId,
        input: OrderInput,
    ) -> Result<Order, RepositoryError> {
        match self {
            Self::Postgres(pool) => OrderRepository::new(pool).update(id, &input).await,
            Self::Demo(store) => store.update_order(id, input).await,
        }
    }

    /// Delete an order and its payments and shipments.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), RepositoryError> {
        match self {
            Self::Postgres(pool) => OrderRepository::new(pool).delete(id).await,
            Self::Demo(store) => store.delete_order(id).await,
        }
    }

    // =========================================================================
    // Payments
    // =========================================================================

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_payments(&self) -> Result<Vec<Payment>, RepositoryError> {
        match self {
            Self::Postgres(pool) => PaymentRepository::new(pool).list().await,
            Self::Demo(store) => Ok(store.list_payments().await),
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no payment has this ID.
    pub async fn get_payment(&self, id: PaymentId) -> Result<Payment, RepositoryError> {
        let payment = match self {
            Self::Postgres(pool) => PaymentRepository::new(pool).get(id).await?,
            Self::Demo(store) => store.get_payment(id).await,
        };
        payment.ok_or(RepositoryError::NotFound)
    }

    /// Create a payment with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate reference or a
    /// dangling order.
    pub async fn create_payment(&self, input: PaymentInput) -> Result<Payment, RepositoryError> {
        let id = PaymentId::generate();
        match self {
            Self::Postgres(pool) => PaymentRepository::new(pool).create(id, &input).await,
            Self::Demo(store) => store.create_payment(id, input).await,
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no payment has this ID.
    /// Returns `RepositoryError::Conflict` on a constraint violation.
    pub async fn update_payment(
        &self,
        id: PaymentId,
        input: PaymentInput,
    ) -> Result<Payment, RepositoryError> {
        match self {
            Self::Postgres(pool) => PaymentRepository::new(pool).update(id, &input).await,
            Self::Demo(store) => store.update_payment(id, input).await,
        }
    }

    // =========================================================================
    // Shipments
    // =========================================================================

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_shipments(&self) -> Result<Vec<Shipment>, RepositoryError> {
        match self {
            Self::Postgres(pool) => ShipmentRepository::new(pool).list().await,
            Self::Demo(store) => Ok(store.list_shipments().await),
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no shipment has this ID.
    pub async fn get_shipment(&self, id: ShipmentId) -> Result<Shipment, RepositoryError> {
        let shipment = match self {
            Self::Postgres(pool) => ShipmentRepository::new(pool).get(id).await?,
            Self::Demo(store) => store.get_shipment(id).await,
        };
        shipment.ok_or(RepositoryError::NotFound)
    }

    /// Create a shipment with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate shipment number or a
    /// dangling order.
    pub async fn create_shipment(
        &self,
        input: ShipmentInput,
    ) -> Result<Shipment, RepositoryError> {
        let id = ShipmentId::generate();
        match self {
            Self::Postgres(pool) => ShipmentRepository::new(pool).create(id, &input).await,
            Self::Demo(store) => store.create_shipment(id, input).await,
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no shipment has this ID.
    /// Returns `RepositoryError::Conflict` on a constraint violation.
    pub async fn update_shipment(
        &self,
        id: ShipmentId,
        input: ShipmentInput,
    ) -> Result<Shipment, RepositoryError> {
        match self {
            Self::Postgres(pool) => ShipmentRepository::new(pool).update(id, &input).await,
            Self::Demo(store) => store.update_shipment(id, input).await,
        }
    }

    // =========================================================================
    // Inquiries & quotations
    // =========================================================================

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_inquiries(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        match self {
            Self::Postgres(pool) => InquiryRepository::new(pool).list().await,
            Self::Demo(store) => Ok(store.list_inquiries().await),
        }
    }

    /// Create an inquiry with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a constraint violation.
    pub async fn create_inquiry(&self, input: InquiryInput) -> Result<Inquiry, RepositoryError> {
        let id = InquiryId::generate();
        match self {
            Self::Postgres(pool) => InquiryRepository::new(pool).create(id, &input).await,
            Self::Demo(store) => store.create_inquiry(id, input).await,
        }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_quotations(&self) -> Result<Vec<Quotation>, RepositoryError> {
        match self {
            Self::Postgres(pool) => QuotationRepository::new(pool).list().await,
            Self::Demo(store) => Ok(store.list_quotations().await),
        }
    }

    /// Create a quotation with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a constraint violation.
    pub async fn create_quotation(
        &self,
        input: QuotationInput,
    ) -> Result<Quotation, RepositoryError> {
        let id = QuotationId::generate();
        match self {
            Self::Postgres(pool) => QuotationRepository::new(pool).create(id, &input).await,
            Self::Demo(store) => store.create_quotation(id, input).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[tokio::test]
    async fn test_demo_source_snapshot() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let source = DataSource::Demo(DemoStore::seeded(today));
        assert!(source.is_demo());
        source.ping().await.unwrap();

        let snapshot = source.snapshot().await.unwrap();
        assert_eq!(snapshot.customers.len(), 5);
        assert_eq!(snapshot.orders.len(), 5);
        assert_eq!(snapshot.sources().payments.len(), snapshot.payments.len());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let source = DataSource::Demo(DemoStore::new());
        let err = source.get_order(OrderId::generate()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
