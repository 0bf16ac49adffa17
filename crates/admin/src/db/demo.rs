//! In-memory store used when no database is configured.
//!
//! Mirrors the `PostgreSQL` repositories: same list ordering, joined
//! references filled in on reads, `NotFound` for unknown IDs, `Conflict` for
//! duplicate record numbers or dangling references, and the same delete
//! semantics (customers are unlinked, orders take their payments and
//! shipments with them). Data lives only as long as the process.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use export_tracker_core::models::{
    Customer, CustomerInput, CustomerRef, Inquiry, InquiryInput, InquiryRef, Order, OrderInput,
    OrderRef, Payment, PaymentInput, Quotation, QuotationInput, Shipment, ShipmentInput,
};
use export_tracker_core::{
    CustomerId, InquiryId, OrderId, PaymentId, QuotationId, ShipmentId,
};

use super::RepositoryError;
use super::fixtures::{Fixtures, fixtures};

/// Shared handle to the demo tables.
#[derive(Debug, Clone, Default)]
pub struct DemoStore {
    tables: Arc<RwLock<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    customers: Vec<Customer>,
    inquiries: Vec<Inquiry>,
    quotations: Vec<Quotation>,
    orders: Vec<Order>,
    shipments: Vec<Shipment>,
    payments: Vec<Payment>,
}

fn dangling() -> RepositoryError {
    RepositoryError::Conflict("referenced record does not exist".to_string())
}

fn duplicate(what: &str) -> RepositoryError {
    RepositoryError::Conflict(format!("{what} already exists"))
}

impl Tables {
    fn from_fixtures(fx: Fixtures) -> Self {
        let now = Utc::now();
        Self {
            customers: fx
                .customers
                .into_iter()
                .map(|(id, input)| Customer::from_input(id, input, now))
                .collect(),
            inquiries: fx
                .inquiries
                .into_iter()
                .map(|(id, input)| Inquiry::from_input(id, input, now))
                .collect(),
            quotations: fx
                .quotations
                .into_iter()
                .map(|(id, input)| Quotation::from_input(id, input, now))
                .collect(),
            orders: fx
                .orders
                .into_iter()
                .map(|(id, input)| Order::from_input(id, input, now))
                .collect(),
            shipments: fx
                .shipments
                .into_iter()
                .filter_map(|(id, input)| Shipment::from_input(id, input, now))
                .collect(),
            payments: fx
                .payments
                .into_iter()
                .filter_map(|(id, input)| Payment::from_input(id, input, now))
                .collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Joins
    // -------------------------------------------------------------------------

    fn customer_ref(&self, id: Option<CustomerId>) -> Option<CustomerRef> {
        let id = id?;
        self.customers
            .iter()
            .find(|c| c.id == id)
            .map(CustomerRef::from)
    }

    fn order_ref(&self, id: OrderId) -> Option<OrderRef> {
        self.orders.iter().find(|o| o.id == id).map(OrderRef::from)
    }

    fn inquiry_ref(&self, id: Option<InquiryId>) -> Option<InquiryRef> {
        let id = id?;
        self.inquiries
            .iter()
            .find(|i| i.id == id)
            .map(InquiryRef::from)
    }

    fn join_order(&self, order: &Order) -> Order {
        let mut order = order.clone();
        order.customer = self.customer_ref(order.customer_id);
        order
    }

    fn join_payment(&self, payment: &Payment) -> Payment {
        let mut payment = payment.clone();
        payment.order = self.order_ref(payment.order_id);
        payment.customer = self.customer_ref(payment.customer_id);
        payment
    }

    fn join_shipment(&self, shipment: &Shipment) -> Shipment {
        let mut shipment = shipment.clone();
        shipment.order = self.order_ref(shipment.order_id);
        shipment.customer = self.customer_ref(shipment.customer_id);
        shipment
    }

    fn join_inquiry(&self, inquiry: &Inquiry) -> Inquiry {
        let mut inquiry = inquiry.clone();
        inquiry.customer = self.customer_ref(inquiry.customer_id);
        inquiry
    }

    fn join_quotation(&self, quotation: &Quotation) -> Quotation {
        let mut quotation = quotation.clone();
        quotation.customer = self.customer_ref(quotation.customer_id);
        quotation.inquiry = self.inquiry_ref(quotation.inquiry_id);
        quotation
    }

    // -------------------------------------------------------------------------
    // Reference checks (foreign keys)
    // -------------------------------------------------------------------------

    fn check_customer(&self, id: Option<CustomerId>) -> Result<(), RepositoryError> {
        match id {
            Some(id) if !self.customers.iter().any(|c| c.id == id) => Err(dangling()),
            _ => Ok(()),
        }
    }

    fn check_order(&self, id: Option<OrderId>) -> Result<(), RepositoryError> {
        match id {
            Some(id) if self.orders.iter().any(|o| o.id == id) => Ok(()),
            _ => Err(dangling()),
        }
    }

    fn check_inquiry(&self, id: Option<InquiryId>) -> Result<(), RepositoryError> {
        match id {
            Some(id) if !self.inquiries.iter().any(|i| i.id == id) => Err(dangling()),
            _ => Ok(()),
        }
    }

    fn check_quotation(&self, id: Option<QuotationId>) -> Result<(), RepositoryError> {
        match id {
            Some(id) if !self.quotations.iter().any(|q| q.id == id) => Err(dangling()),
            _ => Ok(()),
        }
    }
}

impl DemoStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store loaded with the demo fixtures as of `today`.
    #[must_use]
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::from_fixtures(fixtures(today)))),
        }
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Customers ordered by company name.
    pub async fn list_customers(&self) -> Vec<Customer> {
        let tables = self.tables.read().await;
        let mut customers = tables.customers.clone();
        customers.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        customers
    }

    pub async fn get_customer(&self, id: CustomerId) -> Option<Customer> {
        let tables = self.tables.read().await;
        tables.customers.iter().find(|c| c.id == id).cloned()
    }

    /// Insert a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the ID is already taken.
    pub async fn create_customer(
        &self,
        id: CustomerId,
        input: CustomerInput,
    ) -> Result<Customer, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.customers.iter().any(|c| c.id == id) {
            return Err(duplicate("customer"));
        }
        let customer = Customer::from_input(id, input, Utc::now());
        tables.customers.push(customer.clone());
        Ok(customer)
    }

    /// Replace a customer's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        input: CustomerInput,
    ) -> Result<Customer, RepositoryError> {
        let mut tables = self.tables.write().await;
        let customer = tables
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        customer.apply(input, Utc::now());
        Ok(customer.clone())
    }

    /// Delete a customer, unlinking every record that referenced it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;
        let before = tables.customers.len();
        tables.customers.retain(|c| c.id != id);
        if tables.customers.len() == before {
            return Err(RepositoryError::NotFound);
        }

        let unlink = |customer_id: &mut Option<CustomerId>| {
            if *customer_id == Some(id) {
                *customer_id = None;
            }
        };
        tables.inquiries.iter_mut().for_each(|r| unlink(&mut r.customer_id));
        tables.quotations.iter_mut().for_each(|r| unlink(&mut r.customer_id));
        tables.orders.iter_mut().for_each(|r| unlink(&mut r.customer_id));
        tables.shipments.iter_mut().for_each(|r| unlink(&mut r.customer_id));
        tables.payments.iter_mut().for_each(|r| unlink(&mut r.customer_id));
        Ok(())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Orders, newest order date first, with customers joined.
    pub async fn list_orders(&self) -> Vec<Order> {
        let tables = self.tables.read().await;
        let mut orders: Vec<Order> = tables.orders.iter().map(|o| tables.join_order(o)).collect();
        orders.sort_by(|a, b| {
            b.order_date
                .cmp(&a.order_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        orders
    }

    pub async fn get_order(&self, id: OrderId) -> Option<Order> {
        let tables = self.tables.read().await;
        tables
            .orders
            .iter()
            .find(|o| o.id == id)
            .map(|o| tables.join_order(o))
    }

    /// Insert an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the order number is taken or a
    /// referenced customer or quotation does not exist.
    pub async fn create_order(
        &self,
        id: OrderId,
        input: OrderInput,
    ) -> Result<Order, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.orders.iter().any(|o| o.order_number == input.order_number) {
            return Err(duplicate("order number"));
        }
        tables.check_customer(input.customer_id)?;
        tables.check_quotation(input.quotation_id)?;

        let order = Order::from_input(id, input, Utc::now());
        let joined = tables.join_order(&order);
        tables.orders.push(order);
        Ok(joined)
    }

    /// Replace an order's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    /// Returns `RepositoryError::Conflict` if the new order number is taken or
    /// a referenced record does not exist.
    pub async fn update_order(
        &self,
        id: OrderId,
        input: OrderInput,
    ) -> Result<Order, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.orders.iter().any(|o| o.id == id) {
            return Err(RepositoryError::NotFound);
        }
        if tables
            .orders
            .iter()
            .any(|o| o.id != id && o.order_number == input.order_number)
        {
            return Err(duplicate("order number"));
        }
        tables.check_customer(input.customer_id)?;
        tables.check_quotation(input.quotation_id)?;

        let order = tables
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(RepositoryError::NotFound)?;
        order.apply(input, Utc::now());
        let order = order.clone();
        Ok(tables.join_order(&order))
    }

    /// Delete an order together with its payments and shipments.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;
        let before = tables.orders.len();
        tables.orders.retain(|o| o.id != id);
        if tables.orders.len() == before {
            return Err(RepositoryError::NotFound);
        }
        tables.payments.retain(|p| p.order_id != id);
        tables.shipments.retain(|s| s.order_id != id);
        Ok(())
    }

    // =========================================================================
    // Payments
    // =========================================================================

    /// Payments, latest due date first, with order and customer joined.
    pub async fn list_payments(&self) -> Vec<Payment> {
        let tables = self.tables.read().await;
        let mut payments: Vec<Payment> = tables
            .payments
            .iter()
            .map(|p| tables.join_payment(p))
            .collect();
        payments.sort_by(|a, b| {
            b.payment_due_date
                .cmp(&a.payment_due_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        payments
    }

    pub async fn get_payment(&self, id: PaymentId) -> Option<Payment> {
        let tables = self.tables.read().await;
        tables
            .payments
            .iter()
            .find(|p| p.id == id)
            .map(|p| tables.join_payment(p))
    }

    /// Insert a payment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the reference is taken or the
    /// order or customer does not exist.
    pub async fn create_payment(
        &self,
        id: PaymentId,
        input: PaymentInput,
    ) -> Result<Payment, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables
            .payments
            .iter()
            .any(|p| p.payment_reference == input.payment_reference)
        {
            return Err(duplicate("payment reference"));
        }
        tables.check_order(input.order_id)?;
        tables.check_customer(input.customer_id)?;

        let payment = Payment::from_input(id, input, Utc::now()).ok_or_else(dangling)?;
        let joined = tables.join_payment(&payment);
        tables.payments.push(payment);
        Ok(joined)
    }

    /// Replace a payment's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no payment has this ID.
    /// Returns `RepositoryError::Conflict` if the reference is taken or a
    /// referenced record does not exist.
    pub async fn update_payment(
        &self,
        id: PaymentId,
        input: PaymentInput,
    ) -> Result<Payment, RepositoryError> {
        let mut tables = self.tables.write().await;
        let created_at = tables
            .payments
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.created_at)
            .ok_or(RepositoryError::NotFound)?;
        if tables
            .payments
            .iter()
            .any(|p| p.id != id && p.payment_reference == input.payment_reference)
        {
            return Err(duplicate("payment reference"));
        }
        tables.check_order(input.order_id)?;
        tables.check_customer(input.customer_id)?;

        let mut payment = Payment::from_input(id, input, Utc::now()).ok_or_else(dangling)?;
        payment.created_at = created_at;
        let joined = tables.join_payment(&payment);
        if let Some(slot) = tables.payments.iter_mut().find(|p| p.id == id) {
            *slot = payment;
        }
        Ok(joined)
    }

    // =========================================================================
    // Shipments
    // =========================================================================

    /// Shipments, latest shipment date first and undated last.
    pub async fn list_shipments(&self) -> Vec<Shipment> {
        let tables = self.tables.read().await;
        let mut shipments: Vec<Shipment> = tables
            .shipments
            .iter()
            .map(|s| tables.join_shipment(s))
            .collect();
        // `None < Some`, so comparing b to a puts undated shipments last.
        shipments.sort_by(|a, b| {
            b.shipment_date
                .cmp(&a.shipment_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        shipments
    }

    pub async fn get_shipment(&self, id: ShipmentId) -> Option<Shipment> {
        let tables = self.tables.read().await;
        tables
            .shipments
            .iter()
            .find(|s| s.id == id)
            .map(|s| tables.join_shipment(s))
    }

    /// Insert a shipment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the shipment number is taken or
    /// the order or customer does not exist.
    pub async fn create_shipment(
        &self,
        id: ShipmentId,
        input: ShipmentInput,
    ) -> Result<Shipment, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables
            .shipments
            .iter()
            .any(|s| s.shipment_number == input.shipment_number)
        {
            return Err(duplicate("shipment number"));
        }
        tables.check_order(input.order_id)?;
        tables.check_customer(input.customer_id)?;

        let shipment = Shipment::from_input(id, input, Utc::now()).ok_or_else(dangling)?;
        let joined = tables.join_shipment(&shipment);
        tables.shipments.push(shipment);
        Ok(joined)
    }

    /// Replace a shipment's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no shipment has this ID.
    /// Returns `RepositoryError::Conflict` if the shipment number is taken or
    /// a referenced record does not exist.
    pub async fn update_shipment(
        &self,
        id: ShipmentId,
        input: ShipmentInput,
    ) -> Result<Shipment, RepositoryError> {
        let mut tables = self.tables.write().await;
        let created_at = tables
            .shipments
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.created_at)
            .ok_or(RepositoryError::NotFound)?;
        if tables
            .shipments
            .iter()
            .any(|s| s.id != id && s.shipment_number == input.shipment_number)
        {
            return Err(duplicate("shipment number"));
        }
        tables.check_order(input.order_id)?;
        tables.check_customer(input.customer_id)?;

        let mut shipment = Shipment::from_input(id, input, Utc::now()).ok_or_else(dangling)?;
        shipment.created_at = created_at;
        let joined = tables.join_shipment(&shipment);
        if let Some(slot) = tables.shipments.iter_mut().find(|s| s.id == id) {
            *slot = shipment;
        }
        Ok(joined)
    }

    // =========================================================================
    // Inquiries & quotations
    // =========================================================================

    /// Inquiries, newest first, with customers joined.
    pub async fn list_inquiries(&self) -> Vec<Inquiry> {
        let tables = self.tables.read().await;
        let mut inquiries: Vec<Inquiry> = tables
            .inquiries
            .iter()
            .map(|i| tables.join_inquiry(i))
            .collect();
        inquiries.sort_by(|a, b| {
            b.inquiry_date
                .cmp(&a.inquiry_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        inquiries
    }

    /// Insert an inquiry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the inquiry number is taken or
    /// the customer does not exist.
    pub async fn create_inquiry(
        &self,
        id: InquiryId,
        input: InquiryInput,
    ) -> Result<Inquiry, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables
            .inquiries
            .iter()
            .any(|i| i.inquiry_number == input.inquiry_number)
        {
            return Err(duplicate("inquiry number"));
        }
        tables.check_customer(input.customer_id)?;

        let inquiry = Inquiry::from_input(id, input, Utc::now());
        let joined = tables.join_inquiry(&inquiry);
        tables.inquiries.push(inquiry);
        Ok(joined)
    }

    /// Quotations, newest first, with customer and inquiry joined.
    pub async fn list_quotations(&self) -> Vec<Quotation> {
        let tables = self.tables.read().await;
        let mut quotations: Vec<Quotation> = tables
            .quotations
            .iter()
            .map(|q| tables.join_quotation(q))
            .collect();
        quotations.sort_by(|a, b| {
            b.quotation_date
                .cmp(&a.quotation_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        quotations
    }

    /// Insert a quotation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the quotation number is taken or
    /// a referenced inquiry or customer does not exist.
    pub async fn create_quotation(
        &self,
        id: QuotationId,
        input: QuotationInput,
    ) -> Result<Quotation, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables
            .quotations
            .iter()
            .any(|q| q.quotation_number == input.quotation_number)
        {
            return Err(duplicate("quotation number"));
        }
        tables.check_inquiry(input.inquiry_id)?;
        tables.check_customer(input.customer_id)?;

        let quotation = Quotation::from_input(id, input, Utc::now());
        let joined = tables.join_quotation(&quotation);
        tables.quotations.push(quotation);
        Ok(joined)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use export_tracker_core::ShipmentStatus;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn order_input(number: &str, customer_id: CustomerId) -> OrderInput {
        OrderInput {
            order_number: number.to_string(),
            customer_id: Some(customer_id),
            product_description: "Cardamom 8mm".to_string(),
            quantity: Decimal::new(500, 0),
            unit_price: Decimal::new(1_450, 2),
            ..OrderInput::default()
        }
        .with_computed_totals()
    }

    #[tokio::test]
    async fn test_seeded_lists_are_sorted_and_joined() {
        let store = DemoStore::seeded(today());

        let customers = store.list_customers().await;
        let names: Vec<&str> = customers.iter().map(|c| c.company_name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        let orders = store.list_orders().await;
        assert!(
            orders
                .iter()
                .zip(orders.iter().skip(1))
                .all(|(a, b)| a.order_date >= b.order_date)
        );
        assert!(orders.iter().all(|o| o.customer.is_some()));

        let payments = store.list_payments().await;
        assert!(payments.iter().all(|p| p.order.is_some()));
        assert!(
            payments
                .iter()
                .zip(payments.iter().skip(1))
                .all(|(a, b)| a.payment_due_date >= b.payment_due_date)
        );

        let quotations = store.list_quotations().await;
        assert!(quotations.iter().all(|q| q.inquiry.is_some()));
    }

    #[tokio::test]
    async fn test_undated_shipments_sort_last() {
        let store = DemoStore::seeded(today());
        let shipments = store.list_shipments().await;
        assert!(shipments.last().unwrap().shipment_date.is_none());
        assert!(shipments.first().unwrap().shipment_date.is_some());
    }

    #[tokio::test]
    async fn test_create_order_joins_customer_and_rejects_duplicates() {
        let store = DemoStore::new();
        let customer = store
            .create_customer(
                CustomerId::generate(),
                CustomerInput {
                    company_name: "Spice Route BV".to_string(),
                    country: "Netherlands".to_string(),
                    ..CustomerInput::default()
                },
            )
            .await
            .unwrap();

        let order = store
            .create_order(OrderId::generate(), order_input("EXP-1", customer.id))
            .await
            .unwrap();
        assert_eq!(order.customer.unwrap().company_name, "Spice Route BV");

        let err = store
            .create_order(OrderId::generate(), order_input("EXP-1", customer.id))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_dangling_references_conflict() {
        let store = DemoStore::new();
        let err = store
            .create_order(OrderId::generate(), order_input("EXP-1", CustomerId::generate()))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));

        let err = store
            .create_payment(
                PaymentId::generate(),
                PaymentInput {
                    payment_reference: "PAY-1".to_string(),
                    order_id: Some(OrderId::generate()),
                    ..PaymentInput::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = DemoStore::new();
        let err = store
            .update_order(OrderId::generate(), OrderInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));

        let err = store
            .update_customer(CustomerId::generate(), CustomerInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_update_shipment_keeps_created_at() {
        let store = DemoStore::seeded(today());
        let shipment = store.list_shipments().await.into_iter().next().unwrap();

        let input = ShipmentInput {
            shipment_number: shipment.shipment_number.clone(),
            order_id: Some(shipment.order_id),
            customer_id: shipment.customer_id,
            status: ShipmentStatus::Arrived,
            ..ShipmentInput::default()
        };
        let updated = store.update_shipment(shipment.id, input).await.unwrap();
        assert_eq!(updated.status, ShipmentStatus::Arrived);
        assert_eq!(updated.created_at, shipment.created_at);
        assert!(updated.order.is_some());
    }

    #[tokio::test]
    async fn test_delete_order_cascades() {
        let store = DemoStore::seeded(today());
        let payment = store.list_payments().await.into_iter().next().unwrap();
        let order_id = payment.order_id;

        store.delete_order(order_id).await.unwrap();

        assert!(store.get_order(order_id).await.is_none());
        assert!(store.list_payments().await.iter().all(|p| p.order_id != order_id));
        assert!(store.list_shipments().await.iter().all(|s| s.order_id != order_id));
        assert!(matches!(
            store.delete_order(order_id).await.unwrap_err(),
            RepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_customer_unlinks_records() {
        let store = DemoStore::seeded(today());
        let order = store.list_orders().await.into_iter().next().unwrap();
        let customer_id = order.customer_id.unwrap();

        store.delete_customer(customer_id).await.unwrap();

        let order = store.get_order(order.id).await.unwrap();
        assert_eq!(order.customer_id, None);
        assert!(order.customer.is_none());
        assert!(
            store
                .list_payments()
                .await
                .iter()
                .all(|p| p.customer_id != Some(customer_id))
        );
    }
}
