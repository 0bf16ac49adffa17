//! Seed the database with the demo records.
//!
//! The same fixtures back the server's in-memory demo mode. Records use
//! fixed IDs and numbers, so re-running the command skips what is already
//! there instead of duplicating it.

use chrono::{NaiveDate, Utc};
use tracing::info;

use export_tracker_admin::db::fixtures::fixtures;
use export_tracker_admin::db::{
    CustomerRepository, InquiryRepository, OrderRepository, PaymentRepository,
    QuotationRepository, RepositoryError, ShipmentRepository,
};

/// Inserted and skipped counts for one table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    inserted: usize,
    skipped: usize,
}

impl Tally {
    /// Count one insert; a conflict means the record already exists.
    fn record<T>(&mut self, result: Result<T, RepositoryError>) -> Result<(), RepositoryError> {
        match result {
            Ok(_) => {
                self.inserted += 1;
                Ok(())
            }
            Err(RepositoryError::Conflict(_)) => {
                self.skipped += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn log(self, table: &str) {
        info!(table, inserted = self.inserted, skipped = self.skipped, "Seeded");
    }
}

/// Insert the demo fixtures laid out around `date` (default: today).
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails for a
/// reason other than the record already existing.
pub async fn run(date: Option<NaiveDate>) -> Result<(), Box<dyn std::error::Error>> {
    let today = date.unwrap_or_else(|| Utc::now().date_naive());
    let pool = super::connect().await?;
    let data = fixtures(today);

    info!(%today, "Seeding demo data");

    // Parents before children so references resolve.
    let mut tally = Tally::default();
    let repo = CustomerRepository::new(&pool);
    for (id, input) in &data.customers {
        tally.record(repo.create(*id, input).await)?;
    }
    tally.log("customers");

    let mut tally = Tally::default();
    let repo = InquiryRepository::new(&pool);
    for (id, input) in &data.inquiries {
        tally.record(repo.create(*id, input).await)?;
    }
    tally.log("inquiries");

    let mut tally = Tally::default();
    let repo = QuotationRepository::new(&pool);
    for (id, input) in &data.quotations {
        tally.record(repo.create(*id, input).await)?;
    }
    tally.log("quotations");

    let mut tally = Tally::default();
    let repo = OrderRepository::new(&pool);
    for (id, input) in &data.orders {
        tally.record(repo.create(*id, input).await)?;
    }
    tally.log("orders");

    let mut tally = Tally::default();
    let repo = ShipmentRepository::new(&pool);
    for (id, input) in &data.shipments {
        tally.record(repo.create(*id, input).await)?;
    }
    tally.log("shipments");

    let mut tally = Tally::default();
    let repo = PaymentRepository::new(&pool);
    for (id, input) in &data.payments {
        tally.record(repo.create(*id, input).await)?;
    }
    tally.log("payments");

    info!("Seeding complete!");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_skips_conflicts() {
        let mut tally = Tally::default();
        tally.record(Ok(())).unwrap();
        tally
            .record::<()>(Err(RepositoryError::Conflict("order number already exists".into())))
            .unwrap();
        assert_eq!(
            tally,
            Tally {
                inserted: 1,
                skipped: 1
            }
        );

        assert!(tally.record::<()>(Err(RepositoryError::NotFound)).is_err());
    }
}
