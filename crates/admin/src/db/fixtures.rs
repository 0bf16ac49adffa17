//! Sample records for demo mode and `et-cli seed`.
//!
//! Dates are relative to `today` so the dashboard always has something
//! overdue, an LC about to expire and a vessel on the water.

use chrono::{NaiveDate, TimeDelta};
use rust_decimal::Decimal;
use uuid::Uuid;

use export_tracker_core::models::{
    CustomerInput, InquiryInput, OrderInput, PaymentInput, QuotationInput, ShipmentInput,
};
use export_tracker_core::{
    CustomerId, CustomerStatus, IncentiveStatus, InquiryId, InquiryStatus, OrderId, OrderStatus,
    PaymentId, PaymentMode, PaymentStatus, QuotationId, QuotationStatus, ShipmentId,
    ShipmentStatus,
};

/// Every fixture record with its fixed ID, in insertion order.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub customers: Vec<(CustomerId, CustomerInput)>,
    pub inquiries: Vec<(InquiryId, InquiryInput)>,
    pub quotations: Vec<(QuotationId, QuotationInput)>,
    pub orders: Vec<(OrderId, OrderInput)>,
    pub shipments: Vec<(ShipmentId, ShipmentInput)>,
    pub payments: Vec<(PaymentId, PaymentInput)>,
}

const AL_NOOR: CustomerId = CustomerId::new(Uuid::from_u128(0x0c01));
const HAMBURG: CustomerId = CustomerId::new(Uuid::from_u128(0x0c02));
const PACIFIC: CustomerId = CustomerId::new(Uuid::from_u128(0x0c03));
const LANKA: CustomerId = CustomerId::new(Uuid::from_u128(0x0c04));
const NAIROBI: CustomerId = CustomerId::new(Uuid::from_u128(0x0c05));

const INQ_RICE: InquiryId = InquiryId::new(Uuid::from_u128(0x1001));
const INQ_TURMERIC: InquiryId = InquiryId::new(Uuid::from_u128(0x1002));
const INQ_CUMIN: InquiryId = InquiryId::new(Uuid::from_u128(0x1003));
const INQ_CHILLI: InquiryId = InquiryId::new(Uuid::from_u128(0x1004));

const QT_RICE: QuotationId = QuotationId::new(Uuid::from_u128(0x2001));
const QT_TURMERIC: QuotationId = QuotationId::new(Uuid::from_u128(0x2002));

const ORD_RICE: OrderId = OrderId::new(Uuid::from_u128(0x3001));
const ORD_TURMERIC: OrderId = OrderId::new(Uuid::from_u128(0x3002));
const ORD_CUMIN: OrderId = OrderId::new(Uuid::from_u128(0x3003));
const ORD_PEPPER: OrderId = OrderId::new(Uuid::from_u128(0x3004));
const ORD_RICE_REPEAT: OrderId = OrderId::new(Uuid::from_u128(0x3005));

fn day(today: NaiveDate, offset: i64) -> NaiveDate {
    today + TimeDelta::days(offset)
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Build the fixture set as of `today`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn fixtures(today: NaiveDate) -> Fixtures {
    let customers = vec![
        (
            AL_NOOR,
            CustomerInput {
                company_name: "Al Noor Trading LLC".to_string(),
                contact_person: text("Ahmed Khan"),
                email: text("purchase@alnoortrading.ae"),
                phone: text("+971 4 555 0142"),
                country: "UAE".to_string(),
                city: text("Dubai"),
                address: text("Warehouse 14, Al Quoz Industrial Area 3"),
                payment_terms: "LC at sight".to_string(),
                credit_limit: Decimal::new(50_000, 0),
                ..CustomerInput::default()
            },
        ),
        (
            HAMBURG,
            CustomerInput {
                company_name: "Hamburg Gewürz Import GmbH".to_string(),
                contact_person: text("Katrin Vogel"),
                email: text("einkauf@hg-import.de"),
                country: "Germany".to_string(),
                city: text("Hamburg"),
                payment_terms: "60 days DA".to_string(),
                credit_limit: Decimal::new(40_000, 0),
                ..CustomerInput::default()
            },
        ),
        (
            PACIFIC,
            CustomerInput {
                company_name: "Pacific Fine Foods Inc".to_string(),
                contact_person: text("Maria Lopez"),
                email: text("maria.lopez@pacificfinefoods.com"),
                phone: text("+1 213 555 0199"),
                country: "USA".to_string(),
                city: text("Los Angeles"),
                credit_limit: Decimal::new(75_000, 0),
                ..CustomerInput::default()
            },
        ),
        (
            LANKA,
            CustomerInput {
                company_name: "Lanka Wholesale (Pvt) Ltd".to_string(),
                contact_person: text("Nimal Perera"),
                country: "Sri Lanka".to_string(),
                city: text("Colombo"),
                payment_terms: "30% advance, balance TT".to_string(),
                credit_limit: Decimal::new(20_000, 0),
                ..CustomerInput::default()
            },
        ),
        (
            NAIROBI,
            CustomerInput {
                company_name: "Nairobi Fresh Produce Ltd".to_string(),
                country: "Kenya".to_string(),
                city: text("Nairobi"),
                notes: text("On hold after two lost inquiries"),
                status: CustomerStatus::Inactive,
                ..CustomerInput::default()
            },
        ),
    ];

    let inquiries = vec![
        (
            INQ_RICE,
            InquiryInput {
                inquiry_number: "INQ-2026-001".to_string(),
                customer_id: Some(AL_NOOR),
                inquiry_date: day(today, -60),
                product_description: "1121 Basmati Rice, steam, 25 kg bags".to_string(),
                quantity: Some(Decimal::new(20_000, 0)),
                target_price: Some(Decimal::new(110, 2)),
                destination_port: text("Jebel Ali"),
                status: InquiryStatus::Converted,
                ..InquiryInput::default()
            },
        ),
        (
            INQ_TURMERIC,
            InquiryInput {
                inquiry_number: "INQ-2026-002".to_string(),
                customer_id: Some(HAMBURG),
                inquiry_date: day(today, -20),
                product_description: "Turmeric powder, 3% curcumin".to_string(),
                quantity: Some(Decimal::new(5_000, 0)),
                target_price: Some(Decimal::new(235, 2)),
                delivery_terms: "CIF".to_string(),
                destination_port: text("Hamburg"),
                status: InquiryStatus::Quoted,
                follow_up_date: Some(day(today, 2)),
                ..InquiryInput::default()
            },
        ),
        (
            INQ_CUMIN,
            InquiryInput {
                inquiry_number: "INQ-2026-003".to_string(),
                customer_id: Some(PACIFIC),
                inquiry_date: day(today, -5),
                product_description: "Cumin seeds, Europe quality".to_string(),
                quantity: Some(Decimal::new(8_000, 0)),
                destination_port: text("Los Angeles"),
                follow_up_date: Some(day(today, 3)),
                ..InquiryInput::default()
            },
        ),
        (
            INQ_CHILLI,
            InquiryInput {
                inquiry_number: "INQ-2026-004".to_string(),
                customer_id: Some(NAIROBI),
                inquiry_date: day(today, -90),
                product_description: "Red chilli, stemless".to_string(),
                quantity: Some(Decimal::new(2_000, 0)),
                remarks: text("Buyer went with a cheaper origin"),
                status: InquiryStatus::Lost,
                ..InquiryInput::default()
            },
        ),
    ];

    let quotations = vec![
        (
            QT_RICE,
            QuotationInput {
                quotation_number: "QT-2026-001".to_string(),
                inquiry_id: Some(INQ_RICE),
                customer_id: Some(AL_NOOR),
                quotation_date: day(today, -55),
                valid_until: Some(day(today, -25)),
                product_description: "1121 Basmati Rice, steam, 25 kg bags".to_string(),
                hsn_code: text("10063020"),
                quantity: Some(Decimal::new(20_000, 0)),
                unit_price: Decimal::new(105, 2),
                payment_terms: "LC at sight".to_string(),
                destination_port: text("Jebel Ali"),
                status: QuotationStatus::Accepted,
                ..QuotationInput::default()
            },
        ),
        (
            QT_TURMERIC,
            QuotationInput {
                quotation_number: "QT-2026-002".to_string(),
                inquiry_id: Some(INQ_TURMERIC),
                customer_id: Some(HAMBURG),
                quotation_date: day(today, -18),
                valid_until: Some(day(today, 12)),
                product_description: "Turmeric powder, 3% curcumin".to_string(),
                hsn_code: text("09103030"),
                quantity: Some(Decimal::new(5_000, 0)),
                unit_price: Decimal::new(240, 2),
                delivery_terms: "CIF".to_string(),
                payment_terms: "60 days DA".to_string(),
                status: QuotationStatus::Sent,
                ..QuotationInput::default()
            },
        ),
    ];

    let orders = vec![
        (
            ORD_RICE,
            OrderInput {
                order_number: "EXP-2026-001".to_string(),
                quotation_id: Some(QT_RICE),
                customer_id: Some(AL_NOOR),
                order_date: day(today, -50),
                product_description: "1121 Basmati Rice, steam, 25 kg bags".to_string(),
                hsn_code: text("10063020"),
                quantity: Decimal::new(20_000, 0),
                unit_price: Decimal::new(105, 2),
                exchange_rate: Decimal::new(8350, 2),
                payment_terms: "LC at sight".to_string(),
                lc_number: text("ENBD/ILC/2026/0114"),
                lc_date: Some(day(today, -48)),
                lc_expiry_date: Some(day(today, 10)),
                lc_amount: Some(Decimal::new(21_000, 0)),
                lc_bank: text("Emirates NBD"),
                destination_port: text("Jebel Ali"),
                shipping_bill_number: text("4417823"),
                shipping_bill_date: Some(day(today, -13)),
                gst_invoice_number: text("GST/EXP/2026/031"),
                gst_invoice_date: Some(day(today, -13)),
                rodtep_claim: Decimal::new(42_000, 2),
                rodtep_status: IncentiveStatus::Applied,
                status: OrderStatus::Shipped,
                ..OrderInput::default()
            }
            .with_computed_totals(),
        ),
        (
            ORD_TURMERIC,
            OrderInput {
                order_number: "EXP-2026-002".to_string(),
                quotation_id: Some(QT_TURMERIC),
                customer_id: Some(HAMBURG),
                order_date: day(today, -140),
                product_description: "Turmeric powder, 3% curcumin".to_string(),
                hsn_code: text("09103030"),
                quantity: Decimal::new(5_000, 0),
                unit_price: Decimal::new(240, 2),
                currency: "EUR".to_string(),
                exchange_rate: Decimal::new(9020, 2),
                delivery_terms: "CIF".to_string(),
                payment_terms: "60 days DA".to_string(),
                destination_port: text("Hamburg"),
                gst_amount: Decimal::new(54_000, 2),
                drawback_amount: Decimal::new(18_000, 2),
                drawback_status: IncentiveStatus::Received,
                status: OrderStatus::Delivered,
                ..OrderInput::default()
            }
            .with_computed_totals(),
        ),
        (
            ORD_CUMIN,
            OrderInput {
                order_number: "EXP-2026-003".to_string(),
                customer_id: Some(PACIFIC),
                order_date: day(today, -100),
                product_description: "Cumin seeds, Europe quality".to_string(),
                hsn_code: text("09093129"),
                quantity: Decimal::new(8_000, 0),
                unit_price: Decimal::new(315, 2),
                exchange_rate: Decimal::new(8310, 2),
                delivery_terms: "CFR".to_string(),
                lc_number: text("BOA/LC/77120"),
                lc_date: Some(day(today, -98)),
                lc_expiry_date: Some(day(today, -40)),
                lc_amount: Some(Decimal::new(25_200, 0)),
                lc_bank: text("Bank of America"),
                destination_port: text("Los Angeles"),
                shipping_bill_number: text("3982210"),
                shipping_bill_date: Some(day(today, -88)),
                igst_amount: Decimal::new(126_000, 2),
                rodtep_claim: Decimal::new(50_400, 2),
                rodtep_status: IncentiveStatus::Received,
                drawback_amount: Decimal::new(25_000, 2),
                drawback_status: IncentiveStatus::Received,
                status: OrderStatus::Completed,
                ..OrderInput::default()
            }
            .with_computed_totals(),
        ),
        (
            ORD_PEPPER,
            OrderInput {
                order_number: "EXP-2026-004".to_string(),
                customer_id: Some(LANKA),
                order_date: day(today, -3),
                product_description: "Black pepper 550 GL".to_string(),
                hsn_code: text("09041130"),
                quantity: Decimal::new(3_000, 0),
                unit_price: Decimal::new(620, 2),
                payment_terms: "30% advance, balance TT".to_string(),
                lc_number: text("CBC/2026/5531"),
                lc_date: Some(day(today, -2)),
                lc_expiry_date: Some(day(today, 5)),
                lc_amount: Some(Decimal::new(13_020, 0)),
                lc_bank: text("Commercial Bank of Ceylon"),
                destination_port: text("Colombo"),
                origin_port: "INCOK".to_string(),
                status: OrderStatus::ReadyToShip,
                ..OrderInput::default()
            }
            .with_computed_totals(),
        ),
        (
            ORD_RICE_REPEAT,
            OrderInput {
                order_number: "EXP-2026-005".to_string(),
                customer_id: Some(AL_NOOR),
                order_date: today,
                product_description: "1121 Basmati Rice, sella, 25 kg bags".to_string(),
                hsn_code: text("10063020"),
                quantity: Decimal::new(10_000, 0),
                unit_price: Decimal::new(108, 2),
                payment_terms: "LC at sight".to_string(),
                destination_port: text("Jebel Ali"),
                ..OrderInput::default()
            }
            .with_computed_totals(),
        ),
    ];

    let shipments = vec![
        (
            ShipmentId::new(Uuid::from_u128(0x4001)),
            ShipmentInput {
                shipment_number: "SHP-2026-001".to_string(),
                order_id: Some(ORD_RICE),
                customer_id: Some(AL_NOOR),
                shipment_date: Some(day(today, -12)),
                etd: Some(day(today, -12)),
                eta: Some(day(today, 6)),
                vessel_name: text("MSC Aurora"),
                voyage_number: text("AU614E"),
                bl_number: text("MEDUI2334871"),
                bl_date: Some(day(today, -12)),
                container_number: text("MSCU7654321"),
                shipping_line: text("MSC"),
                freight_amount: Decimal::new(1_150, 0),
                origin_port: text("INMUN"),
                destination_port: text("AEJEA"),
                cha_name: text("Kutch Cargo Services"),
                customs_clearance_date: Some(day(today, -14)),
                let_export_date: Some(day(today, -13)),
                status: ShipmentStatus::InTransit,
                ..ShipmentInput::default()
            },
        ),
        (
            ShipmentId::new(Uuid::from_u128(0x4002)),
            ShipmentInput {
                shipment_number: "SHP-2026-002".to_string(),
                order_id: Some(ORD_CUMIN),
                customer_id: Some(PACIFIC),
                shipment_date: Some(day(today, -87)),
                etd: Some(day(today, -87)),
                eta: Some(day(today, -52)),
                vessel_name: text("Maersk Kinloss"),
                voyage_number: text("418W"),
                bl_number: text("MAEU229104311"),
                bl_date: Some(day(today, -87)),
                container_number: text("MRKU4410982"),
                container_size: "40FT".to_string(),
                shipping_line: text("Maersk"),
                freight_amount: Decimal::new(3_400, 0),
                insurance_amount: Decimal::new(180, 0),
                origin_port: text("INNSA"),
                destination_port: text("USLAX"),
                status: ShipmentStatus::Delivered,
                ..ShipmentInput::default()
            },
        ),
        (
            ShipmentId::new(Uuid::from_u128(0x4003)),
            ShipmentInput {
                shipment_number: "SHP-2026-003".to_string(),
                order_id: Some(ORD_PEPPER),
                customer_id: Some(LANKA),
                etd: Some(day(today, 4)),
                eta: Some(day(today, 7)),
                shipping_line: text("ONE"),
                origin_port: text("INCOK"),
                destination_port: text("LKCMB"),
                status: ShipmentStatus::Booked,
                ..ShipmentInput::default()
            },
        ),
    ];

    let payments = vec![
        (
            PaymentId::new(Uuid::from_u128(0x5001)),
            PaymentInput {
                payment_reference: "PAY-2026-001".to_string(),
                order_id: Some(ORD_CUMIN),
                customer_id: Some(PACIFIC),
                invoice_number: text("INV/EXP/2026/003"),
                invoice_date: Some(day(today, -88)),
                invoice_amount: Decimal::new(25_200, 0),
                payment_due_date: day(today, -70),
                payment_received_date: Some(day(today, -72)),
                amount_received: Decimal::new(25_200, 0),
                exchange_rate_at_receipt: Some(Decimal::new(8310, 2)),
                inr_realized: Decimal::new(209_412_000, 2),
                bank_charges: Decimal::new(1_850, 0),
                firc_number: text("HDFC/FIRC/2026/0091"),
                firc_date: Some(day(today, -70)),
                firc_bank: text("HDFC Bank"),
                payment_mode: PaymentMode::Lc,
                bank_ref_number: text("HDFC0091LC"),
                status: PaymentStatus::Received,
                ..PaymentInput::default()
            },
        ),
        (
            PaymentId::new(Uuid::from_u128(0x5002)),
            PaymentInput {
                payment_reference: "PAY-2026-002".to_string(),
                order_id: Some(ORD_RICE),
                customer_id: Some(AL_NOOR),
                invoice_number: text("INV/EXP/2026/001"),
                invoice_date: Some(day(today, -13)),
                invoice_amount: Decimal::new(21_000, 0),
                payment_due_date: day(today, -8),
                payment_mode: PaymentMode::Lc,
                ..PaymentInput::default()
            },
        ),
        (
            PaymentId::new(Uuid::from_u128(0x5003)),
            PaymentInput {
                payment_reference: "PAY-2026-003".to_string(),
                order_id: Some(ORD_PEPPER),
                customer_id: Some(LANKA),
                invoice_number: text("INV/EXP/2026/004"),
                invoice_date: Some(day(today, -3)),
                invoice_amount: Decimal::new(18_600, 0),
                payment_due_date: day(today, -45),
                payment_received_date: Some(day(today, -46)),
                amount_received: Decimal::new(5_580, 0),
                exchange_rate_at_receipt: Some(Decimal::new(8390, 2)),
                inr_realized: Decimal::new(46_816_200, 2),
                bank_charges: Decimal::new(650, 0),
                payment_mode: PaymentMode::Advance,
                remarks: text("30% advance received, balance against documents"),
                status: PaymentStatus::Partial,
                ..PaymentInput::default()
            },
        ),
        (
            PaymentId::new(Uuid::from_u128(0x5004)),
            PaymentInput {
                payment_reference: "PAY-2026-004".to_string(),
                order_id: Some(ORD_TURMERIC),
                customer_id: Some(HAMBURG),
                invoice_number: text("INV/EXP/2026/002"),
                invoice_date: Some(day(today, -155)),
                invoice_amount: Decimal::new(12_000, 0),
                invoice_currency: "EUR".to_string(),
                payment_due_date: day(today, -95),
                received_currency: "EUR".to_string(),
                payment_mode: PaymentMode::Da,
                remarks: text("Buyer disputes moisture content"),
                status: PaymentStatus::Overdue,
                ..PaymentInput::default()
            },
        ),
    ];

    Fixtures {
        customers,
        inquiries,
        quotations,
        orders,
        shipments,
        payments,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_every_fixture_passes_validation() {
        let fx = fixtures(today());
        for (_, input) in fx.customers {
            input.validate().unwrap();
        }
        for (_, input) in fx.inquiries {
            input.validate().unwrap();
        }
        for (_, input) in fx.quotations {
            input.validate().unwrap();
        }
        for (_, input) in fx.orders {
            input.validate().unwrap();
        }
        for (_, input) in fx.shipments {
            input.validate().unwrap();
        }
        for (_, input) in fx.payments {
            input.validate().unwrap();
        }
    }

    #[test]
    fn test_references_point_at_fixture_records() {
        let fx = fixtures(today());
        let order_ids: Vec<OrderId> = fx.orders.iter().map(|(id, _)| *id).collect();
        let customer_ids: Vec<CustomerId> = fx.customers.iter().map(|(id, _)| *id).collect();

        for (_, payment) in &fx.payments {
            assert!(order_ids.contains(&payment.order_id.unwrap()));
        }
        for (_, shipment) in &fx.shipments {
            assert!(order_ids.contains(&shipment.order_id.unwrap()));
        }
        for (_, order) in &fx.orders {
            assert!(customer_ids.contains(&order.customer_id.unwrap()));
        }
    }

    #[test]
    fn test_order_totals_are_computed() {
        let fx = fixtures(today());
        let (_, rice) = fx.orders.first().unwrap();
        assert_eq!(rice.total_amount, Decimal::new(21_000, 0));
        assert_eq!(rice.inr_value, Some(Decimal::new(1_753_500, 0)));
    }
}
