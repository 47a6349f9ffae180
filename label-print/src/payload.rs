//! Print payload normalization
//!
//! Turns a movement line (whatever mix of linked lot record, raw lot name
//! and dates it carries) into the canonical body the backend expects.

use std::num::NonZeroU32;

use shared::{
    DateValue, IsoDate, MovementLine, PrintPayload, PrinterConfig, Product, ProductData, TrackingMode,
};

/// Builds print payloads. Stateless; the same input always gives the same payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayloadBuilder;

impl PayloadBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, line: &MovementLine, quantity: NonZeroU32) -> PrintPayload {
        let tracking = line.product.tracking_mode();

        PrintPayload {
            product_data: ProductData {
                name: product_name(&line.product),
                barcode: non_empty(&line.product.barcode).unwrap_or_default(),
                internal_reference: non_empty(&line.product.default_code).unwrap_or_default(),
                price: product_price(&line.product),
                lot_serial_number: lot_serial_number(line, tracking),
                expiration_date: expiration_date(line),
            },
            printer_config: PrinterConfig::default(),
            quantity: match tracking {
                TrackingMode::Serial => NonZeroU32::MIN,
                TrackingMode::None | TrackingMode::Lot => quantity,
            },
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

fn product_name(product: &Product) -> String {
    non_empty(&product.display_name)
        .or_else(|| non_empty(&product.name))
        .unwrap_or_default()
}

/// First non-zero of the current and the legacy price field
fn product_price(product: &Product) -> f64 {
    [product.lst_price, product.list_price]
        .into_iter()
        .flatten()
        .find(|p| *p != 0.0 && p.is_finite())
        .unwrap_or(0.0)
}

/// Linked record's name, else the raw lot name; never set for untracked products
fn lot_serial_number(line: &MovementLine, tracking: TrackingMode) -> Option<String> {
    if !tracking.is_tracked() {
        return None;
    }
    line.lot
        .as_ref()
        .and_then(|lot| non_empty(&lot.name))
        .or_else(|| non_empty(&line.lot_name))
}

fn present(date: &Option<DateValue>) -> Option<&DateValue> {
    date.as_ref().filter(|d| !d.is_blank())
}

/// Line's own date, else the lot's expiration date, else the lot's use-by date
fn expiration_date(line: &MovementLine) -> Option<String> {
    let lot = line.lot.as_ref();
    present(&line.expiration_date)
        .or_else(|| lot.and_then(|lot| present(&lot.expiration_date)))
        .or_else(|| lot.and_then(|lot| present(&lot.use_date)))
        .map(|date| date.to_iso_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::LotSerial;

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn product(tracking: &str) -> Product {
        Product {
            id: Some(1),
            display_name: Some("[YOG-01] Greek Yogurt".into()),
            name: Some("Greek Yogurt".into()),
            barcode: Some("7790001000011".into()),
            default_code: Some("YOG-01".into()),
            lst_price: Some(2.75),
            list_price: Some(2.5),
            tracking: Some(tracking.into()),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> DateValue {
        DateValue::from(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_lot_line_payload() {
        let line = MovementLine::new("1", product("lot")).with_lot(LotSerial {
            name: Some("LOT123".into()),
            ..Default::default()
        });
        let payload = PayloadBuilder::new().build(&line, qty(5));

        assert_eq!(payload.product_data.name, "[YOG-01] Greek Yogurt");
        assert_eq!(payload.product_data.barcode, "7790001000011");
        assert_eq!(payload.product_data.internal_reference, "YOG-01");
        assert_eq!(payload.product_data.price, 2.75);
        assert_eq!(payload.product_data.lot_serial_number.as_deref(), Some("LOT123"));
        assert_eq!(payload.product_data.expiration_date, None);
        assert_eq!(payload.printer_config, PrinterConfig::default());
        assert_eq!(payload.quantity, qty(5));
    }

    #[test]
    fn test_untracked_masks_stray_lot_name() {
        let line = MovementLine::new("1", product("none"))
            .with_lot_name("STRAY")
            .with_lot(LotSerial {
                name: Some("ALSO-STRAY".into()),
                ..Default::default()
            });
        let payload = PayloadBuilder::new().build(&line, qty(2));
        assert_eq!(payload.product_data.lot_serial_number, None);
        assert_eq!(payload.quantity, qty(2));
    }

    #[test]
    fn test_unknown_tracking_treated_as_untracked() {
        let line = MovementLine::new("1", product("batch")).with_lot_name("L1");
        let payload = PayloadBuilder::new().build(&line, qty(1));
        assert_eq!(payload.product_data.lot_serial_number, None);
    }

    #[test]
    fn test_raw_lot_name_fallback() {
        let line = MovementLine::new("1", product("LOT")).with_lot_name("TYPED-01");
        let payload = PayloadBuilder::new().build(&line, qty(1));
        assert_eq!(payload.product_data.lot_serial_number.as_deref(), Some("TYPED-01"));
    }

    #[test]
    fn test_serial_forces_single_label() {
        let line = MovementLine::new("1", product("serial")).with_lot_name("SN-0001");
        let payload = PayloadBuilder::new().build(&line, qty(10));
        assert_eq!(payload.quantity, qty(1));
        assert_eq!(payload.product_data.lot_serial_number.as_deref(), Some("SN-0001"));
    }

    #[test]
    fn test_expiration_priority() {
        let lot = LotSerial {
            name: Some("L".into()),
            expiration_date: Some(date(2025, 2, 1)),
            use_date: Some(date(2025, 1, 15)),
            ..Default::default()
        };
        let builder = PayloadBuilder::new();

        let own = MovementLine::new("1", product("lot"))
            .with_lot(lot.clone())
            .with_expiration_date(date(2025, 3, 1));
        assert_eq!(
            builder.build(&own, qty(1)).product_data.expiration_date.as_deref(),
            Some("2025-03-01")
        );

        let from_lot = MovementLine::new("1", product("lot")).with_lot(lot.clone());
        assert_eq!(
            builder.build(&from_lot, qty(1)).product_data.expiration_date.as_deref(),
            Some("2025-02-01")
        );

        let use_by = MovementLine::new("1", product("lot")).with_lot(LotSerial {
            expiration_date: None,
            ..lot
        });
        assert_eq!(
            builder.build(&use_by, qty(1)).product_data.expiration_date.as_deref(),
            Some("2025-01-15")
        );

        let none = MovementLine::new("1", product("lot")).with_lot(LotSerial::default());
        assert_eq!(builder.build(&none, qty(1)).product_data.expiration_date, None);
    }

    #[test]
    fn test_blank_line_date_falls_back_to_lot() {
        let json = r#"{
            "id": 4,
            "product_id": {"name": "Cheese", "tracking": "lot"},
            "expiration_date": "",
            "lot_id": {"name": "L", "expiration_date": "2025-02-01"}
        }"#;
        let line: MovementLine = serde_json::from_str(json).unwrap();
        let payload = PayloadBuilder::new().build(&line, qty(1));
        assert_eq!(payload.product_data.expiration_date.as_deref(), Some("2025-02-01"));

        // Blank dates set directly by the host are skipped too
        let built = MovementLine::new("5", product("lot"))
            .with_expiration_date("")
            .with_lot(LotSerial {
                expiration_date: Some(DateValue::from("  ")),
                use_date: Some(date(2025, 1, 15)),
                ..Default::default()
            });
        let payload = PayloadBuilder::new().build(&built, qty(1));
        assert_eq!(payload.product_data.expiration_date.as_deref(), Some("2025-01-15"));

        let nothing = MovementLine::new("6", product("lot")).with_expiration_date(" ");
        assert_eq!(PayloadBuilder::new().build(&nothing, qty(1)).product_data.expiration_date, None);
    }

    #[test]
    fn test_expiration_text_passes_through() {
        let line = MovementLine::new("1", product("none")).with_expiration_date("2025-12-31 00:00:00");
        let payload = PayloadBuilder::new().build(&line, qty(1));
        assert_eq!(
            payload.product_data.expiration_date.as_deref(),
            Some("2025-12-31 00:00:00")
        );
    }

    #[test]
    fn test_product_field_fallbacks() {
        let bare = MovementLine::new("1", Product::default());
        let data = PayloadBuilder::new().build(&bare, qty(1)).product_data;
        assert_eq!(data.name, "");
        assert_eq!(data.barcode, "");
        assert_eq!(data.internal_reference, "");
        assert_eq!(data.price, 0.0);

        let short_name = MovementLine::new(
            "2",
            Product {
                display_name: Some(String::new()),
                name: Some("Cheese".into()),
                lst_price: Some(0.0),
                list_price: Some(9.9),
                ..Default::default()
            },
        );
        let data = PayloadBuilder::new().build(&short_name, qty(1)).product_data;
        assert_eq!(data.name, "Cheese");
        assert_eq!(data.price, 9.9);
    }

    #[test]
    fn test_build_is_idempotent() {
        let line = MovementLine::new("1", product("lot"))
            .with_lot_name("LOT9")
            .with_expiration_date(date(2026, 1, 1));
        let builder = PayloadBuilder::new();
        assert_eq!(builder.build(&line, qty(3)), builder.build(&line, qty(3)));
    }
}
