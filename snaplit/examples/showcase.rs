//! snaplit showcase
//!
//! Renders a computed value the way you would paste it into a test file.
//!
//! Run with: cargo run -p snaplit --example showcase

use std::collections::BTreeMap;

use snaplit::{AliasTable, Snap, SnapExt};

#[derive(Snap)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    pub price_cents: i64,
}

#[derive(Snap)]
pub struct Invoice {
    pub number: String,
    pub paid: bool,
    pub items: Vec<LineItem>,
    pub discounts: BTreeMap<String, i64>,
    pub note: Option<String>,
}

fn build_invoice() -> Invoice {
    Invoice {
        number: "INV-0042".to_string(),
        paid: false,
        items: vec![
            LineItem {
                sku: "WIDGET".to_string(),
                quantity: 3,
                price_cents: 1299,
            },
            LineItem {
                sku: "GADGET".to_string(),
                quantity: 1,
                price_cents: 24999,
            },
        ],
        discounts: BTreeMap::from([("LOYALTY".to_string(), 500)]),
        note: Some("ship together".to_string()),
    }
}

fn main() {
    let invoice = build_invoice();

    // Qualified names, as emitted by default.
    println!("{}", invoice.snap());

    println!();

    // Stripped down to what is in scope at the paste site.
    let aliases = AliasTable::new().strip(module_path!());
    snaplit::print(&invoice, &aliases);
    println!();
}
