use gstdoc::InvoiceInput;
use serde_json::{Value, json};

pub const SUPPLIER_GSTIN: &str = "27AABCU9603R1ZM";
pub const KARNATAKA_GSTIN: &str = "29AAGCB7383J1Z9";

/// One line of 10 x 100.00 at 18%, HSN 7318.
pub fn bolts() -> Value {
    json!({
        "description": "Steel Bolts",
        "quantity": 10,
        "unit": "pcs",
        "unit_price": "100.00",
        "hsn": "7318",
        "gst_rate": 18
    })
}

pub fn invoice_json(customer_state: &str, lines: Vec<Value>) -> Value {
    let customer_gstin = if customer_state == "29" { KARNATAKA_GSTIN } else { SUPPLIER_GSTIN };
    json!({
        "invoice": {
            "number": "INV/24-25/001",
            "date": "2024-04-05",
            "due_date": "2024-05-05",
            "lines": lines
        },
        "supplier": {
            "name": "Acme Traders",
            "address": "12 MG Road, Pune",
            "state_code": "27",
            "gstin": SUPPLIER_GSTIN,
            "phone": "+91 20 5555 0100"
        },
        "customer": {
            "name": "Bharat Stores",
            "address": "4 Brigade Road, Bengaluru",
            "state_code": customer_state,
            "gstin": customer_gstin
        },
        "bank": {
            "bank_name": "State Bank of India",
            "account_name": "Acme Traders",
            "account_number": "0001234567",
            "ifsc": "SBIN0000123",
            "upi_id": "acme@sbi"
        }
    })
}

pub fn invoice(customer_state: &str, lines: Vec<Value>) -> InvoiceInput {
    serde_json::from_value(invoice_json(customer_state, lines))
        .expect("fixture invoice must deserialize")
}

/// A minimal custom template that borrows every section from the default.
pub fn branded_template(id: &str, is_default: bool) -> Value {
    json!({
        "template_id": id,
        "name": "Branded",
        "description": "House style on top of the tabular layout",
        "sort_order": 50,
        "is_default": is_default,
        "requires": { "gst": true, "hsn_required": true, "title": "Tax Invoice" },
        "validation": { "hsn_digits": 4 },
        "layout": {
            "paper": { "sizes": ["A4"] },
            "sections": [
                { "id": "header", "type": "inherit", "from_template": "GST_TABULAR_A4A5_V1.header",
                  "overrides": { "fields": ["name", "gstin"] } },
                { "id": "meta", "type": "inherit", "from_template": "GST_TABULAR_A4A5_V1.meta" },
                { "id": "items", "type": "inherit", "from_template": "GST_TABULAR_A4A5_V1.items" },
                { "id": "summary", "type": "inherit", "from_template": "GST_TABULAR_A4A5_V1.summary" },
                { "id": "sign", "type": "sign", "data": { "label": "Proprietor" } }
            ]
        }
    })
}
