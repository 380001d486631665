use super::*;
use crate::model::{BankDetails, Party};
use chrono::NaiveDate;
use gstdoc_registry::TemplateRegistry;
use gstdoc_resolver::{ResolvedSection, Resolver};
use gstdoc_tax::{LineItem, compute_tax};
use gstdoc_template_core::SectionRef;
use gstdoc_types::{GstRate, SectionKind, StateCode, TemplateId};
use rust_decimal_macros::dec;
use std::sync::Arc;

fn state(code: u8) -> StateCode {
    StateCode::new(code).unwrap()
}

fn parties(customer_state: u8) -> PartyData {
    PartyData {
        supplier: Party::new("Acme Traders", state(27))
            .with_gstin("27AABCU9603R1ZM")
            .with_address("12 MG Road, Pune"),
        customer: Party::new("Bharat Stores", state(customer_state)).with_address("4 Brigade Road"),
        bank: Some(BankDetails {
            bank_name: "State Bank of India".into(),
            account_name: "Acme Traders".into(),
            account_number: "0001234567".into(),
            ifsc: "SBIN0000123".into(),
            upi_id: None,
        }),
    }
}

fn invoice(lines: Vec<LineItem>) -> InvoiceData {
    InvoiceData {
        number: "INV/24-25/001".into(),
        date: NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
        due_date: None,
        place_of_supply: None,
        reverse_charge: false,
        notes: None,
        lines,
    }
}

fn bolts() -> LineItem {
    LineItem::new("Steel Bolts", dec!(10), dec!(100), GstRate::Eighteen).with_hsn("7318")
}

struct Fixture {
    registry: Arc<TemplateRegistry>,
    resolver: Resolver,
}

impl Fixture {
    fn new() -> Self {
        let registry = Arc::new(TemplateRegistry::with_builtin_catalog().unwrap());
        let resolver = Resolver::new(Arc::clone(&registry));
        Self { registry, resolver }
    }

    fn render(
        &self,
        template: &str,
        invoice: &InvoiceData,
        parties: &PartyData,
        paper: PaperSize,
    ) -> Result<ResolvedDocument, AssemblyError> {
        let def = self.registry.get_template(&TemplateId::new(template)).unwrap();
        let layout = self.resolver.resolve(&def.id).unwrap();
        let tax = compute_tax(
            parties.supplier.state,
            invoice.place_of_supply(parties),
            &invoice.lines,
            &def.tax_logic,
        )
        .unwrap();
        assemble(&def, &layout, &tax, invoice, parties, paper)
    }
}

#[test]
fn test_intra_state_tabular_document() {
    let fx = Fixture::new();
    let doc = fx
        .render("GST_TABULAR_A4A5_V1", &invoice(vec![bolts()]), &parties(27), PaperSize::A4)
        .unwrap();

    assert_eq!(doc.title, "Tax Invoice");
    let kinds: Vec<_> = doc.sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        [
            SectionKind::Header,
            SectionKind::Meta,
            SectionKind::ItemsTable,
            SectionKind::Summary,
            SectionKind::Payment,
            SectionKind::Sign
        ]
    );

    let header = doc.section("header").unwrap();
    assert_eq!(header.field("supplier.gstin"), Some("27AABCU9603R1ZM"));
    assert_eq!(header.field("supplier.state"), Some("Maharashtra (27)"));
    assert_eq!(header.field("supplier.phone"), None);

    let meta = doc.section("meta").unwrap();
    assert_eq!(meta.field("invoice_date"), Some("05-04-2024"));
    assert_eq!(meta.field("place_of_supply"), Some("Maharashtra (27)"));
    assert_eq!(meta.field("reverse_charge"), Some("No"));
    assert_eq!(meta.field("customer.name"), Some("Bharat Stores"));
    assert!(meta.group("Bill To").is_some());

    let table = doc.section("items").unwrap().table().unwrap();
    assert!(table.column_index("igst").is_none());
    assert_eq!(table.cell(0, "taxable_value"), Some("1,000.00"));
    assert_eq!(table.cell(0, "cgst"), Some("90.00"));
    assert_eq!(table.cell(0, "sgst"), Some("90.00"));
    assert_eq!(table.cell(0, "total"), Some("1,180.00"));
    assert_eq!(table.footer[0].cells[0], "Total");

    let summary = doc.section("summary").unwrap();
    assert_eq!(summary.field("cgst"), Some("90.00"));
    assert_eq!(summary.field("igst"), None);
    assert_eq!(summary.field("round_off"), None);
    assert_eq!(summary.field("invoice_total"), Some("1,180.00"));
    assert_eq!(
        summary.field("amount_in_words"),
        Some("Rupees One Thousand One Hundred Eighty Only")
    );
    assert!(summary.table().is_some());

    let payment = doc.section("payment").unwrap();
    assert_eq!(payment.field("bank.ifsc"), Some("SBIN0000123"));
    assert_eq!(payment.field("bank.upi_id"), None);
}

#[test]
fn test_inter_state_drops_split_columns() {
    let fx = Fixture::new();
    let doc = fx
        .render("GST_TABULAR_A4A5_V1", &invoice(vec![bolts()]), &parties(29), PaperSize::A5)
        .unwrap();
    assert_eq!(doc.paper, PaperSize::A5);

    let table = doc.section("items").unwrap().table().unwrap();
    assert!(table.column_index("cgst").is_none());
    assert!(table.column_index("sgst").is_none());
    assert_eq!(table.cell(0, "igst"), Some("180.00"));

    let summary = doc.section("summary").unwrap();
    assert_eq!(summary.field("igst"), Some("180.00"));
    assert_eq!(summary.field("cgst"), None);
    assert_eq!(doc.section("meta").unwrap().field("place_of_supply"), Some("Karnataka (29)"));
}

#[test]
fn test_explicit_place_of_supply_wins() {
    let fx = Fixture::new();
    let mut inv = invoice(vec![bolts()]);
    inv.place_of_supply = Some(state(27));
    let doc = fx.render("GST_TABULAR_A4A5_V1", &inv, &parties(29), PaperSize::A4).unwrap();
    let summary = doc.section("summary").unwrap();
    assert_eq!(summary.field("cgst"), Some("90.00"));
}

#[test]
fn test_missing_hsn_fails_before_assembly() {
    let fx = Fixture::new();
    let no_hsn = LineItem::new("Loose Nuts", dec!(5), dec!(20), GstRate::Twelve);
    let err = fx
        .render("GST_TABULAR_A4A5_V1", &invoice(vec![bolts(), no_hsn]), &parties(27), PaperSize::A4)
        .unwrap_err();
    assert_eq!(err, AssemblyError::MissingRequiredField { field: "lines[2].hsn".into() });
}

#[test]
fn test_missing_supplier_gstin() {
    let fx = Fixture::new();
    let mut p = parties(27);
    p.supplier.gstin = Some("  ".into());
    let err = fx
        .render("GST_TABULAR_A4A5_V1", &invoice(vec![bolts()]), &p, PaperSize::A4)
        .unwrap_err();
    assert_eq!(err, AssemblyError::MissingRequiredField { field: "supplier.gstin".into() });

    // A bill of supply needs neither GSTIN nor HSN.
    let plain = LineItem::new("Rice", dec!(2), dec!(50), GstRate::Zero);
    assert!(fx.render("BILL_OF_SUPPLY_V1", &invoice(vec![plain]), &p, PaperSize::A4).is_ok());
}

#[test]
fn test_unsupported_paper() {
    let fx = Fixture::new();
    let err = fx
        .render("GST_DETAILED_A4_V1", &invoice(vec![bolts()]), &parties(27), PaperSize::A5)
        .unwrap_err();
    assert!(matches!(err, AssemblyError::UnsupportedPaperSize { paper: PaperSize::A5, .. }));
}

#[test]
fn test_assembly_is_idempotent() {
    let fx = Fixture::new();
    let inv = invoice(vec![
        bolts(),
        LineItem::new("Washers", dec!(3), dec!(7.25), GstRate::Five).with_hsn("7318"),
    ]);
    let p = parties(29);
    let first = fx.render("GST_TABULAR_A4A5_V1", &inv, &p, PaperSize::A4).unwrap();
    let second = fx.render("GST_TABULAR_A4A5_V1", &inv, &p, PaperSize::A4).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_compact_overrides_apply() {
    let fx = Fixture::new();
    let doc = fx
        .render("GST_COMPACT_A5_V1", &invoice(vec![bolts()]), &parties(27), PaperSize::A5)
        .unwrap();
    assert_eq!(doc.margins_mm, 6);
    assert!(doc.section("payment").is_none());

    let header = doc.section("header").unwrap();
    assert_eq!(header.origin, "GST_TABULAR_A4A5_V1.header");
    assert_eq!(header.field("supplier.address"), None);
    assert!(header.field("supplier.gstin").is_some());

    let table = doc.section("items").unwrap().table().unwrap();
    assert!(table.column_index("sno").is_none());
    assert!(doc.section("summary").unwrap().table().is_none());
}

#[test]
fn test_export_relabels_customer_block() {
    let fx = Fixture::new();
    let doc = fx
        .render("GST_EXPORT_A4_V1", &invoice(vec![bolts().with_hsn("73181500")]), &parties(29), PaperSize::A4)
        .unwrap();
    assert_eq!(doc.title, "Tax Invoice (Export)");
    let meta = doc.section("meta").unwrap();
    assert!(meta.group("Consignee").is_some());
    assert!(meta.group("Bill To").is_none());
}

#[test]
fn test_services_template_relabels_columns() {
    let fx = Fixture::new();
    let consulting =
        LineItem::new("Consulting", dec!(1), dec!(5000), GstRate::Eighteen).with_hsn("998311");
    let doc = fx
        .render("GST_SERVICES_A4_V1", &invoice(vec![consulting]), &parties(27), PaperSize::A4)
        .unwrap();
    let table = doc.section("items").unwrap().table().unwrap();
    let hsn = &table.columns[table.column_index("hsn").unwrap()];
    assert_eq!(hsn.label, "SAC");
    assert_eq!(table.cell(0, "hsn"), Some("998311"));
}

#[test]
fn test_bill_of_supply_has_no_tax_lines() {
    let fx = Fixture::new();
    let rice = LineItem::new("Rice", dec!(2), dec!(50), GstRate::Zero);
    let doc = fx
        .render("BILL_OF_SUPPLY_V1", &invoice(vec![rice]), &parties(27), PaperSize::A5)
        .unwrap();
    assert_eq!(doc.title, "Bill of Supply");
    let table = doc.section("items").unwrap().table().unwrap();
    assert!(table.column_index("cgst").is_none());
    assert!(table.column_index("rate").is_none());
    let summary = doc.section("summary").unwrap();
    assert_eq!(summary.field("total_tax"), None);
    assert_eq!(summary.field("invoice_total"), Some("100.00"));
}

#[test]
fn test_round_off_line_in_detailed_template() {
    let fx = Fixture::new();
    let odd = LineItem::new("Gasket", dec!(1), dec!(99.50), GstRate::Eighteen).with_hsn("84849000");
    let doc = fx
        .render("GST_DETAILED_A4_V1", &invoice(vec![odd]), &parties(27), PaperSize::A4)
        .unwrap();
    let summary = doc.section("summary").unwrap();
    assert_eq!(summary.field("round_off"), Some("-0.41"));
    assert_eq!(summary.field("invoice_total"), Some("117.00"));
    assert_eq!(summary.field("amount_in_words"), Some("Rupees One Hundred Seventeen Only"));
}

#[test]
fn test_layout_mismatch_and_bad_section_data() {
    let fx = Fixture::new();
    let def = fx.registry.get_template(&TemplateId::new("GST_TABULAR_A4A5_V1")).unwrap();
    let other = fx.resolver.resolve(&TemplateId::new("GST_DETAILED_A4_V1")).unwrap();
    let inv = invoice(vec![bolts()]);
    let p = parties(27);
    let tax = compute_tax(state(27), state(27), &inv.lines, &def.tax_logic).unwrap();

    let err = assemble(&def, &other, &tax, &inv, &p, PaperSize::A4).unwrap_err();
    assert!(matches!(err, AssemblyError::LayoutMismatch { .. }));

    let mut layout = (*fx.resolver.resolve(&def.id).unwrap()).clone();
    let mut data = gstdoc_template_core::SectionData::new();
    data.insert("columns".into(), serde_json::json!(["description", "weight"]));
    layout.sections.push(ResolvedSection {
        id: "extra".into(),
        kind: SectionKind::ItemsTable,
        data,
        origin: SectionRef::new("GST_TABULAR_A4A5_V1", "extra"),
    });
    let err = assemble(&def, &layout, &tax, &inv, &p, PaperSize::A4).unwrap_err();
    assert_eq!(
        err,
        AssemblyError::InvalidSectionData {
            section: "extra".into(),
            message: "unknown column 'weight'".into()
        }
    );
}
