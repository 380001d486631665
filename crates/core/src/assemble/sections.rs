use super::Context;
use super::config::SectionConfig;
use crate::error::AssemblyError;
use crate::format::{date, money, quantity};
use crate::model::Party;
use crate::words::amount_in_words;
use gstdoc_idf::{Align, DocNode, TableColumn, TableNode, TableRow};
use gstdoc_tax::{LineItem, LineTax, SupplyType, TaxTotals};
use gstdoc_types::{SectionKind, StateCode};

const PARTY_FIELDS: &[&str] = &["name", "address", "gstin", "state", "phone", "email"];
const META_FIELDS: &[&str] = &["invoice_number", "invoice_date", "due_date", "place_of_supply"];
const CUSTOMER_FIELDS: &[&str] = &["name", "address", "gstin", "state"];
const PAYMENT_FIELDS: &[&str] = &["bank_name", "account_name", "account_number", "ifsc", "upi_id"];
const DEFAULT_COLUMNS: &[&str] = &[
    "sno", "description", "hsn", "quantity", "unit_price", "taxable_value", "rate", "cgst",
    "sgst", "igst", "total",
];

pub(crate) fn render(ctx: &Context<'_>, cfg: &SectionConfig<'_>) -> Result<Vec<DocNode>, AssemblyError> {
    match cfg.kind() {
        SectionKind::Header => header(ctx, cfg),
        SectionKind::Meta => meta(ctx, cfg),
        SectionKind::ItemsTable => items(ctx, cfg),
        SectionKind::Summary => summary(ctx, cfg),
        SectionKind::Payment => payment(ctx, cfg),
        SectionKind::Sign => sign(ctx, cfg),
    }
}

fn state_text(state: StateCode) -> String {
    format!("{} ({})", state.name(), state)
}

/// Default label and value of a party field; `None` for an unknown key.
fn party_field(party: &Party, key: &str) -> Option<(&'static str, Option<String>)> {
    let field = match key {
        "name" => ("Name", Some(party.name.clone())),
        "address" => ("Address", Some(party.address.clone()).filter(|a| !a.is_empty())),
        "gstin" => ("GSTIN", party.gstin().map(str::to_string)),
        "state" => ("State", Some(state_text(party.state))),
        "phone" => ("Phone", party.phone.clone()),
        "email" => ("Email", party.email.clone()),
        _ => return None,
    };
    Some(field)
}

fn party_nodes(
    cfg: &SectionConfig<'_>,
    party: &Party,
    prefix: &str,
    keys: &[&str],
) -> Result<Vec<DocNode>, AssemblyError> {
    let mut nodes = Vec::with_capacity(keys.len());
    for key in keys {
        let (label, value) = party_field(party, key)
            .ok_or_else(|| cfg.invalid(format!("unknown {} field '{}'", prefix, key)))?;
        if let Some(value) = value {
            nodes.push(DocNode::field(format!("{}.{}", prefix, key), cfg.label(key, label)?, value));
        }
    }
    Ok(nodes)
}

fn header(ctx: &Context<'_>, cfg: &SectionConfig<'_>) -> Result<Vec<DocNode>, AssemblyError> {
    let mut nodes = vec![DocNode::Heading { level: 1, text: ctx.template.requires.title.clone() }];
    let keys = cfg.list_or("fields", PARTY_FIELDS)?;
    nodes.extend(party_nodes(cfg, &ctx.parties.supplier, "supplier", &keys)?);
    Ok(nodes)
}

fn meta(ctx: &Context<'_>, cfg: &SectionConfig<'_>) -> Result<Vec<DocNode>, AssemblyError> {
    let invoice = ctx.invoice;
    let mut nodes = Vec::new();
    for key in cfg.list_or("fields", META_FIELDS)? {
        let (label, value) = match key {
            "invoice_number" => ("Invoice No.", Some(invoice.number.clone())),
            "invoice_date" => ("Invoice Date", Some(date(invoice.date))),
            "due_date" => ("Due Date", invoice.due_date.map(date)),
            "place_of_supply" => ("Place of Supply", Some(state_text(ctx.tax.place_of_supply))),
            "reverse_charge" => {
                let yes_no = if invoice.reverse_charge { "Yes" } else { "No" };
                ("Reverse Charge", Some(yes_no.to_string()))
            }
            "supply_type" => {
                let text = match ctx.tax.supply_type {
                    SupplyType::IntraState => "Intra-State",
                    SupplyType::InterState => "Inter-State",
                };
                ("Supply Type", Some(text.to_string()))
            }
            other => return Err(cfg.invalid(format!("unknown meta field '{}'", other))),
        };
        if let Some(value) = value {
            nodes.push(DocNode::field(key, cfg.label(key, label)?, value));
        }
    }

    let customer_keys = cfg.list_or("customer_fields", CUSTOMER_FIELDS)?;
    if !customer_keys.is_empty() {
        let label = cfg.text("customer_label")?.unwrap_or("Bill To");
        nodes.push(DocNode::Group {
            label: Some(label.to_string()),
            children: party_nodes(cfg, &ctx.parties.customer, "customer", &customer_keys)?,
        });
    }
    Ok(nodes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Sno,
    Description,
    Hsn,
    Quantity,
    Unit,
    UnitPrice,
    Discount,
    TaxableValue,
    Rate,
    Cgst,
    Sgst,
    Igst,
    Tax,
    Total,
}

impl Column {
    fn parse(key: &str) -> Option<Self> {
        Some(match key {
            "sno" => Column::Sno,
            "description" => Column::Description,
            "hsn" => Column::Hsn,
            "quantity" => Column::Quantity,
            "unit" => Column::Unit,
            "unit_price" => Column::UnitPrice,
            "discount" => Column::Discount,
            "taxable_value" => Column::TaxableValue,
            "rate" => Column::Rate,
            "cgst" => Column::Cgst,
            "sgst" => Column::Sgst,
            "igst" => Column::Igst,
            "tax" => Column::Tax,
            "total" => Column::Total,
            _ => return None,
        })
    }

    fn default_label(self) -> &'static str {
        match self {
            Column::Sno => "S.No.",
            Column::Description => "Description",
            Column::Hsn => "HSN",
            Column::Quantity => "Qty",
            Column::Unit => "Unit",
            Column::UnitPrice => "Rate per Unit",
            Column::Discount => "Discount",
            Column::TaxableValue => "Taxable Value",
            Column::Rate => "GST %",
            Column::Cgst => "CGST",
            Column::Sgst => "SGST",
            Column::Igst => "IGST",
            Column::Tax => "Tax",
            Column::Total => "Total",
        }
    }

    fn align(self) -> Align {
        match self {
            Column::Sno | Column::Hsn | Column::Unit | Column::Rate => Align::Center,
            Column::Description => Align::Left,
            _ => Align::Right,
        }
    }

    /// CGST/SGST columns only apply to intra-state supplies, IGST only to inter-state.
    fn applies(self, supply: SupplyType) -> bool {
        match self {
            Column::Cgst | Column::Sgst => supply == SupplyType::IntraState,
            Column::Igst => supply == SupplyType::InterState,
            _ => true,
        }
    }

    fn cell(self, item: &LineItem, tax: &LineTax) -> String {
        match self {
            Column::Sno => tax.line.to_string(),
            Column::Description => item.description.clone(),
            Column::Hsn => item.hsn.clone().unwrap_or_default(),
            Column::Quantity => quantity(item.quantity),
            Column::Unit => item.unit.clone().unwrap_or_default(),
            Column::UnitPrice => money(item.unit_price),
            Column::Discount => money(item.discount),
            Column::TaxableValue => money(tax.taxable_value),
            Column::Rate => tax.rate.to_string(),
            Column::Cgst => money(tax.cgst),
            Column::Sgst => money(tax.sgst),
            Column::Igst => money(tax.igst),
            Column::Tax => money(tax.tax()),
            Column::Total => money(tax.total()),
        }
    }

    fn footer(self, totals: &TaxTotals) -> Option<String> {
        match self {
            Column::TaxableValue => Some(money(totals.taxable_value)),
            Column::Cgst => Some(money(totals.cgst)),
            Column::Sgst => Some(money(totals.sgst)),
            Column::Igst => Some(money(totals.igst)),
            Column::Tax => Some(money(totals.tax())),
            Column::Total => Some(money(totals.total())),
            _ => None,
        }
    }
}

fn items(ctx: &Context<'_>, cfg: &SectionConfig<'_>) -> Result<Vec<DocNode>, AssemblyError> {
    let mut columns = Vec::new();
    for key in cfg.list_or("columns", DEFAULT_COLUMNS)? {
        let column = Column::parse(key)
            .ok_or_else(|| cfg.invalid(format!("unknown column '{}'", key)))?;
        if column.applies(ctx.tax.supply_type) {
            columns.push((key, column));
        }
    }

    let rows = ctx
        .invoice
        .lines
        .iter()
        .zip(&ctx.tax.lines)
        .map(|(item, tax)| TableRow::new(columns.iter().map(|(_, c)| c.cell(item, tax)).collect()))
        .collect();

    let mut footer: Vec<String> = columns
        .iter()
        .map(|(_, c)| c.footer(&ctx.tax.totals).unwrap_or_default())
        .collect();
    if let Some(first) = footer.first_mut().filter(|cell| cell.is_empty()) {
        *first = "Total".to_string();
    }

    let columns = columns
        .iter()
        .map(|(key, column)| {
            Ok(TableColumn {
                key: key.to_string(),
                label: cfg.label(key, column.default_label())?,
                align: column.align(),
            })
        })
        .collect::<Result<Vec<_>, AssemblyError>>()?;

    Ok(vec![DocNode::Table(TableNode { columns, rows, footer: vec![TableRow::new(footer)] })])
}

fn summary(ctx: &Context<'_>, cfg: &SectionConfig<'_>) -> Result<Vec<DocNode>, AssemblyError> {
    let tax = ctx.tax;
    let show_tax = cfg.flag("show_tax", ctx.template.requires.gst)?;
    let intra = tax.supply_type == SupplyType::IntraState;
    let mut nodes = vec![DocNode::field(
        "taxable_value",
        cfg.label("taxable_value", "Taxable Value")?,
        money(tax.totals.taxable_value),
    )];

    if show_tax {
        if intra {
            nodes.push(DocNode::field("cgst", cfg.label("cgst", "CGST")?, money(tax.totals.cgst)));
            nodes.push(DocNode::field("sgst", cfg.label("sgst", "SGST")?, money(tax.totals.sgst)));
        } else {
            nodes.push(DocNode::field("igst", cfg.label("igst", "IGST")?, money(tax.totals.igst)));
        }
        nodes.push(DocNode::field("total_tax", cfg.label("total_tax", "Total Tax")?, money(tax.totals.tax())));
    }
    if !tax.round_off.is_zero() || cfg.flag("show_round_off", false)? {
        nodes.push(DocNode::field("round_off", cfg.label("round_off", "Round Off")?, money(tax.round_off)));
    }
    nodes.push(DocNode::field(
        "invoice_total",
        cfg.label("invoice_total", "Invoice Total")?,
        money(tax.invoice_total),
    ));

    if show_tax && cfg.flag("rate_wise", true)? && !tax.rate_summary.is_empty() {
        let keys: &[&str] = if intra {
            &["rate", "taxable_value", "cgst", "sgst", "tax"]
        } else {
            &["rate", "taxable_value", "igst", "tax"]
        };
        let columns = keys
            .iter()
            .map(|key| TableColumn {
                key: key.to_string(),
                label: match *key {
                    "rate" => "GST %",
                    "taxable_value" => "Taxable Value",
                    "cgst" => "CGST",
                    "sgst" => "SGST",
                    "igst" => "IGST",
                    _ => "Total Tax",
                }
                .to_string(),
                align: if *key == "rate" { Align::Center } else { Align::Right },
            })
            .collect();
        let rows = tax
            .rate_summary
            .iter()
            .map(|bucket| {
                let t = &bucket.totals;
                let mut cells = vec![bucket.rate.to_string(), money(t.taxable_value)];
                if intra {
                    cells.extend([money(t.cgst), money(t.sgst)]);
                } else {
                    cells.push(money(t.igst));
                }
                cells.push(money(t.tax()));
                TableRow::new(cells)
            })
            .collect();
        nodes.push(DocNode::Heading { level: 3, text: "Rate-wise Tax Summary".to_string() });
        nodes.push(DocNode::Table(TableNode { columns, rows, footer: Vec::new() }));
    }

    if cfg.flag("amount_in_words", true)? {
        nodes.push(DocNode::field(
            "amount_in_words",
            cfg.label("amount_in_words", "Amount in Words")?,
            amount_in_words(tax.invoice_total),
        ));
    }
    if let Some(notes) = ctx.invoice.notes.as_deref().filter(|n| !n.is_empty()) {
        nodes.push(DocNode::field("notes", cfg.label("notes", "Notes")?, notes));
    }
    Ok(nodes)
}

fn payment(ctx: &Context<'_>, cfg: &SectionConfig<'_>) -> Result<Vec<DocNode>, AssemblyError> {
    let keys = cfg.list_or("fields", PAYMENT_FIELDS)?;
    let Some(bank) = &ctx.parties.bank else {
        return Ok(Vec::new());
    };
    let mut nodes = Vec::with_capacity(keys.len());
    for key in keys {
        let (label, value) = match key {
            "bank_name" => ("Bank", Some(bank.bank_name.as_str())),
            "account_name" => ("Account Name", Some(bank.account_name.as_str())),
            "account_number" => ("Account No.", Some(bank.account_number.as_str())),
            "ifsc" => ("IFSC", Some(bank.ifsc.as_str())),
            "upi_id" => ("UPI", bank.upi_id.as_deref()),
            other => return Err(cfg.invalid(format!("unknown payment field '{}'", other))),
        };
        if let Some(value) = value {
            nodes.push(DocNode::field(format!("bank.{}", key), cfg.label(key, label)?, value));
        }
    }
    Ok(nodes)
}

fn sign(ctx: &Context<'_>, cfg: &SectionConfig<'_>) -> Result<Vec<DocNode>, AssemblyError> {
    let label = cfg.text("label")?.unwrap_or("Authorised Signatory");
    Ok(vec![
        DocNode::text(format!("For {}", ctx.parties.supplier.name)),
        DocNode::text(label),
    ])
}
