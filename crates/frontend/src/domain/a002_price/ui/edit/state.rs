use contracts::domain::a001_subscriber::aggregate::ClientType;
use contracts::domain::a002_price::aggregate::{OperationKind, PriceRow};

/// One input of the price form, named `legal_{id}` or `individual_{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceField {
    pub name: String,
    pub value: String,
    /// Default tier price, shown while the field is empty
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceFormRow {
    pub id: i64,
    pub label: String,
    /// In `ClientType::all()` order
    pub fields: Vec<PriceField>,
}

impl PriceFormRow {
    pub fn from_row(row: &PriceRow) -> Self {
        let kind = row.kind();
        let fields = ClientType::all()
            .into_iter()
            .map(|ct| PriceField {
                name: row.field_name(ct),
                value: row.price(ct).to_string(),
                placeholder: kind
                    .map(|k| k.default_price(ct).to_string())
                    .unwrap_or_default(),
            })
            .collect();
        Self {
            id: row.id,
            label: kind
                .map(|k| k.label().to_string())
                .unwrap_or_else(|| row.operation_type.clone()),
            fields,
        }
    }
}

/// Rows in operation order; unknown operations go last, by id
pub fn price_form_rows(rows: &[PriceRow]) -> Vec<PriceFormRow> {
    let position = |row: &PriceRow| {
        row.kind()
            .and_then(|kind| OperationKind::all().iter().position(|k| *k == kind))
            .unwrap_or(usize::MAX)
    };
    let mut sorted: Vec<&PriceRow> = rows.iter().collect();
    sorted.sort_by_key(|row| (position(row), row.id));
    sorted.into_iter().map(PriceFormRow::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, operation_type: &str, legal: f64, individual: f64) -> PriceRow {
        PriceRow {
            id,
            operation_type: operation_type.to_string(),
            legal_price: legal,
            individual_price: individual,
        }
    }

    #[test]
    fn test_rows_in_operation_order() {
        let rows = vec![
            row(3, "water_only", 11.0, 15.0),
            row(7, "promo", 1.0, 2.0),
            row(1, "new_bottle", 101.0, 105.0),
            row(2, "exchange", 61.5, 65.0),
        ];
        let form = price_form_rows(&rows);
        let labels: Vec<&str> = form.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Täze çüýşe", "Çalyşyk", "Diňe suw", "promo"]);
    }

    #[test]
    fn test_fields_named_by_tier_and_id() {
        let form = PriceFormRow::from_row(&row(2, "exchange", 61.5, 65.0));
        let names: Vec<&str> = form.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["legal_2", "individual_2"]);
        assert_eq!(form.fields[0].value, "61.5");
        assert_eq!(form.fields[1].value, "65");
        assert_eq!(form.fields[0].placeholder, "61");
        assert_eq!(form.fields[1].placeholder, "65");
    }

    #[test]
    fn test_unknown_operation_has_no_placeholder() {
        let form = PriceFormRow::from_row(&row(9, "promo", 1.0, 2.0));
        assert_eq!(form.label, "promo");
        assert!(form.fields.iter().all(|f| f.placeholder.is_empty()));
    }
}
