//! Persisted record shapes.
//!
//! A [`ProductRecord`] is what the repository stores under each key of the
//! document. Records are plain data: they are produced from validated products
//! but are never re-validated when read back.
//!
//! On disk the field names follow the established file format (`id_producto`,
//! `nombre`, `descripcion`, `precio`, `stock`, `garantia`, `vencimiento`) and each
//! record carries a `kind` tag. Documents written before the tag existed are still
//! readable: a record with `garantia` is electronic, otherwise one with
//! `vencimiento` is perishable.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::Display;

use super::product::ProductId;

/// Fields shared by every product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRecord {
    #[serde(rename = "id_producto")]
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicRecord {
    #[serde(flatten)]
    pub base: BaseRecord,
    #[serde(rename = "garantia")]
    pub warranty_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerishableRecord {
    #[serde(flatten)]
    pub base: BaseRecord,
    #[serde(rename = "vencimiento", with = "date_text")]
    pub expiration: NaiveDate,
}

/// Product category, as written in the `kind` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Electronic,
    Perishable,
}

impl Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductKind::Electronic => write!(f, "electronic"),
            ProductKind::Perishable => write!(f, "perishable"),
        }
    }
}

/// A stored product, tagged with its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductRecord {
    Electronic(ElectronicRecord),
    Perishable(PerishableRecord),
}

impl ProductRecord {
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductRecord::Electronic(_) => ProductKind::Electronic,
            ProductRecord::Perishable(_) => ProductKind::Perishable,
        }
    }

    pub fn base(&self) -> &BaseRecord {
        match self {
            ProductRecord::Electronic(record) => &record.base,
            ProductRecord::Perishable(record) => &record.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseRecord {
        match self {
            ProductRecord::Electronic(record) => &mut record.base,
            ProductRecord::Perishable(record) => &mut record.base,
        }
    }

    pub fn id(&self) -> ProductId {
        self.base().id
    }
}

impl<'de> Deserialize<'de> for ProductRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(tag = "kind", rename_all = "lowercase")]
        enum Tagged {
            Electronic(ElectronicRecord),
            Perishable(PerishableRecord),
        }

        // Electronic is tried first so a record carrying both fields keeps its
        // warranty.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Electronic(ElectronicRecord),
            Perishable(PerishableRecord),
        }

        let value = serde_json::Value::deserialize(deserializer)?;

        // A tagged record decodes by its tag or not at all.
        if value.get("kind").is_some() {
            return Ok(match Tagged::deserialize(value).map_err(de::Error::custom)? {
                Tagged::Electronic(record) => ProductRecord::Electronic(record),
                Tagged::Perishable(record) => ProductRecord::Perishable(record),
            });
        }

        Ok(match Shape::deserialize(value).map_err(de::Error::custom)? {
            Shape::Electronic(record) => ProductRecord::Electronic(record),
            Shape::Perishable(record) => ProductRecord::Perishable(record),
        })
    }
}

impl From<ElectronicRecord> for ProductRecord {
    fn from(record: ElectronicRecord) -> Self {
        ProductRecord::Electronic(record)
    }
}

impl From<PerishableRecord> for ProductRecord {
    fn from(record: PerishableRecord) -> Self {
        ProductRecord::Perishable(record)
    }
}

impl Display for ProductRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductRecord::Electronic(record) => write!(
                f,
                "Electronic product: {}, Price: ${}, Stock: {}, Warranty: {} months.",
                record.base.name, record.base.price, record.base.stock, record.warranty_months
            ),
            ProductRecord::Perishable(record) => write!(
                f,
                "Perishable product: {}, Price: ${}, Stock: {}, Expires: {}.",
                record.base.name,
                record.base.price,
                record.base.stock,
                record.expiration.format(date_text::WRITE_FORMAT)
            ),
        }
    }
}

/// Serde adapter for `vencimiento`.
///
/// Dates are written as `YYYY-MM-DD`. Reading also accepts a trailing
/// `HH:MM:SS` time and the `DD-MM-YYYY` input format.
pub mod date_text {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const WRITE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(WRITE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).ok_or_else(|| serde::de::Error::custom(format!("invalid date {text:?}")))
    }

    pub fn parse(text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        NaiveDate::parse_from_str(text, WRITE_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
            .or_else(|_| NaiveDate::parse_from_str(text, crate::model::validation::EXPIRATION_FORMAT))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base(id: u64) -> BaseRecord {
        BaseRecord {
            id: ProductId(id),
            name: "Mouse".into(),
            description: "Wireless mouse".into(),
            price: 19.99,
            stock: 50,
        }
    }

    #[test]
    fn test_electronic_record_serializes_with_kind_tag() {
        let record = ProductRecord::Electronic(ElectronicRecord {
            base: base(1),
            warranty_months: 12,
        });

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "kind": "electronic",
                "id_producto": 1,
                "nombre": "Mouse",
                "descripcion": "Wireless mouse",
                "precio": 19.99,
                "stock": 50,
                "garantia": 12
            })
        );
    }

    #[test]
    fn test_perishable_record_writes_iso_date() {
        let record = ProductRecord::Perishable(PerishableRecord {
            base: base(2),
            expiration: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["kind"], "perishable");
        assert_eq!(value["vencimiento"], "2030-06-01");

        let back: ProductRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_tag_wins_over_shape() {
        let value = json!({
            "kind": "perishable",
            "id_producto": 3,
            "nombre": "Milk",
            "descripcion": "Whole milk",
            "precio": 1.5,
            "stock": 20,
            "vencimiento": "2030-01-01"
        });
        let record: ProductRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.kind(), ProductKind::Perishable);
    }

    #[test]
    fn test_tagged_record_missing_its_field_is_rejected() {
        let result = serde_json::from_value::<ProductRecord>(json!({
            "kind": "electronic",
            "id_producto": 5,
            "nombre": "Cheese",
            "descripcion": "Mislabelled",
            "precio": 3.0,
            "stock": 4,
            "vencimiento": "2030-01-01"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = serde_json::from_value::<ProductRecord>(json!({
            "kind": "furniture",
            "id_producto": 6,
            "nombre": "Chair",
            "descripcion": "Oak",
            "precio": 40.0,
            "stock": 2,
            "garantia": 24
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_untagged_records_recover_kind_from_shape() {
        let electronic: ProductRecord = serde_json::from_value(json!({
            "id_producto": 1,
            "nombre": "Mouse",
            "descripcion": "Wireless mouse",
            "precio": 19.99,
            "stock": 50,
            "garantia": 12
        }))
        .unwrap();
        assert_eq!(electronic.kind(), ProductKind::Electronic);

        let perishable: ProductRecord = serde_json::from_value(json!({
            "id_producto": 2,
            "nombre": "Yogurt",
            "descripcion": "Natural",
            "precio": 2,
            "stock": 10,
            "vencimiento": "2030-05-04 00:00:00"
        }))
        .unwrap();
        assert_eq!(perishable.kind(), ProductKind::Perishable);
        assert_eq!(perishable.base().price, 2.0);
        match perishable {
            ProductRecord::Perishable(record) => {
                assert_eq!(record.expiration, NaiveDate::from_ymd_opt(2030, 5, 4).unwrap())
            }
            other => panic!("unexpected record {other:?}"),
        }
    }

    #[test]
    fn test_record_without_category_field_is_rejected() {
        let result = serde_json::from_value::<ProductRecord>(json!({
            "id_producto": 4,
            "nombre": "Plain",
            "descripcion": "No category",
            "precio": 1.0,
            "stock": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_date_text_accepts_known_formats() {
        let expected = NaiveDate::from_ymd_opt(2031, 12, 24);
        assert_eq!(date_text::parse("2031-12-24"), expected);
        assert_eq!(date_text::parse("2031-12-24 00:00:00"), expected);
        assert_eq!(date_text::parse("24-12-2031"), expected);
        assert_eq!(date_text::parse("Christmas"), None);
    }

    #[test]
    fn test_display_matches_lookup_report() {
        let record = ProductRecord::Electronic(ElectronicRecord {
            base: base(1),
            warranty_months: 12,
        });
        assert_eq!(
            record.to_string(),
            "Electronic product: Mouse, Price: $19.99, Stock: 50, Warranty: 12 months."
        );
    }
}
