use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

pub type PackageId = String;

fn default_rating() -> f64 {
    4.5
}

/// Travel package as listed by the catalog.
///
/// Managed elsewhere; the admin panel only reads it to pick featured
/// packages for the homepage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: PackageId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub duration: String,
    pub destination: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub featured_order: i32,
}

impl Package {
    pub fn new(id: impl Into<String>, title: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price: 0.0,
            original_price: None,
            duration: String::new(),
            destination: destination.into(),
            image: String::new(),
            highlights: Vec::new(),
            included: Vec::new(),
            excluded: Vec::new(),
            category: String::new(),
            rating: default_rating(),
            reviews: 0,
            featured: false,
            featured_order: 0,
        }
    }

    /// Whole-percent discount against `original_price`, if any
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= 0.0 || self.price >= original {
            return None;
        }
        Some((((original - self.price) / original) * 100.0).round() as u32)
    }

    /// Price as shown in the featured checklist, e.g. `$1,299.99`
    pub fn price_label(&self) -> String {
        let cents = (self.price * 100.0).round() as i64;
        let whole = cents / 100;
        let digits = whole.to_string();
        let mut grouped = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("${}.{:02}", grouped, cents % 100)
    }
}

impl AggregateRoot for Package {
    type Id = PackageId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "packages"
    }

    fn element_name() -> &'static str {
        "Package"
    }

    fn list_name() -> &'static str {
        "Packages"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_entry_with_defaults() {
        let json = r#"{
            "id": "bali-paradise-escape",
            "title": "Bali Paradise Escape",
            "price": 1299.99,
            "originalPrice": 1599.99,
            "duration": "7 Days / 6 Nights",
            "destination": "Bali, Indonesia",
            "category": "Beach & Relaxation",
            "featuredOrder": 1
        }"#;
        let p: Package = serde_json::from_str(json).unwrap();
        assert_eq!(p.rating, 4.5);
        assert_eq!(p.featured_order, 1);
        assert!(p.highlights.is_empty());
        assert_eq!(p.discount_percent(), Some(19));
    }

    #[test]
    fn price_label_groups_thousands() {
        let mut p = Package::new("x", "X", "Goa, India");
        p.price = 1299.99;
        assert_eq!(p.price_label(), "$1,299.99");
        p.price = 899.0;
        assert_eq!(p.price_label(), "$899.00");
        p.price = 1234567.5;
        assert_eq!(p.price_label(), "$1,234,567.50");
        assert_eq!(p.discount_percent(), None);
    }
}
