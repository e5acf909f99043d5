//! Offer catalog models
//!
//! The school's bookable offers and their hourly rates. The catalog is read
//! once at startup, either from a JSON file or from the built-in defaults.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A bookable lesson or course
#[derive(Debug, Clone, Deserialize)]
pub struct Offer {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_per_hour: Decimal,
    #[serde(default)]
    pub additional_person_price: Decimal,
    pub currency: String,
    /// Largest party the guide accepts on top of the booking person
    #[serde(default)]
    pub max_additional_people: i32,
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct OfferFile {
    offers: Vec<Offer>,
}

/// Offer catalog load errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read offer catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse offer catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid offer '{slug}': {reason}")]
    Invalid { slug: String, reason: String },
}

/// Validated, immutable offer catalog
#[derive(Debug, Clone)]
pub struct OfferCatalog {
    offers: Vec<Offer>,
    by_slug: HashMap<String, usize>,
}

impl OfferCatalog {
    /// Build a catalog, validating every offer
    pub fn new(offers: Vec<Offer>) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(offers.len());

        for (index, offer) in offers.iter().enumerate() {
            offer.validate()?;
            if by_slug.insert(offer.slug.clone(), index).is_some() {
                return Err(CatalogError::Invalid {
                    slug: offer.slug.clone(),
                    reason: "duplicate slug".to_string(),
                });
            }
        }

        Ok(Self { offers, by_slug })
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: OfferFile = serde_json::from_str(json)?;
        Self::new(file.offers)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up an offer by slug
    pub fn get(&self, slug: &str) -> Option<&Offer> {
        self.by_slug.get(slug).map(|&index| &self.offers[index])
    }

    /// All offers in catalog order
    pub fn list(&self) -> &[Offer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl Default for OfferCatalog {
    fn default() -> Self {
        let offers = vec![
            Offer {
                slug: "private-lesson".to_string(),
                name: "Private fly-fishing lesson".to_string(),
                description: "One-to-one casting and river craft with a guide".to_string(),
                price_per_hour: dec!(80),
                additional_person_price: dec!(20),
                currency: "EUR".to_string(),
                max_additional_people: 3,
            },
            Offer {
                slug: "casting-clinic".to_string(),
                name: "Casting clinic".to_string(),
                description: "Focused casting technique session on the lawn".to_string(),
                price_per_hour: dec!(60),
                additional_person_price: dec!(15),
                currency: "EUR".to_string(),
                max_additional_people: 5,
            },
            Offer {
                slug: "guided-river-day".to_string(),
                name: "Guided river day".to_string(),
                description: "Full day on the water, tackle included".to_string(),
                price_per_hour: dec!(65),
                additional_person_price: dec!(25),
                currency: "EUR".to_string(),
                max_additional_people: 2,
            },
        ];

        Self {
            by_slug: offers
                .iter()
                .enumerate()
                .map(|(index, offer)| (offer.slug.clone(), index))
                .collect(),
            offers,
        }
    }
}

impl Offer {
    fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::Invalid {
            slug: self.slug.clone(),
            reason: reason.to_string(),
        };

        if self.slug.trim().is_empty() {
            return Err(invalid("slug must not be empty"));
        }
        if self.price_per_hour < Decimal::ZERO {
            return Err(invalid("price_per_hour must not be negative"));
        }
        if self.additional_person_price < Decimal::ZERO {
            return Err(invalid("additional_person_price must not be negative"));
        }
        if self.max_additional_people < 0 {
            return Err(invalid("max_additional_people must not be negative"));
        }
        if !is_currency_code(&self.currency) {
            return Err(invalid("currency must be a three-letter ISO code"));
        }

        Ok(())
    }
}

/// Three ASCII uppercase letters, e.g. "EUR"
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "offers": [
            {
                "slug": "private-lesson",
                "name": "Private lesson",
                "price_per_hour": 80,
                "additional_person_price": "20.00",
                "currency": "EUR",
                "max_additional_people": 3
            },
            {
                "slug": "kids-course",
                "name": "Kids course",
                "price_per_hour": 45.5,
                "currency": "EUR"
            }
        ]
    }"#;

    #[test]
    fn test_from_json_accepts_numbers_and_strings() {
        let catalog = OfferCatalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.len(), 2);

        let lesson = catalog.get("private-lesson").unwrap();
        assert_eq!(lesson.price_per_hour, dec!(80));
        assert_eq!(lesson.additional_person_price, dec!(20));
        assert_eq!(lesson.max_additional_people, 3);

        let kids = catalog.get("kids-course").unwrap();
        assert_eq!(kids.price_per_hour, dec!(45.5));
        assert_eq!(kids.additional_person_price, dec!(0));
        assert_eq!(kids.max_additional_people, 0);
        assert!(kids.description.is_empty());
    }

    #[test]
    fn test_list_preserves_file_order() {
        let catalog = OfferCatalog::from_json(CATALOG_JSON).unwrap();
        let slugs: Vec<&str> = catalog.list().iter().map(|o| o.slug.as_str()).collect();
        assert_eq!(slugs, vec!["private-lesson", "kids-course"]);
    }

    #[test]
    fn test_unknown_slug() {
        let catalog = OfferCatalog::default();
        assert!(catalog.get("deep-sea-charter").is_none());
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = OfferCatalog::default();
        assert!(!catalog.is_empty());
        assert!(OfferCatalog::new(catalog.list().to_vec()).is_ok());
        assert_eq!(catalog.get("private-lesson").unwrap().price_per_hour, dec!(80));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let offer = OfferCatalog::default().list()[0].clone();
        let err = OfferCatalog::new(vec![offer.clone(), offer]).unwrap_err();
        assert!(err.to_string().contains("duplicate slug"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut offer = OfferCatalog::default().list()[0].clone();
        offer.additional_person_price = dec!(-5);
        let err = OfferCatalog::new(vec![offer]).unwrap_err();
        assert!(err.to_string().contains("additional_person_price"));
    }

    #[test]
    fn test_bad_currency_rejected() {
        let mut offer = OfferCatalog::default().list()[0].clone();
        offer.currency = "euro".to_string();
        assert!(matches!(
            OfferCatalog::new(vec![offer]),
            Err(CatalogError::Invalid { .. })
        ));
    }

    #[test]
    fn test_load_example_catalog_file() {
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/config/offers.example.json"
        ));
        let catalog = OfferCatalog::load(path).unwrap();

        assert_eq!(catalog.len(), 2);
        let lesson = catalog.get("private-lesson").unwrap();
        assert_eq!(lesson.price_per_hour, dec!(80));
        assert_eq!(lesson.additional_person_price, dec!(20));
        assert_eq!(lesson.max_additional_people, 3);

        let clinic = catalog.get("casting-clinic").unwrap();
        assert_eq!(clinic.price_per_hour, dec!(60));
        assert_eq!(clinic.additional_person_price, dec!(15));
        assert_eq!(clinic.currency, "EUR");
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/config/does-not-exist.json"
        ));
        assert!(matches!(OfferCatalog::load(path), Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            OfferCatalog::from_json("{\"offers\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_currency_code() {
        assert!(is_currency_code("EUR"));
        assert!(is_currency_code("MXN"));
        assert!(!is_currency_code("eur"));
        assert!(!is_currency_code("EURO"));
        assert!(!is_currency_code(""));
    }
}
