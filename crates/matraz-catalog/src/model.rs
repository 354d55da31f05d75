//! Catalog view and input models

use serde::{Deserialize, Serialize};

use matraz_persistence::entity::{categories, product_suppliers, products, suppliers};

/// Filters accepted by the public product listing
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub include_inactive: bool,
    pub category_slug: Option<String>,
    pub featured_only: bool,
}

/// Category summary embedded in product responses
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
}

impl From<categories::Model> for CategoryRef {
    fn from(value: categories::Model) -> Self {
        Self {
            name: value.name,
            slug: value.slug,
        }
    }
}

/// A supplier's offer of a product: supplier summary plus link fields
#[derive(Debug, Clone, Serialize)]
pub struct SupplierOffer {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub price: Option<f64>,
    pub currency: String,
    pub product_code: Option<String>,
    pub available: bool,
}

impl SupplierOffer {
    pub fn from_link(link: product_suppliers::Model, supplier: suppliers::Model) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            slug: supplier.slug,
            logo_url: supplier.logo_url,
            website: supplier.website,
            price: link.price,
            currency: link.currency,
            product_code: link.product_code,
            available: link.available,
        }
    }
}

/// Product joined with its category and supplier offers
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: products::Model,
    pub category: Option<CategoryRef>,
    pub suppliers: Vec<SupplierOffer>,
}

/// One supplier link in a product create/update request
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierLinkInput {
    pub supplier_id: i32,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub product_code: Option<String>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub main_image: Option<String>,
    pub gallery: Option<serde_json::Value>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
    pub suppliers: Option<Vec<SupplierLinkInput>>,
}

/// Partial product update.
///
/// `name`, `slug`, `featured`, and `active` keep the stored value when
/// absent; the remaining fields are overwritten with whatever is given
/// (absent means cleared), matching the admin form which always submits
/// the full product.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub main_image: Option<String>,
    pub gallery: Option<serde_json::Value>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
    pub suppliers: Option<Vec<SupplierLinkInput>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSupplier {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub contact: Option<String>,
    pub logo_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSupplier {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub contact: Option<String>,
    pub logo_url: Option<String>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_deserialization() {
        let json = r#"{
            "name": "Binocular Microscope",
            "category_id": 3,
            "featured": true,
            "suppliers": [
                {"supplier_id": 1, "price": 1250.5, "product_code": "BM-400"},
                {"supplier_id": 2, "available": false}
            ]
        }"#;
        let input: CreateProduct = serde_json::from_str(json).unwrap();
        assert_eq!(input.name.as_deref(), Some("Binocular Microscope"));
        assert_eq!(input.category_id, Some(3));
        assert!(input.slug.is_none());
        let links = input.suppliers.unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].price, Some(1250.5));
        assert!(links[0].currency.is_none());
        assert_eq!(links[1].available, Some(false));
    }

    #[test]
    fn test_update_product_absent_suppliers() {
        let input: UpdateProduct = serde_json::from_str(r#"{"name": "Renamed"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Renamed"));
        assert!(input.suppliers.is_none());
    }

    #[test]
    fn test_product_view_serialization_shape() {
        let view = ProductView {
            product: products::Model {
                id: 1,
                name: "Centrifuge".to_string(),
                slug: "centrifuge".to_string(),
                description: None,
                category_id: Some(2),
                main_image: None,
                gallery: None,
                featured: false,
                active: true,
                created_at: chrono::Utc::now(),
                updated_at: None,
            },
            category: Some(CategoryRef {
                name: "Lab Equipment".to_string(),
                slug: "lab-equipment".to_string(),
            }),
            suppliers: vec![],
        };

        let json = serde_json::to_value(&view).unwrap();
        // Product fields are flattened at the top level
        assert_eq!(json["name"], "Centrifuge");
        assert_eq!(json["category"]["slug"], "lab-equipment");
        assert!(json["suppliers"].as_array().unwrap().is_empty());
    }
}
