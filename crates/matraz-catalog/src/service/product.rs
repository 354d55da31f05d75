//! Product service
//!
//! Products carry an optional category and any number of supplier offers
//! through the `product_suppliers` link table. Create and update manage
//! the links inside the same transaction as the product row.

use std::collections::HashMap;

use matraz_common::{DEFAULT_CURRENCY, MatrazError, slugify};
use matraz_persistence::entity::{categories, product_suppliers, products, suppliers};
use matraz_persistence::sea_orm::*;

use crate::model::{
    CategoryRef, CreateProduct, ProductFilter, ProductView, SupplierLinkInput, SupplierOffer,
    UpdateProduct,
};

pub async fn list(
    db: &DatabaseConnection,
    filter: &ProductFilter,
) -> anyhow::Result<Vec<ProductView>> {
    let mut select = products::Entity::find().find_also_related(categories::Entity);

    if !filter.include_inactive {
        select = select.filter(products::Column::Active.eq(true));
    }
    if let Some(slug) = &filter.category_slug {
        select = select.filter(categories::Column::Slug.eq(slug.as_str()));
    }
    if filter.featured_only {
        select = select.filter(products::Column::Featured.eq(true));
    }

    let rows = select.order_by_asc(products::Column::Name).all(db).await?;

    let ids: Vec<i32> = rows.iter().map(|(product, _)| product.id).collect();
    // Listings only show offers currently available for quoting
    let mut offers = load_offers(db, &ids, true).await?;

    Ok(rows
        .into_iter()
        .map(|(product, category)| ProductView {
            suppliers: offers.remove(&product.id).unwrap_or_default(),
            category: category.map(CategoryRef::from),
            product,
        })
        .collect())
}

pub async fn get(db: &DatabaseConnection, id: i32) -> anyhow::Result<ProductView> {
    let (product, category) = products::Entity::find_by_id(id)
        .find_also_related(categories::Entity)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("product"))?;

    let mut offers = load_offers(db, &[product.id], false).await?;

    Ok(ProductView {
        suppliers: offers.remove(&product.id).unwrap_or_default(),
        category: category.map(CategoryRef::from),
        product,
    })
}

pub async fn create(
    db: &DatabaseConnection,
    input: CreateProduct,
) -> anyhow::Result<products::Model> {
    let name = input.name.clone().unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return Err(MatrazError::IllegalArgument("name is required".to_string()).into());
    }

    let slug = match input.slug.filter(|s| !s.is_empty()) {
        Some(slug) => slug,
        None => slugify(&name),
    };
    ensure_slug_free(db, &slug, None).await?;

    let txn = db.begin().await?;

    let product = products::ActiveModel {
        name: Set(name),
        slug: Set(slug),
        description: Set(input.description),
        category_id: Set(input.category_id),
        main_image: Set(input.main_image),
        gallery: Set(input.gallery),
        featured: Set(input.featured.unwrap_or(false)),
        active: Set(input.active.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if let Some(links) = &input.suppliers {
        insert_links(&txn, product.id, links).await?;
    }

    txn.commit().await?;

    Ok(product)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateProduct,
) -> anyhow::Result<products::Model> {
    let existing = products::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("product"))?;

    if let Some(slug) = input.slug.as_deref().filter(|s| !s.is_empty()) {
        if slug != existing.slug {
            ensure_slug_free(db, slug, Some(id)).await?;
        }
    }

    let txn = db.begin().await?;

    let mut product: products::ActiveModel = existing.into();
    if let Some(name) = input.name {
        product.name = Set(name);
    }
    if let Some(slug) = input.slug.filter(|s| !s.is_empty()) {
        product.slug = Set(slug);
    }
    product.description = Set(input.description);
    product.category_id = Set(input.category_id);
    product.main_image = Set(input.main_image);
    product.gallery = Set(input.gallery);
    if let Some(featured) = input.featured {
        product.featured = Set(featured);
    }
    if let Some(active) = input.active {
        product.active = Set(active);
    }
    product.updated_at = Set(Some(chrono::Utc::now()));

    let product = product.update(&txn).await?;

    // Replace the full link set only when the request carries one
    if let Some(links) = &input.suppliers {
        product_suppliers::Entity::delete_many()
            .filter(product_suppliers::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;
        insert_links(&txn, id, links).await?;
    }

    txn.commit().await?;

    Ok(product)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let txn = db.begin().await?;

    product_suppliers::Entity::delete_many()
        .filter(product_suppliers::Column::ProductId.eq(id))
        .exec(&txn)
        .await?;

    let result = products::Entity::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(MatrazError::NotFound("product").into());
    }

    txn.commit().await?;

    tracing::info!(product_id = id, "product deleted");

    Ok(())
}

/// Load supplier offers for a set of products in a single query,
/// grouped by product id and ordered by supplier name.
async fn load_offers(
    db: &DatabaseConnection,
    product_ids: &[i32],
    available_only: bool,
) -> anyhow::Result<HashMap<i32, Vec<SupplierOffer>>> {
    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut select = product_suppliers::Entity::find()
        .find_also_related(suppliers::Entity)
        .filter(product_suppliers::Column::ProductId.is_in(product_ids.iter().copied()));
    if available_only {
        select = select.filter(product_suppliers::Column::Available.eq(true));
    }

    let links = select.order_by_asc(suppliers::Column::Name).all(db).await?;

    let mut offers: HashMap<i32, Vec<SupplierOffer>> = HashMap::new();
    for (link, supplier) in links {
        if let Some(supplier) = supplier {
            offers
                .entry(link.product_id)
                .or_default()
                .push(SupplierOffer::from_link(link, supplier));
        }
    }

    Ok(offers)
}

async fn insert_links<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
    links: &[SupplierLinkInput],
) -> anyhow::Result<()> {
    for link in links {
        product_suppliers::ActiveModel {
            product_id: Set(product_id),
            supplier_id: Set(link.supplier_id),
            price: Set(link.price),
            currency: Set(link
                .currency
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())),
            product_code: Set(link.product_code.clone()),
            available: Set(link.available.unwrap_or(true)),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

async fn ensure_slug_free(
    db: &DatabaseConnection,
    slug: &str,
    exclude_id: Option<i32>,
) -> anyhow::Result<()> {
    let mut select = products::Entity::find().filter(products::Column::Slug.eq(slug));
    if let Some(id) = exclude_id {
        select = select.filter(products::Column::Id.ne(id));
    }

    if select.one(db).await?.is_some() {
        return Err(MatrazError::SlugExists(slug.to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_requires_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let input = CreateProduct {
            name: Some("   ".to_string()),
            ..Default::default()
        };

        let err = create(&db, input).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::IllegalArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<(products::Model, categories::Model)>::new()])
            .into_connection();

        let err = get(&db, 99).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::NotFound("product"))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_taken_slug() {
        let existing = products::Model {
            id: 1,
            name: "Centrifuge".to_string(),
            slug: "centrifuge".to_string(),
            description: None,
            category_id: None,
            main_image: None,
            gallery: None,
            featured: false,
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: None,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .into_connection();

        let input = CreateProduct {
            name: Some("Centrifuge".to_string()),
            ..Default::default()
        };
        let err = create(&db, input).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::SlugExists(slug)) if slug == "centrifuge"
        ));
    }
}
