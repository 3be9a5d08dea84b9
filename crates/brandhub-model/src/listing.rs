//! Portfolio listing helpers

use crate::brand::{Brand, EntityType};

/// Newest `updatedAt` first; equal timestamps keep their input order
pub fn sort_recent(brands: &mut [Brand]) {
    brands.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

/// Brands of one entity type
#[must_use]
pub fn filter_entities(brands: &[Brand], entity_type: EntityType) -> Vec<&Brand> {
    brands.iter().filter(|b| b.entity_type == entity_type).collect()
}

/// Case-insensitive match on name or industry; a blank query matches all
#[must_use]
pub fn search<'a>(brands: &'a [Brand], query: &str) -> Vec<&'a Brand> {
    let query = query.trim().to_lowercase();
    brands
        .iter()
        .filter(|b| {
            query.is_empty()
                || b.name.to_lowercase().contains(&query)
                || b.industry.to_lowercase().contains(&query)
        })
        .collect()
}

/// Brands shown to non-admin visitors
#[must_use]
pub fn public_view(brands: &[Brand]) -> Vec<&Brand> {
    brands.iter().filter(|b| b.is_visible).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(id: &str, name: &str, industry: &str, updated_at: i64) -> Brand {
        Brand {
            id: id.to_string(),
            name: name.to_string(),
            industry: industry.to_string(),
            updated_at,
            ..Brand::default()
        }
    }

    #[test]
    fn recent_first() {
        let mut brands = vec![brand("a", "A", "x", 10), brand("b", "B", "x", 30), brand("c", "C", "x", 20)];
        sort_recent(&mut brands);
        let ids: Vec<_> = brands.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn search_covers_name_and_industry() {
        let brands = vec![brand("a", "Acme", "Retail", 0), brand("b", "Globex", "Energy", 0)];
        assert_eq!(search(&brands, "acm").len(), 1);
        assert_eq!(search(&brands, "ENERGY")[0].id, "b");
        assert_eq!(search(&brands, "  ").len(), 2);
        assert!(search(&brands, "zzz").is_empty());
    }

    #[test]
    fn hidden_and_products_are_filtered() {
        let mut hidden = brand("h", "Hidden", "x", 0);
        hidden.is_visible = false;
        let mut product = brand("p", "Widget", "x", 0);
        product.entity_type = EntityType::Product;
        let brands = vec![brand("a", "A", "x", 0), hidden, product];

        assert_eq!(public_view(&brands).len(), 2);
        assert_eq!(filter_entities(&brands, EntityType::Product)[0].id, "p");
        assert_eq!(filter_entities(&brands, EntityType::Brand).len(), 2);
    }
}
