use shopfront_core::Product;

/// Category filter value that matches every product.
pub const ALL_CATEGORIES: &str = "all";

/// The loaded product collection plus the currently selected category.
///
/// Rebuilt wholesale from a facade load (`replace`), never updated
/// incrementally.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    selected_category: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            selected_category: ALL_CATEGORIES.to_owned(),
        }
    }

    /// Replaces the whole collection, keeping the selected category.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Derives the category filter list: `"all"` first, then each distinct
    /// category in the order it first appears in the collection.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_owned()];
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Products matching the selected category exactly, or the whole
    /// collection when `"all"` is selected.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Product> {
        if self.selected_category == ALL_CATEGORIES {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category == self.selected_category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: &str, category: &str) -> Product {
        Product {
            id: id.to_owned(),
            name: format!("Product {id}"),
            price: "10.00".parse().unwrap(),
            description: "A product".to_owned(),
            image: "https://images.example.com/product.jpg".to_owned(),
            stock: 5,
            category: category.to_owned(),
            source: "Legacy API".to_owned(),
        }
    }

    fn loaded_catalog() -> Catalog {
        Catalog::new(vec![
            make_product("P1", "Electronics"),
            make_product("P2", "Accessories"),
            make_product("P3", "Electronics"),
            make_product("P4", "Storage"),
        ])
    }

    #[test]
    fn categories_start_with_all_and_dedupe_in_first_seen_order() {
        assert_eq!(
            loaded_catalog().categories(),
            ["all", "Electronics", "Accessories", "Storage"]
        );
    }

    #[test]
    fn categories_on_empty_catalog_is_just_all() {
        assert_eq!(Catalog::default().categories(), ["all"]);
    }

    #[test]
    fn filtered_defaults_to_everything() {
        let catalog = loaded_catalog();
        assert_eq!(catalog.selected_category(), ALL_CATEGORIES);
        assert_eq!(catalog.filtered().len(), 4);
    }

    #[test]
    fn filtered_matches_selected_category_exactly() {
        let mut catalog = loaded_catalog();
        catalog.set_category("Electronics");
        let ids: Vec<&str> = catalog.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P1", "P3"]);
    }

    #[test]
    fn filtered_unknown_category_is_empty() {
        let mut catalog = loaded_catalog();
        catalog.set_category("Furniture");
        assert!(catalog.filtered().is_empty());
    }

    #[test]
    fn filtered_does_not_match_substrings_or_case_variants() {
        let mut catalog = loaded_catalog();
        catalog.set_category("electronics");
        assert!(catalog.filtered().is_empty());
    }

    #[test]
    fn replace_swaps_collection_and_keeps_selection() {
        let mut catalog = loaded_catalog();
        catalog.set_category("Storage");
        catalog.replace(vec![make_product("P9", "Storage")]);
        assert_eq!(catalog.selected_category(), "Storage");
        let ids: Vec<&str> = catalog.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P9"]);
    }
}
