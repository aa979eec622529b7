//! Product Catalog
//!
//! In-memory records scraped from the product cards of the current page,
//! plus the filter/sort pipeline the filter panel drives.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{detect_category, Category};
use crate::price::{extract_price, is_out_of_stock};
use crate::sort::SortKey;

/// One scraped product card.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Position of the card in page order.
    pub id: usize,
    pub title: String,
    pub price: f64,
    pub price_text: String,
    pub image: String,
    pub out_of_stock: bool,
    pub category: Category,
}

impl Product {
    /// Build a record from the raw card text; price, stock and category are derived.
    pub fn from_card(id: usize, title: &str, price_text: &str, image: &str) -> Self {
        let title = title.trim();
        let price_text = price_text.trim();
        Self {
            id,
            title: title.to_string(),
            price: extract_price(price_text),
            price_text: price_text.to_string(),
            image: image.to_string(),
            out_of_stock: is_out_of_stock(price_text),
            category: detect_category(title),
        }
    }
}

/// Stock filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::All => "all",
            Availability::InStock => "in-stock",
            Availability::OutOfStock => "out-of-stock",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Availability::All),
            "in-stock" => Some(Availability::InStock),
            "out-of-stock" => Some(Availability::OutOfStock),
            _ => None,
        }
    }

    fn admits(&self, product: &Product) -> bool {
        match self {
            Availability::All => true,
            Availability::InStock => !product.out_of_stock,
            Availability::OutOfStock => product.out_of_stock,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active filters. The price range is inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductFilters {
    pub price_min: f64,
    pub price_max: f64,
    /// `None` admits every category.
    pub category: Option<Category>,
    pub availability: Availability,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            price_min: 0.0,
            price_max: f64::INFINITY,
            category: None,
            availability: Availability::All,
        }
    }
}

impl ProductFilters {
    /// Set the price range from the raw min/max inputs. Blank or invalid
    /// input leaves that side open.
    pub fn set_price_range(&mut self, min_input: &str, max_input: &str) {
        self.price_min = parse_bound(min_input).unwrap_or(0.0);
        self.price_max = parse_bound(max_input).unwrap_or(f64::INFINITY);
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.price >= self.price_min
            && product.price <= self.price_max
            && self.category.map_or(true, |c| c == product.category)
            && self.availability.admits(product)
    }
}

fn parse_bound(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Where a product ends up after filtering and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: usize,
    pub visible: bool,
}

/// Every product in display order, with its visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub placements: Vec<Placement>,
}

impl CatalogView {
    pub fn visible_count(&self) -> usize {
        self.placements.iter().filter(|p| p.visible).count()
    }

    pub fn visible_ids(&self) -> Vec<usize> {
        self.placements.iter().filter(|p| p.visible).map(|p| p.id).collect()
    }
}

/// Products of the current page.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories present, in table order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.products.iter().any(|p| p.category == *c))
            .collect()
    }

    /// Apply filters and sort. Hidden products keep their sorted slot so the
    /// container order stays consistent when filters are relaxed.
    pub fn view(&self, filters: &ProductFilters, sort: SortKey) -> CatalogView {
        let mut order: Vec<&Product> = self.products.iter().collect();
        order.sort_by(|a, b| sort.compare((&a.title, a.price), (&b.title, b.price)));
        CatalogView {
            placements: order
                .into_iter()
                .map(|p| Placement { id: p.id, visible: filters.matches(p) })
                .collect(),
        }
    }
}

/// Text of the results counter.
pub fn results_label(count: usize) -> String {
    format!("Showing {count} products")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::from_card(0, " iPhone 14 ", "৳ 1,20,000", "a.jpg"),
            Product::from_card(1, "Yamaha R15", "৳ 5,25,000", "b.jpg"),
            Product::from_card(2, "Apple Watch", "Out of Stock", "c.jpg"),
            Product::from_card(3, "Honda CB Hornet", "৳ 2,10,000", "d.jpg"),
        ])
    }

    #[test]
    fn test_from_card_derives_fields() {
        let product = Product::from_card(7, "  iPad Air ", " ৳ 75,000 ", "x.jpg");
        assert_eq!(product.title, "iPad Air");
        assert_eq!(product.price_text, "৳ 75,000");
        assert_eq!(product.price, 75000.0);
        assert_eq!(product.category, Category::Tablet);
        assert!(!product.out_of_stock);
    }

    #[test]
    fn test_default_view_shows_everything_in_page_order() {
        let view = catalog().view(&ProductFilters::default(), SortKey::Default);
        assert_eq!(view.visible_ids(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let mut filters = ProductFilters::default();
        filters.set_price_range("120000", "210000");
        let view = catalog().view(&filters, SortKey::Default);
        assert_eq!(view.visible_ids(), vec![0, 3]);
        assert_eq!(results_label(view.visible_count()), "Showing 2 products");
    }

    #[test]
    fn test_blank_bounds_stay_open() {
        let mut filters = ProductFilters::default();
        filters.set_price_range("", "abc");
        assert_eq!(filters, ProductFilters::default());
    }

    #[test]
    fn test_availability_filter() {
        let mut filters = ProductFilters::default();
        filters.availability = Availability::OutOfStock;
        assert_eq!(catalog().view(&filters, SortKey::Default).visible_ids(), vec![2]);

        filters.availability = Availability::InStock;
        assert_eq!(catalog().view(&filters, SortKey::Default).visible_ids(), vec![0, 1, 3]);
    }

    #[test]
    fn test_hidden_products_keep_sorted_slot() {
        let filters = ProductFilters { category: Some(Category::Honda), ..Default::default() };
        let view = catalog().view(&filters, SortKey::PriceHigh);

        let order: Vec<usize> = view.placements.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
        assert_eq!(view.visible_ids(), vec![3]);
    }

    #[test]
    fn test_categories_present() {
        assert_eq!(
            catalog().categories(),
            vec![Category::Phone, Category::Watch, Category::Yamaha, Category::Honda]
        );
    }
}
