//! Route paths the console navigates to.

/// Home page: shop search and listing.
pub const HOME: &str = "/";

/// Product list page.
pub const PRODUCTS: &str = "/product";

/// Category list page.
pub const CATEGORIES: &str = "/category";

/// Detail page of a shop.
#[must_use]
pub fn shop(id: u64) -> String {
    format!("/shop/{id}")
}

/// Detail page of a product.
#[must_use]
pub fn product(id: u64) -> String {
    format!("{PRODUCTS}/{id}")
}

/// Detail page of a category.
#[must_use]
pub fn category(id: u64) -> String {
    format!("{CATEGORIES}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_routes() {
        assert_eq!(shop(4), "/shop/4");
        assert_eq!(product(12), "/product/12");
        assert_eq!(category(3), "/category/3");
    }
}
