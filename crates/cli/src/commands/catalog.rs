//! Print the demo catalog.

use brandazon_storefront::{Catalog, Product};

/// List the demo catalog, optionally only the featured products.
#[allow(clippy::print_stdout)]
pub fn run(featured: bool) {
    let catalog = Catalog::demo();
    let products: Vec<&Product> = if featured {
        catalog.featured()
    } else {
        catalog.all().iter().collect()
    };

    for product in products {
        println!(
            "{:<32} {:>10}  {:<12} {}",
            product.id.as_str(),
            product.price.display(),
            product.category,
            product.name
        );
    }
}
