//! Demo catalog seed data.
//!
//! A representative slice of the Brandazon demo inventory. Image URLs are
//! derived deterministically per product; the engine never inspects them.

use brandazon_core::{CurrencyCode, Price, ProductId};

use super::Product;

/// Derive the resolved placeholder image URL for a product.
fn image_url(id: &str, category: &str) -> String {
    let category_slug = category.to_lowercase().replace(' ', "-");
    format!("https://img.brandazon.com/{category_slug}/{id}.svg")
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    cents: u32,
    category: &str,
    sku: &str,
    brand: &str,
    variant: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_unsigned_cents(cents, CurrencyCode::USD),
        category: category.to_string(),
        sku: sku.to_string(),
        brand: brand.to_string(),
        variant: variant.to_string(),
        image_url: image_url(id, category),
    }
}

/// The built-in demo product list.
pub fn demo_products() -> Vec<Product> {
    vec![
        product(
            "monopoly-3rd-edition",
            "Monopoly: 3rd Edition",
            "The classic board game of property trading, updated with new tokens and rules for the 3rd edition.",
            2999,
            "Games",
            "GM-MONO-001",
            "Hasbro",
            "Standard",
        ),
        product(
            "uno-card-game",
            "Uno Card Game",
            "The timeless card game of matching colors and numbers. Easy to pick up, impossible to put down!",
            999,
            "Games",
            "GM-UNO-001",
            "Mattel",
            "Standard",
        ),
        product(
            "special-facial-soap",
            "Special Facial Soap",
            "Gentle and effective facial soap designed for all skin types, leaving your face feeling fresh and clean.",
            1250,
            "Beauty",
            "BT-SOAP-001",
            "PureSkin",
            "Unscented",
        ),
        product(
            "fancy-hairbrush",
            "Fancy Hairbrush",
            "Ergonomically designed hairbrush with natural bristles for smooth, tangle-free hair.",
            1800,
            "Beauty",
            "BT-HBRUSH-001",
            "GlamLocks",
            "Large",
        ),
        product(
            "labubu-blind-box-series-8",
            "Labubu Blind Box Series 8",
            "Discover the magic of Labubu with a surprise figure from Series 8. Collect them all!",
            1699,
            "Collectible",
            "COL-LABU-S8",
            "Popmart",
            "Blind Box",
        ),
        product(
            "labubu-ghost-hunter-plush",
            "Labubu Ghost Hunter Plush",
            "Cuddly Labubu plush in a spooky ghost hunter outfit. Perfect for fans and collectors.",
            2500,
            "Collectible",
            "COL-LABU-GH",
            "Popmart",
            "Plush",
        ),
        product(
            "labubu-plush-keychain",
            "Labubu Plush Keychain",
            "Take Labubu with you everywhere with this adorable plush keychain. A small but mighty collectible.",
            950,
            "Collectible",
            "COL-LABU-KC",
            "Popmart",
            "Keychain",
        ),
        product(
            "labubu-golden-edition-figure",
            "Labubu Golden Edition Figure",
            "A rare and exclusive golden edition Labubu figure. A must-have for serious collectors!",
            4999,
            "Collectible",
            "COL-LABU-GOLD",
            "Popmart",
            "Golden",
        ),
        product(
            "collectible-ceramic-mug",
            "Collectible Ceramic Mug",
            "High-quality ceramic mug with a unique design, perfect for collectors or daily use.",
            1199,
            "Collectible",
            "COL-MUG-001",
            "ArtisanCraft",
            "Standard",
        ),
        product(
            "electric-pour-over-kettle",
            "Electric Pour-over Kettle",
            "Precision temperature control for the perfect pour-over coffee. Sleek design for any kitchen.",
            5999,
            "Kitchen",
            "KCH-KETTLE-001",
            "BrewMaster",
            "Black",
        ),
        product(
            "pocket-blender-pro",
            "Pocket Blender Pro",
            "Compact and powerful personal blender, perfect for smoothies on the go. Rechargeable battery.",
            3999,
            "Kitchen",
            "KCH-PBLEND-001",
            "BlendGo",
            "Pro",
        ),
        product(
            "retro-gaming-mousepad",
            "Retro Gaming Mousepad",
            "Large mousepad with a nostalgic retro gaming design. Smooth surface for optimal mouse control.",
            1499,
            "Electronics",
            "EL-MPAD-001",
            "GameGear",
            "Large",
        ),
        product(
            "airpods-pro-3rd-gen",
            "AirPods Pro 3rd Gen",
            "Immersive sound with active noise cancellation. The latest generation for superior audio experience.",
            24900,
            "Electronics",
            "EL-AIRPODS-003",
            "Apple",
            "Pro",
        ),
        product(
            "nintendo-switch-lite",
            "Nintendo Switch Lite",
            "Compact, lightweight Nintendo Switch system dedicated to handheld play. Perfect for gaming on the go.",
            19999,
            "Electronics",
            "GM-SWITCHL-001",
            "Nintendo",
            "Yellow",
        ),
        product(
            "summer-splash-towel",
            "Summer Splash Towel",
            "Ultra-absorbent and quick-drying towel, ideal for beach days, pool parties, or gym sessions.",
            1999,
            "Home Goods",
            "HG-TOWEL-001",
            "AquaDry",
            "Beach",
        ),
        product(
            "super-soft-throw-blanket",
            "Super Soft Throw Blanket",
            "Luxuriously soft throw blanket, perfect for cozying up on the couch or adding a touch of comfort to any room.",
            3500,
            "Home Goods",
            "HG-BLANKET-001",
            "CozyHome",
            "Fleece",
        ),
        product(
            "wireless-pet-tracker",
            "Wireless Pet Tracker",
            "Keep track of your furry friend with this compact and reliable wireless pet tracker.",
            4500,
            "Pet Supplies",
            "PET-TRACK-001",
            "PetSafe",
            "GPS",
        ),
        product(
            "smart-home-hub-mini",
            "Smart Home Hub Mini",
            "Centralize your smart home devices with this mini hub. Control lights, thermostats, and more.",
            7999,
            "Smart Home",
            "SMART-HUB-001",
            "ConnectHome",
            "Mini",
        ),
    ]
}
