//! The built-in catalog seed.
//!
//! Served when no `CATALOG_FILE` is configured, and exported by the CLI to
//! produce the static JSON catalog for serverless deployments.

use riverstone_core::catalog::Product;
use riverstone_core::{Price, ProductId};

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: i64,
    category: &'static str,
    image_dir: &'static str,
    stock: u32,
    is_featured: bool,
}

const SEED: &[SeedProduct] = &[
    SeedProduct {
        id: "raw-w320",
        name: "Raw Cashews W320",
        description: "Premium grade raw cashews, perfect for snacking and cooking. \
                      These whole cashews are carefully selected for their superior \
                      quality and consistency.",
        price: 1200,
        category: "raw",
        image_dir: "raw-w320",
        stock: 5000,
        is_featured: true,
    },
    SeedProduct {
        id: "roasted-salted",
        name: "Roasted & Salted Cashews",
        description: "Perfectly roasted with a touch of sea salt for enhanced flavor. \
                      Our signature roasting process brings out the natural sweetness.",
        price: 1400,
        category: "roasted",
        image_dir: "roasted-w240",
        stock: 3500,
        is_featured: true,
    },
    SeedProduct {
        id: "organic",
        name: "Organic Cashews",
        description: "Certified organic cashews grown without synthetic pesticides. \
                      Sustainably sourced from certified organic farms.",
        price: 1600,
        category: "organic",
        image_dir: "organic-w320",
        stock: 2000,
        is_featured: true,
    },
    SeedProduct {
        id: "pieces",
        name: "Cashew Pieces",
        description: "Premium cashew pieces, perfect for baking and cooking. These \
                      pieces maintain the same great taste and quality as our whole \
                      cashews.",
        price: 1100,
        category: "pieces",
        image_dir: "cashew-pieces",
        stock: 8000,
        is_featured: false,
    },
    SeedProduct {
        id: "honey-roasted",
        name: "Honey Roasted Cashews",
        description: "Sweet and savory honey roasted cashews. The perfect balance of \
                      sweet and salty flavors.",
        price: 1500,
        category: "flavored",
        image_dir: "honey-roasted",
        stock: 1500,
        is_featured: false,
    },
    SeedProduct {
        id: "spiced",
        name: "Spiced Cashews",
        description: "Aromatic and flavorful spiced cashews with a hint of heat. \
                      Perfect for those who enjoy bold flavors.",
        price: 1450,
        category: "flavored",
        image_dir: "spiced",
        stock: 1500,
        is_featured: false,
    },
    SeedProduct {
        id: "jumbo-w240",
        name: "Jumbo Cashews W240",
        description: "Extra large premium cashews, perfect for gifting. The finest \
                      grade with exceptional size and quality.",
        price: 2200,
        category: "premium",
        image_dir: "premium-w240",
        stock: 800,
        is_featured: true,
    },
    SeedProduct {
        id: "butter",
        name: "Cashew Butter",
        description: "Creamy, delicious cashew butter made from 100% premium cashews. \
                      No added oils or preservatives.",
        price: 1800,
        category: "butter",
        image_dir: "cashew-butter",
        stock: 1200,
        is_featured: false,
    },
];

/// The seed catalog, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    SEED.iter()
        .map(|p| Product {
            id: ProductId::new(p.id),
            name: p.name.to_string(),
            description: p.description.to_string(),
            price: Price::from_rupees(p.price),
            category: p.category.to_string(),
            weight: "25kg to 250kg".to_string(),
            image: format!("/images/products/{}/1.png", p.image_dir),
            images: (1..=4)
                .map(|n| format!("/images/products/{}/{n}.png", p.image_dir))
                .collect(),
            stock: p.stock,
            is_featured: p.is_featured,
            is_archived: false,
            created_at: None,
            updated_at: None,
        })
        .collect()
}
