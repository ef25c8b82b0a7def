//! Read-only product catalog shown in the products panel.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One offered service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

impl Product {
    /// Prompt sent to the image service for this product's card.
    #[must_use]
    pub fn image_prompt(&self) -> String {
        format!("{} service visual", self.title)
    }

    #[must_use]
    pub fn image_alt(&self) -> String {
        format!("Visual representation of {} service", self.title)
    }
}

const PRODUCTS: [Product; 3] = [
    Product {
        id: 1,
        title: "Profesyonel Web Tasarım",
        description: "Modern ve responsive web siteleri",
        price: "₺2.500",
    },
    Product {
        id: 2,
        title: "SEO Optimizasyon",
        description: "Arama motorlarında üst sıralara çıkın",
        price: "₺1.200",
    },
    Product {
        id: 3,
        title: "E-Ticaret Çözümleri",
        description: "Online mağazanızı kuruyoruz",
        price: "₺4.000",
    },
];

/// The catalog, in display order.
#[must_use]
pub fn products() -> &'static [Product] {
    &PRODUCTS
}
