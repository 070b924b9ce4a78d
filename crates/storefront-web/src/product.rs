//! Catalog

/// The single product sold on the landing page
pub struct Product {
    pub name: &'static str,
    pub tagline: &'static str,
    /// Decimal string, sent as-is so the price never passes through `f64`
    pub price: &'static str,
    pub price_label: &'static str,
}

pub static ENEM_TURBO: Product = Product {
    name: "ENEM Turbo",
    tagline: "Guia completo em PDF com questões comentadas",
    price: "99.90",
    price_label: "R$ 99,90",
};
