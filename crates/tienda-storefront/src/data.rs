//! Built-in demo catalog.
//!
//! Stands in for the shop's real data source so the CLI and the tests can
//! run against something. Ten products across four categories.

use tienda_commerce::catalog::{Catalog, Category, Product};
use tienda_commerce::ids::{CategoryId, ProductId};
use tienda_commerce::money::Money;

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    original_price: Option<i64>,
    category: &str,
    rating: f64,
    reviews: i64,
    stock: i64,
    is_new: bool,
    is_bestseller: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::pesos(price),
        original_price: original_price.map(Money::pesos),
        category: CategoryId::new(category),
        rating,
        reviews,
        stock,
        is_new,
        is_bestseller,
        image: format!("/img/{}.webp", id),
    }
}

/// The demo catalog.
pub fn demo_catalog() -> Catalog {
    let categories = vec![
        Category::new("celulares", "Celulares").with_position(1),
        Category::new("accesorios", "Accesorios").with_position(2),
        Category::new("audio", "Audio").with_position(3),
        Category::new("wearables", "Wearables").with_position(4),
    ];

    let products = vec![
        product(
            "galaxy-a54",
            "Samsung Galaxy A54 128GB",
            "Pantalla Super AMOLED de 6.4\", c\u{e1}mara de 50MP y bater\u{ed}a para todo el d\u{ed}a",
            1_450_000,
            None,
            "celulares",
            4.6,
            212,
            12,
            false,
            true,
        ),
        product(
            "redmi-note-13",
            "Xiaomi Redmi Note 13",
            "256GB de almacenamiento, carga r\u{e1}pida de 33W",
            899_000,
            Some(990_000),
            "celulares",
            4.4,
            167,
            20,
            true,
            false,
        ),
        product(
            "moto-g84",
            "Motorola Moto G84 5G",
            "Conectividad 5G, pantalla pOLED y sonido Dolby Atmos",
            1_050_000,
            None,
            "celulares",
            4.2,
            98,
            7,
            false,
            false,
        ),
        product(
            "funda-clear",
            "Funda Transparente Reforzada",
            "Esquinas con protecci\u{f3}n anticaidas, compatible con carga inal\u{e1}mbrica",
            45_000,
            Some(60_000),
            "accesorios",
            4.5,
            320,
            40,
            false,
            true,
        ),
        product(
            "cargador-20w",
            "Cargador R\u{e1}pido 20W USB-C",
            "Carga completa en menos de dos horas",
            80_000,
            None,
            "accesorios",
            4.7,
            210,
            35,
            false,
            false,
        ),
        product(
            "vidrio-9h",
            "Vidrio Templado 9H",
            "Protector de pantalla con instalaci\u{f3}n sin burbujas",
            25_000,
            None,
            "accesorios",
            4.3,
            540,
            50,
            true,
            false,
        ),
        product(
            "auriculares-pro",
            "Aud\u{ed}fonos Inal\u{e1}mbricos Pro",
            "Cancelaci\u{f3}n activa de ruido y estuche de carga",
            350_000,
            Some(420_000),
            "audio",
            4.8,
            410,
            15,
            false,
            true,
        ),
        product(
            "parlante-mini",
            "Parlante Bluetooth Mini",
            "Resistente al agua, 12 horas de reproducci\u{f3}n",
            180_000,
            None,
            "audio",
            4.1,
            88,
            0,
            false,
            false,
        ),
        product(
            "smartwatch-fit2",
            "Smartwatch Fit 2",
            "Monitor de ritmo card\u{ed}aco, GPS y 40 modos deportivos",
            420_000,
            None,
            "wearables",
            4.0,
            132,
            18,
            true,
            false,
        ),
        product(
            "banda-go",
            "Banda Inteligente Go",
            "Seguimiento de sue\u{f1}o y notificaciones en pantalla AMOLED",
            150_000,
            None,
            "wearables",
            3.9,
            75,
            22,
            false,
            false,
        ),
    ];

    Catalog::new(products, categories)
}
