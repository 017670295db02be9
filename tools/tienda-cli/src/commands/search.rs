//! `tienda search` - run one catalog query and print the results.

use anyhow::Result;
use clap::Args;

use tienda_commerce::ids::CategoryId;
use tienda_commerce::money::Money;
use tienda_commerce::query::{run_query, ProductQuery, SortMode};

use crate::context::Context;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to match against product names and descriptions
    pub query: Option<String>,

    /// Only show products in this category
    #[arg(long)]
    pub categoria: Option<String>,

    /// Price ceiling in pesos
    #[arg(long)]
    pub precio_max: Option<i64>,

    /// Sort order: relevancia, precio-menor, precio-mayor, valorados, nuevos
    #[arg(long, default_value = "relevancia")]
    pub orden: String,
}

pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut query = ProductQuery::new().with_sort(SortMode::from_str(&args.orden));
    if let Some(text) = args.query {
        query.search = text;
    }
    if let Some(categoria) = args.categoria {
        let category_id = CategoryId::new(categoria);
        if !ctx.catalog.has_category(&category_id) {
            ctx.output
                .warn(&format!("la categor\u{ed}a '{}' no existe", category_id));
        }
        query.category = Some(category_id);
    }
    if let Some(pesos) = args.precio_max {
        query = query.with_max_price(Money::pesos(pesos));
    }

    let results = run_query(&ctx.catalog.products, &query);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output
        .header(&format!("{} productos encontrados", results.len()));

    if results.is_empty() {
        ctx.output.info("Intenta con otros filtros o t\u{e9}rminos de b\u{fa}squeda");
        return Ok(());
    }

    let widths = [34, 14, 8, 10];
    ctx.output
        .table_row(&["Producto", "Precio", "Rating", "Stock"], &widths);
    for product in results {
        let stock = if !product.is_in_stock() {
            "agotado".to_string()
        } else if product.is_low_stock() {
            format!("\u{a1}{} restantes!", product.stock)
        } else {
            product.stock.to_string()
        };
        ctx.output.table_row(
            &[
                &product.name,
                &product.price.display(),
                &format!("{:.1}", product.rating),
                &stock,
            ],
            &widths,
        );
    }

    Ok(())
}
