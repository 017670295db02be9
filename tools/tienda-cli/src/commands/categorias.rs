//! `tienda categorias` - list the catalog's categories.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::context::Context;

/// Arguments for the categorias command.
#[derive(Args)]
pub struct CategoriasArgs {}

#[derive(Serialize)]
struct CategoryRow<'a> {
    id: &'a str,
    name: &'a str,
    products: usize,
}

pub fn run(_args: CategoriasArgs, ctx: &Context) -> Result<()> {
    let rows: Vec<CategoryRow<'_>> = ctx
        .catalog
        .categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id.as_str(),
            name: &c.name,
            products: ctx.catalog.category_count(&c.id),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categor\u{ed}as");
    for row in rows {
        ctx.output.list_item(&format!(
            "{} ({} productos) -> /catalogo?categoria={}",
            row.name, row.products, row.id
        ));
    }

    Ok(())
}
