//! `tienda browse` - interactive storefront session in the terminal.
//!
//! Drives a `Storefront` the way the web page does: one user action at a
//! time, rendering the derived state after each mutation.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use tienda_commerce::catalog::Product;
use tienda_commerce::query::SortMode;
use tienda_storefront::pages::{ServiceKind, TimeSlot};
use tienda_storefront::Storefront;

use crate::context::Context;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Start on the catalog page with this category selected
    #[arg(long)]
    pub categoria: Option<String>,
}

pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut store = Storefront::new(ctx.catalog.clone());

    // Entering through a category link seeds the filter, like the URL does.
    match &args.categoria {
        Some(categoria) => store.visit(&format!("/catalogo?categoria={}", categoria)),
        None => store.visit("/catalogo"),
    }

    ctx.output.header(&ctx.config.store_name);
    ctx.output
        .info(&format!("Contacto: {}", ctx.config.whatsapp));

    let theme = ColorfulTheme::default();
    loop {
        let cart_label = format!("Ver carrito ({})", store.cart.total_items());
        let actions = [
            "Ver productos",
            "Buscar",
            "Filtrar por categor\u{ed}a",
            "Ordenar",
            cart_label.as_str(),
            "Finalizar compra",
            "Reservar turno",
            "Salir",
        ];

        let choice = Select::with_theme(&theme)
            .with_prompt("\u{bf}Qu\u{e9} quieres hacer?")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => show_products(&mut store, ctx)?,
            1 => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Buscar productos")
                    .allow_empty(true)
                    .interact_text()?;
                store.catalog_page.set_search(text);
                show_products(&mut store, ctx)?;
            }
            2 => {
                pick_category(&mut store, ctx)?;
                show_products(&mut store, ctx)?;
            }
            3 => {
                let labels: Vec<&str> = SortMode::ALL.iter().map(|m| m.display_name()).collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Ordenar por")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                store.catalog_page.set_sort(SortMode::ALL[picked]);
                show_products(&mut store, ctx)?;
            }
            4 => show_cart(&mut store, ctx)?,
            5 => checkout(&mut store, ctx)?,
            6 => reserve(&mut store, ctx)?,
            _ => {
                ctx.output.info("\u{a1}Hasta pronto!");
                return Ok(());
            }
        }
    }
}

/// Render the filtered listing and let the shopper add something.
fn show_products(store: &mut Storefront, ctx: &Context) -> Result<()> {
    let results = store.visible_products();
    ctx.output
        .header(&format!("{} productos encontrados", results.total()));

    if results.is_empty() {
        ctx.output
            .info("No se encontraron productos. Intenta con otros filtros.");
        return Ok(());
    }

    let mut labels: Vec<String> = results.items.iter().map(|p| product_label(p)).collect();
    let ids: Vec<_> = results.items.iter().map(|p| p.id.clone()).collect();
    labels.push("Volver".to_string());

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Agregar al carrito")
        .items(&labels)
        .default(0)
        .interact()?;

    if picked < ids.len() {
        if store.add_to_cart(&ids[picked]) {
            ctx.output.success(&format!(
                "Agregado. Carrito: {} \u{b7} {}",
                store.cart.total_items(),
                store.cart.totals().total.display()
            ));
        } else {
            ctx.output.warn("Sin stock disponible para ese producto");
        }
    }
    Ok(())
}

/// One line per product, the way the listing card summarizes it.
fn product_label(product: &Product) -> String {
    let mut label = format!(
        "{} - {} \u{2605}{:.1} ({})",
        product.name,
        product.price.display(),
        product.rating,
        product.reviews
    );
    if let Some(original) = product.original_price {
        if product.is_on_sale() {
            label.push_str(&format!(" [antes {}]", original.display()));
        }
    }
    if product.is_new {
        label.push_str(" [Nuevo]");
    }
    if product.is_bestseller {
        label.push_str(" [M\u{e1}s vendido]");
    }
    if !product.is_in_stock() {
        label.push_str(" [Agotado]");
    } else if product.is_low_stock() {
        label.push_str(&format!(" [\u{a1}\u{da}ltimas {}!]", product.stock));
    }
    label
}

fn pick_category(store: &mut Storefront, _ctx: &Context) -> Result<()> {
    let mut labels: Vec<String> = store
        .catalog()
        .categories
        .iter()
        .map(|c| c.name.clone())
        .collect();
    labels.push("Todas".to_string());

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Categor\u{ed}a")
        .items(&labels)
        .default(labels.len() - 1)
        .interact()?;

    if picked < store.catalog().categories.len() {
        let id = store.catalog().categories[picked].id.clone();
        store.catalog_page.set_category(id);
    } else {
        store.catalog_page.clear_category();
    }
    Ok(())
}

/// The cart drawer: list lines, adjust quantities, remove.
fn show_cart(store: &mut Storefront, ctx: &Context) -> Result<()> {
    store.cart.set_cart_open(true);

    loop {
        if store.cart.cart().is_empty() {
            ctx.output
                .info("Tu carrito est\u{e1} vac\u{ed}o. \u{a1}Agrega productos y empieza a comprar!");
            store.cart.set_cart_open(false);
            return Ok(());
        }

        ctx.output.header("Tu Carrito");
        for line in store.cart.lines() {
            ctx.output.list_item(&format!(
                "{} x{} \u{b7} {}",
                line.product.name,
                line.quantity,
                line.line_total().display()
            ));
        }
        let totals = store.cart.totals();
        ctx.output.kv("Subtotal", &totals.subtotal.display());
        ctx.output.kv("Env\u{ed}o", "Gratis");
        ctx.output
            .kv("Total", &style(totals.total.display()).bold().to_string());

        let mut labels: Vec<String> = store
            .cart
            .lines()
            .iter()
            .map(|l| format!("Cambiar cantidad de {}", l.product.name))
            .collect();
        let ids: Vec<_> = store.cart.lines().iter().map(|l| l.product.id.clone()).collect();
        labels.push("Seguir comprando".to_string());

        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Carrito")
            .items(&labels)
            .default(labels.len() - 1)
            .interact()?;

        if picked >= ids.len() {
            store.cart.set_cart_open(false);
            return Ok(());
        }

        let quantity: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Nueva cantidad (0 elimina)")
            .interact_text()?;
        store.cart.update_quantity(&ids[picked], quantity);
    }
}

/// The checkout page.
fn checkout(store: &mut Storefront, ctx: &Context) -> Result<()> {
    if store.cart.cart().is_empty() {
        ctx.output.warn("Tu carrito est\u{e1} vac\u{ed}o");
        return Ok(());
    }

    store.visit("/checkout");
    let theme = ColorfulTheme::default();

    store.checkout.form.name = Input::with_theme(&theme)
        .with_prompt("Nombre completo")
        .interact_text()?;
    store.checkout.form.phone = Input::with_theme(&theme)
        .with_prompt("Tel\u{e9}fono")
        .interact_text()?;
    store.checkout.form.email = Input::with_theme(&theme)
        .with_prompt("Correo")
        .interact_text()?;
    store.checkout.form.address = Input::with_theme(&theme)
        .with_prompt("Direcci\u{f3}n")
        .interact_text()?;
    store.checkout.form.city = Input::with_theme(&theme)
        .with_prompt("Ciudad")
        .interact_text()?;
    store.checkout.form.note = Input::with_theme(&theme)
        .with_prompt("Nota para la entrega (opcional)")
        .allow_empty(true)
        .interact_text()?;

    let totals = store.cart.totals();
    let confirmed = Confirm::with_theme(&theme)
        .with_prompt(format!(
            "Confirmar compra de {} art\u{ed}culos por {}",
            totals.item_count,
            totals.total.display()
        ))
        .default(true)
        .interact()?;

    if !confirmed {
        ctx.output.info("Compra cancelada; tu carrito sigue igual");
        return Ok(());
    }

    match store.place_order() {
        Ok(order) => {
            ctx.output
                .success(&format!("\u{a1}Pedido {} confirmado!", order.id));
            ctx.output.kv("Total", &order.totals.total.display());
            ctx.output.kv(
                "Entrega",
                &format!("{}, {}", order.customer.address, order.customer.city),
            );
        }
        Err(e) => ctx.output.error(&e.to_string()),
    }
    Ok(())
}

/// The reservation page.
fn reserve(store: &mut Storefront, ctx: &Context) -> Result<()> {
    store.visit("/reservas");
    let theme = ColorfulTheme::default();

    store.reservations.form.name = Input::with_theme(&theme)
        .with_prompt("Nombre")
        .interact_text()?;
    store.reservations.form.phone = Input::with_theme(&theme)
        .with_prompt("Tel\u{e9}fono")
        .interact_text()?;

    let service_labels: Vec<&str> = ServiceKind::ALL.iter().map(|s| s.display_name()).collect();
    let service = Select::with_theme(&theme)
        .with_prompt("Servicio")
        .items(&service_labels)
        .default(0)
        .interact()?;
    store.reservations.form.service = ServiceKind::ALL[service];

    let date_text: String = Input::with_theme(&theme)
        .with_prompt("Fecha (AAAA-MM-DD)")
        .interact_text()?;
    store.reservations.form.date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").ok();

    let slot_labels: Vec<&str> = TimeSlot::ALL.iter().map(|s| s.display_name()).collect();
    let slot = Select::with_theme(&theme)
        .with_prompt("Horario")
        .items(&slot_labels)
        .default(0)
        .interact()?;
    store.reservations.form.slot = TimeSlot::ALL[slot];

    let today = Local::now().date_naive();
    match store.reservations.submit(today) {
        Ok(reservation) => {
            ctx.output.success(&format!(
                "Turno {} confirmado: {} el {} a las {}",
                reservation.id,
                reservation.service.display_name(),
                reservation.date,
                reservation.slot.display_name()
            ));
            ctx.output.info(&format!(
                "Te contactaremos por WhatsApp al confirmar: {}",
                ctx.config.whatsapp
            ));
        }
        Err(e) => ctx.output.error(&e.to_string()),
    }
    Ok(())
}
