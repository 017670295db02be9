//! Page view-models.
//!
//! One module per page of the storefront: the catalog listing, the
//! checkout form, and the reservation booking flow.

mod catalog;
mod checkout;
mod reservation;

pub use catalog::{CatalogPage, PRICE_CEILING_MAX};
pub use checkout::{CheckoutForm, CheckoutPage, Order};
pub use reservation::{
    Reservation, ReservationForm, ReservationPage, ServiceKind, TimeSlot,
};
