//! Session state and page view-models for the Tienda storefront.
//!
//! Everything here is synchronous and single-threaded: a UI event comes
//! in, one method mutates the session, and the caller re-renders from the
//! derived state. The domain rules live in `tienda-commerce`; this crate
//! adds the state that only exists while a shopper has the page open.

pub mod data;
pub mod nav;
pub mod pages;
pub mod session;
pub mod store;

pub use nav::{NavState, Route};
pub use session::Storefront;
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::data::demo_catalog;
    pub use crate::nav::{NavState, Route};
    pub use crate::pages::{
        CatalogPage, CheckoutForm, CheckoutPage, Order, Reservation, ReservationForm,
        ReservationPage, ServiceKind, TimeSlot, PRICE_CEILING_MAX,
    };
    pub use crate::session::Storefront;
    pub use crate::store::CartStore;
}
