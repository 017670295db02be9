//! Reservation page: booking a service visit ("Reservar Turno").

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tienda_commerce::error::StoreError;
use tienda_commerce::ids::ReservationId;
use tracing::info;

/// Services the shop takes reservations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceKind {
    /// Screen replacement.
    #[default]
    ScreenRepair,
    /// Battery replacement.
    BatterySwap,
    /// General diagnostics.
    Diagnostics,
    /// In-store pickup of an online order.
    Pickup,
}

impl ServiceKind {
    /// All services, in menu order.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::ScreenRepair,
        ServiceKind::BatterySwap,
        ServiceKind::Diagnostics,
        ServiceKind::Pickup,
    ];

    /// Label shown in the service picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::ScreenRepair => "Cambio de pantalla",
            ServiceKind::BatterySwap => "Cambio de bater\u{ed}a",
            ServiceKind::Diagnostics => "Diagn\u{f3}stico general",
            ServiceKind::Pickup => "Recogida en tienda",
        }
    }
}

/// Appointment slots the shop offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeSlot {
    #[default]
    Morning9,
    Morning11,
    Afternoon2,
    Afternoon4,
}

impl TimeSlot {
    /// All slots, in day order.
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning9,
        TimeSlot::Morning11,
        TimeSlot::Afternoon2,
        TimeSlot::Afternoon4,
    ];

    /// Label shown in the slot picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeSlot::Morning9 => "9:00 a.m.",
            TimeSlot::Morning11 => "11:00 a.m.",
            TimeSlot::Afternoon2 => "2:00 p.m.",
            TimeSlot::Afternoon4 => "4:00 p.m.",
        }
    }
}

/// The reservation request form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReservationForm {
    /// Customer name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Which service is being booked.
    pub service: ServiceKind,
    /// Requested date.
    pub date: Option<NaiveDate>,
    /// Requested slot.
    pub slot: TimeSlot,
}

impl ReservationForm {
    /// Validate the form against the current date.
    ///
    /// The shop takes reservations Monday through Saturday, today or
    /// later.
    pub fn validate(&self, today: NaiveDate) -> Result<NaiveDate, StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation("name", "ingresa tu nombre"));
        }
        if self.phone.trim().is_empty() {
            return Err(StoreError::validation("phone", "ingresa un tel\u{e9}fono"));
        }
        let date = self
            .date
            .ok_or_else(|| StoreError::validation("date", "elige una fecha"))?;
        if date < today {
            return Err(StoreError::validation("date", "la fecha ya pas\u{f3}"));
        }
        if date.weekday() == Weekday::Sun {
            return Err(StoreError::validation("date", "los domingos no abrimos"));
        }
        Ok(date)
    }
}

/// A confirmed reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    /// Reservation identifier.
    pub id: ReservationId,
    /// Customer name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Booked service.
    pub service: ServiceKind,
    /// Booked date.
    pub date: NaiveDate,
    /// Booked slot.
    pub slot: TimeSlot,
}

/// Reservation page view state.
#[derive(Debug, Clone, Default)]
pub struct ReservationPage {
    /// The form being filled in.
    pub form: ReservationForm,
    confirmed: Option<Reservation>,
}

impl ReservationPage {
    /// Create an empty reservation page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form, yielding a confirmed reservation.
    pub fn submit(&mut self, today: NaiveDate) -> Result<Reservation, StoreError> {
        let date = self.form.validate(today)?;

        let reservation = Reservation {
            id: ReservationId::generate(),
            name: self.form.name.trim().to_string(),
            phone: self.form.phone.trim().to_string(),
            service: self.form.service,
            date,
            slot: self.form.slot,
        };

        info!(
            reservation = %reservation.id,
            service = reservation.service.display_name(),
            date = %reservation.date,
            "reservation confirmed"
        );
        self.confirmed = Some(reservation.clone());
        Ok(reservation)
    }

    /// The confirmation to show, once booked.
    pub fn confirmed(&self) -> Option<&Reservation> {
        self.confirmed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_for(date: NaiveDate) -> ReservationForm {
        ReservationForm {
            name: "Carlos P\u{e9}rez".to_string(),
            phone: "3001234567".to_string(),
            service: ServiceKind::ScreenRepair,
            date: Some(date),
            slot: TimeSlot::Morning9,
        }
    }

    fn monday() -> NaiveDate {
        // 2026-08-10 is a Monday.
        NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
    }

    #[test]
    fn test_valid_reservation() {
        let mut page = ReservationPage::new();
        page.form = form_for(monday());

        let reservation = page.submit(monday()).unwrap();
        assert_eq!(reservation.service, ServiceKind::ScreenRepair);
        assert_eq!(reservation.date, monday());
        assert!(page.confirmed().is_some());
    }

    #[test]
    fn test_past_date_is_rejected() {
        let mut page = ReservationPage::new();
        page.form = form_for(monday().pred_opt().unwrap().pred_opt().unwrap());
        assert!(page.submit(monday()).is_err());
    }

    #[test]
    fn test_sunday_is_rejected() {
        // 2026-08-16 is a Sunday.
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 16).unwrap();
        let mut page = ReservationPage::new();
        page.form = form_for(sunday);
        assert!(page.submit(monday()).is_err());
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let mut page = ReservationPage::new();
        page.form = form_for(monday());
        page.form.date = None;
        assert!(page.submit(monday()).is_err());
    }

    #[test]
    fn test_missing_contact_is_rejected() {
        let mut page = ReservationPage::new();
        page.form = form_for(monday());
        page.form.phone = String::new();
        assert!(page.submit(monday()).is_err());
    }
}
