//! Shop form.

use chrono::NaiveTime;

use crate::console::form::{is_blank, FieldErrors, FormMessages, FormModel};
use crate::console::routes;
use crate::rest::resources::{OpeningHours, Shop};

/// Changes a user can make to a shop draft.
///
/// Events addressing an opening-hours slot by index are ignored when the
/// index is out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopEvent {
    /// Renames the shop.
    SetName(String),
    /// Sets the vacation flag.
    SetInVacations(bool),
    /// Appends a Monday 09:00:00 to 18:00:00 slot.
    AddOpeningHours,
    /// Removes the slot at the index.
    RemoveOpeningHours(usize),
    /// Sets the day (1-7) of the slot at the index.
    SetDay(usize, u8),
    /// Sets the opening time of the slot at the index.
    SetOpenAt(usize, NaiveTime),
    /// Sets the closing time of the slot at the index.
    SetCloseAt(usize, NaiveTime),
}

/// Create/edit form for shops.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShopForm;

impl FormModel for ShopForm {
    type Record = Shop;
    type Draft = Shop;
    type Event = ShopEvent;

    const MESSAGES: FormMessages = FormMessages {
        created: "Shop created",
        updated: "Shop updated",
        create_failed: "Could not create the shop",
        update_failed: "Could not update the shop",
        load_failed: "Could not load the shop",
    };

    const LIST_ROUTE: &'static str = routes::HOME;
    const LOAD_FAILURE_ROUTE: Option<&'static str> = Some(routes::HOME);

    fn default_draft() -> Shop {
        Shop::default()
    }

    fn from_record(record: Shop) -> Shop {
        record
    }

    fn apply(mut draft: Shop, event: ShopEvent) -> Shop {
        match event {
            ShopEvent::SetName(name) => draft.name = name,
            ShopEvent::SetInVacations(in_vacations) => draft.in_vacations = in_vacations,
            ShopEvent::AddOpeningHours => draft.opening_hours.push(OpeningHours::default()),
            ShopEvent::RemoveOpeningHours(index) => {
                if index < draft.opening_hours.len() {
                    draft.opening_hours.remove(index);
                }
            }
            ShopEvent::SetDay(index, day) => {
                if let Some(slot) = draft.opening_hours.get_mut(index) {
                    slot.day = day;
                }
            }
            ShopEvent::SetOpenAt(index, time) => {
                if let Some(slot) = draft.opening_hours.get_mut(index) {
                    slot.open_at = time;
                }
            }
            ShopEvent::SetCloseAt(index, time) => {
                if let Some(slot) = draft.opening_hours.get_mut(index) {
                    slot.close_at = time;
                }
            }
        }
        draft
    }

    fn validate(draft: &Shop) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if is_blank(&draft.name) {
            errors.insert("name", "Name is required".to_string());
        }

        if let Some(position) = draft
            .opening_hours
            .iter()
            .position(|slot| !(1..=7).contains(&slot.day))
        {
            errors.insert(
                "openingHours",
                format!("Day must be between 1 and 7 (slot {})", position + 1),
            );
        }

        errors
    }

    fn to_wire(draft: &Shop, id: Option<u64>) -> Shop {
        Shop {
            id,
            ..draft.clone()
        }
    }

    fn detail_route(id: u64) -> String {
        routes::shop(id)
    }
}
