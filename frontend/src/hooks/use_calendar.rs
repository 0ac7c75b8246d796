use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use shared::calendar::{generate_calendar_month, month_heading, next_month, previous_month};
use shared::CalendarMonth;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_booking_content::IndexHandle;
use crate::services::logging::Logger;

pub struct UseCalendarResult {
    pub heading: String,
    /// `None` only if the grid could not be built
    pub calendar_data: Option<Rc<CalendarMonth>>,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

/// Month navigation starting at today's month; the grid is rebuilt when the
/// month, the index or today changes
#[hook]
pub fn use_calendar(index: IndexHandle, today: NaiveDate) -> UseCalendarResult {
    let view_month = use_state(move || (today.year(), today.month()));

    let calendar_data = use_memo(
        (*view_month, index, today),
        |((year, month), index, today)| match generate_calendar_month(*year, *month, index, *today) {
            Ok(grid) => Some(Rc::new(grid)),
            Err(e) => {
                Logger::error_with_component("use_calendar", &e.to_string());
                None
            }
        },
    );

    let prev_month = {
        let view_month = view_month.clone();
        use_callback(*view_month, move |_: MouseEvent, &(year, month)| {
            view_month.set(previous_month(year, month));
        })
    };

    let next_month = {
        let view_month = view_month.clone();
        use_callback(*view_month, move |_: MouseEvent, &(year, month)| {
            view_month.set(next_month(year, month));
        })
    };

    let (year, month) = *view_month;
    UseCalendarResult {
        heading: month_heading(year, month),
        calendar_data: (*calendar_data).clone(),
        actions: UseCalendarActions {
            prev_month,
            next_month,
        },
    }
}
