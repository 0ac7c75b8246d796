use chrono::NaiveDate;
use shared::calendar::WEEKDAY_LABELS;
use shared::formatting::{format_price, status_class, status_label};
use shared::{CalendarDay, CalendarDayType, SelectionState};
use yew::prelude::*;

use crate::hooks::use_booking_content::IndexHandle;
use crate::hooks::use_calendar::use_calendar;

#[derive(Properties, PartialEq)]
pub struct AvailabilityCalendarProps {
    pub index: IndexHandle,
    pub today: NaiveDate,
    pub selection: SelectionState,
    pub accent_color: String,
    pub on_day_click: Callback<CalendarDay>,
}

/// CSS classes of a month-day cell
pub fn day_classes(day: &CalendarDay, selection: &SelectionState) -> Vec<&'static str> {
    let mut classes = vec!["calendar-day"];
    if day.is_disabled {
        classes.push("disabled");
    }
    if day.is_blocked {
        classes.push("blocked");
    }
    if let Some(date) = day.date {
        if selection.is_selected(date) {
            classes.push("selected");
        } else if selection.is_in_range(date) {
            classes.push("in-range");
        }
    }
    classes
}

#[function_component(AvailabilityCalendar)]
pub fn availability_calendar(props: &AvailabilityCalendarProps) -> Html {
    let calendar = use_calendar(props.index.clone(), props.today);

    let accent_style = format!("color: {};", props.accent_color);

    let grid = match &calendar.calendar_data {
        Some(month) => html! {
            <div class="calendar-grid">
                {for month.days.iter().map(|day| render_day(day, props))}
            </div>
        },
        None => html! {
            <div class="calendar-error">{"Calendar unavailable"}</div>
        },
    };

    html! {
        <div class="availability-calendar">
            <div class="calendar-nav">
                <button
                    type="button"
                    class="calendar-nav-button"
                    aria-label="Previous month"
                    onclick={calendar.actions.prev_month.clone()}
                >
                    {"‹"}
                </button>
                <h3 class="calendar-month-heading" style={accent_style}>{&calendar.heading}</h3>
                <button
                    type="button"
                    class="calendar-nav-button"
                    aria-label="Next month"
                    onclick={calendar.actions.next_month.clone()}
                >
                    {"›"}
                </button>
            </div>

            <div class="calendar-weekdays">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="calendar-weekday">{*label}</div>
                })}
            </div>

            {grid}
        </div>
    }
}

fn render_day(day: &CalendarDay, props: &AvailabilityCalendarProps) -> Html {
    if day.day_type == CalendarDayType::PaddingBefore {
        return html! { <div class="calendar-day empty"></div> };
    }

    let is_selected = day.date.map_or(false, |date| props.selection.is_selected(date));
    let style = if is_selected {
        format!("background-color: {};", props.accent_color)
    } else {
        String::new()
    };

    let onclick = {
        let on_day_click = props.on_day_click.clone();
        let day = day.clone();
        Callback::from(move |_: MouseEvent| {
            if !day.is_disabled {
                on_day_click.emit(day.clone());
            }
        })
    };

    html! {
        <button
            type="button"
            class={classes!(day_classes(day, &props.selection))}
            style={style}
            disabled={day.is_disabled}
            {onclick}
        >
            <span class="day-number">{day.day}</span>
            {match (&day.availability, day.is_disabled) {
                (Some(availability), false) => html! {
                    <>
                        <span class="day-price">
                            {format_price(availability.price, &availability.currency)}
                        </span>
                        <span
                            class={classes!("status-dot", status_class(availability.status))}
                            title={status_label(availability.status)}
                        ></span>
                    </>
                },
                _ => html! {},
            }}
        </button>
    }
}
