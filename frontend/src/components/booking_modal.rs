//! Booking modal: reviews header, adults and promo inputs, the availability
//! calendar and the BOOK button that opens the external booking engine.
//!
//! The form is mounted only while the modal is open, so closing the modal
//! drops the selection.

use std::rc::Rc;

use shared::formatting::{nights_label, status_class, status_label};
use shared::{AvailabilityStatus, ReviewScore, StayValidation, ADULTS_OPTIONS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::availability_calendar::AvailabilityCalendar;
use crate::hooks::use_booking_content::{BookingContent, LoadedContent};
use crate::hooks::use_booking_selection::{booking_url, use_booking_selection};
use crate::services::date_utils::{short_date_label, today};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub content: BookingContent,
}

/// Text under the calendar
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    Empty,
    Error(String),
    Nights(String),
}

pub fn status_line(validation: Option<&StayValidation>) -> StatusLine {
    match validation {
        Some(StayValidation { error: Some(error), .. }) => StatusLine::Error(error.to_string()),
        Some(StayValidation { nights, error: None }) if *nights > 0 => StatusLine::Nights(nights_label(*nights)),
        _ => StatusLine::Empty,
    }
}

/// "4.9 ⭐ / 1204 Google Reviews"
pub fn review_line(score: &ReviewScore, platform: &str) -> String {
    format!("{} ⭐ / {} {} Reviews", score.rating, score.count, platform)
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    // lock page scrolling while open
    use_effect_with(props.is_open, |is_open| {
        set_body_overflow(if *is_open { "hidden" } else { "unset" });
        || set_body_overflow("unset")
    });

    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = match &props.content {
        BookingContent::Loading => html! {
            <div class="booking-loading">{"Loading availability..."}</div>
        },
        BookingContent::Failed(error) => html! {
            <div class="booking-load-error">
                {"Availability could not be loaded. Please try again later."}
                <small>{error}</small>
            </div>
        },
        BookingContent::Ready(content) => html! {
            <BookingForm content={content.clone()} />
        },
    };

    let background = match &props.content {
        BookingContent::Ready(content) => format!("background-color: {};", content.config.background_color),
        _ => String::new(),
    };

    html! {
        <div class="booking-modal-backdrop" onclick={on_backdrop_click}>
            <div class="booking-modal" style={background} onclick={on_modal_click}>
                <button
                    type="button"
                    class="booking-modal-close"
                    aria-label="Close modal"
                    onclick={on_close_click}
                >
                    {"×"}
                </button>
                {body}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BookingFormProps {
    content: Rc<LoadedContent>,
}

#[function_component(BookingForm)]
fn booking_form(props: &BookingFormProps) -> Html {
    let content = &props.content;
    let config = &content.config;
    let current_day = *use_memo((), |_| today());
    let booking = use_booking_selection(config.default_adults);
    let selection = booking.selection.clone();
    let accent = config.accent_color.clone();

    let validation = selection.validation(config, &content.index);
    let can_book = matches!(&validation, Some(v) if v.is_valid());

    let on_adults_change = {
        let on_adults_change = booking.actions.on_adults_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(adults) = select.value().parse::<u32>() {
                on_adults_change.emit(adults);
            }
        })
    };

    let on_promo_input = {
        let on_promo_code_change = booking.actions.on_promo_code_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_promo_code_change.emit(input.value());
        })
    };

    let on_clear = {
        let clear = booking.actions.clear.clone();
        Callback::from(move |_: MouseEvent| clear.emit(()))
    };

    let on_book = {
        let content = content.clone();
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            match booking_url(
                &content.config,
                &content.index,
                &selection.state,
                *selection.adults,
                &selection.promo_code,
            ) {
                Ok(url) => {
                    Logger::info_with_component("booking_modal", &format!("Opening booking engine: {}", url));
                    open_in_new_tab(&url);
                }
                Err(e) => Logger::warn_with_component("booking_modal", &format!("Booking blocked: {}", e)),
            }
        })
    };

    let selecting_arrival = selection.state.is_selecting_arrival;
    let endpoint_style = |active: bool| {
        if active {
            format!("color: {};", accent)
        } else {
            "color: #6B7280;".to_string()
        }
    };
    let arrival_text = match selection.state.arrival_date {
        Some(date) => format!("Arrival Date: {}", short_date_label(date)),
        None => "Arrival Date".to_string(),
    };
    let departure_text = match selection.state.departure_date {
        Some(date) => format!("Departure Date: {}", short_date_label(date)),
        None => "Departure Date".to_string(),
    };

    let status = match status_line(validation.as_ref()) {
        StatusLine::Error(message) => html! { <p class="booking-status error">{message}</p> },
        StatusLine::Nights(text) => html! { <p class="booking-status">{text}</p> },
        StatusLine::Empty => html! {},
    };

    let book_style = format!(
        "background-color: {}; opacity: {};",
        accent,
        if can_book { "1" } else { "0.5" }
    );

    html! {
        <div class="booking-form">
            <div class="booking-header">
                <div class="booking-reviews">
                    <div>{review_line(&content.reviews.google, "Google")}</div>
                    <div>{review_line(&content.reviews.tripadvisor, "Tripadvisor")}</div>
                </div>
                <img class="booking-logo" src={config.logo_url.clone()} alt="Logo" />
            </div>

            <div class="booking-inputs">
                <label class="booking-field">
                    <span>{"Number of adults"}</span>
                    <select onchange={on_adults_change}>
                        {for ADULTS_OPTIONS.iter().map(|n| html! {
                            <option value={n.to_string()} selected={*n == *selection.adults}>{n.to_string()}</option>
                        })}
                    </select>
                </label>
                <label class="booking-field">
                    <span>{"Promo code"}</span>
                    <input
                        type="text"
                        placeholder="Enter code"
                        value={(*selection.promo_code).clone()}
                        oninput={on_promo_input}
                    />
                </label>
            </div>

            <div class="booking-endpoints">
                <div class={classes!("endpoint", selecting_arrival.then_some("active"))} style={endpoint_style(selecting_arrival)}>
                    {arrival_text}{if selecting_arrival { " →" } else { "" }}
                </div>
                <div class={classes!("endpoint", (!selecting_arrival).then_some("active"))} style={endpoint_style(!selecting_arrival)}>
                    {departure_text}{if !selecting_arrival { " →" } else { "" }}
                </div>
            </div>

            <AvailabilityCalendar
                index={content.index.clone()}
                today={current_day}
                selection={(*selection.state).clone()}
                accent_color={accent.clone()}
                on_day_click={booking.actions.on_day_click.clone()}
            />

            <div class="booking-status-line">{status}</div>

            <div class="booking-legend">
                {for [
                    AvailabilityStatus::Available,
                    AvailabilityStatus::LastRooms,
                    AvailabilityStatus::MinimumStay,
                ].into_iter().map(|status| html! {
                    <div class="legend-item">
                        <span class={classes!("status-dot", status_class(status))}></span>
                        <span>{status_label(status)}</span>
                    </div>
                })}
            </div>

            <div class="booking-actions">
                <button type="button" class="btn btn-secondary" onclick={on_clear}>{"Clear dates"}</button>
                <button
                    type="button"
                    class="btn btn-book"
                    style={book_style}
                    disabled={!can_book}
                    onclick={on_book}
                >
                    {"BOOK"}
                </button>
            </div>
        </div>
    }
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", value);
    }
}

fn open_in_new_tab(url: &str) {
    let opened = web_sys::window()
        .map(|window| window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer"));
    if !matches!(opened, Some(Ok(_))) {
        Logger::error_with_component("booking_modal", "Could not open the booking engine window");
    }
}
