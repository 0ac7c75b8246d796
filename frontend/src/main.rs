use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::booking_modal::BookingModal;
use hooks::use_booking_content::use_booking_content;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let content = use_booking_content(&api_client);
    let is_modal_open = use_state(|| false);

    let open_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::debug_with_component("app", "Booking modal opened");
            is_modal_open.set(true);
        })
    };

    let close_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_: ()| is_modal_open.set(false))
    };

    html! {
        <main class="booking-page">
            <button type="button" class="btn btn-book-now" onclick={open_modal}>
                {"Book your stay"}
            </button>
            <BookingModal
                is_open={*is_modal_open}
                on_close={close_modal}
                content={content}
            />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
