use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::data::{ClientEvent, ServerEvent};

use crate::components::ConnectionIndicator;
use crate::hooks::{use_server_event, use_socket};
use crate::routes::Route;

#[function_component(AdminHomePage)]
pub fn admin_home_page() -> Html {
    let socket = use_socket();
    let navigator = use_navigator().expect("rendered inside a Router");
    let lives_input = use_state(|| "3".to_string());
    let error_msg = use_state(|| None::<String>);

    {
        let navigator = navigator.clone();
        let error_msg = error_msg.clone();
        use_server_event(move |event| {
            if let ServerEvent::CreateRoomAck(ack) = event {
                if ack.is_success() {
                    navigator.push(&Route::AdminWaiting);
                } else {
                    error_msg.set(Some(ack.reason.clone()));
                }
            }
        });
    }

    let on_input = {
        let lives_input = lives_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                lives_input.set(input.value());
            }
        })
    };

    let create = {
        let send = socket.send.clone();
        let lives_input = lives_input.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |_: MouseEvent| {
            match lives_input.trim().parse::<u32>() {
                Ok(lives) if lives > 0 => {
                    error_msg.set(None);
                    send.emit(ClientEvent::CreateRoom { lives });
                }
                _ => error_msg.set(Some("Lives must be a positive number".to_string())),
            }
        })
    };

    html! {
        <div class="p-8 max-w-md mx-auto">
            <h1 class="text-3xl font-bold mb-2">{ "Host a game" }</h1>
            <p class="text-gray-600 mb-6">{ "Create the room, then share the link with your players." }</p>

            <div class="space-y-3">
                <label class="block text-sm font-medium text-gray-700">
                    { "Hearts per player" }
                    <input
                        type="number"
                        min="1"
                        class="mt-1 w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*lives_input).clone()}
                        oninput={on_input}
                    />
                </label>
                <button
                    class="w-full bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 cursor-pointer"
                    onclick={create}
                >
                    { "Create room" }
                </button>
            </div>

            {
                if let Some(error) = error_msg.as_ref() {
                    html! {
                        <div class="mt-4 p-4 bg-red-100 text-red-700 rounded">
                            <p>{ error }</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="mt-8">
                <ConnectionIndicator />
            </div>
        </div>
    }
}
