use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::data::{ClientEvent, ServerEvent};

use crate::components::{ConnectionIndicator, Icon};
use crate::hooks::{use_server_event, use_socket};
use crate::providers::IconVariant;
use crate::routes::Route;
use crate::storage;

#[function_component(PlayerHomePage)]
pub fn player_home_page() -> Html {
    let socket = use_socket();
    let navigator = use_navigator().expect("rendered inside a Router");
    let username = use_state(String::new);
    let error_msg = use_state(|| None::<String>);

    {
        let navigator = navigator.clone();
        let error_msg = error_msg.clone();
        use_server_event(move |event| {
            if let ServerEvent::JoinRoomAck(ack) = event {
                if ack.is_success() {
                    navigator.push(&Route::Waiting);
                } else {
                    error_msg.set(Some(ack.reason.clone()));
                }
            }
        });
    }

    let on_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let join = {
        let send = socket.send.clone();
        let username = username.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |_: MouseEvent| {
            let name = username.trim().to_string();
            if name.is_empty() {
                error_msg.set(Some("Pick a name first".to_string()));
                return;
            }
            error_msg.set(None);
            storage::remember_player_name(&name);
            send.emit(ClientEvent::JoinRoom { username: name });
        })
    };

    html! {
        <div class="p-8 max-w-md mx-auto">
            <h1 class="text-3xl font-bold mb-2 flex items-center space-x-2">
                <span>{ "Quizcast" }</span>
                <Icon name="heart" variant={IconVariant::Filled} class="w-7 h-7 text-red-500" />
            </h1>
            <p class="text-gray-600 mb-6">{ "Join the room and keep your hearts." }</p>

            <div class="space-y-3">
                <input
                    type="text"
                    class="w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Your name"
                    value={(*username).clone()}
                    oninput={on_input}
                />
                <button
                    class="w-full bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 cursor-pointer"
                    onclick={join}
                >
                    { "Join the game" }
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
