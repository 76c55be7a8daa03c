use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::data::{ClientEvent, Player, ServerEvent};

use crate::components::ConnectionIndicator;
use crate::hooks::{use_server_event, use_socket};
use crate::routes::Route;

#[function_component(AdminWaitingRoomPage)]
pub fn admin_waiting_room_page() -> Html {
    let socket = use_socket();
    let navigator = use_navigator().expect("rendered inside a Router");
    let players = use_state(Vec::<Player>::new);

    {
        let send = socket.send.clone();
        use_effect_with((), move |_| send.emit(ClientEvent::GetGameInfo));
    }

    {
        let navigator = navigator.clone();
        let players = players.clone();
        use_server_event(move |event| match event {
            ServerEvent::GameInfo(info) => players.set(info.players.clone()),
            ServerEvent::UserJoined { players: roster } => players.set(roster.clone()),
            ServerEvent::LockRoomAck => navigator.push(&Route::AdminQuestionSettings),
            _ => {}
        });
    }

    let start = {
        let send = socket.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(ClientEvent::LockRoom))
    };

    html! {
        <div class="p-8 max-w-xl mx-auto">
            <h1 class="text-2xl font-bold mb-1">{ "Your room is open" }</h1>
            <p class="text-gray-600 mb-6">
                { "Starting the game locks the room; nobody can join afterwards." }
            </p>

            <h2 class="text-lg font-semibold mb-2">
                { format!("Players ({})", players.len()) }
            </h2>
            <ul class="space-y-1 mb-6">
                {
                    players.iter().map(|player| html! {
                        <li class="px-3 py-2 bg-gray-50 border border-gray-200 rounded">
                            { &player.name }
                        </li>
                    }).collect::<Html>()
                }
            </ul>

            <button
                class="bg-green-600 text-white px-6 py-2 rounded hover:bg-green-700 disabled:opacity-50 cursor-pointer"
                onclick={start}
                disabled={players.is_empty()}
            >
                { "Start the game" }
            </button>

            <div class="mt-8">
                <ConnectionIndicator />
            </div>
        </div>
    }
}
