use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::data::{ClientEvent, GameSettings, Player, ServerEvent};

use crate::components::ConnectionIndicator;
use crate::hooks::{use_server_event, use_socket};
use crate::routes::Route;
use crate::storage;

#[function_component(PlayerWaitingRoomPage)]
pub fn player_waiting_room_page() -> Html {
    let socket = use_socket();
    let navigator = use_navigator().expect("rendered inside a Router");
    let players = use_state(Vec::<Player>::new);
    let settings = use_state(GameSettings::default);

    // Ask for the room snapshot once on entry
    {
        let send = socket.send.clone();
        use_effect_with((), move |_| send.emit(ClientEvent::GetGameInfo));
    }

    {
        let navigator = navigator.clone();
        let players = players.clone();
        let settings = settings.clone();
        use_server_event(move |event| match event {
            ServerEvent::GameInfo(info) => {
                players.set(info.players.clone());
                settings.set(info.settings);
            }
            ServerEvent::UserJoined { players: roster } => players.set(roster.clone()),
            ServerEvent::BeReady { .. } => navigator.push(&Route::BeReady),
            _ => {}
        });
    }

    let greeting = storage::player_name()
        .map(|name| format!("Welcome, {name}!"))
        .unwrap_or_else(|| "Welcome!".to_string());

    html! {
        <div class="p-8 max-w-xl mx-auto">
            <h1 class="text-2xl font-bold mb-1">{ greeting }</h1>
            <p class="text-gray-600 mb-6">{ "Waiting for the host to start the game..." }</p>

            {
                if let Some(lives) = settings.lives {
                    html! {
                        <p class="mb-4 text-sm text-gray-600">
                            { format!("Everyone starts with {lives} hearts.") }
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            <h2 class="text-lg font-semibold mb-2">
                { format!("Players ({})", players.len()) }
            </h2>
            <ul class="space-y-1 mb-8">
                {
                    players.iter().map(|player| html! {
                        <li class="px-3 py-2 bg-gray-50 border border-gray-200 rounded">
                            { &player.name }
                        </li>
                    }).collect::<Html>()
                }
            </ul>

            <ConnectionIndicator />
        </div>
    }
}
