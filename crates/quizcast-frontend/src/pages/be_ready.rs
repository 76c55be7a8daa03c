use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::data::{ClientEvent, PlayerInfo, ServerEvent};

use crate::components::{ConnectionIndicator, HeartMeter};
use crate::hooks::{use_server_event, use_socket};
use crate::routes::Route;
use crate::storage;

#[function_component(PlayerBeReadyPage)]
pub fn player_be_ready_page() -> Html {
    let socket = use_socket();
    let navigator = use_navigator().expect("rendered inside a Router");
    let info = use_state(|| None::<PlayerInfo>);

    {
        let send = socket.send.clone();
        use_effect_with((), move |_| send.emit(ClientEvent::GetPlayerInfo));
    }

    {
        let navigator = navigator.clone();
        let info = info.clone();
        use_server_event(move |event| match event {
            ServerEvent::PlayerInfo(player_info) => info.set(Some(*player_info)),
            ServerEvent::QuestionStart { timer } => {
                storage::remember_round_timer(*timer);
                navigator.push(&Route::Quizz);
            }
            _ => {}
        });
    }

    html! {
        <div class="p-8 max-w-md mx-auto text-center">
            {
                if let Some(player_info) = info.as_ref() {
                    html! {
                        <>
                            <h1 class="text-4xl font-bold mb-4">
                                { format!("Question {}", player_info.question) }
                            </h1>
                            <div class="flex justify-center mb-6">
                                <HeartMeter total={player_info.hearts} left={player_info.left} />
                            </div>
                        </>
                    }
                } else {
                    html! { <h1 class="text-4xl font-bold mb-4">{ "Get ready!" }</h1> }
                }
            }
            <p class="text-gray-600 mb-8 animate-pulse">
                { "The next question is about to start..." }
            </p>
            <div class="flex justify-center">
                <ConnectionIndicator />
            </div>
        </div>
    }
}
