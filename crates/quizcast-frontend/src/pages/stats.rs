use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::data::ServerEvent;

use crate::components::{ConnectionIndicator, HeartMeter};
use crate::hooks::use_server_event;
use crate::routes::Route;
use crate::storage;

#[function_component(PlayerStatsPage)]
pub fn player_stats_page() -> Html {
    let navigator = use_navigator().expect("rendered inside a Router");
    let outcome = use_memo((), |_| storage::take_outcome());

    {
        let navigator = navigator.clone();
        use_server_event(move |event| match event {
            ServerEvent::NextQuestion => navigator.push(&Route::BeReady),
            ServerEvent::EndGame | ServerEvent::ShowLeaderboard => {
                navigator.push(&Route::Leaderboard)
            }
            _ => {}
        });
    }

    html! {
        <div class="p-8 max-w-md mx-auto text-center">
            {
                if let Some(outcome) = outcome.as_ref() {
                    html! {
                        <>
                            {
                                if outcome.correct {
                                    html! {
                                        <h1 class="text-4xl font-bold text-green-600 mb-4">
                                            { "Correct!" }
                                        </h1>
                                    }
                                } else {
                                    html! {
                                        <>
                                            <h1 class="text-4xl font-bold text-red-600 mb-2">
                                                { "Wrong!" }
                                            </h1>
                                            {
                                                if let Some(answer) = outcome.answer {
                                                    html! {
                                                        <p class="text-gray-600 mb-4">
                                                            { format!("The right answer was {}", answer.letter()) }
                                                        </p>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </>
                                    }
                                }
                            }
                            <div class="flex justify-center mb-6">
                                <HeartMeter total={outcome.hearts} left={outcome.left} />
                            </div>
                        </>
                    }
                } else {
                    html! {
                        <h1 class="text-2xl font-bold mb-4">{ "Round over" }</h1>
                    }
                }
            }
            <p class="text-gray-600 mb-8 animate-pulse">
                { "Waiting for the next question..." }
            </p>
            <div class="flex justify-center">
                <ConnectionIndicator />
            </div>
        </div>
    }
}
