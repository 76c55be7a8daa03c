use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::data::{AnswerChoice, AnswerTally, ClientEvent, ServerEvent};

use crate::components::{BarChart, ChartSeries, ConnectionIndicator};
use crate::hooks::{use_server_event, use_socket};
use crate::routes::Route;

#[function_component(AdminStatsPage)]
pub fn admin_stats_page() -> Html {
    let socket = use_socket();
    let navigator = use_navigator().expect("rendered inside a Router");
    let tally = use_state(|| None::<AnswerTally>);

    // Pull the current tallies in case answers landed before this screen
    {
        let send = socket.send.clone();
        use_effect_with((), move |_| send.emit(ClientEvent::GetAnswers));
    }

    {
        let navigator = navigator.clone();
        let tally = tally.clone();
        use_server_event(move |event| match event {
            ServerEvent::UpdateAnswers(answers) | ServerEvent::Answers(answers) => {
                tally.set(Some(*answers))
            }
            ServerEvent::Invalidate => navigator.push(&Route::AdminQuestionSettings),
            ServerEvent::EndGame => navigator.push(&Route::Leaderboard),
            _ => {}
        });
    }

    let next_question = {
        let send = socket.send.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            send.emit(ClientEvent::NextQuestion);
            navigator.push(&Route::AdminQuestionSettings);
        })
    };

    let invalidate = {
        let send = socket.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(ClientEvent::Invalidate))
    };

    let end_game = {
        let send = socket.send.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            send.emit(ClientEvent::EndGame);
            navigator.push(&Route::Leaderboard);
        })
    };

    let show_leaderboard = {
        let send = socket.send.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            send.emit(ClientEvent::ShowLeaderboard);
            navigator.push(&Route::Leaderboard);
        })
    };

    let labels: Vec<AttrValue> = AnswerChoice::ALL
        .iter()
        .map(|choice| {
            AttrValue::from(match choice {
                AnswerChoice::Skip => "No answer",
                other => other.letter(),
            })
        })
        .collect();

    html! {
        <div class="p-8 max-w-2xl mx-auto">
            <h1 class="text-2xl font-bold mb-1">{ "Live answers" }</h1>

            {
                if let Some(answers) = tally.as_ref() {
                    let alive = ChartSeries {
                        name: AttrValue::from("Still in"),
                        fill: AttrValue::from("#16a34a"),
                        values: AnswerChoice::ALL.iter().map(|c| answers.alive_for(*c)).collect(),
                    };
                    let dead = ChartSeries {
                        name: AttrValue::from("Out of hearts"),
                        fill: AttrValue::from("#9ca3af"),
                        values: AnswerChoice::ALL.iter().map(|c| answers.dead_for(*c)).collect(),
                    };

                    html! {
                        <>
                            <p class="text-gray-600 mb-6">
                                { format!("{} of {} players answered", answers.answered(), answers.players) }
                            </p>
                            <div class="mb-8 overflow-x-auto">
                                <BarChart labels={labels.clone()} series={vec![alive, dead]} />
                            </div>
                        </>
                    }
                } else {
                    html! {
                        <p class="text-gray-500 mb-8">{ "No answers yet." }</p>
                    }
                }
            }

            <div class="flex flex-wrap gap-3 mb-8">
                <button
                    class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 cursor-pointer"
                    onclick={next_question}
                >
                    { "Next question" }
                </button>
                <button
                    class="bg-yellow-500 text-white px-4 py-2 rounded hover:bg-yellow-600 cursor-pointer"
                    onclick={invalidate}
                >
                    { "Invalidate round" }
                </button>
                <button
                    class="bg-purple-600 text-white px-4 py-2 rounded hover:bg-purple-700 cursor-pointer"
                    onclick={show_leaderboard}
                >
                    { "Show leaderboard" }
                </button>
                <button
                    class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-700 cursor-pointer"
                    onclick={end_game}
                >
                    { "End game" }
                </button>
            </div>

            <ConnectionIndicator />
        </div>
    }
}
