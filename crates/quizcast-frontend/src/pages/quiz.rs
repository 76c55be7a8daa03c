use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::data::{AnswerChoice, ClientEvent, ServerEvent};

use crate::hooks::{use_server_event, use_socket};
use crate::routes::Route;
use crate::storage;

// Used when this screen is reached without an announced round timer
const FALLBACK_TIMER: u32 = 20;

struct Countdown {
    left: u32,
}

enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => Rc::new(Self {
                left: self.left.saturating_sub(1),
            }),
        }
    }
}

#[function_component(PlayerQuizPage)]
pub fn player_quiz_page() -> Html {
    let socket = use_socket();
    let navigator = use_navigator().expect("rendered inside a Router");
    let countdown = use_reducer(|| Countdown {
        left: storage::take_round_timer().unwrap_or(FALLBACK_TIMER),
    });
    let answered = use_state(|| false);

    {
        let navigator = navigator.clone();
        use_server_event(move |event| {
            if let ServerEvent::UserAnswer(outcome) = event {
                storage::remember_outcome(outcome);
                navigator.push(&Route::Stats);
            }
        });
    }

    {
        let countdown = countdown.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(1_000, move || countdown.dispatch(CountdownAction::Tick));
            move || drop(interval)
        });
    }

    // Running out of time counts as a skipped answer
    {
        let send = socket.send.clone();
        let answered = answered.clone();
        use_effect_with((countdown.left, *answered), move |(left, done)| {
            if *left == 0 && !done {
                send.emit(ClientEvent::UserAnswer {
                    answer: AnswerChoice::Skip,
                });
                answered.set(true);
            }
        });
    }

    let pick = {
        let send = socket.send.clone();
        let answered = answered.clone();
        Callback::from(move |choice: AnswerChoice| {
            if *answered {
                return;
            }
            answered.set(true);
            send.emit(ClientEvent::UserAnswer { answer: choice });
        })
    };

    html! {
        <div class="p-8 max-w-xl mx-auto text-center">
            <div class="text-6xl font-bold mb-2">{ countdown.left.to_string() }</div>
            <p class="text-gray-600 mb-8">
                { if *answered { "Answer locked in, waiting for the result..." } else { "Pick your answer!" } }
            </p>

            <div class="grid grid-cols-2 gap-4">
                {
                    [
                        (AnswerChoice::A, "bg-red-600 hover:bg-red-700"),
                        (AnswerChoice::B, "bg-blue-600 hover:bg-blue-700"),
                        (AnswerChoice::C, "bg-yellow-500 hover:bg-yellow-600"),
                        (AnswerChoice::D, "bg-green-600 hover:bg-green-700"),
                    ].into_iter().map(|(choice, color)| {
                        let pick = pick.clone();
                        let onclick = Callback::from(move |_: MouseEvent| pick.emit(choice));
                        html! {
                            <button
                                class={classes!(
                                    "px-6", "py-10", "rounded", "text-white", "text-3xl",
                                    "font-bold", "cursor-pointer", "disabled:opacity-50", color
                                )}
                                onclick={onclick}
                                disabled={*answered}
                            >
                                { choice.letter() }
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
