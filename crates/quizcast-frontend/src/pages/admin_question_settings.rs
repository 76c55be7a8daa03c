use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::data::{AnswerChoice, ClientEvent, ServerEvent};

use crate::components::ConnectionIndicator;
use crate::hooks::{use_server_event, use_socket};
use crate::routes::Route;

#[function_component(AdminQuestionSettingsPage)]
pub fn admin_question_settings_page() -> Html {
    let socket = use_socket();
    let navigator = use_navigator().expect("rendered inside a Router");
    let timer_input = use_state(|| "20".to_string());
    let answer = use_state(|| AnswerChoice::A);
    let error_msg = use_state(|| None::<String>);

    {
        let navigator = navigator.clone();
        let error_msg = error_msg.clone();
        use_server_event(move |event| {
            if let ServerEvent::QuestionSettingsAck(ack) = event {
                if ack.is_success() {
                    navigator.push(&Route::AdminStats);
                } else {
                    error_msg.set(Some(ack.reason.clone()));
                }
            }
        });
    }

    let on_timer = {
        let timer_input = timer_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                timer_input.set(input.value());
            }
        })
    };

    let on_answer = {
        let answer = answer.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(choice) = AnswerChoice::from_letter(&select.value()) {
                    answer.set(choice);
                }
            }
        })
    };

    let launch = {
        let send = socket.send.clone();
        let timer_input = timer_input.clone();
        let answer = answer.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |_: MouseEvent| {
            match timer_input.trim().parse::<u32>() {
                Ok(timer) if timer > 0 => {
                    error_msg.set(None);
                    send.emit(ClientEvent::SetQuestionSettings {
                        timer,
                        answer: *answer,
                    });
                }
                _ => error_msg.set(Some("Timer value must be a positive number".to_string())),
            }
        })
    };

    html! {
        <div class="p-8 max-w-md mx-auto">
            <h1 class="text-2xl font-bold mb-1">{ "Next question" }</h1>
            <p class="text-gray-600 mb-6">
                { "Read the question out loud, set the timer and the right answer, then launch." }
            </p>

            <div class="space-y-3">
                <label class="block text-sm font-medium text-gray-700">
                    { "Seconds to answer" }
                    <input
                        type="number"
                        min="1"
                        class="mt-1 w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*timer_input).clone()}
                        oninput={on_timer}
                    />
                </label>
                <label class="block text-sm font-medium text-gray-700">
                    { "Correct answer" }
                    <select
                        class="mt-1 w-full px-3 py-2 border border-gray-300 rounded bg-white focus:outline-none focus:ring-2 focus:ring-blue-500"
                        onchange={on_answer}
                    >
                        {
                            [AnswerChoice::A, AnswerChoice::B, AnswerChoice::C, AnswerChoice::D]
                                .into_iter()
                                .map(|choice| html! {
                                    <option
                                        value={choice.letter()}
                                        selected={*answer == choice}
                                    >
                                        { choice.letter() }
                                    </option>
                                }).collect::<Html>()
                        }
                    </select>
                </label>
                <button
                    class="w-full bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 cursor-pointer"
                    onclick={launch}
                >
                    { "Launch question" }
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
