use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::routes::{Flow, RouteTable};

use crate::routes::Route;

fn flow_label(flow: Flow) -> &'static str {
    match flow {
        Flow::Player => "Player",
        Flow::Admin => "Admin",
        Flow::Shared => "Shared",
    }
}

/// Fallback for paths outside the declared route table. Rather than
/// redirecting silently, it shows what went wrong and where to go.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let table = use_context::<RouteTable>().expect("route table is provided at bootstrap");

    html! {
        <div class="p-8 max-w-md mx-auto">
            <h1 class="text-3xl font-bold mb-2">{ "404" }</h1>
            <p class="text-gray-600 mb-6">{ "This screen does not exist." }</p>

            {
                [Flow::Player, Flow::Admin, Flow::Shared].into_iter().map(|flow| html! {
                    <div class="mb-4">
                        <h2 class="text-sm font-semibold text-gray-500 uppercase mb-1">
                            { flow_label(flow) }
                        </h2>
                        <ul class="space-y-1">
                            {
                                table.iter().filter(|entry| entry.flow == flow).map(|entry| html! {
                                    <li>
                                        <Link<Route>
                                            to={Route::for_screen(entry.screen)}
                                            classes="text-blue-600 hover:underline"
                                        >
                                            { entry.path }
                                        </Link<Route>>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
