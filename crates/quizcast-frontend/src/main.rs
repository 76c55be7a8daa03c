mod components;
mod hooks;
mod pages;
mod providers;
mod routes;
mod storage;

use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::id::ClientId;
use quizcast::log;
use quizcast::routes::RouteTable;

use providers::{IconRegistry, SocketConfig, SocketProvider};
use routes::{Route, base_path, switch};

const MOUNT_POINT_ID: &str = "app";

#[derive(Properties, PartialEq)]
struct AppProps {
    table: RouteTable,
    icons: IconRegistry,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<RouteTable> context={props.table.clone()}>
            <ContextProvider<IconRegistry> context={props.icons.clone()}>
                <SocketProvider config={SocketConfig::from_env()}>
                    <BrowserRouter basename={base_path()}>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </SocketProvider>
            </ContextProvider<IconRegistry>>
        </ContextProvider<RouteTable>>
    }
}

fn main() {
    log::setup().expect("Failed to setup logging");

    let client_id = ClientId::new();
    log::info!("starting quizcast client {client_id}");

    // Both faults below are configuration errors: they fail before mount
    let table = quizcast::routes::game_routes().expect("route table is misconfigured");
    log::info!("registered {} routes", table.len());

    let icons = IconRegistry::game_icons();
    log::info!("registered {} icons", icons.len());

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_POINT_ID))
        .expect("missing #app mount point");

    yew::Renderer::<App>::with_root_and_props(root, AppProps { table, icons }).render();
}
