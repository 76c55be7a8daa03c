use yew::prelude::*;

use crate::hooks::use_socket;
use crate::providers::ConnectionState;

/// The connection state dot. When the connection is down it also offers a
/// manual reconnect, since the client never retries on its own.
#[function_component(ConnectionIndicator)]
pub fn connection_indicator() -> Html {
    let socket = use_socket();
    let state = socket.connection.clone();

    let retry = {
        let reconnect = socket.reconnect.clone();
        Callback::from(move |_: MouseEvent| reconnect.emit(()))
    };

    html! {
        <div class="flex items-center space-x-2">
            <div class={classes!("w-3", "h-3", "rounded-full", match &state {
                ConnectionState::Connected => "bg-green-500",
                ConnectionState::Connecting => "bg-yellow-500",
                ConnectionState::Disconnected => "bg-gray-500",
                ConnectionState::Error(_) => "bg-red-500",
            })}></div>
            <span class={classes!(
                "text-sm",
                match &state {
                    ConnectionState::Connected => "text-green-600",
                    ConnectionState::Connecting => "text-yellow-600",
                    ConnectionState::Disconnected => "text-gray-600",
                    ConnectionState::Error(_) => "text-red-600",
                }
            )}>{
                match &state {
                    ConnectionState::Connected => "Connected",
                    ConnectionState::Connecting => "Connecting...",
                    ConnectionState::Disconnected => "Disconnected",
                    ConnectionState::Error(_) => "Connection Error",
                }
            }</span>
            {
                if matches!(state, ConnectionState::Disconnected | ConnectionState::Error(_)) {
                    html! {
                        <button class="text-xs text-blue-600 underline cursor-pointer" onclick={retry}>
                            { "Reconnect" }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
