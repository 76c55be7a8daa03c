//! The realtime connection to the game server.
//!
//! One connection exists per page session, owned by [`SocketProvider`] which
//! sits above every screen. Screens borrow it through context: they emit
//! [`ClientEvent`]s via the `send` callback and observe decoded
//! [`ServerEvent`]s through the sequence-numbered `last` slot.

use std::cell::RefCell;
use std::rc::Rc;

use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::{Message, futures::WebSocket};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use quizcast::data::{ClientEvent, ServerEvent};
use quizcast::errors::SocketError;
use quizcast::log;
use quizcast::serde_json;

#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Error(String),
}

impl Default for ConnectionState {
    fn default() -> Self {
        ConnectionState::Disconnected
    }
}

/// Connection settings, fixed at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct SocketConfig {
    pub endpoint: String,
    pub debug: bool,
}

impl SocketConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: option_env!("QUIZCAST_SERVER_URL")
                .unwrap_or("ws://localhost:3001/ws")
                .to_string(),
            debug: cfg!(debug_assertions),
        }
    }
}

/// The most recent event received over the connection. The sequence number
/// increases with every decoded frame, so consumers can tell a fresh event
/// from one they have already seen.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceivedEvent {
    pub seq: u64,
    pub event: Rc<ServerEvent>,
}

#[derive(Clone, PartialEq, Default)]
struct SocketState {
    connection: ConnectionState,
    last: Option<ReceivedEvent>,
}

enum SocketAction {
    SetConnection(ConnectionState),
    Received(ServerEvent),
}

impl Reducible for SocketState {
    type Action = SocketAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            SocketAction::SetConnection(connection) => {
                state.connection = connection;
            }
            SocketAction::Received(event) => {
                let seq = state.last.as_ref().map(|r| r.seq).unwrap_or(0) + 1;
                state.last = Some(ReceivedEvent {
                    seq,
                    event: Rc::new(event),
                });
            }
        }
        Rc::new(state)
    }
}

type Sender = Rc<RefCell<Option<SplitSink<WebSocket, Message>>>>;

/// The handle screens borrow from context.
#[derive(Clone)]
pub struct SocketHandle {
    pub connection: ConnectionState,
    pub last: Option<ReceivedEvent>,
    pub send: Callback<ClientEvent>,
    pub reconnect: Callback<()>,
}

impl PartialEq for SocketHandle {
    fn eq(&self, other: &Self) -> bool {
        self.connection == other.connection && self.last == other.last
    }
}

fn open_connection(config: SocketConfig, state: UseReducerHandle<SocketState>, sender: Sender) {
    spawn_local(async move {
        state.dispatch(SocketAction::SetConnection(ConnectionState::Connecting));

        match WebSocket::open(&config.endpoint) {
            Ok(ws) => {
                state.dispatch(SocketAction::SetConnection(ConnectionState::Connected));
                log::info!("connected to {}", config.endpoint);

                let (write, mut read) = ws.split();
                *sender.borrow_mut() = Some(write);

                let mut failed = false;
                while let Some(frame) = read.next().await {
                    match frame {
                        Ok(Message::Text(text)) => {
                            if config.debug {
                                log::debug!("<- {text}");
                            }
                            match serde_json::from_str::<ServerEvent>(&text) {
                                Ok(event) => state.dispatch(SocketAction::Received(event)),
                                Err(err) => log::warn!("dropping malformed frame: {err}"),
                            }
                        }
                        Ok(Message::Bytes(_)) => {
                            // The protocol is text-only
                        }
                        Err(err) => {
                            state.dispatch(SocketAction::SetConnection(ConnectionState::Error(
                                format!("connection failed: {err:?}"),
                            )));
                            failed = true;
                            break;
                        }
                    }
                }

                *sender.borrow_mut() = None;
                if !failed {
                    state.dispatch(SocketAction::SetConnection(ConnectionState::Disconnected));
                }
            }
            Err(err) => {
                log::error!("failed to reach {}: {err:?}", config.endpoint);
                state.dispatch(SocketAction::SetConnection(ConnectionState::Error(format!(
                    "failed to connect: {err:?}"
                ))));
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct SocketProviderProps {
    pub config: SocketConfig,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SocketProvider)]
pub fn socket_provider(props: &SocketProviderProps) -> Html {
    let state = use_reducer(SocketState::default);
    let sender: Sender = use_mut_ref(|| None);

    // One connection per page session, opened when the provider mounts
    {
        let state = state.clone();
        let sender = sender.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            open_connection(config, state, sender);
        });
    }

    let send = {
        let sender = sender.clone();
        let debug = props.config.debug;
        Callback::from(move |event: ClientEvent| {
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(err) => {
                    log::error!("{}", SocketError::Serialization(err));
                    return;
                }
            };
            if debug {
                log::debug!("-> {json}");
            }

            if let Some(mut write) = sender.borrow_mut().take() {
                let sender = sender.clone();
                spawn_local(async move {
                    if write.send(Message::Text(json)).await.is_err() {
                        log::warn!("{}", SocketError::SendFailed);
                    }
                    *sender.borrow_mut() = Some(write);
                });
            } else {
                log::warn!("{}: dropping {event:?}", SocketError::NotConnected);
            }
        })
    };

    let reconnect = {
        let state = state.clone();
        let sender = sender.clone();
        let config = props.config.clone();
        Callback::from(move |_: ()| {
            if matches!(
                state.connection,
                ConnectionState::Connecting | ConnectionState::Connected
            ) {
                return;
            }
            open_connection(config.clone(), state.clone(), sender.clone());
        })
    };

    let handle = SocketHandle {
        connection: state.connection.clone(),
        last: state.last.clone(),
        send,
        reconnect,
    };

    html! {
        <ContextProvider<SocketHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SocketHandle>>
    }
}
