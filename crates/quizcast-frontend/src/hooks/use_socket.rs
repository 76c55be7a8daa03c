use yew::prelude::*;

use quizcast::data::ServerEvent;

use crate::providers::SocketHandle;

/// Borrow the shared realtime connection from context.
#[hook]
pub fn use_socket() -> SocketHandle {
    use_context::<SocketHandle>().expect("SocketProvider is mounted above every screen")
}

/// Run `handler` for every event received after the calling component
/// mounted. The event that was already latest at mount time is skipped, so
/// navigating into a screen never replays the event that caused the
/// navigation.
#[hook]
pub fn use_server_event<F>(handler: F)
where
    F: Fn(&ServerEvent) + 'static,
{
    let socket = use_socket();

    let mount_seq = {
        let last = socket.last.clone();
        use_mut_ref(move || last.map(|received| received.seq).unwrap_or(0))
    };

    use_effect_with(socket.last.clone(), move |last| {
        if let Some(received) = last {
            if received.seq > *mount_seq.borrow() {
                handler(&received.event);
            }
        }
    });
}
