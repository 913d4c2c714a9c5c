//! Per-event WebSocket chat client.
//!
//! One socket per selected event: `open` connects to `/chat/ws-evento/{id}`
//! and runs until the socket drops or `close` is called. The caller closes
//! the old handle before opening the next one; there is no reconnection.
//!
//! Socket logic is gated behind `#[cfg(feature = "csr")]` since it requires
//! a browser environment.

#[cfg(test)]
#[path = "event_ws_test.rs"]
mod event_ws_test;

#[cfg(feature = "csr")]
use super::base::ws_url;
use super::types::EventMessage;

#[cfg(any(test, feature = "csr"))]
fn event_ws_endpoint(event_id: i64) -> String {
    format!("/chat/ws-evento/{event_id}")
}

/// Wrap a chat line in the outgoing frame shape the server expects.
#[cfg(any(test, feature = "csr"))]
fn outgoing_frame(text: &str) -> String {
    serde_json::json!({ "mensaje": text }).to_string()
}

/// Decode an incoming frame. Unparseable frames are dropped.
#[cfg(any(test, feature = "csr"))]
fn parse_incoming(text: &str) -> Option<EventMessage> {
    serde_json::from_str(text).ok()
}

/// Handle to a live event chat socket.
///
/// Clones share the outgoing channel; closing any clone ends the connection.
#[cfg(feature = "csr")]
#[derive(Clone)]
pub struct EventSocket {
    outgoing: futures::channel::mpsc::UnboundedSender<String>,
}

/// Handle to a live event chat socket (native stub).
#[cfg(not(feature = "csr"))]
#[derive(Clone)]
pub struct EventSocket;

#[cfg(feature = "csr")]
impl EventSocket {
    /// Open the socket for an event and spawn its read/write loop.
    ///
    /// `on_message` runs for every decoded incoming frame, in transport
    /// order.
    pub fn open(event_id: i64, on_message: impl Fn(EventMessage) + 'static) -> Self {
        let (outgoing, rx) = futures::channel::mpsc::unbounded::<String>();
        let url = ws_url(&event_ws_endpoint(event_id));
        leptos::task::spawn_local(run(url, rx, on_message));
        Self { outgoing }
    }

    /// Send a chat line. Returns `false` once the socket is closed.
    pub fn send_text(&self, text: &str) -> bool {
        self.outgoing.unbounded_send(outgoing_frame(text)).is_ok()
    }

    /// Close the connection. The socket loop winds down on its own.
    pub fn close(&self) {
        self.outgoing.close_channel();
    }
}

#[cfg(not(feature = "csr"))]
impl EventSocket {
    pub fn open(event_id: i64, on_message: impl Fn(EventMessage) + 'static) -> Self {
        let _ = (event_id, &on_message);
        Self
    }

    pub fn send_text(&self, text: &str) -> bool {
        let _ = text;
        false
    }

    pub fn close(&self) {}
}

/// Socket loop: forward queued outgoing frames, dispatch incoming ones.
#[cfg(feature = "csr")]
async fn run(
    url: String,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
    on_message: impl Fn(EventMessage) + 'static,
) {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("event chat socket failed to open: {e}");
            return;
        }
    };
    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(frame) = rx.next().await {
            if ws_write.send(Message::Text(frame)).await.is_err() {
                break;
            }
        }
        // Handle closed: shut the write half so the server sees a clean close.
        let _ = ws_write.close().await;
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Some(message) = parse_incoming(&text) {
                        on_message(message);
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("event chat recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
}
