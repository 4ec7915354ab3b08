//! Raw websocket plumbing: connects to the browser's DevTools endpoint and exposes a
//! split sink/stream of text frames. The framing (request ids, event dispatch) lives
//! one layer up in [`crate::connection`].

use async_tungstenite::tokio::{connect_async, ConnectStream};
use async_tungstenite::tungstenite::Message as WsMessage;
use async_tungstenite::WebSocketStream;
use futures::stream::{SplitSink, SplitStream};
use futures::StreamExt;
use url::Url;

use crate::error::{CdpError, Result};

pub struct Transport {
    pub sink: SplitSink<WebSocketStream<ConnectStream>, WsMessage>,
    pub stream: SplitStream<WebSocketStream<ConnectStream>>,
}

impl Transport {
    pub async fn connect(debug_ws_url: &str) -> Result<Self> {
        let url = Url::parse(debug_ws_url)
            .map_err(|e| CdpError::ConnectionFailed(format!("invalid websocket url {debug_ws_url:?}: {e}")))?;
        if url.scheme() != "ws" && url.scheme() != "wss" {
            return Err(CdpError::ConnectionFailed(format!(
                "expected a ws:// or wss:// url, got {debug_ws_url:?}"
            )));
        }
        let (ws, _) = connect_async(url)
            .await
            .map_err(CdpError::Ws)?;
        let (sink, stream) = ws.split();
        Ok(Self { sink, stream })
    }
}

pub(crate) fn text_of(msg: WsMessage) -> Option<String> {
    match msg {
        WsMessage::Text(text) => Some(text),
        _ => None,
    }
}
