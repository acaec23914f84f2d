// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use futures::stream::{SplitStream, StreamExt};
use futures::SinkExt;
use secrecy::{ExposeSecret, Secret};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::{task, time};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait,
};
use crate::stomp::{Command, Frame, FrameDecoder, HeartBeat};
use crate::ConnectionConfig;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Speaks STOMP 1.2 over a plain WebSocket.
pub struct Connector {}

impl Connector {
    pub fn provider() -> ConnectorProvider {
        Box::new(|| Box::new(Connector {}))
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        config: &ConnectionConfig,
        token: &Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        async fn connect(
            config: &ConnectionConfig,
            token: &Secret<String>,
        ) -> Result<(Socket, FrameDecoder, HeartBeat), ConnectionError> {
            let (mut socket, _) = tokio_tungstenite::connect_async(config.endpoint.as_str())
                .await
                .map_err(|err| ConnectionError::Generic {
                    msg: err.to_string(),
                })?;

            let connect_frame = Frame::new(Command::Connect)
                .set_header("accept-version", "1.2")
                .set_header("host", config.host())
                .set_header("heart-beat", config.heart_beat().header_value())
                .set_header(
                    "Authorization",
                    format!("Bearer {}", token.expose_secret()),
                );

            socket
                .send(Message::Text(connect_frame.encode()))
                .await
                .map_err(|err| ConnectionError::Generic {
                    msg: err.to_string(),
                })?;

            let mut decoder = FrameDecoder::default();

            while let Some(message) = socket.next().await {
                let text = match message {
                    Ok(Message::Text(text)) => text,
                    Ok(Message::Binary(data)) => String::from_utf8_lossy(&data).into_owned(),
                    Ok(Message::Close(_)) => break,
                    Ok(_) => continue,
                    Err(err) => {
                        return Err(ConnectionError::Generic {
                            msg: err.to_string(),
                        })
                    }
                };

                decoder.push(&text);

                let Some(frame) = decoder.next_frame() else {
                    continue;
                };

                let frame = frame.map_err(|err| ConnectionError::Generic {
                    msg: err.to_string(),
                })?;

                return match frame.command {
                    Command::Connected => {
                        let server_heart_beat = frame
                            .header("heart-beat")
                            .map(HeartBeat::from_header)
                            .transpose()
                            .map_err(|err| ConnectionError::Generic {
                                msg: err.to_string(),
                            })?
                            .unwrap_or_default();

                        Ok((
                            socket,
                            decoder,
                            HeartBeat::negotiate(config.heart_beat(), server_heart_beat),
                        ))
                    }
                    Command::Error => {
                        warn!(
                            "Server rejected CONNECT. {}",
                            frame.header("message").unwrap_or(&frame.body)
                        );
                        Err(ConnectionError::InvalidCredentials)
                    }
                    command => Err(ConnectionError::Generic {
                        msg: format!("Received unexpected {} frame during handshake", command),
                    }),
                };
            }

            Err(ConnectionError::Generic {
                msg: "Connection closed during handshake".to_string(),
            })
        }

        let (socket, decoder, heart_beat) = connect(config, token).await?;
        info!(
            "Connected to {}. Heart-beat out: {:?}, in: {:?}",
            config.endpoint, heart_beat.outgoing, heart_beat.incoming
        );

        Ok(Box::new(Connection::new(
            socket,
            decoder,
            heart_beat,
            event_handler,
        )))
    }
}

enum Packet {
    Frame(Frame),
    HeartBeat,
    Close,
}

pub struct Connection {
    sender: Arc<UnboundedSender<Packet>>,
    stream_read_handle: JoinHandle<()>,
    _stream_write_handle: JoinHandle<()>,
    heart_beat_handle: Option<JoinHandle<()>>,
}

impl Connection {
    fn new(
        socket: Socket,
        decoder: FrameDecoder,
        heart_beat: HeartBeat,
        event_handler: ConnectionEventHandler,
    ) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sender = Arc::new(tx);

        let (mut writer, reader) = socket.split();

        let read_handle = task::spawn(read_loop(reader, decoder, heart_beat, event_handler));

        let write_handle = task::spawn(async move {
            while let Some(packet) = rx.recv().await {
                let result = match packet {
                    Packet::Frame(frame) => {
                        #[cfg(feature = "trace-frames")]
                        tracing::info!(direction = "out", "{}", frame);
                        writer.send(Message::Text(frame.encode())).await
                    }
                    Packet::HeartBeat => writer.send(Message::Text("\n".to_string())).await,
                    Packet::Close => {
                        let disconnect = Frame::new(Command::Disconnect);
                        _ = writer.send(Message::Text(disconnect.encode())).await;
                        _ = writer.close().await;
                        break;
                    }
                };

                if let Err(err) = result {
                    error!("Cannot send frame to server. {}", err);
                    break;
                }
            }
        });

        let heart_beat_handle = (!heart_beat.outgoing.is_zero()).then(|| {
            let sender = sender.clone();

            task::spawn(async move {
                let mut interval = time::interval(heart_beat.outgoing);
                // The first tick completes immediately.
                interval.tick().await;

                loop {
                    interval.tick().await;
                    if sender.send(Packet::HeartBeat).is_err() {
                        break;
                    }
                }
            })
        });

        Connection {
            sender,
            stream_read_handle: read_handle,
            _stream_write_handle: write_handle,
            heart_beat_handle,
        }
    }
}

async fn read_loop(
    mut reader: SplitStream<Socket>,
    mut decoder: FrameDecoder,
    heart_beat: HeartBeat,
    event_handler: ConnectionEventHandler,
) {
    let deadline = heart_beat.incoming_deadline();

    // Frames that arrived in the same chunk as CONNECTED.
    while let Some(frame) = decoder.next_frame() {
        handle_decoded_frame(frame, &event_handler).await;
    }

    let error = loop {
        let next = match deadline {
            Some(deadline) => match time::timeout(deadline, reader.next()).await {
                Ok(next) => next,
                Err(_) => {
                    warn!("No data from server within {:?}.", deadline);
                    break Some(ConnectionError::TimedOut);
                }
            },
            None => reader.next().await,
        };

        let text = match next {
            None => break None,
            Some(Ok(Message::Text(text))) => text,
            Some(Ok(Message::Binary(data))) => String::from_utf8_lossy(&data).into_owned(),
            Some(Ok(Message::Close(frame))) => {
                debug!("Server closed the WebSocket. {:?}", frame);
                break None;
            }
            Some(Ok(_)) => continue,
            Some(Err(err)) => {
                break Some(ConnectionError::Generic {
                    msg: err.to_string(),
                })
            }
        };

        decoder.push(&text);

        while let Some(frame) = decoder.next_frame() {
            handle_decoded_frame(frame, &event_handler).await;
        }
    };

    (event_handler)(ConnectionEvent::Disconnected { error }).await;
}

async fn handle_decoded_frame(
    frame: Result<Frame, crate::util::ParseError>,
    event_handler: &ConnectionEventHandler,
) {
    match frame {
        Ok(frame) => {
            #[cfg(feature = "trace-frames")]
            tracing::info!(direction = "in", "{}", frame);
            (event_handler)(ConnectionEvent::Frame(frame)).await
        }
        Err(err) => error!("Failed to parse frame. {}", err),
    }
}

impl ConnectionTrait for Connection {
    fn send_frame(&self, frame: Frame) -> Result<()> {
        self.sender
            .send(Packet::Frame(frame))
            .map_err(|_| anyhow::format_err!("Connection is closed"))?;
        Ok(())
    }

    fn disconnect(&self) {
        self.stream_read_handle.abort();
        if let Some(handle) = &self.heart_beat_handle {
            handle.abort();
        }
        _ = self.sender.send(Packet::Close);
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // The writer stays alive until the channel closes so that a pending Close is flushed.
        self.stream_read_handle.abort();
        if let Some(handle) = &self.heart_beat_handle {
            handle.abort();
        }
    }
}
