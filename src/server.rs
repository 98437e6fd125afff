//! Stdio transport loop
//!
//! Pumps messages from an `lsp_server::Connection` through the dispatcher,
//! strictly one at a time: each handler runs to completion before the next
//! message is read. There is no cancellation and no timeout handling; an
//! unresponsive peer stalls the loop. Client-visible diagnostics are sent
//! as `window/logMessage` notifications, server diagnostics go to stderr
//! via `tracing` (stdout belongs to the protocol).

use lsp_server::{Connection, Message, Notification, Response};
use lsp_types::{LogMessageParams, MessageType};
use tracing::{debug, info};

use crate::dispatch::{Dispatch, Dispatcher, ServerState};

type ServerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Run the server over stdio until the client disconnects or sends `exit`.
pub fn run() -> ServerResult {
    let (connection, io_threads) = Connection::stdio();
    info!("tally-lsp listening on stdio");

    let mut dispatcher = Dispatcher::new(ServerState::new());

    for message in &connection.receiver {
        match message {
            Message::Request(request) => {
                debug!(method = %request.method, "request");
                let Dispatch { reply, logs, exit } =
                    dispatcher.dispatch(&request.method, request.params, true);
                emit_logs(&connection, &logs)?;
                if let Some(reply) = reply {
                    let response = match reply {
                        Ok(value) => Response::new_ok(request.id, value),
                        Err(err) => Response::new_err(request.id, err.code, err.message),
                    };
                    connection.sender.send(Message::Response(response))?;
                }
                finish(exit);
            }
            Message::Notification(notification) => {
                debug!(method = %notification.method, "notification");
                let Dispatch { logs, exit, .. } =
                    dispatcher.dispatch(&notification.method, notification.params, false);
                emit_logs(&connection, &logs)?;
                finish(exit);
            }
            Message::Response(_) => {
                // The server never issues requests of its own.
            }
        }
    }

    io_threads.join()?;
    info!("tally-lsp stopped");
    Ok(())
}

/// Forward client-visible log messages as `window/logMessage` notifications.
fn emit_logs(connection: &Connection, logs: &[String]) -> ServerResult {
    for message in logs {
        let params = LogMessageParams {
            typ: MessageType::LOG,
            message: message.clone(),
        };
        connection.sender.send(Message::Notification(Notification::new(
            "window/logMessage".to_string(),
            params,
        )))?;
    }
    Ok(())
}

/// Honor the exit signal: immediate termination with code 0.
fn finish(exit: bool) {
    if exit {
        info!("exit requested, terminating");
        std::process::exit(0);
    }
}
