//! Method-name-keyed dispatch
//!
//! The dispatcher routes decoded messages (method name + raw params) to
//! registered handlers and maps handler errors onto the wire according to
//! the message kind. It owns all process-wide state and knows nothing about
//! framing or I/O, so every handler is testable without a live transport.

use std::collections::HashMap;
use std::fmt;

use lsp_server::ErrorCode;
use serde_json::Value;

use crate::keywords::KeywordTable;
use crate::store::DocumentStore;

/// Process-wide mutable state, constructed once at startup and threaded into
/// every handler by reference. There are no ambient globals.
#[derive(Debug)]
pub struct ServerState {
    pub store: DocumentStore,
    pub keywords: KeywordTable,
}

impl ServerState {
    pub fn new() -> Self {
        ServerState {
            store: DocumentStore::new(),
            keywords: KeywordTable::new(),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced by handlers, mapped onto the wire by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Malformed or unexpected payload shape for the method.
    Decode(String),
    /// Completion requested for a URI that was never opened.
    NotOpen(String),
    /// Method name outside the recognized set.
    UnsupportedMethod(String),
}

impl DispatchError {
    /// JSON-RPC error code used when the error answers a request.
    pub fn code(&self) -> i32 {
        match self {
            DispatchError::Decode(_) => ErrorCode::ParseError as i32,
            // Never answered on the wire; the request is dropped.
            DispatchError::NotOpen(_) => ErrorCode::InvalidParams as i32,
            DispatchError::UnsupportedMethod(_) => ErrorCode::MethodNotFound as i32,
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Decode(msg) => write!(f, "{}", msg),
            DispatchError::NotOpen(uri) => write!(f, "document not open: {}", uri),
            DispatchError::UnsupportedMethod(method) => {
                write!(f, "method not found < {}", method)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// What a handler produced: an optional reply value, client-visible log
/// messages, and whether the process should terminate.
#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    pub reply: Option<Value>,
    pub logs: Vec<String>,
    pub exit: bool,
}

impl Outcome {
    /// Nothing to send back.
    pub fn none() -> Self {
        Self::default()
    }

    /// A successful reply value.
    pub fn reply(value: Value) -> Self {
        Outcome {
            reply: Some(value),
            ..Self::default()
        }
    }

    /// A one-way client log message.
    pub fn log(message: impl Into<String>) -> Self {
        Outcome {
            logs: vec![message.into()],
            ..Self::default()
        }
    }

    /// Signal the transport to terminate the process.
    pub fn exit() -> Self {
        Outcome {
            exit: true,
            ..Self::default()
        }
    }

    /// Attach an additional client log message.
    pub fn with_log(mut self, message: impl Into<String>) -> Self {
        self.logs.push(message.into());
        self
    }
}

/// A routed LSP method.
///
/// Implementations are registered by name and receive the raw params value;
/// decoding is the handler's concern. Handlers never touch the transport.
pub trait Handler: Send + Sync {
    /// The method name this handler answers to.
    fn method(&self) -> &'static str;

    fn handle(&self, state: &mut ServerState, params: Value) -> Result<Outcome, DispatchError>;
}

/// Registry of method handlers.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own method name.
    pub fn register(&mut self, handler: Box<dyn Handler>) {
        self.handlers.insert(handler.method(), handler);
    }

    /// Get a registered handler by method name.
    pub fn get(&self, method: &str) -> Option<&dyn Handler> {
        self.handlers.get(method).map(|handler| handler.as_ref())
    }

    /// Sorted list of registered method names.
    pub fn methods(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Error payload of a JSON-RPC reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl From<&DispatchError> for RpcError {
    fn from(err: &DispatchError) -> Self {
        RpcError {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Transport-facing result of dispatching one message.
#[derive(Debug, Default, PartialEq)]
pub struct Dispatch {
    /// Reply to send for a request; `None` leaves the request unanswered.
    pub reply: Option<Result<Value, RpcError>>,
    /// `window/logMessage` texts to emit, in order.
    pub logs: Vec<String>,
    /// The process should terminate with code 0.
    pub exit: bool,
}

impl Dispatch {
    fn logged(message: String) -> Self {
        Dispatch {
            logs: vec![message],
            ..Self::default()
        }
    }

    fn failed(err: &DispatchError) -> Self {
        Dispatch {
            reply: Some(Err(RpcError::from(err))),
            ..Self::default()
        }
    }
}

/// Routes messages to handlers and owns the server state.
pub struct Dispatcher {
    registry: HandlerRegistry,
    state: ServerState,
}

impl Dispatcher {
    /// A dispatcher with the full method surface registered.
    pub fn new(state: ServerState) -> Self {
        let mut registry = HandlerRegistry::new();
        for handler in crate::handlers::default_handlers() {
            registry.register(handler);
        }
        Dispatcher { registry, state }
    }

    /// A dispatcher over a caller-assembled registry.
    pub fn with_registry(state: ServerState, registry: HandlerRegistry) -> Self {
        Dispatcher { registry, state }
    }

    pub fn state(&self) -> &ServerState {
        &self.state
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Route one message.
    ///
    /// `is_request` selects the error surface: requests answer decode
    /// failures and unknown methods with RPC errors, notifications log them
    /// and are dropped with state untouched. The NotOpen condition never
    /// answers: the request is left unanswered and the condition is logged.
    pub fn dispatch(&mut self, method: &str, params: Value, is_request: bool) -> Dispatch {
        let Some(handler) = self.registry.get(method) else {
            let err = DispatchError::UnsupportedMethod(method.to_string());
            // A notification has no id to answer; log the same message.
            return if is_request {
                Dispatch::failed(&err)
            } else {
                Dispatch::logged(err.to_string())
            };
        };

        match handler.handle(&mut self.state, params) {
            Ok(outcome) => Dispatch {
                reply: if is_request {
                    outcome.reply.map(Ok)
                } else {
                    None
                },
                logs: outcome.logs,
                exit: outcome.exit,
            },
            Err(err @ DispatchError::NotOpen(_)) => Dispatch::logged(err.to_string()),
            Err(err) if is_request => Dispatch::failed(&err),
            Err(err) => Dispatch::logged(err.to_string()),
        }
    }
}
