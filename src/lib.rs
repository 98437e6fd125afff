//! Frequency-ranked plain word completion over the Language Server Protocol
//!
//!     tally-lsp is a deliberately small LSP backend: it mirrors the open
//!     documents an editor sends it, counts the words in them, and answers
//!     completion requests with every known word ranked by how often it
//!     occurs, merged with a static keyword table. No syntax trees, no type
//!     information, no fuzzy matching: just frequency.
//!
//! Design Decision: lsp-server
//!
//!     Considered Options:
//!         1. tower-lsp: high-level async framework; routing is fixed by the
//!            LanguageServer trait and every request must be answered
//!         2. lsp-server: low-level sync library from rust-analyzer; hands
//!            over raw method names and params, replies are explicit
//!
//!     Why lsp-server:
//!         - The dispatcher here is a method-name registry over raw params,
//!           with behaviors a trait-based framework cannot express: requests
//!           that are deliberately left unanswered, MethodNotFound errors
//!           carrying the offending name, ParseError-class replies for
//!           malformed payloads
//!         - Processing is strictly sequential (one message fully handled
//!           before the next is read), which is exactly the shape of
//!           the lsp-server receiver loop; an async runtime would only add
//!           machinery to then serialize again
//!
//!     Trade-offs:
//!         - No capability negotiation helpers; the initialize reply is
//!           assembled by hand (it is a single static structure here)
//!
//! Architecture
//!
//!     Transport Layer (lsp-server):
//!         - Stdio framing and JSON-RPC message decoding
//!         - `server::run` pumps the receiver into the dispatcher and sends
//!           replies and window/logMessage notifications back
//!
//!     Dispatch Layer:
//!         - `dispatch::HandlerRegistry` maps method name -> handler; each
//!           handler has the same signature (raw params in, outcome out) and
//!           is unit-testable without a transport
//!         - `dispatch::ServerState` owns the document store and the keyword
//!           table; handlers receive it by reference, nothing is global
//!
//!     Core:
//!         - `words`: text -> word-frequency map, keyword-excluded
//!         - `store`: URI -> { text, frequencies }, replaced wholesale on
//!           every change, never evicted
//!         - `cursor`: (text, position) -> partial token + dotted lead-up
//!         - `completion`: frequencies -> ranked candidates with fixed-width
//!           descending-frequency sort keys
//!
//! Usage
//!
//!     Binary:
//!         $ tally-lsp
//!         Starts the language server on stdin/stdout for editor
//!         integration. Diagnostics go to stderr, tunable with --log-level.

pub mod completion;
pub mod cursor;
pub mod dispatch;
pub mod handlers;
pub mod keywords;
pub mod server;
pub mod store;
pub mod words;

pub use dispatch::{Dispatcher, ServerState};
