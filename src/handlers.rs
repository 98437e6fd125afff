//! LSP method handlers
//!
//! One handler per recognized method, each decoding exactly the payload
//! fields the method consumes. URIs are carried as opaque strings and never
//! parsed. Replies are built from `lsp_types` structures; decoding uses
//! minimal local structs so that unrelated payload fields can never fail a
//! message.

use lsp_types::{
    CompletionItem, CompletionItemKind, CompletionList, CompletionOptions, InitializeResult,
    InsertTextFormat, ServerCapabilities, ServerInfo,
};
use serde::Deserialize;
use serde_json::Value;

use crate::completion::{rank, CompletionCandidate};
use crate::cursor::resolve;
use crate::dispatch::{DispatchError, Handler, Outcome, ServerState};

/// Every handler in the method surface, for registry construction.
pub fn default_handlers() -> Vec<Box<dyn Handler>> {
    vec![
        Box::new(Initialize),
        Box::new(Initialized),
        Box::new(Shutdown),
        Box::new(Exit),
        Box::new(DidChangeConfiguration),
        Box::new(DidOpen),
        Box::new(DidChange),
        Box::new(DidSave),
        Box::new(Hover),
        Box::new(Completion),
    ]
}

// Payload structs mirror exactly the fields each method consumes.

#[derive(Debug, Deserialize)]
struct TextDocumentId {
    uri: String,
}

#[derive(Debug, Deserialize)]
struct OpenedDocument {
    uri: String,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidOpenParams {
    text_document: OpenedDocument,
}

#[derive(Debug, Deserialize)]
struct ContentChange {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidChangeParams {
    text_document: TextDocumentId,
    content_changes: Vec<ContentChange>,
}

#[derive(Debug, Deserialize)]
struct CursorPosition {
    line: u32,
    character: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompletionRequestParams {
    text_document: TextDocumentId,
    position: CursorPosition,
}

fn decode<T: serde::de::DeserializeOwned>(params: Value, what: &str) -> Result<T, DispatchError> {
    serde_json::from_value(params)
        .map_err(|err| DispatchError::Decode(format!("invalid {} params: {}", what, err)))
}

/// `initialize`: static capabilities declaring completion support with `.`
/// and `:` trigger characters. The client's own params are ignored.
pub struct Initialize;

impl Handler for Initialize {
    fn method(&self) -> &'static str {
        "initialize"
    }

    fn handle(&self, _state: &mut ServerState, _params: Value) -> Result<Outcome, DispatchError> {
        let result = InitializeResult {
            capabilities: ServerCapabilities {
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![".".to_string(), ":".to_string()]),
                    ..CompletionOptions::default()
                }),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: "tally-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        };
        Ok(Outcome::reply(
            serde_json::to_value(result).expect("initialize result serializes"),
        ))
    }
}

pub struct Initialized;

impl Handler for Initialized {
    fn method(&self) -> &'static str {
        "initialized"
    }

    fn handle(&self, _state: &mut ServerState, _params: Value) -> Result<Outcome, DispatchError> {
        Ok(Outcome::log("Language server initialized successfully"))
    }
}

/// `shutdown`: empty success acknowledgment, no side effect. Termination is
/// `exit`'s job.
pub struct Shutdown;

impl Handler for Shutdown {
    fn method(&self) -> &'static str {
        "shutdown"
    }

    fn handle(&self, _state: &mut ServerState, _params: Value) -> Result<Outcome, DispatchError> {
        Ok(Outcome::reply(Value::Null))
    }
}

pub struct Exit;

impl Handler for Exit {
    fn method(&self) -> &'static str {
        "exit"
    }

    fn handle(&self, _state: &mut ServerState, _params: Value) -> Result<Outcome, DispatchError> {
        Ok(Outcome::exit())
    }
}

pub struct DidChangeConfiguration;

impl Handler for DidChangeConfiguration {
    fn method(&self) -> &'static str {
        "workspace/didChangeConfiguration"
    }

    fn handle(&self, _state: &mut ServerState, _params: Value) -> Result<Outcome, DispatchError> {
        Ok(Outcome::log("Ack"))
    }
}

pub struct DidOpen;

impl Handler for DidOpen {
    fn method(&self) -> &'static str {
        "textDocument/didOpen"
    }

    fn handle(&self, state: &mut ServerState, params: Value) -> Result<Outcome, DispatchError> {
        let params: DidOpenParams = decode(params, "open")?;
        state.store.put(
            params.text_document.uri,
            params.text_document.text,
            &state.keywords,
        );
        Ok(Outcome::none())
    }
}

/// `textDocument/didChange`: full-text synchronization only. The first
/// content-change entry carries the whole document; incremental range
/// patches are not supported.
pub struct DidChange;

impl Handler for DidChange {
    fn method(&self) -> &'static str {
        "textDocument/didChange"
    }

    fn handle(&self, state: &mut ServerState, params: Value) -> Result<Outcome, DispatchError> {
        let params: DidChangeParams = decode(params, "change")?;
        let Some(change) = params.content_changes.into_iter().next() else {
            return Err(DispatchError::Decode(
                "invalid change params: no content changes".to_string(),
            ));
        };
        state
            .store
            .put(params.text_document.uri, change.text, &state.keywords);
        Ok(Outcome::none())
    }
}

pub struct DidSave;

impl Handler for DidSave {
    fn method(&self) -> &'static str {
        "textDocument/didSave"
    }

    fn handle(&self, _state: &mut ServerState, _params: Value) -> Result<Outcome, DispatchError> {
        Ok(Outcome::none())
    }
}

/// `textDocument/hover`: recognized, never answered.
pub struct Hover;

impl Handler for Hover {
    fn method(&self) -> &'static str {
        "textDocument/hover"
    }

    fn handle(&self, _state: &mut ServerState, _params: Value) -> Result<Outcome, DispatchError> {
        Ok(Outcome::none())
    }
}

/// `textDocument/completion`: look up the document, resolve the cursor
/// context, rank candidates, and reply with a complete (non-paginated)
/// list. The resolved dotted context is client-logged for diagnostics.
pub struct Completion;

impl Handler for Completion {
    fn method(&self) -> &'static str {
        "textDocument/completion"
    }

    fn handle(&self, state: &mut ServerState, params: Value) -> Result<Outcome, DispatchError> {
        let params: CompletionRequestParams = decode(params, "completion")?;
        let uri = params.text_document.uri;

        let Some(document) = state.store.get(&uri) else {
            return Err(DispatchError::NotOpen(uri));
        };

        let context = resolve(&document.text, params.position.line, params.position.character);
        let candidates = rank(
            &context.partial,
            &document.frequencies,
            state.keywords.entries(),
        );

        let list = CompletionList {
            is_incomplete: false,
            items: candidates.into_iter().map(to_completion_item).collect(),
        };
        Ok(Outcome::reply(
            serde_json::to_value(list).expect("completion list serializes"),
        )
        .with_log(context.dotted()))
    }
}

/// Wire shape of a candidate: kind 3, plain-text insertion of the label
/// itself, ordering carried by `sortText`.
fn to_completion_item(candidate: CompletionCandidate) -> CompletionItem {
    CompletionItem {
        label: candidate.label.clone(),
        kind: Some(CompletionItemKind::FUNCTION),
        insert_text: Some(candidate.label),
        insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
        sort_text: Some(candidate.sort_key),
        ..CompletionItem::default()
    }
}
