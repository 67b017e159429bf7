//! JavaScript bindings for the termsim engine.
//!
//! The page owns rendering and keyboard handling; everything else goes
//! through a [`Terminal`]:
//!
//! ```js
//! const term = new Terminal();
//! const { output, error, exitCode } = term.submit("ls -la");
//! if (output === "clear-screen") { /* wipe the view */ }
//! ```

use serde::Serialize;
use termsim_core::utils::console;
use termsim_core::{AutocompleteResult, CommandResult, Session, SystemHost, VirtualFs};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Command outcome as seen by JavaScript.
///
/// `output` carries the sentinel strings `clear-screen` and
/// `change-directory:<path>` verbatim.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse<'a> {
    output: String,
    error: Option<&'a str>,
    exit_code: i32,
}

impl<'a> From<&'a CommandResult> for SubmitResponse<'a> {
    fn from(result: &'a CommandResult) -> Self {
        Self {
            output: result.output.sentinel(),
            error: result.error.as_deref(),
            exit_code: result.exit_code,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Completion {
    Single { line: String },
    Multiple { prefix: String, matches: Vec<String> },
    None,
}

impl From<AutocompleteResult> for Completion {
    fn from(result: AutocompleteResult) -> Self {
        match result {
            AutocompleteResult::Single(line) => Self::Single { line },
            AutocompleteResult::Multiple(prefix, matches) => Self::Multiple { prefix, matches },
            AutocompleteResult::None => Self::None,
        }
    }
}

/// One terminal session.
#[wasm_bindgen]
pub struct Terminal {
    session: Session,
}

#[wasm_bindgen]
impl Terminal {
    /// Fresh session over the built-in filesystem.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        Terminal {
            session: Session::new(),
        }
    }

    /// Session over a filesystem saved with `exportFs`.
    #[wasm_bindgen(js_name = fromSnapshot)]
    pub fn from_snapshot(json: &str) -> Result<Terminal, JsError> {
        let fs = VirtualFs::from_snapshot(json).inspect_err(|e| {
            console::warn(&format!("Failed to restore filesystem snapshot: {}", e));
        })?;
        Ok(Terminal {
            session: Session::with_host(fs, SystemHost::new()),
        })
    }

    /// Run one line of input: `{ output, error, exitCode }`.
    pub fn submit(&mut self, line: &str) -> Result<JsValue, JsValue> {
        let result = self.session.submit(line);
        Ok(serde_wasm_bindgen::to_value(&SubmitResponse::from(&result))?)
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    pub fn cwd(&self) -> String {
        self.session.cwd().to_string()
    }

    /// Scrollback as `{ id, data: { kind, ... } }` objects, oldest first.
    pub fn lines(&self) -> Result<JsValue, JsValue> {
        let lines: Vec<_> = self.session.lines().collect();
        Ok(serde_wasm_bindgen::to_value(&lines)?)
    }

    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.session
            .suggest(prefix)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Tab completion: `{ kind: "single" | "multiple" | "none", ... }`.
    pub fn complete(&self, input: &str) -> Result<JsValue, JsValue> {
        let completion = Completion::from(self.session.complete(input));
        Ok(serde_wasm_bindgen::to_value(&completion)?)
    }

    #[wasm_bindgen(js_name = historyPrev)]
    pub fn history_prev(&mut self) -> Option<String> {
        self.session.navigate_history(-1)
    }

    #[wasm_bindgen(js_name = historyNext)]
    pub fn history_next(&mut self) -> Option<String> {
        self.session.navigate_history(1)
    }

    /// Serialize the filesystem, including changes made this session.
    #[wasm_bindgen(js_name = exportFs)]
    pub fn export_fs(&self) -> Result<String, JsError> {
        Ok(self.session.fs().snapshot()?)
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
