//! WASM entry point.
//!
//! The page's script owns rendering and input. It hands semantic actions to
//! [`WebGame::dispatch`] as JSON and redraws from the state JSON it gets back.

use estate_core::{GameAction, available_actions};
use estate_core::config::GameConfig;
use estate_core::model::PropertyId;
use wasm_bindgen::prelude::*;

use crate::platform::WebStorage;
use crate::session::Session;
use crate::tooltip::Tooltip;

/// Game session exposed to JavaScript.
#[wasm_bindgen]
pub struct WebGame {
    session: Session<WebStorage>,
    tooltip: Tooltip,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGame, JsValue> {
        let session = Session::open(WebStorage::new(), &GameConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebGame {
            session,
            tooltip: Tooltip::new(),
        })
    }

    /// Apply one action, e.g. `{"type":"buy"}`, and return the new state as JSON.
    pub fn dispatch(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: GameAction = serde_json::from_str(action_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid action: {e}")))?;
        self.session.dispatch(&action);
        self.state_json()
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Actions to enable in the action bar, as a JSON array
    pub fn available_actions(&self) -> Result<String, JsValue> {
        serde_json::to_string(&available_actions(self.session.state()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Tooltip text for the property under the pointer
    pub fn hover(&mut self, property_id: u16) -> Option<String> {
        match self.session.state().property(PropertyId(property_id)) {
            Some(property) => Some(self.tooltip.show(property).to_string()),
            None => {
                self.tooltip.hide();
                None
            }
        }
    }

    pub fn leave(&mut self) {
        self.tooltip.hide();
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    crate::logging::init_web_logging();

    tracing::info!("estate web version starting");
    Ok(())
}
