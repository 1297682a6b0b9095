use flagtile_core::{ActionPayload, HostChannel, RenderArgs, WidgetError};
use js_sys::{JSON, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, Event, EventTarget};

#[wasm_bindgen]
extern "C" {
    /// Global installed by `streamlit-component-lib`.
    type Streamlit;

    #[wasm_bindgen(static_method_of = Streamlit, js_name = setComponentReady, catch)]
    fn set_component_ready() -> Result<(), JsValue>;

    #[wasm_bindgen(static_method_of = Streamlit, js_name = setFrameHeight, catch)]
    fn set_frame_height(height: u32) -> Result<(), JsValue>;

    #[wasm_bindgen(static_method_of = Streamlit, js_name = setComponentValue, catch)]
    fn set_component_value(value: &JsValue) -> Result<(), JsValue>;
}

/// Name of the event the host fires whenever the args change.
pub(crate) const RENDER_EVENT: &str = "render";

/// Host channel backed by the `Streamlit` global.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct StreamlitHost;

impl StreamlitHost {
    /// Event target the host dispatches render events on.
    pub(crate) fn events() -> Result<EventTarget, JsValue> {
        let bridge = Reflect::get(&js_sys::global(), &JsValue::from_str("Streamlit"))?;
        if bridge.is_undefined() {
            return Err(JsValue::from_str("Streamlit bridge is not loaded"));
        }
        Reflect::get(&bridge, &JsValue::from_str("events"))?.dyn_into()
    }
}

impl HostChannel for StreamlitHost {
    fn signal_ready(&self) {
        if let Err(err) = Streamlit::set_component_ready() {
            log::error!("failed to signal ready: {:?}", err);
        }
    }

    fn report_height(&self, pixels: u32) {
        if let Err(err) = Streamlit::set_frame_height(pixels) {
            log::error!("failed to report frame height: {:?}", err);
        }
    }

    fn send_action(&self, payload: &ActionPayload) {
        let result = payload_to_js(payload).and_then(|value| Streamlit::set_component_value(&value));
        if let Err(err) = result {
            log::error!("failed to send {}: {:?}", payload.action, err);
        }
    }
}

pub(crate) fn payload_to_js(payload: &ActionPayload) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(payload).map_err(|err| JsValue::from_str(&err.to_string()))?;
    JSON::parse(&json)
}

/// Pulls the tile args out of a render event.
pub(crate) fn render_args(event: &Event) -> flagtile_core::Result<RenderArgs> {
    let event = event
        .dyn_ref::<CustomEvent>()
        .ok_or_else(|| WidgetError::MalformedArgs("render event carries no detail".to_string()))?;
    args_from_detail(&event.detail())
}

pub(crate) fn args_from_detail(detail: &JsValue) -> flagtile_core::Result<RenderArgs> {
    let args = Reflect::get(detail, &JsValue::from_str("args")).unwrap_or(JsValue::UNDEFINED);
    if args.is_undefined() || args.is_null() {
        return Ok(RenderArgs::default());
    }

    let json = JSON::stringify(&args).map_err(|err| WidgetError::MalformedArgs(format!("{:?}", err)))?;
    RenderArgs::from_json(&String::from(json))
}
