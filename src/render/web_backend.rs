use tracing::debug;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::api::{ChartRequest, render_mood_chart};
use crate::core::ChartConfiguration;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartFactory, Surface, SurfaceProvider};

#[wasm_bindgen]
extern "C" {
    /// Chart instance created by the page's global `Chart` constructor.
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJsInstance;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(context: &CanvasRenderingContext2d, config: &JsValue)
    -> Result<ChartJsInstance, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    pub fn destroy(this: &ChartJsInstance);
}

/// Canvas elements of a DOM document, looked up by element id.
#[derive(Debug, Clone)]
pub struct DomSurfaces {
    document: Document,
}

impl DomSurfaces {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Surfaces of the current window's document, if running in a page.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

impl SurfaceProvider for DomSurfaces {
    type Surface = HtmlCanvasElement;

    fn surface_by_id(&self, id: &str) -> Option<Self::Surface> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()
    }
}

impl Surface for HtmlCanvasElement {
    type Context = CanvasRenderingContext2d;

    fn context_2d(&self) -> Option<Self::Context> {
        self.get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }
}

/// Chart.js loaded as the page-global `Chart`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsFactory;

impl ChartFactory<CanvasRenderingContext2d> for ChartJsFactory {
    type Handle = ChartJsInstance;

    fn is_available(&self) -> bool {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
            .map(|constructor| constructor.is_function())
            .unwrap_or(false)
    }

    fn create_chart(
        &mut self,
        context: CanvasRenderingContext2d,
        config: ChartConfiguration,
    ) -> ChartResult<Self::Handle> {
        let json = config.to_json()?;
        let options = js_sys::JSON::parse(&json)
            .map_err(|err| ChartError::Backend(format!("failed to build chart options: {err:?}")))?;
        ChartJsInstance::new(&context, &options)
            .map_err(|err| ChartError::Backend(format!("Chart.js constructor threw: {err:?}")))
    }
}

/// Page entry point: `renderMoodChart({ canvasId, labels, values })`.
///
/// Returns `true` when a chart was created. Malformed payloads, a missing
/// canvas or a missing Chart.js all return `false` without throwing.
#[wasm_bindgen(js_name = renderMoodChart)]
pub fn render_mood_chart_js(request: JsValue) -> bool {
    let request = match js_sys::JSON::stringify(&request)
        .ok()
        .and_then(|json| json.as_string())
        .map(|json| ChartRequest::from_json_str(&json))
    {
        Some(Ok(request)) => request,
        Some(Err(err)) => {
            debug!(error = %err, "ignoring malformed chart request");
            return false;
        }
        None => return false,
    };
    let Some(surfaces) = DomSurfaces::from_window() else {
        return false;
    };

    match render_mood_chart(&surfaces, &mut ChartJsFactory, &request) {
        Ok(outcome) => outcome.is_rendered(),
        Err(err) => {
            debug!(error = %err, "chart creation failed");
            false
        }
    }
}
