use super::{ChartError, ChartFactory, ChartHandle};
use contracts::shared::charts::ChartConfig;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// `new window.Chart(canvas, config)`.
#[derive(Clone, Copy, Default)]
pub struct ChartJs;

impl ChartFactory for ChartJs {
    fn create(
        &self,
        canvas_id: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartHandle>, ChartError> {
        let window = window().ok_or(ChartError::LibraryMissing)?;
        let canvas = window
            .document()
            .and_then(|doc| doc.get_element_by_id(canvas_id))
            .ok_or_else(|| ChartError::MissingCanvas(canvas_id.to_string()))?;

        let constructor = Reflect::get(&window, &JsValue::from_str("Chart")).map_err(js_error)?;
        if !constructor.is_function() {
            return Err(ChartError::LibraryMissing);
        }
        let constructor: Function = constructor
            .dyn_into()
            .map_err(|_| ChartError::LibraryMissing)?;

        let js_config = config
            .serialize(&Serializer::json_compatible())
            .map_err(|err| ChartError::Config(err.to_string()))?;

        let chart = Reflect::construct(&constructor, &Array::of2(&canvas.into(), &js_config))
            .map_err(js_error)?;

        Ok(Box::new(ChartJsHandle { chart: Some(chart) }))
    }
}

struct ChartJsHandle {
    chart: Option<JsValue>,
}

impl ChartHandle for ChartJsHandle {
    fn destroy(&mut self) {
        let Some(chart) = self.chart.take() else {
            return;
        };
        let destroy = Reflect::get(&chart, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());
        if let Some(destroy) = destroy {
            if let Err(err) = destroy.call0(&chart) {
                log::warn!("chart destroy failed: {:?}", err);
            }
        }
    }
}

fn js_error(err: JsValue) -> ChartError {
    ChartError::Js(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
