//! QR code rendered from a URL.
//!
//! Web builds paint into a `<canvas>` after mount; native builds inline an
//! SVG of the same matrix. A payload that cannot be encoded renders as a
//! white square of the requested size.

use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::core::qr::QrMatrix;

#[component]
pub fn QrCode(
    url: ReadOnlySignal<String>,
    size: ReadOnlySignal<u32>,
    #[props(default)] class: String,
) -> Element {
    let matrix = use_memo(move || match QrMatrix::encode(&url()) {
        Ok(m) => Some(m),
        Err(err) => {
            error!(url = %url(), "QR encoding failed: {err}");
            None
        }
    });

    render(matrix, size, class)
}

#[cfg(target_arch = "wasm32")]
fn render(matrix: Memo<Option<QrMatrix>>, size: ReadOnlySignal<u32>, class: String) -> Element {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
    let canvas_id = use_hook(|| format!("qr-canvas-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)));

    {
        let canvas_id = canvas_id.clone();
        use_effect(move || {
            let px = size();
            let grid = matrix.read();
            if let Err(err) = paint(&canvas_id, grid.as_ref(), px) {
                error!(canvas = %canvas_id, "QR paint failed: {err}");
            }
        });
    }

    let px = size();
    rsx! {
        canvas {
            id: "{canvas_id}",
            class: "qr-code {class}",
            width: "{px}",
            height: "{px}",
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn paint(id: &str, matrix: Option<&QrMatrix>, size: u32) -> Result<(), &'static str> {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::core::qr::{QR_DARK, QR_LIGHT};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(id)
        .ok_or("Canvas missing")?
        .dyn_into()
        .map_err(|_| "Canvas cast failed")?;
    canvas.set_width(size);
    canvas.set_height(size);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "Canvas context unavailable")?
        .ok_or("Canvas context missing")?
        .dyn_into()
        .map_err(|_| "Context cast failed")?;

    let edge = f64::from(size);
    #[allow(deprecated)]
    context.set_fill_style(&JsValue::from_str(QR_LIGHT));
    context.fill_rect(0.0, 0.0, edge, edge);

    let Some(matrix) = matrix else {
        return Ok(());
    };
    #[allow(deprecated)]
    context.set_fill_style(&JsValue::from_str(QR_DARK));
    for (x, y) in matrix.dark_modules() {
        let (left, top, w, h) = matrix.module_rect(x, y, size);
        context.fill_rect(left, top, w, h);
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn render(matrix: Memo<Option<QrMatrix>>, size: ReadOnlySignal<u32>, class: String) -> Element {
    use crate::core::qr::blank_svg;

    let px = size();
    let svg = match matrix.read().as_ref() {
        Some(m) => m.to_svg(px),
        None => blank_svg(px),
    };

    rsx! {
        div {
            class: "qr-code {class}",
            style: "width:{px}px;height:{px}px",
            dangerous_inner_html: "{svg}",
        }
    }
}
