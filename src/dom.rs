use crate::constants::{
    CANVAS_CLASS, CONTENT_SELECTOR, INTRO_SELECTORS, LINE_SELECTOR, LOADING_CLASS,
    SCROLL_CONTENT_SELECTOR, SOUNDCHECK_QUERY_FLAG,
};
use crate::core::schedule::{FrameScheduler, FrameTask};
use crate::core::{Page, Reveal, ScrollSurface, ViewportState};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current logical window size in CSS pixels.
pub fn viewport(window: &web::Window) -> ViewportState {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    ViewportState::new(width as f32, height as f32)
}

pub fn soundcheck_enabled(window: &web::Window) -> bool {
    window
        .location()
        .search()
        .map(|s| s.contains(SOUNDCHECK_QUERY_FLAG))
        .unwrap_or(false)
}

fn query_html(root: &web::Element, selector: &str) -> anyhow::Result<web::HtmlElement> {
    root.query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn query_all_html(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Create the rendering canvas and attach it to the body.
pub fn attach_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.class_list().add_1(CANVAS_CLASS);
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Size the canvas backing store to the viewport at a bounded pixel ratio.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: &ViewportState, pixel_ratio: f64) {
    let w_px = (viewport.width as f64 * pixel_ratio) as u32;
    let h_px = (viewport.height as f64 * pixel_ratio) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}

/// The scroll stage's view of the document.
pub struct DomPage {
    body: web::HtmlElement,
    scroll_content: web::HtmlElement,
    line: Option<web::HtmlElement>,
    reveals: Vec<web::HtmlElement>,
    window: web::Window,
}

impl DomPage {
    pub fn from_document(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let content = document
            .query_selector(CONTENT_SELECTOR)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("missing {CONTENT_SELECTOR}"))?;
        let scroll_content = query_html(&content, SCROLL_CONTENT_SELECTOR)?;
        let line = query_html(&content, LINE_SELECTOR).ok();
        if line.is_none() {
            log::warn!("[page] {LINE_SELECTOR} not found; progress line disabled");
        }
        let reveals: Vec<web::HtmlElement> = INTRO_SELECTORS
            .iter()
            .flat_map(|sel| query_all_html(&content, sel))
            .collect();
        Ok(Self {
            body,
            scroll_content,
            line,
            reveals,
            window: window.clone(),
        })
    }

    pub fn reveal_count(&self) -> usize {
        self.reveals.len()
    }

    pub fn clear_loading(&self) {
        _ = self.body.class_list().remove_1(LOADING_CLASS);
    }
}

impl ScrollSurface for DomPage {
    fn scroll_y(&self) -> f32 {
        self.window.scroll_y().unwrap_or(0.0) as f32
    }

    fn content_height(&self) -> f32 {
        self.scroll_content.get_bounding_client_rect().height() as f32
    }

    fn set_body_height(&self, px: f32) {
        _ = self.body.style().set_property("height", &format!("{px}px"));
    }

    fn set_content_offset(&self, px: f32) {
        _ = self
            .scroll_content
            .style()
            .set_property("transform", &format!("translateY({}px)", -px));
    }
}

impl Page for DomPage {
    fn set_line_scale(&self, scale: f32) {
        if let Some(line) = &self.line {
            let style = line.style();
            _ = style.set_property("transform-origin", "left");
            _ = style.set_property("transform", &format!("scaleX({scale})"));
        }
    }

    fn set_reveal(&self, index: usize, reveal: Reveal) {
        let Some(el) = self.reveals.get(index) else {
            return;
        };
        let style = el.style();
        _ = style.set_property("transform", &format!("translateY({}px)", reveal.offset_y));
        _ = style.set_property("opacity", &reveal.alpha.to_string());
        let visibility = if reveal.alpha <= 0.0 { "hidden" } else { "inherit" };
        _ = style.set_property("visibility", visibility);
    }
}

/// Frame scheduler backed by `requestAnimationFrame`.
pub struct RafScheduler {
    window: web::Window,
    start: Instant,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            start: Instant::now(),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, task: FrameTask) {
        let start = self.start;
        let callback = Closure::once_into_js(move |_timestamp: f64| {
            task(start.elapsed().as_secs_f64());
        });
        _ = self
            .window
            .request_animation_frame(callback.unchecked_ref::<js_sys::Function>());
    }

    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
