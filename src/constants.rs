// DOM hooks and surface settings used by the web frontend.
// Numeric tuning shared with host-side tests lives in `core::constants`.

// Page structure
pub const CONTENT_SELECTOR: &str = ".content";
pub const SCROLL_CONTENT_SELECTOR: &str = ".scroll__content";
pub const LINE_SELECTOR: &str = ".layout__line";
pub const CANVAS_CLASS: &str = "webgl";
pub const LOADING_CLASS: &str = "loading";

// Intro elements, in reveal order; the last selector may match several nodes
pub const INTRO_SELECTORS: [&str; 5] = [
    ".section__title-number",
    ".section__title-text",
    ".section__paragraph",
    ".section__button",
    ".section__title-arrow span",
];

// Query flag enabling pointer-driven uniforms
pub const SOUNDCHECK_QUERY_FLAG: &str = "soundcheck";

// Transparent clear so the page background shows through the canvas
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
