//! Isotropic point light source that emits the same amount of light
//! in all directions.

// pbrt_export
use crate::core::light::LightKind;
use crate::core::node::Node;
use crate::core::pbrt::{Float, Spectrum};
use crate::lights::{close_block, color_tokens, open_block, Fragment};

/// Export a host point light as the renderer's point light source.
pub fn fragment(node: &dyn Node, color: &Spectrum, intensity: Float) -> String {
    let i: Spectrum = color.to_render_rgb(intensity);
    let mut f: Fragment = Fragment::new();
    open_block(&mut f, &LightKind::Point.to_string(), node);
    f.line("\tLightSource \"point\"");
    f.line(&format!("\t\t\"color I\" [{}]", color_tokens(&i)));
    close_block(&mut f);
    f.into_string()
}
