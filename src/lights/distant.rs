//! A distant light, also known as directional light, describes an
//! emitter that deposits illumination from the same direction at
//! every point in space.

// pbrt_export
use crate::core::light::LightKind;
use crate::core::node::Node;
use crate::core::pbrt::{Float, Spectrum};
use crate::lights::{close_block, color_tokens, open_block, Fragment};

/// Export a host directional light as the renderer's distant light
/// source. The emission ray is the conventional default from the
/// origin toward -Z; the node's orientation reaches the renderer only
/// through the transform statement of the attribute block.
pub fn fragment(node: &dyn Node, color: &Spectrum, intensity: Float) -> String {
    let l: Spectrum = color.to_render_rgb(intensity);
    let mut f: Fragment = Fragment::new();
    open_block(&mut f, &LightKind::Distant.to_string(), node);
    f.line("\tLightSource \"distant\"");
    f.line(&format!("\t\t\"color L\" [{}]", color_tokens(&l)));
    f.line("\t\t\"point from\" [0 0 0]");
    f.line("\t\t\"point to\" [0 0 -1]");
    close_block(&mut f);
    f.into_string()
}
