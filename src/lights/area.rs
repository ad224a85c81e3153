//! Area lights are light sources defined by a shape that emits light
//! from its surface. The host light shape is replaced on export by a
//! unit quad facing -Z, scaled and placed by the node's world
//! transform; the vendor variant gets a placeholder cylinder because
//! its true emitter geometry is not readable.

// pbrt_export
use crate::core::light::LightKind;
use crate::core::node::Node;
use crate::core::pbrt::{Float, Spectrum};
use crate::lights::{close_block, color_tokens, open_block, Fragment};

fn area_light_source(f: &mut Fragment, shadow_samples: i32, l: &Spectrum) {
    f.line(&format!(
        "\tAreaLightSource \"diffuse\" \"integer samples\" {} \"rgb L\" [{}]",
        shadow_samples,
        color_tokens(l)
    ));
}

/// Export a host area light as the renderer's diffuse area light
/// source, with a two-triangle unit quad as the emitting shape.
pub fn fragment(
    node: &dyn Node,
    color: &Spectrum,
    intensity: Float,
    shadow_samples: i32,
) -> String {
    let l: Spectrum = color.to_render_rgb(intensity);
    let mut f: Fragment = Fragment::new();
    open_block(&mut f, &LightKind::Area.to_string(), node);
    area_light_source(&mut f, shadow_samples, &l);
    f.line("\tShape \"trianglemesh\"");
    f.line("\t\t\"point P\"         [ -1 -1   0   1 -1   0      1 1  0   -1 1  0 ]");
    f.line("\t\t\"normal N\"        [  0  0  -1   0  0  -1      0 0 -1    0 0 -1 ]");
    f.line("\t\t\"integer indices\" [  0  1   2   0  2   3 ]");
    close_block(&mut f);
    f.into_string()
}

/// Export the vendor area light. The photometry was substituted at
/// classification time and the emitter geometry is unknown, so a unit
/// cylinder stands in for the shape.
pub fn vendor_fragment(
    node: &dyn Node,
    color: &Spectrum,
    intensity: Float,
    shadow_samples: i32,
) -> String {
    let l: Spectrum = color.to_render_rgb(intensity);
    let mut f: Fragment = Fragment::new();
    open_block(&mut f, "Arnold Area", node);
    area_light_source(&mut f, shadow_samples, &l);
    f.line("\tShape \"cylinder\"");
    close_block(&mut f);
    f.into_string()
}
