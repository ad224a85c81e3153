//! Spotlights emit light in a cone of directions from their
//! position. The host stores the full cone and drop-off angles in
//! radians; the renderer wants the half angles in degrees.

// pbrt_export
use crate::core::light::LightKind;
use crate::core::node::Node;
use crate::core::pbrt::{degrees, float_token, Float, Spectrum};
use crate::lights::{close_block, color_tokens, open_block, Fragment};

/// Export a host spotlight as the renderer's spot light source.
pub fn fragment(
    node: &dyn Node,
    color: &Spectrum,
    intensity: Float,
    cone_angle: Float,
    drop_off: Float,
) -> String {
    let i: Spectrum = color.to_render_rgb(intensity);
    let coneangle: Float = degrees(cone_angle) / 2.0;
    let conedeltaangle: Float = degrees(drop_off) / 2.0;
    let mut f: Fragment = Fragment::new();
    open_block(&mut f, &LightKind::Spot.to_string(), node);
    f.line("\tLightSource \"spot\"");
    f.line(&format!("\t\t\"color I\" [{}]", color_tokens(&i)));
    f.line("\t\t\"point from\" [0 0 0]");
    f.line("\t\t\"point to\" [0 0 -1]");
    f.line(&format!(
        "\t\t\"float coneangle\" [{}]",
        float_token(coneangle)
    ));
    f.line(&format!(
        "\t\t\"float conedeltaangle\" [{}]",
        float_token(conedeltaangle)
    ));
    close_block(&mut f);
    f.into_string()
}
