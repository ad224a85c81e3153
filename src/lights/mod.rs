//! Serialization of classified lights. Every supported light becomes
//! one self-contained fragment of renderer statements: a comment
//! naming the source node, an attribute block with the node's world
//! transform and the light source statement, and a terminating blank
//! line that keeps fragments separable in the output stream.
//!
//! - AreaLight (and the vendor placeholder variant)
//! - DistantLight
//! - PointLight
//! - SpotLight
//!
//! ## Point Lights
//!
//! Isotropic emitter, exported as `LightSource "point"` with the
//! clamped color times intensity product.
//!
//! ## Distant Lights
//!
//! Directional emitter, exported as `LightSource "distant"` with a
//! conventional default ray from the origin toward -Z; orientation
//! reaches the renderer only through the transform block.
//!
//! ## Spotlights
//!
//! Cone emitter, exported as `LightSource "spot"` with half of the
//! host's cone and drop-off angles in degrees.
//!
//! ## Area Lights
//!
//! Surface emitter, exported as `AreaLightSource "diffuse"` followed
//! by the emitting shape: a unit quad facing -Z, or a placeholder
//! cylinder for the vendor variant.

pub mod area;
pub mod distant;
pub mod point;
pub mod spot;

// pbrt_export
use crate::core::light::LightDescriptor;
use crate::core::node::Node;
use crate::core::pbrt::{float_token, Spectrum};
use crate::core::transform::transform_statement;

/// Line buffer for one fragment. Every call appends one line plus
/// its newline; an empty line terminates the fragment.
pub struct Fragment {
    out: String,
}

impl Fragment {
    pub fn new() -> Fragment {
        Fragment { out: String::new() }
    }
    pub fn line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for Fragment {
    fn default() -> Fragment {
        Fragment::new()
    }
}

/// Three clamped channels as one bracketed-value token list.
pub(crate) fn color_tokens(s: &Spectrum) -> String {
    format!(
        "{} {} {}",
        float_token(s.c[0]),
        float_token(s.c[1]),
        float_token(s.c[2])
    )
}

/// Comment header, attribute block opening, and transform statement
/// shared by every light kind.
pub(crate) fn open_block(f: &mut Fragment, label: &str, node: &dyn Node) {
    f.line(&format!("# {} Light {}", label, node.full_path_name()));
    f.line("AttributeBegin");
    f.line(&transform_statement(&node.world_matrix()));
}

/// Close the attribute block and terminate the fragment.
pub(crate) fn close_block(f: &mut Fragment) {
    f.line("AttributeEnd");
    f.line("");
}

/// Render a descriptor into its renderer fragment. Unsupported
/// descriptors produce no fragment; classification already warned
/// about them.
pub fn serialize(descriptor: &LightDescriptor) -> Option<String> {
    match descriptor {
        LightDescriptor::Point {
            node,
            color,
            intensity,
        } => Some(point::fragment(*node, color, *intensity)),
        LightDescriptor::Distant {
            node,
            color,
            intensity,
        } => Some(distant::fragment(*node, color, *intensity)),
        LightDescriptor::Spot {
            node,
            color,
            intensity,
            cone_angle,
            drop_off,
        } => Some(spot::fragment(
            *node,
            color,
            *intensity,
            *cone_angle,
            *drop_off,
        )),
        LightDescriptor::Area {
            node,
            color,
            intensity,
            shadow_samples,
        } => Some(area::fragment(*node, color, *intensity, *shadow_samples)),
        LightDescriptor::VendorArea {
            node,
            color,
            intensity,
            shadow_samples,
        } => Some(area::vendor_fragment(
            *node,
            color,
            *intensity,
            *shadow_samples,
        )),
        LightDescriptor::Unsupported { .. } => None,
    }
}

/// Camera-space fill lighting for scenes exported without any light
/// nodes: one warm and one cool distant light.
pub fn default_lighting() -> String {
    let mut f: Fragment = Fragment::new();
    f.line("AttributeBegin");
    f.line("CoordSysTransform \"camera\"");
    f.line(
        "LightSource \"distant\" \"color I\" [ .7 .7 .5 ] \
         \"point from\" [0 0 0] \"point to\" [1.0 -1.0 1.0]",
    );
    f.line(
        "LightSource \"distant\" \"color I\" [ .2 .2 .35 ] \
         \"point from\" [0 0 0] \"point to\" [0.0 0.0 1.0]",
    );
    f.line("AttributeEnd");
    f.line("");
    f.into_string()
}
