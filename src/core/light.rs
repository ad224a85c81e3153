//! Classification of host light nodes. Every node maps to exactly
//! one **LightKind**; nodes of a kind the renderer cannot express
//! classify as **Unsupported** so the traversal can warn and move on
//! instead of aborting.

// others
use strum_macros::{Display, EnumIter};
// pbrt_export
use crate::core::node::{
    Node, TAG_AREA_LIGHT, TAG_DIRECTIONAL_LIGHT, TAG_POINT_LIGHT, TAG_SPOT_LIGHT,
    VENDOR_AREA_LIGHT_NAME,
};
use crate::core::pbrt::{Float, Spectrum};

/// Renderer-recognized light categories. Displayed with the host's
/// terminology (a distant light is a "Directional" light there),
/// which is what the fragment comment headers use.
#[derive(Display, EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LightKind {
    Point,
    #[strum(serialize = "Directional")]
    Distant,
    Spot,
    Area,
    Unsupported,
}

/// Everything the serializer needs to know about one classified
/// light. The variant fixes the kind for good; kind-specific
/// parameters exist only on the variants they belong to. The node
/// reference is non-owning and only consulted for the path name and
/// the world matrix.
pub enum LightDescriptor<'a> {
    Point {
        node: &'a dyn Node,
        color: Spectrum,
        intensity: Float,
    },
    Distant {
        node: &'a dyn Node,
        color: Spectrum,
        intensity: Float,
    },
    Spot {
        node: &'a dyn Node,
        color: Spectrum,
        intensity: Float,
        cone_angle: Float,
        drop_off: Float,
    },
    Area {
        node: &'a dyn Node,
        color: Spectrum,
        intensity: Float,
        shadow_samples: i32,
    },
    /// Area sub-kind for the vendor light matched by node name. The
    /// photometry is substituted at classification time (see
    /// [classify]); geometry is a placeholder cylinder.
    ///
    /// [classify]: fn.classify.html
    VendorArea {
        node: &'a dyn Node,
        color: Spectrum,
        intensity: Float,
        shadow_samples: i32,
    },
    Unsupported {
        type_tag: i32,
    },
}

/// Intensity substituted for vendor area lights; their attributes are
/// not reachable through the light accessor API.
const VENDOR_AREA_INTENSITY: Float = 20.0;

impl<'a> LightDescriptor<'a> {
    pub fn kind(&self) -> LightKind {
        match self {
            LightDescriptor::Point { .. } => LightKind::Point,
            LightDescriptor::Distant { .. } => LightKind::Distant,
            LightDescriptor::Spot { .. } => LightKind::Spot,
            LightDescriptor::Area { .. } => LightKind::Area,
            LightDescriptor::VendorArea { .. } => LightKind::Area,
            LightDescriptor::Unsupported { .. } => LightKind::Unsupported,
        }
    }
}

/// Detect the given node's light type and return the matching
/// descriptor. The type tag decides first; on a miss the node name is
/// checked against the known vendor light, and everything else is
/// carried as unsupported together with its tag. Total: every node
/// yields exactly one descriptor.
pub fn classify<'a>(node: &'a dyn Node) -> LightDescriptor<'a> {
    let type_tag: i32 = node.type_tag();
    match type_tag {
        TAG_POINT_LIGHT => LightDescriptor::Point {
            node,
            color: node.color(),
            intensity: node.intensity(),
        },
        TAG_DIRECTIONAL_LIGHT => LightDescriptor::Distant {
            node,
            color: node.color(),
            intensity: node.intensity(),
        },
        TAG_SPOT_LIGHT => LightDescriptor::Spot {
            node,
            color: node.color(),
            intensity: node.intensity(),
            cone_angle: node.cone_angle(),
            drop_off: node.drop_off(),
        },
        TAG_AREA_LIGHT => LightDescriptor::Area {
            node,
            color: node.color(),
            intensity: node.intensity(),
            shadow_samples: node.num_shadow_samples(),
        },
        _ => {
            if node.name() == VENDOR_AREA_LIGHT_NAME {
                log::info!(
                    "vendor area light {:?} exported with placeholder attributes",
                    node.name()
                );
                LightDescriptor::VendorArea {
                    node,
                    color: Spectrum::new(1.0 as Float),
                    intensity: VENDOR_AREA_INTENSITY,
                    shadow_samples: 1_i32,
                }
            } else {
                log::warn!("light type {} not supported", type_tag);
                LightDescriptor::Unsupported { type_tag }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use crate::core::light::{classify, LightDescriptor, LightKind};
    use crate::core::node::mock::TestNode;
    use crate::core::node::{
        TAG_AREA_LIGHT, TAG_DIRECTIONAL_LIGHT, TAG_POINT_LIGHT, TAG_SPOT_LIGHT,
    };
    use crate::core::pbrt::{Float, Spectrum};

    #[test]
    fn known_tags_classify_to_their_kinds() {
        let cases: [(i32, LightKind); 4] = [
            (TAG_POINT_LIGHT, LightKind::Point),
            (TAG_DIRECTIONAL_LIGHT, LightKind::Distant),
            (TAG_SPOT_LIGHT, LightKind::Spot),
            (TAG_AREA_LIGHT, LightKind::Area),
        ];
        for (tag, kind) in &cases {
            let node: TestNode = TestNode::with_tag(*tag);
            assert_eq!(classify(&node).kind(), *kind);
        }
    }

    #[test]
    fn classification_is_total() {
        for tag in &[0_i32, -1, 42, 307, 312, 9999] {
            let node: TestNode = TestNode::with_tag(*tag);
            let descriptor = classify(&node);
            assert_eq!(descriptor.kind(), LightKind::Unsupported);
            match descriptor {
                LightDescriptor::Unsupported { type_tag } => assert_eq!(type_tag, *tag),
                _ => panic!("expected an unsupported descriptor"),
            }
        }
    }

    #[test]
    fn vendor_name_fallback_is_second_priority() {
        // An unrecognized tag plus the exact vendor name takes the
        // vendor path with its substituted photometry.
        let node: TestNode = TestNode::with_name(0, "aiAreaLight1");
        match classify(&node) {
            LightDescriptor::VendorArea {
                color,
                intensity,
                shadow_samples,
                ..
            } => {
                assert_eq!(color, Spectrum::new(1.0 as Float));
                assert_eq!(intensity, 20.0 as Float);
                assert_eq!(shadow_samples, 1_i32);
            }
            _ => panic!("expected the vendor area descriptor"),
        }
    }

    #[test]
    fn vendor_fallback_requires_the_exact_name() {
        for name in &["aiAreaLight2", "AiAreaLight1", "aiAreaLight", ""] {
            let node: TestNode = TestNode::with_name(0, name);
            assert_eq!(classify(&node).kind(), LightKind::Unsupported);
        }
    }

    #[test]
    fn type_tag_wins_over_the_vendor_name() {
        let node: TestNode = TestNode::with_name(TAG_POINT_LIGHT, "aiAreaLight1");
        assert_eq!(classify(&node).kind(), LightKind::Point);
    }

    #[test]
    fn vendor_area_reports_the_area_kind() {
        let node: TestNode = TestNode::with_name(0, "aiAreaLight1");
        assert_eq!(classify(&node).kind(), LightKind::Area);
    }

    #[test]
    fn light_kind_is_a_closed_set() {
        assert_eq!(LightKind::iter().count(), 5);
    }
}
