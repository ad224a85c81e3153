//! The host scene graph hands the exporter opaque node handles. This
//! trait is the seam between the two worlds: everything the exporter
//! ever asks a light node is listed here, and the host bindings
//! answer without the exporter knowing how.

// pbrt_export
use crate::core::pbrt::{Float, Spectrum};
use crate::core::transform::Matrix4x4;

// Numeric type tags the host reports for the light shapes the
// exporter understands. Comparing against them is the classifier's
// job; nothing downstream ever sees a raw tag again.
pub const TAG_POINT_LIGHT: i32 = 308;
pub const TAG_DIRECTIONAL_LIGHT: i32 = 309;
pub const TAG_SPOT_LIGHT: i32 = 310;
pub const TAG_AREA_LIGHT: i32 = 311;

/// Node name of the vendor area-light implementation. These nodes
/// report an unrecognized type tag and are matched by name instead.
pub const VENDOR_AREA_LIGHT_NAME: &str = "aiAreaLight1";

/// One light node of the host scene graph. The kind-specific
/// accessors are only meaningful once classification has matched the
/// corresponding type tag; the exporter never calls them otherwise.
pub trait Node {
    /// Numeric type tag of the underlying shape node.
    fn type_tag(&self) -> i32;
    /// Short node name.
    fn name(&self) -> String;
    /// Full path of the node, unique within the scene.
    fn full_path_name(&self) -> String;
    /// World matrix placing the node in the scene.
    fn world_matrix(&self) -> Matrix4x4;
    /// Unclamped linear light color.
    fn color(&self) -> Spectrum;
    /// Light intensity multiplier.
    fn intensity(&self) -> Float;
    /// Full cone angle in radians. Spot lights only.
    fn cone_angle(&self) -> Float;
    /// Penumbra drop-off angle in radians. Spot lights only.
    fn drop_off(&self) -> Float;
    /// Soft-shadow sample count. Area lights only.
    fn num_shadow_samples(&self) -> i32;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::{Matrix4x4, Node};
    use crate::core::pbrt::{Float, Spectrum};

    pub struct TestNode {
        pub type_tag: i32,
        pub name: &'static str,
        pub color: Spectrum,
        pub intensity: Float,
        pub cone_angle: Float,
        pub drop_off: Float,
        pub shadow_samples: i32,
    }

    impl TestNode {
        pub fn with_tag(type_tag: i32) -> TestNode {
            TestNode {
                type_tag,
                name: "lightShape1",
                color: Spectrum::new(1.0 as Float),
                intensity: 1.0 as Float,
                cone_angle: 0.0 as Float,
                drop_off: 0.0 as Float,
                shadow_samples: 1_i32,
            }
        }
        pub fn with_name(type_tag: i32, name: &'static str) -> TestNode {
            let mut node: TestNode = TestNode::with_tag(type_tag);
            node.name = name;
            node
        }
    }

    impl Node for TestNode {
        fn type_tag(&self) -> i32 {
            self.type_tag
        }
        fn name(&self) -> String {
            String::from(self.name)
        }
        fn full_path_name(&self) -> String {
            format!("|transform1|{}", self.name)
        }
        fn world_matrix(&self) -> Matrix4x4 {
            Matrix4x4::default()
        }
        fn color(&self) -> Spectrum {
            self.color
        }
        fn intensity(&self) -> Float {
            self.intensity
        }
        fn cone_angle(&self) -> Float {
            self.cone_angle
        }
        fn drop_off(&self) -> Float {
            self.drop_off
        }
        fn num_shadow_samples(&self) -> i32 {
            self.shadow_samples
        }
    }
}
