//! # pbrt_export
//!
//! [Rust][rust] crate to export the light nodes of a host scene graph
//! as [PBRT][pbrt] scene description fragments. The host traversal
//! hands each light node to [classify], the returned descriptor is
//! rendered by [serialize], and the resulting fragment is appended to
//! the scene file by a [SceneWriter].
//!
//! Nodes the exporter does not recognize classify as unsupported and
//! produce no fragment; a warning is logged and the traversal moves
//! on to the next light.
//!
//! [rust]: https://www.rust-lang.org
//! [pbrt]: http://www.pbrt.org
//! [classify]: core/light/fn.classify.html
//! [serialize]: lights/fn.serialize.html
//! [SceneWriter]: core/writer/struct.SceneWriter.html
//!
//! ```rust
//! extern crate pbrt_export;
//!
//! use pbrt_export::core::light::classify;
//! use pbrt_export::core::node::{Node, TAG_POINT_LIGHT};
//! use pbrt_export::core::pbrt::{Float, Spectrum};
//! use pbrt_export::core::transform::Matrix4x4;
//! use pbrt_export::lights::serialize;
//!
//! struct PointNode {}
//!
//! impl Node for PointNode {
//!     fn type_tag(&self) -> i32 {
//!         TAG_POINT_LIGHT
//!     }
//!     fn name(&self) -> String {
//!         String::from("pointLightShape1")
//!     }
//!     fn full_path_name(&self) -> String {
//!         String::from("|pointLight1|pointLightShape1")
//!     }
//!     fn world_matrix(&self) -> Matrix4x4 {
//!         Matrix4x4::default()
//!     }
//!     fn color(&self) -> Spectrum {
//!         Spectrum::rgb(1.0, 0.5, 0.25)
//!     }
//!     fn intensity(&self) -> Float {
//!         1.5
//!     }
//!     fn cone_angle(&self) -> Float {
//!         0.0
//!     }
//!     fn drop_off(&self) -> Float {
//!         0.0
//!     }
//!     fn num_shadow_samples(&self) -> i32 {
//!         1
//!     }
//! }
//!
//! fn main() {
//!     let node: PointNode = PointNode {};
//!     let descriptor = classify(&node);
//!     let fragment: String = serialize(&descriptor).unwrap();
//!     print!("{}", fragment);
//! }
//! ```

#[macro_use] extern crate impl_ops;

pub mod core;
pub mod lights;
