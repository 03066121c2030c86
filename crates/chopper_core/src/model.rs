//! Static helicopter model
//!
//! The model is authored as a list of named parts, each a run of triangles
//! with a single RGB colour. Authoring space has the rotor on `z = +15`; the
//! whole mesh is turned upside down about X once at load time so the rotor
//! ends up on the side facing the default camera.

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};
use chopper_math::mat4::{self, Mat4};
use chopper_math::Vec4;

/// A vertex as uploaded to the GPU
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelVertex {
    /// Position in model space
    pub position: [f32; 3],
    /// RGBA colour, normalised to 0..1 by the vertex fetch
    pub color: [u8; 4],
}

/// A named run of triangles sharing one colour
#[derive(Clone, Copy, Debug)]
pub struct ModelPart {
    pub name: &'static str,
    pub positions: &'static [[f32; 3]],
    pub color: [u8; 3],
}

const BLACK: [u8; 3] = [0, 0, 0];
const TAIL: [u8; 3] = [200, 70, 120];

/// Four rotor blades radiating from the hub
const ROTOR: [[f32; 3]; 12] = [
    [0.0, 0.0, 15.0], [75.0, -5.0, 15.0], [75.0, 5.0, 15.0],
    [0.0, 0.0, 15.0], [-75.0, 5.0, 15.0], [-75.0, -5.0, 15.0],
    [0.0, 0.0, 15.0], [5.0, 75.0, 15.0], [-5.0, 75.0, 15.0],
    [0.0, 0.0, 15.0], [-5.0, -75.0, 15.0], [5.0, -75.0, 15.0],
];

const BODY_BOTTOM: [[f32; 3]; 6] = [
    [-15.0, -15.0, -15.0], [-15.0, 15.0, -15.0], [15.0, -15.0, -15.0],
    [15.0, -15.0, -15.0], [-15.0, 15.0, -15.0], [15.0, 15.0, -15.0],
];

const BODY_FRONT: [[f32; 3]; 6] = [
    [-15.0, -15.0, -15.0], [15.0, -15.0, -15.0], [-15.0, -15.0, 15.0],
    [15.0, -15.0, -15.0], [15.0, -15.0, 15.0], [-15.0, -15.0, 15.0],
];

const BODY_RIGHT: [[f32; 3]; 6] = [
    [15.0, -15.0, -15.0], [15.0, 15.0, -15.0], [15.0, -15.0, 15.0],
    [15.0, 15.0, -15.0], [15.0, 15.0, 15.0], [15.0, -15.0, 15.0],
];

const BODY_LEFT: [[f32; 3]; 6] = [
    [-15.0, -15.0, -15.0], [-15.0, -15.0, 15.0], [-15.0, 15.0, -15.0],
    [-15.0, 15.0, -15.0], [-15.0, -15.0, 15.0], [-15.0, 15.0, 15.0],
];

const BODY_BACK: [[f32; 3]; 6] = [
    [-15.0, 15.0, -15.0], [-15.0, 15.0, 15.0], [15.0, 15.0, -15.0],
    [15.0, 15.0, -15.0], [-15.0, 15.0, 15.0], [15.0, 15.0, 15.0],
];

const BODY_TOP: [[f32; 3]; 6] = [
    [-15.0, 15.0, 15.0], [-15.0, -15.0, 15.0], [15.0, 15.0, 15.0],
    [15.0, 15.0, 15.0], [-15.0, -15.0, 15.0], [15.0, -15.0, 15.0],
];

const TAIL_BOTTOM: [[f32; 3]; 6] = [
    [-45.0, -5.0, -5.0], [-45.0, 5.0, -5.0], [-15.0, 5.0, -5.0],
    [-45.0, -5.0, -5.0], [-15.0, 5.0, -5.0], [-15.0, -5.0, -5.0],
];

const TAIL_LEFT: [[f32; 3]; 6] = [
    [-45.0, -5.0, -5.0], [-15.0, -5.0, -5.0], [-45.0, -5.0, 5.0],
    [-45.0, -5.0, 5.0], [-15.0, -5.0, -5.0], [-15.0, -5.0, 5.0],
];

const TAIL_RIGHT: [[f32; 3]; 6] = [
    [-45.0, 5.0, -5.0], [-45.0, 5.0, 5.0], [-15.0, 5.0, -5.0],
    [-45.0, 5.0, 5.0], [-15.0, 5.0, 5.0], [-15.0, 5.0, -5.0],
];

const TAIL_TOP: [[f32; 3]; 6] = [
    [-45.0, -5.0, 5.0], [-15.0, -5.0, 5.0], [-45.0, 5.0, 5.0],
    [-45.0, 5.0, 5.0], [-15.0, -5.0, 5.0], [-15.0, 5.0, 5.0],
];

const TAIL_END: [[f32; 3]; 6] = [
    [-45.0, -5.0, -5.0], [-45.0, -5.0, 5.0], [-45.0, 5.0, -5.0],
    [-45.0, 5.0, -5.0], [-45.0, -5.0, 5.0], [-45.0, 5.0, 5.0],
];

/// Parts of the helicopter in upload order
pub const HELICOPTER_PARTS: [ModelPart; 12] = [
    ModelPart { name: "rotor", positions: &ROTOR, color: BLACK },
    ModelPart { name: "body bottom", positions: &BODY_BOTTOM, color: BLACK },
    ModelPart { name: "body front", positions: &BODY_FRONT, color: [255, 0, 0] },
    ModelPart { name: "body right", positions: &BODY_RIGHT, color: [0, 255, 0] },
    ModelPart { name: "body left", positions: &BODY_LEFT, color: [0, 0, 255] },
    ModelPart { name: "body back", positions: &BODY_BACK, color: [255, 255, 0] },
    ModelPart { name: "body top", positions: &BODY_TOP, color: [255, 0, 255] },
    ModelPart { name: "tail bottom", positions: &TAIL_BOTTOM, color: BLACK },
    ModelPart { name: "tail left", positions: &TAIL_LEFT, color: BLACK },
    ModelPart { name: "tail right", positions: &TAIL_RIGHT, color: TAIL },
    ModelPart { name: "tail top", positions: &TAIL_TOP, color: TAIL },
    ModelPart { name: "tail end", positions: &TAIL_END, color: TAIL },
];

/// Orientation applied to the authored helicopter at load time
pub fn load_orientation() -> Mat4 {
    mat4::x_rotation(PI)
}

/// Flattened, pre-transformed triangle list
#[derive(Clone, Debug, Default)]
pub struct Model {
    vertices: Vec<ModelVertex>,
}

impl Model {
    /// Flatten `parts` into a triangle list, running every position through `pre_transform`
    pub fn from_parts(parts: &[ModelPart], pre_transform: Mat4) -> Self {
        let vertices = parts
            .iter()
            .flat_map(|part| {
                let [r, g, b] = part.color;
                part.positions.iter().map(move |p| {
                    let v = mat4::transform_vector(pre_transform, Vec4::point(p[0], p[1], p[2]));
                    ModelVertex { position: v.xyz(), color: [r, g, b, 255] }
                })
            })
            .collect();

        Self { vertices }
    }

    /// The helicopter, flipped into viewing orientation
    pub fn helicopter() -> Self {
        let model = Self::from_parts(&HELICOPTER_PARTS, load_orientation());
        log::debug!(
            "Built helicopter model: {} parts, {} vertices",
            HELICOPTER_PARTS.len(),
            model.vertex_count()
        );
        model
    }

    pub fn vertices(&self) -> &[ModelVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.vertex_count() / 3
    }
}
