/// Full-viewport quad as a triangle strip, two floats per vertex.
pub const QUAD_POSITIONS: [f32; 8] = [
    -1.0, -1.0, //
    1.0, -1.0, //
    -1.0, 1.0, //
    1.0, 1.0,
];

pub const COMPONENTS_PER_VERTEX: i32 = 2;

pub const QUAD_VERTEX_COUNT: i32 = QUAD_POSITIONS.len() as i32 / COMPONENTS_PER_VERTEX;
