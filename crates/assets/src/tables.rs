//! Literal triangle lists for the four static meshes. Every triangle stores
//! its three vertices explicitly; there is no index buffer.

/// Room walls and ceiling: position, UV, normal.
#[rustfmt::skip]
pub static ROOM: [f32; 888] = [
     -0.2,   0.3,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
      1.0,   0.3,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
      1.0,   0.5,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,
      1.0,   0.5,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.2,   0.5,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.2,   0.3,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,

     -0.3,   0.3,  -0.6,   1.0,   1.0,   0.0,   0.0,   1.0,
      1.0,   0.3,  -0.6,   1.0,   0.0,   0.0,   0.0,   1.0,
      1.0,   0.5,  -0.6,   0.0,   1.0,   0.0,   0.0,   1.0,
      1.0,   0.5,  -0.6,   1.0,   1.0,   0.0,   0.0,   1.0,
     -0.3,   0.5,  -0.6,   1.0,   0.0,   0.0,   0.0,   1.0,
     -0.3,   0.3,  -0.6,   0.0,   1.0,   0.0,   0.0,   1.0,

      0.9,   0.3,  -0.6,   1.0,   1.0,  -1.0,   0.0,   0.0,
      1.0,   0.3,  -0.6,   1.0,   0.0,  -1.0,   0.0,   0.0,
      1.0,  -0.5,  -0.6,   0.0,   1.0,  -1.0,   0.0,   0.0,
      1.0,  -0.5,  -0.6,   1.0,   1.0,  -1.0,   0.0,   0.0,
      0.9,  -0.5,  -0.6,   1.0,   0.0,  -1.0,   0.0,   0.0,
      0.9,   0.3,  -0.6,   0.0,   1.0,  -1.0,   0.0,   0.0,

     -0.5,  -0.5,  -0.5,   1.0,   1.0,   1.0,   0.0,   0.0,
     -0.2,  -0.5,  -0.5,   1.0,   0.0,   1.0,   0.0,   0.0,
     -0.2,   0.2,  -0.5,   0.0,   1.0,   1.0,   0.0,   0.0,
     -0.5,   0.2,  -0.5,   1.0,   1.0,   1.0,   0.0,   0.0,
     -0.2,   0.2,  -0.5,   1.0,   0.0,   1.0,   0.0,   0.0,
     -0.5,  -0.5,  -0.5,   0.0,   1.0,   1.0,   0.0,   0.0,

     -0.5,   0.2,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.2,   0.2,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.2,   0.5,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,

     -0.6,  -0.5,  -0.6,   1.0,   1.0,   0.0,  -1.0,   0.0,
     -0.2,  -0.5,  -0.6,   1.0,   0.0,   0.0,  -1.0,   0.0,
     -0.2,   0.2,  -0.6,   0.0,   1.0,   0.0,  -1.0,   0.0,
     -0.2,   0.2,  -0.6,   1.0,   1.0,   0.0,  -1.0,   0.0,
     -0.6,   0.2,  -0.6,   1.0,   0.0,   0.0,  -1.0,   0.0,
     -0.6,  -0.5,  -0.6,   0.0,   1.0,   0.0,  -1.0,   0.0,

     -0.6,   0.2,  -0.6,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.3,   0.2,  -0.6,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.3,   0.5,  -0.6,   0.0,   1.0,   0.0,   0.0,  -1.0,

     -0.6,   0.2,  -0.6,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.2,   0.2,  -0.6,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.2,   0.5,  -0.6,   0.0,   1.0,   0.0,   0.0,  -1.0,

      1.0,   0.5,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
      1.0,   0.5,  -0.6,   1.0,   0.0,   0.0,   0.0,  -1.0,
      1.0,  -0.5,  -0.6,   0.0,   1.0,   0.0,   0.0,  -1.0,
      1.0,  -0.5,  -0.6,   1.0,   1.0,   0.0,   0.0,  -1.0,
      1.0,  -0.5,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
      1.0,   0.5,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,

      0.9,   0.3,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
      0.9,   0.3,  -0.6,   1.0,   0.0,   0.0,   0.0,  -1.0,
      0.9,  -0.5,  -0.6,   0.0,   1.0,   0.0,   0.0,  -1.0,
      0.9,  -0.5,  -0.6,   1.0,   1.0,   0.0,   0.0,  -1.0,
      0.9,  -0.5,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
      0.9,   0.3,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,

     -0.2,   0.3,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.2,   0.3,  -0.6,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.2,  -0.5,  -0.6,   0.0,   1.0,   0.0,   0.0,  -1.0,
     -0.2,  -0.5,  -0.6,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.2,  -0.5,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.2,   0.3,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,

      0.9,   0.3,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
      0.9,   0.3,  -0.6,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.2,   0.3,  -0.6,   0.0,   1.0,   0.0,   0.0,  -1.0,
     -0.2,   0.3,  -0.6,   0.0,   1.0,   0.0,   0.0,  -1.0,
     -0.2,   0.3,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,
      0.9,   0.3,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,

      0.9,   0.3,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
      0.9,   0.3,  -0.6,   1.0,   0.0,   0.0,   0.0,  -1.0,
      0.9,  -0.5,  -0.6,   0.0,   1.0,   0.0,   0.0,  -1.0,
      0.9,  -0.5,  -0.6,   1.0,   1.0,   0.0,   0.0,  -1.0,
      0.9,  -0.5,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
      0.9,   0.3,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,

      0.9,   0.3,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
      1.0,   0.3,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
      1.0,  -0.5,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,
      1.0,  -0.5,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
      0.9,  -0.5,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
      0.9,   0.3,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,

     -0.5,   0.2,   1.0,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.5,   0.2,  -0.5,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.5,  -0.5,  -0.5,   0.0,   1.0,   0.0,   0.0,  -1.0,
     -0.5,  -0.5,  -0.5,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.5,  -0.5,   1.0,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.5,   0.2,   1.0,   0.0,   1.0,   0.0,   0.0,  -1.0,

     -0.6,   0.2,   1.0,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.6,   0.2,  -0.6,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.6,  -0.5,  -0.6,   0.0,   1.0,   0.0,   0.0,  -1.0,
     -0.6,  -0.5,  -0.6,   1.0,   1.0,   0.0,   0.0,  -1.0,
     -0.6,  -0.5,   1.0,   1.0,   0.0,   0.0,   0.0,  -1.0,
     -0.6,   0.2,   1.0,   0.0,   1.0,   0.0,   0.0,  -1.0,

     -0.5,   0.2,  -0.5,   1.0,   1.0,   1.0,   0.0,   0.0,
     -0.2,   0.5,  -0.5,   1.0,   0.0,   1.0,   0.0,   0.0,
     -0.2,   0.5,   1.0,   0.0,   1.0,   1.0,   0.0,   0.0,
     -0.2,   0.5,   1.0,   1.0,   1.0,   1.0,   0.0,   0.0,
     -0.5,   0.2,   1.0,   1.0,   0.0,   1.0,   0.0,   0.0,
     -0.5,   0.2,  -0.5,   0.0,   1.0,   1.0,   0.0,   0.0,

     -0.6,   0.2,  -0.6,   1.0,   1.0,   1.0,   0.0,   0.0,
     -0.3,   0.5,  -0.6,   1.0,   0.0,   1.0,   0.0,   0.0,
     -0.3,   0.5,   1.0,   0.0,   1.0,   1.0,   0.0,   0.0,
     -0.3,   0.5,   1.0,   1.0,   1.0,   1.0,   0.0,   0.0,
     -0.6,   0.2,   1.0,   1.0,   0.0,   1.0,   0.0,   0.0,
     -0.6,   0.2,  -0.6,   0.0,   1.0,   1.0,   0.0,   0.0,

     -0.6,  -0.5,   1.0,   1.0,   1.0,   1.0,   1.0,   0.0,
     -0.5,  -0.5,   1.0,   1.0,   0.0,   1.0,   1.0,   0.0,
     -0.5,   0.2,   1.0,   0.0,   1.0,   1.0,   1.0,   0.0,
     -0.5,   0.2,   1.0,   1.0,   1.0,   1.0,   1.0,   0.0,
     -0.6,   0.2,   1.0,   1.0,   0.0,   1.0,   1.0,   0.0,
     -0.6,  -0.5,   1.0,   0.0,   1.0,   1.0,   1.0,   0.0,

     -0.3,   0.5,   1.0,   1.0,   1.0,   1.0,   0.0,   0.0,
     -0.2,   0.5,   1.0,   1.0,   0.0,   1.0,   0.0,   0.0,
     -0.5,   0.2,   1.0,   0.0,   1.0,   1.0,   0.0,   0.0,
     -0.6,   0.2,   1.0,   1.0,   1.0,   1.0,   0.0,   0.0,
     -0.5,   0.2,   1.0,   1.0,   0.0,   1.0,   0.0,   0.0,
     -0.3,   0.5,   1.0,   0.0,   1.0,   1.0,   0.0,   0.0,
];

/// Ground plane under the room: position, UV.
#[rustfmt::skip]
pub static PLANE: [f32; 30] = [
     -5.0,  -0.6,  -5.0,   1.0,   1.0,
      5.0,  -0.6,  -5.0,   1.0,   0.0,
      5.0,  -0.6,   5.0,   0.0,   1.0,
      5.0,  -0.6,   5.0,   1.0,   1.0,
     -5.0,  -0.6,   5.0,   1.0,   0.0,
     -5.0,  -0.6,  -5.0,   0.0,   1.0,
];

/// Two-level floor slab: position, UV.
#[rustfmt::skip]
pub static FLOOR: [f32; 180] = [
     -0.5,  -0.5,  -0.5,   0.0,   1.0,
      1.0,  -0.5,  -0.5,   1.0,   1.0,
      1.0,  -0.5,   1.0,   1.0,   0.0,
      1.0,  -0.5,   1.0,   0.0,   1.0,
     -0.5,  -0.5,   1.0,   1.0,   1.0,
     -0.5,  -0.5,  -0.5,   1.0,   0.0,

     -0.6,  -0.6,  -0.6,   0.0,   1.0,
      1.0,  -0.6,  -0.6,   1.0,   1.0,
      1.0,  -0.6,   1.0,   1.0,   0.0,
      1.0,  -0.6,   1.0,   0.0,   1.0,
     -0.6,  -0.6,   1.0,   1.0,   1.0,
     -0.6,  -0.6,  -0.6,   1.0,   0.0,

     -0.6,  -0.5,  -0.6,   0.0,   1.0,
      1.0,  -0.5,  -0.6,   1.0,   1.0,
      1.0,  -0.6,  -0.6,   1.0,   0.0,
      1.0,  -0.6,  -0.6,   0.0,   1.0,
     -0.6,  -0.6,  -0.6,   1.0,   1.0,
     -0.6,  -0.5,  -0.6,   1.0,   0.0,

     -0.6,  -0.6,   1.0,   0.0,   1.0,
     -0.6,  -0.6,  -0.6,   1.0,   1.0,
     -0.6,  -0.5,  -0.6,   1.0,   0.0,
     -0.6,  -0.5,  -0.6,   0.0,   1.0,
     -0.6,  -0.5,   1.0,   1.0,   1.0,
     -0.6,  -0.6,   1.0,   1.0,   0.0,

     -0.6,  -0.5,   1.0,   0.0,   1.0,
      1.0,  -0.5,   1.0,   1.0,   1.0,
      1.0,  -0.6,   1.0,   1.0,   0.0,
      1.0,  -0.6,   1.0,   0.0,   1.0,
     -0.6,  -0.6,   1.0,   1.0,   1.0,
     -0.6,  -0.5,   1.0,   1.0,   0.0,

      1.0,  -0.6,   1.0,   0.0,   1.0,
      1.0,  -0.6,  -0.6,   1.0,   1.0,
      1.0,  -0.5,  -0.6,   1.0,   0.0,
      1.0,  -0.5,  -0.6,   0.0,   1.0,
      1.0,  -0.5,   1.0,   1.0,   1.0,
      1.0,  -0.6,   1.0,   1.0,   0.0,
];

/// Lamp block: position, normal, UV.
#[rustfmt::skip]
pub static LAMP: [f32; 288] = [
     -5.0,   0.3,  -1.0,   0.0,   0.0,  -1.0,   0.0,   0.0,
      2.0,   0.3,  -1.0,   0.0,   0.0,  -1.0,   1.0,   0.0,
      2.0,   0.5,  -1.0,   0.0,   0.0,  -1.0,   1.0,   1.0,
      2.0,   0.5,  -1.0,   0.0,   0.0,  -1.0,   1.0,   1.0,
     -5.0,   0.5,  -1.0,   0.0,   0.0,  -1.0,   0.0,   1.0,
     -5.0,   0.3,  -1.0,   0.0,   0.0,  -1.0,   0.0,   0.0,

     -5.0,   0.3,   2.5,   0.0,   0.0,   1.0,   0.0,   0.0,
      2.0,   0.3,   2.5,   0.0,   0.0,   1.0,   1.0,   0.0,
      2.0,   0.5,   2.5,   0.0,   0.0,   1.0,   1.0,   1.0,
      2.0,   0.5,   2.5,   0.0,   0.0,   1.0,   1.0,   1.0,
     -5.0,   0.5,   2.5,   0.0,   0.0,   1.0,   0.0,   1.0,
     -5.0,   0.3,   2.5,   0.0,   0.0,   1.0,   0.0,   0.0,

     -5.0,   0.5,   2.5,  -1.0,   0.0,   0.0,   1.0,   0.0,
     -5.0,   0.5,  -1.0,  -1.0,   0.0,   0.0,   1.0,   1.0,
     -5.0,   0.3,  -1.0,  -1.0,   0.0,   0.0,   0.0,   1.0,
     -5.0,   0.3,  -1.0,  -1.0,   0.0,   0.0,   0.0,   1.0,
     -5.0,   0.3,   2.5,  -1.0,   0.0,   0.0,   0.0,   0.0,
     -5.0,   0.5,   2.5,  -1.0,   0.0,   0.0,   1.0,   0.0,

      2.0,   0.5,   2.5,   1.0,   0.0,   0.0,   1.0,   0.0,
      2.0,   0.5,  -1.0,   1.0,   0.0,   0.0,   1.0,   1.0,
      2.0,   0.3,  -1.0,   1.0,   0.0,   0.0,   0.0,   1.0,
      2.0,   0.3,  -1.0,   1.0,   0.0,   0.0,   0.0,   1.0,
      2.0,   0.3,   2.5,   1.0,   0.0,   0.0,   0.0,   0.0,
      2.0,   0.5,   2.5,   1.0,   0.0,   0.0,   1.0,   0.0,

     -5.0,   0.5,  -1.0,   0.0,  -1.0,   0.0,   0.0,   1.0,
      2.0,   0.5,  -1.0,   0.0,  -1.0,   0.0,   1.0,   1.0,
      2.0,   0.5,   2.5,   0.0,  -1.0,   0.0,   1.0,   0.0,
      2.0,   0.5,   2.5,   0.0,  -1.0,   0.0,   1.0,   0.0,
     -5.0,   0.5,   2.5,   0.0,  -1.0,   0.0,   0.0,   0.0,
     -5.0,   0.5,  -1.0,   0.0,  -1.0,   0.0,   0.0,   1.0,

     -5.0,   0.3,  -1.0,   0.0,   1.0,   0.0,   0.0,   1.0,
      2.0,   0.3,  -1.0,   0.0,   1.0,   0.0,   1.0,   1.0,
      2.0,   0.3,   2.5,   0.0,   1.0,   0.0,   1.0,   0.0,
      2.0,   0.3,   2.5,   0.0,   1.0,   0.0,   1.0,   0.0,
     -5.0,   0.3,   2.5,   0.0,   1.0,   0.0,   0.0,   0.0,
     -5.0,   0.3,  -1.0,   0.0,   1.0,   0.0,   0.0,   1.0,
];
