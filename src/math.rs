/// 3D vector type used for normals and vertex positions.
pub type Vector3 = nalgebra::Vector3<f64>;
