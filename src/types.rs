//! Core data types for deformkit

/// Dense 3x3 matrix, row-major
pub type Matrix3 = [[f64; 3]; 3];

/// Cartesian vector in the linear units of the sphere it was built on
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the dot product with another vector
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the Euclidean length
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns this vector multiplied by a scalar
    pub fn scale(&self, factor: f64) -> Vector3 {
        Vector3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Returns the component-wise sum
    pub fn add(&self, other: &Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}
