use super::*;

/// Four dimensional vector. Used for matrix rows and the cubic parameter vector `(t³, t², t, 1)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Vec4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Vec4 { x, y, z, w }
    }

    pub fn splat(v: T) -> Self {
        Vec4 { x: v, y: v, z: v, w: v }
    }

    /// Drop the `w` component.
    pub fn truncate(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Project a homogeneous 3D point back by dividing through `w`.
    /// A zero `w` yields infinite or NaN components.
    pub fn from_homogeneous(self) -> Vec3<T> {
        Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w)
    }
}

impl_vector!(Vec4, "vec4", 4, { 0 => x, 1 => y, 2 => z, 3 => w });
