use super::*;

/// Three dimensional vector, also the homogeneous form of a `Vec2`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vec3 { x, y, z }
    }

    pub fn splat(v: T) -> Self {
        Vec3 { x: v, y: v, z: v }
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Drop the `z` component.
    pub fn truncate(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// Lift to homogeneous coordinates `(x, y, z, 1)`.
    pub fn to_homogeneous(self) -> Vec4<T> {
        self.extend(T::one())
    }

    /// Project a homogeneous 2D point back by dividing through `z`.
    /// A zero `z` yields infinite or NaN components.
    pub fn from_homogeneous(self) -> Vec2<T> {
        Vec2::new(self.x / self.z, self.y / self.z)
    }
}

impl_vector!(Vec3, "vec3", 3, { 0 => x, 1 => y, 2 => z });
