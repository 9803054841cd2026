use super::*;

/// Two dimensional vector / point. Control points and curve samples are `Vec2`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Vec2 { x, y }
    }

    /// Both components set to `v`.
    pub fn splat(v: T) -> Self {
        Vec2 { x: v, y: v }
    }

    /// Append a `z` component.
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }

    /// Append `z` and `w` components.
    pub fn extend4(self, z: T, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, z, w)
    }

    /// Lift to homogeneous coordinates `(x, y, 1)`.
    pub fn to_homogeneous(self) -> Vec3<T> {
        self.extend(T::one())
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Vec2 { x, y }
    }
}

impl<T> From<Vec2<T>> for (T, T) {
    fn from(v: Vec2<T>) -> Self {
        (v.x, v.y)
    }
}

impl_vector!(Vec2, "vec2", 2, { 0 => x, 1 => y });
