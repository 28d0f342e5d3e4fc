use std::f32::consts::PI;

/// 2D point/vector for physics calculations
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Component-wise sum. Operand is another vector or an `(x, y)` pair.
    pub fn add(self, rhs: impl Into<Vec2>) -> Self {
        let rhs = rhs.into();
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }

    pub fn subtract(self, rhs: impl Into<Vec2>) -> Self {
        let rhs = rhs.into();
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }

    pub fn multiply(self, rhs: impl Into<Vec2>) -> Self {
        let rhs = rhs.into();
        Self { x: self.x * rhs.x, y: self.y * rhs.y }
    }

    /// Component-wise quotient. Division by a zero component yields an
    /// infinite/NaN component, same as plain float division.
    pub fn divide(self, rhs: impl Into<Vec2>) -> Self {
        let rhs = rhs.into();
        Self { x: self.x / rhs.x, y: self.y / rhs.y }
    }

    pub fn floor(self) -> Self {
        Self { x: self.x.floor(), y: self.y.floor() }
    }

    pub fn round(self) -> Self {
        Self { x: self.x.round(), y: self.y.round() }
    }

    pub fn abs(self) -> Self {
        Self { x: self.x.abs(), y: self.y.abs() }
    }

    /// Overwrite this point in place (the only mutating operation).
    pub fn set_position(&mut self, other: Vec2) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Angle (radians) of the vector from `self` to `other`, `atan2(dx, dy)`.
    ///
    /// Range is `(-PI, PI]`; coincident points give `0.0`.
    pub fn look_at(self, other: Vec2) -> f32 {
        (other.x - self.x).atan2(other.y - self.y)
    }

    /// Legacy degrees variant of [`Vec2::look_at`], normalized to `[0, 360)`.
    pub fn look_at_degrees(self, other: Vec2) -> f32 {
        let deg = self.look_at(other) / PI * 180.0;
        if deg < 0.0 {
            deg + 360.0
        } else {
            deg
        }
    }

    /// Unit vector for an angle: `(sin r, cos r)`.
    pub fn direction(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { x: sin, y: cos }
    }

    pub fn direction_reversed(radians: f32) -> Self {
        -Self::direction(radians)
    }

    /// Unit step from `self` toward `other`.
    pub fn motion_to(self, other: Vec2) -> Self {
        Self::direction(self.look_at(other))
    }

    /// Unit step from `self` away from `other`.
    pub fn motion_reversed_to(self, other: Vec2) -> Self {
        Self::direction_reversed(self.look_at(other))
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}
