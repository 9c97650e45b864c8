use glam::Vec2;

/// Velocity and acceleration, in pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinetic {
    pub speed_x: f32,
    pub speed_y: f32,
    pub acc_x: f32,
    pub acc_y: f32,
}

impl Kinetic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speed(mut self, speed: Vec2) -> Self {
        self.speed_x = speed.x;
        self.speed_y = speed.y;
        self
    }

    pub fn with_acc(mut self, acc: Vec2) -> Self {
        self.acc_x = acc.x;
        self.acc_y = acc.y;
        self
    }

    pub fn speed(&self) -> Vec2 {
        Vec2::new(self.speed_x, self.speed_y)
    }
}
