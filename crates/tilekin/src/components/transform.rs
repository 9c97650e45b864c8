use glam::Vec2;

/// Axis-aligned rectangle: top-left corner plus size. Y grows downward.
///
/// The edge setters move the rectangle so that edge lands on the given
/// coordinate; width and height are never touched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Transform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn set_left(&mut self, value: f32) {
        self.x = value;
    }

    pub fn set_right(&mut self, value: f32) {
        self.x = value - self.w;
    }

    pub fn set_top(&mut self, value: f32) {
        self.y = value;
    }

    pub fn set_bottom(&mut self, value: f32) {
        self.y = value - self.h;
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_center() {
        let t = Transform::new(10.0, 20.0, 16.0, 32.0);
        assert_eq!(t.left(), 10.0);
        assert_eq!(t.right(), 26.0);
        assert_eq!(t.top(), 20.0);
        assert_eq!(t.bottom(), 52.0);
        assert_eq!(t.center(), Vec2::new(18.0, 36.0));
    }

    #[test]
    fn edge_setters_preserve_size() {
        let mut t = Transform::new(0.0, 0.0, 16.0, 24.0);
        t.set_right(100.0);
        assert_eq!(t.x, 84.0);
        t.set_bottom(50.0);
        assert_eq!(t.y, 26.0);
        t.set_left(-4.0);
        t.set_top(3.0);
        assert_eq!(t.pos(), Vec2::new(-4.0, 3.0));
        assert_eq!(t.size(), Vec2::new(16.0, 24.0));
    }
}
