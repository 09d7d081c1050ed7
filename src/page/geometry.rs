/// Axis-aligned box in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);

        if right > left && bottom > top {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Fraction of this box's area that lies inside `viewport`.
    /// Zero-area boxes report 0.
    pub fn visible_ratio(&self, viewport: &Rect) -> f64 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.intersection(viewport)
            .map(|overlap| overlap.area() / area)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_ratio() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);

        assert_eq!(Rect::new(10.0, 10.0, 20.0, 20.0).visible_ratio(&viewport), 1.0);
        assert_eq!(Rect::new(0.0, 200.0, 100.0, 50.0).visible_ratio(&viewport), 0.0);
        // bottom 10 of 100 rows visible
        let partial = Rect::new(0.0, 90.0, 100.0, 100.0);
        assert!((partial.visible_ratio(&viewport) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(Rect::new(0.0, 100.0, 100.0, 10.0).intersection(&viewport).is_none());
        assert_eq!(Rect::new(5.0, 5.0, 0.0, 0.0).visible_ratio(&viewport), 0.0);
    }
}
