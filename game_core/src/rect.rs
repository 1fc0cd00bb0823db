use glam::IVec2;

/// Axis-aligned rectangle in screen pixels, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub min: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(IVec2::new(x, y), IVec2::new(w, h))
    }

    pub fn left(&self) -> i32 {
        self.min.x
    }

    pub fn right(&self) -> i32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.min.y
    }

    pub fn bottom(&self) -> i32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> IVec2 {
        self.min + self.size / 2
    }

    /// Half-open overlap test. Rectangles sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.bottom() > other.top()
            && self.top() < other.bottom()
            && self.right() > other.left()
            && self.left() < other.right()
    }

    /// Inclusive point test, edges count as inside
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// True when `inner` lies entirely within this rectangle
    pub fn encloses(&self, inner: &Rect) -> bool {
        inner.left() >= self.left()
            && inner.right() <= self.right()
            && inner.top() >= self.top()
            && inner.bottom() <= self.bottom()
    }
}

/// Free-function form of [`Rect::overlaps`]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(5, 5, 10, 10);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));

        let c = Rect::from_xywh(30, 30, 5, 5);
        assert!(!overlaps(&a, &c));
        assert!(!overlaps(&c, &a));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let right = Rect::from_xywh(10, 0, 10, 10);
        let below = Rect::from_xywh(0, 10, 10, 10);
        assert!(!a.overlaps(&right));
        assert!(!right.overlaps(&a));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::from_xywh(0, 0, 100, 100);
        let inner = Rect::from_xywh(40, 40, 5, 5);
        assert!(outer.overlaps(&inner));
        assert!(outer.encloses(&inner));
        assert!(!inner.encloses(&outer));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rect::from_xywh(10, 10, 20, 20);
        assert!(r.contains(IVec2::new(10, 10)));
        assert!(r.contains(IVec2::new(30, 30)));
        assert!(!r.contains(IVec2::new(31, 15)));
        assert!(!r.contains(IVec2::new(15, 9)));
    }

    #[test]
    fn test_sides_and_center() {
        let r = Rect::from_xywh(0, 100, 1280, 620);
        assert_eq!(r.left(), 0);
        assert_eq!(r.right(), 1280);
        assert_eq!(r.top(), 100);
        assert_eq!(r.bottom(), 720);
        assert_eq!(r.center(), IVec2::new(640, 410));
    }
}
