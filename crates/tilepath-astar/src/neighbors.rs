use tilepath_core::Point;

/// Expansion order: up, left, down, right.
pub(crate) const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(1, 0),
];

/// Reusable buffer for 4-directional neighbour enumeration.
pub(crate) struct Neighbors {
    buf: Vec<Point>,
}

impl Neighbors {
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Cardinal neighbours of `p` in [`CARDINAL`] order, keeping only those
    /// for which `keep` returns `true`.
    pub(crate) fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in CARDINAL {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_and_filter() {
        let mut nb = Neighbors::new();
        let all = nb.cardinal(Point::new(5, 5), |_| true).to_vec();
        assert_eq!(
            all,
            [
                Point::new(5, 4),
                Point::new(4, 5),
                Point::new(5, 6),
                Point::new(6, 5),
            ]
        );
        let right_half = nb.cardinal(Point::new(5, 5), |n| n.x >= 5);
        assert_eq!(right_half, &[Point::new(5, 4), Point::new(5, 6), Point::new(6, 5)]);
    }
}
