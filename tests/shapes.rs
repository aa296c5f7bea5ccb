use pretty_assertions::assert_eq;

use tagged_variant::{apply, match_pair, Functor, Handle, Variant};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

const fn pt(x: f64, y: f64) -> Point {
    Point { x, y }
}

#[derive(Debug, Clone, PartialEq)]
struct Circle {
    center: Point,
    radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Square {
    center: Point,
    size: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Triangle {
    points: [Point; 3],
}

type Shape = Variant<(Circle, Square, Triangle)>;

struct Area;

impl Functor for Area {
    type Output = f64;
}

impl Handle<Circle> for Area {
    fn handle(&mut self, c: &Circle, _: ()) -> f64 {
        std::f64::consts::PI * c.radius * c.radius
    }
}

impl Handle<Square> for Area {
    fn handle(&mut self, s: &Square, _: ()) -> f64 {
        s.size * s.size
    }
}

impl Handle<Triangle> for Area {
    fn handle(&mut self, t: &Triangle, _: ()) -> f64 {
        let [a, b, c] = t.points;
        ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
    }
}

/// The axis-aligned box around a shape, as `(min, max)`.
struct Bounds;

impl Functor for Bounds {
    type Output = (Point, Point);
}

impl Handle<Circle> for Bounds {
    fn handle(&mut self, c: &Circle, _: ()) -> (Point, Point) {
        let Point { x, y } = c.center;
        (pt(x - c.radius, y - c.radius), pt(x + c.radius, y + c.radius))
    }
}

impl Handle<Square> for Bounds {
    fn handle(&mut self, s: &Square, _: ()) -> (Point, Point) {
        let Point { x, y } = s.center;
        let half = s.size / 2.0;
        (pt(x - half, y - half), pt(x + half, y + half))
    }
}

impl Handle<Triangle> for Bounds {
    fn handle(&mut self, t: &Triangle, _: ()) -> (Point, Point) {
        let xs = t.points.map(|p| p.x);
        let ys = t.points.map(|p| p.y);
        let min = |v: [f64; 3]| v.into_iter().fold(f64::INFINITY, f64::min);
        let max = |v: [f64; 3]| v.into_iter().fold(f64::NEG_INFINITY, f64::max);

        (pt(min(xs), min(ys)), pt(max(xs), max(ys)))
    }
}

fn boxes_overlap((lmin, lmax): (Point, Point), (rmin, rmax): (Point, Point)) -> bool {
    lmin.x <= rmax.x && rmin.x <= lmax.x && lmin.y <= rmax.y && rmin.y <= lmax.y
}

fn circles_meet(a: &Circle, b: &Circle) -> bool {
    let (dx, dy) = (a.center.x - b.center.x, a.center.y - b.center.y);
    dx.hypot(dy) <= a.radius + b.radius
}

fn circle_meets_square(c: &Circle, s: &Square) -> bool {
    let (min, max) = Bounds.handle(s, ());
    let nearest = pt(c.center.x.clamp(min.x, max.x), c.center.y.clamp(min.y, max.y));

    (nearest.x - c.center.x).hypot(nearest.y - c.center.y) <= c.radius
}

fn bounds_meet<L, R>(l: &L, r: &R) -> bool
where
    Bounds: Handle<L, Output = (Point, Point)> + Handle<R, Output = (Point, Point)>,
{
    boxes_overlap(Bounds.handle(l, ()), Bounds.handle(r, ()))
}

fn intersects(lhs: &Shape, rhs: &Shape) -> bool {
    match_pair!(*lhs, *rhs,
        [
            |l: &Circle, r: &Circle| circles_meet(l, r),
            |l: &Circle, r: &Square| circle_meets_square(l, r),
            |l: &Circle, r: &Triangle| bounds_meet(l, r),
        ],
        [
            |l: &Square, r: &Circle| circle_meets_square(r, l),
            |l: &Square, r: &Square| bounds_meet(l, r),
            |l: &Square, r: &Triangle| bounds_meet(l, r),
        ],
        [
            |l: &Triangle, r: &Circle| bounds_meet(l, r),
            |l: &Triangle, r: &Square| bounds_meet(l, r),
            |l: &Triangle, r: &Triangle| bounds_meet(l, r),
        ],
    )
}

fn circle(x: f64, y: f64, radius: f64) -> Shape {
    Shape::new(Circle { center: pt(x, y), radius })
}

fn square(x: f64, y: f64, size: f64) -> Shape {
    Shape::new(Square { center: pt(x, y), size })
}

fn triangle(a: Point, b: Point, c: Point) -> Shape {
    Shape::new(Triangle { points: [a, b, c] })
}

#[test]
fn areas() {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;

    assert!(close(apply(&mut Area, &circle(0.0, 0.0, 1.0), ()), std::f64::consts::PI));
    assert!(close(apply(&mut Area, &square(5.0, 5.0, 2.0), ()), 4.0));
    assert!(close(
        apply(&mut Area, &triangle(pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 3.0)), ()),
        6.0
    ));
}

#[test]
fn circle_inside_square() {
    assert!(intersects(&circle(0.0, 0.0, 101.0), &square(0.0, 0.0, 202.0)));
    assert!(intersects(&square(0.0, 0.0, 202.0), &circle(0.0, 0.0, 101.0)));
}

#[test]
fn near_misses() {
    // The boxes overlap at the corner but the circle does not reach the square.
    let c = circle(0.0, 0.0, 1.0);
    let s = square(1.4, 1.4, 1.0);

    assert!(!intersects(&c, &s));
    assert!(!intersects(&circle(0.0, 0.0, 1.0), &circle(3.0, 0.0, 1.0)));
    assert!(intersects(&circle(0.0, 0.0, 1.0), &circle(2.0, 0.0, 1.0)));
}

#[test]
fn every_pairing_is_covered() {
    let shapes = [
        circle(0.0, 0.0, 1.0),
        square(0.5, 0.0, 1.0),
        triangle(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)),
    ];
    let far = [
        circle(100.0, 100.0, 1.0),
        square(100.0, 100.0, 1.0),
        triangle(pt(100.0, 100.0), pt(101.0, 100.0), pt(100.0, 101.0)),
    ];

    for l in &shapes {
        for r in &shapes {
            assert!(intersects(l, r), "{:?} should meet {:?}", l, r);
        }
        for r in &far {
            assert!(!intersects(l, r), "{:?} should miss {:?}", l, r);
        }
    }

    let bounds = apply(&mut Bounds, &shapes[2], ());
    assert_eq!(bounds, (pt(0.0, 0.0), pt(1.0, 1.0)));
}
