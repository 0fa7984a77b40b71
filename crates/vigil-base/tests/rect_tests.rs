use vigil_base::{Rect, Vec2};

#[test]
fn test_new() {
    let r = Rect::new(Vec2::new(1.0_f32, 2.0), Vec2::new(3.0, 4.0));
    assert_eq!(r.origin, Vec2::new(1.0, 2.0));
    assert_eq!(r.size, Vec2::new(3.0, 4.0));
}

#[test]
fn test_from_min_max() {
    let r = Rect::<f32>::from_min_max(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
    assert_eq!(r.origin, Vec2::new(1.0, 2.0));
    assert_eq!(r.size, Vec2::new(3.0, 4.0));
}

#[test]
fn test_min_max() {
    let r = Rect::new(Vec2::new(1.0_f32, 2.0), Vec2::new(3.0, 4.0));
    assert_eq!(r.min(), Vec2::new(1.0, 2.0));
    assert_eq!(r.max(), Vec2::new(4.0, 6.0));
}

#[test]
fn test_area() {
    let r = Rect::new(Vec2::new(0.0_f32, 0.0), Vec2::new(5.0, 3.0));
    assert!((r.area() - 15.0).abs() < 1e-6);
}

#[test]
fn test_intersects_overlapping() {
    let a = Rect::new(Vec2::new(0.0_f32, 0.0), Vec2::new(10.0, 10.0));
    let b = Rect::new(Vec2::new(5.0_f32, 5.0), Vec2::new(10.0, 10.0));
    assert!(a.intersects(b));
    assert!(b.intersects(a));
}

#[test]
fn test_intersects_disjoint() {
    let a = Rect::new(Vec2::new(0.0_f32, 0.0), Vec2::new(4.0, 4.0));
    let b = Rect::new(Vec2::new(5.0_f32, 5.0), Vec2::new(4.0, 4.0));
    assert!(!a.intersects(b));
}

#[test]
fn test_intersection_area() {
    let a = Rect::new(Vec2::new(0.0_f32, 0.0), Vec2::new(10.0, 10.0));
    let b = Rect::new(Vec2::new(5.0_f32, 5.0), Vec2::new(10.0, 10.0));
    let inter = a.intersection(b).unwrap();
    assert_eq!(inter.origin, Vec2::new(5.0, 5.0));
    assert_eq!(inter.size, Vec2::new(5.0, 5.0));
    assert!((inter.area() - 25.0).abs() < 1e-6);
}

#[test]
fn test_intersection_disjoint_is_none() {
    let a = Rect::new(Vec2::new(0.0_f32, 0.0), Vec2::new(1.0, 1.0));
    let b = Rect::new(Vec2::new(2.0_f32, 2.0), Vec2::new(1.0, 1.0));
    assert!(a.intersection(b).is_none());
}

#[test]
fn test_integer_rect() {
    let r = Rect::new(Vec2::new(3_i32, 4), Vec2::new(20, 10));
    assert_eq!(r.max(), Vec2::new(23, 14));
    assert_eq!(r.area(), 200);
}
