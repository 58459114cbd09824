// tests/vector2_tests.rs

use snapvec::{Options, Vector2, VectorError};

#[test]
fn new_and_axis_accessors() {
    let v = Vector2::new(1.0, 2.0);
    assert_eq!(v.x(), 1.0);
    assert_eq!(v.y(), 2.0);
    assert_eq!(v.coords(), [1.0, 2.0]);
}

#[test]
fn construct_from_array_and_slice() {
    let v = Vector2::try_new([3.0, 4.0]).unwrap();
    assert_eq!(v.coords(), [3.0, 4.0]);

    let seq = vec![5.0, 6.0];
    let v = Vector2::try_new(&seq[..]).unwrap();
    assert_eq!(v.coords(), [5.0, 6.0]);
}

#[test]
fn construct_from_wrong_length_fails() {
    let err = Vector2::try_new(vec![1.0]).unwrap_err();
    assert_eq!(err, VectorError::InvalidLength { expected: 2, actual: 1 });

    let err = Vector2::try_new(vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, VectorError::InvalidLength { expected: 2, actual: 3 });

    let err = Vector2::try_new(Vec::<f64>::new()).unwrap_err();
    assert_eq!(err, VectorError::InvalidLength { expected: 2, actual: 0 });
}

#[test]
fn copy_construct_is_independent() {
    let src = Vector2::new(7.0, 8.0);
    let mut dup = Vector2::try_new(&src).unwrap();
    assert_eq!(dup.coords(), src.coords());

    dup.add(1.0, 1.0);
    assert_eq!(dup.coords(), [8.0, 9.0]);
    assert_eq!(src.coords(), [7.0, 8.0]);
}

#[test]
fn fresh_vector_is_never_dirty() {
    assert!(!Vector2::new(1.0, 2.0).dirty());
    assert!(!Vector2::try_new([1.0, 2.0]).unwrap().dirty());
    assert!(!Vector2::with_options(1.0, 2.0, Options::with_history(4)).dirty());
}

#[test]
fn mutation_sets_dirty_until_saved() {
    let mut v = Vector2::new(0.0, 0.0);

    v.add(1.0, 0.0);
    assert!(v.dirty());
    v.save();
    assert!(!v.dirty());

    v.subtract(0.0, 2.0);
    assert!(v.dirty());
    v.save();
    assert!(!v.dirty());

    v.lerp_to(10.0, 10.0, 0.5);
    assert!(v.dirty());

    // axis setters mutate without saving
    v.save();
    v.set_x(99.0);
    assert!(v.dirty());
}

#[test]
fn set_replaces_coords_without_saving() {
    let mut v = Vector2::new(0.0, 0.0);
    v.set((3.0, 4.0)).unwrap();
    assert_eq!(v.coords(), [3.0, 4.0]);
    assert!(v.dirty());
    v.save();
    assert!(!v.dirty());
}

#[test]
fn failed_set_leaves_vector_untouched() {
    let mut v = Vector2::new(1.0, 2.0);
    let err = v.set(vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, VectorError::InvalidLength { expected: 2, actual: 3 });
    assert_eq!(v.coords(), [1.0, 2.0]);
    assert!(!v.dirty());
}

#[test]
fn history_disabled_by_default() {
    let mut v = Vector2::new(0.0, 0.0);
    v.add(1.0, 1.0);
    v.save();
    v.add(1.0, 1.0);
    v.save();
    assert!(v.history().is_empty());
}

#[test]
fn history_is_bounded_and_most_recent_first() {
    let k = 3;
    let mut v = Vector2::with_options(0.0, 0.0, Options::with_history(k));

    // 5 more saves on top of the constructor's initial one
    for i in 1..=5 {
        v.set((i as f64, 0.0)).unwrap();
        v.save();
    }

    assert_eq!(v.history().len(), k);
    // most recent first, oldest evicted
    assert_eq!(v.history()[0], [5.0, 0.0]);
    assert_eq!(v.history()[1], [4.0, 0.0]);
    assert_eq!(v.history()[2], [3.0, 0.0]);
}

#[test]
fn history_entries_are_snapshots() {
    let mut v = Vector2::with_options(1.0, 1.0, Options::with_history(2));
    v.save();
    v.add(10.0, 10.0);
    // the stored snapshot must not follow later mutation
    assert_eq!(v.history()[0], [1.0, 1.0]);
}

#[test]
fn static_lerp_endpoints_and_midpoint() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(10.0, 4.0);

    assert_eq!(Vector2::lerp(&a, &b, 0.0), a);
    assert_eq!(Vector2::lerp(&a, &b, 1.0), b);
    assert_eq!(Vector2::lerp(&a, &b, 0.5), Vector2::new(5.0, 2.0));

    // inputs untouched
    assert_eq!(a.coords(), [0.0, 0.0]);
    assert_eq!(b.coords(), [10.0, 4.0]);
}

#[test]
fn lerp_to_moves_in_place() {
    let mut v = Vector2::new(0.0, 0.0);
    v.lerp_to(10.0, 4.0, 0.5);
    assert_eq!(v.coords(), [5.0, 2.0]);
    // extrapolation past the target is allowed
    v.set((0.0, 0.0)).unwrap();
    v.lerp_to(10.0, 0.0, 2.0);
    assert_eq!(v.coords(), [20.0, 0.0]);
}

#[test]
fn opposite_negates_every_axis() {
    let v = Vector2::new(3.0, -2.0);
    assert_eq!(v.opposite(), Vector2::new(-3.0, 2.0));
    assert_eq!(-&v, Vector2::new(-3.0, 2.0));
    assert_eq!(v.coords(), [3.0, -2.0]);
}

#[test]
fn clamp_in_place() {
    let mut v = Vector2::new(15.0, -5.0);
    v.set_min(0.0, 0.0);
    v.set_max(10.0, 10.0);
    v.clamp().unwrap();
    assert_eq!(v.coords(), [10.0, 0.0]);
}

#[test]
fn limited_returns_clamped_copy() {
    let mut v = Vector2::new(15.0, -5.0);
    v.set_min(0.0, 0.0);
    v.set_max(10.0, 10.0);

    let bounded = v.limited().unwrap();
    assert_eq!(bounded.coords(), [10.0, 0.0]);
    // receiver untouched
    assert_eq!(v.coords(), [15.0, -5.0]);
    // the copy starts clean and carries no bounds
    assert!(!bounded.dirty());
    assert!(bounded.min_bound().is_none());
    assert!(bounded.max_bound().is_none());
}

#[test]
fn clamp_without_bounds_fails() {
    let mut v = Vector2::new(1.0, 2.0);
    assert_eq!(v.clamp().unwrap_err(), VectorError::BoundsNotSet);
    assert_eq!(v.limited().unwrap_err(), VectorError::BoundsNotSet);

    // one bound alone is not enough
    v.set_min(0.0, 0.0);
    assert_eq!(v.clamp().unwrap_err(), VectorError::BoundsNotSet);
    // a failed clamp mutates nothing
    assert_eq!(v.coords(), [1.0, 2.0]);
}

#[test]
fn setting_bounds_does_not_clamp() {
    let mut v = Vector2::new(15.0, -5.0);
    v.set_min(0.0, 0.0);
    v.set_max(10.0, 10.0);
    assert_eq!(v.coords(), [15.0, -5.0]);
    assert_eq!(v.min_bound(), Some([0.0, 0.0]));
    assert_eq!(v.max_bound(), Some([10.0, 10.0]));
}

#[test]
fn has_value_false_only_for_zero() {
    assert!(!Vector2::new(0.0, 0.0).has_value());
    assert!(Vector2::new(1.0, 0.0).has_value());
    assert!(Vector2::new(0.0, -0.5).has_value());
    assert!(Vector2::new(2.0, 3.0).has_value());
}

#[test]
fn copy_starts_fresh() {
    let mut v = Vector2::with_options(1.0, 2.0, Options::with_history(4));
    v.set_min(0.0, 0.0);
    v.set_max(5.0, 5.0);
    v.add(1.0, 1.0);
    v.save();

    let dup = v.copy();
    assert_eq!(dup.coords(), [2.0, 3.0]);
    assert!(!dup.dirty());
    assert!(dup.history().is_empty());
    assert!(dup.min_bound().is_none());
    assert!(dup.max_bound().is_none());
}

#[test]
fn assign_operators_mutate_in_place() {
    let mut v = Vector2::new(1.0, 1.0);
    v += [2.0, 3.0];
    assert_eq!(v.coords(), [3.0, 4.0]);
    v -= [1.0, 1.0];
    assert_eq!(v.coords(), [2.0, 3.0]);
    assert!(v.dirty());
}

#[test]
fn display_renders_coordinates() {
    let v = Vector2::new(1.5, -2.0);
    assert_eq!(v.to_string(), "(1.5, -2)");
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_preserves_coords() {
    let mut v = Vector2::with_options(1.0, 2.0, Options::with_history(2));
    v.add(0.5, 0.5);

    let json = serde_json::to_string(&v).unwrap();
    let back: Vector2 = serde_json::from_str(&json).unwrap();
    assert_eq!(back.coords(), [1.5, 2.5]);
    assert_eq!(back.dirty(), v.dirty());
}
