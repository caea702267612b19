//! Screen-space angles and rotated sprite quads.
//!
//! Angles are measured with `atan2(x, y)` rather than `atan2(y, x)`, so that
//! zero lies along a screen axis instead of pointing right. The same ordering
//! is used by [`angle_on_screen`] and [`rotate_point_on_plane`].

use eframe::egui::{Pos2, Vec2, pos2};

/// Angle in radians from `origin` to `point`.
///
/// With `upwards_is_zero` a point straight above `origin` gives 0 and a point
/// to the right gives `+π/2`. Otherwise 0 points straight down.
pub fn angle_on_screen(origin: Pos2, point: Pos2, upwards_is_zero: bool) -> f32 {
    let dy = if upwards_is_zero {
        origin.y - point.y
    } else {
        point.y - origin.y
    };
    f32::atan2(point.x - origin.x, dy)
}

/// Rotates `point` around `pivot` by `rotation` radians.
///
/// A point equal to the pivot stays where it is (`atan2(0, 0)` is 0).
pub fn rotate_point_on_plane(point: Pos2, pivot: Pos2, rotation: f32) -> Pos2 {
    let rel = point - pivot;
    let angle = f32::atan2(rel.x, rel.y);
    let dist = rel.length();
    let (sin, cos) = (angle + rotation).sin_cos();
    pos2(dist * sin + pivot.x, dist * cos + pivot.y)
}

/// Corners of an axis-aligned rectangle in UL, UR, LR, LL order.
pub fn rect_corner_points(upper_left: Pos2, size: Vec2) -> [Pos2; 4] {
    [
        upper_left,
        pos2(upper_left.x + size.x, upper_left.y),
        upper_left + size,
        pos2(upper_left.x, upper_left.y + size.y),
    ]
}

/// Corners of the rectangle rotated about its centre, keeping UL, UR, LR, LL
/// order so callers can bind fixed UVs to each slot.
pub fn rotated_rect_points(upper_left: Pos2, size: Vec2, rotation: f32) -> [Pos2; 4] {
    let centre = upper_left + size / 2.0;
    rect_corner_points(upper_left, size).map(|p| rotate_point_on_plane(p, centre, rotation))
}

/// Rotation that turns an upward-pointing sprite toward `target`.
///
/// [`rotate_point_on_plane`] turns counter-clockwise on screen while
/// [`angle_on_screen`] grows clockwise, hence the negation.
pub fn pointing_rotation(origin: Pos2, target: Pos2) -> f32 {
    -angle_on_screen(origin, target, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-4;

    fn assert_pos_close(a: Pos2, b: Pos2) {
        assert!((a - b).length() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn straight_up_is_zero() {
        let origin = pos2(100.0, 100.0);
        assert_eq!(angle_on_screen(origin, origin + Vec2::new(0.0, -1.0), true), 0.0);
    }

    #[test]
    fn right_is_quarter_turn_either_way() {
        let origin = pos2(0.0, 0.0);
        let right = pos2(5.0, 0.0);
        assert!((angle_on_screen(origin, right, true) - FRAC_PI_2).abs() < EPS);
        assert!((angle_on_screen(origin, right, false) - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn downward_zero_flips_vertical() {
        let origin = pos2(0.0, 0.0);
        let below = pos2(0.0, 3.0);
        assert_eq!(angle_on_screen(origin, below, false), 0.0);
        assert!((angle_on_screen(origin, below, true).abs() - PI).abs() < EPS);
    }

    #[test]
    fn coincident_points_have_zero_angle() {
        let p = pos2(7.0, 7.0);
        assert_eq!(angle_on_screen(p, p, true), 0.0);
        assert_eq!(rotate_point_on_plane(p, p, 1.234), p);
    }

    #[test]
    fn rotation_preserves_distance() {
        let pivot = pos2(-3.0, 12.5);
        let points = [pos2(0.0, 0.0), pos2(10.0, -4.0), pos2(-3.0, 20.0), pos2(100.0, 100.0)];
        for p in points {
            for step in 0..16 {
                let theta = step as f32 * 0.7 - 5.0;
                let rotated = rotate_point_on_plane(p, pivot, theta);
                let before = (p - pivot).length();
                let after = (rotated - pivot).length();
                assert!((before - after).abs() < 1e-3, "{before} vs {after}");
            }
        }
    }

    #[test]
    fn zero_rotation_is_identity_and_inverse_undoes() {
        let pivot = pos2(4.0, 4.0);
        let p = pos2(9.0, -2.0);
        assert_pos_close(rotate_point_on_plane(p, pivot, 0.0), p);
        let there = rotate_point_on_plane(p, pivot, 1.1);
        assert_pos_close(rotate_point_on_plane(there, pivot, -1.1), p);
    }

    #[test]
    fn positive_rotation_turns_counter_clockwise_on_screen() {
        // Below the pivot, rotated a quarter turn, ends up to the right.
        let rotated = rotate_point_on_plane(pos2(0.0, 1.0), Pos2::ZERO, FRAC_PI_2);
        assert_pos_close(rotated, pos2(1.0, 0.0));
    }

    #[test]
    fn corners_are_ordered_clockwise_from_upper_left() {
        let corners = rect_corner_points(pos2(10.0, 20.0), Vec2::new(4.0, 2.0));
        assert_eq!(
            corners,
            [pos2(10.0, 20.0), pos2(14.0, 20.0), pos2(14.0, 22.0), pos2(10.0, 22.0)]
        );
    }

    #[test]
    fn rotated_rect_without_rotation_matches_corners() {
        let ul = pos2(10.0, 20.0);
        let size = Vec2::new(4.0, 2.0);
        let rotated = rotated_rect_points(ul, size, 0.0);
        for (a, b) in rotated.iter().zip(rect_corner_points(ul, size)) {
            assert_pos_close(*a, b);
        }
    }

    #[test]
    fn half_turn_swaps_opposite_corners() {
        let [ul, ur, lr, ll] = rotated_rect_points(Pos2::ZERO, Vec2::splat(2.0), PI);
        assert_pos_close(ul, pos2(2.0, 2.0));
        assert_pos_close(ur, pos2(0.0, 2.0));
        assert_pos_close(lr, pos2(0.0, 0.0));
        assert_pos_close(ll, pos2(2.0, 0.0));
    }

    #[test]
    fn pointing_rotation_aims_sprite_tip_at_target() {
        let centre = pos2(50.0, 50.0);
        let tip = pos2(50.0, 40.0);
        for target in [pos2(90.0, 50.0), pos2(10.0, 50.0), pos2(50.0, 95.0), pos2(80.0, 20.0)] {
            let rotation = pointing_rotation(centre, target);
            let moved = rotate_point_on_plane(tip, centre, rotation);
            let want = (target - centre).normalized();
            let got = (moved - centre).normalized();
            assert!((want - got).length() < 1e-3, "target {target:?}: {got:?}");
        }
    }
}
