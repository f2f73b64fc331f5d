/*
 * Collision Module
 *
 * Pairwise elastic collisions between birds. All birds have the same mass,
 * whatever their size, and restitution is one: an impact swaps the two
 * velocity components along the contact normal.
 */

use crate::bird::Bird;

/// Resolve a possible collision between `a` and `b`. Returns whether an impulse
/// was applied.
///
/// Birds overlap when their centres are closer than the sum of their radii.
/// Coincident birds have no contact normal and are skipped, as are pairs
/// already moving apart. Otherwise the normal velocity components are
/// exchanged and each bird is pushed back by half the overlap.
pub fn resolve(a: &mut Bird, b: &mut Bird) -> bool {
    let diff = b.position - a.position;
    let distance = diff.length();
    let min_distance = a.radius() + b.radius();

    if !(distance < min_distance && distance > 0.0) {
        return false;
    }

    let normal = diff / distance;
    let vel_along_normal = (b.velocity - a.velocity).dot(normal);

    // Separating
    if vel_along_normal > 0.0 {
        return false;
    }

    let impulse = normal * vel_along_normal;
    a.velocity += impulse;
    b.velocity -= impulse;

    let correction = normal * ((min_distance - distance) / 2.0);
    a.position -= correction;
    b.position += correction;

    true
}

/// Resolve every ordered pair `(i, j)` with `i != j` in index order, so each
/// unordered pair is visited twice. Returns the number of impulses applied.
pub fn resolve_all(flock: &mut [Bird]) -> usize {
    let mut collisions = 0;
    for i in 0..flock.len() {
        for j in 0..flock.len() {
            if i == j {
                continue;
            }
            let (a, b) = pair_mut(flock, i, j);
            if resolve(a, b) {
                collisions += 1;
            }
        }
    }
    collisions
}

// Two distinct mutable borrows out of one slice
fn pair_mut(flock: &mut [Bird], i: usize, j: usize) -> (&mut Bird, &mut Bird) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = flock.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = flock.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    fn bird(x: f32, y: f32, vx: f32, vy: f32, size: f32) -> Bird {
        Bird::new(vec2(x, y), vec2(vx, vy), size)
    }

    #[test]
    fn test_head_on_collision_swaps_velocities() {
        let mut a = bird(0.0, 0.0, 1.0, 0.0, 4.0);
        let mut b = bird(1.0, 0.0, -1.0, 0.0, 4.0);

        assert!(resolve(&mut a, &mut b));

        assert_eq!(a.velocity, vec2(-1.0, 0.0));
        assert_eq!(b.velocity, vec2(1.0, 0.0));
        assert_eq!(a.position, vec2(-1.5, 0.0));
        assert_eq!(b.position, vec2(2.5, 0.0));
        assert!(a.position.distance(b.position) >= a.radius() + b.radius());
    }

    #[test]
    fn test_oblique_collision_keeps_tangential_components() {
        let mut a = bird(0.0, 0.0, 1.0, 0.5, 4.0);
        let mut b = bird(2.0, 0.0, 0.0, -0.25, 4.0);

        assert!(resolve(&mut a, &mut b));

        assert_eq!(a.velocity, vec2(0.0, 0.5));
        assert_eq!(b.velocity, vec2(1.0, -0.25));
    }

    #[test]
    fn test_separating_pair_untouched() {
        let mut a = bird(0.0, 0.0, -1.0, 0.0, 4.0);
        let mut b = bird(1.0, 0.0, 1.0, 0.0, 4.0);

        assert!(!resolve(&mut a, &mut b));

        assert_eq!(a.position, vec2(0.0, 0.0));
        assert_eq!(b.velocity, vec2(1.0, 0.0));
    }

    #[test]
    fn test_coincident_and_distant_pairs_skipped() {
        let mut a = bird(5.0, 5.0, 1.0, 0.0, 4.0);
        let mut b = bird(5.0, 5.0, -1.0, 0.0, 4.0);
        assert!(!resolve(&mut a, &mut b));

        let mut c = bird(0.0, 0.0, 1.0, 0.0, 4.0);
        let mut d = bird(4.0, 0.0, -1.0, 0.0, 4.0);
        assert!(!resolve(&mut c, &mut d));
    }

    #[test]
    fn test_resolve_all_visits_pair_once_effectively() {
        let mut flock = vec![
            bird(0.0, 0.0, 1.0, 0.0, 4.0),
            bird(1.0, 0.0, -1.0, 0.0, 4.0),
            bird(100.0, 100.0, 0.0, 1.0, 4.0),
        ];

        // The reverse visit finds the pair separated and moving apart
        assert_eq!(resolve_all(&mut flock), 1);
        assert_eq!(flock[0].velocity, vec2(-1.0, 0.0));
        assert_eq!(flock[1].velocity, vec2(1.0, 0.0));
        assert_eq!(flock[2].velocity, vec2(0.0, 1.0));
    }

    #[test]
    fn test_pair_mut_order() {
        let mut flock = vec![
            bird(0.0, 0.0, 0.0, 0.0, 1.0),
            bird(1.0, 0.0, 0.0, 0.0, 1.0),
        ];
        let (a, b) = pair_mut(&mut flock, 1, 0);
        assert_eq!(a.position.x, 1.0);
        assert_eq!(b.position.x, 0.0);
    }
}
