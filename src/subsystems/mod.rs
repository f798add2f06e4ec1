pub mod collision_handling;
pub mod cool_down_handling;
pub mod entity_spawning;
pub mod life_span_management;
pub mod object_positioning;
pub mod player_controls_handling;

/// Swap-removes every marked index. Marks may repeat and come in any order;
/// they are sorted in place.
pub(crate) fn swap_remove_marked<T>(items: &mut Vec<T>, marked: &mut [usize]) {
    marked.sort_unstable_by(|lhs, rhs| rhs.cmp(lhs));
    let mut previous = None;
    for &ix in marked.iter() {
        if previous == Some(ix) {
            continue;
        }
        items.swap_remove(ix);
        previous = Some(ix);
    }
}
