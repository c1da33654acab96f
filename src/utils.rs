use crate::IndexPath;

#[cfg(test)]
pub mod test_helpers;

/// Sorts `items` and removes duplicates.
pub(crate) fn to_set<T: Ord + Copy>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort_unstable();
    items.dedup();
    items
}

/// Checks positions of items inserted one by one, in ascending order, into a
/// sequence of length `len`.
///
/// On failure returns the first position that is out of range.
pub(crate) fn check_insert_positions(positions: &[usize], len: usize) -> Result<(), usize> {
    debug_assert!(positions.is_sorted());
    for (i, &position) in positions.iter().enumerate() {
        if position > len + i {
            return Err(position);
        }
    }
    Ok(())
}

/// Splits sorted index paths into `(section, rows)` groups.
pub(crate) fn group_by_section(paths: &[IndexPath]) -> Vec<(usize, Vec<usize>)> {
    debug_assert!(paths.is_sorted());
    let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
    for path in paths {
        match groups.last_mut() {
            Some((section, rows)) if *section == path.section => rows.push(path.row),
            _ => groups.push((path.section, vec![path.row])),
        }
    }
    groups
}
