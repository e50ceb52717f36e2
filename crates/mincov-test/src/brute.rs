//! Exhaustive optimum for small instances.

use crate::instance::Instance;

/// Largest number of distinct columns the enumeration accepts.
const MAX_BRUTE_COLUMNS: usize = 22;

/// Returns the cheapest covering column set, or `None` when some row has no
/// column.
///
/// Only columns appearing in at least one row are enumerated. Ties keep the
/// first subset in enumeration order.
///
/// # Panics
///
/// Panics if more than 22 distinct columns appear.
pub fn brute_force_solution(inst: &Instance) -> Option<(Vec<usize>, u32)> {
    if inst.rows.iter().any(|r| r.is_empty()) {
        return None;
    }
    let mut used: Vec<usize> = inst.rows.iter().flatten().copied().collect();
    used.sort_unstable();
    used.dedup();
    assert!(
        used.len() <= MAX_BRUTE_COLUMNS,
        "brute force limited to {MAX_BRUTE_COLUMNS} columns, got {}",
        used.len()
    );

    // Row masks over the `used` positions.
    let row_masks: Vec<u32> = inst
        .rows
        .iter()
        .map(|cols| {
            cols.iter().fold(0u32, |mask, c| {
                let pos = used.binary_search(c).unwrap_or_else(|_| unreachable!());
                mask | (1 << pos)
            })
        })
        .collect();

    let mut best: Option<(u32, u32)> = None;
    for subset in 0u32..(1u32 << used.len()) {
        if !row_masks.iter().all(|&m| m & subset != 0) {
            continue;
        }
        let cost: u32 = (0..used.len())
            .filter(|&i| subset & (1 << i) != 0)
            .map(|i| inst.costs[used[i]])
            .sum();
        if best.map_or(true, |(_, b)| cost < b) {
            best = Some((subset, cost));
        }
    }
    best.map(|(subset, cost)| {
        let cols = (0..used.len())
            .filter(|&i| subset & (1 << i) != 0)
            .map(|i| used[i])
            .collect();
        (cols, cost)
    })
}

/// Returns the optimal cover cost, or `None` when some row has no column.
pub fn brute_force_optimum(inst: &Instance) -> Option<u32> {
    brute_force_solution(inst).map(|(_, cost)| cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_optimum() {
        assert_eq!(brute_force_optimum(&Instance::triangle()), Some(2));
    }

    #[test]
    fn test_forced_column_optimum() {
        let (cols, cost) = brute_force_solution(&Instance::forced_column()).unwrap();
        assert_eq!(cost, 7);
        assert!(cols.contains(&0));
    }

    #[test]
    fn test_uncoverable_row() {
        let inst = Instance::new(2, 2);
        assert_eq!(brute_force_optimum(&inst), None);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::new(0, 3);
        assert_eq!(brute_force_optimum(&inst), Some(0));
    }
}
