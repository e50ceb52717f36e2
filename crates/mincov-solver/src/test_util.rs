//! Matrix helpers shared by the unit tests.

use mincov_core::CoverMatrix;
use mincov_test::Instance;

pub fn matrix_from(inst: &Instance) -> CoverMatrix {
    let mut matrix = CoverMatrix::new(inst.row_size, inst.col_size, inst.costs.clone());
    for (r, c) in inst.elements() {
        matrix.insert_elem(r, c).unwrap();
    }
    matrix
}

/// The active part of `matrix` as an instance with the same column indices.
pub fn remaining_instance(matrix: &CoverMatrix) -> Instance {
    let mut inst = Instance::new(matrix.row_num(), matrix.col_size());
    inst.costs = matrix.costs().to_vec();
    for (i, r) in matrix.rows().enumerate() {
        for c in matrix.row_cols(r) {
            inst.cover(i, c);
        }
    }
    inst
}
