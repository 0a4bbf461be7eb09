//! Permutations of vertex indices, given in
//! image notation: vertex `v` is mapped to `perm[v]`.
use itertools::Itertools;

use crate::{debug::PermutationError, graph::VertexIndex};

/// Check that `perm` is a bijection on `0..size`.
pub fn check_permutation(perm: &[VertexIndex], size: usize) -> Result<(), PermutationError> {
    if perm.len() != size {
        return Err(PermutationError::Length {
            size,
            found: perm.len(),
        });
    }

    let mut seen = vec![false; size];
    for image in perm.iter() {
        match seen.get_mut(*image) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(PermutationError::NotBijection { size, image: *image }),
        }
    }

    Ok(())
}

/// Disjoint cycles of `perm`, each starting at its smallest
/// vertex, fixed points left out.
pub fn get_cycles(perm: &[VertexIndex]) -> Result<Vec<Vec<VertexIndex>>, PermutationError> {
    check_permutation(perm, perm.len())?;

    let mut visited = vec![false; perm.len()];
    let mut cycles = Vec::new();
    for start in 0..perm.len() {
        if visited[start] || perm[start] == start {
            continue;
        }

        let mut cycle = vec![start];
        visited[start] = true;
        let mut current = perm[start];
        while current != start {
            visited[current] = true;
            cycle.push(current);
            current = perm[current];
        }
        cycles.push(cycle);
    }

    Ok(cycles)
}

/// Cycle notation of `perm` with every vertex shifted by `offset`,
/// e.g. `(1,2)(3,5,4)`. The identity is written as `()`.
pub fn permutation_to_string(
    perm: &[VertexIndex],
    offset: usize,
) -> Result<String, PermutationError> {
    let cycles = get_cycles(perm)?;
    if cycles.is_empty() {
        return Ok("()".to_string());
    }

    Ok(cycles
        .iter()
        .map(|cycle| format!("({})", cycle.iter().map(|v| v + offset).join(",")))
        .collect())
}
