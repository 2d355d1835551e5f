//! Contract checks for a claimed minimum.
//!
//! These helpers never recompute the answer to compare against. They check the
//! contract directly: the result is no larger than any input and is one of the
//! inputs. Violations come back as human-readable strings, empty when the result holds up.

use std::fmt::Display;

use crate::core::min::min3;

/// Check `result` against the `min3` contract for `inputs`.
///
/// Returns one message per input the result exceeds, plus one message if the
/// result is none of the inputs.
pub fn postcondition_violations<T: Ord + Display>(inputs: [T; 3], result: T) -> Vec<String> {
    let mut errors = Vec::new();
    for (name, input) in ["a", "b", "c"].iter().zip(inputs.iter()) {
        if result > *input {
            errors.push(format!("result {result} exceeds {name} = {input}"));
        }
    }
    if !inputs.contains(&result) {
        let [a, b, c] = &inputs;
        errors.push(format!("result {result} is not one of ({a}, {b}, {c})"));
    }
    errors
}

/// All six orderings of `inputs`, starting with the original order.
pub fn permutations<T: Copy>(inputs: [T; 3]) -> [[T; 3]; 6] {
    let [a, b, c] = inputs;
    [
        [a, b, c],
        [a, c, b],
        [b, a, c],
        [b, c, a],
        [c, a, b],
        [c, b, a],
    ]
}

/// Evaluate `min3` on every ordering of `inputs` and report disagreements.
pub fn symmetry_violations<T: Ord + Copy + Display>(inputs: [T; 3]) -> Vec<String> {
    let [a, b, c] = inputs;
    let baseline = min3(a, b, c);
    permutations(inputs)
        .into_iter()
        .filter_map(|[x, y, z]| {
            let result = min3(x, y, z);
            (result != baseline).then(|| {
                format!("min3({x}, {y}, {z}) = {result} but min3({a}, {b}, {c}) = {baseline}")
            })
        })
        .collect()
}
