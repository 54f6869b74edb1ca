use log::debug;

use crate::expression::Operator;

/// Every ordered selection of `length` distinct operators from `operators`.
///
/// With the full operator set and `length == operators.len()` this is the
/// set of permutations, e.g. 6 orderings of subtract, divide and multiply.
pub fn operator_orderings(operators: &[Operator], length: usize) -> Vec<Vec<Operator>> {
    if length > operators.len() {
        return vec![];
    }

    let mut result = Vec::new();
    let mut stack: Vec<(Vec<Operator>, Vec<bool>)> =
        vec![(Vec::with_capacity(length), vec![false; operators.len()])];

    while let Some((ordering, used)) = stack.pop() {
        if ordering.len() == length {
            result.push(ordering);
            continue;
        }

        // Reverse so the stack pops orderings in lexical index order
        for (idx, op) in operators.iter().enumerate().rev() {
            if used.get(idx).copied().unwrap_or(true) {
                continue;
            }
            let mut next = ordering.clone();
            next.push(*op);
            let mut next_used = used.clone();
            if let Some(flag) = next_used.get_mut(idx) {
                *flag = true;
            }
            stack.push((next, next_used));
        }
    }

    debug!("Generated {} operator orderings of length {}", result.len(), length);
    result
}
