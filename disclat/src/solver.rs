//! Generator extraction for the discriminant group.
//!
//! Greedy construction: repeatedly take the first remaining element of
//! maximal order, then shrink the remainder to one representative per coset
//! of the span of everything taken so far. The coset count is only
//! estimated, so the result is minimal for this search order rather than
//! canonical; that is the accepted behavior, not an accident to repair.

use log::{trace, warn};

use crate::error::{Error, Result};
use crate::group::DualGroup;

/// Componentwise difference, deliberately without modular reduction.
/// [`DualGroup::spanned_by`] compares targets literally, and the quotient
/// construction depends on unreduced differences failing the span test.
fn difference(a: &[i64], b: &[i64]) -> Vec<i64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Builds a transversal of the span of `generators`: one representative per
/// coset, identity first.
///
/// The list is assembled in enumeration order. The zero vector is always
/// taken. An element whose order is at most
/// `expected_size = disc / Π order(generator)` is taken if neither it nor
/// its raw difference with any representative taken so far is spanned by
/// `generators`; the scan stops as soon as `expected_size` representatives
/// exist. Elements of larger order are skipped outright.
///
/// A final pass then walks the slots once each and swaps in the first group
/// element of strictly smaller order whose difference with the slot is
/// spanned. One sweep per slot, no fixpoint iteration: a replacement lowers
/// the bar for the rest of that same sweep and that is all.
///
/// `expected_size` is exact only for independent generators. The returned
/// list can be shorter or longer; the mismatch is logged and the caller
/// decides what to do with it.
pub fn quotient_by(group: &DualGroup, generators: &[Vec<i64>]) -> Vec<Vec<i64>> {
    let product = group.order_product(generators);
    assert!(product != 0, "A generator is outside the group.");
    let expected_size = group.modulus() / product;

    let mut result: Vec<Vec<i64>> = Vec::new();
    for arr in group.elements() {
        let order = group.order_of(arr);
        if order == 1 {
            // The zero vector, representing the span itself.
            result.push(arr.clone());
        } else if order <= expected_size {
            if group.spanned_by(arr, generators) {
                continue;
            }
            let new_coset = result.iter().all(|term| {
                !group.spanned_by(&difference(arr, term), generators)
            });
            if new_coset {
                result.push(arr.clone());
                if result.len() as i64 == expected_size {
                    break;
                }
            }
        }
    }

    for i in 0..result.len() {
        for arr in group.elements() {
            if arr.iter().all(|&c| c == 0) {
                continue;
            }
            // The slot's order is recomputed every candidate on purpose: a
            // replacement lowers the bar for the rest of this sweep.
            if group.order_of(arr) < group.order_of(&result[i])
                && group.spanned_by(&difference(arr, &result[i]), generators)
            {
                result[i] = arr.clone();
            }
        }
    }

    if result.len() as i64 != expected_size {
        warn!(
            "transversal has {} representatives, estimate said {}",
            result.len(),
            expected_size
        );
    }

    result
}

/// Extracts a generating set of the group, greedily by maximal order.
///
/// Each round appends the first remaining element of maximal order, then
/// reduces the remainder with [`quotient_by`] over the whole accumulated
/// set. The search finishes when a single coset, the identity's, remains,
/// and the identity itself is never picked. A round that fails to shrink
/// the remainder aborts with [`Error::NoProgress`]; that also covers groups
/// with no elements at all, which negative discriminants produce.
pub fn extract_generators(group: &DualGroup) -> Result<Vec<Vec<i64>>> {
    let mut remain = group.elements().to_vec();
    let mut generators: Vec<Vec<i64>> = Vec::new();

    while remain.len() != 1 {
        let max_order = group.max_order(&remain);
        let pick = remain
            .iter()
            .find(|v| group.order_of(v.as_slice()) == max_order);
        let Some(pick) = pick.cloned() else {
            return Err(Error::NoProgress {
                generators,
                remaining: remain.len(),
            });
        };
        trace!(
            "picked {pick:?} of order {max_order}, {} cosets remaining",
            remain.len()
        );
        generators.push(pick);
        let reduced = quotient_by(group, &generators);
        if reduced.len() >= remain.len() {
            return Err(Error::NoProgress {
                generators,
                remaining: reduced.len(),
            });
        }
        remain = reduced;
    }

    Ok(generators)
}
