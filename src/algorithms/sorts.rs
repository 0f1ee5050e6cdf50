//! Animated comparison sorts
//!
//! Every procedure sorts `values` ascending in place and emits through the
//! given [`Emitter`] before each comparison, so a cancelled run stops at the
//! next comparison boundary with whatever order it had reached.
//!
//! Cancellation never loses values. Procedures that hold elements outside the
//! slice (the insertion key, the merge halves) write them back before
//! propagating [`Cancelled`], so the slice is always a permutation of its
//! input.
//!
//! | Sort | Highlights | Mutating steps |
//! |------|------------|----------------|
//! | bubble | `[j, j+1]` | `Swap` after each exchange |
//! | selection | `[min, j]` | `Swap [i, min]` after each scan |
//! | insertion | `[hole-1, hole]` | `Write [hole]` when the key lands |
//! | merge | `[k]` | every `Write [k]` |
//! | quick | `[boundary+1, j, high]` | accent only, on each scan swap |

use crate::stepper::{Cancelled, Emitter, StepKind, StepSink};

pub fn bubble_sort<S: StepSink + ?Sized>(
    values: &mut [i32],
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Cancelled> {
    let n = values.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            emitter.step(StepKind::Compare, values, &[j, j + 1], false)?;

            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                emitter.step(StepKind::Swap, values, &[j, j + 1], true)?;
            }
        }
    }
    Ok(())
}

pub fn selection_sort<S: StepSink + ?Sized>(
    values: &mut [i32],
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Cancelled> {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            emitter.step(StepKind::Compare, values, &[min, j], false)?;

            if values[j] < values[min] {
                min = j;
            }
        }

        if min != i {
            values.swap(i, min);
            emitter.step(StepKind::Swap, values, &[i, min], true)?;
        }
    }
    Ok(())
}

pub fn insertion_sort<S: StepSink + ?Sized>(
    values: &mut [i32],
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Cancelled> {
    for i in 1..values.len() {
        let key = values[i];
        let mut hole = i;

        while hole > 0 && values[hole - 1] > key {
            if let Err(cancelled) =
                emitter.step(StepKind::Compare, values, &[hole - 1, hole], false)
            {
                values[hole] = key;
                return Err(cancelled);
            }

            values[hole] = values[hole - 1];
            hole -= 1;
        }

        values[hole] = key;
        emitter.step(StepKind::Write, values, &[hole], true)?;
    }
    Ok(())
}

pub fn merge_sort<S: StepSink + ?Sized>(
    values: &mut [i32],
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Cancelled> {
    if values.len() < 2 {
        return Ok(());
    }
    let last = values.len() - 1;
    merge_sort_range(values, 0, last, emitter)
}

// Bounds are inclusive
fn merge_sort_range<S: StepSink + ?Sized>(
    values: &mut [i32],
    left: usize,
    right: usize,
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Cancelled> {
    if left >= right {
        return Ok(());
    }

    let mid = left + (right - left) / 2;
    merge_sort_range(values, left, mid, emitter)?;
    merge_sort_range(values, mid + 1, right, emitter)?;
    merge(values, left, mid, right, emitter)
}

fn merge<S: StepSink + ?Sized>(
    values: &mut [i32],
    left: usize,
    mid: usize,
    right: usize,
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Cancelled> {
    let lower = values[left..=mid].to_vec();
    let upper = values[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < lower.len() && j < upper.len() {
        if let Err(cancelled) = emitter.step(StepKind::Write, values, &[k], true) {
            write_back(values, k, &lower[i..], &upper[j..]);
            return Err(cancelled);
        }

        // `<=` keeps equal elements in their original order
        if lower[i] <= upper[j] {
            values[k] = lower[i];
            i += 1;
        } else {
            values[k] = upper[j];
            j += 1;
        }
        k += 1;
    }

    // Tails are copied without steps; the finished step shows them
    write_back(values, k, &lower[i..], &upper[j..]);
    Ok(())
}

fn write_back(values: &mut [i32], start: usize, lower: &[i32], upper: &[i32]) {
    let pending = lower.iter().chain(upper);
    for (slot, value) in values[start..].iter_mut().zip(pending) {
        *slot = *value;
    }
}

pub fn quick_sort<S: StepSink + ?Sized>(
    values: &mut [i32],
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Cancelled> {
    if values.len() < 2 {
        return Ok(());
    }
    let last = values.len() - 1;
    quick_sort_range(values, 0, last, emitter)
}

// Bounds are inclusive
fn quick_sort_range<S: StepSink + ?Sized>(
    values: &mut [i32],
    low: usize,
    high: usize,
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Cancelled> {
    if low < high {
        let pivot = partition(values, low, high, emitter)?;
        if pivot > low {
            quick_sort_range(values, low, pivot - 1, emitter)?;
        }
        quick_sort_range(values, pivot + 1, high, emitter)?;
    }
    Ok(())
}

/// Lomuto partition around `values[high]`; returns the pivot's final index
fn partition<S: StepSink + ?Sized>(
    values: &mut [i32],
    low: usize,
    high: usize,
    emitter: &mut Emitter<'_, S>,
) -> Result<usize, Cancelled> {
    let pivot = values[high];
    // boundary + 1: next slot for an element smaller than the pivot
    let mut store = low;

    for j in low..high {
        emitter.step(StepKind::Compare, values, &[store, j, high], false)?;

        if values[j] < pivot {
            values.swap(store, j);
            store += 1;
            emitter.accent();
        }
    }

    // Not gated on cancellation: a cancel requested after the last comparison
    // still sees the pivot placed.
    values.swap(store, high);
    Ok(store)
}
