//! Resampling of flow characteristic arrays.
//!
//! Both functions keep the average of the array: after resizing to `n`
//! elements the sum is approximately `average(input) * n`. They are used to
//! expand short hand-written shapes into the long arrays the
//! [templates](crate::templates) produce.

use crate::error::{Error, Result};

/// Shrinks a flow to `target_length` elements.
///
/// Reduction loses information: the result is a shorter version of the
/// original, not an equivalent of it. Each output element collects the
/// overlapping fractions of the input elements.
///
/// # Errors
///
/// Returns [`Error::InvalidArguments`] unless `0 < target_length < flow.len()`.
///
/// # Example
///
/// ```rust
/// use scurry::flow_utils::reduce_flow;
///
/// let reduced = reduce_flow(&[1.0, 1.5, 2.0, 2.5, 3.0], 3)?;
/// assert!((reduced[0] - 1.2).abs() < 1e-9);
/// # Ok::<(), scurry::Error>(())
/// ```
pub fn reduce_flow(flow: &[f64], target_length: usize) -> Result<Vec<f64>> {
    if target_length >= flow.len() {
        return Err(Error::InvalidArguments(format!(
            "cannot reduce flow of length {} to length {target_length}",
            flow.len()
        )));
    }
    if target_length == 0 {
        return Err(Error::InvalidArguments(
            "cannot reduce flow to zero length".into(),
        ));
    }
    Ok(reduce(flow, target_length))
}

/// Stretches a flow to `target_length` elements, filling the gaps between
/// neighbouring values by linear interpolation.
///
/// `[1, 2, 3]` stretches cleanly to `[1, 1.5, 2, 2.5, 3]`, but not to six
/// elements without moving the middle value. When the interior segments do
/// not divide evenly, the flow is first stretched to a longer length where
/// they do and then reduced to `target_length`.
///
/// # Errors
///
/// Returns [`Error::InvalidArguments`] if `flow` is empty or
/// `target_length < flow.len()`.
///
/// # Example
///
/// ```rust
/// use scurry::flow_utils::stretch_flow;
///
/// let stretched = stretch_flow(&[1.0, 2.0, 3.0], 5)?;
/// assert_eq!(stretched, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
/// # Ok::<(), scurry::Error>(())
/// ```
pub fn stretch_flow(flow: &[f64], target_length: usize) -> Result<Vec<f64>> {
    stretch_flow_with(flow, target_length, |v| v)
}

/// Like [`stretch_flow`], but passes every resulting value through
/// `modifier`. Use it to add noise or to amplify the characteristics.
///
/// The modifier sees the final values, after any reduction.
///
/// # Errors
///
/// Same as [`stretch_flow`].
pub fn stretch_flow_with(
    flow: &[f64],
    target_length: usize,
    modifier: impl FnMut(f64) -> f64,
) -> Result<Vec<f64>> {
    if flow.is_empty() {
        return Err(Error::InvalidArguments("cannot stretch an empty flow".into()));
    }
    if target_length < flow.len() {
        return Err(Error::InvalidArguments(format!(
            "target length {target_length} is smaller than flow length {}",
            flow.len()
        )));
    }
    Ok(stretch(flow, target_length, modifier))
}

/// Requires `0 < target_length < flow.len()`.
pub(crate) fn reduce(flow: &[f64], target_length: usize) -> Vec<f64> {
    let multiplier = target_length as f64 / flow.len() as f64;
    let mut result = vec![0.0; target_length];
    for (i, &value) in flow.iter().enumerate() {
        let index = i as f64 * multiplier;
        let until_index = (i + 1) as f64 * multiplier;
        let index_int = index as usize;
        let until_index_int = until_index as usize;
        if index_int == until_index_int {
            result[index_int] += value * (until_index - index);
        } else {
            let portion = 1.0 - (index - index_int as f64);
            let next_portion = until_index - until_index_int as f64;
            result[index_int] += value * portion;
            if until_index_int < target_length {
                result[until_index_int] += value * next_portion;
            }
        }
    }
    result
}

/// Requires a non-empty flow and `target_length >= flow.len()`.
pub(crate) fn stretch(
    flow: &[f64],
    target_length: usize,
    mut modifier: impl FnMut(f64) -> f64,
) -> Vec<f64> {
    let len = flow.len();
    if len == 1 {
        return vec![modifier(flow[0]); target_length];
    }

    let segments = len - 1;
    let mut temp_length = target_length;
    if (temp_length - len) % segments != 0 {
        temp_length = segments * (temp_length - len) + 1;
        // Growing by a single element would otherwise land below the target.
        if temp_length < target_length {
            temp_length += segments;
        }
    }

    let step_length = ((temp_length - 2) as f64 / segments as f64) as usize + 1;
    let mut result = Vec::with_capacity(temp_length);
    let mut count_to_next_step = step_length;
    let mut fill_index = 0;
    for _ in 0..temp_length {
        let bottom = flow[fill_index];
        let top = flow.get(fill_index + 1).copied().unwrap_or(bottom);
        let completion = (step_length - count_to_next_step) as f64 / step_length as f64;
        result.push(bottom * (1.0 - completion) + top * completion);

        count_to_next_step -= 1;
        if count_to_next_step == 0 {
            count_to_next_step = step_length;
            fill_index += 1;
        }
    }

    if temp_length != target_length {
        result = reduce(&result, target_length);
    }
    result.into_iter().map(modifier).collect()
}
