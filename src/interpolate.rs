// src/interpolate.rs

/// Piecewise-linear interpolation of a discrete solution aligned with
/// uniformly spaced `nodes`. Spots below `nodes[0]` clamp to `values[0]`;
/// spots above `nodes[last]` clamp to `values[last]`.
pub fn interpolate(nodes: &[f64], values: &[f64], spot: f64) -> f64 {
    let n = nodes.len();
    if n == 0 {
        return 0.0;
    }
    if spot <= nodes[0] {
        return values[0];
    }
    if spot >= nodes[n - 1] {
        return values[n - 1];
    }

    let idx = match nodes.binary_search_by(|probe| probe.partial_cmp(&spot).unwrap()) {
        Ok(i) => return values[i],
        Err(i) => i,
    };
    // `idx` is the first node index strictly greater than `spot`.
    let lo = idx - 1;
    let hi = idx;
    let frac = (spot - nodes[lo]) / (nodes[hi] - nodes[lo]);
    values[lo] + frac * (values[hi] - values[lo])
}
