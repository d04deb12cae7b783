// src/tridiag.rs

const PIVOT_FLOOR: f64 = 1e-12;

/// Solve `T * x = b` for a tridiagonal matrix `T` given by its three
/// diagonals, using the Thomas algorithm (forward sweep + back
/// substitution).
///
/// `lower[0]` and `upper[n-1]` are unused (the matrix has no sub-diagonal
/// entry for the first row or super-diagonal entry for the last row).
///
/// Whenever a pivot denominator's magnitude drops below `1e-12` it is
/// replaced by `±1e-12` (sign-preserving, zero treated as positive) rather
/// than allowed to blow up the division — this never raises or aborts.
pub fn thomas_solve(lower: &[f64], diag: &[f64], upper: &[f64], b: &[f64]) -> Vec<f64> {
    let n = diag.len();
    if n == 0 {
        return Vec::new();
    }

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    let pivot0 = floor_pivot(diag[0]);
    c_prime[0] = upper[0] / pivot0;
    d_prime[0] = b[0] / pivot0;

    for i in 1..n {
        let denom = floor_pivot(diag[i] - lower[i] * c_prime[i - 1]);
        c_prime[i] = upper[i] / denom;
        d_prime[i] = (b[i] - lower[i] * d_prime[i - 1]) / denom;
    }

    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }
    x
}

fn floor_pivot(value: f64) -> f64 {
    if value.abs() < PIVOT_FLOOR {
        if value >= 0.0 {
            PIVOT_FLOOR
        } else {
            -PIVOT_FLOOR
        }
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_returns_empty_vector() {
        let x = thomas_solve(&[], &[], &[], &[]);
        assert!(x.is_empty());
    }

    #[test]
    fn single_equation() {
        // 2x = 4 -> x = 2
        let x = thomas_solve(&[0.0], &[2.0], &[0.0], &[4.0]);
        assert_eq!(x.len(), 1);
        assert!((x[0] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn known_tridiagonal_system() {
        // [2 -1  0] [x0]   [1]
        // [-1 2 -1] [x1] = [0]
        // [0 -1  2] [x2]   [1]
        let lower = vec![0.0, -1.0, -1.0];
        let diag = vec![2.0, 2.0, 2.0];
        let upper = vec![-1.0, -1.0, 0.0];
        let b = vec![1.0, 0.0, 1.0];
        let x = thomas_solve(&lower, &diag, &upper, &b);

        // Verify by reconstructing A*x and comparing to b.
        let residual = tridiag_residual(&lower, &diag, &upper, &x, &b);
        assert!(residual < 1e-10, "residual {} too large", residual);
    }

    #[test]
    fn random_diagonally_dominant_round_trip() {
        // Deterministic pseudo-random diagonally dominant system (no RNG
        // dependency — a fixed linear-congruential sequence is enough to
        // exercise many distinct systems without external state).
        let mut seed: u64 = 0x2545F4914F6CDD1D;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed as f64 / u64::MAX as f64) * 2.0 - 1.0
        };

        let n = 50;
        let mut lower = vec![0.0; n];
        let mut diag = vec![0.0; n];
        let mut upper = vec![0.0; n];
        let mut b = vec![0.0; n];
        for i in 0..n {
            let off = next() * 2.0;
            lower[i] = if i == 0 { 0.0 } else { off };
            upper[i] = if i == n - 1 { 0.0 } else { next() * 2.0 };
            // Diagonal dominance: |diag| > |lower| + |upper|.
            diag[i] = off.abs() + upper[i].abs() + 5.0 + next().abs();
            b[i] = next() * 10.0;
        }

        let x = thomas_solve(&lower, &diag, &upper, &b);
        let residual = tridiag_residual(&lower, &diag, &upper, &x, &b);
        assert!(residual < 1e-10, "residual {} too large", residual);
    }

    #[test]
    fn near_singular_pivot_does_not_panic_or_blow_up() {
        // Diagonal entries chosen to drive the forward-sweep pivot toward
        // zero; the floor guard must keep the result finite.
        let lower = vec![0.0, 1.0, 1.0];
        let diag = vec![1.0, 1.0, 1.0];
        let upper = vec![1.0, 1.0, 0.0];
        let b = vec![1.0, 1.0, 1.0];
        let x = thomas_solve(&lower, &diag, &upper, &b);
        for v in &x {
            assert!(v.is_finite());
        }
    }

    fn tridiag_residual(lower: &[f64], diag: &[f64], upper: &[f64], x: &[f64], b: &[f64]) -> f64 {
        let n = diag.len();
        let mut max_residual: f64 = 0.0;
        for i in 0..n {
            let mut lhs = diag[i] * x[i];
            if i > 0 {
                lhs += lower[i] * x[i - 1];
            }
            if i + 1 < n {
                lhs += upper[i] * x[i + 1];
            }
            max_residual = max_residual.max((lhs - b[i]).abs());
        }
        max_residual
    }
}
