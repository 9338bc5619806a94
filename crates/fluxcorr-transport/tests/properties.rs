//! Property tests for the flux-corrected transport kernel.
//!
//! Each property holds for arbitrary fields; velocities are drawn so the
//! Courant number stays within the scheme's positivity range unless the
//! property is independent of it.

use fluxcorr_test_utils::{assert_close, interior_sum, padded_profile, sawtooth};
use fluxcorr_transport::{fct_transport, FctTransport};
use proptest::collection::vec;
use proptest::prelude::*;

const DX: f64 = 1.0;
const DT: f64 = 0.1;

/// Velocities with `|v * DT / DX| <= 0.5`.
fn stable_velocity(n: usize) -> impl Strategy<Value = Vec<f64>> {
    vec(-5.0f64..5.0, n)
}

fn field_and_velocity() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (4usize..60).prop_flat_map(|n| (vec(-50.0f64..50.0, n), stable_velocity(n)))
}

proptest! {
    #[test]
    fn zero_field_stays_zero(v in (4usize..60).prop_flat_map(|n| vec(-40.0f64..40.0, n))) {
        let u = vec![0.0; v.len()];
        let next = fct_transport(&u, &v, DT, DX).unwrap();
        prop_assert!(next.iter().all(|&x| x == 0.0), "got {:?}", next);
    }

    #[test]
    fn boundary_cells_are_pinned(
        (u, v) in (4usize..60).prop_flat_map(|n| (vec(-50.0f64..50.0, n), vec(-100.0f64..100.0, n)))
    ) {
        let next = fct_transport(&u, &v, DT, DX).unwrap();
        let n = u.len();
        prop_assert_eq!(next[0], u[0]);
        prop_assert_eq!(next[n - 1], u[n - 1]);
    }

    #[test]
    fn interior_mass_is_conserved(
        (core, core_v) in (1usize..50).prop_flat_map(|n| (vec(0.0f64..30.0, n), stable_velocity(n)))
    ) {
        // Two quiescent cells at each end keep the boundary fluxes at zero.
        let u = padded_profile(&core, 2);
        let v = padded_profile(&core_v, 2);
        let next = fct_transport(&u, &v, DT, DX).unwrap();
        let before = interior_sum(&u);
        let after = interior_sum(&next);
        prop_assert!(
            (before - after).abs() <= 1e-9 * before.abs().max(1.0),
            "before={} after={}", before, after
        );
    }

    #[test]
    fn no_new_extrema_against_provisional_neighbours((u, v) in field_and_velocity()) {
        let mut fct = FctTransport::new();
        let next = fct.transport(&u, &v, DT, DX).unwrap();
        let ut = fct.scratch().provisional();
        for i in 1..u.len() - 1 {
            let lo = ut[i - 1].min(ut[i]).min(ut[i + 1]);
            let hi = ut[i - 1].max(ut[i]).max(ut[i + 1]);
            prop_assert!(
                next[i] >= lo - 1e-9 && next[i] <= hi + 1e-9,
                "cell {}: {} outside [{}, {}]", i, next[i], lo, hi
            );
        }
    }

    #[test]
    fn uniform_flow_creates_no_global_extrema(
        u in (4usize..60).prop_flat_map(|n| vec(-50.0f64..50.0, n)),
        speed in -5.0f64..5.0,
    ) {
        let v = vec![speed; u.len()];
        let next = fct_transport(&u, &v, DT, DX).unwrap();
        let max = u.iter().cloned().fold(f64::MIN, f64::max);
        let min = u.iter().cloned().fold(f64::MAX, f64::min);
        for &x in &next {
            prop_assert!(x <= max + 1e-9 && x >= min - 1e-9, "{} outside [{}, {}]", x, min, max);
        }
    }

    #[test]
    fn zero_velocity_result_is_independent_of_dt(
        u in (4usize..60).prop_flat_map(|n| vec(-50.0f64..50.0, n)),
        dt in 0.001f64..10.0,
    ) {
        let v = vec![0.0; u.len()];
        let a = fct_transport(&u, &v, DT, DX).unwrap();
        let b = fct_transport(&u, &v, dt, DX).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn scratch_reuse_matches_fresh_kernel((u, v) in field_and_velocity()) {
        let mut reused = FctTransport::with_capacity(200);
        let _ = reused.transport(&vec![1.0; 7], &vec![2.0; 7], DT, DX).unwrap();
        let a = reused.transport(&u, &v, DT, DX).unwrap();
        let b = fct_transport(&u, &v, DT, DX).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn six_cell_step_at_rest() {
    let u = [0.0, 0.0, 1.0, 1.0, 0.0, 0.0];
    let v = [0.0; 6];
    let next = fct_transport(&u, &v, 0.1, 1.0).unwrap();
    assert_eq!(next[0], 0.0);
    assert_eq!(next[5], 0.0);
    // Step edges are attenuated by diffusion; nothing restores them at rest.
    assert!(next[2] < 1.0 && next[3] < 1.0);
    assert!(next[1] > 0.0 && next[4] > 0.0);
    assert!((interior_sum(&next) - interior_sum(&u)).abs() < 1e-9);
    assert_close(
        &next,
        &[0.0, 1.0 / 6.0, 5.0 / 6.0, 5.0 / 6.0, 1.0 / 6.0, 0.0],
        1e-12,
    );
}

#[test]
fn sawtooth_at_rest_keeps_bounds_and_mass() {
    let u = padded_profile(&sawtooth(40, 5, 10.0), 2);
    let v = vec![0.0; u.len()];
    let next = fct_transport(&u, &v, DT, DX).unwrap();
    let max = u.iter().cloned().fold(f64::MIN, f64::max);
    assert!(next.iter().all(|&x| (-1e-12..=max + 1e-12).contains(&x)));
    assert!((interior_sum(&next) - interior_sum(&u)).abs() < 1e-9);
}

#[test]
fn pulse_translates_without_overshoot() {
    let mut u = vec![0.0; 80];
    u[10..30].fill(25.0);
    let v = vec![10.0; 80];
    let dt = 0.4 / 10.0;
    let mut fct = FctTransport::with_capacity(80);
    let mut cur = u.clone();
    for _ in 0..50 {
        cur = fct.transport(&cur, &v, dt, DX).unwrap();
    }
    assert!(cur.iter().all(|&x| (-1e-9..=25.0 + 1e-9).contains(&x)));
    let peak = cur
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, &x)| if x > best.1 { (i, x) } else { best });
    // 50 steps at Courant 0.4 move the plateau twenty cells right.
    assert!((25..=55).contains(&peak.0), "peak at {}", peak.0);
}
