//! End-to-end runs of the default configuration.

use fluxcorr_engine::{Simulation, SimulationConfig};
use fluxcorr_test_utils::{MemorySink, RecordedSnapshot};

fn centroid(snap: &RecordedSnapshot) -> f64 {
    let mass: f64 = snap.density.iter().sum();
    snap.positions
        .iter()
        .zip(&snap.density)
        .map(|(x, rho)| x * rho)
        .sum::<f64>()
        / mass
}

fn reference_run() -> (MemorySink, fluxcorr_engine::RunSummary) {
    let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    let mut sink = MemorySink::new();
    let summary = sim.run(&mut sink).unwrap();
    (sink, summary)
}

#[test]
fn default_run_writes_one_snapshot_per_step() {
    let (sink, summary) = reference_run();
    assert_eq!(summary.steps, 250);
    assert_eq!(summary.snapshots_written, 251);
    assert_eq!(sink.snapshots().len(), 251);
    assert!(sink.is_finished());
    assert!(sink.snapshots().iter().all(|s| s.density.len() == 1000));
    assert!((summary.final_time - 10.0).abs() < 1e-9);
}

#[test]
fn default_run_conserves_mass_and_momentum() {
    let (sink, summary) = reference_run();
    assert_eq!(summary.initial_mass, 2500.0);
    assert!((summary.final_mass - 2500.0).abs() < 1e-8);
    assert_eq!(summary.clamped_cells, 0);
    for snap in sink.snapshots() {
        assert!((snap.mass(1.0) - 2500.0).abs() < 1e-8, "step {}", snap.step);
        let momentum: f64 = snap.momentum.iter().sum();
        assert!((momentum - 25_000.0).abs() < 1e-7, "step {}", snap.step);
    }
}

#[test]
fn default_run_carries_pulse_one_hundred_metres() {
    let (sink, summary) = reference_run();
    let first = &sink.snapshots()[0];
    let last = sink.last().unwrap();
    assert!((centroid(first) - 99.5).abs() < 1e-12);
    // 250 steps of 0.04 s at 10 m/s.
    let shift = centroid(last) - centroid(first);
    assert!((shift - 100.0).abs() < 1.0, "shift {shift}");
    assert!(summary.max_courant < 0.4 + 1e-9);
    assert_eq!(last.density[0], 0.0);
    assert_eq!(last.density[999], 0.0);
}

#[test]
fn pulse_velocity_is_preserved_where_density_is_positive() {
    let (sink, _) = reference_run();
    let last = sink.last().unwrap();
    for (i, (&rho, &v)) in last.density.iter().zip(&last.velocity).enumerate() {
        if rho > 0.0 {
            assert!((v - 10.0).abs() < 1e-6, "cell {i}: v = {v}");
        } else {
            assert_eq!(v, 0.0);
        }
    }
}
