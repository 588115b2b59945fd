//! Full runs through `Simulation`: snapshots, run-info, and failure paths.

use std::fs;

use hrot_core::Rule;
use hrot_engine::{InitMode, RunInfo, RunPhase, SimConfig, SimError, Simulation};
use hrot_grid::{snapshot_path, Grid};
use hrot_test_utils::{blinker, grid_rows, life_rule, TempOutputDir};

fn config_in(dir: &TempOutputDir, generations: u64) -> SimConfig {
    SimConfig {
        width: 5,
        height: 5,
        max_generations: generations,
        output_folder: dir.path().to_path_buf(),
        ..SimConfig::default()
    }
}

#[test]
fn run_writes_one_snapshot_per_generation_and_activity() {
    let dir = TempOutputDir::new("driver_snapshots");
    let (horizontal, vertical) = blinker();
    let init_dir = TempOutputDir::new("driver_snapshots_init");
    let init = horizontal.save(init_dir.path(), 0).unwrap();

    let config = SimConfig {
        init: InitMode::File(init),
        ..config_in(&dir, 3)
    };
    let summary = Simulation::new(config, life_rule()).unwrap().run().unwrap();

    assert_eq!(summary.generations, 3);
    assert_eq!(summary.changed_cells, 12);
    assert!((summary.activity_score() - 16.0).abs() < 1e-9);

    for g in 0..3 {
        assert!(snapshot_path(dir.path(), g).exists(), "generation {g}");
    }
    assert!(!snapshot_path(dir.path(), 3).exists());
    let gen1 = Grid::load(&snapshot_path(dir.path(), 1)).unwrap();
    assert_eq!(grid_rows(&gen1), grid_rows(&vertical));

    let info = RunInfo::read(&RunInfo::path(dir.path())).unwrap();
    assert_eq!(info.get("Activity"), Some("16.00%"));
}

#[test]
fn snapshot_bytes_for_dead_grid() {
    let dir = TempOutputDir::new("driver_dead");
    let config = SimConfig {
        width: 2,
        height: 2,
        init: InitMode::Random { density: 0.0 },
        seed: Some(1),
        ..config_in(&dir, 1)
    };
    Simulation::new(config, life_rule()).unwrap().run().unwrap();
    let bytes = fs::read(snapshot_path(dir.path(), 0)).unwrap();
    let mut expected = Vec::new();
    expected.extend_from_slice(&2i32.to_ne_bytes());
    expected.extend_from_slice(&2i32.to_ne_bytes());
    expected.extend_from_slice(&[0, 0, 0, 0]);
    assert_eq!(bytes, expected);
}

#[test]
fn center_init_seeds_the_fixed_cluster() {
    let config = SimConfig {
        width: 11,
        height: 11,
        max_generations: 1,
        init: InitMode::Center,
        write_output: false,
        ..SimConfig::default()
    };
    let sim = Simulation::new(config, life_rule()).unwrap();
    assert_eq!(sim.grid().alive_count(), 21);
    assert_eq!(sim.grid().get(5, 5), Some(1));
    assert_eq!(sim.grid().get(3, 3), Some(0));
    assert_eq!(sim.seed(), None);
}

#[test]
fn file_init_with_wrong_size_is_rejected() {
    let dir = TempOutputDir::new("driver_mismatch");
    let path = Grid::new(4, 4).unwrap().save(dir.path(), 0).unwrap();
    let config = SimConfig {
        init: InitMode::File(path),
        ..config_in(&dir, 1)
    };
    let err = Simulation::new(config, life_rule()).unwrap_err();
    assert!(matches!(
        err,
        SimError::InitDimensionMismatch {
            expected: (5, 5),
            found: (4, 4)
        }
    ));
}

#[test]
fn missing_init_file_is_reported_with_its_path() {
    let dir = TempOutputDir::new("driver_missing");
    let path = dir.path().join("absent.bin");
    let config = SimConfig {
        init: InitMode::File(path.clone()),
        ..config_in(&dir, 1)
    };
    match Simulation::new(config, life_rule()) {
        Err(SimError::InitFile { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected InitFile error, got {other:?}"),
    }
}

#[test]
fn snapshot_failure_aborts_the_run() {
    let dir = TempOutputDir::new("driver_blocked");
    fs::create_dir_all(dir.path()).unwrap();
    // A regular file where the output folder should be.
    let blocked = dir.path().join("not_a_dir");
    fs::write(&blocked, b"x").unwrap();
    let config = SimConfig {
        output_folder: blocked,
        seed: Some(3),
        ..config_in(&dir, 5)
    };
    let mut sim = Simulation::new(config, life_rule()).unwrap();
    let err = sim.advance().unwrap_err();
    assert!(matches!(err, SimError::Snapshot { generation: 0, .. }));
    assert_eq!(sim.generation(), 0);
}

#[test]
fn snapshot_failure_mid_run_still_records_activity() {
    let dir = TempOutputDir::new("driver_blocked_mid");
    let (horizontal, _) = blinker();
    let init_dir = TempOutputDir::new("driver_blocked_mid_init");
    let init = horizontal.save(init_dir.path(), 0).unwrap();
    // A directory where generation 2's snapshot file should go.
    fs::create_dir_all(snapshot_path(dir.path(), 2)).unwrap();

    let config = SimConfig {
        init: InitMode::File(init),
        ..config_in(&dir, 10)
    };
    let mut sim = Simulation::new(config, life_rule()).unwrap();
    let err = sim.run().unwrap_err();
    assert!(matches!(err, SimError::Snapshot { generation: 2, .. }));
    assert_eq!(sim.phase(), RunPhase::Terminal);
    assert!(!sim.has_budget());

    let summary = sim.summary();
    assert_eq!(summary.generations, 2);
    assert_eq!(summary.changed_cells, 8);
    assert!(snapshot_path(dir.path(), 1).is_file());

    let info = RunInfo::read(&RunInfo::path(dir.path())).unwrap();
    assert_eq!(info.get("Activity"), Some("16.00%"));
}

#[test]
fn with_rng_draws_from_the_caller_generator() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let config = SimConfig {
        width: 12,
        height: 12,
        write_output: false,
        ..SimConfig::default()
    };
    let a = Simulation::with_rng(
        config.clone(),
        Rule::conway(),
        &mut ChaCha8Rng::seed_from_u64(5),
    )
    .unwrap();
    let b = Simulation::with_rng(config, Rule::conway(), &mut ChaCha8Rng::seed_from_u64(5))
        .unwrap();
    assert_eq!(a.grid(), b.grid());
    assert!(a.grid().alive_count() > 0);
}
