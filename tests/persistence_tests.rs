use solute_boundary::serialize;
use solute_boundary::*;
use std::fs;
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("solute_boundary_{}_{}", std::process::id(), name))
}

#[test]
fn setup_and_grid_survive_an_archive() {
    let setup = BoundarySetup::new(vec![
        SpeciesBoundary::new("oxygen", Biofilm, 8.0),
        SpeciesBoundary::new("glucose", Tissue::new(0.5).unwrap(), 2.0),
    ]);
    let mut grid = PaddedGrid::filled([2, 3, 2], 1.5).unwrap();
    grid[[1, 2, 1]] = 4.0;
    setup.refresh("glucose", &mut grid).unwrap();

    let path = scratch_path("archive.tar.gz");
    let mut archive = serialize::create_archive(&path).unwrap();
    serialize::serialize_object(serialize::SETUP_FILE, &setup, &mut archive).unwrap();
    serialize::serialize_object(
        format!("glucose/{}", serialize::FINAL_GRID_FILE),
        &grid,
        &mut archive,
    )
    .unwrap();
    serialize::finish_archive(archive).unwrap();

    let read_setup: BoundarySetup = serialize::read_object(&path, serialize::SETUP_FILE).unwrap();
    assert_eq!(read_setup, setup);
    let read_grid: PaddedGrid =
        serialize::read_object(&path, format!("glucose/{}", serialize::FINAL_GRID_FILE)).unwrap();
    assert_eq!(read_grid, grid);

    assert!(matches!(
        serialize::read_object::<PaddedGrid>(&path, "missing.json"),
        Err(Error::EntryNotFound(_))
    ));
    fs::remove_file(&path).unwrap();
}

#[test]
fn setup_round_trips_through_a_json_file() {
    let setup = BoundarySetup::new(vec![
        SpeciesBoundary::new("a", ZeroFluxBox, 0.0),
        SpeciesBoundary::new("b", SurroundedByBulk, 5.0),
    ]);
    let path = scratch_path("setup.json");
    setup.to_json_file(&path).unwrap();
    assert_eq!(BoundarySetup::from_json_file(&path).unwrap(), setup);
    fs::remove_file(&path).unwrap();
}

#[test]
fn results_file_reports_last_iteration() {
    let path = scratch_path("results.tsv");
    let mut text = TimeStep::header(false);
    text.push('\n');
    for (iteration, time) in [(0, 0.0), (1, 0.5), (2, 1.25)] {
        text.push_str(&TimeStep::at(iteration, time, 0.5, 10.0).to_row(false));
        text.push('\n');
    }
    fs::write(&path, text).unwrap();

    let results = ResultsFile::read(&path).unwrap();
    assert_eq!(results.iterations(), 3);
    assert_eq!(results.last_value("time").unwrap(), 1.25);
    assert_eq!(results.last_value("iteration").unwrap(), 2.0);
    assert!(matches!(
        results.last_value("constraint"),
        Err(Error::SeriesNotFound(_))
    ));
    fs::remove_file(&path).unwrap();
}
