use ndarray::Array3;
use rand::prelude::*;
use solute_boundary::serialize;
use solute_boundary::{
    Biofilm, BoundarySetup, PaddedGrid, SpeciesBoundary, SurroundedByBulk, Tissue, ZeroFluxBox,
};
use std::fs;
use tqdm::tqdm;

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    profile()
}

fn profile() -> Result<(), Box<dyn std::error::Error + 'static>> {
    let interior = [64, 64, 64];
    let num_sweeps = 500;
    let bulk_concentration = 8.0;

    let setup = BoundarySetup::new(vec![
        SpeciesBoundary::new("biofilm", Biofilm, bulk_concentration),
        SpeciesBoundary::new("box", ZeroFluxBox, bulk_concentration),
        SpeciesBoundary::new("bulk", SurroundedByBulk, bulk_concentration),
        SpeciesBoundary::new("tissue", Tissue::new(0.3)?, bulk_concentration),
    ]);

    fs::create_dir_all("data")?;
    let mut archive_builder = serialize::create_archive("data/profile_boundaries.tar.gz")?;
    serialize::serialize_object(serialize::SETUP_FILE, &setup, &mut archive_builder)?;

    let mut seed_generator = rand::rng();
    for species in setup.species.iter() {
        let seed = seed_generator.random::<u64>();
        let mut rng = StdRng::seed_from_u64(seed);
        let values = Array3::from_shape_fn((interior[0], interior[1], interior[2]), |_| {
            rng.random::<f64>() * bulk_concentration
        });
        let mut grid = PaddedGrid::from_interior(values.view(), bulk_concentration)?;
        grid.expect_interior(interior)?;

        let sim_dir = &species.name;
        serialize::serialize_object(
            format!("{}/{}", sim_dir, serialize::INITIAL_GRID_FILE),
            &grid,
            &mut archive_builder,
        )?;
        serialize::serialize_object(format!("{}/seed.json", sim_dir), &seed, &mut archive_builder)?;

        println!("{}", species.name);
        for _ in tqdm(0..num_sweeps) {
            species.refresh(&mut grid);
        }

        serialize::serialize_object(
            format!("{}/{}", sim_dir, serialize::FINAL_GRID_FILE),
            &grid,
            &mut archive_builder,
        )?;
    }

    serialize::finish_archive(archive_builder)?;

    Ok(())
}
