//! Shared helpers for benchmarks

use rand::rngs::StdRng;
use rand::SeedableRng;
use tabula::config::GridConfig;
use tabula::grid::Row;
use tabula::model::AppModel;
use tabula::sample;

/// Deterministic synthetic rows
#[allow(dead_code)]
pub fn make_rows(count: usize) -> Vec<Row> {
    sample::generate(count, &mut StdRng::seed_from_u64(0x7ab))
}

/// Create an AppModel with the specified number of rows loaded
#[allow(dead_code)]
pub fn make_model(count: usize) -> AppModel {
    let mut model = AppModel::new(GridConfig::default());
    model.grid.load(make_rows(count));
    model
}
