//! Benchmarks for grid recomputation
//!
//! Every state change recomputes filter → sort → window from scratch, so
//! these must stay within a frame at 10^4–10^5 rows.
//!
//! Run with: cargo bench grid

mod support;

use support::{make_model, make_rows};
use tabula::codec::encode_rows;
use tabula::grid::{sort_rows, Column, FilterSet, SortKey, VirtualWindow};
use tabula::messages::{GridMsg, Msg};
use tabula::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Individual stages
// ============================================================================

#[divan::bench(args = [10_000, 100_000])]
fn filter_single_column(bencher: divan::Bencher, count: usize) {
    let rows = make_rows(count);
    let filters = FilterSet::new().with(Column::Genre, "fiction");

    bencher.bench_local(|| divan::black_box(filters.apply(&rows)));
}

#[divan::bench(args = [10_000, 100_000])]
fn filter_all_columns(bencher: divan::Bencher, count: usize) {
    let rows = make_rows(count);
    let filters = FilterSet::new()
        .with(Column::Title, "the")
        .with(Column::Author, "a")
        .with(Column::Genre, "i")
        .with(Column::PublishedYear, "19")
        .with(Column::Isbn, "978");

    bencher.bench_local(|| divan::black_box(filters.apply(&rows)));
}

#[divan::bench(args = [10_000, 100_000])]
fn sort_by_title(bencher: divan::Bencher, count: usize) {
    let rows = make_rows(count);
    let refs: Vec<_> = rows.iter().collect();

    bencher.bench_local(|| {
        divan::black_box(sort_rows(&refs, Some(SortKey::ascending(Column::Title))))
    });
}

#[divan::bench(args = [10_000, 100_000])]
fn sort_by_year_descending(bencher: divan::Bencher, count: usize) {
    let rows = make_rows(count);
    let refs: Vec<_> = rows.iter().collect();

    bencher.bench_local(|| {
        divan::black_box(sort_rows(&refs, Some(SortKey::descending(Column::PublishedYear))))
    });
}

#[divan::bench]
fn window_compute() -> tabula::grid::Window {
    let mut window = VirtualWindow::rows();
    window.set_scroll_offset(divan::black_box(123_456.0));
    window.window(divan::black_box(100_000))
}

// ============================================================================
// Full pipeline
// ============================================================================

#[divan::bench(args = [10_000, 100_000])]
fn view_filtered_and_sorted(bencher: divan::Bencher, count: usize) {
    let mut model = make_model(count);
    model.grid.set_filter(Column::Genre, "fic");
    model.grid.sort_by(Column::Author);

    bencher.bench_local(|| divan::black_box(model.view().window));
}

#[divan::bench(args = [10_000, 100_000])]
fn edit_then_view(bencher: divan::Bencher, count: usize) {
    let mut model = make_model(count);
    model.grid.sort_by(Column::Title);
    let target = model.grid.rows()[count / 2].id;

    bencher.bench_local(|| {
        update(
            &mut model,
            Msg::Grid(GridMsg::EditCell {
                row: target,
                column: Column::Title,
                value: "Edited".to_string(),
            }),
        );
        divan::black_box(model.view().window)
    });
}

#[divan::bench(args = [10_000])]
fn encode_export(bencher: divan::Bencher, count: usize) {
    let model = make_model(count);
    let rows = model.grid.view_rows();

    bencher.bench_local(|| divan::black_box(encode_rows(&rows)));
}
