//! Benchmarks for find/replace and quick search
//!
//! Run with: cargo bench search

use tabstop::model::Document;
use tabstop::search::{FindOp, SearchController};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const LINE: &str = "a = Sine(freq=440, mul=0.3).mix(2).out()\n";

fn document(line_count: usize) -> Document {
    Document::with_text(&LINE.repeat(line_count))
}

// ============================================================================
// Find / replace
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn find_last_line(bencher: divan::Bencher, line_count: usize) {
    let mut doc = Document::with_text(&format!("{}needle\n", LINE.repeat(line_count)));
    let mut search = SearchController::default();

    bencher.bench_local(|| {
        doc.set_caret(0);
        divan::black_box(search.find_replace(&mut doc, FindOp::Find, "needle", None, true))
    });
}

#[divan::bench(args = [1_000, 10_000])]
fn find_case_insensitive(bencher: divan::Bencher, line_count: usize) {
    let mut doc = Document::with_text(&format!("{}NeEdLe\n", LINE.repeat(line_count)));
    let mut search = SearchController::default();

    bencher.bench_local(|| {
        doc.set_caret(0);
        divan::black_box(search.find_replace(&mut doc, FindOp::Find, "needle", None, false))
    });
}

#[divan::bench(args = [100, 1_000])]
fn replace_all_same_length(bencher: divan::Bencher, line_count: usize) {
    bencher
        .with_inputs(|| (document(line_count), SearchController::default()))
        .bench_local_values(|(mut doc, mut search)| {
            divan::black_box(search.find_replace(
                &mut doc,
                FindOp::ReplaceAll,
                "Sine",
                Some("Sawt"),
                true,
            ))
        });
}

#[divan::bench(args = [100, 1_000])]
fn replace_all_with_newlines(bencher: divan::Bencher, line_count: usize) {
    bencher
        .with_inputs(|| (document(line_count), SearchController::default()))
        .bench_local_values(|(mut doc, mut search)| {
            divan::black_box(search.find_replace(
                &mut doc,
                FindOp::ReplaceAll,
                ".",
                Some("\n."),
                true,
            ))
        });
}

// ============================================================================
// Quick search
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn quick_search_cycle(bencher: divan::Bencher, line_count: usize) {
    let mut doc = document(line_count);
    let mut search = SearchController::default();

    bencher.bench_local(|| divan::black_box(search.quick_search(&mut doc, "mix", true)));
}

#[divan::bench(args = [1_000, 10_000])]
fn quick_search_backward_wrap(bencher: divan::Bencher, line_count: usize) {
    let mut doc = document(line_count);
    let mut search = SearchController::default();

    bencher.bench_local(|| {
        doc.set_caret(0);
        divan::black_box(search.quick_search(&mut doc, "out", false))
    });
}
