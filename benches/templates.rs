//! Benchmarks for template expansion and tab-stop navigation
//!
//! Run with: cargo bench templates

use tabstop::markers::MarkerRegistry;
use tabstop::messages::{MarginModifier, Msg};
use tabstop::template::{builtins::KEYWORD_BLUEPRINTS, Template};
use tabstop::update::update;
use tabstop::AppModel;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Model whose last line is `trigger`, caret at its end
fn model_ending_with(filler_lines: usize, trigger: &str) -> AppModel {
    let text = format!("{}{}", "x = 1\n".repeat(filler_lines), trigger);
    let mut model = AppModel::with_text(&text);
    let end = model.document.len_chars();
    model.document.set_caret(end);
    model
}

// ============================================================================
// Parsing
// ============================================================================

#[divan::bench]
fn parse_builtin_blueprints() {
    for (_, blueprint) in KEYWORD_BLUEPRINTS {
        let _ = divan::black_box(Template::parse(divan::black_box(blueprint)));
    }
}

#[divan::bench(args = [10, 100, 1_000])]
fn parse_many_placeholders(count: usize) {
    let blueprint = "f(`x`) + ".repeat(count);
    let _ = divan::black_box(Template::parse(&blueprint));
}

// ============================================================================
// Expansion through update()
// ============================================================================

#[divan::bench(args = [0, 1_000, 10_000])]
fn expand_and_walk_while(bencher: divan::Bencher, filler_lines: usize) {
    bencher
        .with_inputs(|| model_ending_with(filler_lines, "while"))
        .bench_local_values(|mut model| {
            for _ in 0..6 {
                update(&mut model, Msg::tab());
            }
            divan::black_box(model)
        });
}

#[divan::bench(args = [0, 1_000, 10_000])]
fn argument_fill(bencher: divan::Bencher, filler_lines: usize) {
    bencher
        .with_inputs(|| model_ending_with(filler_lines, "s = Freeverb"))
        .bench_local_values(|mut model| {
            update(&mut model, Msg::tab());
            divan::black_box(model)
        });
}

// ============================================================================
// Marker renumbering
// ============================================================================

#[divan::bench(args = [10, 100, 1_000])]
fn shift_markers(bencher: divan::Bencher, marker_count: usize) {
    bencher
        .with_inputs(|| {
            let mut markers = MarkerRegistry::default();
            for line in 0..marker_count {
                markers.add(line * 2);
            }
            markers
        })
        .bench_local_values(|mut markers| {
            markers.shift(1, 3);
            markers.shift(4, -2);
            divan::black_box(markers)
        });
}

#[divan::bench(args = [10, 100])]
fn expansion_with_markers_below(bencher: divan::Bencher, marker_count: usize) {
    bencher
        .with_inputs(|| {
            let mut model = AppModel::with_text(&format!("for\n{}", "x = 1\n".repeat(marker_count)));
            for line in 1..=marker_count {
                update(&mut model, Msg::margin_click(line, MarginModifier::None));
            }
            model.document.set_caret(3);
            model
        })
        .bench_local_values(|mut model| {
            update(&mut model, Msg::tab());
            divan::black_box(model)
        });
}
