// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation.
//!
//! Measures the cost of:
//! - Stepping through the gallery (next/previous)
//! - Resolving the displayed entry into localized texts and an artwork handle

use art_space::application::GalleryController;
use art_space::config::Config;
use art_space::i18n::fluent::I18n;
use art_space::ui::artwork;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Pure index arithmetic, no rendering.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("next", |b| {
        let mut controller = GalleryController::default();
        b.iter(|| {
            controller.next();
            black_box(controller.current_index());
        });
    });

    group.bench_function("previous", |b| {
        let mut controller = GalleryController::default();
        b.iter(|| {
            controller.previous();
            black_box(controller.current_index());
        });
    });

    group.finish();
}

/// What the view does after each step: look up texts and artwork.
fn bench_resolve_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());

    group.bench_function("next_and_resolve", |b| {
        let mut controller = GalleryController::default();
        b.iter(|| {
            controller.next();
            let entry = controller.current_entry();
            black_box(i18n.text(entry.title));
            black_box(i18n.text(entry.artist));
            black_box(artwork::resolve(entry.image));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_resolve_page);
criterion_main!(benches);
