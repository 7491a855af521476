// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Capability resolution benchmarks
//!
//! Measures table filtering, platform construction and cached lookups.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use unified_sql_function_registry::FunctionRegistry;
use unified_sql_ir::{Family, Version, VersionId, filter_for_version};
use unified_sql_platform::{PlatformRegistry, SqlMode, tables};

fn bench_filter_reserved(c: &mut Criterion) {
    let target = VersionId::from_raw(80099);

    c.bench_function("capability/filter_reserved", |b| {
        b.iter(|| {
            let words = filter_for_version(tables::mysql::TABLES.reserved, black_box(target));
            black_box(words);
        });
    });
}

fn bench_platform_build(c: &mut Criterion) {
    let functions = FunctionRegistry::new();
    let version = Version::new(10, Some(6), None);

    c.bench_function("capability/platform_build_mariadb", |b| {
        b.iter(|| {
            let platform = unified_sql_platform::Platform::build(
                Family::MariaDb,
                black_box(version),
                &functions,
            );
            black_box(platform.is_ok());
        });
    });
}

fn bench_cached_lookup(c: &mut Criterion) {
    let registry = PlatformRegistry::new();
    let _ = registry.get("mysql", "8.0");

    c.bench_function("capability/cached_lookup", |b| {
        b.iter(|| {
            let platform = registry.get(black_box("mysql"), black_box("8.0"));
            black_box(platform.is_ok());
        });
    });
}

fn bench_mode_parse(c: &mut Criterion) {
    let text = "ONLY_FULL_GROUP_BY,STRICT_TRANS_TABLES,NO_ZERO_IN_DATE,NO_ZERO_DATE,\
                ERROR_FOR_DIVISION_BY_ZERO,NO_ENGINE_SUBSTITUTION";

    c.bench_function("capability/sql_mode_parse", |b| {
        b.iter(|| {
            let mode = black_box(text).parse::<SqlMode>();
            black_box(mode.is_ok());
        });
    });
}

criterion_group!(
    benches,
    bench_filter_reserved,
    bench_platform_build,
    bench_cached_lookup,
    bench_mode_parse
);
criterion_main!(benches);
