// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ttp::PlayerSaveFile;

const PLAYER: [u8; 43] = [
    0x50, 0x54, 0x54, 0x50, 0x01, 0x01, 0x07, 0, 0, 0, 0x2a, 0, 0, 0, 0, 0, 0x80, 0x3f, 0, 0, 0x80,
    0x40, 0, 0, 0xa0, 0x40, 0, 0, 0xc0, 0x40, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
];

fn decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group
        .throughput(Throughput::Bytes(PLAYER.len() as u64))
        .bench_function("from_bytes", |b| {
            b.iter(|| PlayerSaveFile::from_bytes(black_box(&PLAYER)).unwrap());
        });
    group.bench_function("from_reader", |b| {
        b.iter(|| PlayerSaveFile::from_reader(black_box(&PLAYER[..])).unwrap());
    });

    group.finish();
}

criterion_group!(benches, decode);
criterion_main!(benches);
