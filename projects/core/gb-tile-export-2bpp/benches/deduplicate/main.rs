use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gb_tile_export_2bpp::dedup::{deduplicate_hashed, deduplicate_scan, Deduplicated};
use gb_tile_export_2bpp::{encode, EncodedTile, PixelGrid};
use std::hint::black_box;

// Tiles drawn from a pool of `distinct` contents, in a scrambled but repeatable order.
fn generate_tiles(count: usize, distinct: usize) -> Vec<EncodedTile> {
    (0..count)
        .map(|i| {
            let id = ((i * 7919) % distinct) as u16;
            EncodedTile::from_rows([id, id ^ 0x5A5A, 0, 0, 0, 0, 0, !id])
        })
        .collect()
}

fn generate_grid(width: usize, height: usize) -> PixelGrid {
    let pixels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            (((x / 8) ^ (y / 8) ^ (x * y)) % 4) as u8
        })
        .collect();
    PixelGrid::new(width, height, pixels).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tile Deduplication");

    // 1024 = 256x256 image, the largest accepted input.
    let count = 1024;
    group.throughput(Throughput::Elements(count as u64));

    for distinct in [1, 256, 1024] {
        let tiles = generate_tiles(count, distinct);

        let implementations = [
            ("scan", deduplicate_scan as fn(&[EncodedTile]) -> Deduplicated),
            ("hashed", deduplicate_hashed),
        ];

        for (name, implementation) in implementations {
            group.bench_with_input(
                BenchmarkId::new(name, format!("{distinct} distinct")),
                &tiles,
                |b, tiles| b.iter(|| implementation(black_box(tiles))),
            );
        }
    }

    group.finish();

    let mut group = c.benchmark_group("Full Encode");
    for (width, height) in [(160, 144), (256, 256)] {
        let grid = generate_grid(width, height);
        group.throughput(Throughput::Elements((width * height) as u64));
        group.bench_with_input(
            BenchmarkId::new("encode", format!("{width}x{height}")),
            &grid,
            |b, grid| b.iter(|| encode(black_box(grid))),
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
