use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rf_blur::{Convolution, SeparableGaussian};
use rf_core::{BorderMode, Image};

fn build_gradient(width: usize, height: usize) -> Image<f64> {
    Image::from_fn(width, height, |x, y| ((x * 7 + y * 13) % 251) as f64)
}

fn bench_blur(c: &mut Criterion) {
    let img = build_gradient(640, 480);

    for (name, border) in [
        ("gaussian_blur_zero_sigma3_640x480", BorderMode::Constant(0.0)),
        ("gaussian_blur_reflect101_sigma3_640x480", BorderMode::Reflect101),
    ] {
        let conv = SeparableGaussian::new(border);
        c.bench_function(name, |b| {
            b.iter(|| {
                let out = conv
                    .gaussian_blur(black_box(&img), (7, 7), 3.0)
                    .expect("valid blur");
                black_box(out);
            });
        });
    }
}

criterion_group!(benches, bench_blur);
criterion_main!(benches);
