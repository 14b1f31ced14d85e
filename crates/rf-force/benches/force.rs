use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rf_core::{Image, Mask};
use rf_force::{ForceConfig, ForceModel};

fn build_scene(width: usize, height: usize) -> (Image<f64>, Mask) {
    let img = Image::from_fn(width, height, |x, y| {
        let dx = x as f64 - width as f64 * 0.5;
        let dy = y as f64 - height as f64 * 0.5;
        let disk = if dx * dx + dy * dy < (height as f64 * 0.3).powi(2) {
            180.0
        } else {
            60.0
        };
        disk + ((x * 7 + y * 13) % 17) as f64
    });
    let mask = Mask::from_rect(width, height, width / 4, height / 4, width / 2, height / 2);
    (img, mask)
}

fn bench_models(c: &mut Criterion) {
    let (img, mask) = build_scene(320, 240);

    let configs = [
        ("piecewise_constant_320x240", ForceConfig::PiecewiseConstant { k0: 1.0, k1: 1.0 }),
        ("gaussian_likelihood_320x240", ForceConfig::GaussianLikelihood),
        (
            "local_gaussian_sigma2_320x240",
            ForceConfig::LocalGaussian {
                k0: 1.0,
                k1: 1.0,
                sigma: 2,
                border: Default::default(),
            },
        ),
    ];

    for (name, cfg) in configs {
        let model = cfg.build(img.clone()).expect("valid model");
        c.bench_function(name, |b| {
            b.iter(|| {
                let force = model.compute_force(black_box(&mask)).expect("valid force");
                black_box(force);
            });
        });
    }
}

criterion_group!(benches, bench_models);
criterion_main!(benches);
