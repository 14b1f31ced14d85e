use rf_core::{BorderMode, map_index};

pub fn convolve_f64(
    signal: &[f64],
    kernel: &[f64],
    radius: usize,
    border: BorderMode<f64>,
    out: &mut [f64],
) {
    assert_eq!(out.len(), signal.len(), "out must match signal length");
    assert_eq!(
        kernel.len(),
        2 * radius + 1,
        "kernel len must be 2*radius+1"
    );

    let n = signal.len();
    if n == 0 {
        return;
    }

    // Interior samples see the full kernel footprint regardless of border.
    let interior_start = radius.min(n);
    let interior_end = n.saturating_sub(radius).max(interior_start);
    for (i, out_i) in out
        .iter_mut()
        .enumerate()
        .take(interior_end)
        .skip(interior_start)
    {
        let window = &signal[i - radius..=i + radius];
        *out_i = window
            .iter()
            .zip(kernel.iter().rev())
            .map(|(&s, &k)| s * k)
            .sum();
    }

    for i in (0..interior_start).chain(interior_end..n) {
        out[i] = convolve_at_border(signal, kernel, radius, &border, i);
    }
}

fn convolve_at_border(
    signal: &[f64],
    kernel: &[f64],
    radius: usize,
    border: &BorderMode<f64>,
    i: usize,
) -> f64 {
    let n = signal.len();
    // Only constant borders leave indices unmapped for a non-empty signal.
    let fill = match border {
        BorderMode::Constant(c) => *c,
        _ => 0.0,
    };
    let mut acc = 0.0f64;
    for (k, &kv) in kernel.iter().enumerate() {
        let idx = i as isize + radius as isize - k as isize;
        let v = map_index(idx, n, border).map_or(fill, |j| signal[j]);
        acc += v * kv;
    }
    acc
}
