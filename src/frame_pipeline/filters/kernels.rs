//! Pixel-plane primitives backing the filter stages.
//!
//! All functions operate on row-major 8-bit planes and return freshly
//! allocated results. Spatial kernels mirror at the borders without
//! repeating the edge sample.

/// Default sigma for the unsharp-mask blur pass.
pub const SHARPEN_SIGMA: f32 = 3.0;

/// Mirror an out-of-range coordinate back into `[0, len)` without
/// duplicating the border sample (… 2 1 | 0 1 2 … n-1 | n-2 n-3 …).
#[inline]
fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let len = len as isize;
    let mut i = i;
    while i < 0 || i >= len {
        if i < 0 {
            i = -i;
        }
        if i >= len {
            i = 2 * (len - 1) - i;
        }
    }
    i as usize
}

/// Linear min-max rescale into [0,255].
///
/// A zero-span (uniform) plane collapses to the range floor.
pub fn min_max_rescale(data: &[u8]) -> Vec<u8> {
    let min = data.iter().copied().min().unwrap_or(0);
    let max = data.iter().copied().max().unwrap_or(0);

    if max == min {
        return vec![0u8; data.len()];
    }

    let scale = 255.0 / (max - min) as f32;
    data.iter()
        .map(|&v| ((v - min) as f32 * scale).round().clamp(0.0, 255.0) as u8)
        .collect()
}

/// Saturating per-sample affine transform: `alpha * v + beta`.
pub fn affine(data: &[u8], alpha: f32, beta: f32) -> Vec<u8> {
    data.iter()
        .map(|&v| (v as f32 * alpha + beta).round().clamp(0.0, 255.0) as u8)
        .collect()
}

/// Normalized 1-D Gaussian kernel of odd extent `ksize`.
///
/// A non-positive sigma is derived from the kernel extent.
fn gaussian_kernel(ksize: usize, sigma: f32) -> Vec<f32> {
    debug_assert!(ksize % 2 == 1 && ksize > 0);

    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((ksize - 1) as f32 * 0.5 - 1.0) + 0.8
    };

    let r = (ksize / 2) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-r..=r)
        .map(|x| (-(x * x) as f32 / denom).exp())
        .collect();

    let sum: f32 = kernel.iter().sum();
    for k in kernel.iter_mut() {
        *k /= sum;
    }
    kernel
}

/// Kernel extent for a given sigma on 8-bit data (three sigmas per side,
/// forced odd).
pub fn kernel_size_for_sigma(sigma: f32) -> usize {
    let k = (sigma * 6.0 + 1.0).round() as usize;
    if k % 2 == 0 { k + 1 } else { k }
}

/// Separable isotropic Gaussian blur, keeping float precision.
pub fn gaussian_blur_f32(
    data: &[u8],
    width: usize,
    height: usize,
    ksize: usize,
    sigma: f32,
) -> Vec<f32> {
    let kernel = gaussian_kernel(ksize, sigma);
    let r = (ksize / 2) as isize;

    let mut horiz = vec![0f32; width * height];
    for y in 0..height {
        let row = y * width;
        for x in 0..width {
            let mut acc = 0.0;
            for (t, k) in kernel.iter().enumerate() {
                let sx = reflect_101(x as isize + t as isize - r, width);
                acc += k * data[row + sx] as f32;
            }
            horiz[row + x] = acc;
        }
    }

    let mut out = vec![0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (t, k) in kernel.iter().enumerate() {
                let sy = reflect_101(y as isize + t as isize - r, height);
                acc += k * horiz[sy * width + x];
            }
            out[y * width + x] = acc;
        }
    }

    out
}

/// Separable isotropic Gaussian blur, quantized back to 8-bit.
pub fn gaussian_blur(data: &[u8], width: usize, height: usize, ksize: usize) -> Vec<u8> {
    gaussian_blur_f32(data, width, height, ksize, 0.0)
        .into_iter()
        .map(|v| v.round().clamp(0.0, 255.0) as u8)
        .collect()
}

/// Unsharp-mask sharpening: blend the plane against a sigma-3 blurred copy
/// as `original * (1 + amount) - blurred * amount`.
pub fn unsharp_mask(data: &[u8], width: usize, height: usize, amount: f32) -> Vec<u8> {
    let ksize = kernel_size_for_sigma(SHARPEN_SIGMA);
    let blurred = gaussian_blur_f32(data, width, height, ksize, SHARPEN_SIGMA);

    data.iter()
        .zip(blurred.iter())
        .map(|(&orig, &blur)| {
            (orig as f32 * (1.0 + amount) - blur * amount)
                .round()
                .clamp(0.0, 255.0) as u8
        })
        .collect()
}

/// Non-local-means noise reduction.
///
/// For every pixel, candidates inside the `search`-wide window are weighted
/// by `exp(-d² / strength²)`, where `d²` is the mean squared difference of
/// the `template`-wide patches around the pixel and the candidate.
pub fn nlm_denoise(
    data: &[u8],
    width: usize,
    height: usize,
    strength: f32,
    template: usize,
    search: usize,
) -> Vec<u8> {
    let tr = (template / 2) as isize;
    let sr = (search / 2) as isize;
    let h2 = strength * strength;
    let patch_area = (template * template) as f32;

    let sample = |x: isize, y: isize| -> f32 {
        data[reflect_101(y, height) * width + reflect_101(x, width)] as f32
    };

    let patch_distance = |px: isize, py: isize, qx: isize, qy: isize| -> f32 {
        let mut acc = 0.0;
        for ty in -tr..=tr {
            for tx in -tr..=tr {
                let d = sample(px + tx, py + ty) - sample(qx + tx, qy + ty);
                acc += d * d;
            }
        }
        acc / patch_area
    };

    let mut out = vec![0u8; data.len()];
    for y in 0..height as isize {
        for x in 0..width as isize {
            let mut weight_sum = 0.0;
            let mut value_sum = 0.0;
            for dy in -sr..=sr {
                for dx in -sr..=sr {
                    let d2 = patch_distance(x, y, x + dx, y + dy);
                    let weight = (-d2 / h2).exp();
                    weight_sum += weight;
                    value_sum += weight * sample(x + dx, y + dy);
                }
            }
            out[y as usize * width + x as usize] =
                (value_sum / weight_sum).round().clamp(0.0, 255.0) as u8;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(0, 5), 0);
        assert_eq!(reflect_101(4, 5), 4);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(3, 1), 0);
    }

    #[test]
    fn test_min_max_rescale_stretches() {
        assert_eq!(min_max_rescale(&[10, 10, 20]), vec![0, 0, 255]);
        assert_eq!(min_max_rescale(&[0, 128, 255]), vec![0, 128, 255]);
    }

    #[test]
    fn test_min_max_rescale_uniform_collapses() {
        assert_eq!(min_max_rescale(&[128; 9]), vec![0; 9]);
        assert_eq!(min_max_rescale(&[]), Vec::<u8>::new());
    }

    #[test]
    fn test_affine_saturates() {
        assert_eq!(affine(&[100, 200], 2.0, 0.0), vec![200, 255]);
        assert_eq!(affine(&[100], 1.0, -150.0), vec![0]);
        assert_eq!(affine(&[10, 20], 1.0, 5.0), vec![15, 25]);
    }

    #[test]
    fn test_gaussian_kernel_normalized() {
        for ksize in [3, 5, 19] {
            let sum: f32 = gaussian_kernel(ksize, 0.0).iter().sum();
            assert!((sum - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_kernel_size_for_sigma() {
        assert_eq!(kernel_size_for_sigma(SHARPEN_SIGMA), 19);
    }

    #[test]
    fn test_blur_preserves_uniform_plane() {
        let plane = vec![100u8; 8 * 8];
        assert_eq!(gaussian_blur(&plane, 8, 8, 3), plane);
    }

    #[test]
    fn test_blur_spreads_impulse() {
        let mut plane = vec![0u8; 9 * 9];
        plane[4 * 9 + 4] = 255;
        let blurred = gaussian_blur(&plane, 9, 9, 3);

        assert_eq!(blurred.len(), plane.len());
        assert!(blurred[4 * 9 + 4] < 255);
        assert!(blurred[4 * 9 + 3] > 0);
        assert!(blurred[3 * 9 + 4] > 0);
    }

    #[test]
    fn test_unsharp_identity_on_flat_plane() {
        let plane = vec![77u8; 8 * 8];
        assert_eq!(unsharp_mask(&plane, 8, 8, 1.5), plane);
    }

    #[test]
    fn test_unsharp_amplifies_edges() {
        // Vertical step edge; sharpening overshoots on both sides.
        let width = 16;
        let mut plane = vec![64u8; width * width];
        for row in plane.chunks_mut(width) {
            for v in &mut row[width / 2..] {
                *v = 192;
            }
        }
        let sharpened = unsharp_mask(&plane, width, width, 1.0);
        let edge = width / 2;
        assert!(sharpened[8 * width + edge - 1] < 64);
        assert!(sharpened[8 * width + edge] > 192);
    }

    #[test]
    fn test_nlm_preserves_uniform_plane() {
        let plane = vec![50u8; 16 * 16];
        assert_eq!(nlm_denoise(&plane, 16, 16, 10.0, 7, 21), plane);
    }

    #[test]
    fn test_nlm_reduces_noise_variance() {
        // Deterministic pseudo-noise around a flat level.
        let mut state = 0x1234_5678u32;
        let mut lcg = || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as i16
        };
        let plane: Vec<u8> = (0..16 * 16)
            .map(|_| (128 + (lcg() % 21) - 10).clamp(0, 255) as u8)
            .collect();

        let denoised = nlm_denoise(&plane, 16, 16, 10.0, 7, 21);

        let variance = |p: &[u8]| {
            let mean = p.iter().map(|&v| v as f64).sum::<f64>() / p.len() as f64;
            p.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / p.len() as f64
        };
        assert!(variance(&denoised) < variance(&plane));
    }
}
