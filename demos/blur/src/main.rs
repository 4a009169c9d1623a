use argh::FromArgs;
use std::time::Instant;

use recublur::imgproc::filter::recursive_gaussian_blur;
use recublur::plane::{Plane, PlaneSize};

#[derive(FromArgs)]
/// Blur a synthetic 8-bit plane with the recursive Gaussian filter
struct Args {
    /// plane width in pixels
    #[argh(option, default = "1920")]
    width: usize,

    /// plane height in pixels
    #[argh(option, default = "1080")]
    height: usize,

    /// gaussian sigma, horizontal
    #[argh(option, default = "3.0")]
    sigma: f64,

    /// gaussian sigma, vertical; defaults to the horizontal sigma
    #[argh(option)]
    sigma_v: Option<f64>,
}

/// A diagonal gradient with a grid of bright impulses on top.
fn synthetic_plane(size: PlaneSize) -> Result<Plane<u8>, Box<dyn std::error::Error>> {
    let mut plane = Plane::from_size_val(size, 0u8)?;
    for r in 0..size.height {
        for (x, v) in plane.row_mut(r).iter_mut().enumerate() {
            *v = ((r + x) % 200) as u8;
        }
    }
    for r in (8..size.height).step_by(64) {
        for x in (8..size.width).step_by(64) {
            plane.row_mut(r)[x] = 255;
        }
    }
    Ok(plane)
}

fn mean(plane: &Plane<u8>) -> f64 {
    let mut sum = 0u64;
    for r in 0..plane.height() {
        sum += plane.row(r).iter().map(|&v| v as u64).sum::<u64>();
    }
    sum as f64 / (plane.width() * plane.height()) as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = PlaneSize {
        width: args.width,
        height: args.height,
    };
    let sigma = (args.sigma, args.sigma_v.unwrap_or(args.sigma));
    log::info!("blurring a {size} plane with sigma {sigma:?}");

    let src = synthetic_plane(size)?;
    let mut dst = Plane::from_size_val(size, 0u8)?;

    let start = Instant::now();
    recursive_gaussian_blur(&src, &mut dst, sigma)?;
    let elapsed = start.elapsed();

    log::info!(
        "done in {elapsed:?} ({:.1} Mpx/s)",
        size.width as f64 * size.height as f64 / elapsed.as_secs_f64() / 1e6
    );
    log::info!(
        "mean before: {:.3}, after: {:.3} (unit DC gain keeps them close)",
        mean(&src),
        mean(&dst)
    );

    Ok(())
}
