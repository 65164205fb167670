//! Decomposes a 3x3 matrix into rotation and stretch.
//!
//! Usage: `decompose [m00 m01 m02 m10 m11 m12 m20 m21 m22]` (row-major). Without arguments, a
//! rotated and non-uniformly scaled matrix is used. Run with `RUST_LOG=trace` to see the polar
//! decomposition iterate.

use anyhow::bail;
use deform_linalg::{
    euler_xyz, get_euler, get_rq, rotate, rotation, vec3, EulerOrder, Mat3, PolarOptions,
};
use log::LevelFilter;

fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Info)
        .filter(Some("deform_linalg"), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

fn parse_matrix() -> anyhow::Result<Mat3<f64>> {
    let args = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    match *args.as_slice() {
        [] => Ok(rotate(euler_xyz(vec3(0.3, -0.8, 1.2))) * Mat3::from_diagonal([1.0, 2.0, 0.5])),
        [m00, m01, m02, m10, m11, m12, m20, m21, m22] => Ok(Mat3::from_rows([
            [m00, m01, m02],
            [m10, m11, m12],
            [m20, m21, m22],
        ])),
        _ => bail!("expected 0 or 9 matrix elements, got {}", args.len()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let a = parse_matrix()?;
    log::info!("input: {a:?} (det {})", a.determinant());

    let polar = PolarOptions::default()
        .decompose(a)?
        .into_converged()?;
    log::info!(
        "polar decomposition took {} iterations, determinant sign {}",
        polar.iterations(),
        polar.determinant().signum(),
    );
    log::info!("Q = {:?}", polar.rotation());
    log::info!("S = {:?}", polar.stretch());

    if polar.determinant() > 0.0 {
        let q = rotation(polar.rotation());
        log::info!("rotation: {q:?}, rotation vector {:?}", get_rq(q));
        for order in EulerOrder::ALL {
            log::info!("euler {order:?}: {:?}", get_euler(order, q));
        }
    } else {
        log::info!("Q contains a reflection, skipping rotation parameterizations");
    }

    let qr = a.qr_decomposition();
    log::info!("QR: Q = {:?}, R = {:?}", qr.q(), qr.r());

    Ok(())
}
