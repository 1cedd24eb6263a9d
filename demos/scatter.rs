//! Scatter surface demo
//!
//! This demo builds the classic paraboloid dish data set:
//! - Sampling z = f(x, y) over a centered grid
//! - Rotating the samples into a pleasant viewing pose
//! - Reading back the extent and depth shading a renderer would use

use pointplot_core::{DepthRange, Rotation};
use pointplot_shapes::{sphere_points, Paraboloid, SurfaceSweep};

fn main() -> pointplot_core::Result<()> {
    println!("pointplot Scatter Surface Demo");
    println!("==============================");

    // 1. Paraboloid dish, tilted like the classic scatter picture
    println!("\n1. Paraboloid Sweep");
    println!("-------------------");
    let rotation = Rotation::from_angles(
        (-20.0_f64).to_radians(),
        (-15.0_f64).to_radians(),
        (-20.0_f64).to_radians(),
    )?;
    let sweep = SurfaceSweep::centered(4.0, 0.1)?;
    let paraboloid = Paraboloid::default();
    let cloud = sweep.sample(|x, y| paraboloid.height(x, y), Some(&rotation));
    println!("Sampled {} points", cloud.len());

    if let Some(extent) = cloud.extent() {
        let center = extent.center();
        println!("Extent: {}", extent);
        println!("Center: ({:.3}, {:.3}, {:.3})", center.x, center.y, center.z);
    }

    // 2. Depth shading factors for the rotated points
    println!("\n2. Depth Shading");
    println!("----------------");
    let shading = DepthRange::default();
    if let Some((near, far)) = cloud.depth_bounds() {
        println!("Depth bounds: {:.3} to {:.3}", near, far);
        println!(
            "Shading factors: {:.3} (nearest) to {:.3} (farthest)",
            shading.normalized(near),
            shading.normalized(far)
        );
    }

    // 3. Sphere shell with the same radius and step
    println!("\n3. Sphere Shell");
    println!("---------------");
    let sphere = sphere_points(4.0, 0.1)?;
    println!("Sampled {} points", sphere.len());

    println!("\nDemo completed successfully!");
    Ok(())
}
