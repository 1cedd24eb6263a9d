//! Shape factory demo
//!
//! This demo generates glyph point sets from the cone and arrow factories
//! and shows how a rotation reorients them.

use pointplot_core::Rotation;
use pointplot_shapes::{ArrowFactory, ConeFactory};
use std::f64::consts::FRAC_PI_2;

fn main() -> anyhow::Result<()> {
    println!("pointplot Shape Factory Demo");
    println!("============================");

    // 1. Cone with the stock settings
    println!("\n1. Cone");
    println!("-------");
    let cone = ConeFactory::default();
    println!(
        "Settings: height {}, radius {}, resolution {}",
        cone.height(),
        cone.radius(),
        cone.resolution()
    );
    println!("Generated {} points", cone.make_points().len());

    // 2. A taller, coarser cone
    let mut tall = ConeFactory::default();
    tall.set_height(5.0)?;
    tall.set_resolution(8)?;
    println!("Tall coarse cone: {} points", tall.make_points().len());

    // 3. Arrow, then swung from +X to +Y
    println!("\n2. Arrow");
    println!("--------");
    let arrow = ArrowFactory::default();
    let points = arrow.make_points();
    println!("Generated {} points along the unit X interval", points.len());

    let swing = Rotation::from_angles(0.0, 0.0, FRAC_PI_2)?;
    let tip = swing.rotate(&points[points.len() - 1]);
    println!(
        "Tip after a quarter turn about Z: ({:.3}, {:.3}, {:.3})",
        tip.x, tip.y, tip.z
    );

    println!("\nDemo completed successfully!");
    Ok(())
}
