//! This demo generates a four-lobed vase with a half-turn twist and a top
//! perimeter twice the base perimeter, then writes it as binary STL.

use std::{fs, path::Path};
use twistshell::{MeshResolution, ShapeParameters, generate};

const PATH: &str = "stl/twisted_vase";

fn main() {
    // Ensure the folder exists
    let _ = fs::create_dir_all(PATH);

    let params = ShapeParameters {
        c4_base: 0.45,
        c4_top: 0.25,
        twist_linear: std::f64::consts::PI,
        perimeter_ratio: 2.0,
        ..ShapeParameters::cylinder(20.0, 500.0, 0.6)
    };

    match generate(&params, &MeshResolution::default()) {
        Ok(stl) => {
            let file = Path::new(PATH).join("twisted_vase.stl");
            let _ = fs::write(&file, stl);
            println!("wrote {}", file.display());
        }
        Err(reason) => println!("generation rejected: {reason}"),
    }
}
