//! This demo generates the degenerate baseline: a right circular
//! cylindrical shell, all harmonics and twist zeroed.

use std::{fs, path::Path};
use twistshell::{MeshResolution, Shape, ShapeParameters};

const PATH: &str = "stl/cylinder_shell";

fn main() {
    // Ensure the folder exists
    let _ = fs::create_dir_all(PATH);

    let params = ShapeParameters::cylinder(10.0, 150.0, 0.5);

    match Shape::<()>::generate(&params, &MeshResolution::fine(), None) {
        Ok(shape) => {
            println!(
                "outer radius {:.4}, enclosed volume {:.4}",
                shape.scale,
                shape.mesh.volume()
            );
            let file = Path::new(PATH).join("cylinder_shell.stl");
            let _ = fs::write(&file, shape.mesh.to_stl_binary().unwrap());
            println!("wrote {}", file.display());
        }
        Err(reason) => println!("generation rejected: {reason}"),
    }
}
