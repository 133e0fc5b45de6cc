#![cfg(feature = "stl-io")]

//! Generations are pure and share no mutable state; concurrent requests
//! must never influence each other's artifacts.

use std::thread;
use twistshell::{MeshResolution, ShapeParameters, generate};

fn lobed(c4: f64, mass: f64) -> ShapeParameters {
    ShapeParameters {
        c4_base: c4,
        twist_linear: 1.2,
        ..ShapeParameters::cylinder(12.0, mass, 0.4)
    }
}

#[test]
fn concurrent_generations_are_independent() {
    let first = lobed(0.2, 250.0);
    let second = lobed(0.1, 400.0);
    let resolution = MeshResolution::default();

    // Serial reference artifacts.
    let expected_first = generate(&first, &resolution).unwrap();
    let expected_second = generate(&second, &resolution).unwrap();

    let handle_first = thread::spawn(move || generate(&first, &resolution).unwrap());
    let handle_second = thread::spawn(move || generate(&second, &resolution).unwrap());

    let got_first = handle_first.join().unwrap();
    let got_second = handle_second.join().unwrap();

    assert_eq!(got_first, expected_first);
    assert_eq!(got_second, expected_second);
    assert_ne!(got_first, got_second);
}

#[test]
fn many_interleaved_requests_all_come_back_intact() {
    let resolution = MeshResolution::coarse();
    let masses = [150.0, 200.0, 250.0, 300.0];

    let handles: Vec<_> = masses
        .iter()
        .map(|&mass| thread::spawn(move || generate(&lobed(0.15, mass), &resolution).unwrap()))
        .collect();

    let results: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (mass, bytes) in masses.iter().zip(&results) {
        let expected = generate(&lobed(0.15, *mass), &resolution).unwrap();
        assert_eq!(bytes, &expected, "artifact for mass {mass} was corrupted");
    }
}
