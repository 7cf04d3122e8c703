//! Renders a cube from a ring of camera positions, one thread per frame.
//!
//! Frames are written to `turntable/frame_NN.png`.

use std::path::Path;

use wireframe::*;

const FRAMES: i32 = 36;

fn cube() -> Model {
    let mut vertices = Vec::new();
    for &z in &[-0.5, 0.5] {
        for &(x, y) in &[(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            vertices.push(DVec3::new(x, y, z));
        }
    }
    let mut edges = Vec::new();
    for i in 0..4 {
        edges.push(Edge::new(i, (i + 1) % 4));
        edges.push(Edge::new(4 + i, 4 + (i + 1) % 4));
        edges.push(Edge::new(i, 4 + i));
    }
    Model::new(vertices, edges).expect("cube edges are in range")
}

fn main() -> Result<()> {
    init_logging();

    let model = cube();
    let out_dir = Path::new("turntable");
    std::fs::create_dir_all(out_dir)?;

    // Orbit: turn one step, then back away so the cube stays centered.
    let configs: Vec<RenderConfig> = (0..FRAMES)
        .map(|i| {
            let mut config = RenderConfig::default();
            config.camera.translation = DVec3::ZERO;
            config.camera.turn(i, -2);
            config.camera.move_local(LocalDirection::Backward, 20);
            config
        })
        .collect();

    let model = &model;
    std::thread::scope(|s| -> Result<()> {
        let handles: Vec<_> = configs
            .iter()
            .enumerate()
            .map(|(i, config)| {
                s.spawn(move || {
                    render_to_file(out_dir.join(format!("frame_{i:02}.png")), model, config)
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("render thread panicked")?;
        }
        Ok(())
    })?;

    println!("Wrote {FRAMES} frames to {}", out_dir.display());
    Ok(())
}
