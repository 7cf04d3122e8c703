//! Renders a wireframe model to a PNG.
//!
//! Usage: `cargo run --example render_model -- [model.json] [config.json] [output.png]`
//!
//! Without a model file, a unit square is rendered. Without a config file, the
//! default camera is used (512x512, focal length 500, five units back).

use wireframe::*;

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let model = match args.next() {
        Some(path) => Model::load(path)?,
        None => Model::closed_loop(vec![
            DVec3::new(-0.5, -0.5, 0.0),
            DVec3::new(0.5, -0.5, 0.0),
            DVec3::new(0.5, 0.5, 0.0),
            DVec3::new(-0.5, 0.5, 0.0),
        ]),
    };
    let config = match args.next() {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    let output = args.next().unwrap_or_else(|| "wireframe.png".to_string());

    render_to_file(&output, &model, &config)?;
    println!(
        "Rendered {} edges to {output} ({}x{})",
        model.num_edges(),
        config.image_width,
        config.image_height
    );
    Ok(())
}
