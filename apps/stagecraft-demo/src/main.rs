use anyhow::Result;
use log::info;
use stagecraft_core::{Node, Stage, StageOptions};
use stagecraft_demo::showcase::build_showcase;
use stagecraft_ui_graphics::RecordingDrawScope;
use stagecraft_ui_layout::Layout;

fn render(stage: &Stage) {
    let mut scope = RecordingDrawScope::new();
    stage.draw(&mut scope);
    info!(
        "drew {} primitives at {}x{}",
        scope.primitives().len(),
        stage.viewport_size().width,
        stage.viewport_size().height
    );
    println!("{}", stage.dump_tree());
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Stagecraft Layout Demo ===");
    println!("Set RUST_LOG=trace to follow every validate and invalidate step.");
    println!();

    let stage = Stage::new(StageOptions::default());
    let showcase = build_showcase(4)?;
    stage.add_actor(showcase.screen.clone())?;
    render(&stage);

    stage.set_viewport_size(1280.0, 720.0);
    render(&stage);

    showcase.header_swatch.resize(&showcase.header, 0.0, 96.0);
    info!(
        "header resized, screen needs layout: {}",
        showcase.screen.needs_layout()
    );
    render(&stage);

    showcase.tiles.pack();
    info!(
        "packed tile row to {}x{}",
        showcase.tiles.width(),
        showcase.tiles.height()
    );

    Ok(())
}
