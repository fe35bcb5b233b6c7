use std::path::Path;

use anyhow::{Context, Result};

use texwatch::domain::ports::FileSystem;
use texwatch::{
    ArtifactLayout, Config, LocalFs, LoopDriver, LoopEvent, SystemProcessRunner, TexwatchError,
};

use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_loop_event, render_watch_header};

pub fn cmd_watch(source: &Path) -> Result<()> {
    let project_root = std::env::current_dir().context("failed to read current directory")?;
    let (config, warnings) = Config::load_layered(&project_root)?;
    let ui = UiContext::new(&config);

    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    if !source.is_file() {
        return Err(TexwatchError::SourceNotFound {
            path: source.to_path_buf(),
        }
        .into());
    }

    let layout = ArtifactLayout::from_config(source, &config)?;
    let fs = LocalFs::new();
    fs.create_dir_all(layout.output_dir()).with_context(|| {
        format!(
            "failed to create output directory {}",
            layout.output_dir().display()
        )
    })?;

    if !ui.json {
        print!("{}", render_watch_header(&layout, ui.color, ui.unicode));
    }

    let driver = LoopDriver::from_config(fs, SystemProcessRunner::new(), layout, &config)?;
    driver.run(|event| report(&ui, &event))
}

fn report(ui: &UiContext, event: &LoopEvent) {
    if ui.json {
        println!("{}", event.to_json());
        return;
    }

    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
    let rendered = render_loop_event(&timestamp, event, ui.color, ui.unicode);

    if event.is_error() {
        eprint!("{rendered}");
    } else {
        print!("{rendered}");
    }
}
