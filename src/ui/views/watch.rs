use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use texwatch::application::ArtifactLayout;
use texwatch::LoopEvent;

pub fn render_watch_header(
    layout: &ArtifactLayout,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "texwatch");
    header.add("Source", layout.source().display().to_string());
    header.add("Output", layout.output_dir().display().to_string());
    header.add("Publishes", layout.published().display().to_string());
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_loop_event(
    timestamp: &str,
    event: &LoopEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        LoopEvent::WatchStarted { source, output_dir } => format!(
            "{} {} Watching: {} (output: {})\n",
            prefix,
            icon(Icon::Watch),
            source,
            output_dir
        ),
        LoopEvent::ManifestMissing { path } => format!(
            "{} {} No dependency manifest yet: {}\n",
            prefix,
            icon(Icon::Pending),
            path
        ),
        LoopEvent::DependenciesResolved { count } => format!(
            "{} {} Watching {} file{}\n",
            prefix,
            icon(Icon::Pending),
            count,
            if *count == 1 { "" } else { "s" }
        ),
        LoopEvent::FilesChanged { paths } => format!(
            "{} {} Changed: {}\n",
            prefix,
            icon(Icon::Arrow),
            paths.join(", ")
        ),
        LoopEvent::FilesTouched { paths } => format!(
            "{} {} Touched: {}\n",
            prefix,
            icon(Icon::Pending),
            paths.join(", ")
        ),
        LoopEvent::TimestampError { path, message } => format!(
            "{} {} Cannot stat {}: {}\n",
            prefix,
            icon(Icon::Warning),
            path,
            message
        ),
        LoopEvent::HashError { path, message } => format!(
            "{} {} Cannot read {}: {}\n",
            prefix,
            icon(Icon::Warning),
            path,
            message
        ),
        LoopEvent::ArtifactMissing { path } => format!(
            "{} {} PDF missing: {}\n",
            prefix,
            icon(Icon::Warning),
            path
        ),
        LoopEvent::BuildStarted => {
            format!("{} {} Building...\n", prefix, icon(Icon::Progress))
        }
        LoopEvent::BibliographyRan { target } => format!(
            "{} {} Bibliography: {}\n",
            prefix,
            icon(Icon::Pending),
            target
        ),
        LoopEvent::BibliographyFailed { target, message } => format!(
            "{} {} Bibliography failed for {}: {}\n",
            prefix,
            icon(Icon::Warning),
            target,
            message
        ),
        LoopEvent::BuildFinished { elapsed_ms } => format!(
            "{} {} Built in {} ms\n",
            prefix,
            icon(Icon::Success),
            elapsed_ms
        ),
        LoopEvent::BuildTimedOut {
            elapsed_ms,
            command,
        } => format!(
            "{} {} Timeout ({}s) running: {}\n",
            prefix,
            icon(Icon::Error),
            elapsed_ms / 1000,
            command
        ),
        LoopEvent::Published { published, .. } => format!(
            "{} {} Published: {}\n",
            prefix,
            icon(Icon::Success),
            published
        ),
        LoopEvent::PublishSkipped { artifact } => format!(
            "{} {} No PDF produced ({}); keeping previous copy\n",
            prefix,
            icon(Icon::Warning),
            artifact
        ),
        LoopEvent::LogPreserved { preserved, .. } => format!(
            "{} {} Log: {}\n",
            prefix,
            icon(Icon::Pending),
            preserved
        ),
        LoopEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            icon(Icon::Error),
            message
        ),
    }
}
