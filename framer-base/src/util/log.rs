/// Crates whose logging at [`log::Level::Debug`] and below is too voluminous to be useful
/// alongside ours. These are the crates a renderer consuming our quads is likely to use.
const NOISY_TARGET_PREFIXES: &[&str] = &["tracing::span", "wgpu", "naga::", "winit::", "glow"];

/// Provides the recommended log filter for programs which want to exclude particularly noisy
/// details of the rendering libraries which `framer` output is typically fed to.
///
/// Messages from those libraries are dropped at [`log::Level::Debug`] and lower
/// importance; their warnings and errors are kept. Messages from all other targets,
/// including `framer` itself, are kept at every level.
#[allow(clippy::missing_inline_in_public_items)]
pub fn standard_filter(metadata: &log::Metadata<'_>) -> bool {
    if metadata.level() <= log::Level::Info {
        return true;
    }
    let target = metadata.target();
    !NOISY_TARGET_PREFIXES
        .iter()
        .any(|prefix| target.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn metadata(level: Level, target: &str) -> log::Metadata<'_> {
        log::Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn noisy_targets_filtered_below_info() {
        assert!(!standard_filter(&metadata(Level::Trace, "tracing::span::active")));
        assert!(!standard_filter(&metadata(Level::Debug, "wgpu_core::device")));
        assert!(!standard_filter(&metadata(Level::Debug, "glow")));
    }

    #[test]
    fn noisy_targets_kept_at_info_and_above() {
        assert!(standard_filter(&metadata(Level::Info, "wgpu_core::device")));
        assert!(standard_filter(&metadata(Level::Warn, "naga::front")));
        assert!(standard_filter(&metadata(Level::Error, "winit::platform")));
    }

    #[test]
    fn other_targets_kept() {
        assert!(standard_filter(&metadata(Level::Trace, "framer::framer")));
        assert!(standard_filter(&metadata(Level::Debug, "some_random_crate")));
    }
}
