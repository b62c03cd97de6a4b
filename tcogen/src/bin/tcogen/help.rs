//! Text appended to `tcogen --help`.

use crate::theme::{self, paint};

struct ExampleGroup {
    title: &'static str,
    /// Command line and what it does.
    commands: &'static [(&'static str, &'static str)],
}

const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Generate",
        commands: &[
            ("tcogen", "Walk the current directory"),
            ("tcogen src/components", "Walk a specific directory"),
        ],
    },
    ExampleGroup {
        title: "Reporting",
        commands: &[
            ("tcogen --output json", "Print the run report as JSON"),
            ("tcogen -q", "Only print errors"),
            ("RUST_LOG=tcogen_build=debug tcogen", "Log every scanned file"),
        ],
    },
];

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("RUST_LOG", "Log filter, e.g. tcogen_build=debug (overrides -v)"),
    ("NO_COLOR", "Disable colored output when set"),
];

const CONFIG_TIP: &str = "Put exclude_dirs and follow_links under [generate] in <ROOT>/tcogen.toml.";

/// Examples, environment variables, and the config file tip.
pub fn appendix(color: bool) -> String {
    let width = EXAMPLES
        .iter()
        .flat_map(|group| group.commands)
        .map(|(command, _)| command.len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![paint("Examples:", theme::HEADING, true, color)];
    for group in EXAMPLES {
        lines.push(format!("  {}", paint(group.title, theme::HEADING, false, color)));
        for (command, about) in group.commands {
            let padded = format!("{command:<width$}");
            lines.push(format!("    {}  # {about}", paint(&padded, theme::COMMAND, false, color)));
        }
    }

    lines.push(String::new());
    lines.push(paint("Environment Variables:", theme::HEADING, true, color));
    for (key, about) in ENVIRONMENT_VARIABLES {
        lines.push(format!("  {}  {about}", paint(key, theme::ENV_KEY, true, color)));
    }

    lines.push(String::new());
    lines.push(format!("{} {CONFIG_TIP}", paint("Tip:", theme::HEADING, true, color)));
    lines.join("\n")
}
