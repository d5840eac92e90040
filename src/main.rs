//! scrollkit - Entry Point

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use scrollkit::config::ResolvedConfig;
use scrollkit::inspect::{self, parse_rect, Measurement, OutputFormat, ScrollQuery, WindowQuery};
use scrollkit::model::{AppError, Rect};
use scrollkit::virtual_list::{ScrollAlign, Viewport};

/// scrollkit - inspect virtual list windows and anchor geometry
#[derive(Parser, Debug)]
#[command(name = "scrollkit")]
#[command(version)]
#[command(about = "Inspect virtual list windows and overlay anchor geometry")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Inspection commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the render window for a scroll position
    Window {
        /// Number of items
        #[arg(long)]
        items: usize,

        /// Size of unmeasured items (defaults to config)
        #[arg(long)]
        item_size: Option<f64>,

        /// Visible extent of the container
        #[arg(long)]
        extent: f64,

        /// Scroll offset
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        scroll: f64,

        /// Extra items rendered on each side (defaults to config)
        #[arg(long)]
        overscan: Option<usize>,

        /// Measured size for one item, as INDEX=SIZE (repeatable)
        #[arg(long = "measure", value_name = "INDEX=SIZE")]
        measurements: Vec<Measurement>,
    },

    /// Compute the scroll offset that brings an item into view
    ScrollTo {
        /// Number of items
        #[arg(long)]
        items: usize,

        /// Size of every item (defaults to config)
        #[arg(long)]
        item_size: Option<f64>,

        /// Target item index
        #[arg(long)]
        index: usize,

        /// Where the item lands in the viewport
        #[arg(long, value_enum, default_value_t = AlignArg::Start)]
        align: AlignArg,

        /// Container extent; enables alignment and clamping
        #[arg(long)]
        extent: Option<f64>,
    },

    /// Parse an anchor descriptor and list its flips
    Anchor {
        /// Descriptor such as "top start"
        descriptor: String,

        /// Resolve start/end right-to-left
        #[arg(long)]
        rtl: bool,

        /// Resolve start/end left-to-right, overriding config and environment
        #[arg(long, conflicts_with = "rtl")]
        ltr: bool,
    },

    /// Measure how far a floating rectangle escapes its boundary
    Overflow {
        /// Floating rectangle as X,Y,W,H
        #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
        floating: Rect,

        /// Boundary rectangle as X,Y,W,H
        #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
        boundary: Rect,
    },
}

/// Alignment choices for `scroll-to`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignArg {
    /// Item start at viewport start
    Start,
    /// Item end at viewport end
    End,
    /// Item centered
    Center,
}

impl From<AlignArg> for ScrollAlign {
    fn from(align: AlignArg) -> Self {
        match align {
            AlignArg::Start => ScrollAlign::Start,
            AlignArg::End => ScrollAlign::End,
            AlignArg::Center => ScrollAlign::Center,
        }
    }
}

impl Command {
    /// CLI values that override the resolved config: item size, overscan, rtl.
    fn overrides(&self) -> (Option<f64>, Option<usize>, Option<bool>) {
        match self {
            Self::Window {
                item_size,
                overscan,
                ..
            } => (*item_size, *overscan, None),
            Self::ScrollTo { item_size, .. } => (*item_size, None, None),
            Self::Anchor { rtl, ltr, .. } => {
                let direction = match (*rtl, *ltr) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                };
                (None, None, direction)
            }
            Self::Overflow { .. } => (None, None, None),
        }
    }
}

fn run(command: Command, config: &ResolvedConfig, format: OutputFormat) -> Result<String, AppError> {
    match command {
        Command::Window {
            items,
            extent,
            scroll,
            measurements,
            ..
        } => inspect::window(
            &WindowQuery {
                items,
                item_size: config.default_item_size,
                viewport: Viewport::new(scroll, extent),
                overscan: config.overscan,
                measurements,
            },
            format,
        ),
        Command::ScrollTo {
            items,
            index,
            align,
            extent,
            ..
        } => inspect::scroll_to(
            &ScrollQuery {
                items,
                item_size: config.default_item_size,
                index,
                align: align.into(),
                extent,
            },
            format,
        ),
        Command::Anchor { descriptor, .. } => inspect::anchor(&descriptor, config.rtl, format),
        Command::Overflow { floating, boundary } => inspect::overflow(floating, boundary, format),
    }
}

/// Resolve config, start logging, run the command and print its report.
fn run_app(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = scrollkit::config::load_config_with_precedence(args.config.clone())?;
        let merged = scrollkit::config::merge_config(config_file);
        let with_env = scrollkit::config::apply_env_overrides(merged);

        let (item_size, overscan, rtl) = args.command.overrides();
        scrollkit::config::apply_cli_overrides(with_env, item_size, overscan, rtl)
    };

    scrollkit::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        command = ?args.command,
        "Configuration loaded and resolved"
    );

    let output = run(args.command, &config, OutputFormat::from_json_flag(args.json))?;
    writeln!(std::io::stdout().lock(), "{output}")?;

    Ok(())
}

fn main() -> Result<(), AppError> {
    run_app(Args::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["scrollkit", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["scrollkit", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_is_required() {
        let result = Args::try_parse_from(["scrollkit"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_window_args() {
        let args = Args::parse_from([
            "scrollkit",
            "window",
            "--items",
            "100",
            "--extent",
            "400",
            "--scroll",
            "-20",
            "--measure",
            "3=80",
            "--measure",
            "4=10.5",
        ]);
        match args.command {
            Command::Window {
                items,
                item_size,
                extent,
                scroll,
                overscan,
                measurements,
            } => {
                assert_eq!(items, 100);
                assert_eq!(item_size, None);
                assert_eq!(extent, 400.0);
                assert_eq!(scroll, -20.0);
                assert_eq!(overscan, None);
                assert_eq!(
                    measurements,
                    vec![
                        Measurement { index: 3, size: 80.0 },
                        Measurement { index: 4, size: 10.5 },
                    ]
                );
            }
            other => panic!("expected window command, got {other:?}"),
        }
    }

    #[test]
    fn test_window_rejects_bad_measurement() {
        let result = Args::try_parse_from([
            "scrollkit", "window", "--items", "1", "--extent", "1", "--measure", "oops",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_scroll_to_align_values() {
        let args = Args::parse_from([
            "scrollkit", "scroll-to", "--items", "10", "--index", "3", "--align", "center",
        ]);
        match args.command {
            Command::ScrollTo { align, extent, .. } => {
                assert_eq!(align, AlignArg::Center);
                assert_eq!(extent, None);
                assert_eq!(ScrollAlign::from(align), ScrollAlign::Center);
            }
            other => panic!("expected scroll-to command, got {other:?}"),
        }

        let result = Args::try_parse_from([
            "scrollkit", "scroll-to", "--items", "10", "--index", "3", "--align", "middle",
        ]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::InvalidValue
        );
    }

    #[test]
    fn test_anchor_args_and_global_flags() {
        let args = Args::parse_from(["scrollkit", "anchor", "top start", "--rtl", "--json"]);
        assert!(args.json);
        match &args.command {
            Command::Anchor { descriptor, rtl, ltr } => {
                assert_eq!(descriptor, "top start");
                assert!(*rtl);
                assert!(!*ltr);
            }
            other => panic!("expected anchor command, got {other:?}"),
        }
        assert_eq!(args.command.overrides(), (None, None, Some(true)));
    }

    #[test]
    fn test_ltr_flag_forces_left_to_right() {
        let args = Args::parse_from(["scrollkit", "anchor", "start", "--ltr"]);
        assert_eq!(args.command.overrides(), (None, None, Some(false)));

        let args = Args::parse_from(["scrollkit", "anchor", "start"]);
        assert_eq!(args.command.overrides(), (None, None, None));

        let result = Args::try_parse_from(["scrollkit", "anchor", "start", "--rtl", "--ltr"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn test_config_failure_surfaces_as_app_error() {
        let dir = std::env::temp_dir().join("scrollkit_main_bad_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "overscan = \"many\"\n").unwrap();

        let args = Args::parse_from([
            "scrollkit",
            "--config",
            path.to_str().unwrap(),
            "anchor",
            "top",
        ]);
        let err = run_app(args).unwrap_err();
        assert!(
            matches!(
                err,
                AppError::Config(scrollkit::config::ConfigError::ParseError { .. })
            ),
            "got {err:?}"
        );
        assert!(err.to_string().starts_with("Configuration error"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_overflow_parses_rects() {
        let args = Args::parse_from([
            "scrollkit",
            "overflow",
            "--floating",
            "-10,90,20,20",
            "--boundary",
            "0,0,100,100",
        ]);
        match args.command {
            Command::Overflow { floating, boundary } => {
                assert_eq!(floating, Rect::new(-10.0, 90.0, 20.0, 20.0));
                assert_eq!(boundary, Rect::new(0.0, 0.0, 100.0, 100.0));
            }
            other => panic!("expected overflow command, got {other:?}"),
        }
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from([
            "scrollkit",
            "--config",
            "/custom/config.toml",
            "anchor",
            "top",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_overrides_flow_through_precedence_chain() {
        use scrollkit::config::{apply_cli_overrides, apply_env_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            default_item_size: Some(30.0),
            overscan: Some(2),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.default_item_size, 30.0);

        let with_env = apply_env_overrides(merged);

        let args = Args::parse_from([
            "scrollkit", "window", "--items", "5", "--extent", "10", "--item-size", "12",
        ]);
        let (item_size, overscan, rtl) = args.command.overrides();
        let with_cli = apply_cli_overrides(with_env, item_size, overscan, rtl);
        assert_eq!(with_cli.default_item_size, 12.0, "CLI item size wins");
        assert_eq!(with_cli.overscan, 2, "Unset CLI flag keeps config value");
    }
}
