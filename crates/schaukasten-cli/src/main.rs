use std::io::Read;
use std::str::FromStr;

use schaukasten::sim::svg::SvgFrameOptions;
use schaukasten::{Facet, FilterState, Scene, SceneOptions, load_incidents};
use serde_json::json;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Dataset(schaukasten::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Dataset(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<schaukasten::Error> for CliError {
    fn from(value: schaukasten::Error) -> Self {
        Self::Dataset(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Svg,
    Json,
    Facets,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            "facets" => Ok(Self::Facets),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    format: OutputFormat,
    mode: String,
    ticks: u64,
    window: usize,
    seed: u64,
    district: String,
    keyword: String,
    gender: String,
    time_cluster: String,
    text: String,
    only_latest: bool,
    background: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "schaukasten-cli\n\
\n\
USAGE:\n\
  schaukasten-cli [--format svg|json|facets] [--mode <name>] [--ticks <n>] [--window <n>]\n\
                  [--seed <n>] [--district <d>] [--keyword <k>] [--gender <g>]\n\
                  [--time-cluster <t>] [--text <q>] [--only-latest]\n\
                  [--background <css-color>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the incident JSON is read from stdin.\n\
  - svg prints the grown frame to stdout by default; use --out to write a file.\n\
  - json prints the placed glyphs with world coordinates.\n\
  - facets prints the selectable option values per facet under the given filters.\n\
  - --ticks bounds the simulation; it stops earlier once every strand settles.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        mode: "fungal".to_string(),
        ticks: 10_000,
        window: schaukasten::DEFAULT_WINDOW_SIZE,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--mode" => {
                let Some(mode) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.mode = mode.clone();
            }
            "--ticks" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.ticks = n.parse::<u64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--window" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.window = n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--seed" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = n.parse::<u64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--district" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.district = v.clone();
            }
            "--keyword" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.keyword = v.clone();
            }
            "--gender" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.gender = v.clone();
            }
            "--time-cluster" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.time_cluster = v.clone();
            }
            "--text" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.text = v.clone();
            }
            "--only-latest" => args.only_latest = true,
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let raw = read_input(args.input.as_deref())?;
    let incidents = load_incidents(&raw)?;

    let mut scene = Scene::new(
        incidents,
        SceneOptions {
            window_size: args.window,
            mode: args.mode.clone(),
            session_seed: args.seed,
            ..SceneOptions::default()
        },
    );
    scene.set_filter(FilterState {
        district: args.district.clone(),
        keyword: args.keyword.clone(),
        gender: args.gender.clone(),
        time_cluster: args.time_cluster.clone(),
        text: args.text.clone(),
        show_only_latest: args.only_latest,
    });
    scene.run(args.ticks);

    match args.format {
        OutputFormat::Svg => {
            let svg = scene.frame_svg(&SvgFrameOptions {
                background: args.background.clone(),
                ..SvgFrameOptions::default()
            });
            write_text(&svg, args.out.as_deref())
        }
        OutputFormat::Json => {
            let nodes: Vec<serde_json::Value> = scene
                .engine()
                .nodes()
                .iter()
                .map(|node| {
                    json!({
                        "glyph": node.glyph.to_string(),
                        "x": node.position.x,
                        "y": node.position.y,
                        "tick": node.tick,
                        "incident": node.incident,
                    })
                })
                .collect();
            let doc = json!({
                "tick": scene.engine().tick(),
                "visible": scene.visible_incidents().len(),
                "nodes": nodes,
            });
            write_text(&serde_json::to_string_pretty(&doc)?, args.out.as_deref())
        }
        OutputFormat::Facets => {
            let doc = json!({
                "district": scene.facet_options(Facet::District),
                "keyword": scene.facet_options(Facet::Keyword),
                "gender": scene.facet_options(Facet::Gender),
                "timeCluster": scene.facet_options(Facet::TimeCluster),
            });
            write_text(&serde_json::to_string_pretty(&doc)?, args.out.as_deref())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
