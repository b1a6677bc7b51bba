use linked_views::core::SelectionRegion;
use linked_views::data::LoadOptions;
use linked_views::render::{SurfaceKind, SvgRenderer};
use linked_views::telemetry::init_default_tracing;
use linked_views::{LinkedViews, LinkedViewsConfig};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: linked_views_render --input <csv> --out-dir <dir> [--config <json>] [--brush x0,y0,x1,y1] [--canvas-coords] [--delimiter <char>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    out_dir: PathBuf,
    config: Option<PathBuf>,
    brush: Option<SelectionRegion>,
    canvas_coords: bool,
    delimiter: u8,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            LinkedViewsConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => LinkedViewsConfig::default(),
    };

    let options = LoadOptions::default().with_delimiter(args.delimiter);
    let mut views = LinkedViews::from_path(SvgRenderer::new(), config, &args.input, options)
        .map_err(|err| format!("`{}`: {err}", args.input.display()))?;

    if let Some(region) = args.brush {
        if args.canvas_coords {
            views.brush_start_canvas(Some(region));
            views.brush_move_canvas(Some(region));
            views.brush_end_canvas(Some(region));
        } else {
            views.brush_start(Some(region));
            views.brush_move(Some(region));
            views.brush_end(Some(region));
        }
    }

    views.render_all().map_err(|err| err.to_string())?;
    let snapshot = views
        .snapshot_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;

    fs::create_dir_all(&args.out_dir)
        .map_err(|err| format!("failed to create `{}`: {err}", args.out_dir.display()))?;
    let renderer = views.into_renderer();
    for (surface, file_name) in [
        (SurfaceKind::Scatter, "scatter.svg"),
        (SurfaceKind::Bar, "bars.svg"),
    ] {
        let document = renderer
            .document(surface)
            .ok_or_else(|| format!("renderer produced no {surface:?} document"))?;
        write_file(&args.out_dir.join(file_name), document)?;
    }
    write_file(&args.out_dir.join("snapshot.json"), &snapshot)
}

fn write_file(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<PathBuf>;
    let mut out_dir = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut brush = None::<SelectionRegion>;
    let mut canvas_coords = false;
    let mut delimiter = b',';

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--out-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out-dir".to_owned())?;
                out_dir = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--brush" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --brush".to_owned())?;
                brush = Some(parse_region(&value)?);
            }
            "--canvas-coords" => canvas_coords = true,
            "--delimiter" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --delimiter".to_owned())?;
                delimiter = match value.as_bytes() {
                    [byte] => *byte,
                    _ => return Err(format!("delimiter must be one byte, got `{value}`")),
                };
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        out_dir: out_dir.ok_or_else(|| USAGE.to_owned())?,
        config,
        brush,
        canvas_coords,
        delimiter,
    })
}

fn parse_region(value: &str) -> Result<SelectionRegion, String> {
    let coords = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|err| format!("invalid brush coordinate `{part}`: {err}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    match coords.as_slice() {
        [x0, y0, x1, y1] => Ok(SelectionRegion::from_corners(*x0, *y0, *x1, *y1)),
        _ => Err(format!(
            "--brush expects four comma-separated numbers, got `{value}`"
        )),
    }
}
