use profile_charts::api::{
    AUDIT_RATIO_SURFACE_KEY, DashboardConfig, DashboardSurfaces, PROJECT_TIMELINE_SURFACE_KEY,
    ProfileDashboard, XP_GROWTH_SURFACE_KEY,
};
use profile_charts::core::{ProfileData, Viewport};
use profile_charts::render::SvgSurface;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_WIDTH_PX: u32 = 600;

#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    config_path: Option<PathBuf>,
    output_dir: PathBuf,
    width_px: u32,
}

fn main() {
    let _ = profile_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.input_path).map_err(|err| {
        format!(
            "failed to read profile response `{}`: {err}",
            args.input_path.display()
        )
    })?;
    let profile = ProfileData::from_response_json(&raw).map_err(|err| err.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            DashboardConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => DashboardConfig::default(),
    };

    // Fixed-height charts keep their surface size; the timeline grows to fit.
    let sized = |key: &str, height: u32| SvgSurface::new(key, Viewport::new(args.width_px, height));
    let mut surfaces = DashboardSurfaces::new(
        sized(XP_GROWTH_SURFACE_KEY, config.growth.fallback_size.height),
        sized(AUDIT_RATIO_SURFACE_KEY, config.audit.fallback_size.height),
        sized(PROJECT_TIMELINE_SURFACE_KEY, config.placeholder_fallback.height),
    );
    let mut dashboard = ProfileDashboard::new(config).map_err(|err| err.to_string())?;
    dashboard
        .load_profile(profile, &mut surfaces)
        .map_err(|err| err.to_string())?;

    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;
    for (file_name, surface) in [
        ("xp-growth.svg", &surfaces.xp_growth),
        ("audit-ratio.svg", &surfaces.audit_ratio),
        ("project-timeline.svg", &surfaces.project_timeline),
    ] {
        write_svg(&args.output_dir.join(file_name), surface)?;
    }

    if let Some(summary) = dashboard.summary() {
        for (key, value) in &summary.fields {
            println!("{key}: {value}");
        }
        println!("completed projects: {}", summary.completed_projects);
        println!(
            "success rate: {}% ({:?})",
            summary.pass_rate_percent, summary.success_tier
        );
        println!("audit ratio: {}", summary.audit_ratio);
    }
    if let Some(skills) = dashboard.skills_table() {
        println!();
        print!("{}", skills.to_text());
        if skills.is_empty() {
            println!();
        }
    }
    Ok(())
}

fn write_svg(path: &Path, surface: &SvgSurface) -> Result<(), String> {
    fs::write(path, surface.to_svg_document())
        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut width_px = DEFAULT_WIDTH_PX;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                width_px = value
                    .parse::<u32>()
                    .ok()
                    .filter(|width| *width > 0)
                    .ok_or_else(|| format!("invalid --width `{value}`: expected a positive integer"))?;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let input_path =
        input_path.ok_or_else(|| format!("missing --input\n\n{}", usage_message()))?;
    Ok(CliArgs {
        input_path,
        config_path,
        output_dir,
        width_px,
    })
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_profile_svg -- --input <response.json> [options]\n\nOptions:\n  --input <path>         Saved GraphQL profile response (required)\n  --config <path>        Dashboard config JSON; omitted fields keep defaults\n  --output-dir <path>    Directory for the SVG files (default: {DEFAULT_OUTPUT_DIR})\n  --width <px>           Surface width for every chart (default: {DEFAULT_WIDTH_PX})\n  -h, --help             Show this message"
    )
}
