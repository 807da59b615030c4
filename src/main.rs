use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process;
use svg_coords::config::{DEFAULT_OUTPUT_DIR, DEFAULT_POINTS_PER_UNIT, DEFAULT_TOLERANCE};
use svg_coords::{ExtractOptions, SvgDocument, analyze, run};

/// Sample SVG path outlines into an ordered coordinate array
#[derive(Debug, Parser)]
#[command(name = "svg-coords", version, about)]
struct Cli {
    /// Input SVG file
    input: PathBuf,

    /// Directory the coordinate file is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Samples per unit of arc length
    #[arg(short = 'd', long, default_value_t = DEFAULT_POINTS_PER_UNIT)]
    points_per_unit: f64,

    /// Per-axis tolerance for dropping consecutive duplicate points
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Keep document order instead of sorting paths left to right
    #[arg(long)]
    no_sort: bool,

    /// Print a structural analysis of the SVG before extracting
    #[arg(long)]
    analyze: bool,

    /// Print the structural analysis and exit without writing anything
    #[arg(long, conflicts_with = "analyze")]
    analyze_only: bool,
}

impl Cli {
    fn options(&self) -> ExtractOptions {
        ExtractOptions {
            output_dir: self.output_dir.clone(),
            points_per_unit: self.points_per_unit,
            tolerance: self.tolerance,
            sort_paths: !self.no_sort,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = cli.options();

    if let Err(e) = options.validate() {
        log::error!("{}", e);
        process::exit(2);
    }

    if cli.analyze || cli.analyze_only {
        let report = SvgDocument::load(&cli.input).and_then(|doc| analyze(&doc, &options));
        match report {
            Ok(report) => println!("{}", report),
            Err(e) if cli.analyze_only => {
                log::error!("Analysis failed: {}", e);
                process::exit(2);
            }
            Err(e) => log::warn!("Analysis failed: {}, continuing with extraction", e),
        }
        if cli.analyze_only {
            return;
        }
    }

    if !run(&cli.input, &options) {
        log::error!(
            "Extraction failed. Try adjusting --points-per-unit (e.g. 3.0 for more detail, 0.5 for fewer points)"
        );
        process::exit(1);
    }
}
