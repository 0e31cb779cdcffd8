use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use ccl::ccl_driver::{CCLDriver, generate_sizes};
use ccl::config::{CCLConfig, SizeSource};
use ccl::io;
use ccl::io::cli::Cli;
use ccl::io::cloud_to_svg::cloud_to_svg;
use ccl::io::output::CCLOutput;
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: CCLConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CCLConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed CCLConfig: {config:?}");

    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let (sizes, stem) = match &args.sizes_file {
        Some(sizes_file) => {
            let stem = sizes_file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("sizes")
                .to_string();
            (io::read_sizes(sizes_file)?, stem)
        }
        None => {
            let stem = match config.size_source {
                SizeSource::Fixture => "fixture".to_string(),
                SizeSource::Random { n_sizes, .. } => format!("random_{n_sizes}"),
            };
            (generate_sizes(&config.size_source, &mut rng)?, stem)
        }
    };

    info!("[MAIN] laying out {} tags ({stem})", sizes.len());

    fs::create_dir_all(&args.solution_folder).with_context(|| {
        format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        )
    })?;

    let mut driver = CCLDriver::new(config)?;
    let (cloud, stats) = driver.run(&sizes)?;

    {
        let svg_path = args.solution_folder.join(format!("cloud_{stem}.svg"));
        let svg = cloud_to_svg(&cloud, config.svg_draw_options, &mut rng, &stem);
        io::write_svg(&svg, &svg_path)?;
    }

    {
        let output = CCLOutput {
            config,
            cloud,
            stats,
        };
        let json_path = args.solution_folder.join(format!("cloud_{stem}.json"));
        io::write_json(&output, &json_path)?;
    }

    Ok(())
}
