// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::{debug, info};
use ttp::{DecodeConfig, PlayerSaveFile};

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    options: DecodeOptions,
    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs)]
struct DecodeOptions {
    /// Accept any nonzero byte as a true boolean
    #[arg(long, global = true)]
    lenient_bools: bool,
    /// Refuse files larger than this many bytes
    #[arg(long, global = true, default_value_t = DecodeConfig::DEFAULT_MAX_FILE_SIZE)]
    max_size: u64,
    /// Fail if bytes remain after the decoded records
    #[arg(long, global = true)]
    deny_trailing: bool,
}

impl DecodeOptions {
    fn config(&self) -> DecodeConfig {
        let mut config = DecodeConfig::new();
        config
            .strict_bools(!self.lenient_bools)
            .max_file_size(self.max_size)
            .allow_trailing_bytes(!self.deny_trailing);
        config
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the contents of a save file
    Show { file: PathBuf },
    /// Check that save files decode
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.options.config();

    match args.command {
        Command::Show { file } => {
            let save = decode(&file, &config)
                .with_context(|| format!("Failed to decode save file '{}'", file.display()))?;
            let entity = save.entity();

            println!("{}", entity.entity_id());
            println!("{}", entity.position());
            println!("{}", entity.on_ground());
            println!();
            println!("file version:   {}", save.version());
            println!("record version: {}", entity.version());
            println!("class id:       {}", entity.class_id());
            println!("lifetime:       {}", entity.lifetime());
            println!("rotation:       {}", entity.rotation());
        }
        Command::Check { files } => {
            let mut failed = false;
            for file in files {
                match decode(&file, &config) {
                    Ok(_) => println!("{}: OK", file.display()),
                    Err(e) => {
                        println!("{}: {e:#}", file.display());
                        failed = true;
                    }
                }
            }

            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn decode(file: &Path, config: &DecodeConfig) -> anyhow::Result<PlayerSaveFile> {
    info!("decoding {}", file.display());

    let size = fs::metadata(file)
        .with_context(|| format!("Failed to read metadata of file '{}'", file.display()))?
        .len();
    debug!("file is {size} bytes");

    let save = PlayerSaveFile::open_with_config(file, config)?;
    // Anything after the records this build understands is skipped
    let undecoded = size.saturating_sub(save.decoded_len());
    if undecoded > 0 {
        debug!("{undecoded} bytes left undecoded");
    }

    Ok(save)
}
