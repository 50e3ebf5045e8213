use std::path::PathBuf;

use argh::FromArgs;

use rayrig_calib::RigProfile;
use rayrig_dataset::{DatasetConfig, RayDataset};

#[derive(FromArgs)]
/// Load a capture dataset and print its shape
struct Args {
    /// path to the dataset root directory
    #[argh(option, short = 'r')]
    root_dir: PathBuf,

    /// logical split to load
    #[argh(option, default = "String::from(\"train\")")]
    split: String,

    /// scene identifier
    #[argh(option)]
    scene: String,

    /// take identifier
    #[argh(option)]
    take: String,

    /// resolution scale factor
    #[argh(option, default = "1.0")]
    downsample: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let dataset = RayDataset::new(DatasetConfig {
        root_dir: args.root_dir,
        split: args.split,
        scene: args.scene,
        take: args.take,
        downsample: args.downsample,
        rig: RigProfile::default(),
    })?;

    println!("cameras: {}", dataset.rig.len());
    println!("ray records: {}", dataset.rays.len());

    if let Some(first) = dataset.rays.records().first() {
        log::debug!("first record: {:?}", first);
    }

    Ok(())
}
