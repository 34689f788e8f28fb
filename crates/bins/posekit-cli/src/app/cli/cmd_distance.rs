use crate::{
    app::{cli::parse_triple, Config},
    error::AppError,
};
use base::{decimal::Rounding, repr::Render, Translation};

/// Options for the `distance` command.
#[derive(clap::Args, Debug)]
#[clap(about = "Measure the distance between two points.")]
pub struct DistanceOptions {
    /// First point.
    #[clap(value_parser = parse_triple, allow_hyphen_values = true, help = "First point as x,y,z")]
    pub a: [f64; 3],

    /// Second point.
    #[clap(value_parser = parse_triple, allow_hyphen_values = true, help = "Second point as x,y,z")]
    pub b: [f64; 3],

    /// Decimal places of the printed distance.
    #[clap(short, long, help = "Decimal places of the printed distance [default: from config]")]
    pub decimals: Option<u32>,

    /// Tie-breaking rule of the printed values.
    #[clap(
        short,
        long,
        value_enum,
        help = "Rounding of the printed values [default: from config]"
    )]
    pub rounding: Option<Rounding>,
}

/// Prints the Euclidean distance between the two points.
pub fn distance(opts: DistanceOptions, config: Config, quiet: bool) -> Result<(), AppError> {
    let places = config.decimals(opts.decimals);
    let (a, b) = (Translation::from(opts.a), Translation::from(opts.b));
    let rendered = a.distance_to(&b).render(places, config.rounding(opts.rounding));
    if quiet {
        println!("{rendered}");
    } else {
        println!("Distance from {a} to {b}: {rendered}");
    }
    Ok(())
}
