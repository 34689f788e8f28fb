use crate::{
    app::{
        cli::{compose_ops, Op},
        Config,
    },
    error::AppError,
};
use base::{
    camera::camera_following, decimal::Rounding, repr::Render, transform::translation_of,
};

/// Options for the `follow` command.
#[derive(clap::Args, Debug)]
#[clap(about = "Derive the transform of a camera following an object.")]
pub struct FollowOptions {
    /// Operations placing the object, applied in the order given.
    #[clap(
        long = "op",
        help = "Operation placing the object, repeatable (see `compose`).\nWithout any, the \
                object sits at the origin."
    )]
    pub ops: Vec<Op>,

    /// Distance of the camera behind the object.
    #[clap(
        long,
        allow_negative_numbers = true,
        help = "Distance behind the object [default: from config]"
    )]
    pub behind: Option<f64>,

    /// Height of the camera above the object.
    #[clap(
        long,
        allow_negative_numbers = true,
        help = "Height above the object [default: from config]"
    )]
    pub above: Option<f64>,

    /// Decimal places of the printed values.
    #[clap(short, long, help = "Decimal places of the printed values [default: from config]")]
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

/// Places the object and prints the transform of the camera following it.
pub fn follow(opts: FollowOptions, config: Config, quiet: bool) -> Result<(), AppError> {
    let places = config.decimals(opts.decimals);
    let rounding = config.rounding(opts.rounding);
    let defaults = config.follow();
    let behind = opts.behind.unwrap_or(defaults.behind);
    let above = opts.above.unwrap_or(defaults.above);

    let object = compose_ops(&opts.ops);
    log::info!(
        "Following object at {} from {behind} behind and {above} above",
        translation_of(object)
    );
    let camera = camera_following(object, behind, above);

    if quiet {
        println!("{}", camera.render(places, rounding));
    } else {
        println!("Object:\n{}", object.render(places, rounding));
        println!("Camera:\n{}", camera.render(places, rounding));
    }
    Ok(())
}
