use crate::{
    app::{
        cli::{compose_ops, Op},
        Config,
    },
    error::AppError,
};
use base::{
    decimal::Rounding,
    math::mat3_rows,
    repr::Render,
    transform::{rotation_of, translation_of},
    validate::validate_rotation_matrix,
};

/// Options for the `compose` command.
#[derive(clap::Args, Debug)]
#[clap(about = "Apply rotations and translations to the identity transform.")]
pub struct ComposeOptions {
    /// Operations, applied in the order given.
    #[clap(
        long = "op",
        required = true,
        help = "Operation to apply, repeatable:\n  rotate-global:x,y,z\n  rotate-local:x,y,z\n  \
                translate-global:x,y,z\n  translate-local:x,y,z\nAngles are in degrees."
    )]
    pub ops: Vec<Op>,

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

/// Composes the operations and prints the resulting transform.
pub fn compose(opts: ComposeOptions, config: Config, quiet: bool) -> Result<(), AppError> {
    let places = config.decimals(opts.decimals);
    let rounding = config.rounding(opts.rounding);
    let transform = compose_ops(&opts.ops);

    if let Err(err) = validate_rotation_matrix(&mat3_rows(&rotation_of(transform)), places) {
        log::warn!("Composed rotation drifted from a rotation matrix: {err}");
    }

    if quiet {
        println!("{}", transform.render(places, rounding));
    } else {
        println!("Transform:\n{}", transform.render(places, rounding));
        println!("Rotation:\n{}", rotation_of(transform).render(places, rounding));
        println!("Translation:\n{}", translation_of(transform).render(places, rounding));
    }
    Ok(())
}
