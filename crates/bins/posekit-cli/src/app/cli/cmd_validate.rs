use crate::{
    app::{
        cli::{ansi, parse_row},
        Config,
    },
    error::{AppError, RuntimeError},
};
use base::{
    decimal::Rounding,
    repr::{format_matrix, format_vector},
    validate::{validate_rotation_matrix, validate_unit_vector},
};

/// Matrix given on the command line, rows of any length.
type Matrix = Vec<Vec<f64>>;

/// Vector given on the command line, of any length.
type Row = Vec<f64>;

/// Options for the `validate` command.
#[derive(clap::Args, Debug)]
#[clap(about = "Check a rotation matrix or a unit vector.")]
#[clap(group(clap::ArgGroup::new("input").required(true).args(["matrix", "vector"])))]
pub struct ValidateOptions {
    /// Rotation matrix given row by row.
    #[clap(
        long,
        value_parser = parse_matrix,
        allow_hyphen_values = true,
        help = "Rotation matrix, rows separated by `;` and values by `,`\ne.g. \"1,0,0;0,1,0;0,0,1\""
    )]
    pub matrix: Option<Matrix>,

    /// Unit vector.
    #[clap(
        long,
        value_parser = parse_row,
        allow_hyphen_values = true,
        help = "Unit vector as x,y,z"
    )]
    pub vector: Option<Row>,

    /// Decimal places the check is performed at.
    #[clap(short, long, help = "Decimal places of the check [default: from config]")]
    pub decimals: Option<u32>,
}

/// Parses a matrix written as rows separated by `;`.
fn parse_matrix(text: &str) -> Result<Matrix, String> {
    text.split(';').map(parse_row).collect()
}

/// Runs the validator on the given matrix or vector.
pub fn validate(opts: ValidateOptions, config: Config, quiet: bool) -> Result<(), AppError> {
    let places = config.decimals(opts.decimals);
    let (result, rendered) = match (&opts.matrix, &opts.vector) {
        (Some(matrix), _) => (
            validate_rotation_matrix(matrix, places),
            format!("Rotation matrix\n{}\n", format_matrix(matrix, places, Rounding::HalfEven)),
        ),
        (None, Some(vector)) => (
            validate_unit_vector(vector, places),
            format!("Unit vector {} ", format_vector(vector, places, Rounding::HalfEven)),
        ),
        (None, None) => {
            return Err(AppError::new(
                "Nothing to validate.",
                Some(Box::new(RuntimeError::InvalidParameters(String::from(
                    "pass --matrix or --vector",
                )))),
            ))
        },
    };

    match result {
        Ok(()) => {
            if !quiet {
                println!(
                    "{} {rendered}is valid at {places} decimal places",
                    ansi::CYAN_CHECK
                );
            }
            Ok(())
        },
        Err(err) => {
            if !quiet {
                eprintln!("{} {rendered}is invalid", ansi::RED_EXCLAMATION);
            }
            Err(AppError::from_validation_error(err, "Validation failed"))
        },
    }
}
