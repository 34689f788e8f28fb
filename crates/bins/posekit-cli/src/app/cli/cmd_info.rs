use crate::{app::Config, error::AppError};

/// Prints posekit's effective configuration.
pub fn print_info(config: Config, quiet: bool) -> Result<(), AppError> {
    if quiet {
        print!("{}", config.to_toml()?);
    } else {
        println!("- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -");
        println!("Current configurations:\n\n{config}");
    }
    Ok(())
}
