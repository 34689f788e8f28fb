use crate::{
    app::{args::SubCommand, Config},
    error::AppError,
};
use base::{
    math::DMat4,
    transform::{
        identity_transform, rotate_around_global_axes, rotate_around_local_axes,
        translate_along_global_axes, translate_along_local_axes,
    },
};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// ANSI color codes.
pub mod ansi {
    /// Red exclamation mark.
    pub const RED_EXCLAMATION: &str = "\u{001b}[31m!\u{001b}[0m";
    /// Cyan check mark.
    pub const CYAN_CHECK: &str = "\u{001b}[36m✓\u{001b}[0m";
}

mod cmd_compose;
mod cmd_distance;
mod cmd_follow;
mod cmd_info;
mod cmd_validate;

pub use cmd_compose::ComposeOptions;
pub use cmd_distance::DistanceOptions;
pub use cmd_follow::FollowOptions;
pub use cmd_validate::ValidateOptions;

/// Entry point of posekit CLI.
pub fn run(cmd: SubCommand, config: Config, quiet: bool) -> Result<(), AppError> {
    match cmd {
        SubCommand::Compose(opts) => cmd_compose::compose(opts, config, quiet),
        SubCommand::Follow(opts) => cmd_follow::follow(opts, config, quiet),
        SubCommand::Validate(opts) => cmd_validate::validate(opts, config, quiet),
        SubCommand::Distance(opts) => cmd_distance::distance(opts, config, quiet),
        SubCommand::PrintInfo => cmd_info::print_info(config, quiet),
    }
}

/// Parses three comma separated numbers, e.g. `1,-2.5,0`.
pub fn parse_triple(text: &str) -> Result<[f64; 3], String> {
    let values = parse_row(text)?;
    <[f64; 3]>::try_from(values.as_slice())
        .map_err(|_| format!("expected 3 comma separated values, found {}", values.len()))
}

/// Parses a row of comma separated numbers of any length.
pub fn parse_row(text: &str) -> Result<Vec<f64>, String> {
    text.split(',')
        .map(|value| {
            let value = value.trim();
            value
                .parse::<f64>()
                .map_err(|err| format!("invalid number `{value}`: {err}"))
        })
        .collect()
}

/// One step applied to a transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Op {
    /// Rotate around the global axes by the given angles in degrees.
    RotateGlobal([f64; 3]),
    /// Rotate around the local axes by the given angles in degrees.
    RotateLocal([f64; 3]),
    /// Move along the global axes.
    TranslateGlobal([f64; 3]),
    /// Move along the local axes.
    TranslateLocal([f64; 3]),
}

impl Op {
    /// Applies the operation to a transform.
    pub fn apply(&self, transform: DMat4) -> DMat4 {
        match *self {
            Op::RotateGlobal([x, y, z]) => rotate_around_global_axes(transform, x, y, z),
            Op::RotateLocal([x, y, z]) => rotate_around_local_axes(transform, x, y, z),
            Op::TranslateGlobal([x, y, z]) => translate_along_global_axes(transform, x, y, z),
            Op::TranslateLocal([x, y, z]) => translate_along_local_axes(transform, x, y, z),
        }
    }
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, values) = s
            .split_once(':')
            .ok_or_else(|| format!("expected `<operation>:x,y,z`, found `{s}`"))?;
        let values = parse_triple(values)?;
        match kind.trim() {
            "rotate-global" => Ok(Op::RotateGlobal(values)),
            "rotate-local" => Ok(Op::RotateLocal(values)),
            "translate-global" => Ok(Op::TranslateGlobal(values)),
            "translate-local" => Ok(Op::TranslateLocal(values)),
            other => Err(format!(
                "unknown operation `{other}`, expected one of rotate-global, rotate-local, \
                 translate-global, translate-local"
            )),
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (kind, [x, y, z]) = match self {
            Op::RotateGlobal(v) => ("rotate-global", v),
            Op::RotateLocal(v) => ("rotate-local", v),
            Op::TranslateGlobal(v) => ("translate-global", v),
            Op::TranslateLocal(v) => ("translate-local", v),
        };
        write!(f, "{kind}:{x},{y},{z}")
    }
}

/// Applies the operations in order, starting from the identity transform.
pub fn compose_ops(ops: &[Op]) -> DMat4 {
    ops.iter().fold(identity_transform(), |transform, op| {
        log::debug!("applying {op}");
        op.apply(transform)
    })
}
