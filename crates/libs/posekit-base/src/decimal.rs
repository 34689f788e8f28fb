//! Exact decimal arithmetic over binary floating point values.
//!
//! Every finite `f64` is a dyadic rational and therefore has a finite decimal
//! expansion. [`Decimal`] holds that expansion exactly, so rounding to a
//! number of decimal places never suffers from the representation error that
//! `(x * 10^n).round() / 10^n` does.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

/// Tie-breaking rule applied when a value lies exactly halfway between two
/// candidates at the requested number of decimal places.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ties go to the neighbour whose last digit is even.
    #[default]
    HalfEven,
    /// Ties go away from zero.
    HalfUp,
}

impl Display for Rounding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rounding::HalfEven => write!(f, "half-even"),
            Rounding::HalfUp => write!(f, "half-up"),
        }
    }
}

/// An exact finite decimal number: `(-1)^negative * digits * 10^-scale`.
#[derive(Debug, Clone)]
pub struct Decimal {
    negative: bool,
    /// Decimal digits, most significant first, without leading zeros. Empty
    /// for zero.
    digits: Vec<u8>,
    /// Number of digits after the decimal point.
    scale: u32,
}

impl Decimal {
    /// The number zero.
    pub const fn zero() -> Self {
        Self {
            negative: false,
            digits: Vec::new(),
            scale: 0,
        }
    }

    /// The number one.
    pub fn one() -> Self {
        Self {
            negative: false,
            digits: vec![1],
            scale: 0,
        }
    }

    /// Returns the exact decimal expansion of `value`, or `None` if `value`
    /// is NaN or infinite.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Self::zero());
        }
        let scale = fraction_digits(value);
        // Formatting with at least as many places as the expansion has is
        // exact; no rounding takes place.
        let text = format!("{:.*}", scale as usize, value.abs());
        let digits = text
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        Some(Self::normalized(value.is_sign_negative(), digits, scale))
    }

    fn normalized(negative: bool, mut digits: Vec<u8>, scale: u32) -> Self {
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading);
        Self {
            negative: negative && !digits.is_empty(),
            digits,
            scale,
        }
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool { self.digits.is_empty() }

    /// Returns true if the value is strictly less than zero.
    pub fn is_negative(&self) -> bool { self.negative }

    /// Number of digits after the decimal point.
    pub fn scale(&self) -> u32 { self.scale }

    /// Digits of the value expressed at the given (not smaller) scale.
    fn digits_at(&self, scale: u32) -> Vec<u8> {
        debug_assert!(scale >= self.scale);
        if self.digits.is_empty() {
            return Vec::new();
        }
        let mut digits = self.digits.clone();
        digits.resize(digits.len() + (scale - self.scale) as usize, 0);
        digits
    }

    /// Rounds the value to `places` digits after the decimal point.
    ///
    /// A value with no more than `places` fraction digits is returned as is,
    /// so the result has a scale of at most `places`.
    pub fn round(&self, places: u32, mode: Rounding) -> Self {
        if places >= self.scale {
            return self.clone();
        }

        let dropped = (self.scale - places) as usize;
        // Make sure at least one digit is kept in front of the dropped ones.
        let mut padded = vec![0u8; (dropped + 1).saturating_sub(self.digits.len())];
        padded.extend_from_slice(&self.digits);
        let (kept, tail) = padded.split_at(padded.len() - dropped);
        let mut kept = kept.to_vec();

        let against_half = match tail[0].cmp(&5) {
            Ordering::Equal if tail[1..].iter().any(|&d| d != 0) => Ordering::Greater,
            order => order,
        };
        let round_up = match against_half {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => match mode {
                Rounding::HalfUp => true,
                Rounding::HalfEven => kept.last().is_some_and(|d| d % 2 == 1),
            },
        };
        if round_up {
            increment(&mut kept);
        }
        Self::normalized(self.negative, kept, places)
    }

    /// Returns the exact square of the value.
    pub fn square(&self) -> Self {
        Self::normalized(
            false,
            multiply_digits(&self.digits, &self.digits),
            self.scale * 2,
        )
    }

    /// Returns the exact sum of two non-negative values.
    pub fn add_non_negative(&self, other: &Self) -> Self {
        debug_assert!(!self.negative && !other.negative);
        let scale = self.scale.max(other.scale);
        Self::normalized(
            false,
            add_digits(&self.digits_at(scale), &other.digits_at(scale)),
            scale,
        )
    }

    /// Compares two decimals by value, regardless of their scales.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => return Ordering::Greater,
            (true, false) => return Ordering::Less,
            _ => {},
        }
        let scale = self.scale.max(other.scale);
        let (a, b) = (self.digits_at(scale), other.digits_at(scale));
        let magnitude = a.len().cmp(&b.len()).then_with(|| a.cmp(&b));
        if self.negative {
            magnitude.reverse()
        } else {
            magnitude
        }
    }

    /// Renders the value without exponent, stripping trailing fractional
    /// zeros and a trailing decimal point; a bare fraction keeps its leading
    /// zero (`0.5`, never `.5`).
    pub fn to_plain_string(&self) -> String {
        let scale = self.scale as usize;
        let mut digits = self.digits.clone();
        if digits.len() <= scale {
            let mut padded = vec![0u8; scale + 1 - digits.len()];
            padded.append(&mut digits);
            digits = padded;
        }
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        let significant = fraction.len() - fraction.iter().rev().take_while(|&&d| d == 0).count();

        let mut text = String::with_capacity(digits.len() + 2);
        if self.negative {
            text.push('-');
        }
        text.extend(integer.iter().map(|&d| char::from(b'0' + d)));
        if significant > 0 {
            text.push('.');
            text.extend(fraction[..significant].iter().map(|&d| char::from(b'0' + d)));
        }
        text
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool { self.cmp_value(other) == Ordering::Equal }
}

impl Eq for Decimal {}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

/// Rounds `value` to `places` decimal places and renders it in plain form.
///
/// Non-finite values render as `NaN`, `inf` and `-inf`.
pub fn round_to_string(value: f64, places: u32, mode: Rounding) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal.round(places, mode).to_plain_string(),
        None if value.is_nan() => String::from("NaN"),
        None if value.is_sign_negative() => String::from("-inf"),
        None => String::from("inf"),
    }
}

/// Exact sum of squares of the given values, or `None` if any of them is not
/// finite.
pub fn sum_of_squares(values: &[f64]) -> Option<Decimal> {
    values.iter().try_fold(Decimal::zero(), |sum, &value| {
        Decimal::from_f64(value).map(|d| sum.add_non_negative(&d.square()))
    })
}

/// Number of decimal digits after the point in the exact expansion of a
/// finite, non-zero `value`; equal to the number of binary fraction digits.
fn fraction_digits(value: f64) -> u32 {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & 0x000f_ffff_ffff_ffff;
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };
    let exponent = exponent + mantissa.trailing_zeros() as i32;
    if exponent >= 0 {
        0
    } else {
        exponent.unsigned_abs()
    }
}

fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

fn add_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut sum = Vec::with_capacity(len + 1);
    let mut carry = 0u8;
    for i in 0..len {
        let x = if i < a.len() { a[a.len() - 1 - i] } else { 0 };
        let y = if i < b.len() { b[b.len() - 1 - i] } else { 0 };
        let s = x + y + carry;
        sum.push(s % 10);
        carry = s / 10;
    }
    if carry > 0 {
        sum.push(carry);
    }
    sum.reverse();
    sum
}

fn multiply_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    // Little-endian accumulator.
    let mut acc = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().rev().enumerate() {
        for (j, &y) in b.iter().rev().enumerate() {
            acc[i + j] += x as u32 * y as u32;
        }
    }
    let mut carry = 0u32;
    for cell in acc.iter_mut() {
        let total = *cell + carry;
        *cell = total % 10;
        carry = total / 10;
    }
    debug_assert_eq!(carry, 0);
    acc.iter().rev().map(|&d| d as u8).collect()
}
