//! Decimal places of a fixed-point quantity.

use crate::error::FlowError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Represents the number of decimal places of a fixed-point quantity.
///
/// Every amount, rate, and ratio in this crate uses [`Decimals::WAD`]; the
/// count is kept in the type so parsing and rendering share one scale.
///
/// # Examples
///
/// ```
/// use flow_ratio::domain::Decimals;
///
/// assert_eq!(
///     Decimals::WAD.parse_units("1.5"),
///     Ok(1_500_000_000_000_000_000)
/// );
/// assert_eq!(Decimals::WAD.format_units(1_500_000_000_000_000_000), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Decimals {
    /// Eighteen decimal places, the scale of every amount, rate, and ratio
    /// in this crate.
    pub const WAD: Self = Self(MAX_DECIMALS);

    /// Returns `10^decimals` as `u128`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Converts a whole amount to the smallest raw unit.
    ///
    /// With [`Decimals::WAD`], an input of `1` yields `10^18`.
    ///
    /// This operation cannot overflow because `u64::MAX * 10^18 < u128::MAX`.
    #[must_use]
    pub const fn scale_up(&self, amount: u64) -> u128 {
        (amount as u128) * self.factor()
    }

    /// Parses a non-negative decimal string into raw units without going
    /// through floating point.
    ///
    /// `"0.00003858"` with 18 decimals yields `38_580_000_000_000`.
    ///
    /// # Errors
    ///
    /// - [`FlowError::InvalidAmount`] if the string is empty, signed, or
    ///   contains anything but ASCII digits and a single `.`.
    /// - [`FlowError::InvalidPrecision`] if there are more fractional digits
    ///   than `decimals`.
    /// - [`FlowError::Overflow`] if the scaled value exceeds `u128`.
    pub fn parse_units(&self, s: &str) -> Result<u128, FlowError> {
        let s = s.trim();
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(FlowError::InvalidAmount("empty decimal string"));
        }
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(FlowError::InvalidAmount("expected an unsigned decimal"));
        }
        if frac_part.len() > usize::from(self.0) {
            return Err(FlowError::InvalidPrecision(
                "more fractional digits than decimals",
            ));
        }

        let mut raw: u128 = 0;
        for b in int_part.bytes() {
            raw = raw
                .checked_mul(10)
                .and_then(|v| v.checked_add(u128::from(b - b'0')))
                .ok_or(FlowError::Overflow("decimal integer part exceeds u128"))?;
        }
        raw = raw
            .checked_mul(self.factor())
            .ok_or(FlowError::Overflow("scaled decimal exceeds u128"))?;

        let mut frac: u128 = 0;
        for b in frac_part.bytes() {
            frac = frac * 10 + u128::from(b - b'0');
        }
        // frac_part.len() <= self.0, so the exponent never underflows
        let pad = u32::from(self.0) - frac_part.len() as u32;
        frac *= 10u128.pow(pad);

        raw.checked_add(frac)
            .ok_or(FlowError::Overflow("scaled decimal exceeds u128"))
    }

    /// Renders raw units as a decimal string with trailing zeros trimmed.
    #[must_use]
    pub fn format_units(&self, raw: u128) -> String {
        let factor = self.factor();
        let whole = raw / factor;
        let frac = raw % factor;
        if frac == 0 {
            return whole.to_string();
        }
        let digits = format!("{frac:0width$}", width = usize::from(self.0));
        format!("{whole}.{}", digits.trim_end_matches('0'))
    }
}
