//! Squares a number
//!
//! The result is rendered like C's `%g`: six significant digits, trailing
//! zeros dropped, scientific notation outside `1e-4 ..= 1e6`.

use linkme::distributed_slice;
use shirasu_application::Context;
use shirasu_application::addon::{ADDON_MODULES, Addon, AddonModuleEntry, rules};
use shirasu_application::di::{Injectable, names};

pub const NAME: &str = "square";

const SIGNIFICANT_DIGITS: i32 = 6;

pub fn addon() -> Addon {
    Addon::new(NAME, "/square number", "Calculates the square of given number.").with_receiver(
        rules::command("square"),
        Injectable::new([names::CTX], |deps| async move {
            let ctx: Context = deps.get(names::CTX)?;
            let arg = ctx.arg();
            match arg.parse::<f64>() {
                Ok(number) => ctx.send(format_general(number.powi(2))).await?,
                Err(_) => ctx.reject(format!("Invalid number: {arg}")).await?,
            };
            Ok(())
        }),
    )
}

/// Format `value` the way `%g` does
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Rounding to the significant digits can bump the exponent (9.999995 -> 1e1).
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[distributed_slice(ADDON_MODULES)]
static SQUARE_MODULE: AddonModuleEntry = AddonModuleEntry {
    name: NAME,
    description: "Squares a number",
    factory: || Ok(vec![addon()]),
};
