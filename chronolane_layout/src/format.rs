// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Year label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Formats a year for detail readouts: `"500 BCE"`, `"1 CE"`, `"1066 CE"`.
pub fn format_year(year: i32) -> String {
    match year {
        y if y < 0 => format!("{} BCE", y.unsigned_abs()),
        0 => String::from("1 CE"),
        y => format!("{y} CE"),
    }
}

/// Formats a year for a ruler label: `"300,000 BCE"`, `"3000 BCE"`, `"1 CE"`, `"1500"`.
///
/// BCE years of five or more digits get thousands separators.
pub fn ruler_label(year: i32) -> String {
    match year {
        y if y < 0 => {
            let abs = y.unsigned_abs();
            if abs >= 10_000 {
                format!("{} BCE", group_thousands(abs))
            } else {
                format!("{abs} BCE")
            }
        }
        0 => String::from("1 CE"),
        y => format!("{y}"),
    }
}

fn group_thousands(v: u32) -> String {
    let digits = format!("{v}");
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
