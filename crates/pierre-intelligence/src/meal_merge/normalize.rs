// ABOUTME: Canonical form of food names used by every matching rule
// ABOUTME: Lowercases, unifies apostrophes, spells out ampersands, and collapses whitespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Right single quotation mark, as produced by smart-quote keyboards and LLM output
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Normalize a food name for comparison
///
/// Lowercases, maps the typographic apostrophe to `'`, replaces `&` with
/// `and`, trims, and collapses whitespace runs to a single space. Total over
/// all inputs; the empty string normalizes to itself.
#[must_use]
pub fn normalize_food_name(name: &str) -> String {
    let unified: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c == RIGHT_SINGLE_QUOTE { '\'' } else { c })
        .collect();

    unified
        .replace('&', "and")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
