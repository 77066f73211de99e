//! Random strings, source-like text, and dates.

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;

/// Characters drawn by [`random_string`]: ASCII letters, digits, punctuation.
const CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Fixed epoch that random dates are offset from.
static EPOCH: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid epoch date"));

/// Generate a random string of ASCII letters, digits, and punctuation.
///
/// When `length` is `None`, a length is chosen uniformly from 0..=100.
/// Always returns a value; the empty string is a legitimate output.
pub fn random_string(length: Option<usize>) -> String {
    let length = length.unwrap_or_else(|| fastrand::usize(0..=100));
    (0..length)
        .map(|_| CHARSET[fastrand::usize(0..CHARSET.len())] as char)
        .collect()
}

/// Generate random Python-like source text.
///
/// The corpus mixes syntactically valid snippets, incomplete constructs,
/// unterminated strings, empty/whitespace-only content, and raw random
/// text so that both the happy path and the parse-failure path of the
/// parser under test get exercised.
pub fn random_source_text() -> String {
    let templates: [String; 12] = [
        "import random\nprint('hello')".to_string(),
        "def func():\n    pass".to_string(),
        "class Test:\n    def __init__(self):\n        pass".to_string(),
        "x = 1 + 2".to_string(),
        String::new(),
        "invalid python code @#$%".to_string(),
        "def func(\n    incomplete".to_string(),
        "'''multiline\nstring\n".to_string(),
        "\n\n\n".to_string(),
        random_string(None),
        format!("# {}", random_string(None)),
        format!("import {}", random_string(None)),
    ];
    let pick = fastrand::usize(0..templates.len());
    templates.into_iter().nth(pick).unwrap_or_default()
}

/// Source text biased toward logging call patterns.
pub fn random_logging_text() -> String {
    let templates: [String; 6] = [
        "import logging\nlogging.getLogger('test')".to_string(),
        "logger.info(test_data)".to_string(),
        "import tensorflow as tf\ntf.logging.info('message')".to_string(),
        random_source_text(),
        String::new(),
        "# no logging here".to_string(),
    ];
    let pick = fastrand::usize(0..templates.len());
    templates.into_iter().nth(pick).unwrap_or_default()
}

/// Source text biased toward common data-loading call patterns.
pub fn random_data_load_text() -> String {
    let templates: [String; 9] = [
        "import torch\ntorch.load('file.pth')".to_string(),
        "import pickle\npickle.load(open('file.pkl', 'rb'))".to_string(),
        "import json\njson.load(open('file.json'))".to_string(),
        "import pandas as pd\npd.read_csv('data.csv')".to_string(),
        "from PIL import Image\nImage.open('image.jpg')".to_string(),
        random_source_text(),
        String::new(),
        "# no data loading here".to_string(),
        "import numpy as np\nnp.load('data.npy')".to_string(),
    ];
    let pick = fastrand::usize(0..templates.len());
    templates.into_iter().nth(pick).unwrap_or_default()
}

/// Generate a random date offset from the epoch by a uniform signed number
/// of days in [-1000, 1000], so both far-past and far-future values occur.
pub fn random_date() -> NaiveDate {
    *EPOCH + Duration::days(fastrand::i64(-1000..=1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_string_explicit_length() {
        for len in [0, 1, 10, 100, 500] {
            assert_eq!(random_string(Some(len)).chars().count(), len);
        }
    }

    #[test]
    fn test_random_string_default_length_bounded() {
        for _ in 0..200 {
            let s = random_string(None);
            assert!(s.chars().count() <= 100);
        }
    }

    #[test]
    fn test_random_string_charset() {
        let s = random_string(Some(1000));
        assert!(s.bytes().all(|b| b.is_ascii_graphic()));
    }

    #[test]
    fn test_random_date_within_range() {
        let min = *EPOCH - Duration::days(1000);
        let max = *EPOCH + Duration::days(1000);
        for _ in 0..200 {
            let d = random_date();
            assert!(d >= min && d <= max);
        }
    }

    #[test]
    fn test_source_text_covers_empty() {
        // Empty content is in the corpus; a few hundred draws should hit it.
        let hit = (0..500).any(|_| random_source_text().is_empty());
        assert!(hit);
    }
}
