//! LaTeX escaping for cell text
//!
//! Special characters are replaced in a single pass. Alternatives in the
//! matcher are ordered longest first, so `\r\n` becomes one line break rather
//! than two.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::{Captures, Regex};

/// Characters (and sequences) with a special meaning in LaTeX text mode
pub static LATEX_ESCAPES: phf::Map<&'static str, &'static str> = phf_map! {
    "&" => r"\&",
    "\\" => r"{\textbackslash}",
    "~" => r"{\textasciitilde}",
    "$" => r"\$",
    "\r\n" => r"{\linebreak}",
    "\n" => r"{\linebreak}",
    "\r" => r"{\linebreak}",
    "_" => r"\_",
    "{" => r"\{",
    "}" => r"\}",
};

lazy_static! {
    static ref LATEX_ESCAPE_RE: Regex = {
        let mut keys: Vec<&str> = LATEX_ESCAPES.keys().copied().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let pattern = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&pattern).expect("escape pattern is built from literals")
    };
}

/// Escape text for use inside a LaTeX tabular cell
pub fn escape_latex(text: &str) -> String {
    LATEX_ESCAPE_RE
        .replace_all(text, |caps: &Captures| {
            LATEX_ESCAPES
                .get(&caps[0])
                .copied()
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}
