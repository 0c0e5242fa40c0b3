//! Rendering options

/// Horizontal alignment of a LaTeX column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Convert to LaTeX column specification character
    pub fn to_latex_char(&self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Center => 'c',
            Alignment::Right => 'r',
        }
    }

    /// Parse from an alignment name or LaTeX character
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" | "left" => Some(Alignment::Left),
            "c" | "center" | "centre" => Some(Alignment::Center),
            "r" | "right" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Style of the horizontal rules around the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleStyle {
    /// Plain `\hline` everywhere
    #[default]
    Hline,
    /// Booktabs `\toprule`, `\midrule` and `\bottomrule`
    Booktabs,
}

impl RuleStyle {
    pub fn top(&self) -> &'static str {
        match self {
            RuleStyle::Hline => "\\hline",
            RuleStyle::Booktabs => "\\toprule",
        }
    }

    pub fn mid(&self) -> &'static str {
        match self {
            RuleStyle::Hline => "\\hline",
            RuleStyle::Booktabs => "\\midrule",
        }
    }

    pub fn bottom(&self) -> &'static str {
        match self {
            RuleStyle::Hline => "\\hline",
            RuleStyle::Booktabs => "\\bottomrule",
        }
    }
}

/// Options for table rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Alignment used in the tabular column specifier
    pub column_align: Alignment,
    /// Alignment used inside `\multicolumn`
    pub span_align: Alignment,
    /// Rules drawn around the header row
    pub rule_style: RuleStyle,
    /// Wrap LaTeX output in a compilable document
    pub standalone: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            column_align: Alignment::Left,
            span_align: Alignment::Left,
            rule_style: RuleStyle::Hline,
            standalone: false,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn booktabs() -> Self {
        Self {
            rule_style: RuleStyle::Booktabs,
            ..Default::default()
        }
    }

    pub fn standalone() -> Self {
        Self {
            standalone: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_chars() {
        assert_eq!(Alignment::Left.to_latex_char(), 'l');
        assert_eq!(Alignment::Center.to_latex_char(), 'c');
        assert_eq!(Alignment::Right.to_latex_char(), 'r');
    }

    #[test]
    fn test_alignment_parse() {
        assert_eq!(Alignment::parse(" Right "), Some(Alignment::Right));
        assert_eq!(Alignment::parse("c"), Some(Alignment::Center));
        assert_eq!(Alignment::parse("justify"), None);
    }

    #[test]
    fn test_presets() {
        let opts = RenderOptions::booktabs();
        assert_eq!(opts.rule_style, RuleStyle::Booktabs);
        assert!(!opts.standalone);

        let opts = RenderOptions::standalone();
        assert!(opts.standalone);
        assert_eq!(opts.rule_style, RuleStyle::Hline);
        assert_eq!(RuleStyle::Booktabs.mid(), "\\midrule");
    }
}
