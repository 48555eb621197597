//! Inline style catalog for generated tables
//!
//! Every property carries `!important` so that CMS theme stylesheets cannot
//! override the exported fragment. The catalog is pure data: named base
//! styles plus a lookup table of positional cell variants.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use phf::phf_map;

/// Outer container: rounded border that clips the table corners
pub const WRAPPER: &str = "overflow: hidden !important; border-radius: 10px !important; \
border: 1px solid #D1D5DB !important; margin: 0 !important; padding: 0 !important; \
display: flex !important; flex-direction: column !important; \
margin-block-start: 0 !important; margin-block-end: 0 !important";

/// The `<table>` element
pub const TABLE: &str = "border-collapse: collapse !important; border-spacing: 0 !important; \
width: 100% !important; max-width: 100% !important; \
font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif !important; \
font-size: 14px !important; line-height: 1.5 !important; color: #1a1a2e !important; \
margin: 0 !important; padding: 0 !important; min-width: 320px !important; \
background: none !important; border: none !important; \
margin-bottom: 0 !important; margin-top: 0 !important";

/// `<thead>` and `<tbody>` reset
pub const SECTION: &str = "margin:0!important;padding:0!important;border:none!important;";

pub const HEADER_ROW: &str = "background-color: #0B3D91 !important; background: #0B3D91 !important";

pub const BODY_ROW_EVEN: &str =
    "background-color: #FFFFFF !important; background: #FFFFFF !important";

pub const BODY_ROW_ODD: &str =
    "background-color: #F5F8FF !important; background: #F5F8FF !important";

const HEADER_CELL_LEAD: &str = "padding: 14px 16px !important; text-align: left !important; \
font-weight: 600 !important; color: #FFFFFF !important";

const HEADER_BORDER_RIGHT: &str = "border-right: 1px solid rgba(255, 255, 255, 0.3) !important";

const HEADER_CELL_TAIL: &str = "border-bottom: 2px solid #094080 !important; \
border-top: none !important; border-left: none !important; font-size: 15px !important; \
text-transform: none !important; letter-spacing: 0 !important; \
word-wrap: break-word !important; overflow-wrap: break-word !important; \
background-color: #0B3D91 !important; background: #0B3D91 !important";

const BODY_CELL_LEAD: &str = "padding: 12px 16px !important; text-align: left !important";

const BODY_BORDER_BOTTOM: &str = "border-bottom: 1px solid #E5E7EB !important";

const BODY_BORDER_RIGHT: &str = "border-right: 1px solid #E5E7EB !important";

const BODY_CELL_TAIL: &str = "border-top: none !important; border-left: none !important; \
color: #1a1a2e !important; font-size: 14px !important; \
word-wrap: break-word !important; overflow-wrap: break-word !important; \
background: inherit !important";

const BOLD: &str = "font-weight: 600 !important";

/// Named row and container styles, addressable by name (CLI listing, hosts)
pub static NAMED_STYLES: phf::Map<&'static str, &'static str> = phf_map! {
    "wrapper" => WRAPPER,
    "table" => TABLE,
    "section" => SECTION,
    "header-row" => HEADER_ROW,
    "body-row-even" => BODY_ROW_EVEN,
    "body-row-odd" => BODY_ROW_ODD,
};

/// Which table section a cell lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Body,
}

/// Positional variant of a cell
///
/// Header cells only distinguish `last_column`; `last_row` and `bold` are
/// ignored for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellVariant {
    pub section: Section,
    pub last_column: bool,
    pub last_row: bool,
    pub bold: bool,
}

impl CellVariant {
    pub fn header(last_column: bool) -> Self {
        CellVariant {
            section: Section::Header,
            last_column,
            last_row: false,
            bold: false,
        }
    }

    pub fn body(last_column: bool, last_row: bool, bold: bool) -> Self {
        CellVariant {
            section: Section::Body,
            last_column,
            last_row,
            bold,
        }
    }

    fn normalized(self) -> Self {
        match self.section {
            Section::Header => CellVariant::header(self.last_column),
            Section::Body => self,
        }
    }

    /// All distinct variants (2 header + 8 body)
    pub fn all() -> Vec<CellVariant> {
        let mut variants = vec![CellVariant::header(false), CellVariant::header(true)];
        for last_column in [false, true] {
            for last_row in [false, true] {
                for bold in [false, true] {
                    variants.push(CellVariant::body(last_column, last_row, bold));
                }
            }
        }
        variants
    }
}

fn build_header_cell_style(last_column: bool) -> String {
    let border_right = if last_column {
        "border-right: none !important"
    } else {
        HEADER_BORDER_RIGHT
    };
    [HEADER_CELL_LEAD, border_right, HEADER_CELL_TAIL].join("; ")
}

fn build_body_cell_style(last_column: bool, last_row: bool, bold: bool) -> String {
    let mut parts = vec![
        BODY_CELL_LEAD,
        if last_row {
            "border-bottom: none !important"
        } else {
            BODY_BORDER_BOTTOM
        },
        if last_column {
            "border-right: none !important"
        } else {
            BODY_BORDER_RIGHT
        },
        BODY_CELL_TAIL,
    ];
    if bold {
        parts.push(BOLD);
    }
    parts.join("; ")
}

lazy_static! {
    /// Positional cell styles, one entry per normalized variant
    static ref CELL_STYLES: FxHashMap<CellVariant, String> = {
        let mut m = FxHashMap::default();
        for variant in CellVariant::all() {
            let style = match variant.section {
                Section::Header => build_header_cell_style(variant.last_column),
                Section::Body => {
                    build_body_cell_style(variant.last_column, variant.last_row, variant.bold)
                }
            };
            m.insert(variant, style);
        }
        m
    };
}

/// Look up the inline style for a positional cell variant
pub fn cell_style(variant: CellVariant) -> &'static str {
    CELL_STYLES
        .get(&variant.normalized())
        .map(String::as_str)
        .unwrap_or("")
}

/// Standard header cell (right border present)
pub fn header_cell_style(last_column: bool) -> &'static str {
    cell_style(CellVariant::header(last_column))
}

/// Body cell style from its three positional flags
pub fn body_cell_style(last_column: bool, last_row: bool, bold: bool) -> &'static str {
    cell_style(CellVariant::body(last_column, last_row, bold))
}

/// Body row background by parity of its index within the body
pub fn body_row_style(body_index: usize) -> &'static str {
    if body_index % 2 == 1 {
        BODY_ROW_ODD
    } else {
        BODY_ROW_EVEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_variants_differ_only_in_right_border() {
        let standard = header_cell_style(false);
        let last = header_cell_style(true);
        assert!(standard.contains("border-right: 1px solid rgba(255, 255, 255, 0.3) !important"));
        assert!(last.contains("border-right: none !important"));
        assert_eq!(
            standard.replace(HEADER_BORDER_RIGHT, "border-right: none !important"),
            last
        );
    }

    #[test]
    fn test_body_cell_borders() {
        let inner = body_cell_style(false, false, false);
        assert!(inner.contains("border-bottom: 1px solid #E5E7EB !important"));
        assert!(inner.contains("border-right: 1px solid #E5E7EB !important"));

        let corner = body_cell_style(true, true, false);
        assert!(corner.contains("border-bottom: none !important"));
        assert!(corner.contains("border-right: none !important"));
    }

    #[test]
    fn test_bold_only_appends_font_weight() {
        for last_column in [false, true] {
            for last_row in [false, true] {
                let plain = body_cell_style(last_column, last_row, false);
                let bold = body_cell_style(last_column, last_row, true);
                assert!(!plain.contains("font-weight"));
                assert_eq!(bold, format!("{}; font-weight: 600 !important", plain));
            }
        }
    }

    #[test]
    fn test_header_ignores_body_flags() {
        let variant = CellVariant {
            section: Section::Header,
            last_column: true,
            last_row: true,
            bold: true,
        };
        assert_eq!(cell_style(variant), header_cell_style(true));
    }

    #[test]
    fn test_every_variant_has_a_style() {
        for variant in CellVariant::all() {
            assert!(!cell_style(variant).is_empty(), "{:?}", variant);
        }
        assert_eq!(CellVariant::all().len(), 10);
    }

    #[test]
    fn test_row_parity() {
        assert_eq!(body_row_style(0), BODY_ROW_EVEN);
        assert_eq!(body_row_style(1), BODY_ROW_ODD);
        assert_eq!(body_row_style(2), BODY_ROW_EVEN);
    }

    #[test]
    fn test_styles_have_no_double_quotes() {
        for (name, style) in NAMED_STYLES.entries() {
            assert!(!style.contains('"'), "{} contains a double quote", name);
        }
        for variant in CellVariant::all() {
            assert!(!cell_style(variant).contains('"'));
        }
    }

    #[test]
    fn test_named_styles_lookup() {
        assert_eq!(NAMED_STYLES.get("wrapper"), Some(&WRAPPER));
        assert_eq!(NAMED_STYLES.get("body-row-odd"), Some(&BODY_ROW_ODD));
        assert!(NAMED_STYLES.get("footer").is_none());
    }
}
