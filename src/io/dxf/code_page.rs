//! `$DWGCODEPAGE` handling for drawings that are not valid UTF-8.

use encoding_rs::Encoding;

/// Code page names as they appear in the HEADER section, lower-cased.
static CODE_PAGES: &[(&str, &Encoding)] = &[
    ("ansi_874", encoding_rs::WINDOWS_874),
    ("ansi_932", encoding_rs::SHIFT_JIS),
    ("ansi_936", encoding_rs::GBK),
    ("gb2312", encoding_rs::GBK),
    ("ansi_949", encoding_rs::EUC_KR),
    ("korean", encoding_rs::EUC_KR),
    ("ansi_950", encoding_rs::BIG5),
    ("big5", encoding_rs::BIG5),
    ("ansi_1250", encoding_rs::WINDOWS_1250),
    ("ansi_1251", encoding_rs::WINDOWS_1251),
    ("ansi_1252", encoding_rs::WINDOWS_1252),
    ("ansi_1253", encoding_rs::WINDOWS_1253),
    ("ansi_1254", encoding_rs::WINDOWS_1254),
    ("ansi_1255", encoding_rs::WINDOWS_1255),
    ("ansi_1256", encoding_rs::WINDOWS_1256),
    ("ansi_1257", encoding_rs::WINDOWS_1257),
    ("ansi_1258", encoding_rs::WINDOWS_1258),
    ("dos866", encoding_rs::IBM866),
    ("iso8859-1", encoding_rs::WINDOWS_1252),
    ("iso8859-2", encoding_rs::ISO_8859_2),
    ("iso8859-5", encoding_rs::ISO_8859_5),
    ("iso8859-7", encoding_rs::ISO_8859_7),
    ("iso8859-15", encoding_rs::ISO_8859_15),
    ("koi8-r", encoding_rs::KOI8_R),
];

/// Encoding for a `$DWGCODEPAGE` value, matched case-insensitively.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.trim().to_ascii_lowercase().replace('_', "-");
    CODE_PAGES
        .iter()
        .find(|(known, _)| known.replace('_', "-") == name)
        .map(|(_, enc)| *enc)
}

/// Value of the `$DWGCODEPAGE` header variable, if the header has one.
///
/// Expects trimmed lines: the variable name is followed by group code `3`
/// and then the code page name.
pub fn find_code_page<'a>(lines: &[&'a str]) -> Option<&'a str> {
    let at = lines.iter().position(|l| *l == "$DWGCODEPAGE")?;
    match lines.get(at + 1..at + 3) {
        Some([code, value]) if *code == "3" => Some(*value),
        _ => None,
    }
}
