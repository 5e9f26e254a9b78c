//! gofmt-compatible layout helpers.

/// Go reserved words; none of them may be used as an identifier.
const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Predeclared identifiers of the universe block. Redeclaring one at package
/// scope shadows it for every file of the package.
const PREDECLARED: &[&str] = &[
    "any",
    "append",
    "bool",
    "byte",
    "cap",
    "clear",
    "close",
    "comparable",
    "complex",
    "complex64",
    "complex128",
    "copy",
    "delete",
    "error",
    "false",
    "float32",
    "float64",
    "imag",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "iota",
    "len",
    "make",
    "max",
    "min",
    "new",
    "nil",
    "panic",
    "print",
    "println",
    "real",
    "recover",
    "rune",
    "string",
    "true",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

/// Returns true if `name` can be declared as a Go identifier.
#[must_use]
pub fn is_go_identifier(name: &str) -> bool {
    name != "_" && crate::naming::is_identifier(name, &[]) && !KEYWORDS.contains(&name)
}

/// Returns true if `name` can be declared at package scope.
///
/// Predeclared names and `init` are refused on top of [`is_go_identifier`].
#[must_use]
pub fn is_package_identifier(name: &str) -> bool {
    is_go_identifier(name) && name != "init" && !PREDECLARED.contains(&name)
}

/// Aligns rows into tab-indented columns the way gofmt does.
///
/// Every cell but the last is padded to its column's widest cell and
/// followed by a single space; the last cell is never padded.
#[must_use]
pub fn align_rows(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(row.len().saturating_sub(1)) {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let mut output = String::new();
    for row in rows {
        output.push('\t');
        for (idx, cell) in row.iter().enumerate() {
            output.push_str(cell);
            if idx + 1 < row.len() {
                let pad = widths[idx] - cell.chars().count() + 1;
                output.extend(std::iter::repeat_n(' ', pad));
            }
        }
        output.push('\n');
    }
    output
}

/// Quotes a string as a Go interpreted string literal.
#[must_use]
pub fn quote_string(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + 2);
    output.push('"');
    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                output.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
    output
}
