//! Remediation markup mini-language.
//!
//! Catalog remediation text carries placeholder tokens instead of any
//! concrete output syntax: `{br}` line break, `{tab}` indent, paired
//! `{code}`/`{ecode}`, `{b}`/`{eb}`, `{i}`/`{ei}`, and `{link URL}`.
//! Rendering is one generic substitution pass over a per-format table, so a
//! new output format is a new table, not new logic.

use regex::Regex;
use std::sync::LazyLock;

/// Per-format replacements for every markup token. The `link` template may
/// reference `$url`, which expands to the captured target.
pub struct MarkupTable {
    pub line_break: &'static str,
    pub indent: &'static str,
    pub code_open: &'static str,
    pub code_close: &'static str,
    pub bold_open: &'static str,
    pub bold_close: &'static str,
    pub italic_open: &'static str,
    pub italic_close: &'static str,
    pub link: &'static str,
}

pub const PLAIN: MarkupTable = MarkupTable {
    line_break: "\n",
    indent: "    ",
    code_open: "`",
    code_close: "`",
    bold_open: "*",
    bold_close: "*",
    italic_open: "_",
    italic_close: "_",
    link: "$url",
};

pub const HTML: MarkupTable = MarkupTable {
    line_break: "<br>",
    indent: "&nbsp;&nbsp;&nbsp;&nbsp;",
    code_open: "<code>",
    code_close: "</code>",
    bold_open: "<strong>",
    bold_close: "</strong>",
    italic_open: "<em>",
    italic_close: "</em>",
    link: r#"<a href="$url">$url</a>"#,
};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(br|tab|code|ecode|b|eb|i|ei)\}|\{link ([^}\s]+)\}").unwrap());

/// Substitute every markup token in `text` using `table`.
pub fn render(text: &str, table: &MarkupTable) -> String {
    TOKEN
        .replace_all(text, |caps: &regex::Captures| {
            if let Some(tok) = caps.get(1) {
                match tok.as_str() {
                    "br" => table.line_break,
                    "tab" => table.indent,
                    "code" => table.code_open,
                    "ecode" => table.code_close,
                    "b" => table.bold_open,
                    "eb" => table.bold_close,
                    "i" => table.italic_open,
                    "ei" => table.italic_close,
                    _ => unreachable!("token alternation covers every branch"),
                }
                .to_string()
            } else {
                table.link.replace("$url", &caps[2])
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering() {
        let text = "Check {code}--flag{ecode}.{br}{tab}{b}Fix NTP first{eb}.";
        assert_eq!(
            render(text, &PLAIN),
            "Check `--flag`.\n    *Fix NTP first*."
        );
    }

    #[test]
    fn test_html_rendering() {
        let text = "Check {code}--flag{ecode}.{br}{i}soon{ei}";
        assert_eq!(
            render(text, &HTML),
            "Check <code>--flag</code>.<br><em>soon</em>"
        );
    }

    #[test]
    fn test_link_expands_url_in_both_formats() {
        let text = "See {link https://docs.yugabyte.com/x}";
        assert_eq!(render(text, &PLAIN), "See https://docs.yugabyte.com/x");
        assert_eq!(
            render(text, &HTML),
            r#"See <a href="https://docs.yugabyte.com/x">https://docs.yugabyte.com/x</a>"#
        );
    }

    #[test]
    fn test_text_without_tokens_is_untouched() {
        let text = "nothing to substitute here";
        assert_eq!(render(text, &PLAIN), text);
    }

    #[test]
    fn test_unknown_braced_text_is_left_alone() {
        let text = "literal {braces} survive";
        assert_eq!(render(text, &PLAIN), text);
    }

    #[test]
    fn test_every_catalog_remediation_renders_cleanly() {
        // No stray tokens may remain after rendering any builtin entry.
        for sig in crate::signatures::catalog() {
            for table in [&PLAIN, &HTML] {
                let rendered = render(sig.remediation, table);
                for token in ["{br}", "{tab}", "{code}", "{ecode}", "{b}", "{eb}", "{i}", "{ei}", "{link "] {
                    assert!(
                        !rendered.contains(token),
                        "{}: unrendered {token} in {rendered}",
                        sig.name
                    );
                }
            }
        }
    }
}
