use crate::analyzer::FileAnalysis;
use crate::reporter::markup;
use crate::reporter::Reporter;
use crate::signatures::Signature;

pub struct HtmlReporter;

impl HtmlReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for HtmlReporter {
    fn header(&self, generated_at: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>YugabyteDB Log Triage Report</title>
    <style>
        :root {{
            --accent: #2563eb;
            --muted: #6b7280;
            --clean: #16a34a;
        }}

        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            background: #f3f4f6;
            padding: 2rem;
        }}

        .container {{
            max-width: 1200px;
            margin: 0 auto;
        }}

        .header {{
            background: white;
            border-radius: 12px;
            padding: 2rem;
            margin-bottom: 2rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .header h1 {{
            font-size: 1.75rem;
            margin-bottom: 0.5rem;
        }}

        .header .meta {{
            color: var(--muted);
            font-size: 0.875rem;
        }}

        .file-section {{
            background: white;
            border-radius: 12px;
            padding: 2rem;
            margin-bottom: 2rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .file-section h2 {{
            font-size: 1.25rem;
            margin-bottom: 1rem;
        }}

        .file-section h2 code {{
            background: #f3f4f6;
            padding: 0.125rem 0.375rem;
            border-radius: 4px;
        }}

        table {{
            width: 100%;
            border-collapse: collapse;
        }}

        th, td {{
            text-align: left;
            padding: 0.5rem 0.75rem;
            border-bottom: 1px solid #e5e7eb;
        }}

        th {{
            color: var(--muted);
            font-size: 0.75rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
        }}

        td.count {{
            font-weight: 600;
            color: var(--accent);
        }}

        .malformed-note {{
            margin-top: 0.75rem;
            color: var(--muted);
            font-size: 0.875rem;
        }}

        .clean-files {{
            background: white;
            border-radius: 12px;
            padding: 2rem;
            margin-bottom: 2rem;
            border-left: 4px solid var(--clean);
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .tips {{
            background: white;
            border-radius: 12px;
            padding: 2rem;
            margin-bottom: 2rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .tip {{
            padding: 1rem 0;
            border-bottom: 1px solid #e5e7eb;
        }}

        .tip:last-child {{
            border-bottom: none;
        }}

        .tip h3 {{
            margin-bottom: 0.5rem;
        }}

        .tip code {{
            background: #f3f4f6;
            padding: 0.125rem 0.375rem;
            border-radius: 4px;
        }}

        .footer {{
            text-align: center;
            color: var(--muted);
            font-size: 0.875rem;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>YugabyteDB Log Triage Report</h1>
            <div class="meta">Generated at {} by logtriage v{}</div>
        </div>
"#,
            html_escape(generated_at),
            env!("CARGO_PKG_VERSION")
        )
    }

    fn file_section(&self, analysis: &FileAnalysis) -> String {
        let rows: String = analysis
            .hits
            .iter()
            .map(|hit| {
                format!(
                    r#"
                <tr>
                    <td class="count">{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                </tr>"#,
                    hit.record.count,
                    html_escape(hit.name),
                    html_escape(hit.record.first_seen.as_deref().unwrap_or("")),
                    html_escape(hit.record.last_seen.as_deref().unwrap_or("")),
                )
            })
            .collect();

        let malformed_note = if analysis.malformed_lines > 0 {
            format!(
                r#"<div class="malformed-note">{} matching line(s) carried no parseable timestamp</div>"#,
                analysis.malformed_lines
            )
        } else {
            String::new()
        };

        format!(
            r#"
        <div class="file-section">
            <h2>Analysis of <code>{}</code></h2>
            <table>
                <tr>
                    <th>Occurrences</th>
                    <th>Message</th>
                    <th>First Occurrence</th>
                    <th>Last Occurrence</th>
                </tr>{}
            </table>
            {}
        </div>
"#,
            html_escape(&analysis.file),
            rows,
            malformed_note
        )
    }

    fn clean_files_section(&self, files: &[String]) -> String {
        if files.is_empty() {
            return String::new();
        }
        let items: String = files
            .iter()
            .map(|f| format!("<li><code>{}</code></li>", html_escape(f)))
            .collect();
        format!(
            r#"
        <div class="clean-files">
            <h2>No known issues found in</h2>
            <ul>{items}</ul>
        </div>
"#
        )
    }

    fn tips_appendix(&self, signatures: &[&'static Signature]) -> String {
        if signatures.is_empty() {
            return String::new();
        }
        let tips: String = signatures
            .iter()
            .map(|sig| {
                format!(
                    r#"
            <div class="tip">
                <h3>{}</h3>
                <p>{}</p>
            </div>"#,
                    html_escape(sig.name),
                    markup::render(&html_escape(sig.remediation), &markup::HTML)
                )
            })
            .collect();
        format!(
            r#"
        <div class="tips">
            <h2>Troubleshooting tips</h2>{tips}
        </div>
"#
        )
    }

    fn footer(&self) -> String {
        format!(
            r#"
        <div class="footer">
            Generated by logtriage v{}
        </div>
    </div>
</body>
</html>
"#,
            env!("CARGO_PKG_VERSION")
        )
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
