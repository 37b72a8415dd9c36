//! Rendering of generated command lists for the CLI.

use crate::error::Result;
use crate::types::OutputFormat;

/// Render `cmds` in the requested format. The result always ends with a newline.
pub fn render(cmds: &[String], format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Lines => cmds.join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(cmds)?,
        OutputFormat::Script => {
            let mut script = String::from("#!/bin/sh\nset -e\n");
            script.push_str(&cmds.join("\n"));
            script
        }
    };
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmds() -> Vec<String> {
        vec!["echo one".to_string(), "echo \"two\"".to_string()]
    }

    #[test]
    fn test_render_lines() {
        assert_eq!(
            render(&cmds(), OutputFormat::Lines).expect("render"),
            "echo one\necho \"two\"\n"
        );
    }

    #[test]
    fn test_render_json() {
        let out = render(&cmds(), OutputFormat::Json).expect("render");
        let parsed: Vec<String> = serde_json::from_str(&out).expect("valid json");
        assert_eq!(parsed, cmds());
    }

    #[test]
    fn test_render_script() {
        let out = render(&cmds(), OutputFormat::Script).expect("render");
        assert!(out.starts_with("#!/bin/sh\nset -e\necho one\n"));
    }
}
