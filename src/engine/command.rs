//! Pure command-line construction. No side effects; the executor is the
//! only place a built command is ever run.

use crate::engine::ScanRequest;
use crate::error::ScanError;
use crate::scanners::{FILES, OPTS};

/// Build the exact command line for a scan request.
///
/// Shape: `<runtime> run --rm -v "<path>":<mount> <image> <tool args>`.
/// The mount source is quoted as a single shell token so paths with
/// spaces survive. File names are treated as already-safe tokens; the
/// builder does not defend against maliciously crafted filenames.
pub fn build(request: &ScanRequest, runtime: &str) -> Result<String, ScanError> {
    let scanner = request.scanner;

    let files = request
        .file_list
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if !request.scan_all && files.is_empty() {
        return Err(ScanError::InvalidRequest(
            "file list is empty but a whole-codebase scan was declined".to_string(),
        ));
    }

    let template = if request.scan_all {
        scanner.whole_tree_args
    } else {
        scanner.file_list_args
    };

    let mut parts: Vec<String> = vec![
        runtime.to_string(),
        "run".to_string(),
        "--rm".to_string(),
        "-v".to_string(),
        format!("{}:{}", quote(&request.code_path), scanner.mount_target),
        scanner.image.to_string(),
    ];

    for token in template {
        if *token == OPTS {
            if !request.extra_args.is_empty() {
                parts.push(request.extra_args.clone());
            }
        } else if *token == FILES {
            parts.push(files.clone());
        } else {
            parts.push((*token).to_string());
        }
    }

    Ok(parts.join(" "))
}

/// Quote a path as a single double-quoted shell token.
fn quote(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len() + 2);
    quoted.push('"');
    for c in path.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanners::lookup;

    fn request(
        scanner: &str,
        scan_all: bool,
        file_list: &[&str],
        extra_args: &str,
    ) -> ScanRequest {
        ScanRequest {
            scanner: lookup(scanner).unwrap(),
            code_path: "/src/app".to_string(),
            scan_all,
            file_list: file_list.iter().map(|f| f.to_string()).collect(),
            extra_args: extra_args.to_string(),
        }
    }

    #[test]
    fn test_whole_tree_never_references_file_list() {
        for name in ["Ruby", "Python", "JavaScript"] {
            let req = request(name, true, &["app/models/user.rb", "ignored.py"], "");
            let cmd = build(&req, "docker").unwrap();
            assert!(!cmd.contains("user.rb"), "{name}: {cmd}");
            assert!(!cmd.contains("ignored.py"), "{name}: {cmd}");
        }
    }

    #[test]
    fn test_file_list_trimmed_joined_in_order() {
        let req = request("Ruby", false, &["  a.rb ", "b.rb", " c.rb"], "");
        let cmd = build(&req, "docker").unwrap();
        assert!(cmd.ends_with("--only-files a.rb b.rb c.rb"), "{cmd}");
        assert_eq!(cmd.matches("a.rb").count(), 1);
    }

    #[test]
    fn test_empty_file_list_is_invalid() {
        let req = request("Python", false, &[], "");
        assert!(matches!(
            build(&req, "docker"),
            Err(ScanError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_whitespace_only_file_list_is_invalid() {
        let req = request("Python", false, &["  ", "\t"], "");
        assert!(matches!(
            build(&req, "docker"),
            Err(ScanError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_brakeman_whole_tree_shape() {
        let req = request("Ruby", true, &[], "");
        let cmd = build(&req, "docker").unwrap();
        assert_eq!(
            cmd,
            "docker run --rm -v \"/src/app\":/code presidentbeef/brakeman --quiet"
        );
    }

    #[test]
    fn test_bandit_whole_tree_recurses_from_mount() {
        let req = request("Python", true, &[], "--skip B101");
        let cmd = build(&req, "docker").unwrap();
        assert_eq!(
            cmd,
            "docker run --rm -v \"/src/app\":/code ghcr.io/pycqa/bandit/bandit -r . --skip B101"
        );
    }

    #[test]
    fn test_bandit_file_list_is_positional() {
        let req = request("Python", false, &["main.py", "util.py"], "");
        let cmd = build(&req, "docker").unwrap();
        assert!(cmd.ends_with("ghcr.io/pycqa/bandit/bandit main.py util.py"), "{cmd}");
    }

    #[test]
    fn test_semgrep_file_list_keeps_options_last() {
        let req = request("JavaScript", false, &["index.js"], "--verbose");
        let cmd = build(&req, "docker").unwrap();
        assert!(
            cmd.ends_with("semgrep/semgrep --config auto --include index.js --verbose"),
            "{cmd}"
        );
    }

    #[test]
    fn test_extra_args_appended_verbatim() {
        let req = request("Ruby", true, &[], "-w 2 --no-pager");
        let cmd = build(&req, "docker").unwrap();
        assert!(cmd.contains("--quiet -w 2 --no-pager"), "{cmd}");
    }

    #[test]
    fn test_empty_extra_args_leave_no_gaps() {
        for name in ["Ruby", "Python", "JavaScript"] {
            let req = request(name, true, &[], "");
            let cmd = build(&req, "docker").unwrap();
            assert!(!cmd.contains("  "), "{name}: {cmd}");
            assert!(!cmd.ends_with(' '), "{name}: {cmd}");
        }
    }

    #[test]
    fn test_path_with_spaces_is_quoted() {
        let mut req = request("Ruby", true, &[], "");
        req.code_path = "/home/dev/my project".to_string();
        let cmd = build(&req, "docker").unwrap();
        assert!(cmd.contains("-v \"/home/dev/my project\":/code"), "{cmd}");
    }

    #[test]
    fn test_path_metacharacters_are_escaped() {
        let mut req = request("Ruby", true, &[], "");
        req.code_path = "/tmp/$weird\"dir".to_string();
        let cmd = build(&req, "docker").unwrap();
        assert!(cmd.contains(r#""/tmp/\$weird\"dir""#), "{cmd}");
    }

    #[test]
    fn test_runtime_binary_is_interchangeable() {
        let req = request("JavaScript", true, &[], "");
        let cmd = build(&req, "podman").unwrap();
        assert!(cmd.starts_with("podman run --rm"), "{cmd}");
    }
}
