use super::*;

#[test]
fn test_usage_lists_every_command() {
    for command in ["parse <file.weft>", "check <file.weft>", "includes <file.weft>"] {
        assert!(USAGE.contains(command), "usage is missing {command}");
    }
}

#[test]
fn test_usage_does_not_promise_render_side_effects() {
    assert!(USAGE.contains("passed through to the renderer"));
    assert!(!USAGE.contains("Remove previous build output"));
    assert!(!USAGE.contains("Substitute placeholder images"));
}

#[test]
fn test_usage_documents_every_option() {
    for flag in ["--source=", "--dest=", "--ext=", "--auto-dir=", "--placeholders", "--clean"] {
        assert!(USAGE.contains(flag), "usage is missing {flag}");
    }
}
