use super::*;

const STYLE: &str = "<style>x</style>";

#[test]
fn inserts_after_root_open_tag() {
    let svg = r#"<?xml version="1.0"?><svg width="10" height="10"><rect id="cell-a"/></svg>"#;
    let out = inject_style(svg, STYLE).unwrap();
    assert_eq!(
        out,
        r#"<?xml version="1.0"?><svg width="10" height="10"><style>x</style><rect id="cell-a"/></svg>"#
    );
}

#[test]
fn bare_svg_tag() {
    assert_eq!(
        inject_style("<svg></svg>", STYLE).unwrap(),
        "<svg><style>x</style></svg>"
    );
}

#[test]
fn multiline_open_tag() {
    let svg = "<svg\n  xmlns=\"http://www.w3.org/2000/svg\"\n  viewBox=\"0 0 1 1\"\n>\n</svg>";
    let at = insertion_point(svg).unwrap();
    assert_eq!(&svg[at - 1..at], ">");
    assert_eq!(&svg[at..], "\n</svg>");
}

#[test]
fn quoted_gt_does_not_end_the_tag() {
    let svg = r#"<svg data-x="a>b" data-y='c>d'><g/></svg>"#;
    let out = inject_style(svg, STYLE).unwrap();
    assert_eq!(
        out,
        r#"<svg data-x="a>b" data-y='c>d'><style>x</style><g/></svg>"#
    );
}

#[test]
fn only_first_svg_tag_is_used() {
    let svg = "<svg><svg></svg></svg>";
    assert_eq!(
        inject_style(svg, STYLE).unwrap(),
        "<svg><style>x</style><svg></svg></svg>"
    );
}

#[test]
fn longer_tag_names_are_skipped() {
    let svg = "<svgx></svgx><svg id=\"r\"></svg>";
    assert_eq!(
        inject_style(svg, STYLE).unwrap(),
        "<svgx></svgx><svg id=\"r\"><style>x</style></svg>"
    );
}

#[test]
fn missing_svg_tag_is_an_injection_error() {
    for doc in ["", "<html><body/></html>", "plain text", "<SVG></SVG>"] {
        assert!(
            matches!(inject_style(doc, STYLE), Err(KeyframeError::Injection(_))),
            "accepted {doc:?}"
        );
    }
}

#[test]
fn unterminated_tag_is_an_injection_error() {
    let err = inject_style("<svg width=\"10\"", STYLE).unwrap_err();
    assert!(err.to_string().contains("never closed"));
    assert!(inject_style("<svg", STYLE).is_err());
    assert!(inject_style("<svg title=\"oops>", STYLE).is_err());
}

#[test]
fn self_closing_root_is_rejected() {
    let err = inject_style("<svg width=\"1\"/>", STYLE).unwrap_err();
    assert!(matches!(err, KeyframeError::Injection(_)));
    assert!(err.to_string().contains("self-closing"));
}
